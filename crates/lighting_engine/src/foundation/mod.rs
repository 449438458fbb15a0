//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Math types and clamping helpers
//! - Smooth value noise for procedural flicker
//! - Logging utilities

pub mod math;
pub mod noise;
pub mod logging;
