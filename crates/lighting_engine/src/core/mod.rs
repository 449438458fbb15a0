//! # Core Engine Module
//!
//! Shared configuration types used by the lighting subsystem and by host
//! applications that drive it.
//!
//! ## Organization
//!
//! - **Config**: Unified configuration for the host shell, light tuning and the default scene

pub mod config;

// Re-export commonly used config types
pub use config::{
    ApplicationConfig,
    EngineConfig,
    LightingConfig,
    ExplosionTuning,
    TorchDefaults,
    SceneConfig,
    StaticLightDesc,
    TorchDesc,
};
pub use crate::config::{Config, ConfigError};
