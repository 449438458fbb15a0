//! # Lighting Subsystem
//!
//! Dynamic 2D point lights fed to a fragment shader every frame.
//!
//! ## Organization
//!
//! - **Power**: 0..100 brightness to attenuation mapping
//! - **Light**: static lights, explosions and torches
//! - **Explosion / Torch**: per-kind animation
//! - **Store**: the three ordered collections
//! - **Slots**: packing records into the shader's fixed light array
//! - **System**: [`LightingSystem`], the owned subsystem that ties them together each frame
//!
//! Upload order is static lights, then explosions (oldest first), then
//! torches. When the shader's array is full, later lights are left out for
//! that frame.

pub mod power;
pub mod light;
pub mod explosion;
pub mod torch;
pub mod store;
pub mod slots;
pub mod system;

pub use power::map_power;
pub use light::{Explosion, StaticLight, Torch, TorchOptions};
pub use store::{LightStore, StoreError};
pub use slots::{FrameStats, SlotWriter};
pub use system::{LightingState, LightingSystem};

use thiserror::Error;

use crate::config::ConfigError;
use crate::render::RenderError;

/// Lighting subsystem errors
#[derive(Error, Debug)]
pub enum LightingError {
    /// The shader could not be compiled; the subsystem stays unusable
    #[error("Lighting initialization failed: {0}")]
    Initialization(#[from] RenderError),

    /// `initialize` was called on a subsystem that is already running
    #[error("Lighting system is already initialized")]
    AlreadyInitialized,

    /// Tuning values out of range
    #[error("Invalid lighting configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
