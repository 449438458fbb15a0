//! # Lighting Engine
//!
//! Dynamic 2D point lights for a fixed fragment shader, synchronized once
//! per frame.
//!
//! ## Features
//!
//! - **Static Lights**: host-placed lights on a 0..100 brightness scale
//! - **Explosions**: short flashes that fade out and widen, then expire
//! - **Torches**: noise-driven flicker that can freeze when its duration ends
//! - **Frame Sync**: packs every light into the shader's 64-slot array each frame
//! - **Backend Seam**: any graphics API behind the [`render::ShadingBackend`] trait
//! - **Config Files**: tuning and the default scene loaded from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lighting_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApplicationConfig::load_or_default("lighting.toml")?;
//!     let mut backend = RecordingBackend::new();
//!     let mut lighting = LightingSystem::from_config(&config)?;
//!     lighting.initialize(&mut backend)?;
//!
//!     lighting.spawn_explosion(Vec2::new(120.0, 80.0), 100.0, 0.5, None);
//!     let stats = lighting.update(&mut backend, 1.0 / 60.0);
//!     println!("{} lights uploaded", stats.uploaded());
//!
//!     lighting.teardown(&mut backend);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;
pub mod config;

pub mod foundation;
pub mod render;
pub mod lighting;

/// Common imports for lighting users
pub mod prelude {
    pub use crate::{
        core::config::{ApplicationConfig, EngineConfig, LightingConfig, SceneConfig},
        config::{Config, ConfigError},
        foundation::math::{Vec2, Vec3},
        lighting::{
            FrameStats, LightingError, LightingState, LightingSystem, StaticLight, TorchOptions,
        },
        render::{RecordingBackend, RenderError, ShaderHandle, ShadingBackend, MAX_LIGHTS},
    };
}
