//! # Unified Configuration System
//!
//! Configuration for the host shell, the tunable constants of the light
//! animators, and the default scene seeded at initialization.
//!
//! ## Configuration Categories
//!
//! - **Engine Config**: Logging level and the host loop's timestep, frame count and screen size
//! - **Lighting Config**: Explosion decay/power curve, torch flicker defaults, noise seeding
//! - **Scene Config**: Static lights and torches created by `LightingSystem::initialize`
//!
//! Every default reproduces the built-in behavior, so an empty config file is valid.

use serde::{Serialize, Deserialize};

use crate::config::{Config, ConfigError};

/// # Engine Configuration
///
/// Host-shell behavior: logging and the fixed-step frame loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
    /// Seconds advanced per simulated frame
    pub fixed_timestep: f32,
    /// Number of frames the host loop runs before exiting
    pub frame_count: u32,
    /// Initial render target size in pixels (width, height)
    pub screen_size: [f32; 2],
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            fixed_timestep: 1.0 / 60.0,
            frame_count: 600,
            screen_size: [800.0, 600.0],
        }
    }

    /// Set log level
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set the fixed timestep
    #[must_use]
    pub fn with_fixed_timestep(mut self, seconds: f32) -> Self {
        self.fixed_timestep = seconds;
        self
    }

    /// Validate the host loop settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fixed_timestep > 0.0 && self.fixed_timestep.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "fixed_timestep must be positive, got {}", self.fixed_timestep
            )));
        }
        if self.screen_size.iter().any(|v| !(*v > 0.0)) {
            return Err(ConfigError::Invalid(format!(
                "screen_size must be positive, got {:?}", self.screen_size
            )));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Explosion Tuning
///
/// Shape of the explosion flash: brightness decays as `exp(decay_rate * t)`
/// while reach grows as `power_base * t`, with `t` the normalized age.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplosionTuning {
    /// Exponential brightness decay rate (negative)
    pub decay_rate: f32,
    /// Attenuation power reached at the end of the explosion
    pub power_base: f32,
}

impl Default for ExplosionTuning {
    fn default() -> Self {
        Self {
            decay_rate: -5.0,
            power_base: 500.0,
        }
    }
}

/// # Torch Defaults
///
/// Flicker parameters applied to torches whose spawn options leave them unset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorchDefaults {
    /// Base RGB color (warm amber)
    pub color: [f32; 3],
    /// Noise traversal speed along the time axis
    pub speed: f32,
    /// Flicker amplitude in `[0, 0.95]`
    pub amplitude: f32,
    /// Exponential smoothing factor in `(0, 1]`
    pub smoothing: f32,
}

impl Default for TorchDefaults {
    fn default() -> Self {
        Self {
            color: [1.0, 0.6, 0.2],
            speed: 2.0,
            amplitude: 0.35,
            smoothing: 0.2,
        }
    }
}

/// # Lighting Configuration
///
/// Tunable constants of the light animators.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    /// Explosion flash curve
    pub explosion: ExplosionTuning,
    /// Torch flicker defaults
    pub torch: TorchDefaults,
    /// Seed for torch noise seeds; `None` seeds from entropy
    pub noise_seed: Option<u64>,
}

impl LightingConfig {
    /// Use a fixed noise seed so torch flicker is reproducible
    #[must_use]
    pub fn with_noise_seed(mut self, seed: u64) -> Self {
        self.noise_seed = Some(seed);
        self
    }

    /// Validate tuning ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.explosion.decay_rate.is_finite() || self.explosion.decay_rate > 0.0 {
            return Err(ConfigError::Invalid(format!(
                "explosion.decay_rate must be finite and non-positive, got {}",
                self.explosion.decay_rate
            )));
        }
        if !(self.explosion.power_base >= 0.0 && self.explosion.power_base.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "explosion.power_base must be finite and non-negative, got {}",
                self.explosion.power_base
            )));
        }
        if !(0.0..=0.95).contains(&self.torch.amplitude) {
            return Err(ConfigError::Invalid(format!(
                "torch.amplitude must be in [0, 0.95], got {}", self.torch.amplitude
            )));
        }
        if !(self.torch.smoothing > 0.0 && self.torch.smoothing <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "torch.smoothing must be in (0, 1], got {}", self.torch.smoothing
            )));
        }
        if !self.torch.speed.is_finite() {
            return Err(ConfigError::Invalid("torch.speed must be finite".to_string()));
        }
        Ok(())
    }
}

/// A static light in the default scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaticLightDesc {
    /// Screen position in pixels
    pub position: [f32; 2],
    /// User-facing brightness, 0..100
    pub power: f32,
    /// RGB diffuse color
    #[serde(default = "white")]
    pub diffuse: [f32; 3],
}

/// A torch in the default scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorchDesc {
    /// Screen position in pixels
    pub position: [f32; 2],
    /// User-facing brightness, 0..100
    pub intensity: f32,
    /// Seconds until the torch freezes; `<= 0` never freezes
    #[serde(default)]
    pub duration: f32,
    /// Keep flickering regardless of duration
    #[serde(default)]
    pub infinite: Option<bool>,
    /// Color brightness factor in `[0, 1]`
    #[serde(default)]
    pub brightness: Option<f32>,
    /// Overrides the default torch color
    #[serde(default)]
    pub diffuse: Option<[f32; 3]>,
}

fn white() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

/// # Scene Configuration
///
/// Lights created by `LightingSystem::initialize`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Static lights, in upload order
    pub static_lights: Vec<StaticLightDesc>,
    /// Torches, in upload order
    pub torches: Vec<TorchDesc>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            static_lights: vec![
                StaticLightDesc { position: [200.0, 150.0], power: 70.0, diffuse: [1.0, 0.95, 0.85] },
                StaticLightDesc { position: [600.0, 200.0], power: 60.0, diffuse: [0.4, 0.6, 1.0] },
                StaticLightDesc { position: [400.0, 480.0], power: 55.0, diffuse: [1.0, 0.3, 0.3] },
            ],
            torches: vec![TorchDesc {
                position: [400.0, 300.0],
                intensity: 75.0,
                duration: 0.0,
                infinite: Some(true),
                brightness: None,
                diffuse: None,
            }],
        }
    }
}

impl SceneConfig {
    /// A scene with no default lights
    pub fn empty() -> Self {
        Self {
            static_lights: Vec::new(),
            torches: Vec::new(),
        }
    }
}

/// # Complete Application Configuration
///
/// Top-level configuration that encompasses all subsystems.
/// This is the main configuration structure applications should use.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Host shell configuration
    pub engine: EngineConfig,
    /// Light animator tuning
    pub lighting: LightingConfig,
    /// Default scene
    pub scene: SceneConfig,
}

impl ApplicationConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()?;
        self.lighting.validate()?;
        Ok(())
    }
}

impl Config for ApplicationConfig {}
