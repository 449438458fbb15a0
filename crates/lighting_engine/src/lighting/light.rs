//! Light records
//!
//! Three kinds of light share the shader's slot array:
//! - [`StaticLight`]: lives until removed, edited freely by the host
//! - [`Explosion`]: a flash that expands and fades, removed when its duration runs out
//! - [`Torch`]: a flickering light that may freeze after a duration but is never removed automatically
//!
//! Constructors clamp every out-of-range input instead of rejecting it.

use crate::core::config::TorchDefaults;
use crate::foundation::math::{clamp_color, clamp_unit, Vec2, Vec3, WHITE};
use super::power::map_power;

/// Shortest explosion duration in seconds
pub const MIN_EXPLOSION_DURATION: f32 = 0.01;

/// Largest torch flicker amplitude
pub const MAX_TORCH_AMPLITUDE: f32 = 0.95;

/// Smallest torch smoothing factor
pub const MIN_TORCH_SMOOTHING: f32 = 0.001;

fn clamp_percent(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// A light that stays until removed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticLight {
    /// Screen position in pixels
    pub position: Vec2,
    /// RGB color in `[0, 1]`
    pub diffuse: Vec3,
    /// User-facing brightness, 0..100
    pub power: f32,
}

impl StaticLight {
    /// Create a static light, clamping power to 0..100 and color to `[0, 1]`
    pub fn new(position: Vec2, power: f32, diffuse: Vec3) -> Self {
        Self {
            position,
            diffuse: clamp_color(diffuse),
            power: clamp_percent(power),
        }
    }

    /// Create a white static light
    pub fn white(position: Vec2, power: f32) -> Self {
        Self::new(position, power, WHITE)
    }

    /// Attenuation coefficient the shader receives
    pub fn attenuation(&self) -> f32 {
        map_power(self.power)
    }
}

/// A transient flash
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Explosion {
    /// Screen position in pixels
    pub position: Vec2,
    /// RGB color in `[0, 1]`
    pub diffuse: Vec3,
    /// Peak brightness in `[0, 1]`
    pub intensity: f32,
    /// Lifetime in seconds, at least [`MIN_EXPLOSION_DURATION`]
    pub duration: f32,
    /// Seconds since spawn
    pub elapsed: f32,
}

impl Explosion {
    /// Create an explosion from a 0..100 intensity and a duration in seconds
    pub fn new(position: Vec2, intensity_percent: f32, duration: f32, diffuse: Vec3) -> Self {
        Self {
            position,
            diffuse: clamp_color(diffuse),
            intensity: clamp_percent(intensity_percent) / 100.0,
            // f32::max also maps NaN to the floor
            duration: duration.max(MIN_EXPLOSION_DURATION),
            elapsed: 0.0,
        }
    }
}

/// Optional settings for [`Torch`] spawning
///
/// Unset fields fall back to [`TorchDefaults`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TorchOptions {
    /// Base RGB color
    pub diffuse: Option<Vec3>,
    /// Never freeze, regardless of duration
    pub infinite: Option<bool>,
    /// Color brightness factor in `[0, 1]`
    pub brightness: Option<f32>,
    /// Fallback for `brightness`
    pub intensity: Option<f32>,
    /// Noise traversal speed
    pub speed: Option<f32>,
    /// Flicker amplitude in `[0, 0.95]`
    pub amplitude: Option<f32>,
    /// Smoothing factor in `(0, 1]`
    pub smoothing: Option<f32>,
}

impl TorchOptions {
    /// Set the base color
    #[must_use]
    pub fn with_diffuse(mut self, diffuse: Vec3) -> Self {
        self.diffuse = Some(diffuse);
        self
    }

    /// Set the infinite flag
    #[must_use]
    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.infinite = Some(infinite);
        self
    }

    /// Set the color brightness factor
    #[must_use]
    pub fn with_brightness(mut self, brightness: f32) -> Self {
        self.brightness = Some(brightness);
        self
    }

    /// Set flicker speed, amplitude and smoothing together
    #[must_use]
    pub fn with_flicker(mut self, speed: f32, amplitude: f32, smoothing: f32) -> Self {
        self.speed = Some(speed);
        self.amplitude = Some(amplitude);
        self.smoothing = Some(smoothing);
        self
    }
}

/// A flickering light
#[derive(Debug, Clone, PartialEq)]
pub struct Torch {
    /// Screen position in pixels
    pub position: Vec2,
    /// Attenuation before jitter, precomputed from the 0..100 intensity
    pub base_power: f32,
    /// Color brightness factor in `[0, 1]`
    pub brightness: f32,
    /// RGB color before brightness is applied
    pub base_color: Vec3,
    /// Seconds until the torch freezes; `<= 0` never freezes
    pub duration: f32,
    /// Seconds since spawn
    pub elapsed: f32,
    /// Noise coordinate offset, assigned on first animation
    pub noise_seed: Option<f32>,
    /// Noise traversal speed
    pub speed: f32,
    /// Flicker amplitude in `[0, 0.95]`
    pub amplitude: f32,
    /// Smoothing factor in `(0, 1]`
    pub smoothing: f32,
    /// Never freeze; setting this on a frozen torch thaws it next tick
    pub infinite: bool,
    /// Holding its last visual state
    pub frozen: bool,
    /// Smoothed brightness from the last animated tick
    pub last_brightness: Option<f32>,
    /// Jittered attenuation from the last animated tick
    pub last_power: Option<f32>,
}

impl Torch {
    /// Create a torch from a 0..100 intensity and a duration in seconds
    pub fn new(
        position: Vec2,
        intensity_percent: f32,
        duration: f32,
        options: &TorchOptions,
        defaults: &TorchDefaults,
    ) -> Self {
        let brightness = options.brightness.or(options.intensity).map_or(1.0, clamp_unit);
        let base_color = clamp_color(
            options
                .diffuse
                .unwrap_or_else(|| Vec3::new(defaults.color[0], defaults.color[1], defaults.color[2])),
        );
        let amplitude = options.amplitude.unwrap_or(defaults.amplitude);
        let smoothing = options.smoothing.unwrap_or(defaults.smoothing);
        let speed = options.speed.unwrap_or(defaults.speed);
        let duration = if duration.is_nan() { 0.0 } else { duration };

        Self {
            position,
            base_power: map_power(clamp_percent(intensity_percent)),
            brightness,
            base_color,
            duration,
            elapsed: 0.0,
            noise_seed: None,
            speed: if speed.is_finite() { speed } else { defaults.speed },
            amplitude: if amplitude.is_nan() { 0.0 } else { amplitude.clamp(0.0, MAX_TORCH_AMPLITUDE) },
            smoothing: if smoothing.is_nan() { 1.0 } else { smoothing.clamp(MIN_TORCH_SMOOTHING, 1.0) },
            infinite: options.infinite.unwrap_or(duration <= 0.0),
            frozen: false,
            last_brightness: None,
            last_power: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_explosion_clamps_inputs() {
        let e = Explosion::new(Vec2::new(1.0, 2.0), 150.0, -5.0, Vec3::new(2.0, -1.0, 0.5));
        assert_eq!(e.intensity, 1.0);
        assert_eq!(e.duration, MIN_EXPLOSION_DURATION);
        assert_eq!(e.diffuse, Vec3::new(1.0, 0.0, 0.5));
        assert_eq!(e.elapsed, 0.0);

        let e = Explosion::new(Vec2::zeros(), -20.0, 0.25, WHITE);
        assert_eq!(e.intensity, 0.0);
        assert_eq!(e.duration, 0.25);
    }

    #[test]
    fn test_explosion_intensity_is_fraction_of_percent() {
        let e = Explosion::new(Vec2::zeros(), 40.0, 1.0, WHITE);
        assert_relative_eq!(e.intensity, 0.4);
    }

    #[test]
    fn test_torch_brightness_precedence() {
        let defaults = TorchDefaults::default();
        let both = TorchOptions { brightness: Some(0.3), intensity: Some(0.8), ..TorchOptions::default() };
        let only_intensity = TorchOptions { intensity: Some(0.8), ..TorchOptions::default() };
        let over = TorchOptions::default().with_brightness(4.0);

        assert_eq!(Torch::new(Vec2::zeros(), 50.0, 0.0, &both, &defaults).brightness, 0.3);
        assert_eq!(Torch::new(Vec2::zeros(), 50.0, 0.0, &only_intensity, &defaults).brightness, 0.8);
        assert_eq!(Torch::new(Vec2::zeros(), 50.0, 0.0, &TorchOptions::default(), &defaults).brightness, 1.0);
        assert_eq!(Torch::new(Vec2::zeros(), 50.0, 0.0, &over, &defaults).brightness, 1.0);
    }

    #[test]
    fn test_torch_defaults_and_power() {
        let defaults = TorchDefaults::default();
        let torch = Torch::new(Vec2::new(5.0, 5.0), 70.0, 3.0, &TorchOptions::default(), &defaults);
        assert_relative_eq!(torch.base_power, map_power(70.0));
        assert_eq!(torch.base_color, Vec3::new(1.0, 0.6, 0.2));
        assert_eq!(torch.speed, 2.0);
        assert_eq!(torch.amplitude, 0.35);
        assert_eq!(torch.smoothing, 0.2);
        assert_eq!(torch.duration, 3.0);
        assert!(!torch.infinite);
        assert!(!torch.frozen);
        assert!(torch.noise_seed.is_none());
        assert!(torch.last_brightness.is_none() && torch.last_power.is_none());
    }

    #[test]
    fn test_torch_without_duration_is_infinite() {
        let defaults = TorchDefaults::default();
        let torch = Torch::new(Vec2::zeros(), 50.0, 0.0, &TorchOptions::default(), &defaults);
        assert!(torch.infinite);
        let forced = Torch::new(Vec2::zeros(), 50.0, 5.0, &TorchOptions::default().with_infinite(true), &defaults);
        assert!(forced.infinite);
    }

    #[test]
    fn test_torch_clamps_flicker_options() {
        let defaults = TorchDefaults::default();
        let options = TorchOptions::default().with_flicker(3.0, 2.0, 0.0);
        let torch = Torch::new(Vec2::zeros(), 150.0, 1.0, &options, &defaults);
        assert_eq!(torch.amplitude, MAX_TORCH_AMPLITUDE);
        assert_eq!(torch.smoothing, MIN_TORCH_SMOOTHING);
        assert_eq!(torch.speed, 3.0);
        assert_eq!(torch.base_power, 0.0);
    }

    #[test]
    fn test_static_light_clamps() {
        let light = StaticLight::new(Vec2::zeros(), 140.0, Vec3::new(1.5, 0.5, -0.2));
        assert_eq!(light.power, 100.0);
        assert_eq!(light.diffuse, Vec3::new(1.0, 0.5, 0.0));
        assert_eq!(light.attenuation(), 0.0);
    }
}
