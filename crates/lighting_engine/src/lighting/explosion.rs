//! Explosion animation
//!
//! An explosion is a flash whose brightness decays exponentially while its
//! reach (attenuation power) grows linearly, so it reads as a burst that
//! expands and fades rather than one that shrinks.

use crate::core::config::ExplosionTuning;
use crate::render::LightUniform;
use super::light::Explosion;

/// Brightness under which an explosion uploads pure black
pub const BRIGHTNESS_CUTOFF: f32 = 0.001;

impl Explosion {
    /// Advance the explosion's age
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Whether the explosion has run its full duration
    pub fn is_expired(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Remaining lifetime in seconds
    pub fn remaining(&self) -> f32 {
        (self.duration - self.elapsed).max(0.0)
    }

    /// Normalized age in `[0, 1]`
    pub fn progress(&self) -> f32 {
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Brightness at the current age
    pub fn brightness(&self, tuning: &ExplosionTuning) -> f32 {
        let brightness = self.intensity * (tuning.decay_rate * self.progress()).exp();
        if brightness < BRIGHTNESS_CUTOFF {
            0.0
        } else {
            brightness
        }
    }

    /// Attenuation power at the current age
    pub fn power(&self, tuning: &ExplosionTuning) -> f32 {
        tuning.power_base * self.progress()
    }

    /// Shader record for the current age
    pub fn to_uniform(&self, tuning: &ExplosionTuning) -> LightUniform {
        LightUniform::new(
            self.position,
            self.diffuse * self.brightness(tuning),
            self.power(tuning),
        )
    }
}
