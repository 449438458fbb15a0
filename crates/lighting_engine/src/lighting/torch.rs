//! Torch animation
//!
//! Torch brightness follows smooth value noise around the torch's brightness
//! factor and is exponentially smoothed between ticks; attenuation power gets
//! a small independent jitter. A finite torch freezes once its duration runs
//! out and keeps its last look from then on.

use crate::foundation::math::clamp_unit;
use crate::foundation::noise::value_noise;
use crate::render::LightUniform;
use super::light::Torch;

/// Noise-space offset between the brightness and power channels
const POWER_CHANNEL_OFFSET: f32 = 123.456;

/// The power channel moves at half the brightness channel's rate
const POWER_CHANNEL_RATE: f32 = 0.5;

const POWER_JITTER_MIN: f32 = 0.9;
const POWER_JITTER_RANGE: f32 = 0.2;

impl Torch {
    /// Advance the torch's age and re-evaluate freezing
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
        self.update_frozen();
    }

    /// Apply the freeze rule
    ///
    /// Infinite torches always thaw. Otherwise a torch with a positive
    /// duration freezes once `elapsed >= duration` and stays frozen.
    pub fn update_frozen(&mut self) {
        if self.infinite {
            self.frozen = false;
        } else if self.duration > 0.0 && self.elapsed >= self.duration {
            self.frozen = true;
        }
    }

    /// Brightness a torch rests at when it froze before ever being animated
    pub fn resting_brightness(&self) -> f32 {
        self.brightness * (1.0 - self.amplitude)
    }

    /// Step the flicker and return this tick's shader record
    ///
    /// `seed` is only called the first time a live torch is animated; the
    /// value is kept for the rest of the torch's life.
    pub fn animate(&mut self, seed: impl FnOnce() -> f32) -> LightUniform {
        self.update_frozen();

        if self.frozen {
            let resting = self.resting_brightness();
            self.last_brightness.get_or_insert(resting);
            self.last_power.get_or_insert(self.base_power);
        } else {
            let seed = *self.noise_seed.get_or_insert_with(seed);
            let time = self.elapsed * self.speed;
            let flicker_noise = value_noise(seed, time);
            let power_noise = value_noise(seed + POWER_CHANNEL_OFFSET, time * POWER_CHANNEL_RATE);

            let flicker = 1.0 - self.amplitude + 2.0 * self.amplitude * flicker_noise;
            let target = self.brightness * flicker;
            let brightness = match self.last_brightness {
                Some(last) => last + (target - last) * self.smoothing,
                None => target,
            };

            self.last_brightness = Some(brightness);
            self.last_power = Some(self.base_power * (POWER_JITTER_MIN + POWER_JITTER_RANGE * power_noise));
        }

        self.to_uniform()
    }

    /// Shader record from the last animated state, without stepping
    pub fn to_uniform(&self) -> LightUniform {
        let brightness = clamp_unit(self.last_brightness.unwrap_or_else(|| self.resting_brightness()));
        LightUniform::new(
            self.position,
            self.base_color * brightness,
            self.last_power.unwrap_or(self.base_power),
        )
    }
}
