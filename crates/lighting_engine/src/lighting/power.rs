//! User brightness to shader attenuation mapping
//!
//! Hosts describe lights on a 0..100 brightness scale. The shader wants an
//! inverse-square attenuation coefficient where larger means dimmer, so the
//! scale is mapped through a falling exponential.

/// Attenuation returned for brightness below [`MIN_VISIBLE_POWER`]
pub const DARK_ATTENUATION: f32 = 10_000.0;

/// Brightness under which a light is treated as practically dark
pub const MIN_VISIBLE_POWER: f32 = 1.0;

/// Brightness above which a light has no falloff at all
pub const FULL_BRIGHT_POWER: f32 = 99.9;

const FALLOFF_RATE: f32 = -0.083;

/// Map a 0..100 brightness to an attenuation coefficient
///
/// `map_power(70.0)` is about 30; the curve is non-increasing over the whole
/// range and total over every input (NaN maps to the dark end).
pub fn map_power(user_power: f32) -> f32 {
    if user_power.is_nan() || user_power < MIN_VISIBLE_POWER {
        DARK_ATTENUATION
    } else if user_power > FULL_BRIGHT_POWER {
        0.0
    } else {
        DARK_ATTENUATION * (FALLOFF_RATE * user_power).exp()
    }
}
