//! Math utilities and types
//!
//! 2D lighting only needs positions and RGB colors, so the aliases here are
//! thin names over `nalgebra` vectors.

pub use nalgebra::{Vector2, Vector3};

/// 2D vector type (light positions, screen size)
pub type Vec2 = Vector2<f32>;

/// 3D vector type (RGB colors)
pub type Vec3 = Vector3<f32>;

/// Opaque white, the default diffuse color for static lights and explosions
pub const WHITE: Vec3 = Vec3::new(1.0, 1.0, 1.0);

/// Clamp a scalar into `[0, 1]`
///
/// NaN inputs collapse to `0.0` so a bad value can never reach the shader.
pub fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Clamp each channel of a color into `[0, 1]`
pub fn clamp_color(color: Vec3) -> Vec3 {
    color.map(clamp_unit)
}

/// Hermite smoothstep on `[0, 1]`
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Linear interpolation between two values
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
