//! Uniform data pushed to the shading backend
//!
//! [`LightUniform`] mirrors one entry of the shader's `lights[]` array,
//! laid out with the std140 rules for `struct Light { vec2; vec3; float; }`
//! so the whole array can be handed to buffer-based backends as bytes.

use bytemuck::{Pod, Zeroable};

use crate::foundation::math::{Vec2, Vec3};
use super::shader_source::{
    MAX_LIGHTS, LIGHTS_UNIFORM, LIGHT_COUNT_UNIFORM, SCREEN_UNIFORM,
    FIELD_POSITION, FIELD_DIFFUSE, FIELD_POWER,
};

/// One light slot as seen by the shader
///
/// The `vec3` starts on a 16-byte boundary, giving a 32-byte array stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct LightUniform {
    /// Screen position in pixels
    pub position: [f32; 2],
    /// Padding for std140 alignment
    pub _padding: [f32; 2],
    /// Emitted RGB color
    pub diffuse: [f32; 3],
    /// Attenuation coefficient (0 = no falloff)
    pub power: f32,
}

impl LightUniform {
    /// Build a record from engine math types
    pub fn new(position: Vec2, diffuse: Vec3, power: f32) -> Self {
        Self {
            position: [position.x, position.y],
            _padding: [0.0; 2],
            diffuse: [diffuse.x, diffuse.y, diffuse.z],
            power,
        }
    }

    /// Split the record into its individually addressable fields
    pub fn fields(&self) -> [LightField; 3] {
        [
            LightField::Position(Vec2::new(self.position[0], self.position[1])),
            LightField::Diffuse(Vec3::new(self.diffuse[0], self.diffuse[1], self.diffuse[2])),
            LightField::Power(self.power),
        ]
    }

    /// Overwrite a single field
    pub fn apply(&mut self, field: LightField) {
        match field {
            LightField::Position(p) => self.position = [p.x, p.y],
            LightField::Diffuse(c) => self.diffuse = [c.x, c.y, c.z],
            LightField::Power(power) => self.power = power,
        }
    }
}

/// A typed write to one field of a light-array entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightField {
    /// `lights[i].position`
    Position(Vec2),
    /// `lights[i].diffuse`
    Diffuse(Vec3),
    /// `lights[i].power`
    Power(f32),
}

impl LightField {
    /// Field name inside the shader's light struct
    pub fn name(&self) -> &'static str {
        match self {
            Self::Position(_) => FIELD_POSITION,
            Self::Diffuse(_) => FIELD_DIFFUSE,
            Self::Power(_) => FIELD_POWER,
        }
    }

    /// Full uniform path for string-keyed backends, e.g. `lights[3].power`
    pub fn path(&self, slot: usize) -> String {
        format!("{}[{}].{}", LIGHTS_UNIFORM, slot, self.name())
    }
}

/// Scalar and vector uniforms outside the light array
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Uniform {
    /// Number of valid entries in the light array (GLSL `uint`)
    LightCount(u32),
    /// Render target size in pixels, used for aspect-ratio correction
    ScreenSize(Vec2),
}

impl Uniform {
    /// Uniform name in the shader source
    pub fn name(&self) -> &'static str {
        match self {
            Self::LightCount(_) => LIGHT_COUNT_UNIFORM,
            Self::ScreenSize(_) => SCREEN_UNIFORM,
        }
    }
}

/// CPU-side mirror of the shader's fixed-capacity light array
#[derive(Debug, Clone)]
pub struct LightUniformArray {
    lights: [LightUniform; MAX_LIGHTS],
    count: u32,
}

impl LightUniformArray {
    /// Create a zeroed array with no active lights
    pub fn new() -> Self {
        Self {
            lights: [LightUniform::zeroed(); MAX_LIGHTS],
            count: 0,
        }
    }

    /// Apply a field write; writes past the capacity are dropped
    pub fn set_field(&mut self, slot: usize, field: LightField) -> bool {
        match self.lights.get_mut(slot) {
            Some(light) => {
                light.apply(field);
                true
            }
            None => false,
        }
    }

    /// Set the active light count, clamped to the capacity
    pub fn set_count(&mut self, count: u32) {
        self.count = count.min(MAX_LIGHTS as u32);
    }

    /// Active light count
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Slot contents regardless of the active count
    pub fn slot(&self, slot: usize) -> Option<&LightUniform> {
        self.lights.get(slot)
    }

    /// Lights the shader will actually read
    pub fn active(&self) -> &[LightUniform] {
        &self.lights[..self.count as usize]
    }

    /// Raw bytes of the whole array in std140 layout, for uniform-buffer uploads
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.lights)
    }
}

impl Default for LightUniformArray {
    fn default() -> Self {
        Self::new()
    }
}
