//! Backend abstraction trait for the shading pass
//!
//! A backend owns the compiled shader program and the uniform storage behind
//! it. The lighting subsystem only ever compiles the fixed source and writes
//! uniforms; draw calls stay with the host.

use super::{LightField, LightUniform, RenderError, ShaderSource, Uniform};

/// Result type for backend operations
pub type BackendResult<T> = Result<T, RenderError>;

/// Handle to a compiled shader program owned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderHandle(pub u64);

/// Shading backend trait
///
/// Implemented by whatever binds the fragment lighting shader (a GL program,
/// a Vulkan pipeline with a uniform buffer, or the in-memory
/// [`RecordingBackend`](super::RecordingBackend)).
pub trait ShadingBackend {
    /// Compile the shader program from fixed source text
    fn compile_shader(&mut self, source: &ShaderSource) -> BackendResult<ShaderHandle>;

    /// Write one field of one entry in the light array (`lights[slot].field`)
    fn set_light_field(&mut self, shader: ShaderHandle, slot: usize, field: LightField);

    /// Write a scalar or vector uniform
    fn set_uniform(&mut self, shader: ShaderHandle, uniform: Uniform);

    /// Write a complete light record into `slot`
    ///
    /// Buffer-based backends can override this to copy the record in one go.
    fn write_light(&mut self, shader: ShaderHandle, slot: usize, light: &LightUniform) {
        for field in light.fields() {
            self.set_light_field(shader, slot, field);
        }
    }

    /// Release a shader program on teardown
    fn release_shader(&mut self, _shader: ShaderHandle) {}
}
