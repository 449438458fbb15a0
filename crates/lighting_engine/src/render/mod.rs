//! # Rendering Seam
//!
//! The lighting subsystem never shades pixels itself. This module defines the
//! narrow interface it drives on the rendering backend and the data it pushes
//! through it.
//!
//! ## Architecture
//!
//! - **Backend**: [`ShadingBackend`] compiles the fixed shader and accepts typed uniform writes
//! - **Uniforms**: [`LightUniform`] records, indexed [`LightField`] writes and scalar [`Uniform`]s
//! - **Shader Source**: the fixed fragment shader text and its uniform names
//! - **Recording Backend**: an in-memory backend for headless hosts and tests

pub mod backend;
pub mod recording;
pub mod shader_source;
pub mod uniforms;

pub use backend::{BackendResult, ShaderHandle, ShadingBackend};
pub use recording::RecordingBackend;
pub use shader_source::{ShaderSource, MAX_LIGHTS};
pub use uniforms::{LightField, LightUniform, LightUniformArray, Uniform};

use thiserror::Error;

/// Rendering backend error types
///
/// Backend-specific failures are reported in string form so the lighting
/// subsystem stays independent of any graphics API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The shader program failed to compile or link
    #[error("Shader '{name}' failed to compile: {reason}")]
    ShaderCompilation {
        /// Name of the shader program
        name: String,
        /// Compiler log or backend message
        reason: String,
    },

    /// A handle that the backend never issued, or already released
    #[error("Invalid shader handle: {0:?}")]
    InvalidHandle(ShaderHandle),

    /// Backend-specific error occurred
    #[error("Backend error: {0}")]
    BackendError(String),
}
