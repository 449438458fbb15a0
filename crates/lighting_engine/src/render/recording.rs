//! In-memory shading backend
//!
//! Keeps the uniform state a real backend would hold on the GPU. Headless
//! hosts use it to run the lighting loop without a window, and tests use it
//! to inspect exactly what was uploaded.

use std::collections::HashSet;

use crate::foundation::math::Vec2;
use super::{
    BackendResult, LightField, LightUniformArray, RenderError, ShaderHandle, ShaderSource,
    ShadingBackend, Uniform,
};

/// Backend that records uniform writes instead of rendering
#[derive(Debug, Default)]
pub struct RecordingBackend {
    next_handle: u64,
    live: HashSet<ShaderHandle>,
    compiled: Vec<&'static str>,
    compile_failure: Option<String>,
    lights: LightUniformArray,
    field_writes: usize,
    count_writes: usize,
    screen_size: Option<Vec2>,
}

impl RecordingBackend {
    /// Create a backend that compiles every shader successfully
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend whose shader compilation always fails with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            compile_failure: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Names of every shader compiled so far
    pub fn compiled_shaders(&self) -> &[&'static str] {
        &self.compiled
    }

    /// Whether `shader` is compiled and not yet released
    pub fn is_live(&self, shader: ShaderHandle) -> bool {
        self.live.contains(&shader)
    }

    /// Current light-array contents
    pub fn lights(&self) -> &LightUniformArray {
        &self.lights
    }

    /// Last uploaded active light count
    pub fn light_count(&self) -> u32 {
        self.lights.count()
    }

    /// Number of light-count uploads, one per synchronized frame
    pub fn count_writes(&self) -> usize {
        self.count_writes
    }

    /// Total individual light-field writes
    pub fn field_writes(&self) -> usize {
        self.field_writes
    }

    /// Last uploaded screen size
    pub fn screen_size(&self) -> Option<Vec2> {
        self.screen_size
    }

    fn accepts(&self, shader: ShaderHandle) -> bool {
        if self.live.contains(&shader) {
            true
        } else {
            log::warn!("RecordingBackend: write to unknown shader {:?} ignored", shader);
            false
        }
    }
}

impl ShadingBackend for RecordingBackend {
    fn compile_shader(&mut self, source: &ShaderSource) -> BackendResult<ShaderHandle> {
        if let Some(reason) = &self.compile_failure {
            return Err(RenderError::ShaderCompilation {
                name: source.name.to_string(),
                reason: reason.clone(),
            });
        }

        self.next_handle += 1;
        let handle = ShaderHandle(self.next_handle);
        self.live.insert(handle);
        self.compiled.push(source.name);
        log::debug!("RecordingBackend: compiled '{}' as {:?}", source.name, handle);
        Ok(handle)
    }

    fn set_light_field(&mut self, shader: ShaderHandle, slot: usize, field: LightField) {
        if !self.accepts(shader) {
            return;
        }
        log::trace!("RecordingBackend: {} = {:?}", field.path(slot), field);
        if self.lights.set_field(slot, field) {
            self.field_writes += 1;
        } else {
            log::warn!("RecordingBackend: {} is past the light array", field.path(slot));
        }
    }

    fn set_uniform(&mut self, shader: ShaderHandle, uniform: Uniform) {
        if !self.accepts(shader) {
            return;
        }
        match uniform {
            Uniform::LightCount(count) => {
                self.lights.set_count(count);
                self.count_writes += 1;
            }
            Uniform::ScreenSize(size) => self.screen_size = Some(size),
        }
    }

    fn release_shader(&mut self, shader: ShaderHandle) {
        if !self.live.remove(&shader) {
            log::warn!("RecordingBackend: release of unknown shader {:?}", shader);
        }
    }
}
