//! Per-frame slot packing
//!
//! Lights are written into consecutive slots of the shader's light array,
//! starting at 0, until the capacity is used up. The number of slots written
//! becomes the frame's active light count.

use crate::render::{LightUniform, ShaderHandle, ShadingBackend, Uniform};

/// Per-frame upload statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Static lights uploaded
    pub static_lights: usize,
    /// Explosions uploaded
    pub explosions: usize,
    /// Torches uploaded
    pub torches: usize,
    /// Lights of any kind left out for lack of slots
    pub truncated: usize,
    /// Explosions that expired and were removed this frame
    pub expired: usize,
}

impl FrameStats {
    /// Slots used this frame (the uploaded light count)
    pub fn uploaded(&self) -> usize {
        self.static_lights + self.explosions + self.torches
    }
}

/// Writes light records into consecutive slots until the capacity is reached
pub struct SlotWriter<'a, B: ShadingBackend + ?Sized> {
    backend: &'a mut B,
    shader: ShaderHandle,
    next: usize,
    capacity: usize,
}

impl<'a, B: ShadingBackend + ?Sized> SlotWriter<'a, B> {
    /// Start packing at slot 0
    pub fn new(backend: &'a mut B, shader: ShaderHandle, capacity: usize) -> Self {
        Self {
            backend,
            shader,
            next: 0,
            capacity,
        }
    }

    /// Slots still free this frame
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.next)
    }

    /// Whether every slot has been written
    pub fn is_full(&self) -> bool {
        self.next >= self.capacity
    }

    /// Write `light` into the next slot; returns `false` when full
    pub fn push(&mut self, light: &LightUniform) -> bool {
        if self.is_full() {
            return false;
        }
        log::trace!("SlotWriter: slot {} <- {:?}", self.next, light);
        self.backend.write_light(self.shader, self.next, light);
        self.next += 1;
        true
    }

    /// Upload the active light count and return it
    pub fn finish(self) -> usize {
        self.backend.set_uniform(self.shader, Uniform::LightCount(self.next as u32));
        self.next
    }
}
