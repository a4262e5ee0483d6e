//! In-memory [`GlBackend`] that records calls and keeps uploaded buffer stores.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use anyhow::Result;

use super::gl::{AttribPointer, BufferTarget, BufferUsage, GlBackend};
use super::mesh::Topology;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum GlCall {
    CreateBuffer(u32),
    DeleteBuffer(u32),
    BindBuffer(BufferTarget, Option<u32>),
    BufferData { target: BufferTarget, buffer: u32, len: usize, usage: BufferUsage },
    EnableAttrib(u32),
    DisableAttrib(u32),
    AttribPointer(AttribPointer),
    DrawIndexed { topology: Topology, count: u32, offset: u32 },
    BindTexture(Option<u32>),
    UseProgram(Option<u32>),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingGl {
    next_id: Cell<u32>,
    fail_create_after: Cell<Option<u32>>,
    calls: RefCell<Vec<GlCall>>,
    bound: RefCell<HashMap<BufferTarget, u32>>,
    stores: RefCell<HashMap<u32, Vec<u8>>>,
}

impl RecordingGl {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Makes `create_buffer` fail once `n` buffers have been created.
    pub(crate) fn fail_create_after(&self, n: u32) {
        self.fail_create_after.set(Some(n));
    }

    pub(crate) fn calls(&self) -> Vec<GlCall> {
        self.calls.borrow().clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub(crate) fn draw_calls(&self) -> Vec<GlCall> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, GlCall::DrawIndexed { .. }))
            .cloned()
            .collect()
    }

    pub(crate) fn store(&self, buffer: u32) -> Vec<u8> {
        self.stores.borrow().get(&buffer).cloned().unwrap_or_default()
    }

    pub(crate) fn store_u32(&self, buffer: u32) -> Vec<u32> {
        self.store(buffer)
            .chunks_exact(4)
            .map(|c| u32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
            .collect()
    }

    /// Last buffer uploaded through `target`.
    pub(crate) fn last_upload(&self, target: BufferTarget) -> Option<u32> {
        self.calls.borrow().iter().rev().find_map(|c| match c {
            GlCall::BufferData { target: t, buffer, .. } if *t == target => Some(*buffer),
            _ => None,
        })
    }

    fn record(&self, call: GlCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl GlBackend for RecordingGl {
    type Buffer = u32;
    type Texture = u32;
    type Program = u32;

    fn create_buffer(&self) -> Result<u32> {
        let id = self.next_id.get() + 1;
        if let Some(limit) = self.fail_create_after.get() {
            anyhow::ensure!(id <= limit, "out of buffer names");
        }
        self.next_id.set(id);
        self.record(GlCall::CreateBuffer(id));
        Ok(id)
    }

    fn delete_buffer(&self, buffer: u32) {
        self.stores.borrow_mut().remove(&buffer);
        self.record(GlCall::DeleteBuffer(buffer));
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<u32>) {
        match buffer {
            Some(b) => self.bound.borrow_mut().insert(target, b),
            None => self.bound.borrow_mut().remove(&target),
        };
        self.record(GlCall::BindBuffer(target, buffer));
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8], usage: BufferUsage) {
        let buffer = *self
            .bound
            .borrow()
            .get(&target)
            .expect("buffer_data with nothing bound");
        self.stores.borrow_mut().insert(buffer, data.to_vec());
        self.record(GlCall::BufferData { target, buffer, len: data.len(), usage });
    }

    fn enable_vertex_attrib(&self, index: u32) {
        self.record(GlCall::EnableAttrib(index));
    }

    fn disable_vertex_attrib(&self, index: u32) {
        self.record(GlCall::DisableAttrib(index));
    }

    fn set_attribute_pointer(&self, pointer: AttribPointer) {
        self.record(GlCall::AttribPointer(pointer));
    }

    fn draw_indexed(&self, topology: Topology, count: u32, offset: u32) {
        self.record(GlCall::DrawIndexed { topology, count, offset });
    }

    fn bind_texture(&self, texture: Option<u32>) {
        self.record(GlCall::BindTexture(texture));
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(GlCall::UseProgram(program));
    }
}
