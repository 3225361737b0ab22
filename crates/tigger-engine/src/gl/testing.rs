//! In-memory `GlApi` used by unit tests.
//!
//! Hands out sequential object names, records deletions and lookups, and
//! stores uniform values so reads observe previous writes.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::api::{ActiveUniform, BufferTarget, BufferUsage, Gl, GlApi, ShaderStage};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    BindBuffer(BufferTarget, u32),
    BufferData(BufferTarget, Vec<u8>, BufferUsage),
    BufferSubData(BufferTarget, usize, Vec<u8>),
    BindBufferRange { binding_point: u32, buffer: u32, offset: usize, size: usize },
    BindVertexArray(u32),
    EnableAttrib(u32),
    AttribPointer { index: u32, count: i32, stride: i32, offset: i32 },
    UseProgram(u32),
    BlockBinding { program: u32, block_index: u32, binding_point: u32 },
    DrawIndexed(i32),
}

#[derive(Default)]
pub(crate) struct State {
    next_id: u32,
    pub calls: Vec<Call>,
    pub deleted_buffers: Vec<u32>,
    pub deleted_vertex_arrays: Vec<u32>,
    pub deleted_programs: Vec<u32>,
    pub location_lookups: Vec<String>,
    /// Program introspection: `(name, gl_type)` per active uniform.
    pub active: Vec<(String, u32)>,
    pub blocks: HashMap<String, u32>,
    pub ints: HashMap<u32, Vec<i32>>,
    pub floats: HashMap<u32, Vec<f32>>,
    pub link_error: Option<String>,
}

#[derive(Default)]
pub(crate) struct RecordingGl {
    pub state: RefCell<State>,
}

impl RecordingGl {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Declares an active uniform; its location is `index + 1`.
    pub(crate) fn with_uniform(self: Rc<Self>, name: &str, gl_type: u32) -> Rc<Self> {
        self.state.borrow_mut().active.push((name.to_string(), gl_type));
        self
    }

    pub(crate) fn as_gl(self: &Rc<Self>) -> Gl {
        self.clone()
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    fn next(&self) -> u32 {
        let mut s = self.state.borrow_mut();
        s.next_id += 1;
        s.next_id
    }

    fn push(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }
}

impl GlApi for RecordingGl {
    fn create_buffer(&self) -> u32 {
        self.next()
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: u32) {
        self.push(Call::BindBuffer(target, buffer));
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8], usage: BufferUsage) {
        self.push(Call::BufferData(target, data.to_vec(), usage));
    }

    fn buffer_sub_data(&self, target: BufferTarget, offset: usize, data: &[u8]) {
        self.push(Call::BufferSubData(target, offset, data.to_vec()));
    }

    fn bind_buffer_range(&self, binding_point: u32, buffer: u32, offset: usize, size: usize) {
        self.push(Call::BindBufferRange { binding_point, buffer, offset, size });
    }

    fn delete_buffer(&self, buffer: u32) {
        self.state.borrow_mut().deleted_buffers.push(buffer);
    }

    fn create_vertex_array(&self) -> u32 {
        self.next()
    }

    fn bind_vertex_array(&self, vertex_array: u32) {
        self.push(Call::BindVertexArray(vertex_array));
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.push(Call::EnableAttrib(index));
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, count: i32, stride: i32, offset: i32) {
        self.push(Call::AttribPointer { index, count, stride, offset });
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.state.borrow_mut().deleted_vertex_arrays.push(vertex_array);
    }

    fn link_program(&self, _sources: &[(ShaderStage, &str)]) -> Result<u32, String> {
        if let Some(err) = self.state.borrow().link_error.clone() {
            return Err(err);
        }
        Ok(self.next())
    }

    fn use_program(&self, program: u32) {
        self.push(Call::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        self.state.borrow_mut().deleted_programs.push(program);
    }

    fn active_uniform_count(&self, _program: u32) -> u32 {
        self.state.borrow().active.len() as u32
    }

    fn active_uniform(&self, _program: u32, index: u32) -> Option<ActiveUniform> {
        let s = self.state.borrow();
        s.active.get(index as usize).map(|(name, gl_type)| ActiveUniform {
            name: name.clone(),
            gl_type: *gl_type,
        })
    }

    fn uniform_location(&self, _program: u32, name: &str) -> Option<u32> {
        let mut s = self.state.borrow_mut();
        s.location_lookups.push(name.to_string());
        s.active
            .iter()
            .position(|(n, _)| n == name)
            .map(|i| i as u32 + 1)
    }

    fn uniform_block_index(&self, _program: u32, name: &str) -> Option<u32> {
        self.state.borrow().blocks.get(name).copied()
    }

    fn uniform_block_binding(&self, program: u32, block_index: u32, binding_point: u32) {
        self.push(Call::BlockBinding { program, block_index, binding_point });
    }

    fn get_uniform_i32(&self, _program: u32, location: u32, out: &mut [i32]) {
        let s = self.state.borrow();
        let stored = s.ints.get(&location).map(Vec::as_slice).unwrap_or(&[]);
        for (dst, src) in out.iter_mut().zip(stored) {
            *dst = *src;
        }
    }

    fn get_uniform_f32(&self, _program: u32, location: u32, out: &mut [f32]) {
        let s = self.state.borrow();
        let stored = s.floats.get(&location).map(Vec::as_slice).unwrap_or(&[]);
        for (dst, src) in out.iter_mut().zip(stored) {
            *dst = *src;
        }
    }

    fn uniform_i32(&self, location: u32, value: i32) {
        self.state.borrow_mut().ints.insert(location, vec![value]);
    }

    fn uniform_u32(&self, location: u32, value: u32) {
        self.state.borrow_mut().ints.insert(location, vec![value as i32]);
    }

    fn uniform_f32(&self, location: u32, values: &[f32]) {
        self.state.borrow_mut().floats.insert(location, values.to_vec());
    }

    fn uniform_mat4(&self, location: u32, values: &[f32; 16]) {
        self.state.borrow_mut().floats.insert(location, values.to_vec());
    }

    fn viewport(&self, _x: i32, _y: i32, _width: i32, _height: i32) {}

    fn clear(&self, _color: [f32; 4]) {}

    fn draw_indexed_triangles(&self, index_count: i32) {
        self.push(Call::DrawIndexed(index_count));
    }
}
