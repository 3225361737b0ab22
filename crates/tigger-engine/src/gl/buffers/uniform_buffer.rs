use bytemuck::Pod;
use glam::Mat4;

use crate::assets::Asset;
use crate::gl::api::{BufferTarget, BufferUsage, Gl};
use crate::gl::object::{GlObject, ObjectKind};
use crate::gl::Shader;

/// Uniform block storage attached to a fixed binding point.
///
/// Shaders see the buffer through a named `uniform` block linked with
/// [`UniformBuffer::bind_block_to_shader`].
pub struct UniformBuffer {
    obj: GlObject,
    size: usize,
    binding_point: u32,
}

impl UniformBuffer {
    /// Allocates `size` zeroed bytes and binds `[offset, offset + size)` to
    /// `binding_point`.
    ///
    /// The first 4×4 matrix slot is written with zeros, so the buffer is
    /// initialized even on drivers that do not clear new storage.
    pub fn new(gl: Gl, size: usize, binding_point: u32, offset: usize, usage: BufferUsage) -> Self {
        let id = gl.create_buffer();
        gl.bind_buffer(BufferTarget::Uniform, id);
        gl.buffer_data(BufferTarget::Uniform, &vec![0u8; size], usage);
        gl.bind_buffer(BufferTarget::Uniform, 0);
        gl.bind_buffer_range(binding_point, id, offset, size);

        let ubo = Self {
            obj: GlObject::new(gl, id, ObjectKind::Buffer),
            size,
            binding_point,
        };

        if size >= size_of::<Mat4>() {
            ubo.set_data(&Mat4::ZERO, 0);
        }

        ubo
    }

    pub fn id(&self) -> u32 {
        self.obj.id()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn binding_point(&self) -> u32 {
        self.binding_point
    }

    #[inline]
    pub fn bind(&self) {
        self.obj.gl().bind_buffer(BufferTarget::Uniform, self.obj.id());
    }

    #[inline]
    pub fn unbind(&self) {
        self.obj.gl().bind_buffer(BufferTarget::Uniform, 0);
    }

    /// Writes `data` at byte `offset`, binding the buffer only for the upload.
    ///
    /// Writes that would overrun the buffer are dropped with a warning.
    pub fn set_data<T: Pod>(&self, data: &T, offset: usize) {
        let bytes = bytemuck::bytes_of(data);
        if offset.checked_add(bytes.len()).is_none_or(|end| end > self.size) {
            log::warn!(
                "uniform buffer {}: write of {} bytes at {} exceeds size {}",
                self.obj.id(),
                bytes.len(),
                offset,
                self.size
            );
            return;
        }

        self.bind();
        self.obj.gl().buffer_sub_data(BufferTarget::Uniform, offset, bytes);
        self.unbind();
    }

    /// Links `shader`'s uniform block `name` to `binding_point`.
    pub fn bind_block_to_shader(shader: &Shader, name: &str, binding_point: u32) {
        match shader.gl().uniform_block_index(shader.id(), name) {
            Some(index) => Self::bind_block_index_to_shader(shader, index, binding_point),
            None => log::warn!("Uniform block: {name} doesn't exist in {}", shader.name()),
        }
    }

    /// Links an already-resolved uniform block index to `binding_point`.
    pub fn bind_block_index_to_shader(shader: &Shader, block_index: u32, binding_point: u32) {
        shader
            .gl()
            .uniform_block_binding(shader.id(), block_index, binding_point);
    }

    pub fn dispose(self) {}
}
