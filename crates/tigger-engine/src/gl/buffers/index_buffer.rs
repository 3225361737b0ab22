use crate::gl::api::{BufferTarget, BufferUsage, Gl};
use crate::gl::object::{GlObject, ObjectKind};

/// `u32` indices in an `ELEMENT_ARRAY_BUFFER`.
pub struct IndexBuffer {
    obj: GlObject,
    count: usize,
}

impl IndexBuffer {
    /// Allocates a buffer, binds it and uploads `indices` with `StaticDraw`.
    pub fn new(gl: Gl, indices: &[u32]) -> Self {
        let id = gl.create_buffer();
        gl.bind_buffer(BufferTarget::ElementArray, id);
        gl.buffer_data(
            BufferTarget::ElementArray,
            bytemuck::cast_slice(indices),
            BufferUsage::StaticDraw,
        );

        Self {
            obj: GlObject::new(gl, id, ObjectKind::Buffer),
            count: indices.len(),
        }
    }

    pub fn id(&self) -> u32 {
        self.obj.id()
    }

    /// Number of indices uploaded.
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn bind(&self) {
        self.obj.gl().bind_buffer(BufferTarget::ElementArray, self.obj.id());
    }

    #[inline]
    pub fn unbind(&self) {
        self.obj.gl().bind_buffer(BufferTarget::ElementArray, 0);
    }

    pub fn dispose(self) {}
}
