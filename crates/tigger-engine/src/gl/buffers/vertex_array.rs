use crate::gl::api::Gl;
use crate::gl::object::{GlObject, ObjectKind};

use super::VertexBuffer;

/// Vertex array object recording attribute layout.
pub struct VertexArray {
    obj: GlObject,
}

impl VertexArray {
    /// Allocates a vertex array and leaves it bound.
    pub fn new(gl: Gl) -> Self {
        let id = gl.create_vertex_array();
        gl.bind_vertex_array(id);

        Self {
            obj: GlObject::new(gl, id, ObjectKind::VertexArray),
        }
    }

    pub fn id(&self) -> u32 {
        self.obj.id()
    }

    /// Points float attribute `index` at `buffer`.
    ///
    /// `count` is the number of components; `stride` and `offset` are in bytes.
    pub fn bind_attribute(
        &self,
        index: u32,
        buffer: &VertexBuffer,
        count: i32,
        stride: i32,
        offset: i32,
    ) {
        self.bind();
        buffer.bind();

        let gl = self.obj.gl();
        gl.enable_vertex_attrib_array(index);
        gl.vertex_attrib_pointer_f32(index, count, stride, offset);
    }

    #[inline]
    pub fn bind(&self) {
        self.obj.gl().bind_vertex_array(self.obj.id());
    }

    #[inline]
    pub fn unbind(&self) {
        self.obj.gl().bind_vertex_array(0);
    }

    pub fn dispose(self) {}
}
