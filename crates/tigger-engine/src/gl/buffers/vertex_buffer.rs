use crate::gl::api::{BufferTarget, BufferUsage, Gl};
use crate::gl::object::{GlObject, ObjectKind};

/// Vertex data in an `ARRAY_BUFFER`.
pub struct VertexBuffer {
    obj: GlObject,
}

impl VertexBuffer {
    /// Allocates a buffer and uploads `data` with `StaticDraw`.
    ///
    /// The buffer is left bound.
    pub fn new(gl: Gl, data: &[f32]) -> Self {
        Self::with_usage(gl, data, BufferUsage::StaticDraw)
    }

    pub fn with_usage(gl: Gl, data: &[f32], usage: BufferUsage) -> Self {
        let id = gl.create_buffer();
        gl.bind_buffer(BufferTarget::Array, id);
        gl.buffer_data(BufferTarget::Array, bytemuck::cast_slice(data), usage);

        Self {
            obj: GlObject::new(gl, id, ObjectKind::Buffer),
        }
    }

    pub fn id(&self) -> u32 {
        self.obj.id()
    }

    #[inline]
    pub fn bind(&self) {
        self.obj.gl().bind_buffer(BufferTarget::Array, self.obj.id());
    }

    #[inline]
    pub fn unbind(&self) {
        self.obj.gl().bind_buffer(BufferTarget::Array, 0);
    }

    /// Releases the buffer now instead of at end of scope.
    pub fn dispose(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::testing::{Call, RecordingGl};

    #[test]
    fn uploads_float_bytes_on_creation() {
        let rec = RecordingGl::new();
        let vbo = VertexBuffer::new(rec.as_gl(), &[1.0, 2.0]);

        let expected: Vec<u8> = [1.0f32, 2.0].iter().flat_map(|f| f.to_ne_bytes()).collect();
        assert_eq!(
            rec.calls(),
            [
                Call::BindBuffer(BufferTarget::Array, vbo.id()),
                Call::BufferData(BufferTarget::Array, expected, BufferUsage::StaticDraw),
            ]
        );
    }

    #[test]
    fn dispose_releases_exactly_once() {
        let rec = RecordingGl::new();
        let vbo = VertexBuffer::new(rec.as_gl(), &[0.0; 3]);
        let id = vbo.id();

        vbo.dispose();

        assert_eq!(rec.state.borrow().deleted_buffers, [id]);
    }

    #[test]
    fn drop_without_dispose_still_releases() {
        let rec = RecordingGl::new();
        let id = {
            let vbo = VertexBuffer::new(rec.as_gl(), &[0.0; 3]);
            vbo.id()
        };
        assert_eq!(rec.state.borrow().deleted_buffers, [id]);
    }

    #[test]
    fn bind_and_unbind_do_not_release() {
        let rec = RecordingGl::new();
        let vbo = VertexBuffer::new(rec.as_gl(), &[0.0]);
        vbo.bind();
        vbo.unbind();
        vbo.bind();

        assert!(rec.state.borrow().deleted_buffers.is_empty());
        assert_eq!(
            rec.calls()[2..],
            [
                Call::BindBuffer(BufferTarget::Array, vbo.id()),
                Call::BindBuffer(BufferTarget::Array, 0),
                Call::BindBuffer(BufferTarget::Array, vbo.id()),
            ]
        );
    }
}
