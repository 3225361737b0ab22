use super::api::Gl;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum ObjectKind {
    Buffer,
    VertexArray,
    Program,
}

/// Sole owner of one GL object name.
///
/// The name is released in `Drop`, so it is freed exactly once no matter how
/// the owning wrapper goes away.
pub(crate) struct GlObject {
    gl: Gl,
    id: u32,
    kind: ObjectKind,
}

impl GlObject {
    pub(crate) fn new(gl: Gl, id: u32, kind: ObjectKind) -> Self {
        log::trace!("allocated {kind:?} {id}");
        Self { gl, id, kind }
    }

    pub(crate) fn gl(&self) -> &Gl {
        &self.gl
    }

    pub(crate) fn id(&self) -> u32 {
        self.id
    }
}

impl Drop for GlObject {
    fn drop(&mut self) {
        match self.kind {
            ObjectKind::Buffer => self.gl.delete_buffer(self.id),
            ObjectKind::VertexArray => self.gl.delete_vertex_array(self.id),
            ObjectKind::Program => self.gl.delete_program(self.id),
        }
        log::trace!("released {:?} {}", self.kind, self.id);
    }
}
