//! OpenGL resource wrappers.
//!
//! Each wrapper owns exactly one GL object and deletes it on drop. Calls go
//! through [`GlApi`], implemented for `glow::Context`; wrappers never talk to
//! glow directly.

mod api;
mod buffers;
mod glow_backend;
mod object;
mod shader;
mod uniform;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{ActiveUniform, BufferTarget, BufferUsage, Gl, GlApi, ShaderStage};
pub use buffers::{IndexBuffer, UniformBuffer, VertexArray, VertexBuffer};
pub use shader::{Shader, UniformInfo};
pub use uniform::{Uniform, UniformType, UniformValue};
