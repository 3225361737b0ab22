//! Buffer and vertex-array wrappers.

mod index_buffer;
mod uniform_buffer;
mod vertex_array;
mod vertex_buffer;

pub use index_buffer::IndexBuffer;
pub use uniform_buffer::UniformBuffer;
pub use vertex_array::VertexArray;
pub use vertex_buffer::VertexBuffer;
