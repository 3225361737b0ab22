use std::rc::Rc;

/// Shared handle to the GL function table.
///
/// `Rc` keeps every resource on the thread that owns the context.
pub type Gl = Rc<dyn GlApi>;

/// Buffer binding targets used by the wrappers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BufferTarget {
    Array,
    ElementArray,
    Uniform,
}

/// Buffer usage hint passed on allocation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum BufferUsage {
    #[default]
    StaticDraw,
    DynamicDraw,
    StreamDraw,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

/// One entry of a program's active uniform table.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveUniform {
    pub name: String,
    /// Raw GL type enum (e.g. `GL_FLOAT_VEC3`).
    pub gl_type: u32,
}

/// The slice of OpenGL the engine uses.
///
/// Object names are raw `u32`s and `0` means "unbind". Calls are
/// fire-and-forget; the only fallible operation is program linking.
///
/// Every method assumes the owning context is current on the calling thread.
pub trait GlApi {
    // buffers
    fn create_buffer(&self) -> u32;
    fn bind_buffer(&self, target: BufferTarget, buffer: u32);
    fn buffer_data(&self, target: BufferTarget, data: &[u8], usage: BufferUsage);
    fn buffer_sub_data(&self, target: BufferTarget, offset: usize, data: &[u8]);
    fn bind_buffer_range(&self, binding_point: u32, buffer: u32, offset: usize, size: usize);
    fn delete_buffer(&self, buffer: u32);

    // vertex arrays
    fn create_vertex_array(&self) -> u32;
    fn bind_vertex_array(&self, vertex_array: u32);
    fn enable_vertex_attrib_array(&self, index: u32);
    fn vertex_attrib_pointer_f32(&self, index: u32, count: i32, stride: i32, offset: i32);
    fn delete_vertex_array(&self, vertex_array: u32);

    // programs
    fn link_program(&self, sources: &[(ShaderStage, &str)]) -> Result<u32, String>;
    fn use_program(&self, program: u32);
    fn delete_program(&self, program: u32);
    fn active_uniform_count(&self, program: u32) -> u32;
    fn active_uniform(&self, program: u32, index: u32) -> Option<ActiveUniform>;
    fn uniform_location(&self, program: u32, name: &str) -> Option<u32>;
    fn uniform_block_index(&self, program: u32, name: &str) -> Option<u32>;
    fn uniform_block_binding(&self, program: u32, block_index: u32, binding_point: u32);

    // uniform values
    fn get_uniform_i32(&self, program: u32, location: u32, out: &mut [i32]);
    fn get_uniform_f32(&self, program: u32, location: u32, out: &mut [f32]);
    fn uniform_i32(&self, location: u32, value: i32);
    fn uniform_u32(&self, location: u32, value: u32);
    /// Uploads a float scalar or vector; `values.len()` selects the arity (1..=4).
    fn uniform_f32(&self, location: u32, values: &[f32]);
    /// Uploads a column-major 4×4 matrix.
    fn uniform_mat4(&self, location: u32, values: &[f32; 16]);

    // frame
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn clear(&self, color: [f32; 4]);
    fn draw_indexed_triangles(&self, index_count: i32);
}
