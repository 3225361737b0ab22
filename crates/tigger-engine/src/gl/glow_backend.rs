use std::num::NonZeroU32;

use glow::HasContext;

use super::api::{ActiveUniform, BufferTarget, BufferUsage, GlApi, ShaderStage};

fn target(t: BufferTarget) -> u32 {
    match t {
        BufferTarget::Array => glow::ARRAY_BUFFER,
        BufferTarget::ElementArray => glow::ELEMENT_ARRAY_BUFFER,
        BufferTarget::Uniform => glow::UNIFORM_BUFFER,
    }
}

fn usage(u: BufferUsage) -> u32 {
    match u {
        BufferUsage::StaticDraw => glow::STATIC_DRAW,
        BufferUsage::DynamicDraw => glow::DYNAMIC_DRAW,
        BufferUsage::StreamDraw => glow::STREAM_DRAW,
    }
}

fn stage(s: ShaderStage) -> u32 {
    match s {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

fn buffer(name: u32) -> Option<glow::NativeBuffer> {
    NonZeroU32::new(name).map(glow::NativeBuffer)
}

fn vertex_array(name: u32) -> Option<glow::NativeVertexArray> {
    NonZeroU32::new(name).map(glow::NativeVertexArray)
}

fn program(name: u32) -> Option<glow::NativeProgram> {
    NonZeroU32::new(name).map(glow::NativeProgram)
}

/// Converts a byte count or offset to a GL `GLint`/`GLintptr` argument.
fn gl_int(value: usize, what: &str) -> Option<i32> {
    match i32::try_from(value) {
        Ok(v) => Some(v),
        Err(_) => {
            log::error!("{what} {value} does not fit in a GLint");
            None
        }
    }
}

fn location(loc: u32) -> glow::NativeUniformLocation {
    glow::NativeUniformLocation(loc)
}

// SAFETY (all blocks below): the window layer makes the context current
// before any `Gl` handle is handed out, and `Gl` is `!Send`.
impl GlApi for glow::Context {
    fn create_buffer(&self) -> u32 {
        match unsafe { HasContext::create_buffer(self) } {
            Ok(b) => b.0.get(),
            Err(e) => {
                log::error!("glGenBuffers failed: {e}");
                0
            }
        }
    }

    fn bind_buffer(&self, t: BufferTarget, name: u32) {
        unsafe { HasContext::bind_buffer(self, target(t), buffer(name)) }
    }

    fn buffer_data(&self, t: BufferTarget, data: &[u8], u: BufferUsage) {
        unsafe { self.buffer_data_u8_slice(target(t), data, usage(u)) }
    }

    fn buffer_sub_data(&self, t: BufferTarget, offset: usize, data: &[u8]) {
        if let Some(offset) = gl_int(offset, "glBufferSubData offset") {
            unsafe { self.buffer_sub_data_u8_slice(target(t), offset, data) }
        }
    }

    fn bind_buffer_range(&self, binding_point: u32, name: u32, offset: usize, size: usize) {
        let (Some(offset), Some(size)) = (
            gl_int(offset, "glBindBufferRange offset"),
            gl_int(size, "glBindBufferRange size"),
        ) else {
            return;
        };
        unsafe {
            HasContext::bind_buffer_range(
                self,
                glow::UNIFORM_BUFFER,
                binding_point,
                buffer(name),
                offset,
                size,
            )
        }
    }

    fn delete_buffer(&self, name: u32) {
        if let Some(b) = buffer(name) {
            unsafe { HasContext::delete_buffer(self, b) }
        }
    }

    fn create_vertex_array(&self) -> u32 {
        match unsafe { HasContext::create_vertex_array(self) } {
            Ok(v) => v.0.get(),
            Err(e) => {
                log::error!("glGenVertexArrays failed: {e}");
                0
            }
        }
    }

    fn bind_vertex_array(&self, name: u32) {
        unsafe { HasContext::bind_vertex_array(self, vertex_array(name)) }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { HasContext::enable_vertex_attrib_array(self, index) }
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, count: i32, stride: i32, offset: i32) {
        unsafe {
            HasContext::vertex_attrib_pointer_f32(self, index, count, glow::FLOAT, false, stride, offset)
        }
    }

    fn delete_vertex_array(&self, name: u32) {
        if let Some(v) = vertex_array(name) {
            unsafe { HasContext::delete_vertex_array(self, v) }
        }
    }

    fn link_program(&self, sources: &[(ShaderStage, &str)]) -> Result<u32, String> {
        unsafe {
            let prog = self.create_program()?;
            let mut shaders = Vec::with_capacity(sources.len());

            for &(s, src) in sources {
                let shader = self.create_shader(stage(s))?;
                self.shader_source(shader, src);
                self.compile_shader(shader);
                if !self.get_shader_compile_status(shader) {
                    let info = self.get_shader_info_log(shader);
                    self.delete_shader(shader);
                    for sh in shaders {
                        self.delete_shader(sh);
                    }
                    HasContext::delete_program(self, prog);
                    return Err(format!("{s:?} shader failed to compile: {info}"));
                }
                self.attach_shader(prog, shader);
                shaders.push(shader);
            }

            HasContext::link_program(self, prog);
            let linked = self.get_program_link_status(prog);

            for sh in shaders {
                self.detach_shader(prog, sh);
                self.delete_shader(sh);
            }

            if !linked {
                let info = self.get_program_info_log(prog);
                HasContext::delete_program(self, prog);
                return Err(format!("program failed to link: {info}"));
            }

            Ok(prog.0.get())
        }
    }

    fn use_program(&self, name: u32) {
        unsafe { HasContext::use_program(self, program(name)) }
    }

    fn delete_program(&self, name: u32) {
        if let Some(p) = program(name) {
            unsafe { HasContext::delete_program(self, p) }
        }
    }

    fn active_uniform_count(&self, name: u32) -> u32 {
        match program(name) {
            Some(p) => unsafe { self.get_active_uniforms(p) },
            None => 0,
        }
    }

    fn active_uniform(&self, name: u32, index: u32) -> Option<ActiveUniform> {
        let p = program(name)?;
        let u = unsafe { self.get_active_uniform(p, index) }?;
        Some(ActiveUniform {
            name: u.name,
            gl_type: u.utype,
        })
    }

    fn uniform_location(&self, name: u32, uniform: &str) -> Option<u32> {
        let p = program(name)?;
        unsafe { self.get_uniform_location(p, uniform) }.map(|l| l.0)
    }

    fn uniform_block_index(&self, name: u32, block: &str) -> Option<u32> {
        let p = program(name)?;
        unsafe { self.get_uniform_block_index(p, block) }
    }

    fn uniform_block_binding(&self, name: u32, block_index: u32, binding_point: u32) {
        if let Some(p) = program(name) {
            unsafe { HasContext::uniform_block_binding(self, p, block_index, binding_point) }
        }
    }

    fn get_uniform_i32(&self, name: u32, loc: u32, out: &mut [i32]) {
        if let Some(p) = program(name) {
            unsafe { HasContext::get_uniform_i32(self, p, &location(loc), out) }
        }
    }

    fn get_uniform_f32(&self, name: u32, loc: u32, out: &mut [f32]) {
        if let Some(p) = program(name) {
            unsafe { HasContext::get_uniform_f32(self, p, &location(loc), out) }
        }
    }

    fn uniform_i32(&self, loc: u32, value: i32) {
        unsafe { self.uniform_1_i32(Some(&location(loc)), value) }
    }

    fn uniform_u32(&self, loc: u32, value: u32) {
        unsafe { self.uniform_1_u32(Some(&location(loc)), value) }
    }

    fn uniform_f32(&self, loc: u32, values: &[f32]) {
        let l = location(loc);
        unsafe {
            match *values {
                [x] => self.uniform_1_f32(Some(&l), x),
                [x, y] => self.uniform_2_f32(Some(&l), x, y),
                [x, y, z] => self.uniform_3_f32(Some(&l), x, y, z),
                [x, y, z, w] => self.uniform_4_f32(Some(&l), x, y, z, w),
                _ => log::warn!("uniform_f32: unsupported arity {}", values.len()),
            }
        }
    }

    fn uniform_mat4(&self, loc: u32, values: &[f32; 16]) {
        unsafe { self.uniform_matrix_4_f32_slice(Some(&location(loc)), false, values) }
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { HasContext::viewport(self, x, y, width, height) }
    }

    fn clear(&self, color: [f32; 4]) {
        let [r, g, b, a] = color;
        unsafe {
            self.clear_color(r, g, b, a);
            HasContext::clear(self, glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
    }

    fn draw_indexed_triangles(&self, index_count: i32) {
        unsafe { self.draw_elements(glow::TRIANGLES, index_count, glow::UNSIGNED_INT, 0) }
    }
}
