use glam::{Mat4, Vec2, Vec3, Vec4};

use super::api::GlApi;

/// GLSL uniform types recognized by shader introspection.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum UniformType {
    Bool,
    Int,
    Float,
    Vec2,
    Vec3,
    Vec4,
    Mat4,
    Sampler2D,
}

impl UniformType {
    /// Maps a GL type enum; anything else is `None`.
    pub fn from_gl(gl_type: u32) -> Option<Self> {
        Some(match gl_type {
            glow::BOOL => Self::Bool,
            glow::INT => Self::Int,
            glow::FLOAT => Self::Float,
            glow::FLOAT_VEC2 => Self::Vec2,
            glow::FLOAT_VEC3 => Self::Vec3,
            glow::FLOAT_VEC4 => Self::Vec4,
            glow::FLOAT_MAT4 => Self::Mat4,
            glow::SAMPLER_2D => Self::Sampler2D,
            _ => return None,
        })
    }
}

/// A uniform value read back from a program.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum UniformValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat4(Mat4),
}

impl UniformValue {
    /// Reads the current value of a uniform of type `ty`.
    ///
    /// Samplers have no value worth caching and yield `None`.
    pub(crate) fn read(gl: &dyn GlApi, program: u32, location: u32, ty: UniformType) -> Option<Self> {
        Some(match ty {
            UniformType::Bool => Self::Bool(bool::read(gl, program, location)),
            UniformType::Int => Self::Int(i32::read(gl, program, location)),
            UniformType::Float => Self::Float(f32::read(gl, program, location)),
            UniformType::Vec2 => Self::Vec2(Vec2::read(gl, program, location)),
            UniformType::Vec3 => Self::Vec3(Vec3::read(gl, program, location)),
            UniformType::Vec4 => Self::Vec4(Vec4::read(gl, program, location)),
            UniformType::Mat4 => Self::Mat4(Mat4::read(gl, program, location)),
            UniformType::Sampler2D => return None,
        })
    }
}

/// Rust types that can be written to and read from a uniform location.
pub trait Uniform: Sized {
    fn upload(&self, gl: &dyn GlApi, location: u32);

    fn read(gl: &dyn GlApi, program: u32, location: u32) -> Self;
}

impl Uniform for i32 {
    fn upload(&self, gl: &dyn GlApi, location: u32) {
        gl.uniform_i32(location, *self);
    }

    fn read(gl: &dyn GlApi, program: u32, location: u32) -> Self {
        let mut v = [0i32];
        gl.get_uniform_i32(program, location, &mut v);
        v[0]
    }
}

impl Uniform for u32 {
    fn upload(&self, gl: &dyn GlApi, location: u32) {
        gl.uniform_u32(location, *self);
    }

    fn read(gl: &dyn GlApi, program: u32, location: u32) -> Self {
        i32::read(gl, program, location) as u32
    }
}

impl Uniform for bool {
    fn upload(&self, gl: &dyn GlApi, location: u32) {
        gl.uniform_i32(location, *self as i32);
    }

    fn read(gl: &dyn GlApi, program: u32, location: u32) -> Self {
        i32::read(gl, program, location) != 0
    }
}

impl Uniform for f32 {
    fn upload(&self, gl: &dyn GlApi, location: u32) {
        gl.uniform_f32(location, &[*self]);
    }

    fn read(gl: &dyn GlApi, program: u32, location: u32) -> Self {
        let mut v = [0.0f32];
        gl.get_uniform_f32(program, location, &mut v);
        v[0]
    }
}

impl Uniform for Vec2 {
    fn upload(&self, gl: &dyn GlApi, location: u32) {
        gl.uniform_f32(location, &self.to_array());
    }

    fn read(gl: &dyn GlApi, program: u32, location: u32) -> Self {
        let mut v = [0.0f32; 2];
        gl.get_uniform_f32(program, location, &mut v);
        Vec2::from_array(v)
    }
}

impl Uniform for Vec3 {
    fn upload(&self, gl: &dyn GlApi, location: u32) {
        gl.uniform_f32(location, &self.to_array());
    }

    fn read(gl: &dyn GlApi, program: u32, location: u32) -> Self {
        let mut v = [0.0f32; 3];
        gl.get_uniform_f32(program, location, &mut v);
        Vec3::from_array(v)
    }
}

impl Uniform for Vec4 {
    fn upload(&self, gl: &dyn GlApi, location: u32) {
        gl.uniform_f32(location, &self.to_array());
    }

    fn read(gl: &dyn GlApi, program: u32, location: u32) -> Self {
        let mut v = [0.0f32; 4];
        gl.get_uniform_f32(program, location, &mut v);
        Vec4::from_array(v)
    }
}

impl Uniform for Mat4 {
    fn upload(&self, gl: &dyn GlApi, location: u32) {
        gl.uniform_mat4(location, &self.to_cols_array());
    }

    fn read(gl: &dyn GlApi, program: u32, location: u32) -> Self {
        let mut v = [0.0f32; 16];
        gl.get_uniform_f32(program, location, &mut v);
        Mat4::from_cols_array(&v)
    }
}
