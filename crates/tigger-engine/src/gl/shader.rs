use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::assets::{Asset, AssetType};

use super::api::{Gl, ShaderStage};
use super::object::{GlObject, ObjectKind};
use super::uniform::{Uniform, UniformType, UniformValue};

/// Names containing this marker belong to engine uniform blocks and are not
/// listed as loose uniforms.
const ENGINE_BLOCK_MARKER: &str = "ubo_";

/// One active uniform discovered by [`Shader::query_uniforms`].
#[derive(Debug, Clone, PartialEq)]
pub struct UniformInfo {
    pub name: String,
    pub ty: UniformType,
    pub location: Option<u32>,
    /// Value at query time; `None` for samplers.
    pub value: Option<UniformValue>,
}

/// A linked GL program plus its uniform metadata.
pub struct Shader {
    obj: GlObject,
    file_path: PathBuf,
    uniforms: Vec<UniformInfo>,
    /// `None` entries remember names the program does not define.
    locations: RefCell<HashMap<String, Option<u32>>>,
}

impl Shader {
    /// Takes ownership of an already linked `program` and introspects it.
    pub fn from_program(gl: Gl, file_path: impl Into<PathBuf>, program: u32) -> Self {
        let mut shader = Self {
            obj: GlObject::new(gl, program, ObjectKind::Program),
            file_path: file_path.into(),
            uniforms: Vec::new(),
            locations: RefCell::new(HashMap::new()),
        };
        shader.query_uniforms();
        shader
    }

    /// Compiles and links a vertex/fragment pair.
    pub fn compile(
        gl: Gl,
        file_path: impl Into<PathBuf>,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<Self> {
        let file_path = file_path.into();
        let program = gl
            .link_program(&[
                (ShaderStage::Vertex, vertex_src),
                (ShaderStage::Fragment, fragment_src),
            ])
            .map_err(|e| anyhow!(e))
            .with_context(|| format!("failed to build shader {}", file_path.display()))?;

        log::debug!("linked shader {} as program {program}", file_path.display());
        Ok(Self::from_program(gl, file_path, program))
    }

    pub fn id(&self) -> u32 {
        self.obj.id()
    }

    pub(crate) fn gl(&self) -> &Gl {
        self.obj.gl()
    }

    /// Active uniforms found at construction (or the last `query_uniforms`).
    pub fn uniforms(&self) -> &[UniformInfo] {
        &self.uniforms
    }

    #[inline]
    pub fn bind(&self) {
        self.gl().use_program(self.id());
    }

    #[inline]
    pub fn unbind(&self) {
        self.gl().use_program(0);
    }

    /// Rebuilds the active uniform list with each uniform's current value.
    ///
    /// Uniform block members and unrecognized types are skipped.
    pub fn query_uniforms(&mut self) {
        self.uniforms.clear();

        let gl = self.obj.gl().clone();
        let program = self.id();

        for index in 0..gl.active_uniform_count(program) {
            let Some(active) = gl.active_uniform(program, index) else {
                continue;
            };
            if active.name.contains(ENGINE_BLOCK_MARKER) {
                continue;
            }
            let Some(ty) = UniformType::from_gl(active.gl_type) else {
                log::trace!("skipping uniform {} of GL type {:#x}", active.name, active.gl_type);
                continue;
            };

            let location = self.uniform_location(&active.name);
            let value = location.and_then(|loc| UniformValue::read(gl.as_ref(), program, loc, ty));

            self.uniforms.push(UniformInfo {
                name: active.name,
                ty,
                location,
                value,
            });
        }
    }

    /// Resolves `name` to a location, consulting the cache first.
    ///
    /// A miss is logged once and cached, so later lookups of the same name
    /// neither hit the driver nor warn again.
    pub fn uniform_location(&self, name: &str) -> Option<u32> {
        if let Some(cached) = self.locations.borrow().get(name) {
            return *cached;
        }

        let location = self.gl().uniform_location(self.id(), name);
        if location.is_none() {
            log::warn!("Uniform: {name} doesn't exist in {}", self.name());
        }

        self.locations.borrow_mut().insert(name.to_owned(), location);
        location
    }

    /// Writes a uniform on the currently bound program. Unknown names are a no-op.
    pub fn set_uniform<T: Uniform>(&self, name: &str, value: T) {
        if let Some(location) = self.uniform_location(name) {
            value.upload(self.gl().as_ref(), location);
        }
    }

    /// Reads a uniform's current value; `None` if the name is unknown.
    pub fn get_uniform<T: Uniform>(&self, name: &str) -> Option<T> {
        let location = self.uniform_location(name)?;
        Some(T::read(self.gl().as_ref(), self.id(), location))
    }

    pub fn dispose(self) {}
}

impl Asset for Shader {
    fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn asset_type(&self) -> AssetType {
        AssetType::Shader
    }
}
