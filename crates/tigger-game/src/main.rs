use anyhow::{Context, Result};
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec4};

use tigger_engine::core::{App, AppCtx, Application};
use tigger_engine::events::{
    Event, EventDispatcher, KeyPressedEvent, WindowCloseEvent, WindowResizeEvent,
};
use tigger_engine::gl::{BufferUsage, IndexBuffer, Shader, UniformBuffer, VertexArray, VertexBuffer};
use tigger_engine::input::Key;
use tigger_engine::time::FrameTime;
use tigger_engine::window::WindowProps;

const CAMERA_BINDING: u32 = 0;

const VERTEX_SRC: &str = r#"#version 330 core
layout(location = 0) in vec3 a_Position;
layout(location = 1) in vec4 a_Color;

layout(std140) uniform Camera {
    mat4 ubo_ViewProjection;
};

out vec4 v_Color;

void main() {
    v_Color = a_Color;
    gl_Position = ubo_ViewProjection * vec4(a_Position, 1.0);
}
"#;

const FRAGMENT_SRC: &str = r#"#version 330 core
in vec4 v_Color;

uniform vec4 u_Tint;
uniform float u_Time;

out vec4 color;

void main() {
    float pulse = 0.75 + 0.25 * sin(u_Time * 2.0);
    color = v_Color * u_Tint * vec4(vec3(pulse), 1.0);
}
"#;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Vertex {
    position: [f32; 3],
    color: [f32; 4],
}

const VERTICES: [Vertex; 3] = [
    Vertex { position: [-0.5, -0.5, 0.0], color: [0.9, 0.2, 0.2, 1.0] },
    Vertex { position: [0.5, -0.5, 0.0], color: [0.2, 0.9, 0.2, 1.0] },
    Vertex { position: [0.0, 0.5, 0.0], color: [0.2, 0.2, 0.9, 1.0] },
];

const INDICES: [u32; 3] = [0, 1, 2];

/// GL resources of the sandbox scene.
struct Scene {
    shader: Shader,
    vertex_array: VertexArray,
    vertex_buffer: VertexBuffer,
    index_buffer: IndexBuffer,
    camera: UniformBuffer,
}

impl Scene {
    fn new(ctx: &AppCtx, aspect: f32) -> Result<Self> {
        let gl = ctx.gl();

        let vertex_array = VertexArray::new(gl.clone());
        let vertex_buffer = VertexBuffer::new(gl.clone(), bytemuck::cast_slice(&VERTICES));
        let stride = size_of::<Vertex>() as i32;
        vertex_array.bind_attribute(0, &vertex_buffer, 3, stride, 0);
        vertex_array.bind_attribute(1, &vertex_buffer, 4, stride, 3 * size_of::<f32>() as i32);
        let index_buffer = IndexBuffer::new(gl.clone(), &INDICES);
        vertex_array.unbind();

        let shader = Shader::compile(gl.clone(), "shaders/sandbox.glsl", VERTEX_SRC, FRAGMENT_SRC)
            .context("sandbox shader")?;

        let camera = UniformBuffer::new(
            gl.clone(),
            size_of::<Mat4>(),
            CAMERA_BINDING,
            0,
            BufferUsage::DynamicDraw,
        );
        UniformBuffer::bind_block_to_shader(&shader, "Camera", CAMERA_BINDING);

        let scene = Self {
            shader,
            vertex_array,
            vertex_buffer,
            index_buffer,
            camera,
        };
        scene.set_aspect(aspect);
        Ok(scene)
    }

    fn set_aspect(&self, aspect: f32) {
        let projection = Mat4::orthographic_rh_gl(-aspect, aspect, -1.0, 1.0, -1.0, 1.0);
        self.camera.set_data(&projection, 0);
    }

    fn draw(&self, ctx: &AppCtx, time: f32) {
        self.shader.bind();
        self.shader.set_uniform("u_Tint", Vec4::ONE);
        self.shader.set_uniform("u_Time", time);

        self.vertex_array.bind();
        self.index_buffer.bind();
        ctx.gl().draw_indexed_triangles(self.index_buffer.count() as i32);
        self.vertex_array.unbind();
    }

    fn dispose(self) {
        self.camera.dispose();
        self.index_buffer.dispose();
        self.vertex_buffer.dispose();
        self.vertex_array.dispose();
        self.shader.dispose();
    }
}

struct Sandbox {
    aspect: f32,
    elapsed: f32,
    scene: Option<Scene>,
}

impl Sandbox {
    fn new(props: &WindowProps) -> Self {
        Self {
            aspect: props.width as f32 / props.height.max(1) as f32,
            elapsed: 0.0,
            scene: None,
        }
    }
}

impl App for Sandbox {
    fn on_attach(&mut self, ctx: &mut AppCtx) -> Result<()> {
        let scene = Scene::new(ctx, self.aspect)?;
        for uniform in scene.shader.uniforms() {
            log::debug!("sandbox uniform {} ({:?}) = {:?}", uniform.name, uniform.ty, uniform.value);
        }
        self.scene = Some(scene);
        Ok(())
    }

    fn on_event(&mut self, ctx: &mut AppCtx, event: &mut Event) {
        let mut dispatcher = EventDispatcher::new(event);

        dispatcher.dispatch::<WindowCloseEvent>(|_| {
            ctx.close();
            true
        });

        dispatcher.dispatch::<KeyPressedEvent>(|e| {
            if e.key == Key::Escape {
                ctx.close();
                return true;
            }
            false
        });

        dispatcher.dispatch::<WindowResizeEvent>(|e| {
            if e.height == 0 {
                return false;
            }
            self.aspect = e.width as f32 / e.height as f32;
            if let Some(scene) = &self.scene {
                scene.set_aspect(self.aspect);
            }
            false
        });
    }

    fn on_update(&mut self, ctx: &mut AppCtx, time: FrameTime) {
        self.elapsed += time.dt;

        ctx.gl().clear([0.1, 0.1, 0.12, 1.0]);
        if let Some(scene) = &self.scene {
            scene.draw(ctx, self.elapsed);
        }
    }

    fn on_detach(&mut self, _ctx: &mut AppCtx) {
        if let Some(scene) = self.scene.take() {
            scene.dispose();
        }
        log::info!("sandbox released its GL resources");
    }
}

fn main() -> Result<()> {
    let props = WindowProps::default();
    let sandbox = Sandbox::new(&props);

    Application::new(props, sandbox)?.run();
    Ok(())
}
