use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Fullscreen, Window as WinitWindow, WindowId};

use crate::events::Event;
use crate::gl::Gl;

use super::props::{centered_position, WindowMode, WindowPlacement, WindowProps};
use super::translate::translate_window_event;
use super::PlatformWindow;

/// A native window with a current OpenGL 3.3 core context.
///
/// The window owns its event loop and is pumped explicitly from
/// [`PlatformWindow::on_update`]; there is no callback-driven run loop.
pub struct Window {
    // Field order is drop order: GL objects go before the context and window.
    gl: Gl,
    gl_surface: Surface<WindowSurface>,
    gl_context: PossiblyCurrentContext,
    window: WinitWindow,
    exists: bool,
    event_loop: EventLoop<()>,
}

impl Window {
    pub fn new(props: &WindowProps) -> Result<Self> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;

        let mut attrs = WinitWindow::default_attributes()
            .with_title(props.title.clone())
            .with_inner_size(PhysicalSize::new(props.width, props.height))
            .with_visible(false);

        match props.mode {
            WindowMode::Maximized => attrs = attrs.with_maximized(true),
            WindowMode::Fullscreen => {
                attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)))
            }
            WindowMode::Normal | WindowMode::Minimized => {}
        }

        if let WindowPlacement::At { x, y } = props.placement() {
            attrs = attrs.with_position(PhysicalPosition::new(x, y));
        }

        let template = ConfigTemplateBuilder::new().with_alpha_size(8);
        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(attrs))
            .build(&event_loop, template, pick_config)
            .map_err(|e| anyhow!("failed to create GL display: {e}"))?;
        let window = window.context("GL display did not create a window")?;

        let raw_window_handle = window
            .window_handle()
            .ok()
            .map(|handle| handle.as_raw());
        let gl_display = gl_config.display();

        let context_attrs = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .with_profile(GlProfile::Core)
            .build(raw_window_handle);

        // SAFETY: the raw window handle comes from `window`, which outlives
        // the context (see field order).
        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attrs) }
            .context("failed to create an OpenGL 3.3 core context")?;

        let surface_attrs = window
            .build_surface_attributes(Default::default())
            .context("failed to describe the window surface")?;
        let gl_surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attrs) }
            .context("failed to create the window surface")?;

        let gl_context = not_current
            .make_current(&gl_surface)
            .context("failed to make the GL context current")?;

        let interval = if props.vsync {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        if let Err(e) = gl_surface.set_swap_interval(&gl_context, interval) {
            log::warn!("failed to set swap interval {interval:?}: {e}");
        }

        // SAFETY: the context was made current just above on this thread.
        let glow_context =
            unsafe { glow::Context::from_loader_function_cstr(|s| gl_display.get_proc_address(s)) };
        let gl: Gl = Rc::new(glow_context);

        if props.placement() == WindowPlacement::Centered {
            center_window(&window);
        }

        window.set_visible(true);
        if props.mode == WindowMode::Minimized {
            window.set_minimized(true);
        }

        log::info!(
            "created window \"{}\" ({}x{}, vsync {})",
            props.title,
            props.width,
            props.height,
            if props.vsync { "on" } else { "off" }
        );

        Ok(Self {
            gl,
            gl_surface,
            gl_context,
            window,
            exists: true,
            event_loop,
        })
    }

    pub fn inner_size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }
}

impl PlatformWindow for Window {
    fn exists(&self) -> bool {
        self.exists
    }

    fn minimized(&self) -> bool {
        self.window.is_minimized().unwrap_or_else(|| {
            let size = self.window.inner_size();
            size.width == 0 || size.height == 0
        })
    }

    fn on_update(&mut self, callback: &mut dyn FnMut(&mut Event)) {
        let mut pump = Pump {
            window: &self.window,
            gl: &self.gl,
            gl_surface: &self.gl_surface,
            gl_context: &self.gl_context,
            exists: &mut self.exists,
            callback,
        };

        if let PumpStatus::Exit(code) = self.event_loop.pump_app_events(Some(Duration::ZERO), &mut pump) {
            log::debug!("event loop exited with code {code}");
            self.exists = false;
        }
    }

    fn swap_buffers(&mut self) {
        if let Err(e) = self.gl_surface.swap_buffers(&self.gl_context) {
            log::error!("swap_buffers failed: {e}");
        }
    }

    fn make_current(&mut self) {
        if let Err(e) = self.gl_context.make_current(&self.gl_surface) {
            log::error!("make_current failed: {e}");
        }
    }

    fn gl(&self) -> Gl {
        self.gl.clone()
    }
}

/// Routes one non-blocking pump into the event callback.
struct Pump<'a, 'c> {
    window: &'a WinitWindow,
    gl: &'a Gl,
    gl_surface: &'a Surface<WindowSurface>,
    gl_context: &'a PossiblyCurrentContext,
    exists: &'a mut bool,
    callback: &'a mut (dyn FnMut(&mut Event) + 'c),
}

impl ApplicationHandler for Pump<'_, '_> {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if window_id != self.window.id() {
            return;
        }

        if let WindowEvent::Resized(size) = &event {
            if let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) {
                self.gl_surface.resize(self.gl_context, w, h);
                self.gl.viewport(0, 0, size.width as i32, size.height as i32);
            }
        }

        let callback = &mut *self.callback;
        translate_window_event(&event, |mut e| callback(&mut e));

        if matches!(event, WindowEvent::CloseRequested | WindowEvent::Destroyed) {
            *self.exists = false;
        }
    }
}

fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .reduce(|best, c| if c.num_samples() > best.num_samples() { c } else { best })
        // glutin-winit only calls the picker with a non-empty set, and the
        // picker has no error channel.
        .expect("no OpenGL configs available")
}

fn center_window(window: &WinitWindow) {
    let Some(monitor) = window.primary_monitor().or_else(|| window.current_monitor()) else {
        log::debug!("no monitor information; window left at platform default position");
        return;
    };

    let pos = monitor.position();
    let size = monitor.size();
    let outer = window.outer_size();
    let (x, y) = centered_position(
        (pos.x, pos.y),
        (size.width, size.height),
        (outer.width, outer.height),
    );
    window.set_outer_position(PhysicalPosition::new(x, y));
}
