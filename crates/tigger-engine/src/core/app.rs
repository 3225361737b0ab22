use anyhow::Result;

use crate::events::Event;
use crate::gl::Gl;
use crate::time::FrameTime;

/// Handle passed to every [`App`] hook.
pub struct AppCtx {
    gl: Gl,
    close_requested: bool,
}

impl AppCtx {
    pub(crate) fn new(gl: Gl) -> Self {
        Self {
            gl,
            close_requested: false,
        }
    }

    /// Requests shutdown. The current loop iteration still completes.
    pub fn close(&mut self) {
        if !self.close_requested {
            log::info!("close requested");
        }
        self.close_requested = true;
    }

    pub fn is_close_requested(&self) -> bool {
        self.close_requested
    }

    /// GL context of the application window.
    pub fn gl(&self) -> &Gl {
        &self.gl
    }
}

/// Application contract implemented by games and tools.
pub trait App {
    /// Called once the window and GL context exist, before the first frame.
    fn on_attach(&mut self, ctx: &mut AppCtx) -> Result<()> {
        let _ = ctx;
        Ok(())
    }

    /// Called synchronously for every window event.
    fn on_event(&mut self, ctx: &mut AppCtx, event: &mut Event) {
        let _ = (ctx, event);
    }

    /// Called once per loop iteration while the window is not minimized.
    fn on_update(&mut self, ctx: &mut AppCtx, time: FrameTime);

    /// Called right before the window is disposed, while the GL context is
    /// still alive. GL resources must be released here.
    fn on_detach(&mut self, ctx: &mut AppCtx) {
        let _ = ctx;
    }
}
