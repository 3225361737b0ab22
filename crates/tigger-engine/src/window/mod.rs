//! Native window and GL context.
//!
//! [`Window`] is the glutin/winit implementation; the application loop only
//! sees it through [`PlatformWindow`].

mod props;
mod translate;
#[allow(clippy::module_inception)]
mod window;

pub use props::{WindowMode, WindowPlacement, WindowProps};
pub use window::Window;

use crate::events::Event;
use crate::gl::Gl;

/// What the application loop needs from a window.
pub trait PlatformWindow {
    /// False once a close was requested or the native window is gone.
    fn exists(&self) -> bool;

    fn minimized(&self) -> bool;

    /// Processes pending native events without blocking, invoking `callback`
    /// synchronously for each translated event.
    fn on_update(&mut self, callback: &mut dyn FnMut(&mut Event));

    fn swap_buffers(&mut self);

    fn make_current(&mut self);

    /// Handle to the window's GL context.
    fn gl(&self) -> Gl;
}
