//! Platform-agnostic input identifiers.
//!
//! Events carry these instead of winit types; the window layer owns the
//! mapping from winit codes.

mod keys;
mod mouse;

pub use keys::Key;
pub use mouse::MouseButton;

pub(crate) use keys::map_physical_key;
pub(crate) use mouse::map_mouse_button;
