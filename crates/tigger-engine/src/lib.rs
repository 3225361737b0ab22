//! Tigger engine crate.
//!
//! Windowing, the event model and OpenGL resource wrappers used by games
//! built on Tigger.

pub mod assets;
pub mod core;
pub mod events;
pub mod gl;
pub mod input;
pub mod logging;
pub mod time;
pub mod window;
