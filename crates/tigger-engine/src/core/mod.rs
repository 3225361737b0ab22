//! Application layer.
//!
//! [`Application`] owns the window and drives the loop; user code plugs in by
//! implementing [`App`] and receives an [`AppCtx`] in every hook.

mod app;
mod application;

pub use app::{App, AppCtx};
pub use application::Application;
