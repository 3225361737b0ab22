//! Event model.
//!
//! Native window signals are translated into [`Event`]s by the window layer
//! and delivered synchronously to the application. Nothing here queues or
//! buffers; an event lives for the duration of one callback.

mod dispatcher;
mod event;
mod types;

pub use dispatcher::EventDispatcher;
pub use event::{
    AppRenderEvent,
    AppTickEvent,
    AppUpdateEvent,
    Event,
    EventKind,
    EventVariant,
    KeyPressedEvent,
    KeyReleasedEvent,
    KeyTypedEvent,
    MouseButtonPressedEvent,
    MouseButtonReleasedEvent,
    MouseMovedEvent,
    MouseScrolledEvent,
    WindowCloseEvent,
    WindowFocusEvent,
    WindowLostFocusEvent,
    WindowMovedEvent,
    WindowResizeEvent,
};
pub use types::{EventCategory, EventType};
