use bitflags::bitflags;

/// Discriminator for every event the engine can emit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EventType {
    WindowClose,
    WindowResize,
    WindowFocus,
    WindowLostFocus,
    WindowMoved,

    AppTick,
    AppUpdate,
    AppRender,

    KeyPressed,
    KeyReleased,
    KeyTyped,

    MouseButtonPressed,
    MouseButtonReleased,
    MouseMoved,
    MouseScrolled,
}

bitflags! {
    /// Coarse classification of events.
    ///
    /// A single event may belong to several categories; mouse button events
    /// are `MOUSE_BUTTON | MOUSE | INPUT`. `EventCategory::empty()` is "none".
    #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
    pub struct EventCategory: u32 {
        const APPLICATION  = 1 << 0;
        const INPUT        = 1 << 1;
        const KEYBOARD     = 1 << 2;
        const MOUSE        = 1 << 3;
        const MOUSE_BUTTON = 1 << 4;
    }
}

impl Default for EventCategory {
    fn default() -> Self {
        Self::empty()
    }
}
