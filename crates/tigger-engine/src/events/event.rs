use std::fmt;

use crate::input::{Key, MouseButton};

use super::types::{EventCategory, EventType};

// ── window ────────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct WindowCloseEvent;

/// New framebuffer size in physical pixels.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct WindowResizeEvent {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct WindowFocusEvent;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct WindowLostFocusEvent;

/// New outer position of the window in physical screen pixels.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct WindowMovedEvent {
    pub x: i32,
    pub y: i32,
}

// ── application ───────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AppTickEvent;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AppUpdateEvent;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AppRenderEvent;

// ── keyboard ──────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyPressedEvent {
    pub key: Key,
    /// Stable platform key code.
    pub code: u32,
    /// 0 for the initial press, 1 for auto-repeats.
    pub repeat_count: u32,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyReleasedEvent {
    pub key: Key,
    pub code: u32,
}

/// A character produced by a key press.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyTypedEvent {
    pub character: char,
}

// ── mouse ─────────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MouseButtonPressedEvent {
    pub button: MouseButton,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MouseButtonReleasedEvent {
    pub button: MouseButton,
}

/// Cursor position in physical pixels relative to the window's client area.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MouseMovedEvent {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MouseScrolledEvent {
    pub x_offset: f32,
    pub y_offset: f32,
}

/// Implemented by every concrete event payload.
///
/// `from_kind` is the typed projection used by
/// [`EventDispatcher::dispatch`](super::EventDispatcher::dispatch).
pub trait EventVariant: Sized {
    const EVENT_TYPE: EventType;

    fn from_kind(kind: &EventKind) -> Option<&Self>;
}

macro_rules! event_kinds {
    ($( $variant:ident($payload:ident) => $category:expr ),* $(,)?) => {
        /// Tagged union over all event payloads.
        #[derive(Debug, Clone, PartialEq)]
        pub enum EventKind {
            $( $variant($payload), )*
        }

        impl EventKind {
            pub fn event_type(&self) -> EventType {
                match self {
                    $( Self::$variant(_) => EventType::$variant, )*
                }
            }

            pub fn categories(&self) -> EventCategory {
                match self {
                    $( Self::$variant(_) => $category, )*
                }
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => stringify!($payload), )*
                }
            }
        }

        impl fmt::Display for EventKind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $( Self::$variant(e) => fmt::Display::fmt(e, f), )*
                }
            }
        }

        $(
            impl From<$payload> for EventKind {
                fn from(e: $payload) -> Self {
                    Self::$variant(e)
                }
            }

            impl EventVariant for $payload {
                const EVENT_TYPE: EventType = EventType::$variant;

                fn from_kind(kind: &EventKind) -> Option<&Self> {
                    match kind {
                        EventKind::$variant(e) => Some(e),
                        _ => None,
                    }
                }
            }
        )*
    };
}

const KEYBOARD_INPUT: EventCategory = EventCategory::KEYBOARD.union(EventCategory::INPUT);
const MOUSE_INPUT: EventCategory = EventCategory::MOUSE.union(EventCategory::INPUT);
const MOUSE_BUTTON_INPUT: EventCategory = EventCategory::MOUSE_BUTTON.union(MOUSE_INPUT);

event_kinds! {
    WindowClose(WindowCloseEvent) => EventCategory::APPLICATION,
    WindowResize(WindowResizeEvent) => EventCategory::APPLICATION,
    WindowFocus(WindowFocusEvent) => EventCategory::APPLICATION,
    WindowLostFocus(WindowLostFocusEvent) => EventCategory::APPLICATION,
    WindowMoved(WindowMovedEvent) => EventCategory::APPLICATION,

    AppTick(AppTickEvent) => EventCategory::APPLICATION,
    AppUpdate(AppUpdateEvent) => EventCategory::APPLICATION,
    AppRender(AppRenderEvent) => EventCategory::APPLICATION,

    KeyPressed(KeyPressedEvent) => KEYBOARD_INPUT,
    KeyReleased(KeyReleasedEvent) => KEYBOARD_INPUT,
    KeyTyped(KeyTypedEvent) => KEYBOARD_INPUT,

    MouseButtonPressed(MouseButtonPressedEvent) => MOUSE_BUTTON_INPUT,
    MouseButtonReleased(MouseButtonReleasedEvent) => MOUSE_BUTTON_INPUT,
    MouseMoved(MouseMovedEvent) => MOUSE_INPUT,
    MouseScrolled(MouseScrolledEvent) => MOUSE_INPUT,
}

/// One occurrence delivered through the event callback.
///
/// Type and categories are fixed by the payload. The only mutable part is the
/// `handled` flag, which only a dispatcher can raise.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    kind: EventKind,
    handled: bool,
}

impl Event {
    pub fn new(kind: impl Into<EventKind>) -> Self {
        Self {
            kind: kind.into(),
            handled: false,
        }
    }

    pub fn kind(&self) -> &EventKind {
        &self.kind
    }

    pub fn event_type(&self) -> EventType {
        self.kind.event_type()
    }

    pub fn categories(&self) -> EventCategory {
        self.kind.categories()
    }

    /// True iff the event shares at least one category bit with `category`.
    pub fn is_in_category(&self, category: EventCategory) -> bool {
        self.categories().intersects(category)
    }

    pub fn handled(&self) -> bool {
        self.handled
    }

    /// Payload type name, e.g. `"WindowResizeEvent"`.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Typed view of the payload if it is a `V`.
    pub fn get<V: EventVariant>(&self) -> Option<&V> {
        V::from_kind(&self.kind)
    }

    /// ORs `handled` into the flag; never clears it.
    pub(super) fn accumulate_handled(&mut self, handled: bool) {
        self.handled |= handled;
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

// ── display ───────────────────────────────────────────────────────────────

impl fmt::Display for WindowCloseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WindowCloseEvent")
    }
}

impl fmt::Display for WindowResizeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindowResizeEvent: ({}, {})", self.width, self.height)
    }
}

impl fmt::Display for WindowFocusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WindowFocusEvent")
    }
}

impl fmt::Display for WindowLostFocusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WindowLostFocusEvent")
    }
}

impl fmt::Display for WindowMovedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindowMovedEvent: ({}, {})", self.x, self.y)
    }
}

impl fmt::Display for AppTickEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppTickEvent")
    }
}

impl fmt::Display for AppUpdateEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppUpdateEvent")
    }
}

impl fmt::Display for AppRenderEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppRenderEvent")
    }
}

impl fmt::Display for KeyPressedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "KeyPressedEvent: {} ({} repeats)",
            self.key, self.repeat_count
        )
    }
}

impl fmt::Display for KeyReleasedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyReleasedEvent: {}", self.key)
    }
}

impl fmt::Display for KeyTypedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyTypedEvent: {:?}", self.character)
    }
}

impl fmt::Display for MouseButtonPressedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseButtonPressedEvent: {}", self.button)
    }
}

impl fmt::Display for MouseButtonReleasedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseButtonReleasedEvent: {}", self.button)
    }
}

impl fmt::Display for MouseMovedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseMovedEvent: ({}, {})", self.x, self.y)
    }
}

impl fmt::Display for MouseScrolledEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseScrolledEvent: ({}, {})", self.x_offset, self.y_offset)
    }
}
