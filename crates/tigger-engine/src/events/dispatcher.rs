use super::event::{Event, EventVariant};

/// Routes one event through a chain of typed handlers.
///
/// ```ignore
/// let mut dispatcher = EventDispatcher::new(&mut event);
/// dispatcher.dispatch::<WindowResizeEvent>(|e| on_resize(e.width, e.height));
/// dispatcher.dispatch::<KeyPressedEvent>(|e| e.key == Key::Escape);
/// ```
pub struct EventDispatcher<'a> {
    event: &'a mut Event,
}

impl<'a> EventDispatcher<'a> {
    pub fn new(event: &'a mut Event) -> Self {
        Self { event }
    }

    pub fn event(&self) -> &Event {
        self.event
    }

    /// Invokes `handler` if the bound event is a `V`.
    ///
    /// Returns whether the handler ran. The handler's own result is ORed into
    /// the event's `handled` flag, so a handled event stays handled.
    pub fn dispatch<V: EventVariant>(&mut self, handler: impl FnOnce(&V) -> bool) -> bool {
        let Some(payload) = V::from_kind(self.event.kind()) else {
            return false;
        };

        let handled = handler(payload);
        self.event.accumulate_handled(handled);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{
        KeyPressedEvent, MouseMovedEvent, WindowCloseEvent, WindowResizeEvent,
    };
    use crate::input::Key;

    fn resize() -> Event {
        Event::new(WindowResizeEvent { width: 640, height: 480 })
    }

    #[test]
    fn non_matching_type_skips_handler() {
        let mut event = resize();
        let mut called = false;

        let dispatched = EventDispatcher::new(&mut event).dispatch::<WindowCloseEvent>(|_| {
            called = true;
            true
        });

        assert!(!dispatched);
        assert!(!called);
        assert!(!event.handled());
    }

    #[test]
    fn matching_type_reports_dispatch_even_when_unhandled() {
        let mut event = resize();
        let mut seen = None;

        let dispatched = EventDispatcher::new(&mut event).dispatch::<WindowResizeEvent>(|e| {
            seen = Some((e.width, e.height));
            false
        });

        assert!(dispatched);
        assert_eq!(seen, Some((640, 480)));
        assert!(!event.handled());
    }

    #[test]
    fn matching_type_sets_handled() {
        let mut event = resize();
        assert!(EventDispatcher::new(&mut event).dispatch::<WindowResizeEvent>(|_| true));
        assert!(event.handled());
    }

    #[test]
    fn handled_is_monotone_across_a_chain() {
        let mut event = Event::new(KeyPressedEvent {
            key: Key::Escape,
            code: 1,
            repeat_count: 0,
        });

        let mut dispatcher = EventDispatcher::new(&mut event);
        assert!(dispatcher.dispatch::<KeyPressedEvent>(|e| e.key == Key::Escape));
        assert!(dispatcher.event().handled());

        // A later matching handler returning false does not clear the flag.
        assert!(dispatcher.dispatch::<KeyPressedEvent>(|_| false));
        assert!(!dispatcher.dispatch::<MouseMovedEvent>(|_| false));
        assert!(dispatcher.event().handled());
    }

    #[test]
    fn chain_runs_only_the_matching_handler() {
        let mut event = Event::new(MouseMovedEvent { x: 10.0, y: 20.0 });
        let mut calls = Vec::new();

        let mut dispatcher = EventDispatcher::new(&mut event);
        dispatcher.dispatch::<WindowResizeEvent>(|_| {
            calls.push("resize");
            true
        });
        dispatcher.dispatch::<MouseMovedEvent>(|_| {
            calls.push("moved");
            false
        });
        dispatcher.dispatch::<KeyPressedEvent>(|_| {
            calls.push("key");
            true
        });

        assert_eq!(calls, ["moved"]);
        assert!(!event.handled());
    }
}
