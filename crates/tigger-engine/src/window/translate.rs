use winit::event::{ElementState, Ime, MouseScrollDelta, WindowEvent};

use crate::events::{
    Event, EventKind, KeyPressedEvent, KeyReleasedEvent, KeyTypedEvent, MouseButtonPressedEvent,
    MouseButtonReleasedEvent, MouseMovedEvent, MouseScrolledEvent, WindowCloseEvent,
    WindowFocusEvent, WindowLostFocusEvent, WindowMovedEvent, WindowResizeEvent,
};
use crate::input::{map_mouse_button, map_physical_key};

/// Translates one winit event into zero or more engine events.
///
/// A key press that produces text emits `KeyPressed` followed by one
/// `KeyTyped` per printable character.
pub(crate) fn translate_window_event(event: &WindowEvent, mut emit: impl FnMut(Event)) {
    match event {
        WindowEvent::Resized(size) => emit(Event::new(WindowResizeEvent {
            width: size.width,
            height: size.height,
        })),

        WindowEvent::Moved(pos) => emit(Event::new(WindowMovedEvent { x: pos.x, y: pos.y })),

        WindowEvent::CloseRequested => emit(Event::new(WindowCloseEvent)),

        WindowEvent::Focused(true) => emit(Event::new(WindowFocusEvent)),
        WindowEvent::Focused(false) => emit(Event::new(WindowLostFocusEvent)),

        WindowEvent::KeyboardInput { event, .. } => {
            let (key, code) = map_physical_key(event.physical_key);
            match event.state {
                ElementState::Pressed => {
                    emit(Event::new(KeyPressedEvent {
                        key,
                        code,
                        repeat_count: u32::from(event.repeat),
                    }));
                    if let Some(text) = &event.text {
                        emit_typed(text, &mut emit);
                    }
                }
                ElementState::Released => emit(Event::new(KeyReleasedEvent { key, code })),
            }
        }

        WindowEvent::Ime(Ime::Commit(text)) => emit_typed(text, &mut emit),

        WindowEvent::CursorMoved { position, .. } => emit(Event::new(MouseMovedEvent {
            x: position.x as f32,
            y: position.y as f32,
        })),

        WindowEvent::MouseWheel { delta, .. } => {
            let (x_offset, y_offset) = match delta {
                MouseScrollDelta::LineDelta(x, y) => (*x, *y),
                MouseScrollDelta::PixelDelta(p) => (p.x as f32, p.y as f32),
            };
            emit(Event::new(MouseScrolledEvent { x_offset, y_offset }));
        }

        WindowEvent::MouseInput { state, button, .. } => {
            let button = map_mouse_button(*button);
            let kind: EventKind = match state {
                ElementState::Pressed => MouseButtonPressedEvent { button }.into(),
                ElementState::Released => MouseButtonReleasedEvent { button }.into(),
            };
            emit(Event::new(kind));
        }

        _ => {}
    }
}

fn emit_typed(text: &str, emit: &mut impl FnMut(Event)) {
    for character in text.chars().filter(|c| !c.is_control()) {
        emit(Event::new(KeyTypedEvent { character }));
    }
}
