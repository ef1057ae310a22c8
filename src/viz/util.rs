use crossterm::event::{Event, KeyCode, KeyEventKind};

/// Extract the key code from a key press event, ignoring releases and repeats
pub fn event_keycode(event: &Event) -> Option<KeyCode> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(key.code),
        _ => None,
    }
}
