//! Input handling for the preview.
//!
//! Terminal events are polled with a short timeout and mapped to [`Message`]
//! values the [`crate::App`] understands.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Something the preview should do in response to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Simulate the host app's refresh broadcast.
    Refresh,
    /// Move the row selection up.
    NavigateUp,
    /// Move the row selection down.
    NavigateDown,
    /// Tap the selected row.
    Activate,
    /// Tap the container background.
    ActivateContainer,
    /// Tap at a terminal position.
    ClickAt {
        /// Terminal column.
        column: u16,
        /// Terminal row.
        row: u16,
    },
    /// Leave the preview.
    Quit,
}

/// Waits briefly for a terminal event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Maps a terminal event to a message, if it is bound.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => key_to_message(*key),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

fn mouse_to_message(mouse: &MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::ClickAt {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// Maps a key press to a message.
///
/// | Key | Action |
/// |-----|--------|
/// | `r` | Refresh |
/// | `Up` / `Down` | Move selection |
/// | `Enter` | Tap selected row |
/// | `e` | Tap container |
/// | `q` or `Ctrl+C` | Quit |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Char('r') => Some(Message::Refresh),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),
        KeyCode::Enter => Some(Message::Activate),
        KeyCode::Char('e') => Some(Message::ActivateContainer),
        KeyCode::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 4,
            row: 2,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn bound_keys() {
        assert_eq!(key_to_message(key(KeyCode::Char('r'))), Some(Message::Refresh));
        assert_eq!(key_to_message(key(KeyCode::Up)), Some(Message::NavigateUp));
        assert_eq!(key_to_message(key(KeyCode::Down)), Some(Message::NavigateDown));
        assert_eq!(key_to_message(key(KeyCode::Enter)), Some(Message::Activate));
        assert_eq!(
            key_to_message(key(KeyCode::Char('e'))),
            Some(Message::ActivateContainer)
        );
    }

    #[test]
    fn quit_keys() {
        assert_eq!(key_to_message(key(KeyCode::Char('q'))), Some(Message::Quit));
        assert_eq!(
            key_to_message(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Message::Quit)
        );
    }

    #[test]
    fn unbound_keys() {
        assert_eq!(key_to_message(key(KeyCode::Char('c'))), None);
        assert_eq!(key_to_message(key(KeyCode::Esc)), None);
    }

    #[test]
    fn left_click_maps_to_position() {
        let event = Event::Mouse(mouse(MouseEventKind::Down(MouseButton::Left)));
        assert_eq!(
            event_to_message(&event),
            Some(Message::ClickAt { column: 4, row: 2 })
        );
    }

    #[test]
    fn other_mouse_events_ignored() {
        assert_eq!(mouse_to_message(&mouse(MouseEventKind::Down(MouseButton::Right))), None);
        assert_eq!(mouse_to_message(&mouse(MouseEventKind::Up(MouseButton::Left))), None);
        assert_eq!(mouse_to_message(&mouse(MouseEventKind::Moved)), None);
    }

    #[test]
    fn key_release_ignored() {
        let mut release = key(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        assert_eq!(event_to_message(&Event::Key(release)), None);
        assert_eq!(event_to_message(&Event::Resize(80, 24)), None);
    }
}
