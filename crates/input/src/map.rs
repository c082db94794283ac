//! Mapping from terminal events to field actions and pointer gestures.

use crate::types::{FieldAction, PointerEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map keyboard input to field actions.
///
/// `dialog_open` switches to the confirmation key set, where `n` means "no"
/// instead of "new field".
pub fn handle_key_event(key: KeyEvent, dialog_open: bool) -> Option<FieldAction> {
    if dialog_open {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(FieldAction::Accept),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(FieldAction::Dismiss),
            _ => None,
        };
    }

    match key.code {
        // Selection
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(FieldAction::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(FieldAction::MoveRight)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(FieldAction::MoveUp)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(FieldAction::MoveDown)
        }

        // Actions
        KeyCode::Enter | KeyCode::Char(' ') => Some(FieldAction::Place),
        KeyCode::Char('c') | KeyCode::Char('C') if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(FieldAction::RequestClear)
        }
        KeyCode::Char('n') | KeyCode::Char('N') => Some(FieldAction::RequestRegenerate),

        _ => None,
    }
}

/// Map left-button mouse input to pointer gestures at terminal coordinates.
pub fn map_mouse_event(mouse: MouseEvent) -> Option<PointerEvent> {
    let x = mouse.column as f32;
    let y = mouse.row as f32;
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Down { x, y }),
        MouseEventKind::Drag(MouseButton::Left) => Some(PointerEvent::Move { x, y }),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Up { x, y }),
        _ => None,
    }
}

/// Check if key should quit.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
