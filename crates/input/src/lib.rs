//! Terminal input module (controller-facing).
//!
//! This module is intentionally independent of any UI framework beyond
//! `crossterm` events. It maps key events into [`crate::types::FieldAction`]
//! and left-button mouse events into [`crate::types::PointerEvent`] in
//! terminal cell coordinates.

pub mod map;

pub use tui_tictactoe_types as types;

pub use map::{handle_key_event, map_mouse_event, should_quit};
