//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (field model, controller, terminal rendering).
//!
//! # Field Dimensions
//!
//! A field is a generic `rows x columns` grid. Randomly generated fields pick
//! both dimensions from [`RANDOM_FIELD_MIN`]..=[`RANDOM_FIELD_MAX`].
//!
//! # Layout Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CELL_PADDING_FRACTION` | 0.2 | Share of the cell size kept free around a mark |
//! | `DESIRED_CELL_SIZE` | 3 | Preferred cell size in layout units when measuring |
//! | `TERMINAL_COLUMNS_PER_UNIT` | 2 | Terminal columns per layout unit (glyph aspect) |
//!
//! # Examples
//!
//! ```
//! use tui_tictactoe_types::{Cell, FieldAction, Player};
//!
//! assert_eq!(Player::One.mark(), Cell::PlayerOne);
//! assert_eq!(Player::One.opponent(), Player::Two);
//!
//! let action = FieldAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, FieldAction::MoveLeft);
//! ```

/// Share of the cell size used as padding between the cell border and its mark.
pub const CELL_PADDING_FRACTION: f32 = 0.2;

/// Preferred cell size (layout units) used when measuring a desired view size.
pub const DESIRED_CELL_SIZE: f32 = 3.0;

/// Terminal glyphs are roughly twice as tall as wide.
pub const TERMINAL_COLUMNS_PER_UNIT: u16 = 2;

/// Smallest dimension of a randomly generated field (inclusive).
pub const RANDOM_FIELD_MIN: usize = 7;

/// Largest dimension of a randomly generated field (inclusive).
pub const RANDOM_FIELD_MAX: usize = 11;

/// Default dimensions for a freshly started field.
pub const DEFAULT_ROWS: usize = 3;
pub const DEFAULT_COLUMNS: usize = 3;

/// State of one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    /// All cell states, in the order used by random generation.
    pub const ALL: [Cell; 3] = [Cell::Empty, Cell::PlayerOne, Cell::PlayerTwo];

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Player owning this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
        }
    }
}

/// Whose turn it is. Presentation state, never stored in the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Player {
    #[default]
    One,
    Two,
}

impl Player {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The cell value this player writes.
    pub fn mark(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Player::One => "one",
            Player::Two => "two",
        }
    }
}

/// Which destructive operation is waiting for user confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Confirm {
    /// Reset every cell of the current field.
    Clear,
    /// Replace the current field with a new random one.
    Regenerate,
}

impl Confirm {
    /// Prompt shown while the confirmation is pending.
    pub fn prompt(&self) -> &'static str {
        match self {
            Confirm::Clear => "Clear the field? (y/n)",
            Confirm::Regenerate => "Generate a new field? (y/n)",
        }
    }
}

/// Keyboard-level actions understood by the field controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Act on the selected cell (the keyboard counterpart of a tap).
    Place,
    RequestClear,
    RequestRegenerate,
    Accept,
    Dismiss,
}

impl FieldAction {
    /// Parse an action from its camelCase name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "moveUp" => Some(FieldAction::MoveUp),
            "moveDown" => Some(FieldAction::MoveDown),
            "moveLeft" => Some(FieldAction::MoveLeft),
            "moveRight" => Some(FieldAction::MoveRight),
            "place" => Some(FieldAction::Place),
            "requestClear" => Some(FieldAction::RequestClear),
            "requestRegenerate" => Some(FieldAction::RequestRegenerate),
            "accept" => Some(FieldAction::Accept),
            "dismiss" => Some(FieldAction::Dismiss),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldAction::MoveUp => "moveUp",
            FieldAction::MoveDown => "moveDown",
            FieldAction::MoveLeft => "moveLeft",
            FieldAction::MoveRight => "moveRight",
            FieldAction::Place => "place",
            FieldAction::RequestClear => "requestClear",
            FieldAction::RequestRegenerate => "requestRegenerate",
            FieldAction::Accept => "accept",
            FieldAction::Dismiss => "dismiss",
        }
    }

    /// Row/column delta for movement actions.
    pub fn direction(&self) -> Option<(i32, i32)> {
        match self {
            FieldAction::MoveUp => Some((-1, 0)),
            FieldAction::MoveDown => Some((1, 0)),
            FieldAction::MoveLeft => Some((0, -1)),
            FieldAction::MoveRight => Some((0, 1)),
            _ => None,
        }
    }
}

/// Pointer gesture phases, in layout-independent screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up { x: f32, y: f32 },
}

impl PointerEvent {
    pub fn position(&self) -> (f32, f32) {
        match *self {
            PointerEvent::Down { x, y } | PointerEvent::Move { x, y } | PointerEvent::Up { x, y } => {
                (x, y)
            }
        }
    }

    /// Same phase at a different position.
    pub fn with_position(self, x: f32, y: f32) -> Self {
        match self {
            PointerEvent::Down { .. } => PointerEvent::Down { x, y },
            PointerEvent::Move { .. } => PointerEvent::Move { x, y },
            PointerEvent::Up { .. } => PointerEvent::Up { x, y },
        }
    }
}
