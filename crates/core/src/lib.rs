//! Core field module - pure, deterministic, and testable
//!
//! This crate contains the field state model and the geometry that maps
//! screen coordinates to field addresses. It has no dependencies on terminal
//! I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical random fields
//! - **Testable**: Every read, write and mapping is a plain function call
//! - **Portable**: Can sit under any front end (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`field`]: `rows x columns` grid of cells with change observers
//! - [`geometry`]: cell size, centred field rectangle, cell rectangles, hit-testing
//! - [`rng`]: LCG and random field generation
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::{FieldLayout, Insets, Rect, TicTacToeField};
//! use tui_tictactoe_core::types::Cell;
//!
//! let mut field = TicTacToeField::new(3, 3).unwrap();
//! field.set(1, 1, Cell::PlayerOne);
//! assert_eq!(field.get(1, 1).unwrap(), Cell::PlayerOne);
//! assert!(field.get(3, 0).is_err());
//!
//! let layout = FieldLayout::compute(Rect::from_size(90.0, 60.0), Insets::default(), 3, 3, 0.2);
//! assert_eq!(layout.cell_size(), 20.0);
//! assert_eq!(layout.hit_test(45.0, 30.0), (1, 1));
//! ```

pub mod field;
pub mod geometry;
pub mod rng;

pub use tui_tictactoe_types as types;

// Re-export commonly used types for convenience
pub use field::{FieldError, Subscription, TicTacToeField};
pub use geometry::{measure, FieldLayout, Insets, MeasureSpec, Rect};
pub use rng::{random_field, SimpleRng};
