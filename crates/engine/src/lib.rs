//! Field controller - presentation state around one field.
//!
//! The controller is the event-driven adapter between a front end and the core:
//! it owns the current field, keeps its layout in sync with the drawable area,
//! tracks the selected cell, whose turn it is and any pending confirmation, and
//! raises a redraw flag whenever something visible changed.
//!
//! It has no terminal dependencies; pointer positions arrive already converted
//! into layout units.

pub mod controller;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use controller::FieldController;
