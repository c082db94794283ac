//! TUI Tic-Tac-Toe (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_tictactoe::{core,engine,input,term,types}`
//! and hosts the binary's CLI and logging setup.

pub mod cli;
pub mod logging;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_engine as engine;
pub use tui_tictactoe_input as input;
pub use tui_tictactoe_term as term;
pub use tui_tictactoe_types as types;
