//! Terminal field renderer.
//!
//! Renders a field controller into a simple framebuffer that is then flushed
//! to a terminal backend, instead of using a widget toolkit.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure so it can be asserted on glyph by glyph
//! - Compensate for terminal glyph aspect ratio (2 columns per layout unit)

pub mod fb;
pub mod field_view;
pub mod renderer;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_engine as engine;
pub use tui_tictactoe_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use field_view::{FieldView, Palette, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
