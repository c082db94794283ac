//! Command-line interface for tui-tictactoe.

use std::path::PathBuf;

use anyhow::Result;
use clap::builder::TypedValueParser;
use clap::Parser;

use crate::core::{random_field, SimpleRng, TicTacToeField};
use crate::engine::FieldController;
use crate::types::{DEFAULT_COLUMNS, DEFAULT_ROWS, DESIRED_CELL_SIZE};

/// Terminal tic-tac-toe field: select cells with the mouse or the keyboard
#[derive(Parser, Debug)]
#[command(name = "tui-tictactoe")]
#[command(about = "Terminal tic-tac-toe field with mouse and keyboard selection", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Number of rows of the initial field
    #[arg(long, env = "TICTACTOE_ROWS", default_value_t = DEFAULT_ROWS, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    pub rows: usize,

    /// Number of columns of the initial field
    #[arg(long, env = "TICTACTOE_COLUMNS", default_value_t = DEFAULT_COLUMNS, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    pub columns: usize,

    /// Start from a random field instead of an empty one
    #[arg(long)]
    pub random: bool,

    /// Preferred cell size in rows (a cell is twice as many columns wide)
    #[arg(long, env = "TICTACTOE_CELL_SIZE", default_value_t = DESIRED_CELL_SIZE, value_parser = parse_cell_size)]
    pub cell_size: f32,

    /// Stretch the field over the whole terminal, ignoring --cell-size
    #[arg(long)]
    pub fill: bool,

    /// Seed for random field generation
    #[arg(long, env = "TICTACTOE_SEED", default_value_t = 1)]
    pub seed: u32,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long, default_value = "tui-tictactoe.log")]
    pub log_file: PathBuf,
}

fn parse_cell_size(s: &str) -> Result<f32, String> {
    let size: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if size.is_finite() && size >= 1.0 {
        Ok(size)
    } else {
        Err(format!("cell size must be at least 1, got {s}"))
    }
}

impl Cli {
    /// Controller holding the initial field, sized per `--cell-size`/`--fill`.
    pub fn controller(&self) -> Result<FieldController> {
        let mut rng = SimpleRng::new(self.seed);
        let field = self.initial_field(&mut rng)?;
        // Regeneration continues from a different point of the seed's sequence.
        let controller = FieldController::new(rng.next_u32()).with_field(field);
        Ok(match self.desired_cell_size() {
            Some(cell_size) => controller.with_desired_cell_size(cell_size),
            None => controller,
        })
    }

    /// Cell size the controller measures the field with, `None` to fill.
    pub fn desired_cell_size(&self) -> Option<f32> {
        (!self.fill).then_some(self.cell_size)
    }

    /// The field the session starts with.
    ///
    /// A random start consumes values from `rng`, so later regenerations
    /// continue the same sequence.
    pub fn initial_field(&self, rng: &mut SimpleRng) -> Result<TicTacToeField> {
        let field = if self.random {
            random_field(rng)?
        } else {
            TicTacToeField::new(self.rows, self.columns)?
        };
        Ok(field)
    }
}
