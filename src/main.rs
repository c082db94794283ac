//! Terminal tic-tac-toe runner (default binary).
//!
//! Uses crossterm for key and mouse input and a framebuffer-based renderer.
//! The field controller holds all presentation state; this loop only
//! translates events and redraws when the controller asks for it.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{error, info};

use tui_tictactoe::cli::Cli;
use tui_tictactoe::engine::FieldController;
use tui_tictactoe::input::{handle_key_event, map_mouse_event, should_quit};
use tui_tictactoe::logging;
use tui_tictactoe::term::{FieldView, FrameBuffer, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_file)?;

    let controller = cli.controller()?;
    let (rows, columns) = controller
        .field()
        .map_or((0, 0), |field| (field.rows(), field.columns()));

    let mut term = TerminalRenderer::new();
    term.enter()?;
    info!(rows, columns, random = cli.random, fill = cli.fill, "session started");

    let result = run(&mut term, controller);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!(%err, "session ended with an error");
    }
    result
}

fn run(term: &mut TerminalRenderer, mut controller: FieldController) -> Result<()> {
    let view = FieldView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    controller.resize(view.bounds(viewport));

    loop {
        if controller.take_redraw() {
            view.render_into(&controller, viewport, &mut fb);
            term.draw(&fb)?;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key, controller.pending().is_some()) {
                    controller.apply(action)?;
                }
            }
            Event::Mouse(mouse) => {
                if let Some(pointer) = map_mouse_event(mouse) {
                    if let Some((row, column)) = controller.pointer(view.to_layout_event(pointer)) {
                        info!(row, column, "cell touched");
                    }
                }
            }
            Event::Resize(w, h) => {
                viewport = Viewport::new(w, h);
                term.invalidate();
                controller.resize(view.bounds(viewport));
                controller.request_redraw();
            }
            _ => {}
        }
    }
}
