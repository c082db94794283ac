//! FieldView: maps a [`FieldController`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Geometry is computed in layout units: one unit is one terminal row tall and
//! `columns_per_unit` terminal columns wide, so square cells look square.

use crate::core::{FieldLayout, Rect};
use crate::engine::FieldController;
use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};
use crate::types::{Player, PointerEvent, TERMINAL_COLUMNS_PER_UNIT};

/// Rows reserved at the bottom for the status line.
const STATUS_ROWS: u16 = 1;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Colours used by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub first_player: Rgb,
    pub second_player: Rgb,
    pub background: Rgb,
    pub grid: Rgb,
    pub selected_cell: Rgb,
    pub text: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            first_player: Rgb::new(0, 255, 255),
            second_player: Rgb::new(0, 0, 255),
            background: Rgb::new(255, 255, 255),
            grid: Rgb::new(136, 136, 136),
            selected_cell: Rgb::new(240, 240, 240),
            text: Rgb::new(0, 0, 0),
        }
    }
}

/// A lightweight terminal renderer for one field.
pub struct FieldView {
    palette: Palette,
    columns_per_unit: u16,
    show_status: bool,
}

impl Default for FieldView {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            columns_per_unit: TERMINAL_COLUMNS_PER_UNIT,
            show_status: true,
        }
    }
}

impl FieldView {
    pub fn new(columns_per_unit: u16) -> Self {
        Self {
            columns_per_unit: columns_per_unit.max(1),
            ..Self::default()
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn without_status(mut self) -> Self {
        self.show_status = false;
        self
    }

    /// Drawable area in layout units.
    ///
    /// One row and one column are held back so the closing grid lines of a
    /// field that fills the area still land inside the viewport.
    pub fn bounds(&self, viewport: Viewport) -> Rect {
        let reserved = if self.show_status { STATUS_ROWS } else { 0 };
        let width = (viewport.width as f32 - 1.0) / self.columns_per_unit as f32;
        let height = viewport.height as f32 - reserved as f32 - 1.0;
        Rect::from_size(width, height)
    }

    /// Centre of terminal cell `(column, row)` in layout units.
    pub fn to_layout_point(&self, column: f32, row: f32) -> (f32, f32) {
        ((column + 0.5) / self.columns_per_unit as f32, row + 0.5)
    }

    /// Convert a pointer event from terminal cells to layout units.
    pub fn to_layout_event(&self, event: PointerEvent) -> PointerEvent {
        let (column, row) = event.position();
        let (x, y) = self.to_layout_point(column, row);
        event.with_position(x, y)
    }

    fn term_x(&self, x: f32) -> i32 {
        (x * self.columns_per_unit as f32).floor() as i32
    }

    fn term_y(&self, y: f32) -> i32 {
        y.floor() as i32
    }

    /// Terminal span `(x0, y0, x1, y1)` of a layout rectangle, end-exclusive.
    fn span(&self, rect: Rect) -> (i32, i32, i32, i32) {
        (
            self.term_x(rect.left),
            self.term_y(rect.top),
            self.term_x(rect.right),
            self.term_y(rect.bottom),
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, controller: &FieldController, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph {
            ch: ' ',
            style: CellStyle::new(self.palette.text, self.palette.background),
        });

        self.draw_field(controller, fb);

        if let Some(confirm) = controller.pending() {
            self.draw_overlay_text(fb, viewport, confirm.prompt());
        }
        if self.show_status {
            self.draw_status(fb, controller, viewport);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, controller: &FieldController, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(controller, viewport, &mut fb);
        fb
    }

    fn draw_field(&self, controller: &FieldController, fb: &mut FrameBuffer) {
        let Some(field) = controller.field() else {
            return;
        };
        let layout = controller.layout();
        if !layout.is_ready() {
            return;
        }

        if controller.has_valid_selection() {
            if let Some((row, column)) = controller.selected() {
                self.draw_selected_cell(fb, layout.highlight_rect(row, column));
            }
        }

        for (row, column, cell) in field.iter() {
            if let Some(player) = cell.owner() {
                self.draw_mark(fb, layout, layout.cell_rect(row, column), player);
            }
        }

        self.draw_grid(fb, layout);
    }

    fn draw_selected_cell(&self, fb: &mut FrameBuffer, rect: Rect) {
        let (x0, y0, x1, y1) = self.span(rect);
        for y in y0..y1 {
            for x in x0..x1 {
                fb.paint_bg(x, y, self.palette.selected_cell);
            }
        }
    }

    fn draw_mark(&self, fb: &mut FrameBuffer, layout: &FieldLayout, rect: Rect, player: Player) {
        let (mut x0, mut y0, x1, y1) = self.span(rect);
        // Without whole-unit padding the content starts on the grid line.
        if layout.cell_padding() < 1.0 {
            x0 += 1;
            y0 += 1;
        }
        let w = x1 - x0;
        let h = y1 - y0;
        if w <= 0 || h <= 0 {
            return;
        }

        let color = match player {
            Player::One => self.palette.first_player,
            Player::Two => self.palette.second_player,
        };

        if h < 3 || w < 5 {
            let ch = match player {
                Player::One => 'X',
                Player::Two => 'O',
            };
            fb.overlay_char(x0 + w / 2, y0 + h / 2, ch, color, true);
            return;
        }

        match player {
            Player::One => draw_cross(fb, (x0, y0, w, h), color),
            Player::Two => draw_ring(fb, (x0, y0, w, h), color),
        }
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, layout: &FieldLayout) {
        let rows = layout.rows();
        let columns = layout.columns();
        let (left, top, right, bottom) = self.span(layout.field_rect());
        let color = self.palette.grid;

        for i in 0..=rows {
            let y = self.term_y(layout.horizontal_line_y(i));
            for x in left..=right {
                fb.overlay_char(x, y, '─', color, false);
            }
        }
        for j in 0..=columns {
            let x = self.term_x(layout.vertical_line_x(j));
            for y in top..=bottom {
                fb.overlay_char(x, y, '│', color, false);
            }
        }
        for i in 0..=rows {
            for j in 0..=columns {
                let x = self.term_x(layout.vertical_line_x(j));
                let y = self.term_y(layout.horizontal_line_y(i));
                fb.overlay_char(x, y, junction(i, j, rows, columns), color, false);
            }
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, viewport: Viewport, text: &str) {
        let text_w = text.chars().count() as i32;
        let box_w = text_w + 4;
        let box_h = 3;
        let x = (viewport.width as i32 - box_w).max(0) / 2;
        let y = (viewport.height as i32 - box_h).max(0) / 2;
        let style = CellStyle::new(self.palette.text, self.palette.selected_cell).bold();

        fb.fill_rect(x, y, box_w, box_h, ' ', style);
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + box_w - 1, y, '┐', style);
        fb.put_char(x, y + box_h - 1, '└', style);
        fb.put_char(x + box_w - 1, y + box_h - 1, '┘', style);
        for dx in 1..box_w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + box_h - 1, '─', style);
        }
        fb.put_char(x, y + 1, '│', style);
        fb.put_char(x + box_w - 1, y + 1, '│', style);
        fb.put_str(x + 2, y + 1, text, style);
    }

    fn draw_status(&self, fb: &mut FrameBuffer, controller: &FieldController, viewport: Viewport) {
        if viewport.height == 0 {
            return;
        }
        let y = viewport.height as i32 - 1;
        let style = CellStyle::new(self.palette.text, self.palette.background);

        if controller.field().is_none() {
            fb.put_str(0, y, "No field. n: new field  q: quit", style);
            return;
        }

        let turn = controller.turn();
        let (mark, color) = match turn {
            Player::One => ('X', self.palette.first_player),
            Player::Two => ('O', self.palette.second_player),
        };
        fb.put_str(0, y, "Turn: ", style);
        fb.put_char(6, y, mark, CellStyle::new(color, self.palette.background).bold());
        fb.put_str(
            8,
            y,
            "| arrows: select  enter: place  c: clear  n: new  q: quit",
            style,
        );
    }
}

/// Box-drawing character where grid line `i` (horizontal) meets line `j` (vertical).
fn junction(i: usize, j: usize, rows: usize, columns: usize) -> char {
    let top = i == 0;
    let bottom = i == rows;
    let left = j == 0;
    let right = j == columns;
    match (top, bottom, left, right) {
        (true, _, true, _) => '┌',
        (true, _, _, true) => '┐',
        (_, true, true, _) => '└',
        (_, true, _, true) => '┘',
        (true, _, _, _) => '┬',
        (_, true, _, _) => '┴',
        (_, _, true, _) => '├',
        (_, _, _, true) => '┤',
        _ => '┼',
    }
}

/// Two diagonals across the area.
fn draw_cross(fb: &mut FrameBuffer, (x0, y0, w, h): (i32, i32, i32, i32), color: Rgb) {
    for i in 0..h {
        let t = (i as f32 + 0.5) / h as f32;
        let offset = ((t * w as f32).floor() as i32).min(w - 1);
        let a = x0 + offset;
        let b = x0 + w - 1 - offset;
        if a == b {
            fb.overlay_char(a, y0 + i, 'X', color, true);
        } else {
            fb.overlay_char(a, y0 + i, '╲', color, true);
            fb.overlay_char(b, y0 + i, '╱', color, true);
        }
    }
}

/// Ring inscribed in the area.
fn draw_ring(fb: &mut FrameBuffer, (x0, y0, w, h): (i32, i32, i32, i32), color: Rgb) {
    let band = 1.0 / (w.min(h) as f32) + 0.1;
    for i in 0..h {
        let ny = (i as f32 + 0.5) / h as f32 * 2.0 - 1.0;
        for j in 0..w {
            let nx = (j as f32 + 0.5) / w as f32 * 2.0 - 1.0;
            let d = (nx * nx + ny * ny).sqrt();
            if (d - 0.75).abs() <= band {
                fb.overlay_char(x0 + j, y0 + i, 'O', color, true);
            }
        }
    }
}
