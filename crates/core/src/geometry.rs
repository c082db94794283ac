//! Geometry module - maps between screen space and field addresses
//!
//! [`FieldLayout`] is computed from a drawable rectangle, its insets and the
//! field dimensions. Cells are uniform squares; the field is centred on the
//! axis that has slack.
//!
//! Units are whatever the caller draws in. The mapper does not guard against a
//! zero cell size: callers must check [`FieldLayout::is_ready`] before drawing
//! or hit-testing.

use crate::field::TicTacToeField;

/// Axis-aligned rectangle (`left <= right`, `top <= bottom` when well formed).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle anchored at the origin.
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }

    /// A `width` x `height` rectangle sharing this one's centre.
    pub fn centered(&self, width: f32, height: f32) -> Self {
        let left = self.left + (self.width() - width) / 2.0;
        let top = self.top + (self.height() - height) / 2.0;
        Self::new(left, top, left + width, top + height)
    }

    pub fn inset(&self, insets: Insets) -> Self {
        Self::new(
            self.left + insets.left,
            self.top + insets.top,
            self.right - insets.right,
            self.bottom - insets.bottom,
        )
    }

    /// Grow by `amount` on every side.
    pub fn outset(&self, amount: f32) -> Self {
        Self::new(
            self.left - amount,
            self.top - amount,
            self.right + amount,
            self.bottom + amount,
        )
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }
}

/// Padding between the drawable bounds and the area the field may use.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn uniform(amount: f32) -> Self {
        Self {
            left: amount,
            top: amount,
            right: amount,
            bottom: amount,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Cell geometry for one field inside one drawable area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldLayout {
    field: Rect,
    cell_size: f32,
    cell_padding: f32,
    rows: usize,
    columns: usize,
}

impl FieldLayout {
    /// Compute the layout for a `rows x columns` field inside `bounds`.
    ///
    /// `padding_fraction` is the share of the cell size kept free on each side
    /// of a cell's content; the resulting padding is truncated to whole units.
    pub fn compute(
        bounds: Rect,
        insets: Insets,
        rows: usize,
        columns: usize,
        padding_fraction: f32,
    ) -> Self {
        let usable = bounds.inset(insets);
        let usable_w = usable.width().max(0.0);
        let usable_h = usable.height().max(0.0);

        let cell_w = usable_w / columns as f32;
        let cell_h = usable_h / rows as f32;
        let cell_size = cell_w.min(cell_h);
        let cell_padding = (cell_size * padding_fraction).trunc();

        let field_w = cell_size * columns as f32;
        let field_h = cell_size * rows as f32;
        let left = usable.left + (usable_w - field_w) / 2.0;
        let top = usable.top + (usable_h - field_h) / 2.0;

        Self {
            field: Rect::new(left, top, left + field_w, top + field_h),
            cell_size,
            cell_padding,
            rows,
            columns,
        }
    }

    /// Layout for `field` with no insets.
    pub fn for_field(bounds: Rect, field: &TicTacToeField, padding_fraction: f32) -> Self {
        Self::compute(
            bounds,
            Insets::default(),
            field.rows(),
            field.columns(),
            padding_fraction,
        )
    }

    /// The centred rectangle actually occupied by the grid.
    pub fn field_rect(&self) -> Rect {
        self.field
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn cell_padding(&self) -> f32 {
        self.cell_padding
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Whether drawing and hit-testing make sense.
    pub fn is_ready(&self) -> bool {
        self.cell_size > 0.0 && self.field.width() > 0.0 && self.field.height() > 0.0
    }

    /// Content rectangle of a cell, shrunk by the padding on every side.
    pub fn cell_rect(&self, row: i32, column: i32) -> Rect {
        let left = self.field.left + self.cell_padding + column as f32 * self.cell_size;
        let top = self.field.top + row as f32 * self.cell_size + self.cell_padding;
        Rect::new(
            left,
            top,
            left - 2.0 * self.cell_padding + self.cell_size,
            top - 2.0 * self.cell_padding + self.cell_size,
        )
    }

    /// Full cell area used to highlight the selected cell.
    pub fn highlight_rect(&self, row: i32, column: i32) -> Rect {
        self.cell_rect(row, column).outset(self.cell_padding)
    }

    /// Map a point to `(row, column)`.
    ///
    /// The result is not validated: points outside the field give negative or
    /// too-large indices.
    pub fn hit_test(&self, x: f32, y: f32) -> (i32, i32) {
        let row = ((y - self.field.top) / self.cell_size).floor() as i32;
        let column = ((x - self.field.left) / self.cell_size).floor() as i32;
        (row, column)
    }

    /// Hit-test validated against `field`.
    pub fn cell_at(&self, x: f32, y: f32, field: &TicTacToeField) -> Option<(i32, i32)> {
        if !self.is_ready() {
            return None;
        }
        let (row, column) = self.hit_test(x, y);
        field
            .is_valid_address(row, column)
            .then_some((row, column))
    }

    /// Y of horizontal grid line `index` (`0..=rows`).
    pub fn horizontal_line_y(&self, index: usize) -> f32 {
        self.field.top + index as f32 * self.cell_size
    }

    /// X of vertical grid line `index` (`0..=columns`).
    pub fn vertical_line_x(&self, index: usize) -> f32 {
        self.field.left + index as f32 * self.cell_size
    }
}

/// Constraint handed down by a parent when measuring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureSpec {
    /// Parent dictates the size.
    Exactly(f32),
    /// Parent allows up to this size.
    AtMost(f32),
    /// No constraint.
    Unspecified,
}

impl MeasureSpec {
    /// Reconcile a desired size with the constraint.
    pub fn resolve(self, desired: f32) -> f32 {
        match self {
            MeasureSpec::Exactly(size) => size,
            MeasureSpec::AtMost(max) => desired.min(max),
            MeasureSpec::Unspecified => desired,
        }
    }
}

/// Preferred `(width, height)` for a field at `desired_cell_size` per cell.
///
/// Each axis is at least its minimum plus insets, then resolved against the
/// parent's constraint.
pub fn measure(
    rows: usize,
    columns: usize,
    desired_cell_size: f32,
    insets: Insets,
    min_size: (f32, f32),
    spec: (MeasureSpec, MeasureSpec),
) -> (f32, f32) {
    let min_w = min_size.0 + insets.horizontal();
    let min_h = min_size.1 + insets.vertical();

    let approx_w = columns as f32 * desired_cell_size + insets.horizontal();
    let approx_h = rows as f32 * desired_cell_size + insets.vertical();

    (
        spec.0.resolve(approx_w.max(min_w)),
        spec.1.resolve(approx_h.max(min_h)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_area_fills_exactly() {
        let layout = FieldLayout::compute(Rect::from_size(300.0, 300.0), Insets::default(), 3, 3, 0.0);
        assert_eq!(layout.cell_size(), 100.0);
        assert_eq!(layout.field_rect(), Rect::new(0.0, 0.0, 300.0, 300.0));
    }

    #[test]
    fn wide_area_centres_horizontally() {
        let layout = FieldLayout::compute(Rect::from_size(500.0, 300.0), Insets::default(), 3, 3, 0.0);
        assert_eq!(layout.cell_size(), 100.0);
        assert_eq!(layout.field_rect().left, 100.0);
        assert_eq!(layout.field_rect().right, 400.0);
        assert_eq!(layout.field_rect().top, 0.0);
    }

    #[test]
    fn insets_shift_the_field() {
        let layout = FieldLayout::compute(
            Rect::from_size(320.0, 320.0),
            Insets::uniform(10.0),
            3,
            3,
            0.0,
        );
        assert_eq!(layout.cell_size(), 100.0);
        assert_eq!(layout.field_rect().left, 10.0);
        assert_eq!(layout.field_rect().top, 10.0);
    }

    #[test]
    fn padding_is_truncated() {
        let layout = FieldLayout::compute(Rect::from_size(33.0, 33.0), Insets::default(), 3, 3, 0.2);
        assert_eq!(layout.cell_size(), 11.0);
        assert_eq!(layout.cell_padding(), 2.0);

        let rect = layout.cell_rect(0, 0);
        assert_eq!(rect, Rect::new(2.0, 2.0, 9.0, 9.0));
        assert_eq!(layout.highlight_rect(0, 0), Rect::new(0.0, 0.0, 11.0, 11.0));
    }

    #[test]
    fn degenerate_area_is_not_ready() {
        let layout = FieldLayout::compute(Rect::from_size(0.0, 300.0), Insets::default(), 3, 3, 0.2);
        assert!(!layout.is_ready());

        let squeezed = FieldLayout::compute(
            Rect::from_size(10.0, 10.0),
            Insets::uniform(8.0),
            3,
            3,
            0.2,
        );
        assert!(!squeezed.is_ready());
    }

    #[test]
    fn hit_test_floors_negative_offsets() {
        let layout = FieldLayout::compute(Rect::from_size(300.0, 300.0), Insets::uniform(0.0), 3, 3, 0.0);
        assert_eq!(layout.hit_test(-0.5, -0.5), (-1, -1));
        assert_eq!(layout.hit_test(299.9, 0.0), (0, 2));
        assert_eq!(layout.hit_test(300.0, 300.0), (3, 3));
    }

    #[test]
    fn grid_lines_span_the_field() {
        let layout = FieldLayout::compute(Rect::from_size(400.0, 300.0), Insets::default(), 3, 2, 0.0);
        assert_eq!(layout.cell_size(), 100.0);
        assert_eq!(layout.horizontal_line_y(0), 0.0);
        assert_eq!(layout.horizontal_line_y(3), 300.0);
        assert_eq!(layout.vertical_line_x(0), 100.0);
        assert_eq!(layout.vertical_line_x(2), 300.0);
    }

    #[test]
    fn centered_keeps_the_midpoint() {
        let outer = Rect::new(10.0, 20.0, 50.0, 40.0);
        let inner = outer.centered(10.0, 4.0);
        assert_eq!(inner, Rect::new(25.0, 28.0, 35.0, 32.0));
        assert_eq!((inner.center_x(), inner.center_y()), (outer.center_x(), outer.center_y()));
    }

    #[test]
    fn measure_resolves_each_axis() {
        let size = measure(
            3,
            4,
            30.0,
            Insets::uniform(5.0),
            (0.0, 200.0),
            (MeasureSpec::Unspecified, MeasureSpec::AtMost(150.0)),
        );
        assert_eq!(size, (130.0, 150.0));

        let exact = measure(
            3,
            3,
            30.0,
            Insets::default(),
            (0.0, 0.0),
            (MeasureSpec::Exactly(50.0), MeasureSpec::Exactly(60.0)),
        );
        assert_eq!(exact, (50.0, 60.0));
    }
}
