use std::cell::Cell as Flag;
use std::rc::Rc;

use tracing::{debug, info};

use crate::core::{
    measure, random_field, FieldError, FieldLayout, Insets, MeasureSpec, Rect, SimpleRng,
    Subscription, TicTacToeField,
};
use crate::types::{Confirm, FieldAction, Player, PointerEvent, CELL_PADDING_FRACTION};

/// Owns one field at a time plus everything the view shows around it.
pub struct FieldController {
    field: Option<TicTacToeField>,
    subscription: Option<Subscription>,
    redraw: Rc<Flag<bool>>,
    bounds: Rect,
    insets: Insets,
    padding_fraction: f32,
    desired_cell_size: Option<f32>,
    layout: FieldLayout,
    selected: Option<(i32, i32)>,
    turn: Player,
    pending: Option<Confirm>,
    rng: SimpleRng,
}

impl FieldController {
    pub fn new(seed: u32) -> Self {
        Self {
            field: None,
            subscription: None,
            redraw: Rc::new(Flag::new(true)),
            bounds: Rect::default(),
            insets: Insets::default(),
            padding_fraction: CELL_PADDING_FRACTION,
            desired_cell_size: None,
            layout: FieldLayout::default(),
            selected: None,
            turn: Player::One,
            pending: None,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn with_field(mut self, field: TicTacToeField) -> Self {
        self.set_field(Some(field));
        self
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self.update_layout();
        self
    }

    pub fn with_padding_fraction(mut self, padding_fraction: f32) -> Self {
        self.padding_fraction = padding_fraction;
        self.update_layout();
        self
    }

    /// Size the field to `cell_size` per cell, centred in the bounds, instead
    /// of stretching it over the whole area. The bounds still cap the size.
    pub fn with_desired_cell_size(mut self, cell_size: f32) -> Self {
        self.desired_cell_size = Some(cell_size);
        self.update_layout();
        self
    }

    pub fn field(&self) -> Option<&TicTacToeField> {
        self.field.as_ref()
    }

    /// Mutable access for callers that write cells directly. Writes still
    /// reach the redraw observer.
    pub fn field_mut(&mut self) -> Option<&mut TicTacToeField> {
        self.field.as_mut()
    }

    pub fn layout(&self) -> &FieldLayout {
        &self.layout
    }

    pub fn selected(&self) -> Option<(i32, i32)> {
        self.selected
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn pending(&self) -> Option<Confirm> {
        self.pending
    }

    /// Install a new field, returning the previous one.
    ///
    /// The redraw observer moves from the old field to the new one, and the
    /// layout is recomputed for the new dimensions.
    pub fn set_field(&mut self, field: Option<TicTacToeField>) -> Option<TicTacToeField> {
        let mut old = std::mem::replace(&mut self.field, field);
        if let (Some(old), Some(sub)) = (old.as_mut(), self.subscription.take()) {
            old.unsubscribe(sub);
        }

        if let Some(new) = self.field.as_mut() {
            let redraw = Rc::clone(&self.redraw);
            self.subscription = Some(new.subscribe(move |_| redraw.set(true)));
            info!(rows = new.rows(), columns = new.columns(), "field installed");
        }

        self.update_layout();
        self.request_redraw();
        old
    }

    /// The drawable area changed size.
    pub fn resize(&mut self, bounds: Rect) {
        if self.bounds == bounds {
            return;
        }
        self.bounds = bounds;
        self.update_layout();
        self.request_redraw();
    }

    fn update_layout(&mut self) {
        self.layout = match &self.field {
            Some(field) => FieldLayout::compute(
                self.layout_area(field),
                self.insets,
                field.rows(),
                field.columns(),
                self.padding_fraction,
            ),
            None => FieldLayout::default(),
        };
        debug!(
            cell_size = self.layout.cell_size(),
            ready = self.layout.is_ready(),
            "layout updated"
        );
    }

    /// Area the field is laid out in: the whole bounds, or the measured size
    /// when a desired cell size is set.
    fn layout_area(&self, field: &TicTacToeField) -> Rect {
        let Some(cell_size) = self.desired_cell_size else {
            return self.bounds;
        };
        let (width, height) = measure(
            field.rows(),
            field.columns(),
            cell_size,
            self.insets,
            (0.0, 0.0),
            (
                MeasureSpec::AtMost(self.bounds.width().max(0.0)),
                MeasureSpec::AtMost(self.bounds.height().max(0.0)),
            ),
        );
        self.bounds.centered(width, height)
    }

    pub fn request_redraw(&self) {
        self.redraw.set(true);
    }

    /// Returns whether a redraw was requested since the last call, and resets it.
    pub fn take_redraw(&mut self) -> bool {
        self.redraw.replace(false)
    }

    /// Whether the selected cell is a valid address on the current field.
    pub fn has_valid_selection(&self) -> bool {
        match (&self.field, self.selected) {
            (Some(field), Some((row, column))) => field.is_valid_address(row, column),
            _ => false,
        }
    }

    /// Feed one pointer event (layout units).
    ///
    /// Press and drag move the selection to the cell under the pointer, even
    /// outside the field; release clicks the selected cell. Returns the
    /// address acted upon by a release, if any.
    pub fn pointer(&mut self, event: PointerEvent) -> Option<(i32, i32)> {
        if self.pending.is_some() || self.field.is_none() || !self.layout.is_ready() {
            return None;
        }

        match event {
            PointerEvent::Down { x, y } | PointerEvent::Move { x, y } => {
                let hit = self.layout.hit_test(x, y);
                if self.selected != Some(hit) {
                    self.selected = Some(hit);
                    self.request_redraw();
                }
                None
            }
            PointerEvent::Up { .. } => self.perform_click(),
        }
    }

    /// Act on the selected cell if it is a valid address.
    pub fn perform_click(&mut self) -> Option<(i32, i32)> {
        if !self.has_valid_selection() {
            return None;
        }
        let (row, column) = self.selected?;
        self.touch_cell(row, column);
        Some((row, column))
    }

    /// Place the current player's mark on an empty cell and pass the turn.
    ///
    /// Occupied or invalid cells are left alone. Returns whether a mark was placed.
    pub fn touch_cell(&mut self, row: i32, column: i32) -> bool {
        let Some(field) = self.field.as_mut() else {
            return false;
        };
        if !matches!(field.get(row, column), Ok(cell) if cell.is_empty()) {
            return false;
        }

        field.set(row, column, self.turn.mark());
        debug!(row, column, player = self.turn.as_str(), "mark placed");
        self.turn = self.turn.opponent();
        true
    }

    /// Move the selection by a row/column delta.
    ///
    /// With nothing selected (or a selection outside the field) the move starts
    /// from the top-left cell. Moves that would leave the field are rejected.
    pub fn move_selection(&mut self, d_row: i32, d_column: i32) -> bool {
        let Some(field) = &self.field else {
            return false;
        };

        let (row, column) = match self.selected {
            Some((row, column)) if field.is_valid_address(row, column) => (row, column),
            _ => (0, 0),
        };
        let target = (row + d_row, column + d_column);
        if !field.is_valid_address(target.0, target.1) {
            return false;
        }

        self.selected = Some(target);
        self.request_redraw();
        true
    }

    /// Ask for confirmation before a destructive operation.
    pub fn request(&mut self, confirm: Confirm) {
        if confirm == Confirm::Clear && self.field.is_none() {
            return;
        }
        self.pending = Some(confirm);
        self.request_redraw();
    }

    /// Resolve the pending confirmation. Dismissal leaves the field untouched.
    pub fn resolve(&mut self, accepted: bool) -> Result<(), FieldError> {
        let Some(confirm) = self.pending.take() else {
            return Ok(());
        };
        self.request_redraw();
        if !accepted {
            debug!(?confirm, "confirmation dismissed");
            return Ok(());
        }

        match confirm {
            Confirm::Clear => self.clear_field(),
            Confirm::Regenerate => self.regenerate()?,
        }
        Ok(())
    }

    /// Empty every cell and drop the selection.
    pub fn clear_field(&mut self) {
        let Some(field) = self.field.as_mut() else {
            return;
        };
        field.clear();
        self.selected = None;
        self.request_redraw();
    }

    /// Replace the field with a random one and hand the turn back to player one.
    pub fn regenerate(&mut self) -> Result<(), FieldError> {
        let field = random_field(&mut self.rng)?;
        self.set_field(Some(field));
        self.turn = Player::One;
        Ok(())
    }

    /// Dispatch one keyboard action.
    ///
    /// While a confirmation is pending only `Accept` and `Dismiss` do anything.
    pub fn apply(&mut self, action: FieldAction) -> Result<(), FieldError> {
        if self.pending.is_some() {
            match action {
                FieldAction::Accept => self.resolve(true)?,
                FieldAction::Dismiss => self.resolve(false)?,
                _ => {}
            }
            return Ok(());
        }

        match action {
            FieldAction::MoveUp
            | FieldAction::MoveDown
            | FieldAction::MoveLeft
            | FieldAction::MoveRight => {
                if let Some((d_row, d_column)) = action.direction() {
                    self.move_selection(d_row, d_column);
                }
            }
            FieldAction::Place => {
                self.perform_click();
            }
            FieldAction::RequestClear => self.request(Confirm::Clear),
            FieldAction::RequestRegenerate => self.request(Confirm::Regenerate),
            FieldAction::Accept | FieldAction::Dismiss => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn controller(rows: usize, columns: usize) -> FieldController {
        let mut c = FieldController::new(1).with_field(TicTacToeField::new(rows, columns).unwrap());
        c.resize(Rect::from_size(30.0, 30.0));
        c.take_redraw();
        c
    }

    #[test]
    fn field_swap_moves_the_observer() {
        let mut c = controller(3, 3);
        assert_eq!(c.field().unwrap().observer_count(), 1);

        let old = c.set_field(Some(TicTacToeField::new(4, 4).unwrap())).unwrap();
        assert_eq!(old.observer_count(), 0);
        assert_eq!(c.field().unwrap().observer_count(), 1);
        assert_eq!(c.layout().rows(), 4);
    }

    #[test]
    fn observer_raises_redraw_on_writes() {
        let mut c = controller(3, 3);
        c.field_mut().unwrap().set(0, 0, Cell::PlayerTwo);
        assert!(c.take_redraw());
        assert!(!c.take_redraw());

        c.field_mut().unwrap().set(0, 0, Cell::PlayerTwo);
        assert!(!c.take_redraw());
    }

    #[test]
    fn pointer_ignored_when_layout_not_ready() {
        let mut c = FieldController::new(1).with_field(TicTacToeField::new(3, 3).unwrap());
        assert_eq!(c.pointer(PointerEvent::Down { x: 1.0, y: 1.0 }), None);
        assert_eq!(c.selected(), None);
    }

    #[test]
    fn outside_selection_restarts_keyboard_moves_at_origin() {
        let mut c = controller(3, 3);
        c.pointer(PointerEvent::Down { x: 50.0, y: 50.0 });
        assert_eq!(c.selected(), Some((5, 5)));

        assert!(c.move_selection(0, 1));
        assert_eq!(c.selected(), Some((0, 1)));
    }

    #[test]
    fn insets_and_padding_feed_the_layout() {
        let c = FieldController::new(1)
            .with_field(TicTacToeField::new(3, 3).unwrap())
            .with_insets(Insets::uniform(5.0))
            .with_padding_fraction(0.0);
        assert_eq!(c.layout().cell_size(), 0.0);

        let mut c = c;
        c.resize(Rect::from_size(40.0, 40.0));
        assert_eq!(c.layout().cell_size(), 10.0);
        assert_eq!(c.layout().field_rect().left, 5.0);
        assert_eq!(c.layout().cell_padding(), 0.0);
    }

    #[test]
    fn desired_cell_size_caps_the_layout() {
        let mut c = FieldController::new(1)
            .with_field(TicTacToeField::new(3, 3).unwrap())
            .with_desired_cell_size(5.0);
        c.resize(Rect::from_size(100.0, 60.0));

        assert_eq!(c.layout().cell_size(), 5.0);
        assert_eq!(c.layout().field_rect(), Rect::new(42.5, 22.5, 57.5, 37.5));

        // Smaller bounds win over the desired size.
        c.resize(Rect::from_size(9.0, 12.0));
        assert_eq!(c.layout().cell_size(), 3.0);

        // A regenerated field is measured with its own dimensions.
        c.resize(Rect::from_size(200.0, 200.0));
        c.regenerate().unwrap();
        let columns = c.field().unwrap().columns() as f32;
        assert_eq!(c.layout().cell_size(), 5.0);
        assert_eq!(c.layout().field_rect().width(), columns * 5.0);
    }
}
