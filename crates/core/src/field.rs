//! Field module - the tic-tac-toe grid state model
//!
//! A field is a `rows x columns` grid where each cell is empty or carries one
//! player's mark. Dimensions are fixed at construction. Storage is a flat
//! row-major vector: index = row * columns + column.
//!
//! Reads of invalid addresses fail with [`FieldError::OutOfRange`]; writes to
//! invalid addresses are silently ignored. Effective writes notify every
//! subscribed observer synchronously with the new cell value.
//!
//! Observers must not re-enter [`TicTacToeField::set`] on the same field while
//! they run.

use std::fmt;

use derive_more::{Display, Error};
use tracing::{debug, trace};

use crate::types::Cell;

/// Errors raised by field construction and reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum FieldError {
    #[display("address ({row}, {column}) is outside a {rows}x{columns} field")]
    OutOfRange {
        row: i32,
        column: i32,
        rows: usize,
        columns: usize,
    },
    #[display("field dimensions must be positive, got {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },
}

/// Handle returned by [`TicTacToeField::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Observer = Box<dyn FnMut(Cell)>;

/// The grid: fixed dimensions, one [`Cell`] per valid address, plus observers.
pub struct TicTacToeField {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    observers: Vec<(Subscription, Observer)>,
    next_subscription: u64,
}

impl TicTacToeField {
    /// Create an all-empty field.
    pub fn new(rows: usize, columns: usize) -> Result<Self, FieldError> {
        if rows == 0 || columns == 0 {
            return Err(FieldError::InvalidDimensions { rows, columns });
        }
        Ok(Self {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
            observers: Vec::new(),
            next_subscription: 0,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `0 <= row < rows && 0 <= column < columns`
    pub fn is_valid_address(&self, row: i32, column: i32) -> bool {
        row >= 0 && column >= 0 && (row as usize) < self.rows && (column as usize) < self.columns
    }

    #[inline(always)]
    fn index(&self, row: i32, column: i32) -> Option<usize> {
        if !self.is_valid_address(row, column) {
            return None;
        }
        Some(row as usize * self.columns + column as usize)
    }

    /// Get the cell at (row, column).
    pub fn get(&self, row: i32, column: i32) -> Result<Cell, FieldError> {
        self.index(row, column)
            .map(|idx| self.cells[idx])
            .ok_or(FieldError::OutOfRange {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            })
    }

    /// Write a cell and notify observers.
    ///
    /// Invalid addresses and writes of the value already stored are no-ops.
    /// Returns whether the field changed.
    pub fn set(&mut self, row: i32, column: i32, value: Cell) -> bool {
        let Some(idx) = self.index(row, column) else {
            return false;
        };
        if self.cells[idx] == value {
            return false;
        }

        self.cells[idx] = value;
        trace!(row, column, ?value, "cell changed");
        for (_, observer) in self.observers.iter_mut() {
            observer(value);
        }
        true
    }

    /// Reset every cell to [`Cell::Empty`].
    ///
    /// This is a whole-field reset: observers are not notified per cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
        debug!(rows = self.rows, columns = self.columns, "field cleared");
    }

    /// Register an observer invoked with the new value on every effective write.
    pub fn subscribe(&mut self, observer: impl FnMut(Cell) + 'static) -> Subscription {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((subscription, Box::new(observer)));
        debug!(id = subscription.0, observers = self.observers.len(), "observer subscribed");
        subscription
    }

    /// Remove an observer. Returns false if the handle was not registered.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(id, _)| *id != subscription);
        let removed = self.observers.len() != before;
        debug!(id = subscription.0, removed, "observer unsubscribed");
        removed
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// Iterate `(row, column, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| ((idx / columns) as i32, (idx % columns) as i32, *cell))
    }
}

impl fmt::Debug for TicTacToeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TicTacToeField")
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("cells", &self.cells)
            .field("observers", &self.observers.len())
            .finish()
    }
}
