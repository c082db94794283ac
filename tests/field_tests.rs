//! Field tests - reads, writes, notifications and clearing

use std::cell::RefCell;
use std::rc::Rc;

use tui_tictactoe::core::{FieldError, TicTacToeField};
use tui_tictactoe::types::Cell;

fn recording(field: &mut TicTacToeField) -> Rc<RefCell<Vec<Cell>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    field.subscribe(move |cell| sink.borrow_mut().push(cell));
    seen
}

#[test]
fn test_set_then_get_every_valid_address() {
    let mut field = TicTacToeField::new(4, 5).unwrap();

    for row in 0..4 {
        for column in 0..5 {
            let value = if (row + column) % 2 == 0 {
                Cell::PlayerOne
            } else {
                Cell::PlayerTwo
            };
            field.set(row, column, value);
            assert_eq!(field.get(row, column).unwrap(), value);
        }
    }
}

#[test]
fn test_invalid_get_is_out_of_range() {
    let field = TicTacToeField::new(3, 4).unwrap();

    for (row, column) in [(-1, 0), (0, -1), (3, 0), (0, 4), (3, 4), (i32::MIN, i32::MAX)] {
        assert_eq!(
            field.get(row, column),
            Err(FieldError::OutOfRange {
                row,
                column,
                rows: 3,
                columns: 4
            }),
            "({}, {}) should be out of range",
            row,
            column
        );
    }
}

#[test]
fn test_invalid_set_is_silent_noop() {
    let mut field = TicTacToeField::new(3, 3).unwrap();
    let seen = recording(&mut field);

    assert!(!field.set(-1, 0, Cell::PlayerOne));
    assert!(!field.set(0, -1, Cell::PlayerOne));
    assert!(!field.set(3, 0, Cell::PlayerOne));
    assert!(!field.set(0, 3, Cell::PlayerOne));

    assert!(seen.borrow().is_empty());
    assert_eq!(field.count(Cell::Empty), 9);
}

#[test]
fn test_duplicate_write_notifies_once() {
    let mut field = TicTacToeField::new(3, 3).unwrap();
    let seen = recording(&mut field);

    field.set(1, 1, Cell::PlayerOne);
    assert_eq!(field.get(1, 1).unwrap(), Cell::PlayerOne);
    field.set(1, 1, Cell::PlayerOne);

    assert_eq!(*seen.borrow(), vec![Cell::PlayerOne]);
    assert!(field.get(3, 0).is_err());
}

#[test]
fn test_writing_empty_over_empty_is_suppressed() {
    let mut field = TicTacToeField::new(2, 2).unwrap();
    let seen = recording(&mut field);

    field.set(0, 0, Cell::Empty);

    assert!(seen.borrow().is_empty());
}

#[test]
fn test_every_observer_is_notified() {
    let mut field = TicTacToeField::new(2, 2).unwrap();
    let first = recording(&mut field);
    let second = recording(&mut field);

    field.set(0, 1, Cell::PlayerTwo);

    assert_eq!(*first.borrow(), vec![Cell::PlayerTwo]);
    assert_eq!(*second.borrow(), vec![Cell::PlayerTwo]);
}

#[test]
fn test_clear_resets_every_cell() {
    let mut field = TicTacToeField::new(3, 4).unwrap();
    for row in 0..3 {
        for column in 0..4 {
            field.set(row, column, Cell::PlayerTwo);
        }
    }

    field.clear();

    for row in 0..3 {
        for column in 0..4 {
            assert_eq!(field.get(row, column).unwrap(), Cell::Empty);
        }
    }
}

#[test]
fn test_dimensions_are_fixed() {
    let mut field = TicTacToeField::new(2, 7).unwrap();
    field.set(1, 6, Cell::PlayerOne);
    field.clear();
    assert_eq!((field.rows(), field.columns()), (2, 7));
    assert!(field.is_valid_address(1, 6));
    assert!(!field.is_valid_address(2, 6));
    assert!(!field.is_valid_address(1, 7));
}
