//! Cell cleaning rules applied by the loader.
//!
//! Order matters and mirrors a dataframe load: forward-fill merged cells
//! across the row, strip thousands separators, then coerce numerics.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Cell;

/// Optional sign, digits with optional fraction (or a bare fraction),
/// optional exponent.
static NUMERIC_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$").expect("valid numeric pattern")
});

/// Propagate each non-empty cell rightward into the empty cells after it.
///
/// Leading empty cells have nothing to inherit and stay empty.
pub fn forward_fill(cells: &[Cell]) -> Vec<Cell> {
    let mut last: Option<&Cell> = None;
    cells
        .iter()
        .map(|cell| {
            if cell.is_empty() {
                last.cloned().unwrap_or(Cell::Empty)
            } else {
                last = Some(cell);
                cell.clone()
            }
        })
        .collect()
}

/// Remove every comma from a text cell.
pub fn strip_separators(cell: Cell) -> Cell {
    match cell {
        Cell::Text(s) if s.contains(',') => Cell::Text(s.replace(',', "")),
        other => other,
    }
}

/// Turn a text cell holding a numeric literal into a numeric cell.
/// Anything that does not parse passes through unchanged.
pub fn coerce_numeric(cell: Cell) -> Cell {
    match cell {
        Cell::Text(s) if NUMERIC_LITERAL.is_match(&s) => match s.parse::<f64>() {
            Ok(value) => Cell::Number { value, literal: s },
            Err(_) => Cell::Text(s),
        },
        other => other,
    }
}

/// All loader rules, in order, over one row.
pub fn clean_row(cells: &[Cell]) -> Vec<Cell> {
    forward_fill(cells)
        .into_iter()
        .map(strip_separators)
        .map(coerce_numeric)
        .collect()
}
