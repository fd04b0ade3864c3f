//! Domain models for the cleaning pipeline.
//!
//! - [`Cell`] - one spreadsheet value (empty, text or numeric)
//! - [`Row`] - cells plus the row's ordinal in the loaded table
//! - [`Table`] - column-name line and rows, as produced by the loader
//! - [`HeaderBlock`] / [`DataBlock`] - the two halves produced by the splitter
//! - [`MergedHeader`] - the single concatenated header row

use std::fmt;

// =============================================================================
// Cell
// =============================================================================

/// A single cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Missing value.
    Empty,
    /// Anything that is not a numeric literal.
    Text(String),
    /// Numeric literal. The literal is kept so the cell serializes back
    /// exactly as it was read (`006` stays `006`).
    Number { value: f64, literal: String },
}

impl Cell {
    /// Build a cell from raw CSV text. No cleaning, no coercion.
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(raw.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Text as it will be written back to CSV.
    pub fn as_str(&self) -> &str {
        match self {
            Cell::Empty => "",
            Cell::Text(s) => s,
            Cell::Number { literal, .. } => literal,
        }
    }

    /// Numeric value, if the cell was coerced.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number { value, .. } => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Cell {
    fn from(raw: &str) -> Self {
        Cell::from_raw(raw)
    }
}

// =============================================================================
// Row / Table
// =============================================================================

/// One table row. `ordinal` is the row's position in the loaded table and
/// becomes the leading index column when the row is round-tripped to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub ordinal: usize,
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(ordinal: usize, cells: Vec<Cell>) -> Self {
        Self { ordinal, cells }
    }

    /// CSV record with the ordinal as the first field.
    pub fn to_indexed_record(&self) -> Vec<String> {
        std::iter::once(self.ordinal.to_string())
            .chain(self.cells.iter().map(|c| c.as_str().to_string()))
            .collect()
    }

    /// Cell texts, no ordinal.
    pub fn texts(&self) -> Vec<&str> {
        self.cells.iter().map(Cell::as_str).collect()
    }
}

/// Row-major table. `columns` is the raw file's first line; it is carried
/// along for the round trip but never treated as data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    /// Build a table, numbering rows from zero.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(i, cells)| Row::new(i, cells))
            .collect();
        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns declared by the column-name line.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Column-name line as written by the round trip: an empty label for
    /// the ordinal column, then the names.
    pub fn indexed_columns(&self) -> Vec<String> {
        std::iter::once(String::new())
            .chain(self.columns.iter().cloned())
            .collect()
    }
}

/// The top 4 rows of the loaded table: a 3-level merged spreadsheet header
/// (plus one discarded row).
pub type HeaderBlock = Table;

/// Everything after the header block.
pub type DataBlock = Table;

/// Single header row built by concatenating 3 header sub-rows.
pub type MergedHeader = Vec<String>;
