//! CSV writing: plain rows with an optional header, and the indexed
//! round-trip format used for the intermediate files.

use csv::{Terminator, WriterBuilder};
use std::path::Path;

use crate::error::CsvResult;
use crate::models::Table;

/// Record terminator for a written file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// `\n`, used for the intermediate round-trip files.
    Lf,
    /// `\r\n`, used for the cleaned output.
    CrLf,
}

impl LineEnding {
    fn terminator(self) -> Terminator {
        match self {
            LineEnding::Lf => Terminator::Any(b'\n'),
            LineEnding::CrLf => Terminator::CRLF,
        }
    }
}

/// Write `rows` to `path`, preceded by `header` when it is given and
/// non-empty. Rows may differ in width. Overwrites an existing file.
pub fn write_rows<S: AsRef<str>>(
    path: &Path,
    header: Option<&[S]>,
    rows: &[Vec<S>],
    line_ending: LineEnding,
) -> CsvResult<()> {
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .terminator(line_ending.terminator())
        .from_path(path)?;

    if let Some(header) = header.filter(|h| !h.is_empty()) {
        writer.write_record(header.iter().map(|s| s.as_ref()))?;
    }
    for row in rows {
        writer.write_record(row.iter().map(|s| s.as_ref()))?;
    }

    writer.flush()?;
    Ok(())
}

/// Write a table the way a dataframe serializer would: the column-name
/// line with an empty leading label, then every row prefixed by its
/// ordinal.
pub fn write_indexed_table(path: &Path, table: &Table) -> CsvResult<()> {
    let header = table.indexed_columns();
    let rows: Vec<Vec<String>> = table.rows.iter().map(|r| r.to_indexed_record()).collect();
    write_rows(path, Some(header.as_slice()), &rows, LineEnding::Lf)
}
