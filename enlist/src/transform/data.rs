//! Data block round trip and the first write of the cleaned file.

use std::path::Path;

use crate::error::CsvResult;
use crate::models::{DataBlock, MergedHeader};
use crate::parser::{read_rows_utf8, write_indexed_table, write_rows, LineEnding};

/// Write the data block to `path` and read it back as strings, minus the
/// column-name line. Each row keeps its ordinal as the first field.
pub fn round_trip_data(block: &DataBlock, path: &Path) -> CsvResult<Vec<Vec<String>>> {
    write_indexed_table(path, block)?;
    let mut rows = read_rows_utf8(path)?;
    if !rows.is_empty() {
        rows.remove(0);
    }
    Ok(rows)
}

/// Write the merged header followed by the data rows, replacing any file
/// at `path`.
pub fn write_clean(path: &Path, header: &MergedHeader, rows: &[Vec<String>]) -> CsvResult<()> {
    write_rows(path, Some(header.as_slice()), rows, LineEnding::CrLf)
}
