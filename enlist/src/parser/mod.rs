//! CSV loading with encoding detection.
//!
//! Entry points:
//! - [`read_rows`] - every record as plain strings, no cleaning
//! - [`read_rows_utf8`] - the same for files this crate wrote, UTF-8 only
//! - [`load_table`] - the loader: column-name line, padded rows, and the
//!   cleaning rules from [`clean`]
//!
//! Input that is valid UTF-8 is always read as UTF-8. Detection only runs
//! when it is not.

pub mod clean;
pub mod writer;

use csv::ReaderBuilder;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::models::{Cell, Table};

pub use clean::{clean_row, coerce_numeric, forward_fill, strip_separators};
pub use writer::{write_indexed_table, write_rows, LineEnding};

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "" | "ascii" | "utf-8" | "utf8" | "utf-8-sig" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes with the named encoding. A leading byte order mark is
/// stripped; malformed sequences become U+FFFD.
pub fn decode_content(bytes: &[u8], encoding: &str) -> CsvResult<String> {
    let codec = encoding_rs::Encoding::for_label(encoding.as_bytes()).ok_or_else(|| {
        CsvError::Encoding {
            encoding: encoding.to_string(),
        }
    })?;
    let (text, _, _) = codec.decode(bytes);
    Ok(text.into_owned())
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Bytes as UTF-8 text without a leading byte order mark, or `None` if
/// they are not valid UTF-8.
pub fn decode_utf8(bytes: &[u8]) -> Option<&str> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    std::str::from_utf8(bytes).ok()
}

/// Read a file as UTF-8, falling back to the detected encoding.
pub fn read_text(path: &Path) -> CsvResult<String> {
    let bytes = std::fs::read(path)?;
    if let Some(text) = decode_utf8(&bytes) {
        return Ok(text.to_string());
    }
    let encoding = detect_encoding(&bytes);
    decode_content(&bytes, &encoding)
}

/// Read a file that must be UTF-8. No detection.
pub fn read_text_utf8(path: &Path) -> CsvResult<String> {
    let bytes = std::fs::read(path)?;
    decode_utf8(&bytes)
        .map(str::to_string)
        .ok_or_else(|| CsvError::Encoding {
            encoding: "utf-8".to_string(),
        })
}

/// Parse CSV text into string records. Width may vary per record;
/// blank lines are skipped.
pub fn parse_rows(content: &str) -> CsvResult<Vec<Vec<String>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Read every record of a CSV file as strings, header line included.
pub fn read_rows(path: &Path) -> CsvResult<Vec<Vec<String>>> {
    parse_rows(&read_text(path)?)
}

/// [`read_rows`] for the round-trip files and the cleaned output.
pub fn read_rows_utf8(path: &Path) -> CsvResult<Vec<Vec<String>>> {
    parse_rows(&read_text_utf8(path)?)
}

/// Build a cleaned table from parsed records.
///
/// The first record is the column-name line. Shorter records are padded
/// with empty cells; longer ones are rejected.
pub fn table_from_rows(records: Vec<Vec<String>>) -> CsvResult<Table> {
    let mut records = records.into_iter();
    let columns = records.next().ok_or(CsvError::EmptyFile)?;
    let width = columns.len();

    let mut rows = Vec::new();
    for (i, record) in records.enumerate() {
        if record.len() > width {
            return Err(CsvError::RaggedRow {
                line: i + 2, // +1 for 0-index, +1 for column-name line
                expected: width,
                found: record.len(),
            });
        }

        let mut cells: Vec<Cell> = record.iter().map(|s| Cell::from_raw(s)).collect();
        cells.resize(width, Cell::Empty);
        rows.push(clean_row(&cells));
    }

    Ok(Table::new(columns, rows))
}

/// Load the raw export into a cleaned [`Table`].
pub fn load_table(path: &Path) -> CsvResult<Table> {
    table_from_rows(read_rows(path)?)
}
