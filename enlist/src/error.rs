//! Error types for the enlistment cleaning pipeline.
//!
//! - [`CsvError`] - reading, decoding and writing CSV files
//! - [`HeaderError`] - positional header edits that run off the end of a row
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Conversions are automatic via `From`, so `?` works across layers.
//! Nothing here is recovered from: every error ends the run.

use thiserror::Error;

// =============================================================================
// CSV Errors
// =============================================================================

/// Errors while reading or writing CSV files.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to open, read or write a file.
    #[error("Failed to access file: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV or a failed record write.
    #[error("Invalid CSV: {0}")]
    Parse(#[from] csv::Error),

    /// Bytes could not be decoded.
    #[error("Failed to decode content as {encoding}")]
    Encoding { encoding: String },

    /// A data line carries more fields than the column-name line.
    #[error("Line {line}: expected {expected} fields, saw {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// No column-name line.
    #[error("CSV file is empty")]
    EmptyFile,
}

// =============================================================================
// Header Errors
// =============================================================================

/// Out-of-range failures in the header merge and header fix steps.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// A header row the merge expects is not in the re-read file.
    #[error("Header row {row} is missing")]
    MissingRow { row: usize },

    /// A header row is too short for a positional edit.
    #[error("Header row {row} has {len} cells, edit needs at least {needed}")]
    RowTooShort { row: usize, len: usize, needed: usize },

    /// The cleaned file's header is narrower than the fixed label positions.
    #[error("Header has {found} columns, at least {required} are required")]
    TooFewColumns { found: usize, required: usize },

    /// The cleaned file has no header line at all.
    #[error("Cleaned file has no header row")]
    EmptyFile,
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level error returned by [`crate::transform::pipeline::run`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Header error.
    #[error("Header error: {0}")]
    Header(#[from] HeaderError),

    /// Filesystem error outside CSV handling (creating directories, reports).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization failed.
    #[error("Report error: {0}")]
    Report(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for header operations.
pub type HeaderResult<T> = Result<T, HeaderError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
