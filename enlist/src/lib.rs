//! # enlist-clean - flatten the 2010 enlistment-by-ZIP export
//!
//! The raw export is a spreadsheet saved as CSV with a 3-level merged header.
//! This crate turns it into a flat CSV with one header row.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Raw export │────▶│   Loader    │────▶│  Split +    │────▶│ Clean CSV + │
//! │ (4 hdr rows)│     │ (fill/coerce│     │ header merge│     │ Total fix   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use enlist_clean::{run, CleanOptions};
//!
//! let report = run(&CleanOptions::default()).unwrap();
//! println!("Wrote {} rows", report.data_rows);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Cells, rows, tables
//! - [`parser`] - CSV reading, cleaning rules, writing
//! - [`transform`] - Split, header merge, header fix, pipeline
//! - [`logs`] - Progress logging

pub mod error;
pub mod logs;
pub mod models;
pub mod parser;
pub mod transform;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{CsvError, CsvResult, HeaderError, HeaderResult, PipelineError, PipelineResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Cell, DataBlock, HeaderBlock, MergedHeader, Row, Table};

// =============================================================================
// Re-exports - Loading
// =============================================================================

pub use parser::{load_table, read_rows, read_rows_utf8, write_rows, LineEnding};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::{
    fix_header_file, label_lines, merge_headers, merge_headers_of_file, read_header,
    relabel_totals, run, split, total_positions, CleanOptions, PipelineReport, TOTAL_POSITIONS,
};
