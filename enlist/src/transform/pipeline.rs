//! End-to-end cleaning run.
//!
//! ```text
//! accession_zip_2010.csv
//!   → load_table         (fill, strip, coerce)
//!   → split              (4 header rows | data rows)
//!   → merge_headers      via enlist_headers.csv
//!   → round_trip_data    via enlist_data.csv
//!   → write_clean        enlist_clean.csv, merged header
//!   → fix_header_file    enlist_clean.csv, "Total" labels
//! ```
//!
//! Every step either succeeds or ends the run; nothing is retried.
//!
//! # Example
//!
//! ```rust,ignore
//! use enlist_clean::{run, CleanOptions};
//!
//! let report = run(&CleanOptions::with_data_dir("data"))?;
//! println!("{} rows written to {}", report.data_rows, report.output.display());
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::PipelineResult;
use crate::logs::{log_info, log_info_indent, log_success, log_warning};
use crate::models::MergedHeader;
use crate::parser::load_table;
use crate::transform::data::{round_trip_data, write_clean};
use crate::transform::fix::{fix_header_file, total_positions};
use crate::transform::headers::merge_headers;
use crate::transform::split::split;

pub const DEFAULT_DATA_DIR: &str = "../data";
pub const DEFAULT_INPUT: &str = "accession_zip_2010.csv";
pub const DEFAULT_DATA_FILE: &str = "enlist_data.csv";
pub const DEFAULT_HEADERS_FILE: &str = "enlist_headers.csv";
pub const DEFAULT_CLEAN_FILE: &str = "enlist_clean.csv";

/// Where the run reads and writes. All file names are relative to
/// `data_dir`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanOptions {
    /// Directory holding the raw export and every file the run writes
    pub data_dir: PathBuf,

    /// Raw export
    pub input: String,

    /// Data block round-trip file
    pub data_file: String,

    /// Header block round-trip file
    pub headers_file: String,

    /// Cleaned output
    pub clean_file: String,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            input: DEFAULT_INPUT.to_string(),
            data_file: DEFAULT_DATA_FILE.to_string(),
            headers_file: DEFAULT_HEADERS_FILE.to_string(),
            clean_file: DEFAULT_CLEAN_FILE.to_string(),
        }
    }
}

impl CleanOptions {
    /// Default file names under another directory.
    pub fn with_data_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn input_path(&self) -> PathBuf {
        self.data_dir.join(&self.input)
    }

    pub fn data_path(&self) -> PathBuf {
        self.data_dir.join(&self.data_file)
    }

    pub fn headers_path(&self) -> PathBuf {
        self.data_dir.join(&self.headers_file)
    }

    pub fn clean_path(&self) -> PathBuf {
        self.data_dir.join(&self.clean_file)
    }
}

/// What a run produced.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineReport {
    /// Raw export that was read
    pub input: PathBuf,

    /// Cleaned file that was written
    pub output: PathBuf,

    /// Rows in the header block
    pub header_rows: usize,

    /// Data rows written
    pub data_rows: usize,

    /// Header after concatenation
    pub merged_header: Vec<String>,

    /// Header after the "Total" relabel
    pub final_header: Vec<String>,

    /// Merged-header positions whose label mentions "total"
    pub total_positions: Vec<usize>,
}

impl PipelineReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write the report as pretty JSON, replacing any file at `path`.
    pub fn write_to(&self, path: &Path) -> PipelineResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Width of the data rows when it differs from the merged header's.
pub fn width_mismatch(header: &MergedHeader, rows: &[Vec<String>]) -> Option<usize> {
    rows.first().map(Vec::len).filter(|&width| width != header.len())
}

/// Run the whole cleaning pipeline.
pub fn run(options: &CleanOptions) -> PipelineResult<PipelineReport> {
    let input = options.input_path();
    let output = options.clean_path();

    // Step 1: Load
    log_info(format!("📖 Reading {}", input.display()));
    let table = load_table(&input)?;
    log_success(format!("Read {} rows, {} columns", table.len(), table.width()));

    // Step 2: Split
    let (header_block, data_block) = split(table);
    log_success(format!(
        "Split into {} header rows and {} data rows",
        header_block.len(),
        data_block.len()
    ));

    // Step 3: Merge headers
    log_info("🔗 Merging header rows...");
    let merged_header = merge_headers(&header_block, &options.headers_path())?;
    log_success(format!("Merged header has {} columns", merged_header.len()));

    // Step 4: Write data under the merged header
    log_info("💾 Writing cleaned data...");
    let rows = round_trip_data(&data_block, &options.data_path())?;
    if let Some(width) = width_mismatch(&merged_header, &rows) {
        log_warning(format!(
            "Merged header has {} columns but data rows have {}",
            merged_header.len(),
            width
        ));
    }
    write_clean(&output, &merged_header, &rows)?;
    log_success(format!("Wrote {} data rows", rows.len()));

    // Step 5: Relabel totals
    let totals = total_positions(&merged_header);
    log_info("🏷️  Relabelling total columns...");
    log_info_indent(format!("Labels mentioning 'total' at {:?}", totals), 1);
    let final_header = fix_header_file(&output)?;
    log_success(format!("Saved {}", output.display()));

    Ok(PipelineReport {
        input,
        output,
        header_rows: header_block.len(),
        data_rows: rows.len(),
        merged_header,
        final_header,
        total_positions: totals,
    })
}
