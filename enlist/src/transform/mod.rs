//! Reshaping the loaded export.
//!
//! - Split: header block and data block
//! - Headers: positional merge of the 3-level header
//! - Data: data block round trip and the first cleaned write
//! - Fix: "Total" relabel of the cleaned file
//! - Pipeline: all of the above, in order

pub mod data;
pub mod fix;
pub mod headers;
pub mod pipeline;
pub mod split;

pub use data::{round_trip_data, write_clean};
pub use fix::{
    fix_header_file, label_lines, read_header, relabel_totals, total_positions, TOTAL_LABEL,
    TOTAL_POSITIONS,
};
pub use headers::{concat_rows, merge_header_rows, merge_headers, merge_headers_of_file};
pub use pipeline::*;
pub use split::{split, HEADER_ROWS};
