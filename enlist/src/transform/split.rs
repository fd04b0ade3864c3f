//! Split the loaded table into its header block and data block.

use crate::models::{DataBlock, HeaderBlock, Table};

/// Rows of merged spreadsheet header at the top of the export.
pub const HEADER_ROWS: usize = 4;

/// First [`HEADER_ROWS`] rows become the header block, the rest the data
/// block. A shorter table yields a short header block and no data. Rows
/// keep their ordinals from the loaded table.
pub fn split(table: Table) -> (HeaderBlock, DataBlock) {
    let Table { columns, mut rows } = table;
    let data = rows.split_off(HEADER_ROWS.min(rows.len()));

    (
        Table {
            columns: columns.clone(),
            rows,
        },
        Table {
            columns,
            rows: data,
        },
    )
}
