//! Relabel the "Total" columns of the cleaned file.
//!
//! The merged labels of the subtotal columns are long concatenations.
//! They are replaced with a plain `Total` at fixed positions. The positions
//! are literal; [`total_positions`] only reports what a text search finds.

use std::path::Path;

use crate::error::{CsvResult, HeaderError, HeaderResult, PipelineResult};
use crate::parser::{read_rows_utf8, write_rows, LineEnding};

pub const TOTAL_LABEL: &str = "Total";

/// Zero-based columns that get relabelled.
pub const TOTAL_POSITIONS: [usize; 8] = [14, 17, 25, 31, 44, 47, 55, 60];

/// Minimum header width for the relabel to be in range.
pub const REQUIRED_COLUMNS: usize = 61;

/// Copy of `header` with every [`TOTAL_POSITIONS`] entry set to `Total`.
pub fn relabel_totals(header: &[String]) -> HeaderResult<Vec<String>> {
    if header.len() < REQUIRED_COLUMNS {
        return Err(HeaderError::TooFewColumns {
            found: header.len(),
            required: REQUIRED_COLUMNS,
        });
    }

    let mut fixed = header.to_vec();
    for &pos in &TOTAL_POSITIONS {
        fixed[pos] = TOTAL_LABEL.to_string();
    }
    Ok(fixed)
}

/// Positions whose label contains "total", ignoring case.
pub fn total_positions(header: &[String]) -> Vec<usize> {
    header
        .iter()
        .enumerate()
        .filter(|(_, label)| label.to_lowercase().contains("total"))
        .map(|(i, _)| i)
        .collect()
}

/// `"pos  label"` lines for the given header positions. Positions past the
/// end of the header are skipped.
pub fn label_lines<I>(header: &[String], positions: I) -> Vec<String>
where
    I: IntoIterator<Item = usize>,
{
    positions
        .into_iter()
        .filter_map(|pos| header.get(pos).map(|label| format!("{:>3}  {}", pos, label)))
        .collect()
}

/// Header line of a cleaned file; empty if the file is.
pub fn read_header(path: &Path) -> CsvResult<Vec<String>> {
    let rows = read_rows_utf8(path)?;
    Ok(rows.into_iter().next().unwrap_or_default())
}

/// Re-read a cleaned file, relabel its header and write it back with the
/// data rows untouched. Returns the new header.
pub fn fix_header_file(path: &Path) -> PipelineResult<Vec<String>> {
    let mut rows = read_rows_utf8(path)?;
    if rows.is_empty() {
        return Err(HeaderError::EmptyFile.into());
    }
    let data = rows.split_off(1);
    let header = relabel_totals(&rows[0])?;

    write_rows(path, Some(header.as_slice()), &data, LineEnding::CrLf)?;
    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use tempfile::tempdir;

    fn sentinels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("col-{i}")).collect()
    }

    #[test]
    fn test_only_fixed_positions_change() {
        let header = sentinels(64);
        let fixed = relabel_totals(&header).unwrap();

        assert_eq!(fixed.len(), header.len());
        for (i, (before, after)) in header.iter().zip(&fixed).enumerate() {
            if TOTAL_POSITIONS.contains(&i) {
                assert_eq!(after, "Total", "position {i}");
            } else {
                assert_eq!(after, before, "position {i}");
            }
        }
    }

    #[test]
    fn test_exactly_61_columns() {
        let fixed = relabel_totals(&sentinels(61)).unwrap();
        assert_eq!(fixed[60], "Total");
        assert_eq!(fixed[59], "col-59");
    }

    #[test]
    fn test_too_few_columns() {
        let err = relabel_totals(&sentinels(60)).unwrap_err();
        assert!(matches!(err, HeaderError::TooFewColumns { found: 60, required: 61 }));
    }

    #[test]
    fn test_total_positions() {
        let header: Vec<String> = ["Index No.", "ArmyTOTAL", "Navy", "grand total"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(total_positions(&header), vec![1, 3]);
    }

    #[test]
    fn test_fix_header_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("enlist_clean.csv");
        let header = sentinels(61);
        let rows: Vec<Vec<String>> = vec![sentinels(61), vec!["4".to_string(), "x,y".to_string()]];
        write_rows(&path, Some(header.as_slice()), &rows, LineEnding::CrLf).unwrap();

        let fixed = fix_header_file(&path).unwrap();

        let reread = read_rows_utf8(&path).unwrap();
        assert_eq!(reread[0], fixed);
        assert_eq!(reread[0][14], "Total");
        assert_eq!(reread[1], rows[0]);
        assert_eq!(reread[2], rows[1]);
    }

    #[test]
    fn test_fix_header_file_keeps_accented_data() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("enlist_clean.csv");
        let header = sentinels(61);
        let rows = vec![vec!["4".to_string(), "006".to_string(), "Mayagüez".to_string()]];
        write_rows(&path, Some(header.as_slice()), &rows, LineEnding::CrLf).unwrap();

        fix_header_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.ends_with("\r\n4,006,Mayagüez\r\n"));
    }

    #[test]
    fn test_totals_listing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("enlist_clean.csv");
        std::fs::write(&path, "Index No.,Army Total,Navy,Año total\r\n4,1,2,3\r\n").unwrap();

        let header = read_header(&path).unwrap();
        let lines = label_lines(&header, total_positions(&header));

        assert_eq!(lines, vec!["  1  Army Total", "  3  Año total"]);
    }

    #[test]
    fn test_label_lines_skips_out_of_range() {
        let header = sentinels(2);
        assert_eq!(label_lines(&header, [1, 5]), vec!["  1  col-1"]);
        assert!(label_lines(&header, std::iter::empty()).is_empty());
    }

    #[test]
    fn test_read_header_of_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        std::fs::write(&path, "").unwrap();
        assert!(read_header(&path).unwrap().is_empty());
    }

    #[test]
    fn test_fix_header_file_short_header_leaves_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("enlist_clean.csv");
        std::fs::write(&path, "a,b\r\n1,2\r\n").unwrap();

        let err = fix_header_file(&path).unwrap_err();
        assert!(matches!(err, PipelineError::Header(HeaderError::TooFewColumns { .. })));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,b\r\n1,2\r\n");
    }
}
