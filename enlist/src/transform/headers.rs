//! Merge the 3-level spreadsheet header into one label per column.
//!
//! The header block is written to disk with a leading ordinal column and
//! read back as plain strings. The re-read rows are then edited by
//! position and concatenated column by column.
//!
//! # Layout
//!
//! ```text
//! re-read line 0   ,<column names>        discarded
//! re-read line 1   0,<header row 0>       discarded
//! re-read line 2   1,<header row 1>       R0
//! re-read line 3   2,<header row 2>       R1
//! re-read line 4   3,<header row 3>       R2
//! ```
//!
//! The edits are specific to the 2010 export. Each one shifts a row so
//! its labels line up with the data rows, which still carry their ordinal
//! in column 0. Do not simplify them: the insert/remove pair on R1 cancels
//! out, the others do not.

use std::path::Path;

use crate::error::{HeaderError, HeaderResult, PipelineResult};
use crate::models::{HeaderBlock, MergedHeader};
use crate::parser::{load_table, read_rows_utf8, write_indexed_table};
use crate::transform::split::split;

const ZIP_LABEL: &str = "1st 3 digits of ZIP CODE";
const ZIP_LABEL_SHORT: &str = "1st 3 digits";

/// Round-trip the header block through `path` and merge it.
pub fn merge_headers(block: &HeaderBlock, path: &Path) -> PipelineResult<MergedHeader> {
    write_indexed_table(path, block)?;
    let reread = read_rows_utf8(path)?;
    Ok(merge_header_rows(&reread)?)
}

/// Load a raw export and merge its header block, round-tripping through
/// `scratch`. The data rows are not written anywhere.
pub fn merge_headers_of_file(raw: &Path, scratch: &Path) -> PipelineResult<MergedHeader> {
    let (header_block, _) = split(load_table(raw)?);
    merge_headers(&header_block, scratch)
}

/// Apply the positional edits to re-read header lines and concatenate
/// R0, R1 and R2 cell by cell.
pub fn merge_header_rows(reread: &[Vec<String>]) -> HeaderResult<MergedHeader> {
    let mut r0 = header_row(reread, 1)?;
    let mut r1 = header_row(reread, 2)?;
    let mut r2 = header_row(reread, 3)?;

    // R0: "Index" goes in behind the ordinal, then the ordinal goes, so
    // "Index" labels the ordinal column and the ZIP label sits at 1.
    insert_at(&mut r0, 1, "Index", 1)?;
    remove_at(&mut r0, 0, 1)?;
    let zip = cell_at(&mut r0, 1, 1)?;
    *zip = zip.replace(ZIP_LABEL, ZIP_LABEL_SHORT);

    // R1: ordinal out, " No." in front. The blank is inserted and
    // removed again at 1.
    remove_at(&mut r1, 0, 2)?;
    insert_at(&mut r1, 0, " No.", 2)?;
    insert_at(&mut r1, 1, "", 2)?;
    remove_at(&mut r1, 1, 2)?;

    // R2: ordinal out, " Zip Code" under the ZIP label.
    remove_at(&mut r2, 0, 3)?;
    insert_at(&mut r2, 1, " Zip Code", 3)?;

    Ok(concat_rows(&r0, &r1, &r2))
}

/// Column-wise concatenation, truncated to the shortest row.
pub fn concat_rows(r0: &[String], r1: &[String], r2: &[String]) -> MergedHeader {
    r0.iter()
        .zip(r1)
        .zip(r2)
        .map(|((a, b), c)| format!("{a}{b}{c}"))
        .collect()
}

/// Header block row `row`, which is re-read line `row + 1`.
fn header_row(reread: &[Vec<String>], row: usize) -> HeaderResult<Vec<String>> {
    reread
        .get(row + 1)
        .cloned()
        .ok_or(HeaderError::MissingRow { row })
}

fn insert_at(cells: &mut Vec<String>, index: usize, label: &str, row: usize) -> HeaderResult<()> {
    if index > cells.len() {
        return Err(HeaderError::RowTooShort {
            row,
            len: cells.len(),
            needed: index,
        });
    }
    cells.insert(index, label.to_string());
    Ok(())
}

fn remove_at(cells: &mut Vec<String>, index: usize, row: usize) -> HeaderResult<String> {
    if index >= cells.len() {
        return Err(HeaderError::RowTooShort {
            row,
            len: cells.len(),
            needed: index + 1,
        });
    }
    Ok(cells.remove(index))
}

fn cell_at(cells: &mut [String], index: usize, row: usize) -> HeaderResult<&mut String> {
    let len = cells.len();
    cells.get_mut(index).ok_or(HeaderError::RowTooShort {
        row,
        len,
        needed: index + 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cell, Table};
    use tempfile::tempdir;

    fn line(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    /// Re-read lines for a 3-column export.
    fn reread() -> Vec<Vec<String>> {
        vec![
            line(&["", "Unnamed: 0", "Army", "Navy"]),
            line(&["0", "ACCESSIONS", "ACCESSIONS", "ACCESSIONS"]),
            line(&["1", "1st 3 digits of ZIP CODE", "Army", "Navy"]),
            line(&["2", "Region", "Male", "Female"]),
            line(&["3", "State", "NPS", "PS"]),
        ]
    }

    #[test]
    fn test_merge_choreography() {
        let merged = merge_header_rows(&reread()).unwrap();

        // R0 = [Index, 1st 3 digits, Army, Navy]
        // R1 = [ No., Region, Male, Female]
        // R2 = [State,  Zip Code, NPS, PS]
        assert_eq!(
            merged,
            vec![
                "Index No.State",
                "1st 3 digitsRegion Zip Code",
                "ArmyMaleNPS",
                "NavyFemalePS",
            ]
        );
    }

    #[test]
    fn test_column_one_is_edited_r0_r1_r2() {
        let merged = merge_header_rows(&reread()).unwrap();
        let expected = ["1st 3 digits", "Region", " Zip Code"].concat();
        assert_eq!(merged[1], expected);
    }

    #[test]
    fn test_zip_label_only_shortened_in_column_one() {
        let mut lines = reread();
        lines[2][3] = "1st 3 digits of ZIP CODE".to_string();
        let merged = merge_header_rows(&lines).unwrap();
        assert!(merged[1].starts_with("1st 3 digitsRegion"));
        assert!(merged[3].starts_with("1st 3 digits of ZIP CODE"));
    }

    #[test]
    fn test_shortest_row_bounds_output() {
        let mut lines = reread();
        lines[4].truncate(3); // R2 = [State,  Zip Code, NPS]
        let merged = merge_header_rows(&lines).unwrap();
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_missing_header_row() {
        let lines = reread()[..3].to_vec();
        let err = merge_header_rows(&lines).unwrap_err();
        assert!(matches!(err, HeaderError::MissingRow { row: 2 }));
    }

    #[test]
    fn test_row_too_short_for_zip_edit() {
        let mut lines = reread();
        lines[2] = line(&["1"]);
        let err = merge_header_rows(&lines).unwrap_err();
        assert!(matches!(err, HeaderError::RowTooShort { row: 1, .. }));
    }

    #[test]
    fn test_concat_rows() {
        let merged = concat_rows(&line(&["a", "b"]), &line(&["1", "2"]), &line(&["x", "y", "z"]));
        assert_eq!(merged, vec!["a1x", "b2y"]);
    }

    #[test]
    fn test_merge_headers_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("enlist_headers.csv");
        let raw = [
            ["ACCESSIONS", "ACCESSIONS", "ACCESSIONS"],
            ["1st 3 digits of ZIP CODE", "Army", "Navy"],
            ["Region", "Male", "Female"],
            ["State", "NPS", "PS"],
        ];
        let block = Table::new(
            vec!["Unnamed: 0".into(), "Army".into(), "Navy".into()],
            raw.iter()
                .map(|r| r.iter().map(|s| Cell::from_raw(s)).collect())
                .collect(),
        );

        let merged = merge_headers(&block, &path).unwrap();

        assert_eq!(merged[0], "Index No.State");
        assert_eq!(merged[1], "1st 3 digitsRegion Zip Code");
        assert!(path.exists());
    }

    #[test]
    fn test_merge_headers_of_file() {
        let dir = tempdir().unwrap();
        let raw = dir.path().join("accession_zip_2010.csv");
        std::fs::write(
            &raw,
            "a,b,c\n\
             ACCESSIONS,,\n\
             1st 3 digits of ZIP CODE,Army,Navy\n\
             Región,Hombres,Mujeres\n\
             State,NPS,PS\n\
             006,1,2\n",
        )
        .unwrap();

        let merged =
            merge_headers_of_file(&raw, &dir.path().join("enlist_headers.csv")).unwrap();

        assert_eq!(
            merged,
            vec![
                "Index No.State",
                "1st 3 digitsRegión Zip Code",
                "ArmyHombresNPS",
                "NavyMujeresPS",
            ]
        );
    }
}
