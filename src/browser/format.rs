//! Plain-text and JSON renderings of browser rows, for the command line.

use super::model::{MediaRow, HEADERS};
use crate::error::{MediaBinError, Result};

/// Format rows as an aligned table with a header line.
///
/// Columns are separated by two spaces; the last column is not padded.
pub fn format_table(rows: &[MediaRow]) -> String {
    let cells: Vec<[&str; 4]> = rows
        .iter()
        .map(|r| [r.name.as_str(), r.file_type.as_str(), r.path.as_str(), r.id.as_str()])
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    for line in std::iter::once(HEADERS).chain(cells) {
        let last = line.len() - 1;
        for (i, cell) in line.iter().enumerate() {
            if i == last {
                output.push_str(cell);
            } else {
                output.push_str(&format!("{:<width$}  ", cell, width = widths[i]));
            }
        }
        output.push('\n');
    }
    output
}

/// Format rows as a JSON array.
pub fn format_json(rows: &[MediaRow], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(rows)
    } else {
        serde_json::to_string(rows)
    };
    json.map_err(MediaBinError::ProjectSerialize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::FileRecord;

    fn rows() -> Vec<MediaRow> {
        [
            FileRecord::new("AAA", "/m/beach.mp4"),
            FileRecord::new("B", "/music/x.wav"),
        ]
        .iter()
        .map(MediaRow::from_record)
        .collect()
    }

    #[test]
    fn table_is_aligned() {
        let table = format_table(&rows());
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Name       Type   Path    ID");
        assert_eq!(lines[1], "beach.mp4  video  /m      AAA");
        assert_eq!(lines[2], "x.wav      audio  /music  B");
    }

    #[test]
    fn empty_table_has_header_only() {
        assert_eq!(format_table(&[]), "Name  Type  Path  ID\n");
    }

    #[test]
    fn json_uses_lowercase_types() {
        let json = format_json(&rows(), false).unwrap();
        assert!(json.contains(r#""type":"video""#));
        assert!(json.contains(r#""name":"x.wav""#));
    }
}
