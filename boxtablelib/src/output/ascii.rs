//! Boxed ASCII table drawing.
//!
//! Produces the table layout used by SQL command-line clients:
//!
//! ```text
//! +----+------+
//! | id | name |
//! +----+------+
//! | 1  |  Al  |
//! | 22 | Bob  |
//! +----+------+
//! ```
//!
//! Each column is as wide as its longest value (header included) plus one
//! space of padding on each side. Values are centered; when the padding is
//! odd the extra space goes on the right. Every returned line ends with `\n`.
//!
//! All functions here are pure: no I/O, no shared state.

use std::fmt::Display;

use tracing::{debug, trace};

use crate::error::ShapeMismatch;
use crate::Result;

/// Padding added to every column: one space on each side of the content.
pub const COLUMN_PADDING: usize = 2;

/// Display length of a value, counted in chars.
fn display_len(s: &str) -> usize {
    s.chars().count()
}

/// Stringify a row of displayable values.
fn stringify<V: Display>(values: &[V]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Check that the header is non-empty and every row matches its length.
pub(crate) fn check_shape(
    columns: usize,
    row_lengths: impl IntoIterator<Item = usize>,
) -> Result<()> {
    if columns == 0 {
        return Err(ShapeMismatch::EmptyHeader.into());
    }
    for (row, found) in row_lengths.into_iter().enumerate() {
        if found != columns {
            return Err(ShapeMismatch::RowLength {
                row,
                expected: columns,
                found,
            }
            .into());
        }
    }
    Ok(())
}

/// Widths from already-stringified, shape-checked cells.
fn widths_of(header: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = header.iter().map(|h| display_len(h)).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(display_len(cell));
        }
    }
    widths.iter().map(|w| w + COLUMN_PADDING).collect()
}

/// Compute the padded width of every column.
///
/// `width[i]` is the longest text form found in column `i`, header
/// included, plus [`COLUMN_PADDING`].
pub fn column_widths<H, V, R>(header: &[H], rows: &[R]) -> Result<Vec<usize>>
where
    H: Display,
    V: Display,
    R: AsRef<[V]>,
{
    check_shape(header.len(), rows.iter().map(|r| r.as_ref().len()))?;
    let header = stringify(header);
    let rows: Vec<Vec<String>> = rows.iter().map(|r| stringify(r.as_ref())).collect();
    Ok(widths_of(&header, &rows))
}

/// Draw a horizontal boundary line, e.g. `+-------+-------+\n` for `[7, 7]`.
pub fn draw_boundary(widths: &[usize]) -> Result<String> {
    if widths.is_empty() {
        return Err(ShapeMismatch::EmptyHeader.into());
    }

    let mut line = String::with_capacity(widths.iter().sum::<usize>() + widths.len() + 2);
    for &width in widths {
        line.push('+');
        line.extend(std::iter::repeat('-').take(width));
    }
    line.push_str("+\n");
    Ok(line)
}

/// Draw one row with each value centered in its column.
pub fn draw_row<V: Display>(widths: &[usize], values: &[V]) -> Result<String> {
    if widths.is_empty() {
        return Err(ShapeMismatch::EmptyHeader.into());
    }
    if values.len() != widths.len() {
        return Err(ShapeMismatch::Cells {
            expected: widths.len(),
            found: values.len(),
        }
        .into());
    }
    Ok(row_line(widths, &stringify(values)))
}

fn row_line(widths: &[usize], cells: &[String]) -> String {
    let mut line = String::new();
    for (cell, &width) in cells.iter().zip(widths) {
        line.push('|');
        // Center alignment puts the odd space on the right and never truncates
        line.push_str(&format!("{:^width$}", cell, width = width));
    }
    line.push_str("|\n");
    line
}

/// Draw the header block: boundary, header row, boundary.
pub fn draw_header<H: Display>(widths: &[usize], header: &[H]) -> Result<Vec<String>> {
    let boundary = draw_boundary(widths)?;
    let row = draw_row(widths, header)?;
    Ok(vec![boundary.clone(), row, boundary])
}

/// Draw a complete table.
///
/// Returns `rows.len() + 4` lines: the three header lines, one line per
/// data row in order, and a closing boundary. An empty `rows` still yields
/// the header block and closing boundary.
pub fn draw_table<H, V, R>(header: &[H], rows: &[R]) -> Result<Vec<String>>
where
    H: Display,
    V: Display,
    R: AsRef<[V]>,
{
    draw_table_with_widths(header, rows).map(|(_, lines)| lines)
}

/// Same as [`draw_table`], also returning the computed column widths.
pub(crate) fn draw_table_with_widths<H, V, R>(
    header: &[H],
    rows: &[R],
) -> Result<(Vec<usize>, Vec<String>)>
where
    H: Display,
    V: Display,
    R: AsRef<[V]>,
{
    check_shape(header.len(), rows.iter().map(|r| r.as_ref().len()))?;
    debug!(columns = header.len(), rows = rows.len(), "drawing table");

    // Stringify once; widths and lines both read from these
    let header = stringify(header);
    let cells: Vec<Vec<String>> = rows.iter().map(|r| stringify(r.as_ref())).collect();
    let widths = widths_of(&header, &cells);
    trace!(?widths, "computed column widths");

    let boundary = draw_boundary(&widths)?;
    let mut lines = Vec::with_capacity(cells.len() + 4);
    lines.push(boundary.clone());
    lines.push(row_line(&widths, &header));
    lines.push(boundary.clone());
    lines.extend(cells.iter().map(|row| row_line(&widths, row)));
    lines.push(boundary);

    Ok((widths, lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CellValue;
    use crate::error::BoxTableError;

    fn id_name_rows() -> Vec<Vec<CellValue>> {
        vec![
            vec![CellValue::from(1), CellValue::from("Al")],
            vec![CellValue::from(22), CellValue::from("Bob")],
        ]
    }

    #[test]
    fn test_column_widths() {
        let widths = column_widths(&["id", "name"], &id_name_rows()).unwrap();
        assert_eq!(widths, vec![4, 6]);
    }

    #[test]
    fn test_column_widths_cover_every_cell() {
        let header = ["a", "bb", "ccc"];
        let rows = vec![
            vec!["longer value", "x", ""],
            vec!["", "", "NULL"],
            vec!["y", "a much longer value", "z"],
        ];
        let widths = column_widths(&header, &rows).unwrap();

        for (i, width) in widths.iter().enumerate() {
            assert!(*width >= header[i].chars().count() + 2);
            for row in &rows {
                assert!(*width >= row[i].chars().count() + 2);
            }
        }
        assert_eq!(widths, vec![14, 21, 6]);
    }

    #[test]
    fn test_column_widths_count_chars_not_bytes() {
        let widths = column_widths(&["naïve"], &[["é"]]).unwrap();
        assert_eq!(widths, vec![7]);
    }

    #[test]
    fn test_draw_boundary() {
        assert_eq!(draw_boundary(&[7, 7]).unwrap(), "+-------+-------+\n");
        assert_eq!(draw_boundary(&[3]).unwrap(), "+---+\n");
    }

    #[test]
    fn test_draw_boundary_empty() {
        let err = draw_boundary(&[]).unwrap_err();
        assert!(matches!(
            err,
            BoxTableError::ShapeMismatch(ShapeMismatch::EmptyHeader)
        ));
    }

    #[test]
    fn test_draw_row_centering() {
        // Even padding: equal on both sides
        assert_eq!(draw_row(&[6], &["ab"]).unwrap(), "|  ab  |\n");
        // Odd padding: extra space on the right
        assert_eq!(draw_row(&[6], &["Bob"]).unwrap(), "| Bob  |\n");
        assert_eq!(draw_row(&[4, 6], &["1", "Al"]).unwrap(), "| 1  |  Al  |\n");
    }

    #[test]
    fn test_draw_row_centering_symmetry() {
        for width in 2..12usize {
            for len in 0..=width {
                let value = "x".repeat(len);
                let line = draw_row(&[width], &[&value]).unwrap();
                let inner = &line[1..line.len() - 2];
                let left = inner.len() - inner.trim_start().len();
                let right = inner.len() - inner.trim_end().len();
                if len == 0 {
                    continue;
                }
                if (width - len) % 2 == 0 {
                    assert_eq!(left, right, "width {width}, len {len}");
                } else {
                    assert_eq!(left + 1, right, "width {width}, len {len}");
                }
            }
        }
    }

    #[test]
    fn test_draw_row_wrong_length() {
        let err = draw_row(&[4, 4], &["only one"]).unwrap_err();
        assert!(matches!(
            err,
            BoxTableError::ShapeMismatch(ShapeMismatch::Cells {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_draw_header() {
        let lines = draw_header(&[4, 6], &["id", "name"]).unwrap();
        assert_eq!(
            lines,
            vec!["+----+------+\n", "| id | name |\n", "+----+------+\n"]
        );
    }

    #[test]
    fn test_draw_table_id_name() {
        let lines = draw_table(&["id", "name"], &id_name_rows()).unwrap();
        assert_eq!(
            lines,
            vec![
                "+----+------+\n",
                "| id | name |\n",
                "+----+------+\n",
                "| 1  |  Al  |\n",
                "| 22 | Bob  |\n",
                "+----+------+\n",
            ]
        );
    }

    #[test]
    fn test_draw_table_empty_rows() {
        let rows: Vec<Vec<CellValue>> = vec![];
        let lines = draw_table(&["A", "B"], &rows).unwrap();
        assert_eq!(
            lines,
            vec!["+---+---+\n", "| A | B |\n", "+---+---+\n", "+---+---+\n"]
        );
    }

    #[test]
    fn test_draw_table_line_count_and_boundaries() {
        let header = ["x", "y", "z"];
        for n in 0..6i64 {
            let rows: Vec<Vec<CellValue>> = (0..n)
                .map(|i| {
                    vec![
                        CellValue::from(i * 1000),
                        CellValue::Null,
                        CellValue::from("v".repeat(i as usize)),
                    ]
                })
                .collect();
            let lines = draw_table(&header, &rows).unwrap();

            assert_eq!(lines.len(), rows.len() + 4);
            assert_eq!(lines[0], lines[2]);
            assert_eq!(lines[0], lines[lines.len() - 1]);
            assert!(lines.iter().all(|l| l.ends_with('\n')));
            // Every line has the same width
            let width = lines[0].chars().count();
            assert!(lines.iter().all(|l| l.chars().count() == width));
        }
    }

    #[test]
    fn test_draw_table_idempotent() {
        let first = draw_table(&["id", "name"], &id_name_rows()).unwrap();
        let second = draw_table(&["id", "name"], &id_name_rows()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_draw_table_uneven_rows() {
        let err = draw_table(&["a"], &[vec![1, 2]]).unwrap_err();
        assert!(matches!(
            err,
            BoxTableError::ShapeMismatch(ShapeMismatch::RowLength {
                row: 0,
                expected: 1,
                found: 2
            })
        ));
    }

    #[test]
    fn test_draw_table_empty_header() {
        let header: [&str; 0] = [];
        let rows: Vec<Vec<i64>> = vec![];
        let err = draw_table(&header, &rows).unwrap_err();
        assert!(matches!(
            err,
            BoxTableError::ShapeMismatch(ShapeMismatch::EmptyHeader)
        ));
    }

    #[test]
    fn test_draw_table_concurrent() {
        let rows = id_name_rows();
        let expected = draw_table(&["id", "name"], &rows).unwrap();

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| draw_table(&["id", "name"], &rows).unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
