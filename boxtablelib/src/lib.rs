//! # boxtablelib
//!
//! Draws query result sets as the boxed ASCII tables printed by SQL
//! command-line clients.
//!
//! ## Overview
//!
//! Given column headers and rows of values, the renderer sizes every column
//! to its longest value plus one space of padding on each side, centers
//! each value in its column, and frames the whole thing with `+`, `-` and
//! `|`:
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
//! ## Features
//!
//! - **Pure rendering**: no I/O, no shared state; safe to call from any thread
//! - **Any displayable value**: headers and cells only need `Display`
//! - **Typed shape errors**: uneven rows or an empty header are reported,
//!   never padded or truncated
//! - **JSON input**: load one result set or a batch of them
//!
//! ## Example
//!
//! ```rust
//! use boxtablelib::{draw_table, CellValue, ResultSet};
//!
//! // Render plain values
//! let lines = draw_table(&["id", "name"], &[["1", "Al"], ["22", "Bob"]]).unwrap();
//! assert_eq!(lines.len(), 6);
//! assert_eq!(lines[1], "| id | name |\n");
//!
//! // Render a result set
//! let set = ResultSet::new(["n", "note"], vec![vec![CellValue::from(7), CellValue::Null]]);
//! let table = set.render().unwrap();
//! assert_eq!(table.lines[3], "| 7 | NULL |\n");
//! assert_eq!(table.summary(), "1 row in set");
//!
//! // Uneven rows are rejected
//! assert!(draw_table(&["a"], &[[1, 2]]).is_err());
//! ```

pub mod data;
pub mod error;
pub mod output;

pub use data::{CellValue, ResultSet};
pub use error::{BoxTableError, ShapeMismatch};
pub use output::{
    column_widths, draw_boundary, draw_header, draw_row, draw_table, RenderedTable,
};

/// Result type for boxtablelib operations
pub type Result<T> = std::result::Result<T, BoxTableError>;
