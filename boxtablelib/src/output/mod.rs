//! Output formatting: draw result sets as boxed ASCII tables.
//!
//! - **ascii**: the pure drawing functions (widths, boundary, row, header, table)
//! - **RenderedTable**: drawn lines plus their column widths, serializable
//!
//! ## Example
//!
//! ```rust
//! use boxtablelib::output::draw_table;
//!
//! let lines = draw_table(&["id", "name"], &[["1", "Al"], ["22", "Bob"]]).unwrap();
//! assert_eq!(lines[0], "+----+------+\n");
//! assert_eq!(lines[3], "| 1  |  Al  |\n");
//! ```

pub mod ascii;
pub mod table;

pub use ascii::{column_widths, draw_boundary, draw_header, draw_row, draw_table, COLUMN_PADDING};
pub use table::RenderedTable;
