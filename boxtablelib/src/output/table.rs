//! Rendered table output.
//!
//! `RenderedTable` is the final data structure before display: the lines
//! produced by the ASCII drawer plus the column widths they were drawn
//! with. Callers either concatenate the lines onto a text surface or
//! serialize the whole thing to JSON.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::ascii;
use crate::Result;

/// A table drawn as boxed ASCII lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedTable {
    /// Padded width of each column
    pub widths: Vec<usize>,
    /// Newline-terminated lines, top boundary first
    pub lines: Vec<String>,
}

impl RenderedTable {
    /// Render a header and rows.
    pub fn render<H, V, R>(header: &[H], rows: &[R]) -> Result<Self>
    where
        H: Display,
        V: Display,
        R: AsRef<[V]>,
    {
        let (widths, lines) = ascii::draw_table_with_widths(header, rows)?;
        Ok(RenderedTable { widths, lines })
    }

    /// Number of data rows (lines minus header block and closing boundary).
    pub fn row_count(&self) -> usize {
        self.lines.len().saturating_sub(4)
    }

    /// Concatenate all lines.
    pub fn to_text(&self) -> String {
        self.lines.concat()
    }

    /// Footer in the style of SQL command-line clients.
    pub fn summary(&self) -> String {
        match self.row_count() {
            0 => "Empty set".to_string(),
            1 => "1 row in set".to_string(),
            n => format!("{} rows in set", n),
        }
    }
}

impl std::fmt::Display for RenderedTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            f.write_str(line)?;
        }
        Ok(())
    }
}
