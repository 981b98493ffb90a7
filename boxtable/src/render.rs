//! Output rendering for the CLI: plain text tables or JSON.

use boxtablelib::RenderedTable;

/// How rendered tables are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Concatenated ASCII tables
    #[default]
    Text,
    /// JSON array of `{widths, lines}` objects
    Json,
}

impl OutputMode {
    /// Parse the `--output` argument value
    pub fn from_arg(value: &str) -> Self {
        match value {
            "json" => OutputMode::Json,
            _ => OutputMode::Text,
        }
    }
}

/// Render tables as text, one after another.
///
/// Tables are separated by a blank line. With `summary`, each table is
/// followed by its row count line (`2 rows in set`).
pub fn render_text(tables: &[RenderedTable], summary: bool) -> String {
    let mut output = String::new();
    for (i, table) in tables.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&table.to_text());
        if summary {
            output.push_str(&table.summary());
            output.push('\n');
        }
    }
    output
}

/// Render tables as a pretty-printed JSON array.
pub fn render_json(tables: &[RenderedTable]) -> Result<String, serde_json::Error> {
    let mut output = serde_json::to_string_pretty(tables)?;
    output.push('\n');
    Ok(output)
}

/// Render in the given mode
pub fn render(
    tables: &[RenderedTable],
    mode: OutputMode,
    summary: bool,
) -> Result<String, serde_json::Error> {
    match mode {
        OutputMode::Text => Ok(render_text(tables, summary)),
        OutputMode::Json => render_json(tables),
    }
}
