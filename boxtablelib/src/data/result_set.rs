//! Query result sets: column names plus rows of scalar values.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::value::CellValue;
use crate::error::BoxTableError;
use crate::output::ascii::check_shape;
use crate::output::RenderedTable;
use crate::Result;

/// An already-fetched query result.
///
/// Built per query, rendered once, then discarded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    /// Column names, in order
    pub columns: Vec<String>,
    /// Data rows; each has one value per column
    #[serde(default)]
    pub rows: Vec<Vec<CellValue>>,
}

/// JSON document form before cell conversion.
#[derive(Deserialize)]
struct RawResultSet {
    columns: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<serde_json::Value>>,
}

impl ResultSet {
    /// Create a result set from columns and rows.
    pub fn new<C, R, V>(columns: C, rows: R) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        R: IntoIterator<Item = Vec<V>>,
        V: Into<CellValue>,
    {
        ResultSet {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Builder: append a row
    pub fn row<V: Into<CellValue>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.rows.push(values.into_iter().map(Into::into).collect());
        self
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Check the header is non-empty and every row has one value per column.
    pub fn validate(&self) -> Result<()> {
        check_shape(self.columns.len(), self.rows.iter().map(Vec::len))
    }

    /// Draw this result set as a boxed ASCII table.
    pub fn render(&self) -> Result<RenderedTable> {
        RenderedTable::render(&self.columns, &self.rows)
    }

    /// Parse a single result set from JSON.
    ///
    /// The document looks like `{"columns": ["id", "name"], "rows": [[1, "Al"]]}`.
    /// `rows` may be omitted for an empty result.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let raw: RawResultSet = serde_json::from_str(s)?;
        Self::from_raw(raw)
    }

    /// Parse either one result set or a JSON array of them.
    ///
    /// Every result set is converted and validated before any is returned,
    /// so a malformed entry anywhere in the batch fails the whole batch with
    /// [`BoxTableError::InBatch`] naming the entry.
    pub fn many_from_json_str(s: &str) -> Result<Vec<Self>> {
        let sets = if s.trim_start().starts_with('[') {
            let raw: Vec<RawResultSet> = serde_json::from_str(s)?;
            raw.into_iter()
                .enumerate()
                .map(|(index, raw)| {
                    Self::from_raw(raw).map_err(|e| BoxTableError::InBatch {
                        index,
                        source: Box::new(e),
                    })
                })
                .collect::<Result<Vec<_>>>()?
        } else {
            vec![Self::from_json_str(s)?]
        };
        debug!(count = sets.len(), "loaded result sets");
        Ok(sets)
    }

    /// Read result sets from a reader such as stdin (see [`ResultSet::many_from_json_str`]).
    pub fn from_reader(mut reader: impl Read) -> Result<Vec<Self>> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::many_from_json_str(&content)
    }

    /// Read result sets from a JSON file (see [`ResultSet::many_from_json_str`]).
    pub fn load(path: impl AsRef<Path>) -> Result<Vec<Self>> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| BoxTableError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::many_from_json_str(&content)
    }

    fn from_raw(raw: RawResultSet) -> Result<Self> {
        let rows = raw
            .rows
            .iter()
            .enumerate()
            .map(|(row, values)| {
                values
                    .iter()
                    .enumerate()
                    .map(|(column, value)| CellValue::from_json(value, row, column))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        let set = ResultSet {
            columns: raw.columns,
            rows,
        };
        set.validate()?;
        Ok(set)
    }
}
