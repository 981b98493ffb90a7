//! Scalar cell values and their canonical text form.

use serde::{Deserialize, Serialize};

use crate::error::BoxTableError;

/// A single value in a result set row.
///
/// Every variant has a canonical text form (see the `Display` impl), which
/// is what the renderer measures and centers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// SQL NULL, displayed as `NULL`
    #[default]
    Null,
    /// Boolean, displayed as `true` / `false`
    Bool(bool),
    /// Integer, displayed in decimal
    Int(i64),
    /// Unsigned integer above `i64::MAX`, displayed in decimal
    UInt(u64),
    /// Floating point, displayed in plain decimal notation with a
    /// fractional part (`1.0`, `0.0000001`)
    Float(f64),
    /// Text, displayed as-is
    Text(String),
}

impl CellValue {
    /// Check if this is a NULL value
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Convert a JSON scalar into a cell value.
    ///
    /// `row` and `column` only locate the cell in the returned error when
    /// the JSON value is an array or an object.
    pub fn from_json(
        value: &serde_json::Value,
        row: usize,
        column: usize,
    ) -> Result<Self, BoxTableError> {
        use serde_json::Value;

        match value {
            Value::Null => Ok(CellValue::Null),
            Value::Bool(b) => Ok(CellValue::Bool(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(CellValue::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(CellValue::UInt(u))
                } else {
                    n.as_f64()
                        .map(CellValue::Float)
                        .ok_or(BoxTableError::UnrepresentableValue { row, column })
                }
            }
            Value::String(s) => Ok(CellValue::Text(s.clone())),
            Value::Array(_) | Value::Object(_) => {
                Err(BoxTableError::UnrepresentableValue { row, column })
            }
        }
    }
}

/// Plain decimal text for a float; whole numbers get a trailing `.0`.
fn float_text(v: f64) -> String {
    // f64's Display never uses exponent notation
    let s = v.to_string();
    if v.is_finite() && !s.contains('.') {
        format!("{}.0", s)
    } else {
        s
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CellValue::Null => "NULL".to_string(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Int(i) => i.to_string(),
            CellValue::UInt(u) => u.to_string(),
            CellValue::Float(v) => float_text(*v),
            CellValue::Text(s) => s.clone(),
        };

        // Respect width and alignment from the formatter
        f.pad(&s)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Int(v.into())
    }
}

impl From<u32> for CellValue {
    fn from(v: u32) -> Self {
        CellValue::Int(v.into())
    }
}

impl From<u64> for CellValue {
    fn from(v: u64) -> Self {
        i64::try_from(v).map_or(CellValue::UInt(v), CellValue::Int)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(CellValue::Null, Into::into)
    }
}
