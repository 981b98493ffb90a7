//! Input data: result sets and their cell values.
//!
//! A [`ResultSet`] is what the query layer hands over once rows have been
//! fetched: column names plus rows of [`CellValue`]s. It can be built in
//! code or loaded from a JSON document.

pub mod result_set;
pub mod value;

pub use result_set::ResultSet;
pub use value::CellValue;
