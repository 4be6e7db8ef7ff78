//! Common types used throughout logship
//!
//! This module contains shared type definitions and the column type tags
//! used for Log Analytics schema hints.

use arrow::datatypes::{DataType, TimeUnit};
use serde::{Deserialize, Serialize};

// ============================================================================
// Column Types
// ============================================================================

/// Scalar type inferred for a CSV column within one batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Integer or floating point
    Number,
    /// Date and time
    Timestamp,
    /// true / false
    Boolean,
    /// Anything else
    Text,
}

impl ColumnType {
    /// Column name suffix understood by Log Analytics custom tables
    pub const fn suffix(self) -> &'static str {
        match self {
            ColumnType::Number => "_d",
            ColumnType::Timestamp => "_t",
            ColumnType::Boolean => "_b",
            ColumnType::Text => "_s",
        }
    }

    /// Map an Arrow data type to its column type
    pub fn from_arrow(data_type: &DataType) -> Self {
        match data_type {
            DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float16
            | DataType::Float32
            | DataType::Float64
            | DataType::Null => ColumnType::Number,
            DataType::Timestamp(_, _) | DataType::Date32 | DataType::Date64 => {
                ColumnType::Timestamp
            }
            DataType::Boolean => ColumnType::Boolean,
            _ => ColumnType::Text,
        }
    }

    /// Append this type's suffix to a column name
    pub fn tag(self, name: &str) -> String {
        format!("{name}{}", self.suffix())
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ColumnType::Number => "number",
            ColumnType::Timestamp => "timestamp",
            ColumnType::Boolean => "boolean",
            ColumnType::Text => "text",
        };
        f.write_str(s)
    }
}

/// Arrow type used for timestamp columns
pub const TIMESTAMP_TYPE: DataType = DataType::Timestamp(TimeUnit::Microsecond, None);

// ============================================================================
// Batches
// ============================================================================

/// Final name and type of one column in a converted batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column name as sent (suffixed in type-preservation mode)
    pub name: String,
    /// Inferred type
    pub column_type: ColumnType,
}

/// One converted CSV chunk, ready to upload
#[derive(Debug, Clone)]
pub struct JsonBatch {
    /// Zero-based position of this batch within its source
    pub index: usize,
    /// Number of records in `body`
    pub row_count: usize,
    /// Columns in output order
    pub columns: Vec<ColumnSpec>,
    /// JSON array of row objects
    pub body: String,
}

impl JsonBatch {
    /// Payload size in bytes
    pub fn content_length(&self) -> usize {
        self.body.len()
    }

    /// Output column names in order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}
