//! Per-column typing of raw CSV chunks
//!
//! The CSV reader yields every column as nullable UTF-8. This module decides
//! each column's type for one chunk and builds the typed Arrow arrays.

use super::types::TIMESTAMP_FORMAT;
use crate::error::{Error, Result};
use crate::types::{ColumnType, TIMESTAMP_TYPE};
use arrow::array::{
    Array, ArrayRef, BooleanArray, Float64Array, Int64Array, StringArray,
    TimestampMicrosecondArray,
};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use chrono::NaiveDateTime;
use std::sync::Arc;

/// Check if a column holds timestamps, judged by its name
pub fn is_time_column(name: &str) -> bool {
    name.to_lowercase().contains("time")
}

/// Parse one value of a time column
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).ok()
}

fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Infer the storage type of a non-time column from all its values
///
/// Nulls are ignored and surrounding whitespace does not count. A column with
/// no values at all is Float64.
fn infer_data_type(values: &StringArray) -> DataType {
    let mut all_int = true;
    let mut all_float = true;
    let mut all_bool = true;

    for value in values.iter().flatten() {
        let value = value.trim();
        if all_int && value.parse::<i64>().is_err() {
            all_int = false;
        }
        if all_float && value.parse::<f64>().is_err() {
            all_float = false;
        }
        if all_bool && parse_bool(value).is_none() {
            all_bool = false;
        }
        if !all_float && !all_bool {
            return DataType::Utf8;
        }
    }

    if values.null_count() == values.len() {
        DataType::Float64
    } else if all_int {
        DataType::Int64
    } else if all_float {
        DataType::Float64
    } else if all_bool {
        DataType::Boolean
    } else {
        DataType::Utf8
    }
}

/// Infer the type of a non-time column within one chunk
pub fn infer_column_type(values: &StringArray) -> ColumnType {
    ColumnType::from_arrow(&infer_data_type(values))
}

fn to_timestamps(values: &StringArray, column: &str, first_row: usize) -> Result<ArrayRef> {
    let mut micros = Vec::with_capacity(values.len());
    for (offset, value) in values.iter().enumerate() {
        match value {
            None => micros.push(None),
            Some(raw) => {
                let parsed = parse_timestamp(raw)
                    .ok_or_else(|| Error::timestamp(column, first_row + offset + 1, raw))?;
                micros.push(Some(parsed.and_utc().timestamp_micros()));
            }
        }
    }
    Ok(Arc::new(TimestampMicrosecondArray::from(micros)))
}

fn to_typed(values: &StringArray, data_type: &DataType) -> ArrayRef {
    match data_type {
        DataType::Int64 => Arc::new(
            values
                .iter()
                .map(|v| v.and_then(|s| s.trim().parse::<i64>().ok()))
                .collect::<Int64Array>(),
        ),
        DataType::Float64 => Arc::new(
            values
                .iter()
                .map(|v| v.and_then(|s| s.trim().parse::<f64>().ok()))
                .collect::<Float64Array>(),
        ),
        DataType::Boolean => Arc::new(
            values
                .iter()
                .map(|v| v.and_then(parse_bool))
                .collect::<BooleanArray>(),
        ),
        _ => Arc::new(values.clone()),
    }
}

/// Turn a raw all-string chunk into a typed one
///
/// `first_row` is the number of data rows that came before this chunk in the
/// source; it only feeds error messages. With `use_types` every column is
/// renamed once, with the suffix of its final type.
pub fn type_batch(raw: &RecordBatch, use_types: bool, first_row: usize) -> Result<RecordBatch> {
    let schema = raw.schema();
    let mut fields = Vec::with_capacity(raw.num_columns());
    let mut columns: Vec<ArrayRef> = Vec::with_capacity(raw.num_columns());

    for (idx, field) in schema.fields().iter().enumerate() {
        let array = raw.column(idx);
        let name = field.name();

        let (data_type, typed) = match array.as_any().downcast_ref::<StringArray>() {
            Some(values) if is_time_column(name) => {
                (TIMESTAMP_TYPE, to_timestamps(values, name, first_row)?)
            }
            Some(values) => {
                let data_type = infer_data_type(values);
                let typed = to_typed(values, &data_type);
                (data_type, typed)
            }
            None => (array.data_type().clone(), array.clone()),
        };

        let final_name = if use_types {
            ColumnType::from_arrow(&data_type).tag(name)
        } else {
            name.clone()
        };

        fields.push(Field::new(final_name, data_type, true));
        columns.push(typed);
    }

    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?)
}
