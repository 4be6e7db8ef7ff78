//! CSV to JSON conversion module
//!
//! Streams a CSV resource in fixed-size chunks and turns every chunk into a
//! JSON array of records ready for the Data Collector API.
//!
//! # Overview
//!
//! - Raw fields are read as strings through Arrow's CSV reader
//! - Columns whose name contains "time" are parsed as timestamps
//! - Other columns get a type inferred from the whole chunk
//! - In type-preservation mode column names get a `_d`/`_t`/`_b`/`_s` suffix

mod columns;
mod json;
mod reader;
mod types;

pub use columns::{infer_column_type, is_time_column, parse_timestamp, type_batch};
pub use json::{batch_to_json, batch_to_json_string};
pub use reader::{convert, CsvBatchReader};
pub use types::{ConvertOptions, DEFAULT_BATCH_SIZE, TIMESTAMP_FORMAT};
