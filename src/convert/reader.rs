//! Lazy chunked CSV reader
//!
//! Wraps Arrow's CSV reader and yields one [`JsonBatch`] per chunk.

use super::columns::type_batch;
use super::json::batch_to_json_string;
use super::types::ConvertOptions;
use crate::error::Result;
use crate::source::CsvSource;
use crate::types::{ColumnSpec, ColumnType, JsonBatch};
use arrow::csv::reader::Format;
use arrow::csv::{Reader, ReaderBuilder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use std::collections::HashSet;
use std::io::Read;
use std::sync::Arc;
use tracing::debug;

/// Start converting a source
///
/// Every call starts from the beginning of the source.
pub fn convert(source: &CsvSource, options: &ConvertOptions) -> Result<CsvBatchReader> {
    CsvBatchReader::new(source, options.clone())
}

/// Iterator over the JSON batches of one CSV source
///
/// Finite and not restartable. After the first error it yields nothing more.
pub struct CsvBatchReader {
    inner: Option<Reader<Box<dyn Read + Send>>>,
    options: ConvertOptions,
    source: String,
    next_index: usize,
    rows_read: usize,
}

impl CsvBatchReader {
    /// Create a reader over a source
    ///
    /// Reads the header row once to learn the column names, then opens a
    /// second reader for the data rows.
    pub fn new(source: &CsvSource, options: ConvertOptions) -> Result<Self> {
        let (header_schema, _) = Format::default()
            .with_header(true)
            .with_delimiter(options.delimiter)
            .infer_schema(source.reader()?, Some(0))?;

        let inner = if header_schema.fields().is_empty() {
            debug!("{} has no header row", source.locator());
            None
        } else {
            let names = unique_names(header_schema.fields().iter().map(|f| f.name()));
            let string_fields: Vec<Field> = names
                .into_iter()
                .map(|name| Field::new(name, DataType::Utf8, true))
                .collect();

            let reader = ReaderBuilder::new(Arc::new(Schema::new(string_fields)))
                .with_header(true)
                .with_delimiter(options.delimiter)
                .with_batch_size(options.batch_size)
                .build(source.reader()?)?;
            Some(reader)
        };

        Ok(Self {
            inner,
            options,
            source: source.locator().to_string(),
            next_index: 0,
            rows_read: 0,
        })
    }

    /// Number of data rows consumed so far
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    fn convert_batch(&mut self, raw: &RecordBatch) -> Result<JsonBatch> {
        let typed = type_batch(raw, self.options.use_types, self.rows_read)?;
        let body = batch_to_json_string(&typed)?;

        let columns = typed
            .schema()
            .fields()
            .iter()
            .map(|f| ColumnSpec {
                name: f.name().clone(),
                column_type: ColumnType::from_arrow(f.data_type()),
            })
            .collect();

        let batch = JsonBatch {
            index: self.next_index,
            row_count: typed.num_rows(),
            columns,
            body,
        };

        debug!(
            "Converted batch {} of {}: {} rows, {} bytes",
            batch.index,
            self.source,
            batch.row_count,
            batch.content_length()
        );

        self.next_index += 1;
        self.rows_read += batch.row_count;
        Ok(batch)
    }
}

/// Make repeated header names unique
///
/// The second `a` becomes `a.1`, the third `a.2`, skipping names already
/// taken by other columns.
pub(crate) fn unique_names<'a>(names: impl IntoIterator<Item = &'a String>) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for name in names {
        let mut candidate = name.clone();
        let mut n = 0;
        while taken.contains(&candidate) {
            n += 1;
            candidate = format!("{name}.{n}");
        }
        taken.insert(candidate.clone());
        out.push(candidate);
    }

    out
}

impl Iterator for CsvBatchReader {
    type Item = Result<JsonBatch>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = match self.inner.as_mut()?.next() {
            Some(Ok(raw)) => raw,
            Some(Err(e)) => {
                self.inner = None;
                return Some(Err(e.into()));
            }
            None => {
                self.inner = None;
                return None;
            }
        };

        let result = self.convert_batch(&raw);
        if result.is_err() {
            self.inner = None;
        }
        Some(result)
    }
}

impl std::fmt::Debug for CsvBatchReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsvBatchReader")
            .field("source", &self.source)
            .field("options", &self.options)
            .field("next_index", &self.next_index)
            .field("rows_read", &self.rows_read)
            .field("finished", &self.inner.is_none())
            .finish()
    }
}
