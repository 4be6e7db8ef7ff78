//! Ingest engine module
//!
//! Main read-convert-upload loop.
//!
//! # Overview
//!
//! The engine module provides:
//! - `IngestEngine` - Sends every batch of every source, strictly in order
//! - `BatchSink` - Destination for batches (Log Analytics or stdout)
//! - `IngestStats` / `SourceStats` - Counters for a run
//!
//! A batch is fully sent before the next one is read. The first error stops
//! the run; batches already sent stay sent.

mod sink;
mod types;

pub use sink::{BatchSink, StdoutSink};
pub use types::{IngestStats, SourceStats};

use crate::convert::{convert, ConvertOptions};
use crate::error::{Error, Result};
use crate::source::{SourceLoader, SourceLocator};
use std::time::Instant;
use tracing::{debug, info};

/// Engine driving sources through conversion into a sink
pub struct IngestEngine<S: BatchSink> {
    /// Opens CSV sources
    loader: SourceLoader,
    /// Batch destination
    sink: S,
    /// Conversion options
    options: ConvertOptions,
    /// Statistics
    stats: IngestStats,
}

impl<S: BatchSink> IngestEngine<S> {
    /// Create a new engine
    pub fn new(loader: SourceLoader, sink: S) -> Self {
        Self {
            loader,
            sink,
            options: ConvertOptions::default(),
            stats: IngestStats::default(),
        }
    }

    /// Set conversion options
    #[must_use]
    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    /// Get statistics
    pub fn stats(&self) -> &IngestStats {
        &self.stats
    }

    /// Get the sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Send every source, in order
    ///
    /// With no `table`, each source goes to the table named after its file.
    pub async fn ingest(
        &mut self,
        locators: &[SourceLocator],
        table: Option<&str>,
    ) -> Result<IngestStats> {
        let start = Instant::now();

        for locator in locators {
            let table = resolve_table(locator, table)?;
            self.ingest_source(locator, &table).await?;
        }

        self.stats.set_duration(start.elapsed().as_millis() as u64);
        info!(
            "Done: {} sources, {} batches, {} records in {}ms",
            self.stats.sources, self.stats.batches, self.stats.records, self.stats.duration_ms
        );
        Ok(self.stats.clone())
    }

    /// Send one source to `table`
    pub async fn ingest_source(
        &mut self,
        locator: &SourceLocator,
        table: &str,
    ) -> Result<SourceStats> {
        let source = self.loader.open(locator).await?;
        let mut source_stats = SourceStats::new(table);

        for batch in convert(&source, &self.options)? {
            let batch = batch?;
            self.sink.send(table, &batch).await?;

            debug!(
                "Sent batch {} of {} to {}: {} records",
                batch.index, locator, table, batch.row_count
            );
            source_stats.add_batch(batch.row_count, batch.content_length());
            self.stats.add_batch(batch.row_count, batch.content_length());
        }

        info!(
            "File {} was uploaded to {} ({} batches, {} records, {} bytes)",
            locator,
            source_stats.table,
            source_stats.batches,
            source_stats.records,
            source_stats.bytes
        );
        self.stats.add_source(source_stats.clone());
        Ok(source_stats)
    }
}

/// Pick the table for a source
fn resolve_table(locator: &SourceLocator, table: Option<&str>) -> Result<String> {
    match table {
        Some(table) if !table.trim().is_empty() => Ok(table.to_string()),
        _ => locator.table_name().ok_or_else(|| {
            Error::config(format!(
                "No table name given and none can be derived from '{locator}'"
            ))
        }),
    }
}
