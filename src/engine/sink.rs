//! Batch destinations

use crate::error::Result;
use crate::http::LogAnalyticsClient;
use crate::types::JsonBatch;
use async_trait::async_trait;

/// Where converted batches go
#[async_trait]
pub trait BatchSink: Send + Sync {
    /// Deliver one batch to `table`
    async fn send(&self, table: &str, batch: &JsonBatch) -> Result<()>;
}

#[async_trait]
impl BatchSink for LogAnalyticsClient {
    async fn send(&self, table: &str, batch: &JsonBatch) -> Result<()> {
        self.post_data(&batch.body, table).await
    }
}

/// Prints every batch to stdout instead of uploading it
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

#[async_trait]
impl BatchSink for StdoutSink {
    async fn send(&self, table: &str, batch: &JsonBatch) -> Result<()> {
        println!(
            "{}",
            serde_json::json!({
                "table": table,
                "batch": batch.index,
                "rows": batch.row_count,
                "columns": batch.columns,
            })
        );
        println!("{}", batch.body);
        Ok(())
    }
}
