//! Engine types
//!
//! Run statistics for an ingest.

/// Statistics for one source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceStats {
    /// Table the source was sent to
    pub table: String,
    /// Batches sent
    pub batches: usize,
    /// Records sent
    pub records: usize,
    /// Payload bytes sent
    pub bytes: usize,
}

/// Statistics from an ingest run
#[derive(Debug, Clone, Default)]
pub struct IngestStats {
    /// Sources fully sent
    pub sources: usize,
    /// Total batches sent
    pub batches: usize,
    /// Total records sent
    pub records: usize,
    /// Total payload bytes sent
    pub bytes: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
    /// Per-source breakdown, in send order
    pub per_source: Vec<SourceStats>,
}

impl IngestStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one sent batch
    pub fn add_batch(&mut self, records: usize, bytes: usize) {
        self.batches += 1;
        self.records += records;
        self.bytes += bytes;
    }

    /// Account for one finished source
    pub fn add_source(&mut self, source: SourceStats) {
        self.sources += 1;
        self.per_source.push(source);
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}

impl SourceStats {
    /// Create stats for a source going to `table`
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Default::default()
        }
    }

    /// Account for one sent batch
    pub fn add_batch(&mut self, records: usize, bytes: usize) {
        self.batches += 1;
        self.records += records;
        self.bytes += bytes;
    }
}
