//! Conversion options

/// Rows per uploaded batch
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Accepted layout of values in time columns
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Options controlling CSV conversion
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Maximum rows per batch
    pub batch_size: usize,
    /// Append type suffixes to column names
    pub use_types: bool,
    /// Field delimiter
    pub delimiter: u8,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            use_types: false,
            delimiter: b',',
        }
    }
}

impl ConvertOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable type-preservation mode
    #[must_use]
    pub fn with_types(mut self, use_types: bool) -> Self {
        self.use_types = use_types;
        self
    }

    /// Set batch size (values below 1 are raised to 1)
    #[must_use]
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }

    /// Set field delimiter
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}
