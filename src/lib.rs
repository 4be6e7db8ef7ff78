// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # logship
//!
//! Ships CSV files, local or remote, into an Azure Log Analytics workspace
//! through the HTTP Data Collector API.
//!
//! ## Features
//!
//! - **Batched Upload**: Rows are sent in JSON batches of 1000, strictly in order
//! - **Type Inference**: Number, timestamp and boolean columns per batch
//! - **Type Suffixes**: Optional `_d`, `_t`, `_b`, `_s` column names
//! - **Shared Key Auth**: HMAC-SHA256 request signing
//! - **Remote Sources**: CSV over HTTP(S), e.g. storage blob URLs
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use logship::{IngestEngine, LogAnalyticsClient, SharedKeyCredentials, SourceLoader, SourceLocator, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let credentials = SharedKeyCredentials::new("workspace-id", "c2hhcmVkLWtleQ==")?;
//!     let client = LogAnalyticsClient::new(credentials)?;
//!
//!     let mut engine = IngestEngine::new(SourceLoader::new(), client);
//!     let stats = engine
//!         .ingest(&[SourceLocator::parse("perf1.csv")], Some("Perf"))
//!         .await?;
//!     println!("{} records", stats.records);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        IngestEngine                         │
//! │   for each source → for each batch → sink.send(table, ..)   │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌────────────┬────────────────┴────────┬───────────┬──────────┐
//! │   Source   │        Convert          │   Auth    │   HTTP   │
//! ├────────────┼─────────────────────────┼───────────┼──────────┤
//! │ Local file │ CSV → Arrow batches     │ SharedKey │ POST     │
//! │ HTTP(S)    │ Type inference/suffixes │ HMAC-256  │ /api/logs│
//! │            │ Arrow → JSON            │           │          │
//! └────────────┴─────────────────────────┴───────────┴──────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Shared Key request signing
pub mod auth;

/// Log Analytics HTTP client
pub mod http;

/// CSV source locations and loading
pub mod source;

/// CSV to typed JSON batch conversion
pub mod convert;

/// Read-convert-upload loop
pub mod engine;

/// Workspace credentials configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, ErrorKind, Result};
pub use types::*;

// Re-export commonly used types
pub use auth::{build_signature, SharedKeyCredentials};
pub use config::WorkspaceConfig;
pub use convert::{convert, ConvertOptions};
pub use engine::{BatchSink, IngestEngine, IngestStats};
pub use http::LogAnalyticsClient;
pub use source::{CsvSource, SourceLoader, SourceLocator};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
