//! CSV source module
//!
//! Resolves a locator (local path or `http(s)` URL) and opens it as a byte
//! stream for the converter.

mod loader;
mod types;

pub use loader::{CsvSource, SourceLoader};
pub use types::SourceLocator;

#[cfg(test)]
mod tests;
