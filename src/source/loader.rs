//! Opening CSV sources
//!
//! Local files are streamed from disk. Remote blobs are downloaded once with
//! a GET and then read from memory.

use super::types::SourceLocator;
use crate::error::{Error, Result};
use bytes::Bytes;
use reqwest::Client;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::PathBuf;
use tracing::debug;

/// An opened CSV resource
///
/// Can hand out any number of independent readers over the same content.
#[derive(Debug, Clone)]
pub struct CsvSource {
    locator: SourceLocator,
    data: SourceData,
}

#[derive(Debug, Clone)]
enum SourceData {
    File(PathBuf),
    Memory(Bytes),
}

impl CsvSource {
    /// Open a local file
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        Ok(Self {
            locator: SourceLocator::Local(path.clone()),
            data: SourceData::File(path),
        })
    }

    /// Wrap content that is already in memory
    pub fn from_bytes(locator: SourceLocator, data: impl Into<Bytes>) -> Self {
        Self {
            locator,
            data: SourceData::Memory(data.into()),
        }
    }

    /// Where this source came from
    pub fn locator(&self) -> &SourceLocator {
        &self.locator
    }

    /// Open a fresh reader positioned at the start of the content
    pub fn reader(&self) -> Result<Box<dyn Read + Send>> {
        match &self.data {
            SourceData::File(path) => Ok(Box::new(File::open(path)?)),
            SourceData::Memory(bytes) => Ok(Box::new(Cursor::new(bytes.clone()))),
        }
    }
}

/// Resolves locators into opened [`CsvSource`]s
#[derive(Debug, Clone, Default)]
pub struct SourceLoader {
    client: Client,
}

impl SourceLoader {
    /// Create a loader with a default HTTP client
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader sharing an existing HTTP client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Open a source
    ///
    /// Remote sources must answer the GET with a 2xx status.
    pub async fn open(&self, locator: &SourceLocator) -> Result<CsvSource> {
        match locator {
            SourceLocator::Local(path) => CsvSource::from_path(path),
            SourceLocator::Remote(url) => {
                debug!("Downloading {}", url);
                let response = self.client.get(url.clone()).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(Error::SourceFetch {
                        url: url.to_string(),
                        status: status.as_u16(),
                    });
                }
                let body = response.bytes().await?;
                debug!("Downloaded {} bytes from {}", body.len(), url);
                Ok(CsvSource::from_bytes(locator.clone(), body))
            }
        }
    }
}
