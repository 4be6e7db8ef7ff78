//! Source locator types

use std::fmt;
use std::path::PathBuf;
use url::Url;

/// Where a CSV resource lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocator {
    /// File on the local filesystem
    Local(PathBuf),
    /// Blob or file served over HTTP(S)
    Remote(Url),
}

impl SourceLocator {
    /// Resolve a locator string
    ///
    /// `http://` and `https://` URLs are remote, `file://` URLs and anything
    /// else are treated as local paths.
    pub fn parse(locator: &str) -> Self {
        match Url::parse(locator) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => SourceLocator::Remote(url),
            Ok(url) if url.scheme() == "file" => url
                .to_file_path()
                .map_or_else(|()| SourceLocator::Local(PathBuf::from(locator)), SourceLocator::Local),
            _ => SourceLocator::Local(PathBuf::from(locator)),
        }
    }

    /// Check if this is a remote locator
    pub fn is_remote(&self) -> bool {
        matches!(self, SourceLocator::Remote(_))
    }

    /// Default table name for this source: the file stem
    ///
    /// `https://host/container/perf1.csv` -> `perf1`
    pub fn table_name(&self) -> Option<String> {
        let file_name = match self {
            SourceLocator::Local(path) => path.file_name()?.to_str()?.to_string(),
            SourceLocator::Remote(url) => url
                .path_segments()?
                .rev()
                .find(|s| !s.is_empty())?
                .to_string(),
        };
        let stem = file_name.split('.').next()?;
        if stem.is_empty() {
            None
        } else {
            Some(stem.to_string())
        }
    }
}

impl From<&str> for SourceLocator {
    fn from(locator: &str) -> Self {
        Self::parse(locator)
    }
}

impl fmt::Display for SourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLocator::Local(path) => write!(f, "{}", path.display()),
            SourceLocator::Remote(url) => write!(f, "{url}"),
        }
    }
}
