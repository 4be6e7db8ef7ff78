//! Workspace configuration
//!
//! Credentials come from CLI flags, environment variables or a config file,
//! in that order of priority. Config files may be YAML or JSON:
//!
//! ```yaml
//! workspace_id: 11111111-2222-3333-4444-555555555555
//! shared_key: c3VwZXItc2VjcmV0LXNoYXJlZC1rZXk=
//! ```

use crate::auth::SharedKeyCredentials;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Credentials for one Log Analytics workspace, possibly incomplete
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Workspace (customer) id
    #[serde(default, alias = "customer_id")]
    pub workspace_id: Option<String>,

    /// Base64 primary or secondary key
    #[serde(default, alias = "primary_key")]
    pub shared_key: Option<String>,
}

impl WorkspaceConfig {
    /// Create a config from explicit values
    pub fn new(workspace_id: Option<String>, shared_key: Option<String>) -> Self {
        Self {
            workspace_id,
            shared_key,
        }
    }

    /// Parse a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse a JSON document
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a config file
    ///
    /// `.json` files are parsed as JSON, everything else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Fill fields missing here from `fallback`
    #[must_use]
    pub fn or(self, fallback: WorkspaceConfig) -> Self {
        Self {
            workspace_id: non_empty(self.workspace_id).or(non_empty(fallback.workspace_id)),
            shared_key: non_empty(self.shared_key).or(non_empty(fallback.shared_key)),
        }
    }

    /// Merge explicit values with an optional config file
    ///
    /// Explicit values win over the file.
    pub fn resolve(explicit: WorkspaceConfig, file: Option<&Path>) -> Result<Self> {
        match file {
            Some(path) => Ok(explicit.or(Self::from_file(path)?)),
            None => Ok(explicit),
        }
    }

    /// Turn into validated credentials
    pub fn into_credentials(self) -> Result<SharedKeyCredentials> {
        let workspace_id =
            non_empty(self.workspace_id).ok_or_else(|| Error::missing_field("workspace_id"))?;
        let shared_key =
            non_empty(self.shared_key).ok_or_else(|| Error::missing_field("shared_key"))?;
        SharedKeyCredentials::new(workspace_id, shared_key)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const KEY: &str = "c3VwZXItc2VjcmV0LXNoYXJlZC1rZXk=";

    #[test]
    fn test_from_yaml() {
        let config = WorkspaceConfig::from_yaml_str(&format!(
            "workspace_id: ws-1\nshared_key: {KEY}\n"
        ))
        .unwrap();
        assert_eq!(config.workspace_id.as_deref(), Some("ws-1"));
        assert_eq!(config.shared_key.as_deref(), Some(KEY));
    }

    #[test]
    fn test_from_json_with_aliases() {
        let config = WorkspaceConfig::from_json_str(&format!(
            r#"{{"customer_id": "ws-2", "primary_key": "{KEY}"}}"#
        ))
        .unwrap();
        assert_eq!(config.workspace_id.as_deref(), Some("ws-2"));
        assert_eq!(config.shared_key.as_deref(), Some(KEY));
    }

    #[test]
    fn test_from_file_by_extension() {
        let mut json_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(json_file, r#"{{"workspace_id": "ws-json"}}"#).unwrap();
        let config = WorkspaceConfig::from_file(json_file.path()).unwrap();
        assert_eq!(config.workspace_id.as_deref(), Some("ws-json"));
        assert!(config.shared_key.is_none());

        let mut yaml_file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(yaml_file, "workspace_id: ws-yaml").unwrap();
        let config = WorkspaceConfig::from_file(yaml_file.path()).unwrap();
        assert_eq!(config.workspace_id.as_deref(), Some("ws-yaml"));
    }

    #[test]
    fn test_from_file_missing() {
        let result = WorkspaceConfig::from_file("/no/such/config.yaml");
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_explicit_values_win() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "workspace_id: from-file\nshared_key: {KEY}").unwrap();

        let explicit = WorkspaceConfig::new(Some("from-flag".to_string()), None);
        let config = WorkspaceConfig::resolve(explicit, Some(file.path())).unwrap();

        assert_eq!(config.workspace_id.as_deref(), Some("from-flag"));
        assert_eq!(config.shared_key.as_deref(), Some(KEY));
    }

    #[test]
    fn test_empty_values_fall_through() {
        let explicit = WorkspaceConfig::new(Some(String::new()), Some("  ".to_string()));
        let fallback = WorkspaceConfig::new(Some("ws".to_string()), Some(KEY.to_string()));
        let merged = explicit.or(fallback);
        assert_eq!(merged.workspace_id.as_deref(), Some("ws"));
        assert_eq!(merged.shared_key.as_deref(), Some(KEY));
    }

    #[test]
    fn test_into_credentials() {
        let creds = WorkspaceConfig::new(Some("ws".to_string()), Some(KEY.to_string()))
            .into_credentials()
            .unwrap();
        assert_eq!(creds.workspace_id(), "ws");
    }

    #[test]
    fn test_into_credentials_missing_fields() {
        let err = WorkspaceConfig::new(None, Some(KEY.to_string()))
            .into_credentials()
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required config field: workspace_id");

        let err = WorkspaceConfig::new(Some("ws".to_string()), None)
            .into_credentials()
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required config field: shared_key");
    }
}
