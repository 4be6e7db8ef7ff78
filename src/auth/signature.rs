//! SharedKey signature builder
//!
//! Produces the value of the `Authorization` header for the Data Collector API.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Build the string that gets signed
///
/// Format: `{method}\n{content_length}\n{content_type}\nx-ms-date:{date}\n{resource}`
pub fn canonical_string(
    date: &str,
    content_length: usize,
    method: &str,
    content_type: &str,
    resource: &str,
) -> String {
    format!("{method}\n{content_length}\n{content_type}\nx-ms-date:{date}\n{resource}")
}

/// Build the `Authorization` header value for one request
///
/// Returns `SharedKey {workspace_id}:{base64(hmac_sha256(key, canonical))}`.
/// The shared key must be standard base64; it is decoded to raw bytes
/// before being used as the HMAC key.
pub fn build_signature(
    workspace_id: &str,
    shared_key: &str,
    date: &str,
    content_length: usize,
    method: &str,
    content_type: &str,
    resource: &str,
) -> Result<String> {
    let key = decode_key(shared_key)?;
    let to_sign = canonical_string(date, content_length, method, content_type, resource);
    let digest = sign(&key, to_sign.as_bytes())?;
    Ok(format!("SharedKey {workspace_id}:{digest}"))
}

fn decode_key(shared_key: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(shared_key.trim())
        .map_err(|e| Error::invalid_key(format!("not valid base64: {e}")))
}

fn sign(key: &[u8], message: &[u8]) -> Result<String> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|e| Error::invalid_key(e.to_string()))?;
    mac.update(message);
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Workspace id and shared key for one Log Analytics workspace
#[derive(Clone)]
pub struct SharedKeyCredentials {
    workspace_id: String,
    shared_key: String,
    key_bytes: Vec<u8>,
}

impl SharedKeyCredentials {
    /// Create credentials, rejecting a key that is not valid base64
    pub fn new(workspace_id: impl Into<String>, shared_key: impl Into<String>) -> Result<Self> {
        let workspace_id = workspace_id.into();
        if workspace_id.trim().is_empty() {
            return Err(Error::missing_field("workspace_id"));
        }
        let shared_key = shared_key.into();
        let key_bytes = decode_key(&shared_key)?;
        Ok(Self {
            workspace_id,
            shared_key,
            key_bytes,
        })
    }

    /// Workspace (customer) id
    pub fn workspace_id(&self) -> &str {
        &self.workspace_id
    }

    /// Base64 shared key as supplied
    pub fn shared_key(&self) -> &str {
        &self.shared_key
    }

    /// Sign a request with these credentials
    ///
    /// Equivalent to [`build_signature`] without decoding the key again.
    pub fn sign(
        &self,
        date: &str,
        content_length: usize,
        method: &str,
        content_type: &str,
        resource: &str,
    ) -> Result<String> {
        let to_sign = canonical_string(date, content_length, method, content_type, resource);
        let digest = sign(&self.key_bytes, to_sign.as_bytes())?;
        Ok(format!("SharedKey {}:{digest}", self.workspace_id))
    }
}

impl std::fmt::Debug for SharedKeyCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedKeyCredentials")
            .field("workspace_id", &self.workspace_id)
            .field("shared_key", &"[REDACTED]")
            .finish()
    }
}
