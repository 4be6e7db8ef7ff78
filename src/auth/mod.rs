//! Authentication module
//!
//! Implements the Log Analytics "SharedKey" scheme: an HMAC-SHA256 over a
//! canonical description of the request, keyed with the base64-decoded
//! workspace key.

mod signature;

pub use signature::{build_signature, canonical_string, SharedKeyCredentials};
