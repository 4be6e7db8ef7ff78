//! HTTP upload module
//!
//! Posts signed JSON payloads to the Log Analytics HTTP Data Collector API.
//!
//! One call is one POST: no retries, no backoff. Any status outside
//! 200..=299 is returned as [`Error::Api`](crate::Error::Api).

mod client;

pub use client::{
    rfc1123_date, ClientConfig, ClientConfigBuilder, LogAnalyticsClient, API_VERSION,
    CONTENT_TYPE, METHOD, RESOURCE,
};
