//! Error types for the aggregation crate

use thiserror::Error;

/// Result type for aggregation operations
pub type AggregateResult<T> = std::result::Result<T, AggregateError>;

/// Errors that can occur while building a proxy entry
///
/// Per-candidate problems (a malformed language tag, a value of the wrong
/// kind) never surface here; they are logged and the candidate is skipped.
/// Only failures of the host collaborators abort an aggregation run.
#[derive(Error, Debug)]
pub enum AggregateError {
    /// The host proxy lookup failed while resolving a proxy-only candidate
    #[error("proxy lookup for <{uri}> failed: {message}")]
    ProxyLookup {
        /// The source URI the lookup was asked to resolve
        uri: String,
        /// Host-reported failure detail
        message: String,
    },
}

impl AggregateError {
    /// Create a proxy lookup error
    pub fn proxy_lookup(uri: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProxyLookup {
            uri: uri.into(),
            message: message.into(),
        }
    }
}
