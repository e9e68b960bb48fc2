//! Remote search suggestions
//!
//! Defines RemoteError and wires the HTTP client, the worker thread that runs
//! it, and the cache the aggregator reads from.

use thiserror::Error;

mod client;
mod remote_state;
mod worker;

pub use client::{SuggestClient, parse_suggestions};
pub use remote_state::RemoteSuggestions;
pub use worker::{RemoteRequest, RemoteResponse, spawn_worker};

/// Errors that can occur during a suggestion lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// No usable client (bad endpoint or TLS setup failure)
    #[error("Remote suggestions not configured: {0}")]
    NotConfigured(String),

    /// Connection or transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// No response within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Endpoint answered with a non-success status
    #[error("HTTP status {0}")]
    Status(u16),

    /// Body is not JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Body is JSON but element [1] is not an array
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    /// Superseded by a newer lookup
    #[error("Request cancelled")]
    Cancelled,
}
