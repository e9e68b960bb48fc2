//! Suggestion endpoint client
//!
//! Issues `GET` against the autocomplete template and reads element `[1]`
//! of the JSON array response (the OpenSearch suggestions shape).

use std::time::Duration;

use serde_json::Value;
use tokio_util::sync::CancellationToken;

use super::RemoteError;
use crate::classify::fill_template;

#[derive(Debug, Clone)]
pub struct SuggestClient {
    http: reqwest::Client,
    autocomplete_url: String,
}

impl SuggestClient {
    /// Create a client for the given `{searchTerms}` template
    pub fn new(autocomplete_url: impl Into<String>, timeout_ms: u64) -> Result<Self, RemoteError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| RemoteError::NotConfigured(e.to_string()))?;

        Ok(Self {
            http,
            autocomplete_url: autocomplete_url.into(),
        })
    }

    pub fn request_url(&self, terms: &str) -> String {
        fill_template(&self.autocomplete_url, terms)
    }

    /// Fetch suggestions for `terms`
    pub async fn fetch(&self, terms: &str) -> Result<Vec<String>, RemoteError> {
        let response = self
            .http
            .get(self.request_url(terms))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(map_reqwest_error)?;
        parse_suggestions(&body)
    }

    /// Fetch unless `cancel_token` fires first
    pub async fn fetch_with_cancel(
        &self,
        terms: &str,
        cancel_token: CancellationToken,
    ) -> Result<Vec<String>, RemoteError> {
        if cancel_token.is_cancelled() {
            return Err(RemoteError::Cancelled);
        }

        tokio::select! {
            biased;
            _ = cancel_token.cancelled() => Err(RemoteError::Cancelled),
            result = self.fetch(terms) => result,
        }
    }
}

fn map_reqwest_error(e: reqwest::Error) -> RemoteError {
    if e.is_timeout() {
        RemoteError::Timeout
    } else {
        RemoteError::Network(e.to_string())
    }
}

/// Extract the suggestion strings from a response body
///
/// Only element `[1]` is read; non-string entries in it are skipped.
pub fn parse_suggestions(body: &str) -> Result<Vec<String>, RemoteError> {
    let value: Value = serde_json::from_str(body).map_err(|e| RemoteError::Parse(e.to_string()))?;

    let items = value
        .get(1)
        .and_then(Value::as_array)
        .ok_or_else(|| RemoteError::UnexpectedShape("element [1] is not an array".to_string()))?;

    Ok(items
        .iter()
        .filter_map(|item| item.as_str().map(str::to_string))
        .collect())
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
