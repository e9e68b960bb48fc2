//! Remote Suggestion Worker Thread
//!
//! Runs suggestion lookups on a background thread so aggregation never
//! blocks on the network. Requests arrive over a channel, each tagged with a
//! request id and a cancellation token; outcomes go back tagged with the
//! same id so the caller can drop stale ones.

use std::sync::mpsc::{Receiver, Sender};

use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use super::RemoteError;
use super::client::SuggestClient;

/// Request messages sent to the worker thread
#[derive(Debug)]
pub enum RemoteRequest {
    Fetch {
        terms: String,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
        cancel_token: CancellationToken,
    },
}

/// Response messages received from the worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteResponse {
    Results { request_id: u64, results: Vec<String> },
    Failed { request_id: u64, error: RemoteError },
    Cancelled { request_id: u64 },
}

/// Spawn the worker thread
///
/// The thread exits when the request channel is closed.
pub fn spawn_worker(
    client: Result<SuggestClient, RemoteError>,
    request_rx: Receiver<RemoteRequest>,
    response_tx: Sender<RemoteResponse>,
) {
    std::thread::spawn(move || {
        worker_loop(client, request_rx, response_tx);
    });
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    client: Result<SuggestClient, RemoteError>,
    request_rx: Receiver<RemoteRequest>,
    response_tx: Sender<RemoteResponse>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::warn!("Failed to start suggestion runtime: {}", e);
            return;
        }
    };

    if let Err(e) = &client {
        // Don't fail yet - every request will report it
        log::debug!("Suggestion client not configured: {}", e);
    }

    while let Ok(request) = request_rx.recv() {
        match request {
            RemoteRequest::Fetch {
                terms,
                request_id,
                cancel_token,
            } => {
                let response = handle_fetch(&runtime, &client, &terms, request_id, cancel_token);
                if response_tx.send(response).is_err() {
                    // Main thread disconnected
                    break;
                }
            }
        }
    }

    log::debug!("Suggestion worker thread shutting down");
}

fn handle_fetch(
    runtime: &Runtime,
    client: &Result<SuggestClient, RemoteError>,
    terms: &str,
    request_id: u64,
    cancel_token: CancellationToken,
) -> RemoteResponse {
    let client = match client {
        Ok(c) => c,
        Err(e) => {
            return RemoteResponse::Failed {
                request_id,
                error: e.clone(),
            };
        }
    };

    match runtime.block_on(client.fetch_with_cancel(terms, cancel_token)) {
        Ok(results) => RemoteResponse::Results {
            request_id,
            results,
        },
        Err(RemoteError::Cancelled) => {
            log::debug!("Cancelled suggestion request {}", request_id);
            RemoteResponse::Cancelled { request_id }
        }
        Err(error) => RemoteResponse::Failed { request_id, error },
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
