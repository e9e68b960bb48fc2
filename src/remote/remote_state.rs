//! Remote suggestion cache and request tracking
//!
//! Owns the channels to the worker thread and the cache the aggregator reads.
//! Each request bumps `request_id`; a response is applied only while its id is
//! still in flight. The controller cancels the in-flight lookup whenever the
//! input changes, so a slow answer for older input never overwrites a newer
//! one.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use tokio_util::sync::CancellationToken;

use super::client::SuggestClient;
use super::worker::{RemoteRequest, RemoteResponse, spawn_worker};
use super::RemoteError;

/// Cache of the last successful remote lookup
#[derive(Debug, Default)]
pub struct RemoteSuggestions {
    results: Vec<String>,
    request_tx: Option<Sender<RemoteRequest>>,
    response_rx: Option<Receiver<RemoteResponse>>,
    request_id: u64,
    in_flight_request_id: Option<u64>,
    cancel_token: Option<CancellationToken>,
}

impl RemoteSuggestions {
    /// Create an unconnected cache; `send_request` is a no-op until channels are set
    pub fn new() -> Self {
        Self::default()
    }

    /// Wire up channels to a worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<RemoteRequest>,
        response_rx: Receiver<RemoteResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Spawn a worker for `client` and connect to it
    pub fn connect(&mut self, client: Result<SuggestClient, RemoteError>) {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(client, request_rx, response_tx);
        self.set_channels(request_tx, response_rx);
    }

    pub fn is_connected(&self) -> bool {
        self.request_tx.is_some()
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    pub fn has_in_flight_request(&self) -> bool {
        self.in_flight_request_id.is_some()
    }

    /// Empty the cache and abandon any in-flight lookup
    pub fn clear(&mut self) {
        self.cancel_in_flight_request();
        self.results.clear();
    }

    /// Cancel the in-flight lookup, if any
    ///
    /// The id is left bumped so a response that still arrives is dropped.
    pub fn cancel_in_flight_request(&mut self) {
        if let Some(token) = self.cancel_token.take() {
            token.cancel();
        }
        if let Some(id) = self.in_flight_request_id.take() {
            log::debug!("Cancelled remote request {}", id);
        }
    }

    /// Send a lookup for `terms`, superseding any in-flight one
    ///
    /// Returns false when there is no worker to send to.
    pub fn send_request(&mut self, terms: &str) -> bool {
        self.cancel_in_flight_request();

        let Some(tx) = &self.request_tx else {
            return false;
        };

        self.request_id = self.request_id.wrapping_add(1);
        let cancel_token = CancellationToken::new();
        let request = RemoteRequest::Fetch {
            terms: terms.to_string(),
            request_id: self.request_id,
            cancel_token: cancel_token.clone(),
        };

        if tx.send(request).is_err() {
            log::warn!("Remote worker disconnected; dropping request for {:?}", terms);
            self.request_tx = None;
            self.response_rx = None;
            return false;
        }

        log::debug!("Sent remote request {} for {:?}", self.request_id, terms);
        self.in_flight_request_id = Some(self.request_id);
        self.cancel_token = Some(cancel_token);
        true
    }

    /// Drain worker responses
    ///
    /// Returns true when the cache changed. Failures are logged and leave the
    /// cache as it was.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;

        loop {
            let response = match &self.response_rx {
                Some(rx) => match rx.try_recv() {
                    Ok(response) => response,
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        log::warn!("Remote worker disconnected");
                        self.request_tx = None;
                        self.response_rx = None;
                        self.in_flight_request_id = None;
                        break;
                    }
                },
                None => break,
            };
            changed |= self.apply_response(response);
        }

        changed
    }

    /// Apply one worker response through the generation guard
    pub fn apply_response(&mut self, response: RemoteResponse) -> bool {
        match response {
            RemoteResponse::Results {
                request_id,
                results,
            } => {
                if self.in_flight_request_id != Some(request_id) {
                    log::debug!(
                        "Dropping stale remote results {} (latest {})",
                        request_id,
                        self.request_id
                    );
                    return false;
                }
                self.finish_request();
                self.results = results;
                true
            }
            RemoteResponse::Failed { request_id, error } => {
                if self.in_flight_request_id == Some(request_id) {
                    self.finish_request();
                }
                log::warn!("Remote suggestion lookup {} failed: {}", request_id, error);
                false
            }
            RemoteResponse::Cancelled { request_id } => {
                log::debug!("Remote request {} acknowledged cancel", request_id);
                false
            }
        }
    }

    fn finish_request(&mut self) {
        self.in_flight_request_id = None;
        self.cancel_token = None;
    }
}

#[cfg(test)]
#[path = "remote_state_tests.rs"]
mod remote_state_tests;
