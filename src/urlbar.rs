//! Url-bar suggestion controller
//!
//! Ties the aggregator, the debounced remote lookup and the selection
//! arithmetic together. The controller keeps the last list it built; the
//! committed selection lives with the window and is read back through
//! `SelectionState` and written only through dispatched actions.
//!
//! Every entry point that changes the list (input change, remote results)
//! rebuilds first and then recomputes the selection in the same call, so the
//! window never sees a list without a matching index and preview.

use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, Instant};

use crate::actions::{Action, ActionSink};
use crate::classify::is_url;
use crate::config::Config;
use crate::debouncer::Debouncer;
use crate::navigator::{PreviewUpdate, SelectionState, next_index, previous_index, resolve_index};
use crate::remote::{RemoteRequest, RemoteResponse, RemoteSuggestions, SuggestClient};
use crate::suggestions::{
    Activation, ActivationEvent, Aggregator, Suggestion, SuggestionContext, SuggestionList,
};

pub struct UrlBarSuggestions {
    aggregator: Aggregator,
    debouncer: Debouncer,
    remote: RemoteSuggestions,
    autocomplete_url: String,
    timeout_ms: u64,
    suggestion_list: Option<SuggestionList>,
    location: String,
    preview: Option<String>,
}

impl UrlBarSuggestions {
    /// Create a controller with no remote worker attached
    ///
    /// Remote lookups are skipped until `connect_remote` or
    /// `set_remote_channels` is called.
    pub fn new(config: &Config) -> Self {
        Self {
            aggregator: Aggregator::new(config.suggestions.clone(), config.search.search_url.clone()),
            debouncer: Debouncer::new(config.remote.debounce_ms),
            remote: RemoteSuggestions::new(),
            autocomplete_url: config.search.autocomplete_url.clone(),
            timeout_ms: config.remote.timeout_ms,
            suggestion_list: None,
            location: String::new(),
            preview: None,
        }
    }

    /// Create a controller with a remote worker thread already running
    pub fn with_remote_worker(config: &Config) -> Self {
        let mut controller = Self::new(config);
        controller.connect_remote();
        controller
    }

    /// Spawn the remote worker for the configured endpoint
    pub fn connect_remote(&mut self) {
        let client = SuggestClient::new(self.autocomplete_url.clone(), self.timeout_ms);
        if let Err(e) = &client {
            log::warn!("Remote suggestions unavailable: {}", e);
        }
        self.remote.connect(client);
    }

    /// Attach to an existing worker (or a test double)
    pub fn set_remote_channels(
        &mut self,
        request_tx: Sender<RemoteRequest>,
        response_rx: Receiver<RemoteResponse>,
    ) {
        self.remote.set_channels(request_tx, response_rx);
    }

    /// Swap the aggregator, e.g. to use a different top-sites dataset
    pub fn with_aggregator(mut self, aggregator: Aggregator) -> Self {
        self.aggregator = aggregator;
        self
    }

    pub fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }

    pub fn suggestion_list(&self) -> Option<&[Suggestion]> {
        self.suggestion_list.as_deref()
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn remote(&self) -> &RemoteSuggestions {
        &self.remote
    }

    pub fn is_fetch_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// How long the event loop may sleep before `tick` has work to do
    pub fn time_until_fetch(&self, now: Instant) -> Option<Duration> {
        self.debouncer.remaining(now)
    }

    /// React to the url-bar text changing
    ///
    /// Rebuilds from the static sources plus whatever the remote cache holds,
    /// commits the result, and schedules a remote lookup when the input is
    /// search-like.
    pub fn on_location_changed(
        &mut self,
        location: &str,
        preview: Option<&str>,
        ctx: &SuggestionContext<'_>,
        selection: &SelectionState,
        sink: &mut impl ActionSink,
    ) {
        if location == self.location && self.suggestion_list.is_some() {
            return;
        }

        self.location = location.to_string();
        self.preview = preview.map(str::to_string);

        // Any lookup still in flight was for the old text
        self.remote.cancel_in_flight_request();
        if self.wants_remote_lookup() {
            self.debouncer.schedule();
        } else {
            self.debouncer.cancel();
            self.remote.clear();
        }

        self.rebuild(ctx);
        if self.suggestion_list.is_none() {
            sink.dispatch(Action::SetUrlBarSuggestions {
                list: None,
                selected_index: None,
            });
            sink.dispatch(Action::SetUrlBarPreview(None));
            return;
        }

        self.update_suggestions(selection.raw_index(), selection, sink);
    }

    /// Fire the debounced lookup if its quiet window has elapsed
    ///
    /// Returns true when the debouncer fired.
    pub fn tick(
        &mut self,
        now: Instant,
        selection: &SelectionState,
        sink: &mut impl ActionSink,
    ) -> bool {
        if !self.debouncer.take_due_at(now) {
            return false;
        }
        self.search_xhr(selection, sink);
        true
    }

    fn search_xhr(&mut self, selection: &SelectionState, sink: &mut impl ActionSink) {
        if self.aggregator.config().search && self.remote.send_request(&self.location) {
            return;
        }
        self.update_suggestions(selection.raw_index(), selection, sink);
    }

    /// Apply finished remote lookups
    ///
    /// Returns true when the cache changed and the list was rebuilt.
    pub fn poll_remote(
        &mut self,
        ctx: &SuggestionContext<'_>,
        selection: &SelectionState,
        sink: &mut impl ActionSink,
    ) -> bool {
        if !self.remote.poll() {
            return false;
        }

        self.rebuild(ctx);
        if self.suggestion_list.is_some() {
            self.update_suggestions(selection.raw_index(), selection, sink);
        }
        true
    }

    /// Commit `new_index` against the current list and update the preview
    ///
    /// No-op when there is no list.
    pub fn update_suggestions(
        &mut self,
        new_index: usize,
        selection: &SelectionState,
        sink: &mut impl ActionSink,
    ) {
        let Some(list) = self.current_list(selection) else {
            return;
        };

        let (selected_index, preview) = resolve_index(&list, new_index);
        match preview {
            PreviewUpdate::Clear => sink.dispatch(Action::SetUrlBarPreview(None)),
            PreviewUpdate::Show(title) => sink.dispatch(Action::SetUrlBarPreview(Some(title))),
            PreviewUpdate::Keep => {}
        }
        sink.dispatch(Action::SetUrlBarSuggestions {
            list: Some(list),
            selected_index,
        });
    }

    pub fn next(&mut self, selection: &SelectionState, sink: &mut impl ActionSink) {
        let Some(len) = self.current_len(selection) else {
            return;
        };
        let current = selection.raw_index() % (len + 1);
        self.update_suggestions(next_index(current, len), selection, sink);
    }

    pub fn previous(&mut self, selection: &SelectionState, sink: &mut impl ActionSink) {
        let Some(len) = self.current_len(selection) else {
            return;
        };
        let current = selection.raw_index() % (len + 1);
        self.update_suggestions(previous_index(current, len), selection, sink);
    }

    /// Highlight the row at 1-based `position` (mouse hover)
    pub fn select_by_position(
        &mut self,
        position: usize,
        selection: &SelectionState,
        sink: &mut impl ActionSink,
    ) {
        self.update_suggestions(position, selection, sink);
    }

    /// Activate the highlighted row
    ///
    /// Returns false when nothing is highlighted; the caller then treats the
    /// raw input as the target.
    pub fn activate_selected(
        &mut self,
        selection: &SelectionState,
        event: ActivationEvent,
        sink: &mut impl ActionSink,
    ) -> bool {
        let Some(len) = self.current_len(selection) else {
            return false;
        };
        self.activate_position(selection.raw_index() % (len + 1), selection, event, sink)
    }

    /// Activate the row at 1-based `position` (mouse click)
    pub fn activate_position(
        &mut self,
        position: usize,
        selection: &SelectionState,
        event: ActivationEvent,
        sink: &mut impl ActionSink,
    ) -> bool {
        let activation = match self.current_list(selection) {
            Some(list) if position > 0 => match list.get(position - 1) {
                Some(suggestion) => suggestion.activation.clone(),
                None => return false,
            },
            _ => return false,
        };
        self.activate(activation, event, sink);
        true
    }

    /// Run an activation, honoring the secondary-activation modifiers
    pub fn activate(
        &mut self,
        activation: Activation,
        event: ActivationEvent,
        sink: &mut impl ActionSink,
    ) {
        match activation {
            Activation::SwitchToFrame { key } => {
                sink.dispatch(Action::SetActiveFrame { key });
                self.blur(sink);
            }
            Activation::Navigate {
                location,
                partition_number,
            } if event.is_secondary() => {
                log::debug!("Opening {} in background tab", location);
                sink.dispatch(Action::NewFrame {
                    location,
                    partition_number,
                    foreground: false,
                });
                sink.dispatch(Action::SetNavBarFocused(true));
            }
            Activation::Navigate { location, .. } => {
                sink.dispatch(Action::LoadUrl { location });
                sink.dispatch(Action::SetUrlBarActive(false));
                self.blur(sink);
            }
        }
    }

    /// Dismiss the suggestions; idempotent
    pub fn blur(&mut self, sink: &mut impl ActionSink) {
        self.suggestion_list = None;
        self.location.clear();
        self.preview = None;
        self.debouncer.cancel();
        self.remote.cancel_in_flight_request();
        sink.dispatch(Action::SetUrlBarSuggestions {
            list: None,
            selected_index: None,
        });
        sink.dispatch(Action::SetUrlBarPreview(None));
    }

    fn wants_remote_lookup(&self) -> bool {
        let terms = self.location.trim();
        self.aggregator.config().search && !terms.is_empty() && !is_url(terms)
    }

    fn rebuild(&mut self, ctx: &SuggestionContext<'_>) {
        self.suggestion_list = self.aggregator.build(
            &self.location,
            self.preview.as_deref(),
            ctx,
            self.remote.results(),
        );
    }

    fn current_list(&self, selection: &SelectionState) -> Option<SuggestionList> {
        self.suggestion_list
            .clone()
            .or_else(|| selection.list().map(<[_]>::to_vec))
    }

    fn current_len(&self, selection: &SelectionState) -> Option<usize> {
        self.suggestion_list
            .as_ref()
            .map(Vec::len)
            .or_else(|| selection.list().map(<[_]>::len))
    }
}

#[cfg(test)]
#[path = "urlbar_tests.rs"]
mod urlbar_tests;
