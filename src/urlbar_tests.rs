//! Tests for the url-bar suggestion controller, driven through WindowState

use super::*;
use crate::records::{Frame, IconClass, Site};
use crate::remote::RemoteError;
use crate::window::WindowState;
use std::sync::mpsc::{self, TryRecvError};

const SEARCH_URL: &str = "https://search.example/?q={searchTerms}";
const NO_TOP_SITES: &[&str] = &[];
const A_SITES: &[&str] = &["aa.com", "ab.com", "ac.com"];

struct Harness {
    window: WindowState,
    controller: UrlBarSuggestions,
    requests: Option<Receiver<RemoteRequest>>,
    responses: Option<Sender<RemoteResponse>>,
}

impl Harness {
    fn new(window: WindowState, search: bool, top_sites: &'static [&'static str]) -> Self {
        let mut config = Config::default();
        config.suggestions.search = search;
        config.search.search_url = SEARCH_URL.to_string();

        let aggregator = Aggregator::new(config.suggestions.clone(), SEARCH_URL)
            .with_top_sites(top_sites);
        let controller = UrlBarSuggestions::new(&config).with_aggregator(aggregator);

        Self {
            window,
            controller,
            requests: None,
            responses: None,
        }
    }

    fn with_fake_worker(mut self) -> Self {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        self.controller.set_remote_channels(request_tx, response_rx);
        self.requests = Some(request_rx);
        self.responses = Some(response_tx);
        self
    }

    /// Run a controller call against the window and apply what it dispatched
    fn run(
        &mut self,
        f: impl FnOnce(&mut UrlBarSuggestions, &WindowState, &mut Vec<Action>),
    ) -> Vec<Action> {
        let mut actions = Vec::new();
        f(&mut self.controller, &self.window, &mut actions);
        self.window.apply_all(actions.clone());
        actions
    }

    fn type_text(&mut self, text: &str) -> Vec<Action> {
        self.window.set_location(text);
        self.run(|c, w, sink| {
            c.on_location_changed(
                &w.url_bar.location,
                w.url_bar.preview.as_deref(),
                &w.context(),
                w.selection(),
                sink,
            )
        })
    }

    fn elapse_debounce(&mut self) -> bool {
        let later = Instant::now() + Duration::from_millis(60);
        let mut fired = false;
        self.run(|c, w, sink| fired = c.tick(later, w.selection(), sink));
        fired
    }

    fn poll(&mut self) -> bool {
        let mut changed = false;
        self.run(|c, w, sink| changed = c.poll_remote(&w.context(), w.selection(), sink));
        changed
    }

    fn next(&mut self) -> Vec<Action> {
        self.run(|c, w, sink| c.next(w.selection(), sink))
    }

    fn previous(&mut self) -> Vec<Action> {
        self.run(|c, w, sink| c.previous(w.selection(), sink))
    }

    fn select(&mut self, position: usize) -> Vec<Action> {
        self.run(|c, w, sink| c.select_by_position(position, w.selection(), sink))
    }

    fn activate(&mut self, event: ActivationEvent) -> (bool, Vec<Action>) {
        let mut activated = false;
        let actions = self.run(|c, w, sink| {
            activated = c.activate_selected(w.selection(), event, sink);
        });
        (activated, actions)
    }

    fn blur(&mut self) -> Vec<Action> {
        self.run(|c, _, sink| c.blur(sink))
    }

    fn titles(&self) -> Option<Vec<String>> {
        self.window
            .selection()
            .list()
            .map(|list| list.iter().map(|s| s.title.clone()).collect())
    }

    fn next_request(&self) -> Result<(String, u64), TryRecvError> {
        let rx = self.requests.as_ref().expect("fake worker attached");
        rx.try_recv().map(|RemoteRequest::Fetch { terms, request_id, .. }| (terms, request_id))
    }

    fn respond(&self, response: RemoteResponse) {
        self.responses
            .as_ref()
            .expect("fake worker attached")
            .send(response)
            .unwrap();
    }
}

fn single_tab_window() -> WindowState {
    WindowState::new(vec![Frame::new(1, "Home", "https://home.example")], Some(1), vec![])
}

fn foobar_window() -> WindowState {
    WindowState::new(
        vec![
            Frame::new(1, "Home", "https://home.example"),
            Frame::new(2, "Foobar", "https://foobar.com"),
        ],
        Some(1),
        vec![Site::bookmark("foobar", "https://foobar.com")],
    )
}

fn results(request_id: u64, items: &[&str]) -> RemoteResponse {
    RemoteResponse::Results {
        request_id,
        results: items.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn test_tab_entry_wins_and_previews_on_hover() {
    let mut h = Harness::new(foobar_window(), false, NO_TOP_SITES);

    h.type_text("foo");
    assert_eq!(h.titles(), Some(vec!["Foobar".to_string()]));
    assert_eq!(
        h.window.selection().list().unwrap()[0].icon_class,
        IconClass::OpenTab
    );

    h.select(1);
    assert_eq!(h.window.url_bar.preview.as_deref(), Some("Foobar"));
    assert_eq!(h.window.display_text(), "Foobar");
}

#[test]
fn test_empty_input_clears_list() {
    let mut h = Harness::new(foobar_window(), false, NO_TOP_SITES);
    h.type_text("foo");

    let actions = h.type_text("");

    assert_eq!(
        actions,
        vec![
            Action::SetUrlBarSuggestions {
                list: None,
                selected_index: None
            },
            Action::SetUrlBarPreview(None),
        ]
    );
    assert!(h.titles().is_none());
}

#[test]
fn test_unchanged_location_is_ignored() {
    let mut h = Harness::new(foobar_window(), false, NO_TOP_SITES);
    h.type_text("foo");
    h.select(1);

    let actions = h.run(|c, w, sink| {
        c.on_location_changed("foo", None, &w.context(), w.selection(), sink)
    });

    assert!(actions.is_empty());
    assert_eq!(h.window.selection().selected_index(), Some(1));
}

#[test]
fn test_next_wraps_back_to_input() {
    let mut h = Harness::new(single_tab_window(), false, A_SITES);
    h.type_text("a");
    assert_eq!(h.titles().unwrap().len(), 3);

    h.next();
    assert_eq!(h.window.selection().selected_index(), Some(1));
    assert_eq!(h.window.url_bar.preview.as_deref(), Some("aa.com"));

    h.next();
    h.next();
    assert_eq!(h.window.selection().selected_index(), Some(3));
    assert_eq!(h.window.url_bar.preview.as_deref(), Some("ac.com"));

    h.next();
    assert_eq!(h.window.selection().selected_index(), None);
    assert_eq!(h.window.url_bar.preview, None);
    assert_eq!(h.window.display_text(), "a");
}

#[test]
fn test_previous_from_input_wraps_to_last() {
    let mut h = Harness::new(single_tab_window(), false, A_SITES);
    h.type_text("a");

    h.previous();
    assert_eq!(h.window.selection().selected_index(), Some(3));
    assert_eq!(h.window.url_bar.preview.as_deref(), Some("ac.com"));

    h.previous();
    assert_eq!(h.window.selection().selected_index(), Some(2));

    h.previous();
    h.previous();
    assert_eq!(h.window.selection().selected_index(), None);
    assert_eq!(h.window.url_bar.preview, None);
}

#[test]
fn test_select_past_end_clears_preview() {
    let mut h = Harness::new(single_tab_window(), false, A_SITES);
    h.type_text("a");
    h.select(2);

    h.select(9);

    assert_eq!(h.window.selection().selected_index(), None);
    assert_eq!(h.window.url_bar.preview, None);
    assert!(h.window.selection().list().is_some());
}

#[test]
fn test_blur_then_navigation_is_noop() {
    let mut h = Harness::new(single_tab_window(), false, A_SITES);
    h.type_text("a");
    h.next();

    h.blur();
    assert!(h.titles().is_none());
    assert_eq!(h.window.url_bar.preview, None);

    assert!(h.next().is_empty());
    assert!(h.previous().is_empty());
    assert!(h.select(1).is_empty());
    assert_eq!(h.activate(ActivationEvent::plain()), (false, Vec::new()));
    assert!(h.titles().is_none());
    assert_eq!(h.window.url_bar.preview, None);
}

#[test]
fn test_blur_is_idempotent() {
    let mut h = Harness::new(single_tab_window(), false, A_SITES);
    h.type_text("a");

    let first = h.blur();
    let second = h.blur();

    assert_eq!(first, second);
    assert!(h.titles().is_none());
}

#[test]
fn test_activate_without_selection_returns_false() {
    let mut h = Harness::new(single_tab_window(), false, A_SITES);
    h.type_text("a");

    let (activated, actions) = h.activate(ActivationEvent::plain());

    assert!(!activated);
    assert!(actions.is_empty());
}

#[test]
fn test_primary_activation_loads_in_active_tab() {
    let mut h = Harness::new(single_tab_window(), false, A_SITES);
    h.type_text("a");
    h.select(2);

    let (activated, actions) = h.activate(ActivationEvent::plain());

    assert!(activated);
    assert_eq!(
        &actions[..2],
        &[
            Action::LoadUrl {
                location: "ab.com".to_string()
            },
            Action::SetUrlBarActive(false),
        ]
    );
    assert_eq!(h.window.active_frame().unwrap().location, "ab.com");
    assert!(h.titles().is_none());
    assert!(!h.window.url_bar.active);
}

#[test]
fn test_secondary_activation_opens_background_tab() {
    let mut h = Harness::new(single_tab_window(), false, A_SITES);
    h.type_text("a");
    h.select(3);

    let (activated, actions) = h.activate(ActivationEvent::with_ctrl());

    assert!(activated);
    assert_eq!(
        actions,
        vec![
            Action::NewFrame {
                location: "ac.com".to_string(),
                partition_number: None,
                foreground: false,
            },
            Action::SetNavBarFocused(true),
        ]
    );
    assert_eq!(h.window.active_frame, Some(1));
    assert_eq!(h.window.frames.len(), 2);
    assert!(h.titles().is_some());
}

#[test]
fn test_middle_click_on_position_is_secondary() {
    let mut h = Harness::new(single_tab_window(), false, A_SITES);
    h.type_text("a");

    let event = ActivationEvent {
        middle_button: true,
        ..ActivationEvent::default()
    };
    let actions = h.run(|c, w, sink| {
        assert!(c.activate_position(1, w.selection(), event, sink));
    });

    assert!(matches!(
        actions.first(),
        Some(Action::NewFrame {
            foreground: false,
            ..
        })
    ));
}

#[test]
fn test_activate_open_tab_switches_frame() {
    let mut h = Harness::new(foobar_window(), false, NO_TOP_SITES);
    h.type_text("foo");
    h.select(1);

    let (activated, actions) = h.activate(ActivationEvent::plain());

    assert!(activated);
    assert_eq!(actions[0], Action::SetActiveFrame { key: 2 });
    assert_eq!(h.window.active_frame, Some(2));
    assert!(h.titles().is_none());
}

#[test]
fn test_search_disabled_never_schedules_lookup() {
    let mut h = Harness::new(single_tab_window(), false, NO_TOP_SITES).with_fake_worker();

    h.type_text("cats");

    assert!(!h.controller.is_fetch_pending());
    assert!(!h.elapse_debounce());
    assert_eq!(h.next_request(), Err(TryRecvError::Empty));
}

#[test]
fn test_remote_results_merge_after_debounce() {
    let mut h = Harness::new(single_tab_window(), true, NO_TOP_SITES).with_fake_worker();

    h.type_text("cats");
    assert!(h.controller.is_fetch_pending());
    assert_eq!(h.next_request(), Err(TryRecvError::Empty));

    assert!(h.elapse_debounce());
    assert_eq!(h.next_request(), Ok(("cats".to_string(), 1)));

    h.respond(results(1, &["catnip", "category"]));
    assert!(h.poll());

    let list = h.window.selection().list().unwrap();
    assert_eq!(list.len(), 2);
    assert!(list.iter().all(|s| s.icon_class == IconClass::Search));
    assert_eq!(
        list[0].activation,
        Activation::navigate("https://search.example/?q=catnip")
    );
    assert_eq!(
        list[1].activation,
        Activation::navigate("https://search.example/?q=category")
    );
}

#[test]
fn test_rapid_typing_sends_one_request() {
    let mut h = Harness::new(single_tab_window(), true, NO_TOP_SITES).with_fake_worker();

    h.type_text("c");
    h.type_text("ca");
    h.type_text("cat");
    assert!(h.elapse_debounce());

    assert_eq!(h.next_request(), Ok(("cat".to_string(), 1)));
    assert_eq!(h.next_request(), Err(TryRecvError::Empty));
    assert!(!h.elapse_debounce());
}

#[test]
fn test_url_input_skips_lookup_and_clears_cache() {
    let mut h = Harness::new(single_tab_window(), true, NO_TOP_SITES).with_fake_worker();
    h.type_text("cats");
    h.elapse_debounce();
    h.next_request().unwrap();
    h.respond(results(1, &["catnip"]));
    h.poll();
    assert_eq!(h.controller.remote().results(), ["catnip"]);

    h.type_text("https://example.com");

    assert!(!h.controller.is_fetch_pending());
    assert!(h.controller.remote().results().is_empty());
    assert_eq!(h.titles(), Some(Vec::new()));
    assert!(!h.elapse_debounce());
    assert_eq!(h.next_request(), Err(TryRecvError::Empty));
}

#[test]
fn test_stale_response_is_dropped() {
    let mut h = Harness::new(single_tab_window(), true, NO_TOP_SITES).with_fake_worker();
    h.type_text("ca");
    h.elapse_debounce();
    h.type_text("cats");
    h.elapse_debounce();
    assert_eq!(h.next_request(), Ok(("ca".to_string(), 1)));
    assert_eq!(h.next_request(), Ok(("cats".to_string(), 2)));

    h.respond(results(1, &["california"]));
    assert!(!h.poll());
    assert_eq!(h.titles(), Some(Vec::new()));

    h.respond(results(2, &["catnip"]));
    assert!(h.poll());
    assert_eq!(h.titles(), Some(vec!["catnip".to_string()]));
}

#[test]
fn test_response_for_old_input_dropped_before_next_request() {
    let mut h = Harness::new(single_tab_window(), true, NO_TOP_SITES).with_fake_worker();
    h.type_text("ca");
    h.elapse_debounce();
    assert_eq!(h.next_request(), Ok(("ca".to_string(), 1)));

    // New text is still inside its quiet window when the old answer lands
    h.type_text("dogs");
    assert!(h.controller.is_fetch_pending());
    assert!(!h.controller.remote().has_in_flight_request());
    h.respond(results(1, &["california", "cable"]));

    assert!(!h.poll());
    assert!(h.controller.remote().results().is_empty());
    assert_eq!(h.titles(), Some(Vec::new()));

    assert!(h.elapse_debounce());
    assert_eq!(h.next_request(), Ok(("dogs".to_string(), 2)));
}

#[test]
fn test_failed_lookup_keeps_previous_results() {
    let mut h = Harness::new(single_tab_window(), true, NO_TOP_SITES).with_fake_worker();
    h.type_text("cats");
    h.elapse_debounce();
    h.respond(results(1, &["catnip", "category"]));
    h.poll();

    h.type_text("catsu");
    assert_eq!(
        h.titles(),
        Some(vec!["catnip".to_string(), "category".to_string()])
    );
    h.elapse_debounce();
    h.respond(RemoteResponse::Failed {
        request_id: 2,
        error: RemoteError::Timeout,
    });

    assert!(!h.poll());
    assert_eq!(h.controller.remote().results(), ["catnip", "category"]);
    assert_eq!(
        h.titles(),
        Some(vec!["catnip".to_string(), "category".to_string()])
    );
}

#[test]
fn test_selection_rederived_when_results_arrive() {
    const CAT_SITES: &[&str] = &["cats.com"];
    let mut h = Harness::new(single_tab_window(), true, CAT_SITES).with_fake_worker();
    h.type_text("cats");
    h.next();
    assert_eq!(h.window.url_bar.preview.as_deref(), Some("cats.com"));

    h.elapse_debounce();
    h.respond(results(1, &["catnip", "category"]));
    h.poll();

    assert_eq!(
        h.titles(),
        Some(vec![
            "catnip".to_string(),
            "category".to_string(),
            "cats.com".to_string()
        ])
    );
    assert_eq!(h.window.selection().selected_index(), Some(1));
    assert_eq!(h.window.url_bar.preview.as_deref(), Some("catnip"));
}

#[test]
fn test_tick_without_worker_recomputes_selection() {
    let mut h = Harness::new(single_tab_window(), true, A_SITES);
    h.type_text("a");

    let later = Instant::now() + Duration::from_millis(60);
    let actions = h.run(|c, w, sink| {
        assert!(c.tick(later, w.selection(), sink));
    });

    assert!(matches!(
        actions.last(),
        Some(Action::SetUrlBarSuggestions {
            list: Some(_),
            selected_index: None
        })
    ));
}
