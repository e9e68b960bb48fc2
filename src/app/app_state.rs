use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::TextArea;

use crate::actions::Action;
use crate::urlbar::UrlBarSuggestions;
use crate::window::WindowState;

/// Longest the event loop sleeps while a remote lookup may be in flight
pub const REMOTE_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Application state
pub struct App {
    pub textarea: TextArea<'static>,
    pub window: WindowState,
    pub urlbar: UrlBarSuggestions,
    pub should_quit: bool,
    /// Where the popup was last drawn, for mouse hit testing
    pub popup_area: Option<Rect>,
    /// Shown in the status line until the next keypress
    pub notice: Option<String>,
}

impl App {
    pub fn new(window: WindowState, urlbar: UrlBarSuggestions) -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());

        Self {
            textarea,
            window,
            urlbar,
            should_quit: false,
            popup_area: None,
            notice: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current text of the input line
    pub fn query(&self) -> &str {
        self.textarea.lines().first().map_or("", String::as_str)
    }

    /// Run a controller call and apply what it dispatched to the window
    pub fn with_controller(
        &mut self,
        f: impl FnOnce(&mut UrlBarSuggestions, &WindowState, &mut Vec<Action>),
    ) {
        let mut actions = Vec::new();
        f(&mut self.urlbar, &self.window, &mut actions);

        let navigated = actions.iter().any(|action| {
            matches!(
                action,
                Action::LoadUrl { .. } | Action::SetActiveFrame { .. }
            )
        });
        self.window.apply_all(actions);

        if navigated {
            self.reset_input();
        }
    }

    /// Push edited text through the controller
    pub fn on_input_changed(&mut self) {
        let text = self.query().to_string();
        self.window.set_location(&text);
        self.with_controller(|urlbar, window, sink| {
            urlbar.on_location_changed(
                &window.url_bar.location,
                window.url_bar.preview.as_deref(),
                &window.context(),
                window.selection(),
                sink,
            )
        });
    }

    /// Fire the debounced lookup and merge finished remote results
    pub fn tick(&mut self, now: Instant) {
        self.with_controller(|urlbar, window, sink| {
            urlbar.tick(now, window.selection(), sink);
            urlbar.poll_remote(&window.context(), window.selection(), sink);
        });
    }

    /// How long the event loop may block waiting for input
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let debounce = self.urlbar.time_until_fetch(now).unwrap_or(REMOTE_POLL_INTERVAL);
        debounce.min(REMOTE_POLL_INTERVAL)
    }

    /// Replace the input text with the active tab's location
    fn reset_input(&mut self) {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        if let Some(frame) = self.window.active_frame() {
            textarea.insert_str(&frame.location);
        }
        self.textarea = textarea;
    }
}
