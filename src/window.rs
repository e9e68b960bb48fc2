//! Window state and action reducer
//!
//! Owns the tab registry, the site records and the url-bar state, and applies
//! the actions the suggestion controller dispatches. This is the only writer
//! of the committed selection.

use crate::actions::Action;
use crate::navigator::SelectionState;
use crate::records::{Frame, FrameKey, Site};
use crate::suggestions::SuggestionContext;

/// Url-bar fields the suggestion popup reads and writes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlBarState {
    /// Text typed by the user
    pub location: String,
    /// Title of the highlighted suggestion, shown in place of `location`
    pub preview: Option<String>,
    pub suggestions: SelectionState,
    pub active: bool,
    pub focused: bool,
}

#[derive(Debug, Clone, Default)]
pub struct WindowState {
    pub frames: Vec<Frame>,
    pub active_frame: Option<FrameKey>,
    pub sites: Vec<Site>,
    pub url_bar: UrlBarState,
    next_key: FrameKey,
}

impl WindowState {
    pub fn new(frames: Vec<Frame>, active_frame: Option<FrameKey>, sites: Vec<Site>) -> Self {
        let next_key = frames.iter().map(|f| f.key).max().map_or(1, |k| k + 1);
        let active_frame = active_frame
            .filter(|key| frames.iter().any(|f| f.key == *key))
            .or_else(|| frames.first().map(|f| f.key));

        Self {
            frames,
            active_frame,
            sites,
            url_bar: UrlBarState::default(),
            next_key,
        }
    }

    /// Snapshot handed to the aggregator
    pub fn context(&self) -> SuggestionContext<'_> {
        SuggestionContext {
            frames: &self.frames,
            active_frame: self.active_frame,
            sites: &self.sites,
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.url_bar.suggestions
    }

    pub fn active_frame(&self) -> Option<&Frame> {
        let key = self.active_frame?;
        self.frames.iter().find(|f| f.key == key)
    }

    /// Record typed text; any highlighted row and its preview are dropped
    pub fn set_location(&mut self, location: &str) {
        self.url_bar.location = location.to_string();
        self.url_bar.preview = None;
        self.url_bar.suggestions.clear_selection();
        self.url_bar.active = true;
    }

    /// What the url bar shows: the preview while a row is highlighted
    pub fn display_text(&self) -> &str {
        self.url_bar
            .preview
            .as_deref()
            .unwrap_or(&self.url_bar.location)
    }

    pub fn apply_all(&mut self, actions: impl IntoIterator<Item = Action>) {
        for action in actions {
            self.apply(action);
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetUrlBarSuggestions {
                list,
                selected_index,
            } => self.url_bar.suggestions.set(list, selected_index),
            Action::SetUrlBarPreview(preview) => self.url_bar.preview = preview,
            Action::SetUrlBarActive(active) => self.url_bar.active = active,
            Action::SetNavBarFocused(focused) => self.url_bar.focused = focused,
            Action::LoadUrl { location } => self.load_url(location),
            Action::NewFrame {
                location,
                partition_number,
                foreground,
            } => {
                let key = self.push_frame(location, partition_number);
                if foreground {
                    self.activate_frame(key);
                }
            }
            Action::SetActiveFrame { key } => self.activate_frame(key),
        }
    }

    fn load_url(&mut self, location: String) {
        self.record_history(&location);
        let active = self.active_frame;
        match self.frames.iter_mut().find(|f| Some(f.key) == active) {
            Some(frame) => {
                frame.location = location.clone();
                frame.title = None;
            }
            None => {
                let key = self.push_frame(location.clone(), None);
                self.active_frame = Some(key);
            }
        }
        self.url_bar.location = location;
        self.url_bar.preview = None;
    }

    fn push_frame(&mut self, location: String, partition_number: Option<u32>) -> FrameKey {
        let key = self.next_key;
        self.next_key += 1;
        self.record_history(&location);
        self.frames.push(Frame {
            key,
            title: None,
            location,
            partition_number,
        });
        key
    }

    fn activate_frame(&mut self, key: FrameKey) {
        let Some(location) = self
            .frames
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.location.clone())
        else {
            log::warn!("Ignoring switch to unknown tab {}", key);
            return;
        };
        self.active_frame = Some(key);
        self.url_bar.location = location;
        self.url_bar.preview = None;
    }

    fn record_history(&mut self, location: &str) {
        if self.sites.iter().any(|s| s.location.as_deref() == Some(location)) {
            return;
        }
        self.sites.push(Site::history("", location));
    }
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod window_tests;
