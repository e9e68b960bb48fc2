//! Intents emitted by the suggestion engine
//!
//! The engine never mutates window state directly. It dispatches these
//! actions and the owner of the window state applies them.

use crate::records::FrameKey;
use crate::suggestions::SuggestionList;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Commit the suggestion list and selected index (`None` = nothing selected)
    SetUrlBarSuggestions {
        list: Option<SuggestionList>,
        selected_index: Option<usize>,
    },
    /// Text shown in the url bar for the highlighted suggestion
    SetUrlBarPreview(Option<String>),
    SetUrlBarActive(bool),
    SetNavBarFocused(bool),
    /// Navigate the active tab
    LoadUrl { location: String },
    /// Open a new tab; background unless `foreground`
    NewFrame {
        location: String,
        partition_number: Option<u32>,
        foreground: bool,
    },
    SetActiveFrame { key: FrameKey },
}

/// Receiver of engine intents
pub trait ActionSink {
    fn dispatch(&mut self, action: Action);
}

impl ActionSink for Vec<Action> {
    fn dispatch(&mut self, action: Action) {
        self.push(action);
    }
}
