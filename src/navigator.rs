//! Selection state for url-bar suggestions
//!
//! Index 0 means "no selection, show the raw input"; `1..=len` addresses
//! `list[index - 1]`. Navigation wraps through the `len + 1` positions.

use crate::suggestions::{Suggestion, SuggestionList};

/// Committed selection, owned by the window and written only via actions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    list: Option<SuggestionList>,
    selected_index: Option<usize>,
}

impl SelectionState {
    /// Create a new SelectionState with no list
    pub fn new() -> Self {
        Self {
            list: None,
            selected_index: None,
        }
    }

    /// Replace list and index together (applied from `SetUrlBarSuggestions`)
    pub fn set(&mut self, list: Option<SuggestionList>, selected_index: Option<usize>) {
        self.list = list;
        self.selected_index = selected_index;
    }

    pub fn clear(&mut self) {
        self.set(None, None);
    }

    /// Drop the highlighted row but keep the list
    pub fn clear_selection(&mut self) {
        self.selected_index = None;
    }

    pub fn list(&self) -> Option<&[Suggestion]> {
        self.list.as_deref()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// Raw stored index, with "none" read as 0
    pub fn raw_index(&self) -> usize {
        self.selected_index.unwrap_or(0)
    }

    /// Index taken modulo `len + 1`, so a stale index never goes out of range
    pub fn active_index(&self) -> usize {
        match &self.list {
            Some(list) => self.raw_index() % (list.len() + 1),
            None => 0,
        }
    }

    /// The highlighted suggestion, if any
    pub fn selected(&self) -> Option<&Suggestion> {
        let index = self.active_index();
        if index == 0 {
            return None;
        }
        self.list.as_ref().and_then(|list| list.get(index - 1))
    }

    /// Whether there is anything to show
    pub fn is_browsing(&self) -> bool {
        self.list.as_ref().is_some_and(|list| !list.is_empty())
    }
}

/// Index after moving down one row; past the last row returns to 0
pub fn next_index(current: usize, len: usize) -> usize {
    (current + 1) % (len + 1)
}

/// Index after moving up one row; from 0 wraps to the last row
pub fn previous_index(current: usize, len: usize) -> usize {
    if current == 0 { len } else { current - 1 }
}

/// What to do with the url-bar preview after an index change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewUpdate {
    Clear,
    Show(String),
    /// Selected entry has no title; leave the preview as it is
    Keep,
}

/// Resolve a proposed index against a list
///
/// Returns the index to commit (`None` for 0 or past the end) and the
/// preview change.
pub fn resolve_index(list: &[Suggestion], new_index: usize) -> (Option<usize>, PreviewUpdate) {
    if new_index == 0 || new_index > list.len() {
        return (None, PreviewUpdate::Clear);
    }

    let preview = match list.get(new_index - 1) {
        Some(suggestion) if !suggestion.title.is_empty() => {
            PreviewUpdate::Show(suggestion.title.clone())
        }
        _ => PreviewUpdate::Keep,
    };
    (Some(new_index), preview)
}

#[cfg(test)]
#[path = "navigator_tests.rs"]
mod navigator_tests;
