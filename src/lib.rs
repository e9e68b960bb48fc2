//! Url-bar autocomplete engine
//!
//! Aggregates completions for partial url-bar input from open tabs,
//! bookmarks, history, a remote search-suggestion endpoint and a static
//! top-sites list, and navigates the resulting list with a preview.

pub mod actions;
pub mod app;
pub mod classify;
pub mod config;
pub mod debouncer;
pub mod error;
pub mod navigator;
pub mod records;
pub mod remote;
pub mod session;
pub mod suggestions;
pub mod urlbar;
pub mod widgets;
pub mod window;

mod test_utils;
