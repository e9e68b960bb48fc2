//! Interactive url bar
//!
//! A terminal front end over `WindowState` and `UrlBarSuggestions`: an input
//! line, the suggestion popup below it and a status line.

mod app_events;
mod app_render;
mod app_state;

pub use app_state::App;
