//! Suggestion aggregation
//!
//! Builds the url-bar suggestion list from open tabs, bookmarks, history,
//! remote search results and the static top-sites list.

mod aggregator;
mod source;
pub mod sources;
mod suggestion;
pub mod top_sites;

pub use aggregator::{Aggregator, SuggestionContext};
pub use source::{SourceFilter, normalize_title};
pub use suggestion::{Activation, ActivationEvent, Suggestion, SuggestionList};
