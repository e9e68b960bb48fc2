// Configuration type definitions

use serde::Deserialize;

use crate::debouncer::DEFAULT_DEBOUNCE_MS;

pub const DEFAULT_AUTOCOMPLETE_URL: &str =
    "https://suggestqueries.google.com/complete/search?client=firefox&q={searchTerms}";
pub const DEFAULT_SEARCH_URL: &str = "https://www.google.com/search?q={searchTerms}";
pub const DEFAULT_TIMEOUT_MS: u64 = 2000;

/// Which sources contribute and how many entries each may add
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    pub opened_tabs: bool,
    pub bookmarks: bool,
    pub history: bool,
    /// Remote search suggestions
    pub search: bool,
    pub max_opened_frames: usize,
    /// Cap shared by the bookmark and history sources
    pub max_sites: usize,
    pub max_search: usize,
    pub max_top_sites: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            opened_tabs: true,
            bookmarks: true,
            history: true,
            search: true,
            max_opened_frames: 2,
            max_sites: 3,
            max_search: 3,
            max_top_sites: 3,
        }
    }
}

/// Search provider endpoints
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Suggestion endpoint; `{searchTerms}` is replaced by the escaped input
    pub autocomplete_url: String,
    /// Search results page used when a search suggestion is activated
    pub search_url: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            autocomplete_url: DEFAULT_AUTOCOMPLETE_URL.to_string(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
        }
    }
}

/// Remote lookup timing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub debounce_ms: u64,
    pub timeout_ms: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub suggestions: SuggestionConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
}
