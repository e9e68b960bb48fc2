//! Cross-source aggregation
//!
//! Runs the sources in fixed priority order (open tabs, bookmarks, history,
//! remote search, top sites). Dedup is cumulative: a later source never
//! displaces an earlier entry with the same title.

use super::sources;
use super::suggestion::SuggestionList;
use super::top_sites::TOP_SITES;
use crate::config::SuggestionConfig;
use crate::records::{Frame, FrameKey, Site};

/// Snapshot of the external stores the sources read from
#[derive(Debug, Clone, Copy, Default)]
pub struct SuggestionContext<'a> {
    pub frames: &'a [Frame],
    pub active_frame: Option<FrameKey>,
    pub sites: &'a [Site],
}

/// Builds suggestion lists from the configured sources
#[derive(Debug, Clone)]
pub struct Aggregator {
    config: SuggestionConfig,
    search_url: String,
    top_sites: &'static [&'static str],
}

impl Aggregator {
    pub fn new(config: SuggestionConfig, search_url: impl Into<String>) -> Self {
        Self {
            config,
            search_url: search_url.into(),
            top_sites: TOP_SITES,
        }
    }

    /// Replace the static top-sites dataset
    pub fn with_top_sites(mut self, top_sites: &'static [&'static str]) -> Self {
        self.top_sites = top_sites;
        self
    }

    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    /// Build the suggestion list for the current input
    ///
    /// Returns `None` when there is neither input nor a pending preview; no
    /// source runs in that case.
    pub fn build(
        &self,
        location: &str,
        preview: Option<&str>,
        ctx: &SuggestionContext<'_>,
        search_results: &[String],
    ) -> Option<SuggestionList> {
        if location.is_empty() && preview.is_none_or(str::is_empty) {
            return None;
        }

        let input = location.to_lowercase();
        let mut list = SuggestionList::new();

        if self.config.opened_tabs {
            sources::opened_tabs(
                ctx.frames,
                ctx.active_frame,
                &input,
                self.config.max_opened_frames,
            )
            .append_to(&mut list);
        }

        if self.config.bookmarks {
            sources::bookmarks(ctx.sites, &input, self.config.max_sites).append_to(&mut list);
        }

        if self.config.history {
            sources::history(ctx.sites, &input, self.config.max_sites).append_to(&mut list);
        }

        if self.config.search {
            sources::search_results(search_results, &self.search_url, self.config.max_search)
                .append_to(&mut list);
        }

        sources::top_sites(self.top_sites, &input, self.config.max_top_sites)
            .append_to(&mut list);

        log::debug!("Built {} suggestions for {:?}", list.len(), location);
        Some(list)
    }
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod aggregator_tests;
