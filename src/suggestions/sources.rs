//! The five suggestion sources
//!
//! Each constructor returns a `SourceFilter` for one aggregation pass. `input`
//! is the url-bar text, already lowercased.

use super::source::SourceFilter;
use super::suggestion::Activation;
use crate::classify::{fill_template, is_internal_url};
use crate::records::{Frame, FrameKey, IconClass, Site, site_icon_class};

fn contains_input(haystack: &str, input: &str) -> bool {
    haystack.to_lowercase().contains(input)
}

fn site_matches(site: &Site, input: &str) -> bool {
    contains_input(site.title_or_empty(), input) || contains_input(site.location_or_empty(), input)
}

fn site_title(site: &Site) -> String {
    site.title
        .as_deref()
        .filter(|t| !t.is_empty())
        .or(site.location.as_deref())
        .unwrap_or("")
        .to_string()
}

fn site_activation(site: &Site) -> Activation {
    Activation::Navigate {
        location: site.location_or_empty().to_string(),
        partition_number: site.partition_number,
    }
}

/// Open tabs other than the active one, skipping internal pages
pub fn opened_tabs<'a>(
    frames: &'a [Frame],
    active_frame: Option<FrameKey>,
    input: &'a str,
    max_results: usize,
) -> SourceFilter<'a, Frame> {
    SourceFilter::new(
        frames,
        max_results,
        |frame| {
            frame
                .title
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or(&frame.location)
                .to_string()
        },
        |_| IconClass::OpenTab,
        |frame| Activation::SwitchToFrame { key: frame.key },
    )
    .filter(move |frame| {
        !is_internal_url(&frame.location)
            && Some(frame.key) != active_frame
            && (frame
                .title
                .as_deref()
                .is_some_and(|title| contains_input(title, input))
                || contains_input(&frame.location, input))
    })
}

/// Site records tagged as bookmarks, most-tagged first
pub fn bookmarks<'a>(sites: &'a [Site], input: &'a str, max_results: usize) -> SourceFilter<'a, Site> {
    SourceFilter::new(sites, max_results, site_title, site_icon_class, site_activation)
        .filter(move |site| site_matches(site, input) && site.is_bookmark())
        .rank_by(|a, b| b.tags.len().cmp(&a.tags.len()))
}

/// Untagged site records
pub fn history<'a>(sites: &'a [Site], input: &'a str, max_results: usize) -> SourceFilter<'a, Site> {
    SourceFilter::new(sites, max_results, site_title, site_icon_class, site_activation)
        .filter(move |site| site_matches(site, input) && site.tags.is_empty())
        .rank_by(|a, b| b.tags.len().cmp(&a.tags.len()))
}

/// Remote search suggestions, activating a search for the term
///
/// The provider already matched these against the input, so every term is
/// a candidate.
pub fn search_results<'a>(
    results: &'a [String],
    search_url: &'a str,
    max_results: usize,
) -> SourceFilter<'a, String> {
    SourceFilter::new(
        results,
        max_results,
        |term| term.clone(),
        |_| IconClass::Search,
        move |term| Activation::navigate(fill_template(search_url, term)),
    )
}

/// Static popular sites, navigating straight to the domain
pub fn top_sites<'a>(
    sites: &'a [&'static str],
    input: &'a str,
    max_results: usize,
) -> SourceFilter<'a, &'static str> {
    SourceFilter::new(
        sites,
        max_results,
        |site| site.to_string(),
        |_| IconClass::TopSite,
        |site| Activation::navigate(*site),
    )
    .filter(move |site| contains_input(site, input))
}

#[cfg(test)]
#[path = "sources_tests.rs"]
mod sources_tests;
