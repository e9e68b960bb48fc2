//! Shared per-source pipeline
//!
//! Every source runs the same steps: inclusion filter, drop titles already
//! in the list, rank, drop duplicate titles within the source, truncate, map.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::suggestion::{Activation, Suggestion, SuggestionList};
use crate::records::IconClass;

type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;
type ActivationFactory<'a, T> = Box<dyn Fn(&T) -> Activation + 'a>;

/// Key used for title deduplication
pub fn normalize_title(title: &str) -> String {
    title.to_lowercase()
}

/// Configuration of one suggestion source for a single aggregation pass
pub struct SourceFilter<'a, T> {
    candidates: &'a [T],
    max_results: usize,
    include: Predicate<'a, T>,
    rank: Option<fn(&T, &T) -> Ordering>,
    format_title: fn(&T) -> String,
    icon_class: fn(&T) -> IconClass,
    activation: ActivationFactory<'a, T>,
}

impl<'a, T> SourceFilter<'a, T> {
    /// A source that includes every candidate in input order
    pub fn new(
        candidates: &'a [T],
        max_results: usize,
        format_title: fn(&T) -> String,
        icon_class: fn(&T) -> IconClass,
        activation: impl Fn(&T) -> Activation + 'a,
    ) -> Self {
        Self {
            candidates,
            max_results,
            include: Box::new(|_| true),
            rank: None,
            format_title,
            icon_class,
            activation: Box::new(activation),
        }
    }

    pub fn filter(mut self, include: impl Fn(&T) -> bool + 'a) -> Self {
        self.include = Box::new(include);
        self
    }

    /// Rank surviving candidates; the sort is stable so ties keep input order
    pub fn rank_by(mut self, rank: fn(&T, &T) -> Ordering) -> Self {
        self.rank = Some(rank);
        self
    }

    /// Append this source's contribution to the list assembled so far
    ///
    /// Candidates whose title matches one already in `list` (ignoring case)
    /// are dropped, so earlier sources always win.
    pub fn append_to(&self, list: &mut SuggestionList) {
        let taken: HashSet<String> = list.iter().map(|s| normalize_title(&s.title)).collect();

        let mut ranked: Vec<(&T, String)> = self
            .candidates
            .iter()
            .filter(|candidate| (self.include)(candidate))
            .map(|candidate| (candidate, (self.format_title)(candidate)))
            .filter(|(_, title)| !taken.contains(&normalize_title(title)))
            .collect();

        if let Some(rank) = self.rank {
            ranked.sort_by(|(a, _), (b, _)| rank(a, b));
        }

        let mut seen = HashSet::new();
        let mut added = Vec::new();
        for (candidate, title) in ranked {
            if added.len() >= self.max_results {
                break;
            }
            if !seen.insert(normalize_title(&title)) {
                continue;
            }
            added.push(Suggestion {
                title,
                icon_class: (self.icon_class)(candidate),
                activation: (self.activation)(candidate),
            });
        }

        list.extend(added);
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod source_tests;
