//! Tab and site records read from the external stores
//!
//! These are the candidate shapes the suggestion sources filter over. The
//! stores own persistence; this crate only reads snapshots of them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an open tab in the frame registry
pub type FrameKey = u64;

/// An open tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub key: FrameKey,
    #[serde(default)]
    pub title: Option<String>,
    pub location: String,
    #[serde(default)]
    pub partition_number: Option<u32>,
}

impl Frame {
    pub fn new(key: FrameKey, title: &str, location: &str) -> Self {
        Self {
            key,
            title: Some(title.to_string()).filter(|t| !t.is_empty()),
            location: location.to_string(),
            partition_number: None,
        }
    }
}

/// Tags attached to a site record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SiteTag {
    Bookmark,
    BookmarkFolder,
    Pinned,
}

/// A bookmark or history record
///
/// Bookmarks and history share one record set: a record carrying the
/// `Bookmark` tag is a bookmark, a record with no tags is plain history.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Site {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub tags: Vec<SiteTag>,
    #[serde(default)]
    pub partition_number: Option<u32>,
}

impl Site {
    pub fn history(title: &str, location: &str) -> Self {
        Self {
            title: Some(title.to_string()).filter(|t| !t.is_empty()),
            location: Some(location.to_string()).filter(|l| !l.is_empty()),
            tags: Vec::new(),
            partition_number: None,
        }
    }

    pub fn bookmark(title: &str, location: &str) -> Self {
        Self::history(title, location).with_tags(&[SiteTag::Bookmark])
    }

    pub fn with_tags(mut self, tags: &[SiteTag]) -> Self {
        self.tags = tags.to_vec();
        self
    }

    pub fn is_bookmark(&self) -> bool {
        self.tags.contains(&SiteTag::Bookmark)
    }

    pub fn is_folder(&self) -> bool {
        self.tags.contains(&SiteTag::BookmarkFolder)
    }

    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn location_or_empty(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }
}

/// Visual class of a suggestion row (font-awesome names)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconClass {
    OpenTab,
    Bookmark,
    Folder,
    History,
    Search,
    TopSite,
}

impl IconClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconClass::OpenTab => "fa-file",
            IconClass::Bookmark => "fa-star",
            IconClass::Folder => "fa-folder",
            IconClass::History => "fa-file-o",
            IconClass::Search => "fa-search",
            IconClass::TopSite => "fa-link",
        }
    }
}

impl fmt::Display for IconClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon class for a bookmark/history record
pub fn site_icon_class(site: &Site) -> IconClass {
    if site.is_folder() {
        IconClass::Folder
    } else if site.is_bookmark() {
        IconClass::Bookmark
    } else {
        IconClass::History
    }
}

#[cfg(test)]
#[path = "records_tests.rs"]
mod records_tests;
