//! Session snapshots
//!
//! A session file is the JSON form of what the tab registry and the site
//! store hold: `{ "frames": [...], "active_frame": 1, "sites": [...] }`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::UrlbarError;
use crate::records::{Frame, FrameKey, Site, SiteTag};
use crate::window::WindowState;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub frames: Vec<Frame>,
    #[serde(default)]
    pub active_frame: Option<FrameKey>,
    #[serde(default)]
    pub sites: Vec<Site>,
}

impl Session {
    pub fn into_window(self) -> WindowState {
        WindowState::new(self.frames, self.active_frame, self.sites)
    }
}

pub fn parse_session(json: &str) -> Result<Session, UrlbarError> {
    serde_json::from_str(json).map_err(|e| UrlbarError::Session(e.to_string()))
}

pub fn load_session(path: &Path) -> Result<Session, UrlbarError> {
    let content = fs::read_to_string(path)?;
    parse_session(&content)
}

/// Built-in session used when no file is given
pub fn demo_session() -> Session {
    Session {
        frames: vec![
            Frame::new(1, "New Tab", "about:newtab"),
            Frame::new(2, "The Rust Programming Language", "https://doc.rust-lang.org/book/"),
            Frame::new(3, "ratatui - Rust", "https://docs.rs/ratatui"),
            Frame::new(4, "Hacker News", "https://news.ycombinator.com"),
        ],
        active_frame: Some(1),
        sites: vec![
            Site::bookmark("Rust Programming Language", "https://www.rust-lang.org")
                .with_tags(&[SiteTag::Bookmark, SiteTag::Pinned]),
            Site::bookmark("crates.io: Rust Package Registry", "https://crates.io"),
            Site::bookmark("Rust Playground", "https://play.rust-lang.org"),
            Site::history("This Week in Rust", "https://this-week-in-rust.org"),
            Site::history("Tokio - An asynchronous Rust runtime", "https://tokio.rs"),
            Site::history("", "https://blog.rust-lang.org"),
            Site::history("Serde", "https://serde.rs"),
        ],
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
