//! Tests for tab and site records

use super::*;

#[test]
fn test_site_icon_class_for_bookmark() {
    let site = Site::bookmark("Rust", "https://rust-lang.org");
    assert_eq!(site_icon_class(&site), IconClass::Bookmark);
    assert_eq!(site_icon_class(&site).to_string(), "fa-star");
}

#[test]
fn test_site_icon_class_for_folder_wins_over_bookmark() {
    let site = Site::history("Work", "").with_tags(&[SiteTag::Bookmark, SiteTag::BookmarkFolder]);
    assert_eq!(site_icon_class(&site), IconClass::Folder);
}

#[test]
fn test_site_icon_class_for_history() {
    let site = Site::history("Docs", "https://docs.rs");
    assert_eq!(site_icon_class(&site).as_str(), "fa-file-o");
}

#[test]
fn test_empty_strings_become_none() {
    let site = Site::history("", "https://example.com");
    assert!(site.title.is_none());
    assert_eq!(site.title_or_empty(), "");
    assert_eq!(site.location_or_empty(), "https://example.com");

    let frame = Frame::new(1, "", "about:blank");
    assert!(frame.title.is_none());
}

#[test]
fn test_site_deserializes_with_missing_fields() {
    let site: Site = serde_json::from_str(r#"{"location": "https://a.com"}"#).unwrap();
    assert!(site.tags.is_empty());
    assert!(site.title.is_none());
    assert_eq!(site.location.as_deref(), Some("https://a.com"));
}

#[test]
fn test_site_tag_kebab_case() {
    let site: Site =
        serde_json::from_str(r#"{"title": "x", "tags": ["bookmark", "bookmark-folder"]}"#)
            .unwrap();
    assert!(site.is_bookmark());
    assert!(site.is_folder());
}

#[test]
fn test_icon_class_strings() {
    assert_eq!(IconClass::OpenTab.as_str(), "fa-file");
    assert_eq!(IconClass::Search.as_str(), "fa-search");
    assert_eq!(IconClass::TopSite.as_str(), "fa-link");
}
