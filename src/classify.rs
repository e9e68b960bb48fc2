//! URL and input classifiers
//!
//! Decides whether url-bar input is a location or search terms, and which
//! locations belong to reserved internal pages.

use url::{Host, Url};

/// Placeholder substituted with the escaped terms in search templates
pub const SEARCH_TERMS_PLACEHOLDER: &str = "{searchTerms}";

const KNOWN_SCHEMES: &[&str] = &[
    "http",
    "https",
    "ftp",
    "file",
    "about",
    "data",
    "chrome",
    "view-source",
];

const INTERNAL_SCHEMES: &[&str] = &["about", "chrome", "chrome-extension"];

/// Check whether the input already looks like a well-formed URL
///
/// Accepts inputs with a known scheme, and scheme-less inputs whose host is
/// `localhost`, a dotted-quad address, or a dotted domain name.
pub fn is_url(input: &str) -> bool {
    let text = input.trim();
    if text.is_empty() || text.contains(char::is_whitespace) {
        return false;
    }

    if let Ok(parsed) = Url::parse(text)
        && KNOWN_SCHEMES.contains(&parsed.scheme())
    {
        return true;
    }

    let Ok(parsed) = Url::parse(&format!("http://{text}")) else {
        return false;
    };

    match parsed.host() {
        Some(Host::Domain(domain)) => domain == "localhost" || looks_like_domain(domain),
        // The URL parser widens shorthand like "1.5" to an address
        Some(Host::Ipv4(_)) => host_segment(text).matches('.').count() == 3,
        Some(Host::Ipv6(_)) => true,
        None => false,
    }
}

/// Check whether a location is one of the reserved internal pages
pub fn is_internal_url(location: &str) -> bool {
    match Url::parse(location.trim()) {
        Ok(parsed) => INTERNAL_SCHEMES.contains(&parsed.scheme()),
        Err(_) => false,
    }
}

/// Substitute the URL-escaped terms into a search or autocomplete template
pub fn fill_template(template: &str, terms: &str) -> String {
    template.replacen(SEARCH_TERMS_PLACEHOLDER, &urlencoding::encode(terms), 1)
}

/// Location opened when raw input is submitted without a selected suggestion
pub fn resolve_input_location(input: &str, search_url: &str) -> String {
    let text = input.trim();
    if !is_url(text) {
        return fill_template(search_url, text);
    }

    match Url::parse(text) {
        Ok(parsed) if KNOWN_SCHEMES.contains(&parsed.scheme()) => text.to_string(),
        _ => format!("http://{text}"),
    }
}

fn looks_like_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return false;
    }

    let tld = labels[labels.len() - 1];
    tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !tld.chars().all(|c| c.is_ascii_digit())
}

fn host_segment(text: &str) -> &str {
    text.split(['/', ':', '?', '#']).next().unwrap_or(text)
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod classify_tests;
