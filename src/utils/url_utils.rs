//! URL and path manipulation utilities.
//!
//! This module provides the reference resolver, the local filename sanitizer
//! and route derivation used when mirroring a site.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Final extension of the last path segment, e.g. ".html" in "docs/intro.html"
    static ref TRAILING_EXTENSION: Regex = Regex::new(r"\.[^/.]+$")
        .expect("BUG: hardcoded extension regex is invalid - this is a compile-time bug");
}

/// Check if a reference is an inline `data:` URL
///
/// Data URLs carry their payload inline and are never resolved or fetched.
#[must_use]
pub fn is_data_url(reference: &str) -> bool {
    reference
        .trim_start()
        .get(..5)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("data:"))
}

/// Check if a reference already carries an `http`/`https` scheme
#[must_use]
pub fn is_absolute_http(reference: &str) -> bool {
    let lower = reference.get(..8).unwrap_or(reference).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Resolve a raw reference against the site's base origin
///
/// Rules, in priority order:
/// 1. absolute `http(s)://` references are returned unchanged
/// 2. protocol-relative `//host/path` gets an `https:` prefix
/// 3. root-relative `/path` is appended to the origin
/// 4. anything else is treated as relative to the *site root*, not to the
///    referring document (`img/a.png` -> `<origin>/img/a.png`)
///
/// `../` segments are not collapsed. Data URLs are returned verbatim.
#[must_use]
pub fn resolve_reference(reference: &str, base_origin: &str) -> String {
    let origin = base_origin.trim_end_matches('/');

    if is_data_url(reference) || is_absolute_http(reference) {
        reference.to_string()
    } else if reference.starts_with("//") {
        format!("https:{reference}")
    } else if reference.starts_with('/') {
        format!("{origin}{reference}")
    } else {
        format!("{origin}/{reference}")
    }
}

/// Remove a `#fragment` suffix
#[must_use]
pub fn strip_fragment(reference: &str) -> &str {
    reference.split_once('#').map_or(reference, |(head, _)| head)
}

/// Map an arbitrary URL to a local filename
///
/// Drops the fragment and query string, then keeps only the final path
/// segment (trailing slashes are ignored, like a basename). Sanitizing an
/// already-sanitized name returns it unchanged.
///
/// Returns an empty string when nothing usable remains; `.` and `..` are
/// reported as empty as well so callers can never escape their directory.
#[must_use]
pub fn sanitize_filename(url: &str) -> String {
    let without_fragment = strip_fragment(url);
    let without_query = without_fragment
        .split_once('?')
        .map_or(without_fragment, |(head, _)| head);
    let trimmed = without_query.trim_end_matches('/');
    let name = trimmed.rsplit('/').next().unwrap_or(trimmed);

    match name {
        "." | ".." => String::new(),
        other => other.to_string(),
    }
}

/// Derive the page route for an anchor target found on the home page
///
/// Only root-relative links (`/something`) produce a route. The home page
/// itself (`/`, `/#top`), protocol-relative links (`//cdn...`) and every
/// other form yield `None`.
///
/// The route never has a leading `/` and never keeps a file extension:
/// `/about.html` -> `about`, `/docs/intro/` -> `docs/intro`. Only the last
/// segment of a file link loses its extension; `/docs/v1.2/` -> `docs/v1.2`.
#[must_use]
pub fn route_from_link(link: &str) -> Option<String> {
    if !link.starts_with('/') || link.starts_with("//") {
        return None;
    }

    let path = strip_fragment(link);
    let path = path.split_once('?').map_or(path, |(head, _)| head);

    // A directory link keeps its dots: `/docs/v1.2/` is `docs/v1.2`
    let route = if path.ends_with('/') {
        path.trim_matches('/').to_string()
    } else {
        TRAILING_EXTENSION
            .replace(path, "")
            .trim_matches('/')
            .to_string()
    };
    if route.is_empty() {
        return None;
    }

    if route.split('/').any(|segment| segment == "." || segment == "..") {
        log::debug!(target: "sitemirror::crawl", "Ignoring link with dot segments: {link}");
        return None;
    }

    Some(route)
}
