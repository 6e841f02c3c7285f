//! Stylesheet rewriting
//!
//! Finds every `url(...)` reference in a stylesheet, localizes each distinct
//! reference once, then substitutes the local path into every `url()` token
//! that carried it. Only the reference inside the token is replaced, so
//! quoting and surrounding declarations are preserved byte for byte.

use futures::future::join_all;
use lazy_static::lazy_static;
use regex::{Captures, Match, Regex};
use std::collections::HashMap;

use super::downloaders::HttpFetch;
use super::fetcher::AssetFetcher;
use crate::utils::is_data_url;

lazy_static! {
    /// `url("ref")`, `url('ref')` or bare `url(ref)`
    ///
    /// Quoted references may contain spaces and parentheses; bare ones may not.
    /// Exactly one of groups 1-3 holds the reference, see [`url_reference`].
    pub(crate) static ref CSS_URL: Regex =
        Regex::new(r#"(?i)url\(\s*(?:"([^"]*)"|'([^']*)'|([^"'()\s]+))\s*\)"#)
            .expect("BUG: hardcoded url() regex is invalid - this is a compile-time bug");
}

/// The reference inside one `CSS_URL` match, whichever quoting form it used
pub(crate) fn url_reference<'h>(caps: &Captures<'h>) -> Option<Match<'h>> {
    caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3))
}

/// Distinct `url()` references in first-match order, data URLs excluded
#[must_use]
pub fn extract_css_references(css: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    CSS_URL
        .captures_iter(css)
        .filter_map(|caps| url_reference(&caps))
        .map(|m| m.as_str())
        .filter(|reference| !reference.trim().is_empty())
        .filter(|reference| !is_data_url(reference))
        .filter(|reference| seen.insert(*reference))
        .map(str::to_string)
        .collect()
}

/// Replace the reference inside every `url()` token found in `replacements`
///
/// Tokens whose reference has no entry are copied unchanged.
#[must_use]
pub fn apply_css_replacements(css: &str, replacements: &HashMap<String, String>) -> String {
    CSS_URL
        .replace_all(css, |caps: &Captures<'_>| {
            let (Some(token), Some(reference)) = (caps.get(0), url_reference(caps)) else {
                return caps[0].to_string();
            };

            match replacements.get(reference.as_str()) {
                Some(local) => {
                    let start = reference.start() - token.start();
                    let end = reference.end() - token.start();
                    let token = token.as_str();
                    format!("{}{local}{}", &token[..start], &token[end..])
                }
                None => token.as_str().to_string(),
            }
        })
        .into_owned()
}

/// Localize every `url()` reference of a stylesheet and return the rewritten text
///
/// Distinct references are fetched concurrently; the stylesheet is only
/// rewritten once all of them have settled. A reference that fails to
/// download is substituted with itself and keeps pointing at the origin.
pub async fn rewrite_css<F: HttpFetch>(css: &str, fetcher: &AssetFetcher<'_, F>) -> String {
    let references = extract_css_references(css);
    if references.is_empty() {
        return css.to_string();
    }

    log::debug!(
        target: "sitemirror::css",
        "Localizing {} url() references",
        references.len()
    );

    let localized = join_all(
        references
            .iter()
            .map(|reference| fetcher.fetch_and_store(reference)),
    )
    .await;

    let replacements: HashMap<String, String> = references.into_iter().zip(localized).collect();

    apply_css_replacements(css, &replacements)
}
