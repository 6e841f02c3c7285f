//! Link discovery on the home page
//!
//! Discovery is one hop: only the anchors of the home page become pages,
//! and only root-relative ones. Stylesheet links are collected here too
//! because the whole site shares the home page's stylesheet set.

use lazy_static::lazy_static;
use log::debug;
use scraper::{Html, Selector};
use std::collections::HashSet;

use super::crawl_types::PageTask;
use crate::utils::{route_from_link, strip_fragment};

lazy_static! {
    // These selectors are hardcoded and syntactically valid CSS selectors.
    // If they fail to parse, it indicates a compile-time bug in the selector strings.
    static ref STYLESHEET_SELECTOR: Selector =
        Selector::parse("link[rel~=\"stylesheet\"][href]:not([rel~=\"alternate\"])")
            .expect("BUG: hardcoded CSS selector for stylesheet links is invalid - this is a compile-time bug");

    static ref ANCHOR_SELECTOR: Selector =
        Selector::parse("a[href]")
            .expect("BUG: hardcoded CSS selector 'a[href]' is invalid - this is a compile-time bug");
}

fn collect_attribute(document: &Html, selector: &Selector, attribute: &str) -> Vec<String> {
    document
        .select(selector)
        .filter_map(|element| element.value().attr(attribute))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

/// `href` of every `<link rel="stylesheet">`, in document order
///
/// Alternate stylesheets (`rel="alternate stylesheet"`) are not part of the
/// page's default rendering and are skipped.
#[must_use]
pub fn extract_stylesheet_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    collect_attribute(&document, &STYLESHEET_SELECTOR, "href")
}

/// `href` of every `<a>`, in document order
#[must_use]
pub fn extract_anchor_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    collect_attribute(&document, &ANCHOR_SELECTOR, "href")
}

/// Turn home page anchors into page tasks
///
/// Keeps root-relative links other than `/`, derives their route, and drops
/// any link whose route was already seen (first occurrence wins). The fetch
/// URL is the origin plus the link with its fragment removed.
#[must_use]
pub fn discover_page_tasks(links: &[String], base_url: &str) -> Vec<PageTask> {
    let origin = base_url.trim_end_matches('/');
    let mut seen_routes = HashSet::new();
    let mut tasks = Vec::new();

    for link in links {
        let Some(route) = route_from_link(link) else {
            continue;
        };

        if !seen_routes.insert(route.clone()) {
            debug!(target: "sitemirror::crawl", "Already queued route '{route}', ignoring {link}");
            continue;
        }

        tasks.push(PageTask {
            route,
            absolute_url: format!("{origin}{}", strip_fragment(link)),
        });
    }

    debug!(
        target: "sitemirror::crawl",
        "Found {} links on the home page, {} internal pages",
        links.len(),
        tasks.len()
    );

    tasks
}
