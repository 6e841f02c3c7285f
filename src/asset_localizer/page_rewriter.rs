//! HTML page rewriting
//!
//! The page is parsed into a DOM once. Image sources and inline
//! `background` references are collected, localized concurrently, and
//! written back as attribute updates on the nodes they came from, so
//! unrelated markup is never touched. Anchors are left alone.

use futures::future::join_all;
use kuchiki::traits::TendrilSink;
use kuchiki::{ElementData, NodeDataRef, NodeRef};
use std::ops::Range;

use super::css_rewriter::{CSS_URL, url_reference};
use super::downloaders::HttpFetch;
use super::fetcher::AssetFetcher;
use super::types::RenderedPage;

/// Where a localized reference has to be written back
enum Target {
    /// The `src` attribute of an `<img>`
    ImageSrc,
    /// The byte range of the reference inside the `style` attribute
    InlineStyle { style: String, range: Range<usize> },
}

/// One pending substitution collected from the DOM
struct Substitution {
    element: NodeDataRef<ElementData>,
    reference: String,
    target: Target,
}

fn select_elements(document: &NodeRef, selector: &str) -> Vec<NodeDataRef<ElementData>> {
    match document.select(selector) {
        Ok(matches) => matches.collect(),
        Err(()) => {
            log::error!(target: "sitemirror::pages", "Invalid selector: {selector}");
            Vec::new()
        }
    }
}

fn collect_image_sources(document: &NodeRef) -> Vec<Substitution> {
    select_elements(document, "img[src]")
        .into_iter()
        .filter_map(|element| {
            let src = element.attributes.borrow().get("src")?.to_string();
            if src.trim().is_empty() {
                return None;
            }
            Some(Substitution {
                element,
                reference: src,
                target: Target::ImageSrc,
            })
        })
        .collect()
}

fn collect_inline_backgrounds(document: &NodeRef) -> Vec<Substitution> {
    select_elements(document, "[style]")
        .into_iter()
        .filter_map(|element| {
            let style = element.attributes.borrow().get("style")?.to_string();
            if !style.contains("background") {
                return None;
            }
            // Only the first url() of the attribute is localized
            let captures = CSS_URL.captures(&style)?;
            let reference = url_reference(&captures)?;
            if reference.as_str().trim().is_empty() {
                return None;
            }
            let range = reference.range();
            let reference = reference.as_str().to_string();
            Some(Substitution {
                element,
                reference,
                target: Target::InlineStyle { style, range },
            })
        })
        .collect()
}

fn apply_substitution(substitution: &Substitution, local: &str) {
    if local == substitution.reference {
        return;
    }

    let mut attributes = substitution.element.attributes.borrow_mut();
    match &substitution.target {
        Target::ImageSrc => {
            attributes.insert("src", local.to_string());
        }
        Target::InlineStyle { style, range } => {
            let mut rewritten = style.clone();
            rewritten.replace_range(range.clone(), local);
            attributes.insert("style", rewritten);
        }
    }
}

/// Serialize the children of `<body>`; missing body yields an empty string
fn body_inner_html(document: &NodeRef) -> String {
    let Ok(body) = document.select_first("body") else {
        return String::new();
    };

    let mut html = Vec::new();
    for child in body.as_node().children() {
        if let Err(e) = child.serialize(&mut html) {
            log::warn!(target: "sitemirror::pages", "Failed to serialize body node: {e}");
        }
    }
    String::from_utf8_lossy(&html).into_owned()
}

fn document_title(document: &NodeRef) -> String {
    document
        .select_first("title")
        .map(|title| title.as_node().text_contents())
        .unwrap_or_default()
}

/// Localize a page's images and inline backgrounds and extract its content
///
/// Every localization for the page is started before any is awaited, and the
/// page is only returned once all of them have settled: no element is left
/// with a pending substitution. Failed downloads leave the original reference
/// in place.
///
/// `stylesheet_files` is the site-wide list produced from the home page and
/// is carried into the result unchanged.
pub async fn rewrite_page<F: HttpFetch>(
    html: &str,
    route: &str,
    stylesheet_files: &[String],
    fetcher: &AssetFetcher<'_, F>,
) -> RenderedPage {
    let document = kuchiki::parse_html().one(html);

    let mut substitutions = collect_image_sources(&document);
    substitutions.extend(collect_inline_backgrounds(&document));

    log::debug!(
        target: "sitemirror::pages",
        "Route '{route}': localizing {} asset references",
        substitutions.len()
    );

    let localized = join_all(
        substitutions
            .iter()
            .map(|substitution| fetcher.fetch_and_store(&substitution.reference)),
    )
    .await;

    for (substitution, local) in substitutions.iter().zip(&localized) {
        apply_substitution(substitution, local);
    }

    RenderedPage {
        route: route.to_string(),
        title: document_title(&document),
        body_html: body_inner_html(&document),
        stylesheet_files: stylesheet_files.to_vec(),
    }
}
