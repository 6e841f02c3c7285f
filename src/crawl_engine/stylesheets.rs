//! Site-wide stylesheet localization
//!
//! The stylesheets linked from the home page are downloaded once, rewritten
//! with localized `url()` references, and saved under `styles/`. The
//! resulting filenames are shared by every page of the mirror.

use log::warn;

use super::progress::ProgressReporter;
use crate::asset_localizer::fetcher::write_file;
use crate::asset_localizer::{AssetFetcher, HttpFetch, ResourceType, rewrite_css};
use crate::utils::{resolve_reference, sanitize_filename};

/// Stylesheets that made it to disk, and how many were skipped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylesheetOutcome {
    pub saved: Vec<String>,
    pub failed: usize,
}

/// Download, rewrite and save each stylesheet, sequentially and in order
///
/// A stylesheet that cannot be fetched, decoded or written is logged and
/// left out of the list; the remaining ones are still processed.
pub async fn localize_stylesheets<F: HttpFetch, P: ProgressReporter>(
    hrefs: &[String],
    fetcher: &AssetFetcher<'_, F>,
    progress: &P,
) -> StylesheetOutcome {
    let ctx = fetcher.context();
    let mut outcome = StylesheetOutcome::default();

    for href in hrefs {
        let url = resolve_reference(href, ctx.base_url());

        let sanitized = sanitize_filename(href);
        if sanitized.is_empty() {
            warn!(target: "sitemirror::css", "No usable filename for stylesheet {url}, skipping");
            outcome.failed += 1;
            continue;
        }

        let css = match fetcher.fetch_text(href, ResourceType::Stylesheet).await {
            Ok(css) => css,
            Err(e) => {
                warn!(target: "sitemirror::css", "Failed to download CSS file: {url}: {e}");
                outcome.failed += 1;
                continue;
            }
        };

        let rewritten = rewrite_css(&css, fetcher).await;

        let filename = fetcher.claim_stylesheet_name(&url, &sanitized);
        let path = ctx.styles_dir().join(&filename);
        if let Err(e) = write_file(&path, rewritten.as_bytes()).await {
            warn!(target: "sitemirror::css", "Failed to save stylesheet {url}: {e}");
            outcome.failed += 1;
            continue;
        }

        progress.report_stylesheet_saved(&filename);
        if !outcome.saved.contains(&filename) {
            outcome.saved.push(filename);
        }
    }

    outcome
}
