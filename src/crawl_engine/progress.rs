//! Progress reporting abstraction for mirror runs
//!
//! Defines the `ProgressReporter` trait for lifecycle event reporting
//! and provides a no-op and a logging implementation.

use std::path::Path;

use super::crawl_types::MirrorSummary;

/// Trait for reporting mirror progress at key lifecycle events
///
/// Implementations can send updates to channels, log to console, update UI, etc.
pub trait ProgressReporter {
    /// Report that the run has started for `base_url`
    fn report_started(&self, base_url: &str);

    /// Report that a rewritten stylesheet was saved under `styles/`
    fn report_stylesheet_saved(&self, filename: &str);

    /// Report that a page was rendered and written
    fn report_page_written(&self, route: &str, path: &Path);

    /// Report that a secondary page was skipped after a failure
    fn report_page_skipped(&self, url: &str, reason: &str);

    /// Report that the run has completed
    fn report_completed(&self, summary: &MirrorSummary);
}

/// Progress reporter that does nothing
#[derive(Debug, Clone, Copy)]
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    #[inline(always)]
    fn report_started(&self, _base_url: &str) {}

    #[inline(always)]
    fn report_stylesheet_saved(&self, _filename: &str) {}

    #[inline(always)]
    fn report_page_written(&self, _route: &str, _path: &Path) {}

    #[inline(always)]
    fn report_page_skipped(&self, _url: &str, _reason: &str) {}

    #[inline(always)]
    fn report_completed(&self, _summary: &MirrorSummary) {}
}

/// Progress reporter writing operator-facing lines through `log`
#[derive(Debug, Clone, Copy)]
pub struct LogProgress;

impl ProgressReporter for LogProgress {
    fn report_started(&self, base_url: &str) {
        log::info!(target: "sitemirror::crawl", "Converting site: {base_url}");
    }

    fn report_stylesheet_saved(&self, filename: &str) {
        log::info!(target: "sitemirror::css", "Stylesheet saved: {filename}");
    }

    fn report_page_written(&self, route: &str, path: &Path) {
        let route = if route.is_empty() { "/" } else { route };
        log::info!(target: "sitemirror::pages", "Page written: {} ({route})", path.display());
    }

    fn report_page_skipped(&self, url: &str, reason: &str) {
        log::warn!(target: "sitemirror::pages", "Skipped page {url}: {reason}");
    }

    fn report_completed(&self, summary: &MirrorSummary) {
        log::info!(
            target: "sitemirror::crawl",
            "Conversion complete! {} pages written ({} skipped), {} stylesheets, {} assets localized ({} failed). Check the {} directory.",
            summary.pages_written,
            summary.pages_skipped,
            summary.stylesheets_saved,
            summary.assets_localized,
            summary.assets_failed,
            summary.output_root.display()
        );
    }
}
