//! Core types for site mirroring operations.
//!
//! This module contains the error type of a mirror run, the page work item
//! and the run summary.

use serde::Serialize;
use std::path::PathBuf;

use crate::asset_localizer::FetchError;

/// Errors that abort a mirror run
///
/// Failures of individual assets, stylesheets or secondary pages are not
/// represented here: they are logged and skipped where they occur.
#[derive(Debug, thiserror::Error)]
pub enum MirrorError {
    /// The home page could not be fetched; there is nothing to mirror
    #[error("failed to fetch home page {url}: {source}")]
    HomePage {
        url: String,
        #[source]
        source: FetchError,
    },

    /// An output directory could not be prepared
    #[error("failed to prepare {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience alias for Result with `MirrorError`
pub type MirrorResult<T> = Result<T, MirrorError>;

/// One page to mirror
///
/// Produced from the links of the home page, consumed exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTask {
    /// Route without leading `/` or extension; `""` for the home page
    pub route: String,
    pub absolute_url: String,
}

/// Outcome of a completed mirror run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MirrorSummary {
    pub output_root: PathBuf,
    pub pages_written: usize,
    pub pages_skipped: usize,
    pub stylesheets_saved: usize,
    pub stylesheets_failed: usize,
    pub assets_localized: usize,
    pub assets_failed: usize,
}

impl MirrorSummary {
    /// Check if anything was skipped or left pointing at the origin
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.pages_skipped > 0 || self.stylesheets_failed > 0 || self.assets_failed > 0
    }
}
