//! Core configuration types for site mirroring
//!
//! This module contains the `SiteContext` struct: the explicit, immutable
//! context of one mirror run. It is threaded by reference through the
//! resolver, fetcher and rewriters; nothing else holds the base URL.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::utils::{APP_DIR, PUBLIC_DIR, STYLES_DIR};

/// What to do when two distinct URLs sanitize to the same local filename
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Later writes replace earlier ones under the shared name
    #[default]
    Overwrite,
    /// Later URLs receive a counter suffix (`logo-1.png`, `logo-2.png`, ...)
    Disambiguate,
}

/// Immutable context for one mirror run
#[derive(Debug, Clone, Serialize)]
pub struct SiteContext {
    /// Normalized origin to mirror, without trailing `/`
    pub(crate) base_url: String,

    /// Root of the generated project.
    ///
    /// `app/`, `styles/` and `public/` are created beneath it.
    pub(crate) output_root: PathBuf,

    /// Timeout for HTML page downloads
    pub(crate) page_timeout: Duration,
    /// Timeout for stylesheet downloads
    pub(crate) stylesheet_timeout: Duration,
    /// Timeout for image/font downloads
    pub(crate) asset_timeout: Duration,

    pub(crate) max_page_size: usize,
    pub(crate) max_stylesheet_size: usize,
    pub(crate) max_asset_size: usize,

    pub(crate) collision_policy: CollisionPolicy,

    /// Clear `app/`, `styles/` and `public/` before mirroring
    pub(crate) clean_output: bool,

    pub(crate) user_agent: String,
}

impl SiteContext {
    #[must_use]
    pub fn app_dir(&self) -> PathBuf {
        self.output_root.join(APP_DIR)
    }

    #[must_use]
    pub fn styles_dir(&self) -> PathBuf {
        self.output_root.join(STYLES_DIR)
    }

    #[must_use]
    pub fn public_dir(&self) -> PathBuf {
        self.output_root.join(PUBLIC_DIR)
    }

    /// Path of the rendered page for `route`; the home route `""` maps to `app/page.<ext>`
    #[must_use]
    pub fn page_path(&self, route: &str, extension: &str) -> PathBuf {
        let dir = if route.is_empty() {
            self.app_dir()
        } else {
            self.app_dir().join(Path::new(route))
        };
        dir.join(format!("{}.{extension}", crate::utils::PAGE_FILE_STEM))
    }
}
