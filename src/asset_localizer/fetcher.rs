//! Fetch-and-store for referenced assets
//!
//! [`AssetFetcher`] is created once per run. It resolves a reference against
//! the site origin, downloads it, writes it under `public/` and hands back
//! the root-relative path to substitute into the referring document.
//!
//! Failures never propagate: the caller receives the original reference and
//! the document keeps pointing at the remote copy.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::downloaders::HttpFetch;
use super::registry::FilenameRegistry;
use super::types::{AssetError, AssetReference, FetchError, ResourceType};
use crate::config::SiteContext;
use crate::utils::{is_data_url, resolve_reference, sanitize_filename};

pub struct AssetFetcher<'a, F: HttpFetch> {
    ctx: &'a SiteContext,
    http: &'a F,
    public_names: FilenameRegistry,
    stylesheet_names: FilenameRegistry,
    localized: AtomicUsize,
    failed: AtomicUsize,
}

/// Create parent directories as needed and write `bytes` to `path`
pub(crate) async fn write_file(path: &Path, bytes: &[u8]) -> Result<(), AssetError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| AssetError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
    }
    tokio::fs::write(path, bytes)
        .await
        .map_err(|source| AssetError::Write {
            path: path.to_path_buf(),
            source,
        })
}

impl<'a, F: HttpFetch> AssetFetcher<'a, F> {
    #[must_use]
    pub fn new(ctx: &'a SiteContext, http: &'a F) -> Self {
        Self {
            ctx,
            http,
            public_names: FilenameRegistry::new(ctx.collision_policy()),
            stylesheet_names: FilenameRegistry::new(ctx.collision_policy()),
            localized: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn context(&self) -> &SiteContext {
        self.ctx
    }

    /// Localize one reference, falling back to the reference itself
    ///
    /// Data URLs are returned untouched without any request. On any failure
    /// (network, non-2xx, timeout, size limit, write) the failure is logged
    /// and the original, unresolved reference is returned.
    pub async fn fetch_and_store(&self, reference: &str) -> String {
        if is_data_url(reference) {
            return reference.to_string();
        }

        match self.try_fetch_and_store(reference).await {
            Ok(asset) => {
                self.localized.fetch_add(1, Ordering::Relaxed);
                asset.local_path
            }
            Err(e) => {
                self.failed.fetch_add(1, Ordering::Relaxed);
                log::warn!(target: "sitemirror::assets", "Failed to download asset {reference}: {e}");
                reference.to_string()
            }
        }
    }

    /// Localize one reference, reporting the failure to the caller
    pub async fn try_fetch_and_store(&self, reference: &str) -> Result<AssetReference, AssetError> {
        let reference = reference.trim();
        let url = resolve_reference(reference, self.ctx.base_url());
        let sanitized = sanitize_filename(reference);
        if sanitized.is_empty() {
            return Err(AssetError::EmptyFilename { url });
        }

        let kind = ResourceType::for_asset(reference);
        let bytes = self.http.fetch(&url, kind).await?;

        let filename = self.public_names.claim(&url, &sanitized);
        let path = self.ctx.public_dir().join(&filename);
        write_file(&path, &bytes).await?;

        log::info!(target: "sitemirror::assets", "Retrieved: {}", path.display());

        Ok(AssetReference {
            original_url: reference.to_string(),
            kind,
            local_path: format!("/{filename}"),
        })
    }

    /// GET a text document (page or stylesheet) after resolving it against the origin
    pub async fn fetch_text(&self, reference: &str, kind: ResourceType) -> Result<String, FetchError> {
        let url = resolve_reference(reference.trim(), self.ctx.base_url());
        let bytes = self.http.fetch(&url, kind).await?;

        match kind {
            // Pages are often served with stray bytes in a legacy encoding
            ResourceType::Page => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            _ => String::from_utf8(bytes).map_err(|_| FetchError::InvalidUtf8 { url }),
        }
    }

    /// Claim the local filename under `styles/` for a stylesheet URL
    pub(crate) fn claim_stylesheet_name(&self, url: &str, sanitized: &str) -> String {
        self.stylesheet_names.claim(url, sanitized)
    }

    /// Number of assets written under `public/` so far
    #[must_use]
    pub fn localized_count(&self) -> usize {
        self.localized.load(Ordering::Relaxed)
    }

    /// Number of assets that fell back to their remote URL so far
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.failed.load(Ordering::Relaxed)
    }
}
