//! Download functionality for pages, stylesheets and binary assets
//!
//! ## Architecture
//!
//! Every network read goes through the [`HttpFetch`] trait so the rewriters
//! and the crawler can be exercised against stub transports. [`HttpFetcher`]
//! is the production implementation built on `reqwest`:
//! - per-resource-type timeout and `Accept` header
//! - status check (anything but 2xx is a failure)
//! - size limit enforced from `Content-Length` and again while streaming
//!
//! Redirects are followed by the client's default policy; there is no retry.

use futures::StreamExt;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;

use super::types::{FetchError, ResourceType};
use crate::config::SiteContext;
use crate::crawl_engine::MirrorError;

/// Transport used to GET a resource as raw bytes
pub trait HttpFetch {
    fn fetch(&self, url: &str, kind: ResourceType)
    -> impl Future<Output = Result<Vec<u8>, FetchError>>;
}

/// Timeout and size limit for one resource type
#[derive(Debug, Clone, Copy)]
struct FetchLimits {
    timeout: Duration,
    max_size: usize,
}

/// `reqwest`-backed transport configured from a [`SiteContext`]
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    page: FetchLimits,
    stylesheet: FetchLimits,
    asset: FetchLimits,
}

impl HttpFetcher {
    pub fn new(ctx: &SiteContext) -> Result<Self, MirrorError> {
        let client = Client::builder()
            .user_agent(ctx.user_agent())
            .build()
            .map_err(|e| MirrorError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            page: FetchLimits {
                timeout: ctx.page_timeout(),
                max_size: ctx.max_page_size(),
            },
            stylesheet: FetchLimits {
                timeout: ctx.stylesheet_timeout(),
                max_size: ctx.max_stylesheet_size(),
            },
            asset: FetchLimits {
                timeout: ctx.asset_timeout(),
                max_size: ctx.max_asset_size(),
            },
        })
    }

    fn limits(&self, kind: ResourceType) -> FetchLimits {
        match kind {
            ResourceType::Page => self.page,
            ResourceType::Stylesheet => self.stylesheet,
            ResourceType::Image | ResourceType::Font => self.asset,
        }
    }
}

fn request_error(url: &str, error: &reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Request {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}

/// Core download implementation
///
/// Handles HTTP download with streaming, size limits, and timeout.
async fn download_core(
    client: &Client,
    url: &str,
    kind: ResourceType,
    limits: FetchLimits,
) -> Result<Vec<u8>, FetchError> {
    let response = client
        .get(url)
        .timeout(limits.timeout)
        .header("Accept", kind.accept_header())
        .send()
        .await
        .map_err(|e| request_error(url, &e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    // Enforce limit BEFORE downloading
    let expected_size = response.content_length().unwrap_or(0);
    if expected_size > limits.max_size as u64 {
        return Err(FetchError::TooLarge {
            url: url.to_string(),
            limit: limits.max_size,
        });
    }

    let mut buffer = if expected_size > 0 {
        Vec::with_capacity(expected_size as usize)
    } else {
        Vec::new()
    };

    // Content-Length may be absent or wrong; check again while streaming
    let mut stream = response.bytes_stream();
    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(|e| request_error(url, &e))?;

        if buffer.len() + chunk.len() > limits.max_size {
            return Err(FetchError::TooLarge {
                url: url.to_string(),
                limit: limits.max_size,
            });
        }
        buffer.extend_from_slice(&chunk);
    }

    log::debug!(
        target: "sitemirror::assets",
        "Downloaded {kind} {url} ({} bytes)",
        buffer.len()
    );

    Ok(buffer)
}

impl HttpFetch for HttpFetcher {
    async fn fetch(&self, url: &str, kind: ResourceType) -> Result<Vec<u8>, FetchError> {
        download_core(&self.client, url, kind, self.limits(kind)).await
    }
}
