//! Test utilities and helper functions for the sitemirror test suite

use anyhow::Result;
use kodegen_tools_sitemirror::{FetchError, HttpFetch, ResourceType, SiteContext};
use mockito::{Mock, Server};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tempfile::TempDir;

/// Creates a temporary directory for test output
#[allow(dead_code)]
pub fn create_test_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test HTML document with specified head extras and body
#[allow(dead_code)]
pub fn create_test_html(title: &str, head: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{}</title>
    {}
</head>
<body>
    {}
</body>
</html>"#,
        html_escape::encode_text(title),
        head,
        body
    )
}

/// Builds a context rooted at `output_root` with short timeouts for tests
#[allow(dead_code)]
pub fn create_test_context(output_root: &Path, base_url: &str) -> SiteContext {
    SiteContext::builder()
        .output_root(output_root.to_path_buf())
        .base_url(base_url)
        .timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to create test context")
}

/// Creates a mock endpoint that returns HTML content
#[allow(dead_code)]
pub async fn create_html_mock(server: &mut Server, path: &str, html: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html)
        .create_async()
        .await
}

/// Creates a mock endpoint that returns a stylesheet
#[allow(dead_code)]
pub async fn create_css_mock(server: &mut Server, path: &str, css: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/css")
        .with_body(css)
        .create_async()
        .await
}

/// Creates a mock endpoint that returns binary content
#[allow(dead_code)]
pub async fn create_binary_mock(server: &mut Server, path: &str, bytes: &[u8]) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "application/octet-stream")
        .with_body(bytes)
        .create_async()
        .await
}

/// Creates a mock endpoint that returns an error
#[allow(dead_code)]
pub async fn create_error_mock(server: &mut Server, path: &str, status: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_body("Error")
        .create_async()
        .await
}

/// Counts files recursively in a directory
#[allow(dead_code)]
pub fn count_files_recursive(dir: &Path) -> futures::future::BoxFuture<'_, Result<usize>> {
    Box::pin(async move {
        let mut count = 0;
        let mut entries = tokio::fs::read_dir(dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.is_file() {
                count += 1;
            } else if path.is_dir() {
                count += count_files_recursive(&path).await?;
            }
        }

        Ok(count)
    })
}

/// In-memory transport recording every request
///
/// URLs without a registered body either get a small default body or, when
/// `fail_unknown` is set, a 404. Each fetch yields once before completing so
/// concurrent callers are all in flight together.
#[allow(dead_code)]
#[derive(Default)]
pub struct StubFetch {
    bodies: HashMap<String, Vec<u8>>,
    failing: Vec<String>,
    fail_unknown: bool,
    requested: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

#[allow(dead_code)]
impl StubFetch {
    /// Every request succeeds with a placeholder body
    pub fn succeeding() -> Self {
        Self::default()
    }

    /// Every request fails with HTTP 404
    pub fn failing() -> Self {
        Self {
            fail_unknown: true,
            ..Self::default()
        }
    }

    pub fn with_body(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.bodies.insert(url.to_string(), body.into());
        self
    }

    pub fn with_failure(mut self, url: &str) -> Self {
        self.failing.push(url.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.requested.lock().unwrap().len()
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl HttpFetch for StubFetch {
    async fn fetch(&self, url: &str, _kind: ResourceType) -> Result<Vec<u8>, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing.iter().any(|failing| failing == url) {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            });
        }

        match self.bodies.get(url) {
            Some(body) => Ok(body.clone()),
            None if self.fail_unknown => Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            }),
            None => Ok(b"stub".to_vec()),
        }
    }
}
