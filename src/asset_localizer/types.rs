//! Type definitions for asset localization

use std::path::PathBuf;

/// Resource type for request headers, limits and error tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Page,
    Stylesheet,
    Image,
    Font,
}

impl ResourceType {
    /// Classify a referenced asset by its file extension
    ///
    /// Anything that is not a known font format is treated as an image.
    #[must_use]
    pub fn for_asset(url: &str) -> Self {
        let name = crate::utils::sanitize_filename(url).to_ascii_lowercase();
        let extension = name.rsplit_once('.').map_or("", |(_, ext)| ext);
        match extension {
            "woff" | "woff2" | "ttf" | "otf" | "eot" => Self::Font,
            _ => Self::Image,
        }
    }

    /// `Accept` header value sent for this resource type
    #[must_use]
    pub fn accept_header(self) -> &'static str {
        match self {
            Self::Page => "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            Self::Stylesheet => "text/css,*/*;q=0.1",
            Self::Image => "image/avif,image/webp,image/apng,image/*,*/*;q=0.8",
            Self::Font => "font/woff2,font/woff,*/*;q=0.8",
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceType::Page => write!(f, "page"),
            ResourceType::Stylesheet => write!(f, "stylesheet"),
            ResourceType::Image => write!(f, "image"),
            ResourceType::Font => write!(f, "font"),
        }
    }
}

/// A reference found in a document together with where it now lives locally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetReference {
    pub original_url: String,
    pub kind: ResourceType,
    /// Root-relative public path, e.g. `/logo.png`
    pub local_path: String,
}

/// A page after asset localization, ready for the template renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// Route without leading `/`; the home page is `""`
    pub route: String,
    pub title: String,
    pub body_html: String,
    /// Stylesheets downloaded for the whole site, in discovery order
    pub stylesheet_files: Vec<String>,
}

/// Failure of a single network fetch
///
/// Every variant is recoverable except when it concerns the home page.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("{url} exceeds the size limit of {limit} bytes")]
    TooLarge { url: String, limit: usize },

    #[error("{url} is not valid UTF-8")]
    InvalidUtf8 { url: String },
}

/// Failure to localize one asset: download or persist
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("no usable filename in {url}")]
    EmptyFilename { url: String },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
