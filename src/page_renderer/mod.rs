//! Page template rendering
//!
//! The mirror core hands each [`RenderedPage`] to a [`PageRenderer`], which
//! turns title, body markup and stylesheet list into the file written at
//! `app/<route>/page.<extension>`. The three inputs are used as given.

pub mod html_page;
pub mod next_page;

pub use html_page::HtmlPageRenderer;
pub use next_page::NextPageRenderer;

use crate::asset_localizer::RenderedPage;

/// Produces the on-disk page document for a rewritten page
pub trait PageRenderer {
    /// File extension of rendered pages, without the dot
    fn extension(&self) -> &str;

    fn render(&self, page: &RenderedPage) -> String;
}

/// Template selectable from the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TemplateKind {
    /// Next.js app-router page (`page.tsx`)
    #[default]
    Next,
    /// Standalone HTML document (`page.html`)
    Html,
}

impl TemplateKind {
    #[must_use]
    pub fn renderer(self) -> Box<dyn PageRenderer> {
        match self {
            Self::Next => Box::new(NextPageRenderer),
            Self::Html => Box::new(HtmlPageRenderer),
        }
    }
}
