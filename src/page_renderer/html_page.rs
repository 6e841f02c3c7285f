//! Standalone HTML page template

use std::fmt::Write;

use super::PageRenderer;
use crate::asset_localizer::RenderedPage;

/// Renders a plain `page.html` document linking `/styles/<file>`
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlPageRenderer;

impl PageRenderer for HtmlPageRenderer {
    fn extension(&self) -> &str {
        "html"
    }

    fn render(&self, page: &RenderedPage) -> String {
        let mut out = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(out, "<title>{}</title>", html_escape::encode_text(&page.title));
        for file in &page.stylesheet_files {
            let _ = writeln!(
                out,
                "<link rel=\"stylesheet\" href=\"/styles/{}\">",
                html_escape::encode_double_quoted_attribute(file)
            );
        }
        let _ = write!(out, "</head>\n<body>\n{}\n</body>\n</html>\n", page.body_html);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_title_and_keeps_body() {
        let page = RenderedPage {
            route: String::new(),
            title: "Fish & <Chips>".to_string(),
            body_html: "<p>Menu</p>".to_string(),
            stylesheet_files: vec!["main.css".to_string()],
        };
        let out = HtmlPageRenderer.render(&page);
        assert!(out.contains("<title>Fish &amp; &lt;Chips&gt;</title>"));
        assert!(out.contains("<link rel=\"stylesheet\" href=\"/styles/main.css\">"));
        assert!(out.contains("<body>\n<p>Menu</p>\n</body>"));
    }
}
