//! Next.js app-router page template

use std::fmt::Write;

use super::PageRenderer;
use crate::asset_localizer::RenderedPage;

/// Renders `page.tsx` files for the Next.js `app/` directory
///
/// Stylesheets are imported from `@/styles/`, the title is exported through
/// `metadata`, and the body is injected with `dangerouslySetInnerHTML`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NextPageRenderer;

/// Escape markup for embedding inside a JavaScript template literal
fn escape_template_literal(markup: &str) -> String {
    markup
        .replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

impl PageRenderer for NextPageRenderer {
    fn extension(&self) -> &str {
        "tsx"
    }

    fn render(&self, page: &RenderedPage) -> String {
        let mut out = String::from("import { FC } from 'react';\n\n");

        for file in &page.stylesheet_files {
            let _ = writeln!(out, "import '@/styles/{file}';");
        }
        if !page.stylesheet_files.is_empty() {
            out.push('\n');
        }

        // A JSON string literal is a valid JS string literal
        let title = serde_json::to_string(&page.title).unwrap_or_else(|_| "\"\"".to_string());

        let _ = write!(
            out,
            "const Page: FC = () => {{\n  return (\n    <div dangerouslySetInnerHTML={{{{ __html: `{}` }}}} />\n  );\n}};\n\nexport const metadata = {{\n  title: {title},\n}};\n\nexport default Page;\n",
            escape_template_literal(&page.body_html)
        );

        out
    }
}
