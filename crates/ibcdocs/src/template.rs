//! Standalone HTML page around a rendered fragment.

use std::fmt::Write;

use ibcdocs_renderer::{PageRenderResult, escape_html};

/// Layout for highlight boxes, tag badges and code blocks. Colors come from
/// the inline styles the components emit.
const BASE_CSS: &str = "\
body { font-family: system-ui, sans-serif; max-width: 56rem; margin: 0 auto; padding: 2rem 1rem; }
.page-tags { display: flex; gap: 0.5rem; margin-bottom: 1rem; }
.highlight-tag { display: inline-block; padding: 0.125rem 0.5rem; border-radius: 0.25rem; font-size: 0.8rem; font-weight: 600; }
.highlight-box { border-radius: 0.5rem; padding: 1rem 1.25rem; margin: 1rem 0; }
.highlight-box-header { display: flex; align-items: center; gap: 0.5rem; font-weight: 700; }
.highlight-box-icon { width: 1.25rem; height: 1.25rem; }
.highlight-box-content > :last-child { margin-bottom: 0; }
.code-block pre { overflow-x: auto; padding: 1rem; background: var(--ifm-code-background, #f5f5f5); }
.code-block-source { font-size: 0.8rem; }
nav.toc .toc-3 { padding-left: 1rem; }
";

/// Render a complete HTML document for one page.
pub(crate) fn render_page(page: &PageRenderResult, fallback_title: &str) -> String {
    let mut html = String::with_capacity(page.html.len() + 2048);
    let title = page.title.as_deref().unwrap_or(fallback_title);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(title));
    if let Some(description) = &page.description {
        let _ = writeln!(
            html,
            "<meta name=\"description\" content=\"{}\">",
            escape_html(description)
        );
    }
    let _ = writeln!(html, "<style>\n{BASE_CSS}</style>");
    html.push_str("</head>\n<body>\n");

    if !page.toc.is_empty() {
        html.push_str("<nav class=\"toc\">\n<ul>\n");
        for entry in &page.toc {
            let _ = writeln!(
                html,
                "<li class=\"toc-{}\"><a href=\"#{}\">{}</a></li>",
                entry.level,
                escape_html(&entry.id),
                escape_html(&entry.title)
            );
        }
        html.push_str("</ul>\n</nav>\n");
    }

    html.push_str("<article>\n");
    html.push_str(&page.html);
    html.push_str("\n</article>\n</body>\n</html>\n");
    html
}
