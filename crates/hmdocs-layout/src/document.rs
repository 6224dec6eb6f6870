//! Full HTML document assembly.

use std::fmt::Write;

use hmdocs_nav::{Neighbors, flatten};
use hmdocs_renderer::{IconSet, RenderedPage, escape_html};

use crate::chrome::{SiteInfo, docs_banner, header};
use crate::page::{DocsPage, docs_body, docs_description, docs_title};
use crate::sidebar::{Sidebar, SidebarOptions};

/// Everything needed to render one page.
pub struct DocumentParts<'a> {
    pub site: &'a SiteInfo,
    /// URL of the page being rendered.
    pub current_url: &'a str,
    pub page: &'a RenderedPage,
    pub description: Option<&'a str>,
    pub search_enabled: bool,
    /// Stylesheet to link from the document head.
    pub css_path: Option<&'a str>,
}

/// Render a complete HTML document: header, sidebar, page and banner.
///
/// The page title comes from the Markdown's first H1. Without one, the
/// tree's name for `current_url` is rendered as the title heading.
#[must_use]
pub fn render_document(parts: &DocumentParts<'_>, sidebar: &Sidebar<'_>, icons: &dyn IconSet) -> String {
    let root = sidebar.root();
    let tree_name = root.page_by_url(parts.current_url).map(|page| page.name.as_str());
    let title = parts
        .page
        .title
        .as_deref()
        .or(tree_name)
        .unwrap_or(&parts.site.title);

    let pages = flatten(&root.children);
    let neighbors = Neighbors::find(&pages, parts.current_url);

    let mut content = String::new();
    if parts.page.title.is_none() {
        content.push_str(&docs_title(title));
    }
    content.push_str(&docs_description(parts.description));
    content.push_str(&docs_body(&parts.page.html));
    content.push_str(&docs_banner(parts.site, icons));

    let options = SidebarOptions {
        title: parts.site.title.clone(),
        search_enabled: parts.search_enabled,
        mobile_open: false,
    };

    let mut html = String::with_capacity(content.len() + 16384);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(
        html,
        "<title>{} | {}</title>",
        escape_html(title),
        escape_html(&parts.site.title)
    );
    if let Some(css_path) = parts.css_path {
        let _ = writeln!(html, "<link rel=\"stylesheet\" href=\"{}\">", escape_html(css_path));
    }
    html.push_str("</head>\n<body>\n<div class=\"bg-background min-h-screen\">\n");
    html.push_str(&header(parts.site, icons));
    html.push_str("<main class=\"flex\">\n");
    html.push_str(&sidebar.render(parts.current_url, &options));
    html.push_str(&DocsPage::new(&parts.page.toc, neighbors).render(&content));
    html.push_str("</main>\n</div>\n</body>\n</html>\n");
    html
}
