//! "On this page" column.

use std::fmt::Write;

use hmdocs_renderer::{TocItem, escape_html};

const ACTIVE_DOT: &str = r#"<div class="h-1.5 w-1.5 rounded-full bg-orange-200"></div>"#;

/// Render one table of contents link.
///
/// The item is active when `active_anchors` contains its URL without the
/// leading `#`. Items are indented 16px per level below 2.
#[must_use]
pub fn render_toc_item<A: AsRef<str>>(item: &TocItem, active_anchors: &[A]) -> String {
    let active = active_anchors.iter().any(|a| a.as_ref() == item.anchor());
    let indent = u32::from(item.depth.saturating_sub(2)) * 16;

    let mut html = String::new();
    let _ = write!(
        html,
        "<a href=\"{}\" class=\"flex items-center gap-2 text-xs transition-colors {}\" style=\"padding-left: {indent}px\">",
        escape_html(&item.url),
        if active {
            "font-medium text-orange-300"
        } else {
            "text-stone-400 hover:text-orange-300"
        }
    );
    if active {
        html.push_str(ACTIVE_DOT);
    }
    html.push_str(&escape_html(&item.title));
    html.push_str("</a>");
    html
}

/// Render the table of contents aside, or nothing for an empty list.
#[must_use]
pub fn render_toc<A: AsRef<str>>(items: &[TocItem], active_anchors: &[A]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let mut html = String::from(
        "<aside class=\"hidden xl:block w-60 shrink-0 sticky top-[72px] h-[calc(100vh-72px)] p-6\">\n\
         <div class=\"flex flex-col gap-4\">\n\
         <div class=\"flex items-center gap-2\"><span class=\"text-xs font-medium text-orange-300\">On this page</span></div>\n",
    );
    for item in items {
        html.push_str(&render_toc_item(item, active_anchors));
        html.push('\n');
    }
    html.push_str("</div>\n</aside>\n");
    html
}
