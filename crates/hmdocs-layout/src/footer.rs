//! Previous/next page links.

use std::fmt::Write;

use hmdocs_nav::Neighbors;
use hmdocs_renderer::escape_html;

/// Render the previous/next footer, or nothing when there are no neighbors.
#[must_use]
pub fn render_footer(neighbors: &Neighbors<'_>) -> String {
    if neighbors.is_empty() {
        return String::new();
    }

    let mut html = String::from("<div class=\"border-surface mt-12 flex gap-4 border-t pt-6\">\n");

    if let Some(previous) = neighbors.previous {
        let _ = writeln!(
            html,
            "<a href=\"{}\" rel=\"prev\" class=\"bg-surface hover:bg-elevated flex-1 rounded-lg border-l-4 border-orange-300 p-4 transition-colors\">\
             <div class=\"mb-1 text-xs text-stone-400\">Previous</div>\
             <div class=\"text-text-primary text-sm font-medium\">{}</div></a>",
            escape_html(&previous.url),
            escape_html(&previous.name)
        );
    }

    if let Some(next) = neighbors.next {
        let _ = writeln!(
            html,
            "<a href=\"{}\" rel=\"next\" class=\"bg-surface hover:bg-elevated ml-auto flex-1 rounded-lg border-r-4 border-orange-300 p-4 text-right transition-colors\">\
             <div class=\"mb-1 text-xs text-stone-400\">Next</div>\
             <div class=\"text-text-primary text-sm font-medium\">{}</div></a>",
            escape_html(&next.url),
            escape_html(&next.name)
        );
    }

    html.push_str("</div>\n");
    html
}
