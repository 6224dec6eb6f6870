//! Docs page building blocks.

use hmdocs_nav::Neighbors;
use hmdocs_renderer::{TocItem, escape_html};

use crate::footer::render_footer;
use crate::toc::render_toc;

/// Page title heading.
#[must_use]
pub fn docs_title(title: &str) -> String {
    format!(
        "<h1 class=\"from-text-gradient-start to-text-gradient-end bg-gradient-to-t bg-clip-text text-5xl font-bold\" \
         style=\"-webkit-text-fill-color: transparent\">{}</h1>\n",
        escape_html(title)
    )
}

/// Page description paragraph. Renders nothing without a description.
#[must_use]
pub fn docs_description(description: Option<&str>) -> String {
    description.map_or_else(String::new, |text| {
        format!(
            "<p class=\"text-text-muted text-xs\">{}</p>\n",
            escape_html(text)
        )
    })
}

/// Prose container around rendered Markdown.
#[must_use]
pub fn docs_body(content_html: &str) -> String {
    format!(
        "<div class=\"prose text-text-primary max-w-none \
         [&_a]:from-text-gradient-start [&_a]:to-text-gradient-end [&_a]:bg-gradient-to-t [&_a]:bg-clip-text [&_a]:font-bold \
         [&_blockquote]:border-l-4 [&_blockquote]:border-orange-300 [&_blockquote]:pl-4 [&_blockquote]:text-stone-400 [&_blockquote]:italic \
         [&_pre]:bg-surface [&_pre]:rounded-lg [&_pre]:p-4 \
         [&_code]:font-[&quot;Azeret_Mono&quot;] [&_code]:text-xs\">\n{content_html}</div>\n"
    )
}

/// Article column with the prev/next footer and an optional TOC column.
pub struct DocsPage<'a> {
    toc: &'a [TocItem],
    active_anchors: &'a [String],
    neighbors: Neighbors<'a>,
}

impl<'a> DocsPage<'a> {
    #[must_use]
    pub fn new(toc: &'a [TocItem], neighbors: Neighbors<'a>) -> Self {
        Self {
            toc,
            active_anchors: &[],
            neighbors,
        }
    }

    /// Anchors to highlight in the TOC.
    #[must_use]
    pub fn with_active_anchors(mut self, anchors: &'a [String]) -> Self {
        self.active_anchors = anchors;
        self
    }

    /// Wrap `children` (already rendered HTML) in the page layout.
    #[must_use]
    pub fn render(&self, children: &str) -> String {
        let mut html = String::with_capacity(children.len() + 2048);
        html.push_str("<div class=\"flex flex-1\">\n");
        html.push_str("<article class=\"flex-1 max-w-[860px] mx-auto px-8 py-12\">\n");
        html.push_str(children);
        html.push_str(&render_footer(&self.neighbors));
        html.push_str("</article>\n");
        html.push_str(&render_toc(self.toc, self.active_anchors));
        html.push_str("</div>\n");
        html
    }
}
