//! Markdown page rendering.
//!
//! Pages are `CommonMark` with tables, strikethrough and task lists, plus
//! `:::callout` containers. Rendering happens in three steps:
//!
//! 1. Callout containers are cut out of the source, their bodies rendered
//!    recursively, and each is replaced by an HTML comment placeholder.
//! 2. The remaining Markdown goes through `pulldown-cmark`. Headings get
//!    unique slug ids and are collected into the table of contents.
//! 3. Placeholders are swapped for the rendered callout HTML.

use std::collections::{HashMap, HashSet};

use pulldown_cmark::{CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::callout::CalloutRenderer;
use crate::directive::{Block, split_blocks};
use crate::html::slugify;
use crate::icons::IconSet;

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocItem {
    /// Heading text.
    pub title: String,
    /// In-page link, `#` followed by the heading id.
    pub url: String,
    /// Heading level (2-6).
    pub depth: u8,
}

impl TocItem {
    /// Heading id without the leading `#`.
    #[must_use]
    pub fn anchor(&self) -> &str {
        self.url.strip_prefix('#').unwrap_or(&self.url)
    }
}

/// Result of rendering one page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderedPage {
    /// Page body HTML.
    pub html: String,
    /// Text of the first H1, if any.
    pub title: Option<String>,
    /// Headings of level 2 and deeper, in document order.
    pub toc: Vec<TocItem>,
    /// Non-fatal problems found while rendering.
    pub warnings: Vec<String>,
}

/// Markdown to HTML renderer.
///
/// ```
/// use hmdocs_renderer::{LucideIcons, MarkdownRenderer};
///
/// let page = MarkdownRenderer::new(&LucideIcons).render("# Intro\n\n## Setup\n");
/// assert_eq!(page.title.as_deref(), Some("Intro"));
/// assert_eq!(page.toc[0].url, "#setup");
/// ```
pub struct MarkdownRenderer<'a> {
    callouts: CalloutRenderer<'a>,
}

#[derive(Default)]
struct RenderState {
    title: Option<String>,
    toc: Vec<TocItem>,
    warnings: Vec<String>,
    id_counts: HashMap<String, usize>,
    used_ids: HashSet<String>,
}

impl RenderState {
    fn unique_id(&mut self, base: String) -> String {
        let base = if base.is_empty() {
            "section".to_owned()
        } else {
            base
        };
        let mut n = self.id_counts.get(&base).copied().unwrap_or_default();
        let id = loop {
            let candidate = match n {
                0 => base.clone(),
                k => format!("{base}-{k}"),
            };
            n += 1;
            // A literal "Setup 1" heading may already own "setup-1".
            if !self.used_ids.contains(&candidate) {
                break candidate;
            }
        };
        self.id_counts.insert(base, n);
        self.used_ids.insert(id.clone());
        id
    }
}

impl<'a> MarkdownRenderer<'a> {
    #[must_use]
    pub fn new(icons: &'a dyn IconSet) -> Self {
        Self {
            callouts: CalloutRenderer::new(icons),
        }
    }

    /// Render a full page.
    #[must_use]
    pub fn render(&self, source: &str) -> RenderedPage {
        let mut state = RenderState::default();
        let html = self.render_fragment(source, &mut state, true);

        for warning in &state.warnings {
            tracing::warn!("{warning}");
        }

        RenderedPage {
            html,
            title: state.title,
            toc: state.toc,
            warnings: state.warnings,
        }
    }

    fn render_fragment(&self, source: &str, state: &mut RenderState, top_level: bool) -> String {
        let mut markdown = String::with_capacity(source.len());
        let mut callouts = Vec::new();

        for block in split_blocks(source, &mut state.warnings) {
            match block {
                Block::Markdown(text) => markdown.push_str(&text),
                Block::Callout { args, body, line } => {
                    tracing::trace!(line, "rendering callout");
                    let body_html = self.render_fragment(&body, state, false);
                    let title = args
                        .get("title")
                        .or_else(|| Some(args.content.as_str()).filter(|c| !c.is_empty()));
                    markdown.push('\n');
                    markdown.push_str(&placeholder(callouts.len()));
                    markdown.push_str("\n\n");
                    callouts.push(self.callouts.render(args.get("type"), title, &body_html));
                }
            }
        }

        let mut html = render_markdown(&markdown, state, top_level);
        for (idx, callout) in callouts.iter().enumerate() {
            html = html.replace(&placeholder(idx), callout);
        }
        html
    }
}

fn placeholder(idx: usize) -> String {
    format!("<!-- hmdocs:callout:{idx} -->")
}

fn options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES
}

fn render_markdown(markdown: &str, state: &mut RenderState, top_level: bool) -> String {
    let mut events: Vec<Event<'_>> = Parser::new_ext(markdown, options()).collect();

    for i in 0..events.len() {
        let Event::Start(Tag::Heading { level, id, .. }) = &events[i] else {
            continue;
        };
        let level = heading_level_to_num(*level);
        let explicit = id.as_ref().map(ToString::to_string);
        let text = heading_text(&events[i + 1..]);
        let id = state.unique_id(explicit.unwrap_or_else(|| slugify(&text)));

        if top_level {
            if level == 1 {
                if state.title.is_none() {
                    state.title = Some(text.clone());
                }
            } else {
                state.toc.push(TocItem {
                    title: text,
                    url: format!("#{id}"),
                    depth: level,
                });
            }
        }

        if let Event::Start(Tag::Heading { id: slot, .. }) = &mut events[i] {
            *slot = Some(CowStr::from(id));
        }
    }

    let mut html = String::with_capacity(markdown.len() * 3 / 2);
    pulldown_cmark::html::push_html(&mut html, events.into_iter());
    html
}

/// Plain text of a heading, read from the events after its start tag.
fn heading_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::End(TagEnd::Heading(_)) => break,
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            _ => {}
        }
    }
    text.trim().to_owned()
}

fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
