//! Callout blocks.
//!
//! A callout is a left-accented admonition with an icon, a title and a body.
//! Authors pick the flavor with a `type` tag. An unrecognized tag does not
//! fail the render; it produces a visible error block instead so the mistake
//! shows up on the page.

use std::fmt;

use crate::html::escape_html;
use crate::icons::{Icon, IconSet};

const CODE_CLASS: &str = "rounded bg-red-100 px-1 py-0.5 font-mono dark:bg-red-900";

/// Canonical callout flavors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CalloutKind {
    Info,
    Warning,
    Danger,
    Success,
}

impl CalloutKind {
    /// Parse an author-supplied type tag.
    ///
    /// Tags are case-sensitive and must be lowercase. `error` is accepted as
    /// an alias for [`CalloutKind::Danger`].
    ///
    /// ```
    /// use hmdocs_renderer::CalloutKind;
    ///
    /// assert_eq!(CalloutKind::parse("error"), Some(CalloutKind::Danger));
    /// assert_eq!(CalloutKind::parse("Warning"), None);
    /// ```
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "info" => Some(Self::Info),
            "warning" => Some(Self::Warning),
            "danger" | "error" => Some(Self::Danger),
            "success" => Some(Self::Success),
            _ => None,
        }
    }

    /// Canonical tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Success => "success",
        }
    }

    /// Title used when the author supplies none.
    #[must_use]
    pub fn default_title(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Danger => "Danger",
            Self::Success => "Success",
        }
    }

    /// Icon drawn next to the title.
    #[must_use]
    pub fn icon(self) -> Icon {
        match self {
            Self::Info => Icon::Info,
            Self::Warning => Icon::TriangleAlert,
            Self::Danger => Icon::CircleX,
            Self::Success => Icon::CircleCheck,
        }
    }

    fn style(self) -> &'static str {
        match self {
            Self::Info => {
                "bg-blue-50 dark:bg-blue-950/50 border-blue-200 dark:border-blue-800 text-blue-900 dark:text-blue-100"
            }
            Self::Warning => {
                "bg-yellow-50 dark:bg-yellow-950/50 border-yellow-200 dark:border-yellow-800 text-yellow-900 dark:text-yellow-100"
            }
            Self::Danger => {
                "bg-red-50 dark:bg-red-950/50 border-red-200 dark:border-red-800 text-red-900 dark:text-red-100"
            }
            Self::Success => {
                "bg-green-50 dark:bg-green-950/50 border-green-200 dark:border-green-800 text-green-900 dark:text-green-100"
            }
        }
    }
}

impl fmt::Display for CalloutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders callout blocks with a pluggable [`IconSet`].
pub struct CalloutRenderer<'a> {
    icons: &'a dyn IconSet,
}

impl<'a> CalloutRenderer<'a> {
    #[must_use]
    pub fn new(icons: &'a dyn IconSet) -> Self {
        Self { icons }
    }

    /// Render a callout.
    ///
    /// `tag` defaults to `info` when absent. An empty `title` falls back to
    /// the kind's default title. `body_html` is inserted as-is.
    #[must_use]
    pub fn render(&self, tag: Option<&str>, title: Option<&str>, body_html: &str) -> String {
        let tag = tag.unwrap_or("info");
        match CalloutKind::parse(tag) {
            Some(kind) => self.render_valid(kind, title, body_html),
            None => {
                tracing::debug!(tag, "invalid callout type");
                self.render_invalid(tag, body_html)
            }
        }
    }

    fn render_valid(&self, kind: CalloutKind, title: Option<&str>, body_html: &str) -> String {
        let title = title
            .filter(|t| !t.is_empty())
            .unwrap_or(kind.default_title());

        let mut html = String::new();
        html.push_str(r#"<div class="my-4 rounded-r-lg border-l-4 p-4 "#);
        html.push_str(kind.style());
        html.push_str(r#"" data-callout=""#);
        html.push_str(kind.as_str());
        html.push_str(r#""><div class="flex gap-3">"#);
        html.push_str(&self.icons.icon(kind.icon(), "mt-0.5 h-5 w-5 shrink-0"));
        html.push_str(r#"<div class="min-w-0 flex-1"><div class="mb-1 font-semibold">"#);
        html.push_str(&escape_html(title));
        html.push_str("</div><div>");
        html.push_str(body_html);
        html.push_str("</div></div></div></div>");
        html
    }

    fn render_invalid(&self, tag: &str, body_html: &str) -> String {
        let code = |s: &str| format!(r#"<code class="{CODE_CLASS}">{s}</code>"#);

        let mut html = String::new();
        html.push_str(r#"<div class="my-4 rounded-lg border-2 border-dashed border-red-500 bg-red-50 p-4 dark:bg-red-950/50" data-callout-error=""><div class="flex gap-3">"#);
        html.push_str(&self.icons.icon(
            Icon::CircleX,
            "mt-0.5 h-5 w-5 shrink-0 text-red-600 dark:text-red-400",
        ));
        html.push_str(r#"<div class="min-w-0 flex-1">"#);
        html.push_str(r#"<div class="mb-1 font-semibold text-red-700 dark:text-red-300">Invalid Callout Type</div>"#);
        html.push_str(r#"<div class="text-sm text-red-600 dark:text-red-400"><p class="mb-2">Received "#);
        html.push_str(&code(&format!("type=&quot;{}&quot;", escape_html(tag))));
        html.push_str(r#" but expected one of:</p><ul class="ml-4 list-disc">"#);
        for kind in [
            CalloutKind::Info,
            CalloutKind::Warning,
            CalloutKind::Danger,
            CalloutKind::Success,
        ] {
            html.push_str("<li>");
            html.push_str(&code(kind.as_str()));
            if kind == CalloutKind::Danger {
                html.push_str(" (or ");
                html.push_str(&code("error"));
                html.push(')');
            }
            html.push_str("</li>");
        }
        html.push_str(r#"</ul><p class="mt-2 text-xs">Note: Types are case-sensitive and must be lowercase.</p></div>"#);

        if !body_html.trim().is_empty() {
            html.push_str(r#"<div class="mt-3 border-t border-red-300 pt-3 dark:border-red-700">"#);
            html.push_str(r#"<div class="text-xs font-medium text-red-600 dark:text-red-400">Original content:</div>"#);
            html.push_str(r#"<div class="mt-1 text-red-700 dark:text-red-300">"#);
            html.push_str(body_html);
            html.push_str("</div></div>");
        }

        html.push_str("</div></div></div>");
        html
    }
}
