//! HTML rendering building blocks for hmdocs.
//!
//! - [`escape_html`] and [`slugify`] for text that lands in markup
//! - [`IconSet`] with [`LucideIcons`] and [`InlineSvgIcons`]
//! - [`CalloutRenderer`] for admonition blocks
//! - [`MarkdownRenderer`] for whole pages, including `:::callout` containers
//!   and the table of contents
//!
//! # Example
//!
//! ```
//! use hmdocs_renderer::{CalloutRenderer, InlineSvgIcons};
//!
//! let html = CalloutRenderer::new(&InlineSvgIcons).render(Some("success"), None, "<p>Done</p>");
//! assert!(html.contains("Success"));
//! ```

mod callout;
pub mod directive;
mod html;
mod icons;
mod markdown;

pub use callout::{CalloutKind, CalloutRenderer};
pub use html::{escape_html, slugify};
pub use icons::{Icon, IconSet, InlineSvgIcons, LucideIcons};
pub use markdown::{MarkdownRenderer, RenderedPage, TocItem};
