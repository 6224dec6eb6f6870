//! Icon sets.
//!
//! Components never hard-code icon markup. They ask an [`IconSet`] for an
//! [`Icon`] and a CSS class, so the same component can emit icon-library
//! placeholders ([`LucideIcons`]) or self-contained SVG ([`InlineSvgIcons`]).

use crate::html::escape_html;

/// Icons used by the docs UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    /// Circle with an "i".
    Info,
    /// Warning triangle.
    TriangleAlert,
    /// Circle with a cross.
    CircleX,
    /// Circle with a check mark.
    CircleCheck,
    ChevronDown,
    Search,
    Settings,
    Sun,
    Moon,
    Menu,
    ExternalLink,
}

impl Icon {
    /// Every icon, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Info,
        Self::TriangleAlert,
        Self::CircleX,
        Self::CircleCheck,
        Self::ChevronDown,
        Self::Search,
        Self::Settings,
        Self::Sun,
        Self::Moon,
        Self::Menu,
        Self::ExternalLink,
    ];

    /// Lucide identifier of the icon.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::TriangleAlert => "triangle-alert",
            Self::CircleX => "circle-x",
            Self::CircleCheck => "circle-check",
            Self::ChevronDown => "chevron-down",
            Self::Search => "search",
            Self::Settings => "settings",
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Menu => "menu",
            Self::ExternalLink => "external-link",
        }
    }

    /// Look up an icon by its Lucide identifier.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.name() == name)
    }

    fn svg_path(self) -> &'static str {
        match self {
            Self::Info => "M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
            Self::TriangleAlert => {
                "M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z"
            }
            Self::CircleX => "M10 14l2-2m0 0l2-2m-2 2l-2-2m2 2l2 2m7-2a9 9 0 11-18 0 9 9 0 0118 0z",
            Self::CircleCheck => "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
            Self::ChevronDown => "M19 9l-7 7-7-7",
            Self::Search => "M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z",
            Self::Settings => {
                "M10.325 4.317c.426-1.756 2.924-1.756 3.35 0a1.724 1.724 0 002.573 1.066c1.543-.94 3.31.826 2.37 2.37a1.724 1.724 0 001.065 2.572c1.756.426 1.756 2.924 0 3.35a1.724 1.724 0 00-1.066 2.573c.94 1.543-.826 3.31-2.37 2.37a1.724 1.724 0 00-2.572 1.065c-.426 1.756-2.924 1.756-3.35 0a1.724 1.724 0 00-2.573-1.066c-1.543.94-3.31-.826-2.37-2.37a1.724 1.724 0 00-1.065-2.572c-1.756-.426-1.756-2.924 0-3.35a1.724 1.724 0 001.066-2.573c-.94-1.543.826-3.31 2.37-2.37.996.608 2.296.07 2.572-1.065zM15 12a3 3 0 11-6 0 3 3 0 016 0z"
            }
            Self::Sun => {
                "M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z"
            }
            Self::Moon => {
                "M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z"
            }
            Self::Menu => "M4 6h16M4 12h16M4 18h16",
            Self::ExternalLink => {
                "M10 6H6a2 2 0 00-2 2v10a2 2 0 002 2h10a2 2 0 002-2v-4M14 4h6m0 0v6m0-6L10 14"
            }
        }
    }
}

/// Source of icon markup.
pub trait IconSet: Send + Sync {
    /// Markup for `icon` carrying the CSS `class`.
    fn icon(&self, icon: Icon, class: &str) -> String;

    /// Markup for a free-form icon name taken from content (e.g. a page
    /// tree node). Returns `None` when the set cannot draw it.
    fn named(&self, name: &str, class: &str) -> Option<String> {
        Icon::from_name(name).map(|icon| self.icon(icon, class))
    }
}

/// Lucide placeholders, replaced client-side by the icon library.
#[derive(Clone, Copy, Debug, Default)]
pub struct LucideIcons;

impl IconSet for LucideIcons {
    fn icon(&self, icon: Icon, class: &str) -> String {
        placeholder(icon.name(), class)
    }

    fn named(&self, name: &str, class: &str) -> Option<String> {
        if name.is_empty() {
            return None;
        }
        Some(placeholder(name, class))
    }
}

fn placeholder(name: &str, class: &str) -> String {
    format!(
        r#"<i data-lucide="{}" class="{}" aria-hidden="true"></i>"#,
        escape_html(name),
        escape_html(class)
    )
}

/// Self-contained 24x24 outline SVG icons.
#[derive(Clone, Copy, Debug, Default)]
pub struct InlineSvgIcons;

impl IconSet for InlineSvgIcons {
    fn icon(&self, icon: Icon, class: &str) -> String {
        format!(
            r#"<svg class="{}" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="{}"></path></svg>"#,
            escape_html(class),
            icon.svg_path()
        )
    }
}
