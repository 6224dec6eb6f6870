//! Site header and docs banner.

use std::fmt::Write;

use hmdocs_renderer::{Icon, IconSet, escape_html};

/// Site identity shown in the page chrome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteInfo {
    pub title: String,
    /// Repository URL, without a trailing slash.
    pub repository: String,
    /// Branch the docs were built from.
    pub branch: String,
    /// Commit the docs were built from.
    pub commit: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "Hytale Modding".to_owned(),
            repository: "https://github.com/HytaleModding/site".to_owned(),
            branch: "main".to_owned(),
            commit: "unknown".to_owned(),
        }
    }
}

/// Top navigation bar.
#[must_use]
pub fn header(site: &SiteInfo, icons: &dyn IconSet) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str("<header class=\"sticky top-0 z-50 border-b border-[#1A1A1C] bg-[#111114]\">\n");
    html.push_str("<nav class=\"flex h-[72px] items-center justify-between px-6\">\n");
    let _ = writeln!(
        html,
        "<div class=\"flex items-center gap-8\"><a href=\"/\" class=\"text-primary text-base font-bold\">{}</a></div>",
        escape_html(&site.title)
    );

    html.push_str("<div class=\"flex items-center gap-3\">\n");
    html.push_str(
        "<div class=\"absolute left-1/2 transform -translate-x-1/2 bg-coral-400 hidden items-center gap-2 \
         rounded-full px-4 py-1.5 md:flex\">",
    );
    html.push_str(&icons.icon(Icon::TriangleAlert, "h-3.5 w-3.5 text-red-800"));
    html.push_str("<span class=\"text-xs font-medium text-red-800\">Documentation in Progress!</span>");
    let _ = write!(
        html,
        "<span class=\"text-[10px] text-red-700\">documentation @ {}</span></div>\n",
        escape_html(&site.commit)
    );
    html.push_str(
        "<button type=\"button\" data-sidebar-open aria-label=\"Open menu\" class=\"text-primary p-2 md:hidden\">",
    );
    html.push_str(&icons.icon(Icon::Menu, "h-5 w-5"));
    html.push_str("</button>\n</div>\n</nav>\n</header>\n");
    html
}

/// Link to the branch the docs were built from.
#[must_use]
pub fn docs_banner(site: &SiteInfo, icons: &dyn IconSet) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<a href=\"{}/tree/{}\" class=\"mt-4 flex items-center gap-2 rounded-md border p-2\">",
        escape_html(site.repository.trim_end_matches('/')),
        escape_html(&site.branch)
    );
    html.push_str(&icons.icon(Icon::ExternalLink, "size-4"));
    let _ = write!(
        html,
        "<span>{}</span><span class=\"text-muted-foreground\">@ {}</span></a>\n",
        escape_html(&site.branch),
        escape_html(&site.commit)
    );
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use hmdocs_renderer::LucideIcons;

    fn site() -> SiteInfo {
        SiteInfo {
            commit: "2de03df".to_owned(),
            branch: "feature/x".to_owned(),
            ..SiteInfo::default()
        }
    }

    #[test]
    fn test_header_badge() {
        let html = header(&site(), &LucideIcons);

        assert!(html.contains(">Hytale Modding</a>"));
        assert!(html.contains("Documentation in Progress!"));
        assert!(html.contains("documentation @ 2de03df"));
        assert!(html.contains(r#"data-lucide="menu""#));
    }

    #[test]
    fn test_banner_links_to_branch() {
        let html = docs_banner(&site(), &LucideIcons);

        assert!(html.contains(r#"href="https://github.com/HytaleModding/site/tree/feature/x""#));
        assert!(html.contains("<span>feature/x</span>"));
        assert!(html.contains("@ 2de03df</span>"));
    }

    #[test]
    fn test_banner_trims_trailing_slash() {
        let site = SiteInfo {
            repository: "https://example.com/repo/".to_owned(),
            ..SiteInfo::default()
        };
        assert!(docs_banner(&site, &LucideIcons).contains(r#"href="https://example.com/repo/tree/main""#));
    }
}
