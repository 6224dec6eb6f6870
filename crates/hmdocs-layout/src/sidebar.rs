//! Sidebar navigation.
//!
//! Folders remember whether they are expanded through an injected
//! [`StateStore`]. Each folder reads its own `sidebar-<id>` key when it is
//! rendered; a collapsed folder's children are left out of the output.

use std::fmt::Write;

use hmdocs_nav::{Folder, Node, Page, Root, Separator};
use hmdocs_renderer::{Icon, IconSet, escape_html};
use hmdocs_state::{ExpandState, StateStore};

const LINK_BASE: &str = "flex items-center gap-2 rounded-lg px-2 py-1.5 text-sm transition-colors";
const ACTIVE_DOT: &str = r#"<div class="h-1.5 w-1.5 rounded-full bg-orange-200"></div>"#;
const NODE_ICON_CLASS: &str = "h-4 w-4";

/// Options for the sidebar chrome around the navigation list.
#[derive(Clone, Debug)]
pub struct SidebarOptions {
    /// Heading shown above the navigation.
    pub title: String,
    /// Show the search button.
    pub search_enabled: bool,
    /// Sidebar is open on small screens.
    pub mobile_open: bool,
}

impl Default for SidebarOptions {
    fn default() -> Self {
        Self {
            title: "Hytale Modding".to_owned(),
            search_enabled: true,
            mobile_open: false,
        }
    }
}

/// Sidebar renderer over a page tree.
pub struct Sidebar<'a> {
    root: &'a Root,
    store: &'a dyn StateStore,
    icons: &'a dyn IconSet,
}

impl<'a> Sidebar<'a> {
    #[must_use]
    pub fn new(root: &'a Root, store: &'a dyn StateStore, icons: &'a dyn IconSet) -> Self {
        Self { root, store, icons }
    }

    /// The page tree being rendered.
    #[must_use]
    pub fn root(&self) -> &'a Root {
        self.root
    }

    /// Current expand state of a folder.
    #[must_use]
    pub fn folder_state(&self, folder: &Folder) -> ExpandState {
        ExpandState::load_or(self.store, &folder.id, default_state(folder))
    }

    /// Flip the folder `folder_id` and persist the new state.
    ///
    /// Returns `None` when the tree has no such folder.
    pub fn toggle(&self, folder_id: &str) -> Option<ExpandState> {
        let folder = self.root.folder_by_id(folder_id)?;
        let next = ExpandState::toggle_or(self.store, folder_id, default_state(folder));
        tracing::debug!(folder = folder_id, expanded = next.is_expanded(), "toggled folder");
        Some(next)
    }

    /// Render the navigation items for `current_url`.
    #[must_use]
    pub fn render_items(&self, current_url: &str) -> String {
        let mut html = String::new();
        self.render_nodes(&mut html, &self.root.children, current_url);
        html
    }

    /// Render the full sidebar: header, search, navigation and footer.
    #[must_use]
    pub fn render(&self, current_url: &str, options: &SidebarOptions) -> String {
        let mut html = String::with_capacity(4096);

        html.push_str(
            "<aside class=\"bg-background fixed top-[72px] left-0 z-40 h-[calc(100vh-72px)] \
             w-[320px] overflow-y-auto border-r border-[#1A1A1C] transition-transform md:sticky",
        );
        if !options.mobile_open {
            html.push_str(" max-md:-translate-x-full");
        }
        html.push_str("\" data-sidebar>\n<div class=\"flex h-full flex-col gap-4 p-6\">\n");

        let _ = writeln!(
            html,
            "<div class=\"border-b-2 border-orange-300 pb-3\"><h2 class=\"text-primary text-base font-bold\">{}</h2></div>",
            escape_html(&options.title)
        );

        if options.search_enabled {
            self.render_search(&mut html);
        }

        html.push_str("<nav class=\"flex flex-1 flex-col gap-2\">\n");
        self.render_nodes(&mut html, &self.root.children, current_url);
        html.push_str("</nav>\n");

        self.render_settings(&mut html);

        html.push_str("</div>\n</aside>\n");

        if options.mobile_open {
            html.push_str(
                "<div class=\"fixed inset-0 z-30 bg-black/50 md:hidden\" data-sidebar-close></div>\n",
            );
        }

        html
    }

    fn render_search(&self, html: &mut String) {
        html.push_str(
            "<button type=\"button\" data-search-trigger class=\"flex items-center justify-between \
             rounded-lg bg-orange-900 px-3 py-2 transition-colors hover:bg-[#3d2f21]\">",
        );
        html.push_str("<div class=\"flex items-center gap-2\">");
        html.push_str(&self.icons.icon(Icon::Search, "h-3.5 w-3.5 text-orange-300"));
        html.push_str("<span class=\"text-xs text-orange-300\">Search...</span></div>");
        html.push_str("<div class=\"flex gap-1\">");
        for key in ["CTRL", "K"] {
            let _ = write!(
                html,
                "<kbd class=\"rounded bg-orange-950 px-2 py-1 text-[10px] text-orange-200\">{key}</kbd>"
            );
        }
        html.push_str("</div></button>\n");
    }

    fn render_settings(&self, html: &mut String) {
        let class = "h-3.5 w-3.5 text-orange-300";
        html.push_str("<div class=\"flex items-center justify-between border-t border-[#1A1A1C] pt-4\">");
        html.push_str(
            "<button type=\"button\" aria-label=\"Settings\" class=\"rounded-full bg-orange-800 p-2 \
             transition-colors hover:bg-[#654630]\">",
        );
        html.push_str(&self.icons.icon(Icon::Settings, class));
        html.push_str("</button>");
        html.push_str("<div class=\"flex gap-1 rounded-full bg-[#1A1A1C] p-0.5\">");
        html.push_str(
            "<button type=\"button\" aria-label=\"Light theme\" data-theme=\"light\" \
             class=\"rounded-full p-2 transition-colors hover:bg-orange-800\">",
        );
        html.push_str(&self.icons.icon(Icon::Sun, class));
        html.push_str("</button>");
        html.push_str(
            "<button type=\"button\" aria-label=\"Dark theme\" data-theme=\"dark\" \
             class=\"rounded-full bg-orange-800 p-2 transition-colors hover:bg-[#654630]\">",
        );
        html.push_str(&self.icons.icon(Icon::Moon, class));
        html.push_str("</button></div></div>\n");
    }

    fn render_nodes(&self, html: &mut String, nodes: &[Node], current_url: &str) {
        for node in nodes {
            match node {
                Node::Page(page) => self.render_page(html, page, current_url),
                Node::Separator(separator) => self.render_separator(html, separator),
                Node::Folder(folder) => self.render_folder(html, folder, current_url),
            }
        }
    }

    fn node_icon(&self, name: Option<&str>) -> String {
        name.and_then(|name| self.icons.named(name, NODE_ICON_CLASS))
            .unwrap_or_default()
    }

    fn render_page(&self, html: &mut String, page: &Page, current_url: &str) {
        let active = page.url == current_url;

        let _ = write!(html, "<a href=\"{}\" class=\"{LINK_BASE} ", escape_html(&page.url));
        html.push_str(if active {
            "bg-orange-900 font-medium text-orange-300\" aria-current=\"page\""
        } else {
            "text-orange-200 hover:bg-[#1A1A1C] hover:text-orange-300\""
        });
        if page.external {
            html.push_str(" target=\"_blank\" rel=\"noreferrer noopener\"");
        }
        html.push('>');
        if active {
            html.push_str(ACTIVE_DOT);
        }
        html.push_str(&self.node_icon(page.icon.as_deref()));
        html.push_str(&escape_html(&page.name));
        html.push_str("</a>\n");
    }

    fn render_separator(&self, html: &mut String, separator: &Separator) {
        html.push_str("<p class=\"text-muted mt-4 mb-2 text-xs font-medium first:mt-0\">");
        html.push_str(&self.node_icon(separator.icon.as_deref()));
        html.push_str(&escape_html(&separator.name));
        html.push_str("</p>\n");
    }

    fn render_folder(&self, html: &mut String, folder: &Folder, current_url: &str) {
        let state = self.folder_state(folder);
        let id = escape_html(&folder.id);
        let expanded = state.is_expanded();
        let rotate = if expanded { " rotate-180" } else { "" };

        let _ = writeln!(html, "<div class=\"flex flex-col\" data-folder=\"{id}\">");

        if let Some(index) = &folder.index {
            let active = index.url == current_url;

            // Link and toggle are siblings so following the link never toggles.
            html.push_str("<div class=\"flex items-center gap-1\">");
            let _ = write!(
                html,
                "<a href=\"{}\" class=\"flex flex-1 items-center gap-2 rounded-lg px-2 py-1.5 text-sm transition-colors ",
                escape_html(&index.url)
            );
            html.push_str(if active {
                "font-medium text-orange-300\" aria-current=\"page\">"
            } else {
                "text-orange-200 hover:text-orange-300\">"
            });
            html.push_str(&self.node_icon(folder.icon.as_deref()));
            html.push_str(&escape_html(&index.name));
            html.push_str("</a>");
            let _ = write!(
                html,
                "<button type=\"button\" data-sidebar-toggle=\"{id}\" aria-expanded=\"{expanded}\" \
                 aria-label=\"Toggle folder\" class=\"rounded p-1 transition-colors hover:bg-[#1A1A1C]\">"
            );
            html.push_str(&self.icons.icon(
                Icon::ChevronDown,
                &format!("h-3 w-3 text-orange-200 transition-transform duration-200{rotate}"),
            ));
            html.push_str("</button></div>\n");
        } else {
            let _ = write!(
                html,
                "<button type=\"button\" data-sidebar-toggle=\"{id}\" aria-expanded=\"{expanded}\" \
                 class=\"flex w-full items-center justify-between rounded-lg px-2 py-1.5 text-left text-sm \
                 font-medium text-orange-200 transition-colors hover:bg-[#1A1A1C] hover:text-orange-300\">"
            );
            html.push_str("<span class=\"flex items-center gap-2\">");
            html.push_str(&self.node_icon(folder.icon.as_deref()));
            html.push_str(&escape_html(&folder.name));
            html.push_str("</span>");
            html.push_str(&self.icons.icon(
                Icon::ChevronDown,
                &format!("h-3 w-3 transition-transform duration-200{rotate}"),
            ));
            html.push_str("</button>\n");
        }

        if expanded {
            html.push_str("<div class=\"relative mt-1 ml-4 flex flex-col gap-1 pl-3\">\n");
            html.push_str(
                "<div class=\"absolute top-0 bottom-0 left-0 w-[2px] rounded-full bg-orange-300\"></div>\n",
            );
            self.render_nodes(html, &folder.children, current_url);
            html.push_str("</div>\n");
        }

        html.push_str("</div>\n");
    }
}

/// State of a folder with nothing stored for it.
fn default_state(folder: &Folder) -> ExpandState {
    folder
        .default_open
        .map_or(ExpandState::Expanded, ExpandState::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hmdocs_renderer::LucideIcons;
    use hmdocs_state::{MemoryStore, NullStore};
    use pretty_assertions::assert_eq;

    fn page(name: &str, url: &str) -> Node {
        Node::Page(Page::new(name, url))
    }

    /// intro, [Guides], guides(index){ first, advanced{ deep } }
    fn sample_root() -> Root {
        Root {
            name: "Docs".to_owned(),
            children: vec![
                page("Introduction", "/docs"),
                Node::Separator(Separator::new("Guides")),
                Node::Folder(
                    Folder::new(
                        "guides",
                        "Guides",
                        vec![
                            page("First Mod", "/docs/guides/first"),
                            Node::Folder(Folder::new(
                                "advanced",
                                "Advanced",
                                vec![page("Deep Dive", "/docs/guides/advanced/deep")],
                            )),
                        ],
                    )
                    .with_index(Page::new("Guides Home", "/docs/guides")),
                ),
            ],
        }
    }

    fn render(root: &Root, store: &dyn StateStore, url: &str) -> String {
        Sidebar::new(root, store, &LucideIcons).render_items(url)
    }

    #[test]
    fn test_everything_expanded_by_default() {
        let root = sample_root();
        let html = render(&root, &NullStore, "/docs");

        assert!(html.contains("First Mod"));
        assert!(html.contains("Deep Dive"));
        assert_eq!(html.matches(r#"aria-expanded="true""#).count(), 2);
    }

    #[test]
    fn test_active_page_is_marked() {
        let root = sample_root();
        let html = render(&root, &NullStore, "/docs/guides/first");

        assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
        assert_eq!(html.matches(ACTIVE_DOT).count(), 1);
        let link_start = html.find(r#"<a href="/docs/guides/first""#).unwrap();
        let link = &html[link_start..link_start + html[link_start..].find("</a>").unwrap()];
        assert!(link.contains("bg-orange-900 font-medium text-orange-300"));
        assert!(link.contains(ACTIVE_DOT));
    }

    #[test]
    fn test_active_match_is_exact() {
        let root = sample_root();
        let html = render(&root, &NullStore, "/docs/");
        assert!(!html.contains("aria-current"));
    }

    #[test]
    fn test_folder_index_link_is_active() {
        let root = sample_root();
        let html = render(&root, &NullStore, "/docs/guides");

        assert!(html.contains(
            r#"<a href="/docs/guides" class="flex flex-1 items-center gap-2 rounded-lg px-2 py-1.5 text-sm transition-colors font-medium text-orange-300" aria-current="page">"#
        ));
    }

    #[test]
    fn test_separator_is_not_a_link() {
        let root = sample_root();
        let html = render(&root, &NullStore, "/docs");

        assert!(html.contains(
            r#"<p class="text-muted mt-4 mb-2 text-xs font-medium first:mt-0">Guides</p>"#
        ));
    }

    #[test]
    fn test_toggle_is_sibling_of_index_link() {
        let root = sample_root();
        let html = render(&root, &NullStore, "/docs");

        let link_start = html.find(r#"<a href="/docs/guides""#).unwrap();
        let link_end = link_start + html[link_start..].find("</a>").unwrap();
        let toggle = html.find(r#"data-sidebar-toggle="guides""#).unwrap();

        assert!(toggle > link_end);
        assert!(!html[link_start..link_end].contains("<button"));
        assert!(html.contains(r#"aria-label="Toggle folder""#));
    }

    #[test]
    fn test_folder_without_index_is_a_single_button() {
        let root = sample_root();
        let html = render(&root, &NullStore, "/docs");

        let start = html.find(r#"data-sidebar-toggle="advanced""#).unwrap();
        let button = &html[start..start + html[start..].find("</button>").unwrap()];
        assert!(button.contains("Advanced"));
        assert!(button.contains("w-full"));
    }

    #[test]
    fn test_collapsed_children_are_omitted() {
        let root = sample_root();
        let store = MemoryStore::new().with_entry("sidebar-guides", "false");

        let html = render(&root, &store, "/docs");

        assert!(html.contains("Guides Home"));
        assert!(!html.contains("First Mod"));
        assert!(!html.contains("Deep Dive"));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(!html.contains("rotate-180"));
    }

    #[test]
    fn test_nested_folder_reads_its_own_state() {
        let root = sample_root();
        let store = MemoryStore::new().with_entry("sidebar-advanced", "false");

        let html = render(&root, &store, "/docs");

        assert!(html.contains("First Mod"));
        assert!(html.contains("Advanced"));
        assert!(!html.contains("Deep Dive"));
    }

    #[test]
    fn test_toggle_persists_and_rerender_restores() {
        let root = sample_root();
        let store = MemoryStore::new();
        let sidebar = Sidebar::new(&root, &store, &LucideIcons);

        assert_eq!(sidebar.toggle("guides"), Some(ExpandState::Collapsed));
        assert_eq!(store.get("sidebar-guides").as_deref(), Some("false"));

        // A fresh renderer over the same store sees the collapsed folder.
        let remounted = Sidebar::new(&root, &store, &LucideIcons);
        assert!(!remounted.render_items("/docs").contains("First Mod"));

        assert_eq!(remounted.toggle("guides"), Some(ExpandState::Expanded));
        assert_eq!(store.get("sidebar-guides").as_deref(), Some("true"));
        assert!(remounted.render_items("/docs").contains("First Mod"));
    }

    #[test]
    fn test_toggle_unknown_folder() {
        let root = sample_root();
        let store = MemoryStore::new();
        let sidebar = Sidebar::new(&root, &store, &LucideIcons);

        assert_eq!(sidebar.toggle("missing"), None);
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_default_open_is_used_without_stored_state() {
        let mut folder = Folder::new("closed", "Closed", vec![page("Hidden", "/docs/hidden")]);
        folder.default_open = Some(false);
        let root = Root {
            name: String::new(),
            children: vec![Node::Folder(folder)],
        };

        assert!(!render(&root, &NullStore, "/docs").contains("Hidden"));

        let store = MemoryStore::new().with_entry("sidebar-closed", "true");
        assert!(render(&root, &store, "/docs").contains("Hidden"));
    }

    #[test]
    fn test_toggle_starts_from_default_open() {
        let mut folder = Folder::new("closed", "Closed", vec![page("Hidden", "/docs/hidden")]);
        folder.default_open = Some(false);
        let root = Root {
            name: String::new(),
            children: vec![Node::Folder(folder)],
        };
        let store = MemoryStore::new();
        let sidebar = Sidebar::new(&root, &store, &LucideIcons);
        assert!(!sidebar.render_items("/docs").contains("Hidden"));

        assert_eq!(sidebar.toggle("closed"), Some(ExpandState::Expanded));

        assert_eq!(store.get("sidebar-closed").as_deref(), Some("true"));
        assert!(sidebar.render_items("/docs").contains("Hidden"));
    }

    #[test]
    fn test_names_are_escaped_and_icons_rendered() {
        let mut intro = Page::new("<b>Intro</b>", "/docs");
        intro.icon = Some("book-open".to_owned());
        let root = Root {
            name: String::new(),
            children: vec![Node::Page(intro)],
        };

        let html = render(&root, &NullStore, "/x");

        assert!(html.contains("&lt;b&gt;Intro&lt;/b&gt;"));
        assert!(html.contains(r#"data-lucide="book-open""#));
    }

    #[test]
    fn test_external_page_opens_new_tab() {
        let mut external = Page::new("GitHub", "https://github.com/HytaleModding");
        external.external = true;
        let root = Root {
            name: String::new(),
            children: vec![Node::Page(external)],
        };

        assert!(render(&root, &NullStore, "/docs").contains(r#"target="_blank""#));
    }

    #[test]
    fn test_chrome_with_search_and_mobile_overlay() {
        let root = sample_root();
        let sidebar = Sidebar::new(&root, &NullStore, &LucideIcons);
        let options = SidebarOptions {
            mobile_open: true,
            ..SidebarOptions::default()
        };

        let html = sidebar.render("/docs", &options);

        assert!(html.contains(">Hytale Modding</h2>"));
        assert!(html.contains("Search..."));
        assert!(html.contains(">CTRL</kbd>"));
        assert!(html.contains(">K</kbd>"));
        assert!(html.contains("data-sidebar-close"));
        assert!(!html.contains("max-md:-translate-x-full"));
        assert!(html.contains(r#"data-lucide="sun""#));
        assert!(html.contains(r#"data-lucide="moon""#));
    }

    #[test]
    fn test_chrome_without_search_and_closed() {
        let root = sample_root();
        let sidebar = Sidebar::new(&root, &NullStore, &LucideIcons);
        let options = SidebarOptions {
            search_enabled: false,
            ..SidebarOptions::default()
        };

        let html = sidebar.render("/docs", &options);

        assert!(!html.contains("Search..."));
        assert!(!html.contains("data-sidebar-close"));
        assert!(html.contains("max-md:-translate-x-full"));
    }
}
