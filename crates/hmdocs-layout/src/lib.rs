//! Docs UI layout for hmdocs.
//!
//! Server-rendered HTML for the pieces around a page's content: the sidebar
//! navigation, the table of contents, previous/next links, the header and
//! the docs banner. [`render_document`] puts them together.
//!
//! Components take their collaborators as arguments. The sidebar reads and
//! writes folder state through a [`hmdocs_state::StateStore`] and draws
//! icons through a [`hmdocs_renderer::IconSet`].

mod chrome;
mod document;
mod footer;
mod page;
mod sidebar;
mod toc;

pub use chrome::{SiteInfo, docs_banner, header};
pub use document::{DocumentParts, render_document};
pub use footer::render_footer;
pub use page::{DocsPage, docs_body, docs_description, docs_title};
pub use sidebar::{Sidebar, SidebarOptions};
pub use toc::{render_toc, render_toc_item};
