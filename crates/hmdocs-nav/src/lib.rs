//! Navigation page tree for hmdocs.
//!
//! The page tree is produced by the content indexer and consumed here as a
//! closed sum type: every node is a [`Page`], a [`Folder`] or a
//! [`Separator`]. Consumers match on [`Node`] exhaustively.
//!
//! Two views are derived from the tree:
//!
//! - [`flatten`]: the ordered sequence of navigable pages, used for
//!   previous/next links via [`Neighbors`]
//! - the sidebar, rendered by `hmdocs-layout`
//!
//! # Example
//!
//! ```
//! use hmdocs_nav::{Neighbors, Root, flatten};
//!
//! let root = Root::from_json(r#"{
//!     "name": "Docs",
//!     "children": [
//!         {"type": "page", "name": "Intro", "url": "/docs"},
//!         {"type": "page", "name": "Setup", "url": "/docs/setup"}
//!     ]
//! }"#).unwrap();
//!
//! let pages = flatten(&root.children);
//! let neighbors = Neighbors::find(&pages, "/docs");
//! assert!(neighbors.previous.is_none());
//! assert_eq!(neighbors.next.map(|p| p.name.as_str()), Some("Setup"));
//! ```

mod flatten;
mod tree;

pub use flatten::{Neighbors, flatten};
pub use tree::{Folder, Node, Page, Root, Separator, TreeError};
