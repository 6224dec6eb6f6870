//! Flattening the page tree into a reading order.

use crate::tree::{Node, Page};

/// Collect every navigable page in pre-order.
///
/// A folder contributes its index page at its own position, before its
/// children. Separators are not navigable and are skipped.
#[must_use]
pub fn flatten(children: &[Node]) -> Vec<&Page> {
    fn scan<'a>(nodes: &'a [Node], out: &mut Vec<&'a Page>) {
        for node in nodes {
            match node {
                Node::Page(page) => out.push(page),
                Node::Folder(folder) => {
                    if let Some(index) = &folder.index {
                        out.push(index);
                    }
                    scan(&folder.children, out);
                }
                Node::Separator(_) => {}
            }
        }
    }

    let mut pages = Vec::new();
    scan(children, &mut pages);
    pages
}

/// Pages adjacent to the current page in reading order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Neighbors<'a> {
    /// Page before the current one.
    pub previous: Option<&'a Page>,
    /// Page after the current one.
    pub next: Option<&'a Page>,
}

impl<'a> Neighbors<'a> {
    /// Locate `current_url` in `pages` by exact match.
    ///
    /// A URL that is not in the sequence yields no neighbors at all.
    #[must_use]
    pub fn find(pages: &[&'a Page], current_url: &str) -> Self {
        let Some(idx) = pages.iter().position(|page| page.url == current_url) else {
            return Self::default();
        };

        Self {
            previous: idx.checked_sub(1).map(|i| pages[i]),
            next: pages.get(idx + 1).copied(),
        }
    }

    /// True if there is nothing to link to.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.previous.is_none() && self.next.is_none()
    }
}
