//! Page tree model.
//!
//! The JSON shape mirrors what the content indexer emits: nodes are tagged by
//! a `"type"` field and folders carry their identifier in `"$id"`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Error loading or validating a page tree.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// The tree file could not be read.
    #[error("failed to read page tree {}: {source}", path.display())]
    Io {
        /// Path of the tree file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The tree JSON is malformed.
    #[error("invalid page tree: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two folders share an identifier.
    #[error("duplicate folder id {0:?} in page tree")]
    DuplicateId(String),
}

/// Root of the page tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Root {
    /// Display name of the tree.
    #[serde(default)]
    pub name: String,
    /// Top-level nodes in display order.
    #[serde(default)]
    pub children: Vec<Node>,
}

/// A navigation node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// A navigable page.
    Page(Page),
    /// A group of nodes with an optional index page.
    Folder(Folder),
    /// A labeled heading that cannot be navigated to.
    Separator(Separator),
}

/// A navigable page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page URL, compared verbatim against the current URL.
    pub url: String,
    /// Display name.
    pub name: String,
    /// Icon name, resolved by the renderer's icon set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// True for links leaving the site.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub external: bool,
}

/// A folder of nodes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Stable identifier; keys the persisted expand state.
    #[serde(rename = "$id")]
    pub id: String,
    /// Display name, used when there is no index page.
    pub name: String,
    /// Icon name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Page shown for the folder itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<Page>,
    /// Child nodes in display order.
    #[serde(default)]
    pub children: Vec<Node>,
    /// Expand state suggested by the indexer when nothing is persisted.
    #[serde(
        default,
        rename = "defaultOpen",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_open: Option<bool>,
}

/// A non-navigable heading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Separator {
    /// Heading text.
    #[serde(default)]
    pub name: String,
    /// Icon name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Root {
    /// Parse a page tree from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, TreeError> {
        let root: Self = serde_json::from_str(json)?;
        root.validate()?;
        Ok(root)
    }

    /// Load a page tree from a JSON file.
    pub fn load(path: &Path) -> Result<Self, TreeError> {
        let json = std::fs::read_to_string(path).map_err(|source| TreeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let root = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), nodes = root.len(), "loaded page tree");
        Ok(root)
    }

    /// Check that folder identifiers are unique.
    pub fn validate(&self) -> Result<(), TreeError> {
        fn walk<'a>(nodes: &'a [Node], seen: &mut HashSet<&'a str>) -> Result<(), TreeError> {
            for node in nodes {
                if let Node::Folder(folder) = node {
                    if !seen.insert(folder.id.as_str()) {
                        return Err(TreeError::DuplicateId(folder.id.clone()));
                    }
                    walk(&folder.children, seen)?;
                }
            }
            Ok(())
        }

        walk(&self.children, &mut HashSet::new())
    }

    /// Total number of nodes, folder index pages excluded.
    #[must_use]
    pub fn len(&self) -> usize {
        fn count(nodes: &[Node]) -> usize {
            nodes
                .iter()
                .map(|node| match node {
                    Node::Folder(folder) => 1 + count(&folder.children),
                    Node::Page(_) | Node::Separator(_) => 1,
                })
                .sum()
        }

        count(&self.children)
    }

    /// True if the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Find the page whose URL equals `url`, including folder index pages.
    #[must_use]
    pub fn page_by_url(&self, url: &str) -> Option<&Page> {
        fn find<'a>(nodes: &'a [Node], url: &str) -> Option<&'a Page> {
            nodes.iter().find_map(|node| match node {
                Node::Page(page) => (page.url == url).then_some(page),
                Node::Folder(folder) => folder
                    .index
                    .as_ref()
                    .filter(|index| index.url == url)
                    .or_else(|| find(&folder.children, url)),
                Node::Separator(_) => None,
            })
        }

        find(&self.children, url)
    }

    /// Find a folder by its identifier, at any depth.
    #[must_use]
    pub fn folder_by_id(&self, id: &str) -> Option<&Folder> {
        fn find<'a>(nodes: &'a [Node], id: &str) -> Option<&'a Folder> {
            nodes.iter().find_map(|node| match node {
                Node::Folder(folder) if folder.id == id => Some(folder),
                Node::Folder(folder) => find(&folder.children, id),
                Node::Page(_) | Node::Separator(_) => None,
            })
        }

        find(&self.children, id)
    }
}

impl Page {
    /// Create a page with no icon.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            icon: None,
            external: false,
        }
    }
}

impl Folder {
    /// Create a folder without an index page.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: None,
            index: None,
            children,
            default_open: None,
        }
    }

    /// Attach an index page.
    #[must_use]
    pub fn with_index(mut self, index: Page) -> Self {
        self.index = Some(index);
        self
    }
}

impl Separator {
    /// Create a separator with no icon.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: None,
        }
    }
}
