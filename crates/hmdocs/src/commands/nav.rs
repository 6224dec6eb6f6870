//! `hmdocs nav` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use hmdocs_nav::{Neighbors, Root, flatten};

use crate::error::CliError;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Page tree JSON file.
    #[arg(long)]
    tree: PathBuf,

    /// URL of the current page.
    #[arg(long)]
    url: String,
}

impl NavArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let root = Root::load(&self.tree)?;
        let json = neighbors_json(&root, &self.url)?;

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{json}")?;
        Ok(())
    }
}

/// Neighbors of `url` as `{"previous": page|null, "next": page|null}`.
fn neighbors_json(root: &Root, url: &str) -> Result<String, CliError> {
    let pages = flatten(&root.children);
    let neighbors = Neighbors::find(&pages, url);
    let value = serde_json::json!({
        "previous": neighbors.previous,
        "next": neighbors.next,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}
