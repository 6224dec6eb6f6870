//! `hmdocs sidebar` command implementations.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use hmdocs_layout::Sidebar;
use hmdocs_nav::Root;
use hmdocs_renderer::LucideIcons;
use hmdocs_state::FileStore;

use super::CommonArgs;
use crate::error::CliError;
use crate::output::Output;

/// Sidebar state subcommands.
#[derive(Subcommand)]
pub(crate) enum SidebarCommand {
    /// Flip a folder between expanded and collapsed.
    Toggle(ToggleArgs),
}

impl SidebarCommand {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        match self {
            Self::Toggle(args) => args.execute(),
        }
    }
}

/// Arguments for `sidebar toggle`.
#[derive(Args)]
pub(crate) struct ToggleArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Folder identifier (`$id` in the page tree).
    id: String,

    /// Page tree JSON file; the folder must exist in it.
    #[arg(long)]
    tree: PathBuf,
}

impl ToggleArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config(None)?;
        let store = FileStore::open(&config.sidebar_resolved.state_file);

        // The tree supplies the folder's `defaultOpen`, which decides what
        // an unset state flips from.
        let root = Root::load(&self.tree)?;
        let state = Sidebar::new(&root, &store, &LucideIcons)
            .toggle(&self.id)
            .ok_or_else(|| {
                CliError::Validation(format!("no folder with id {:?} in the page tree", self.id))
            })?;

        let label = if state.is_expanded() {
            "expanded"
        } else {
            "collapsed"
        };
        output.success(&format!("Folder '{}' is now {label}", self.id));
        Ok(())
    }
}
