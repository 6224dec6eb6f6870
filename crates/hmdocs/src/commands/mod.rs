//! CLI command implementations.

pub(crate) mod locales;
pub(crate) mod nav;
pub(crate) mod render;
pub(crate) mod sidebar;

use std::path::PathBuf;

use clap::Args;
use hmdocs_config::{CliSettings, Config};

pub(crate) use locales::LocalesCommand;
pub(crate) use nav::NavArgs;
pub(crate) use render::RenderArgs;
pub(crate) use sidebar::SidebarCommand;

use crate::error::CliError;

/// Options shared by every command.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct CommonArgs {
    /// Path to configuration file (default: auto-discover hmdocs.toml).
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,

    /// Localized docs directory (overrides config).
    #[arg(long)]
    pub(crate) docs_dir: Option<PathBuf>,

    /// Sidebar state file (overrides config).
    #[arg(long, env = "HMDOCS_STATE_FILE")]
    pub(crate) state_file: Option<PathBuf>,
}

impl CommonArgs {
    /// Load configuration with these overrides applied.
    pub(crate) fn load_config(&self, search_enabled: Option<bool>) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            docs_dir: self.docs_dir.clone(),
            state_file: self.state_file.clone(),
            search_enabled,
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}
