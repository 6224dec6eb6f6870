//! `hmdocs render` command implementation.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use hmdocs_config::Config;
use hmdocs_layout::{DocumentParts, Sidebar, SiteInfo, render_document};
use hmdocs_nav::Root;
use hmdocs_renderer::{IconSet, InlineSvgIcons, LucideIcons, MarkdownRenderer};
use hmdocs_state::FileStore;

use super::CommonArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Page tree JSON file.
    #[arg(long)]
    tree: PathBuf,

    /// Markdown source of the page.
    #[arg(long)]
    page: PathBuf,

    /// URL of the page being rendered.
    #[arg(long)]
    url: String,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Short page description shown under the title.
    #[arg(long)]
    description: Option<String>,

    /// Stylesheet URL to link from the document head.
    #[arg(long)]
    css: Option<String>,

    /// Embed SVG icons instead of icon library placeholders.
    #[arg(long)]
    inline_icons: bool,

    /// Hide the search button (overrides config).
    #[arg(long)]
    no_search: bool,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config(self.no_search.then_some(false))?;

        let root = Root::load(&self.tree)?;
        let source = read(&self.page)?;
        let icons: &dyn IconSet = if self.inline_icons {
            &InlineSvgIcons
        } else {
            &LucideIcons
        };

        let html = self.render(&config, &root, &source, icons, &output);

        if let Some(path) = &self.output {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, html)?;
            output.success(&format!("Rendered {} to {}", self.url, path.display()));
        } else {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
        }
        Ok(())
    }

    fn render(
        &self,
        config: &Config,
        root: &Root,
        source: &str,
        icons: &dyn IconSet,
        output: &Output,
    ) -> String {
        let page = MarkdownRenderer::new(icons).render(source);
        for warning in &page.warnings {
            output.warning(&format!("{}: {warning}", self.page.display()));
        }

        if root.page_by_url(&self.url).is_none() {
            output.warning(&format!("{} is not in the page tree", self.url));
        }

        let site = site_info(config);
        let store = FileStore::open(&config.sidebar_resolved.state_file);
        let sidebar = Sidebar::new(root, &store, icons);
        let parts = DocumentParts {
            site: &site,
            current_url: &self.url,
            page: &page,
            description: self.description.as_deref(),
            search_enabled: config.sidebar_resolved.search_enabled,
            css_path: self.css.as_deref(),
        };
        render_document(&parts, &sidebar, icons)
    }
}

fn site_info(config: &Config) -> SiteInfo {
    SiteInfo {
        title: config.site.title.clone(),
        repository: config.site.repository.clone(),
        branch: config.banner.branch.clone(),
        commit: config.banner.commit.clone(),
    }
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}
