//! hmdocs CLI - Hytale Modding documentation engine.
//!
//! Provides commands for:
//! - `locales prune`: Remove translated docs for faster local builds
//! - `locales restore`: Bring translated docs back from git
//! - `nav`: Show the previous/next pages of a URL
//! - `render`: Render a Markdown page into a full docs document
//! - `sidebar toggle`: Flip a sidebar folder's persisted expand state

mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{LocalesCommand, NavArgs, RenderArgs, SidebarCommand};
use output::Output;

/// hmdocs - documentation engine for the Hytale Modding site.
#[derive(Parser)]
#[command(name = "hmdocs", version, about)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Locale directory management.
    #[command(subcommand)]
    Locales(LocalesCommand),
    /// Show the previous and next pages of a URL.
    Nav(NavArgs),
    /// Render a Markdown page into an HTML document.
    Render(RenderArgs),
    /// Sidebar state commands.
    #[command(subcommand)]
    Sidebar(SidebarCommand),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Locales(cmd) => cmd.execute(),
        Commands::Nav(args) => args.execute(),
        Commands::Render(args) => args.execute(),
        Commands::Sidebar(cmd) => cmd.execute(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output.error(&format!("Error: {err}"));
            ExitCode::FAILURE
        }
    }
}
