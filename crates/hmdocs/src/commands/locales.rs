//! `hmdocs locales` command implementations.

use clap::{Args, Subcommand};
use hmdocs_locales::{GitCli, LocalePruner, LocaleRestorer, PruneMode};

use super::CommonArgs;
use crate::error::CliError;
use crate::output::Output;

/// Locale directory subcommands.
#[derive(Subcommand)]
pub(crate) enum LocalesCommand {
    /// Remove non-default locale directories for faster local builds.
    Prune(PruneArgs),
    /// Restore removed locale directories from git.
    Restore(RestoreArgs),
}

impl LocalesCommand {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        match self {
            Self::Prune(args) => args.execute(),
            Self::Restore(args) => args.execute(),
        }
    }
}

/// Arguments for `locales prune`.
#[derive(Args)]
pub(crate) struct PruneArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Report what would be removed without deleting anything.
    #[arg(long)]
    dry_run: bool,
}

/// Arguments for `locales restore`.
#[derive(Args)]
pub(crate) struct RestoreArgs {
    #[command(flatten)]
    common: CommonArgs,
}

impl PruneArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config(None)?;
        let set = config.locale_set()?;
        let mode = if self.dry_run {
            PruneMode::DryRun
        } else {
            PruneMode::Apply
        };

        output.info("Preparing development environment...");
        output.info(&format!(
            "Removing non-{} language directories from {}/...",
            set.default_locale(),
            set.content_root().display()
        ));

        let report = LocalePruner::new(&set, mode).run();

        let verb = match mode {
            PruneMode::Apply => "Removed",
            PruneMode::DryRun => "Would remove",
        };
        for locale in &report.removed {
            output.step(verb, locale);
        }
        for failure in &report.failed {
            output.warning(&format!(
                "Failed to remove {}: {}",
                failure.locale, failure.error
            ));
        }

        if mode == PruneMode::DryRun {
            output.success(&format!(
                "Dry run: {} of {} language directories would be removed",
                report.removed.len(),
                set.locales().len()
            ));
            return Ok(());
        }

        output.success(&format!(
            "Development environment ready ({} only for faster builds)",
            set.default_locale()
        ));
        output.hint("Run 'hmdocs locales restore' to restore all languages after development");
        Ok(())
    }
}

impl RestoreArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config(None)?;
        let set = config.locale_set()?;
        let git = GitCli::new(config.project_dir());

        output.info("Restoring deleted language directories from git...");

        let report = LocaleRestorer::new(&set, &git)
            .run_with(|locale| output.step("Restored", locale));

        tracing::debug!(unchanged = ?report.unchanged, "locales left as they were");

        output.success("All language directories restored successfully");
        output.hint(&format!(
            "Your changes in {} remain untouched",
            config.content_resolved.default_locale_dir().display()
        ));
        Ok(())
    }
}
