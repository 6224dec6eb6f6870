//! Concurrent removal of locale directories.

use std::fs;
use std::io;

use rayon::prelude::*;

use crate::LocaleSet;

/// Whether the pruner touches the filesystem.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PruneMode {
    /// Delete existing locale directories.
    #[default]
    Apply,
    /// Only report which directories would be deleted.
    DryRun,
}

/// A locale directory that could not be removed.
#[derive(Debug)]
pub struct PruneFailure {
    pub locale: String,
    pub error: io::Error,
}

/// Outcome of a prune run, in configured locale order.
#[derive(Debug, Default)]
pub struct PruneReport {
    /// Locales whose directory was removed (or would be, in a dry run).
    pub removed: Vec<String>,
    /// Locales whose directory did not exist.
    pub skipped: Vec<String>,
    pub failed: Vec<PruneFailure>,
}

impl PruneReport {
    /// True if every existing directory was handled.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

enum Outcome {
    Removed,
    Skipped,
    Failed(io::Error),
}

/// Removes every managed locale directory except the default locale's.
pub struct LocalePruner<'a> {
    set: &'a LocaleSet,
    mode: PruneMode,
}

impl<'a> LocalePruner<'a> {
    #[must_use]
    pub fn new(set: &'a LocaleSet, mode: PruneMode) -> Self {
        Self { set, mode }
    }

    /// Prune all locales in parallel and wait for every one to finish.
    ///
    /// Missing directories are skipped. A failure on one locale is recorded
    /// and does not stop the others.
    #[must_use]
    pub fn run(&self) -> PruneReport {
        let outcomes: Vec<(&String, Outcome)> = self
            .set
            .locales()
            .par_iter()
            .map(|locale| (locale, self.prune_one(locale)))
            .collect();

        let mut report = PruneReport::default();
        for (locale, outcome) in outcomes {
            match outcome {
                Outcome::Removed => report.removed.push(locale.clone()),
                Outcome::Skipped => report.skipped.push(locale.clone()),
                Outcome::Failed(error) => report.failed.push(PruneFailure {
                    locale: locale.clone(),
                    error,
                }),
            }
        }

        tracing::info!(
            removed = report.removed.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            dry_run = self.mode == PruneMode::DryRun,
            "pruned locale directories"
        );
        report
    }

    fn prune_one(&self, locale: &str) -> Outcome {
        let dir = self.set.locale_dir(locale);
        if !dir.exists() {
            tracing::debug!(locale, "locale directory absent, skipping");
            return Outcome::Skipped;
        }

        if self.mode == PruneMode::DryRun {
            return Outcome::Removed;
        }

        match fs::remove_dir_all(&dir) {
            Ok(()) => {
                tracing::debug!(locale, path = %dir.display(), "removed locale directory");
                Outcome::Removed
            }
            Err(e) => {
                tracing::warn!(locale, path = %dir.display(), "failed to remove locale directory: {e}");
                Outcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_LOCALES;
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use tempfile::TempDir;

    const LOCALES: [&str; 4] = ["de-DE", "fr-FR", "ja-JP", "pt-BR"];

    fn create_docs(root: &Path, dirs: &[&str]) {
        for dir in dirs {
            let path = root.join(dir);
            fs::create_dir_all(path.join("guides")).unwrap();
            fs::write(path.join("index.mdx"), "# Hello").unwrap();
            fs::write(path.join("guides").join("first.mdx"), "# First").unwrap();
        }
    }

    fn locale_set(root: &Path) -> LocaleSet {
        LocaleSet::new(root, "en", LOCALES).unwrap()
    }

    #[test]
    fn test_prune_removes_existing_and_skips_missing() {
        let tmp = TempDir::new().unwrap();
        create_docs(tmp.path(), &["en", "de-DE", "ja-JP"]);
        let set = locale_set(tmp.path());

        let report = LocalePruner::new(&set, PruneMode::Apply).run();

        assert_eq!(report.removed, vec!["de-DE", "ja-JP"]);
        assert_eq!(report.skipped, vec!["fr-FR", "pt-BR"]);
        assert!(report.is_success());
        assert!(!tmp.path().join("de-DE").exists());
        assert!(!tmp.path().join("ja-JP").exists());
    }

    #[test]
    fn test_prune_never_touches_default_locale() {
        let tmp = TempDir::new().unwrap();
        create_docs(tmp.path(), &["en", "de-DE", "fr-FR", "ja-JP", "pt-BR"]);
        let set = locale_set(tmp.path());

        let _ = LocalePruner::new(&set, PruneMode::Apply).run();

        assert!(tmp.path().join("en").join("index.mdx").exists());
        assert!(tmp.path().join("en").join("guides").join("first.mdx").exists());
    }

    #[test]
    fn test_prune_leaves_unlisted_directories() {
        let tmp = TempDir::new().unwrap();
        create_docs(tmp.path(), &["de-DE", "xx-YY"]);
        let set = locale_set(tmp.path());

        let _ = LocalePruner::new(&set, PruneMode::Apply).run();

        assert!(tmp.path().join("xx-YY").exists());
    }

    #[test]
    fn test_prune_missing_content_root_is_not_an_error() {
        let tmp = TempDir::new().unwrap();
        let set = locale_set(&tmp.path().join("nope"));

        let report = LocalePruner::new(&set, PruneMode::Apply).run();

        assert!(report.removed.is_empty());
        assert_eq!(report.skipped.len(), LOCALES.len());
        assert!(report.is_success());
    }

    #[test]
    fn test_prune_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        create_docs(tmp.path(), &["de-DE"]);
        let set = locale_set(tmp.path());

        let first = LocalePruner::new(&set, PruneMode::Apply).run();
        let second = LocalePruner::new(&set, PruneMode::Apply).run();

        assert_eq!(first.removed, vec!["de-DE"]);
        assert!(second.removed.is_empty());
        assert_eq!(second.skipped.len(), LOCALES.len());
    }

    #[test]
    fn test_dry_run_reports_without_deleting() {
        let tmp = TempDir::new().unwrap();
        create_docs(tmp.path(), &["de-DE", "pt-BR"]);
        let set = locale_set(tmp.path());

        let report = LocalePruner::new(&set, PruneMode::DryRun).run();

        assert_eq!(report.removed, vec!["de-DE", "pt-BR"]);
        assert!(tmp.path().join("de-DE").exists());
        assert!(tmp.path().join("pt-BR").exists());
    }

    #[test]
    fn test_failure_is_recorded_and_others_continue() {
        let tmp = TempDir::new().unwrap();
        create_docs(tmp.path(), &["de-DE", "ja-JP"]);
        // A regular file where a directory is expected cannot be removed
        // with remove_dir_all.
        fs::write(tmp.path().join("fr-FR"), "not a directory").unwrap();
        let set = locale_set(tmp.path());

        let report = LocalePruner::new(&set, PruneMode::Apply).run();

        assert_eq!(report.removed, vec!["de-DE", "ja-JP"]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].locale, "fr-FR");
        assert!(!report.is_success());
    }

    #[test]
    fn test_every_default_locale_is_attempted_despite_failures() {
        let tmp = TempDir::new().unwrap();
        let failing = ["ar-SA", "lt-LT", "vi-VN"];
        let missing = ["cs-CZ", "sq-AL"];
        for locale in DEFAULT_LOCALES {
            if failing.contains(&locale) {
                fs::write(tmp.path().join(locale), "not a directory").unwrap();
            } else if !missing.contains(&locale) {
                create_docs(tmp.path(), &[locale]);
            }
        }
        create_docs(tmp.path(), &["en"]);
        let set = LocaleSet::new(tmp.path(), "en", DEFAULT_LOCALES).unwrap();

        let report = LocalePruner::new(&set, PruneMode::Apply).run();

        assert_eq!(report.removed.len(), 20);
        assert_eq!(report.skipped, vec!["cs-CZ", "sq-AL"]);
        let failed: Vec<&str> = report.failed.iter().map(|f| f.locale.as_str()).collect();
        assert_eq!(failed, failing);
        for locale in DEFAULT_LOCALES {
            assert!(!tmp.path().join(locale).is_dir(), "{locale} still present");
        }
        assert!(tmp.path().join("en").join("index.mdx").exists());
    }
}
