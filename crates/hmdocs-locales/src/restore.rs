//! Sequential restoration of pruned locale directories.

use crate::LocaleSet;
use crate::vcs::Vcs;

/// Outcome of a restore run, in configured locale order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RestoreReport {
    /// Locales whose directory was brought back.
    pub restored: Vec<String>,
    /// Locales where a step failed; usually the directory was never deleted.
    pub unchanged: Vec<String>,
}

/// Brings locale directories back from version control.
pub struct LocaleRestorer<'a> {
    set: &'a LocaleSet,
    vcs: &'a dyn Vcs,
}

impl<'a> LocaleRestorer<'a> {
    #[must_use]
    pub fn new(set: &'a LocaleSet, vcs: &'a dyn Vcs) -> Self {
        Self { set, vcs }
    }

    /// Restore every locale, one at a time.
    ///
    /// For each locale the directory is unstaged, restored and staged again.
    /// The first failing step ends that locale's attempt; the error is logged
    /// and the run moves on to the next locale.
    #[must_use]
    pub fn run(&self) -> RestoreReport {
        self.run_with(|_| {})
    }

    /// Like [`run`](Self::run), calling `on_restored` after each success.
    pub fn run_with(&self, mut on_restored: impl FnMut(&str)) -> RestoreReport {
        let mut report = RestoreReport::default();

        for locale in self.set.locales() {
            let path = self.set.locale_dir(locale);
            let result = self
                .vcs
                .unstage(&path)
                .and_then(|()| self.vcs.restore(&path))
                .and_then(|()| self.vcs.stage(&path));

            match result {
                Ok(()) => {
                    on_restored(locale);
                    report.restored.push(locale.clone());
                }
                Err(e) => {
                    tracing::debug!(locale = %locale, "locale not restored: {e}");
                    report.unchanged.push(locale.clone());
                }
            }
        }

        tracing::info!(
            restored = report.restored.len(),
            unchanged = report.unchanged.len(),
            "restored locale directories"
        );
        report
    }
}
