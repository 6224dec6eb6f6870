//! Locale directory management for hmdocs.
//!
//! Translated docs live next to the default locale under one content root:
//!
//! ```text
//! content/docs/
//! ├── en/        <- default locale, never touched
//! ├── de-DE/
//! ├── fr-FR/
//! └── ...
//! ```
//!
//! Local builds are much faster with only the default locale present.
//! [`LocalePruner`] deletes the translated directories, and
//! [`LocaleRestorer`] brings them back from version control afterwards.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

mod prune;
mod restore;
mod vcs;

pub use prune::{LocalePruner, PruneFailure, PruneMode, PruneReport};
pub use restore::{LocaleRestorer, RestoreReport};
pub use vcs::{GitCli, Vcs, VcsError};

/// Locales shipped with the site besides the default one.
///
/// Pruning and restoring only ever act on this list unless the
/// configuration replaces it.
pub const DEFAULT_LOCALES: [&str; 25] = [
    "af-ZA", "ar-SA", "cs-CZ", "da-DK", "de-DE", "es-ES", "fr-FR", "hi-IN", "hu-HU", "id-ID",
    "it-IT", "ja-JP", "lt-LT", "lv-LV", "nl-NL", "pl-PL", "pt-BR", "pt-PT", "ro-RO", "ru-RU",
    "sq-AL", "sv-SE", "tr-TR", "uk-UA", "vi-VN",
];

/// Error building a [`LocaleSet`].
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("invalid locale code {code:?}: {reason}")]
    InvalidCode { code: String, reason: &'static str },
    #[error("locale {0:?} is the default locale and cannot be pruned")]
    DefaultLocale(String),
    #[error("locale {0:?} is listed more than once")]
    Duplicate(String),
}

/// Locale directories managed under a content root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleSet {
    content_root: PathBuf,
    default_locale: String,
    locales: Vec<String>,
}

impl LocaleSet {
    /// Create a validated locale set.
    ///
    /// Every code must be a single path component, and none may be the
    /// default locale, so no operation can reach outside
    /// `content_root/<code>` or touch the default locale's directory.
    pub fn new<I, S>(
        content_root: impl Into<PathBuf>,
        default_locale: impl Into<String>,
        locales: I,
    ) -> Result<Self, LocaleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let default_locale = default_locale.into();
        check_code(&default_locale)?;

        let mut seen = HashSet::new();
        let mut codes = Vec::new();
        for code in locales {
            let code = code.into();
            check_code(&code)?;
            if code == default_locale {
                return Err(LocaleError::DefaultLocale(code));
            }
            if !seen.insert(code.clone()) {
                return Err(LocaleError::Duplicate(code));
            }
            codes.push(code);
        }

        Ok(Self {
            content_root: content_root.into(),
            default_locale,
            locales: codes,
        })
    }

    /// Directory holding one subdirectory per locale.
    #[must_use]
    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    /// Locale that is never pruned.
    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Managed locale codes, in configured order.
    #[must_use]
    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    /// Directory of `locale`.
    #[must_use]
    pub fn locale_dir(&self, locale: &str) -> PathBuf {
        self.content_root.join(locale)
    }
}

fn check_code(code: &str) -> Result<(), LocaleError> {
    let reason = if code.is_empty() {
        "empty"
    } else if code.contains(['/', '\\']) {
        "contains a path separator"
    } else if code == "." || code == ".." {
        "is a relative path component"
    } else {
        return Ok(());
    };

    Err(LocaleError::InvalidCode {
        code: code.to_owned(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_set() {
        let set = LocaleSet::new("content/docs", "en", ["de-DE", "fr-FR"]).unwrap();

        assert_eq!(set.locales(), ["de-DE", "fr-FR"]);
        assert_eq!(set.default_locale(), "en");
        assert_eq!(set.locale_dir("de-DE"), Path::new("content/docs/de-DE"));
    }

    #[test]
    fn test_default_locales_form_a_valid_set() {
        let set = LocaleSet::new("docs", "en", DEFAULT_LOCALES).unwrap();

        assert_eq!(set.locales().len(), 25);
        assert_eq!(set.locales().first().map(String::as_str), Some("af-ZA"));
        assert_eq!(set.locales().last().map(String::as_str), Some("vi-VN"));
    }

    #[test]
    fn test_default_locale_cannot_be_managed() {
        let err = LocaleSet::new("docs", "en", ["de-DE", "en"]).unwrap_err();
        assert!(matches!(err, LocaleError::DefaultLocale(code) if code == "en"));
    }

    #[test]
    fn test_path_escapes_are_rejected() {
        for code in ["", "..", ".", "../en", "a/b", r"a\b"] {
            let err = LocaleSet::new("docs", "en", [code]).unwrap_err();
            assert!(matches!(err, LocaleError::InvalidCode { .. }), "{code:?}");
        }
    }

    #[test]
    fn test_duplicates_are_rejected() {
        let err = LocaleSet::new("docs", "en", ["de-DE", "de-DE"]).unwrap_err();
        assert!(matches!(err, LocaleError::Duplicate(code) if code == "de-DE"));
    }

    #[test]
    fn test_invalid_default_locale() {
        let err = LocaleSet::new("docs", "../x", Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, LocaleError::InvalidCode { .. }));
    }
}
