//! Configuration management for hmdocs.
//!
//! Parses `hmdocs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.repository`
//! - `banner.branch`
//! - `banner.commit`

mod expand;

use hmdocs_locales::{DEFAULT_LOCALES, LocaleSet};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the localized docs content directory.
    pub docs_dir: Option<PathBuf>,
    /// Override the sidebar state file.
    pub state_file: Option<PathBuf>,
    /// Override search button visibility.
    pub search_enabled: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "hmdocs.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site identity.
    pub site: SiteConfig,
    /// Content configuration (paths are relative strings from TOML).
    content: ContentConfigRaw,
    /// Sidebar configuration (paths are relative strings from TOML).
    sidebar: SidebarConfigRaw,
    /// Docs banner shown under the page.
    pub banner: BannerConfig,

    /// Resolved content configuration (set after loading).
    #[serde(skip)]
    pub content_resolved: ContentConfig,
    /// Resolved sidebar configuration (set after loading).
    #[serde(skip)]
    pub sidebar_resolved: SidebarConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site identity configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Title shown in the header and the sidebar.
    pub title: String,
    /// Source repository URL, used by the docs banner.
    pub repository: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Hytale Modding".to_owned(),
            repository: "https://github.com/HytaleModding/site".to_owned(),
        }
    }
}

/// Raw content configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContentConfigRaw {
    docs_dir: Option<String>,
    default_locale: Option<String>,
    locales: Option<Vec<String>>,
}

/// Resolved content configuration with absolute paths.
#[derive(Debug, Default)]
pub struct ContentConfig {
    /// Directory holding one subdirectory per locale.
    pub docs_dir: PathBuf,
    /// Primary locale; never pruned or restored.
    pub default_locale: String,
    /// Locales eligible for pruning and restoring.
    pub locales: Vec<String>,
}

impl ContentConfig {
    /// Directory of the default locale's content.
    #[must_use]
    pub fn default_locale_dir(&self) -> PathBuf {
        self.docs_dir.join(&self.default_locale)
    }
}

/// Raw sidebar configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SidebarConfigRaw {
    state_file: Option<String>,
    search: Option<bool>,
}

/// Resolved sidebar configuration.
#[derive(Debug, Default)]
pub struct SidebarConfig {
    /// JSON file persisting folder expand state.
    pub state_file: PathBuf,
    /// Whether the search button is rendered.
    pub search_enabled: bool,
}

/// Docs banner configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    /// Branch the docs were built from.
    pub branch: String,
    /// Commit the docs were built from.
    pub commit: String,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            branch: "main".to_owned(),
            commit: "unknown".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`banner.commit`").
        field: String,
        /// Error message (e.g., "${`GIT_COMMIT`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Anchor a command-line path at the current directory.
fn absolute_from_cwd(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `hmdocs.toml` in current directory and parents.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Directory holding the configuration file, or the current directory
    /// when no file was loaded.
    #[must_use]
    pub fn project_dir(&self) -> PathBuf {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .filter(|dir| !dir.as_os_str().is_empty())
            .map_or_else(
                || std::env::current_dir().unwrap_or_default(),
                Path::to_path_buf,
            )
    }

    /// Apply CLI settings to the configuration.
    ///
    /// Relative paths are taken from the current directory, not from the
    /// config directory, so they mean what they meant on the command line.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(docs_dir) = &settings.docs_dir {
            self.content_resolved.docs_dir = absolute_from_cwd(docs_dir);
        }
        if let Some(state_file) = &settings.state_file {
            self.sidebar_resolved.state_file = absolute_from_cwd(state_file);
        }
        if let Some(search_enabled) = settings.search_enabled {
            self.sidebar_resolved.search_enabled = search_enabled;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            content: ContentConfigRaw::default(),
            sidebar: SidebarConfigRaw::default(),
            banner: BannerConfig::default(),
            content_resolved: ContentConfig {
                docs_dir: base.join("content/docs"),
                default_locale: "en".to_owned(),
                locales: DEFAULT_LOCALES.iter().map(|&l| l.to_owned()).collect(),
            },
            sidebar_resolved: SidebarConfig {
                state_file: base.join(".hmdocs/sidebar.json"),
                search_enabled: true,
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_content()?;
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        require_non_empty(&self.site.repository, "site.repository")?;
        require_http_url(&self.site.repository, "site.repository")?;
        Ok(())
    }

    fn validate_content(&self) -> Result<(), ConfigError> {
        self.locale_set().map(|_| ())
    }

    /// Managed locale directories under the docs directory.
    ///
    /// Fails with `ConfigError::Validation` when a locale code is not a
    /// plain directory name, repeats, or names the default locale.
    pub fn locale_set(&self) -> Result<LocaleSet, ConfigError> {
        let content = &self.content_resolved;
        LocaleSet::new(
            content.docs_dir.clone(),
            content.default_locale.clone(),
            content.locales.iter().cloned(),
        )
        .map_err(|e| ConfigError::Validation(format!("content.locales: {e}")))
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.repository = expand::expand_env(&self.site.repository, "site.repository")?;
        self.banner.branch = expand::expand_env(&self.banner.branch, "banner.branch")?;
        self.banner.commit = expand::expand_env(&self.banner.commit, "banner.commit")?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.content_resolved = ContentConfig {
            docs_dir: resolve(self.content.docs_dir.as_deref(), "content/docs"),
            default_locale: self
                .content
                .default_locale
                .clone()
                .unwrap_or_else(|| "en".to_owned()),
            locales: self.content.locales.clone().unwrap_or_else(|| {
                DEFAULT_LOCALES.iter().map(|&l| l.to_owned()).collect()
            }),
        };

        self.sidebar_resolved = SidebarConfig {
            state_file: resolve(self.sidebar.state_file.as_deref(), ".hmdocs/sidebar.json"),
            search_enabled: self.sidebar.search.unwrap_or(true),
        };
    }
}
