//! Configuration management for cdocs.
//!
//! Parses `cdocs.toml` configuration files with serde and provides
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
//! - `server.host`
//! - `highlight.cdn_url`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override content root directory.
    pub content_dir: Option<PathBuf>,
    /// Override static build output directory.
    pub output_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "cdocs.toml";

const DEFAULT_BASICS_DIR: &str = "basics";
const DEFAULT_ADVANCED_DIR: &str = "advanced";
const DEFAULT_OUTPUT_DIR: &str = "out";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Content configuration (paths are relative strings from TOML).
    content: ContentConfigRaw,
    /// Site configuration (output path is a relative string from TOML).
    site: SiteConfigRaw,
    /// Navigation configuration.
    pub navigation: NavigationConfig,
    /// Syntax highlighting configuration.
    pub highlight: HighlightConfig,

    /// Resolved content configuration (set after loading).
    #[serde(skip)]
    pub content_resolved: ContentConfig,
    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}

/// Raw content configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContentConfigRaw {
    root: Option<String>,
    basics_dir: Option<String>,
    advanced_dir: Option<String>,
    extension: Option<String>,
}

/// Resolved content configuration with absolute paths.
#[derive(Debug, Default)]
pub struct ContentConfig {
    /// Directory the category directories are resolved against.
    pub root: PathBuf,
    /// Directory of the "basics" category.
    pub basics_dir: PathBuf,
    /// Directory of the "advanced" category.
    pub advanced_dir: PathBuf,
    /// Content file extension without the leading dot.
    pub extension: String,
}

/// Raw site configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    title: Option<String>,
    brand: Option<String>,
    description: Option<String>,
    output_dir: Option<String>,
}

/// Resolved site configuration.
#[derive(Debug)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Header brand text.
    pub brand: String,
    /// Default page description.
    pub description: String,
    /// Static build output directory.
    pub output_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Frontend Concepts".to_owned(),
            brand: "Frontend Docs".to_owned(),
            description: "A comprehensive guide to frontend development concepts".to_owned(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// How prev/next neighbours are chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationScope {
    /// One chain across both categories.
    #[default]
    Global,
    /// Neighbours within the document's own category.
    Category,
}

/// Navigation configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Neighbour selection.
    pub scope: NavigationScope,
}

/// Syntax highlighting configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Whether Prism is loaded on pages.
    pub enabled: bool,
    /// Base URL of the Prism distribution.
    pub cdn_url: String,
    /// Prism language components to load.
    pub languages: Vec<String>,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cdn_url: "https://cdnjs.cloudflare.com/ajax/libs/prism/1.29.0".to_owned(),
            languages: vec![
                "javascript".to_owned(),
                "typescript".to_owned(),
                "jsx".to_owned(),
            ],
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
        /// Config field path (e.g., "`server.host`").
        field: String,
        /// Error message (e.g., "${`CDOCS_HOST`} not set").
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

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `cdocs.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. The merged
    /// result is validated.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails, or
    /// the merged configuration is invalid.
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
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    ///
    /// A content directory override replaces the content root; the category
    /// directory names from the file are kept and resolved against it.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(content_dir) = &settings.content_dir {
            self.content_resolved = self.content.resolve(content_dir.clone());
        }
        if let Some(output_dir) = &settings.output_dir {
            self.site_resolved.output_dir.clone_from(output_dir);
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
            server: ServerConfig::default(),
            content: ContentConfigRaw::default(),
            site: SiteConfigRaw::default(),
            navigation: NavigationConfig::default(),
            highlight: HighlightConfig::default(),
            content_resolved: ContentConfigRaw::default().resolve(base.to_path_buf()),
            site_resolved: SiteConfig {
                output_dir: base.join(DEFAULT_OUTPUT_DIR),
                ..SiteConfig::default()
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called by [`Config::load`] once CLI settings are applied.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_content()?;
        self.validate_highlight()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    fn validate_content(&self) -> Result<(), ConfigError> {
        let content = &self.content_resolved;
        require_non_empty(&content.extension, "content.extension")?;
        if content.extension.starts_with('.') {
            return Err(ConfigError::Validation(
                "content.extension must not start with a dot".to_owned(),
            ));
        }
        if content.basics_dir == content.advanced_dir {
            return Err(ConfigError::Validation(
                "content.basics_dir and content.advanced_dir must differ".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_highlight(&self) -> Result<(), ConfigError> {
        if self.highlight.enabled {
            require_non_empty(&self.highlight.cdn_url, "highlight.cdn_url")?;
            require_http_url(&self.highlight.cdn_url, "highlight.cdn_url")?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;
        self.highlight.cdn_url = expand::expand_env(&self.highlight.cdn_url, "highlight.cdn_url")?;
        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let root = match &self.content.root {
            Some(root) => config_dir.join(root),
            None => config_dir.to_path_buf(),
        };
        self.content_resolved = self.content.resolve(root);

        let defaults = SiteConfig::default();
        self.site_resolved = SiteConfig {
            title: self.site.title.clone().unwrap_or(defaults.title),
            brand: self.site.brand.clone().unwrap_or(defaults.brand),
            description: self.site.description.clone().unwrap_or(defaults.description),
            output_dir: config_dir.join(
                self.site
                    .output_dir
                    .as_deref()
                    .unwrap_or(DEFAULT_OUTPUT_DIR),
            ),
        };
    }
}

impl ContentConfigRaw {
    /// Resolve category directories against `root`.
    fn resolve(&self, root: PathBuf) -> ContentConfig {
        let dir = |name: Option<&str>, default: &str| root.join(name.unwrap_or(default));
        ContentConfig {
            basics_dir: dir(self.basics_dir.as_deref(), DEFAULT_BASICS_DIR),
            advanced_dir: dir(self.advanced_dir.as_deref(), DEFAULT_ADVANCED_DIR),
            extension: self.extension.clone().unwrap_or_else(|| "md".to_owned()),
            root,
        }
    }
}
