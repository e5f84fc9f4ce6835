//! Configuration management for Cinelist
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::api::http::normalize_base_url;
use crate::catalog::query::SortKey;
use crate::constants::{
    API_URL_ENV, CONFIG_GENERATED, DEFAULT_API_URL, DEFAULT_REQUEST_TIMEOUT_SECS, FORM_DEFAULT_WIDTH,
    FORM_MAX_WIDTH, FORM_MIN_WIDTH, MAX_REQUEST_TIMEOUT_SECS,
};
use crate::icons::IconTheme;
use crate::utils::datetime;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Collection URL of the movie catalogue
    pub base_url: String,
    /// Per-request timeout in seconds (0 = no timeout)
    pub request_timeout_secs: u64,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Sort applied on startup
    /// Options: "" (server order), "title", "genre", "rating"
    pub default_sort: String,
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Width of the details/form column in columns
    pub form_width: u16,
    /// Icon theme: "emoji", "unicode" or "ascii"
    pub icon_theme: IconTheme,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// chrono format used for release dates
    pub date_format: String,
    /// Show movie descriptions in the details pane
    pub show_descriptions: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs to a file in the data directory
    pub enabled: bool,
    /// Level filter: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Timeout to apply to each request, if any
    pub fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_sort: String::new(),
            mouse_enabled: true,
            form_width: FORM_DEFAULT_WIDTH,
            icon_theme: IconTheme::default(),
        }
    }
}

impl UiConfig {
    /// Parsed startup sort; unknown values fall back to server order
    pub fn sort_key(&self) -> SortKey {
        SortKey::parse(&self.default_sort).unwrap_or_default()
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: datetime::RELEASE_DATE_FORMAT.to_string(),
            show_descriptions: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed level filter
    pub fn level_filter(&self) -> Option<log::LevelFilter> {
        self.level.parse().ok()
    }
}

/// Comment written above each key of a generated config file, by section
const KEY_COMMENTS: &[(&str, &str, &str)] = &[
    ("api", "base_url", "Collection URL of the movie catalogue (overridden by CINELIST_API_URL)"),
    ("api", "request_timeout_secs", "Per-request timeout in seconds, 0 disables it (max 300)"),
    ("ui", "default_sort", "Sort applied on startup: \"\" (server order), \"title\", \"genre\" or \"rating\""),
    ("ui", "mouse_enabled", "Click to select, wheel to move the selection"),
    ("ui", "form_width", "Width of the details/form column in columns (30-80)"),
    ("ui", "icon_theme", "Icon theme: \"emoji\", \"unicode\" or \"ascii\""),
    ("display", "date_format", "chrono format used for release dates, e.g. \"%d %b %Y\""),
    ("display", "show_descriptions", "Show movie descriptions in the details pane"),
    ("logging", "enabled", "Also write cinelist.log in the data directory"),
    ("logging", "level", "Level filter: \"error\", \"warn\", \"info\", \"debug\" or \"trace\""),
];

/// Insert a `#` comment line above every known key
fn annotate_config(content: &str) -> String {
    let mut section = "";
    let mut out = String::with_capacity(content.len() * 2);

    for line in content.lines() {
        let trimmed = line.trim();
        if let Some(name) = trimmed.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
            section = name;
        } else if let Some((key, _)) = trimmed.split_once('=') {
            let key = key.trim();
            if let Some((_, _, comment)) = KEY_COMMENTS.iter().find(|(s, k, _)| *s == section && *k == key) {
                out.push_str("# ");
                out.push_str(comment);
                out.push('\n');
            }
        }
        out.push_str(line);
        out.push('\n');
    }

    out
}

impl Config {
    /// Load configuration from file or return defaults, then apply
    /// environment overrides
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        let mut config = if let Some(path) = config_path {
            Self::load_from_file(&path)?
        } else {
            Self::default()
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.apply_api_url_override(url)?;
        }

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Replace the API base URL, re-validating it
    pub fn apply_api_url_override(&mut self, url: String) -> Result<()> {
        normalize_base_url(&url).with_context(|| format!("Invalid {} value", API_URL_ENV))?;
        self.api.base_url = url;
        Ok(())
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("cinelist.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("cinelist").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // API settings
        normalize_base_url(&self.api.base_url).context("api.base_url must be an http(s) URL")?;

        if self.api.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            anyhow::bail!(
                "request_timeout_secs cannot exceed {} seconds, got {}",
                MAX_REQUEST_TIMEOUT_SECS,
                self.api.request_timeout_secs
            );
        }

        // UI settings
        if self.ui.form_width < FORM_MIN_WIDTH || self.ui.form_width > FORM_MAX_WIDTH {
            anyhow::bail!(
                "form_width must be between {} and {} columns, got {}",
                FORM_MIN_WIDTH,
                FORM_MAX_WIDTH,
                self.ui.form_width
            );
        }

        if SortKey::parse(&self.ui.default_sort).is_none() {
            anyhow::bail!(
                "Invalid default_sort '{}': expected \"\", \"title\", \"genre\" or \"rating\"",
                self.ui.default_sort
            );
        }

        // Display settings
        if !datetime::is_valid_date_format(&self.display.date_format) {
            anyhow::bail!("Invalid date_format '{}'", self.display.date_format);
        }

        // Logging settings
        if self.logging.level_filter().is_none() {
            anyhow::bail!("Invalid logging level '{}'", self.logging.level);
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;
        let toml_content = annotate_config(&toml_content);

        // Add header comment
        let header = format!(
            "# Cinelist Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(datetime::RELEASE_DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("cinelist"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
