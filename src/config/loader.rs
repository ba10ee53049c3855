//! Configuration file loading with precedence handling.

use crate::model::PRESENTATION_CATEGORY;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "TAGFLOW_CONFIG";

/// Environment variable overriding the tag chip spacing.
pub const SPACING_ENV_VAR: &str = "TAGFLOW_TAG_SPACING";

/// Environment variable overriding the filter category.
pub const CATEGORY_ENV_VAR: &str = "TAGFLOW_FILTER_CATEGORY";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A resolved value is out of range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Config key that failed validation.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/tagflow/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Gap between tag chips in cells, horizontally and vertically.
    #[serde(default)]
    pub tag_spacing: Option<u16>,

    /// Rows scrolled before the large title collapses inline.
    #[serde(default)]
    pub collapse_threshold: Option<u16>,

    /// Start with the category filter active.
    #[serde(default)]
    pub start_filtered: Option<bool>,

    /// Category the filter toggle narrows to.
    #[serde(default)]
    pub filter_category: Option<String>,

    /// JSON file to read posts from instead of the sample data.
    #[serde(default)]
    pub posts_file: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Tag chip spacing in cells.
    pub tag_spacing: u16,
    /// Collapse threshold in rows.
    pub collapse_threshold: u16,
    /// Filter active on startup.
    pub start_filtered: bool,
    /// Filter category.
    pub filter_category: String,
    /// Optional posts file.
    pub posts_file: Option<PathBuf>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            tag_spacing: 1,
            collapse_threshold: 3,
            start_filtered: false,
            filter_category: PRESENTATION_CATEGORY.to_string(),
            posts_file: None,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Reject values no layer should have produced.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.filter_category.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "filter_category",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/tagflow/tagflow.log` on Linux, or the
/// platform's state directory elsewhere. Falls back to the current
/// directory when no state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("tagflow").join("tagflow.log")
    } else {
        PathBuf::from("tagflow.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/tagflow/config.toml` on Linux, appropriate path on
/// other platforms, `None` if no config directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tagflow").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TAGFLOW_CONFIG` environment variable
/// 3. Default path `~/.config/tagflow/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        tag_spacing: config.tag_spacing.unwrap_or(defaults.tag_spacing),
        collapse_threshold: config
            .collapse_threshold
            .unwrap_or(defaults.collapse_threshold),
        start_filtered: config.start_filtered.unwrap_or(defaults.start_filtered),
        filter_category: config.filter_category.unwrap_or(defaults.filter_category),
        posts_file: config.posts_file.or(defaults.posts_file),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// - `TAGFLOW_TAG_SPACING`: tag spacing in cells; unparseable values are
///   logged and ignored
/// - `TAGFLOW_FILTER_CATEGORY`: filter category
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(SPACING_ENV_VAR) {
        match raw.trim().parse::<u16>() {
            Ok(spacing) => config.tag_spacing = spacing,
            Err(e) => warn!(value = %raw, error = %e, "Ignoring invalid {}", SPACING_ENV_VAR),
        }
    }

    if let Ok(category) = std::env::var(CATEGORY_ENV_VAR) {
        config.filter_category = category;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence. Only flags the user actually set
/// are passed as `Some`.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    spacing_override: Option<u16>,
    filtered_override: Option<bool>,
    posts_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(spacing) = spacing_override {
        config.tag_spacing = spacing;
    }

    if let Some(filtered) = filtered_override {
        config.start_filtered = filtered;
    }

    if let Some(posts) = posts_override {
        config.posts_file = Some(posts);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
