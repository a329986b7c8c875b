//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

/// Smallest accepted layout-units-per-row scale.
pub const MIN_UNITS_PER_ROW: u16 = 1;
/// Largest accepted layout-units-per-row scale.
pub const MAX_UNITS_PER_ROW: u16 = 64;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/tripline/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Whether the timeline accepts edits.
    #[serde(default)]
    pub editable: Option<bool>,

    /// Layout units drawn per terminal row.
    #[serde(default)]
    pub units_per_row: Option<u16>,

    /// Show the key hint footer.
    #[serde(default)]
    pub show_help_hint: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Whether edits and the context menu are enabled.
    pub editable: bool,
    /// Layout units drawn per terminal row.
    pub units_per_row: u16,
    /// Show the key hint in the status bar.
    pub show_help_hint: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            editable: true,
            units_per_row: 8,
            show_help_hint: true,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/tripline/tripline.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("tripline").join("tripline.log")
    } else {
        PathBuf::from("tripline.log")
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

    info!(path = %path.display(), "Loaded config file");
    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/tripline/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tripline").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TRIPLINE_CONFIG` environment variable
/// 3. Default path `~/.config/tripline/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
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

    if let Ok(env_path) = std::env::var("TRIPLINE_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Parse a boolean environment value (`true/false/1/0/yes/no`).
fn parse_env_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TRIPLINE_EDITABLE`: Override editability
///
/// Unparseable values are ignored with a warning.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var("TRIPLINE_EDITABLE") {
        match parse_env_bool(&raw) {
            Some(editable) => config.editable = editable,
            None => warn!(value = %raw, "Ignoring unparseable TRIPLINE_EDITABLE"),
        }
    }

    config
}

fn clamp_units_per_row(value: u16) -> u16 {
    let clamped = value.clamp(MIN_UNITS_PER_ROW, MAX_UNITS_PER_ROW);
    if clamped != value {
        warn!(value, clamped, "units_per_row out of range, clamping");
    }
    clamped
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        editable: config.editable.unwrap_or(defaults.editable),
        units_per_row: config
            .units_per_row
            .map(clamp_units_per_row)
            .unwrap_or(defaults.units_per_row),
        show_help_hint: config.show_help_hint.unwrap_or(defaults.show_help_hint),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// # Arguments
///
/// * `config` - Base resolved config (already merged with defaults, file, and env vars)
/// * `read_only` - `--read-only` was passed
/// * `units_per_row_override` - Optional scale from `--units-per-row`
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    read_only: bool,
    units_per_row_override: Option<u16>,
) -> ResolvedConfig {
    if read_only {
        config.editable = false;
    }

    if let Some(units_per_row) = units_per_row_override {
        config.units_per_row = clamp_units_per_row(units_per_row);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
