//! Config command implementation.
//!
//! View configuration settings.
//! Config file is located at ~/.config/tb/config.toml.

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::BaseDirs;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use taskboard_core::Priority;
use tracing::debug;

use super::{CommandContext, CommandError, Result};
use crate::output::helpers::DateFormat;

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Task defaults.
    #[serde(default)]
    pub tasks: TasksConfig,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            output: OutputConfig::default(),
            tasks: TasksConfig::default(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,

    /// Date format ("relative" or "iso").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}

/// Task configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TasksConfig {
    /// Start the dashboard with the demo tasks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_demo: Option<bool>,

    /// Priority for tasks added without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_priority: Option<String>,
}

impl Config {
    /// Returns the configured date format (default: relative).
    pub fn date_format(&self) -> Result<DateFormat> {
        match self.output.date_format.as_deref() {
            Some(format) => format.parse().map_err(CommandError::Config),
            None => Ok(DateFormat::default()),
        }
    }

    /// Returns the configured default priority (default: Medium).
    pub fn default_priority(&self) -> Result<Priority> {
        match self.tasks.default_priority.as_deref() {
            Some(priority) => priority
                .parse()
                .map_err(|e| CommandError::Config(format!("default_priority: {e}"))),
            None => Ok(Priority::default()),
        }
    }

    /// Returns whether the dashboard starts with the demo tasks (default: true).
    pub fn seed_demo(&self) -> bool {
        self.tasks.seed_demo.unwrap_or(true)
    }
}

/// Gets the config directory path.
/// Uses XDG-style paths: ~/.config/tb/ on all platforms.
fn get_config_dir() -> Result<PathBuf> {
    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("tb"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("tb"))
        .ok_or_else(|| CommandError::Config("Could not determine config directory".to_string()))
}

/// Gets the config file path.
pub fn get_config_path() -> Result<PathBuf> {
    // Check for override env var first
    if let Ok(path) = env::var("TB_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    let config_dir = get_config_dir()?;
    Ok(config_dir.join("config.toml"))
}

/// Loads the configuration from disk.
///
/// A missing file yields the defaults.
pub fn load_config() -> Result<Config> {
    let path = get_config_path()?;

    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))?;

    debug!(path = %path.display(), version = config.version, "loaded config");
    migrate_config(config)
}

/// Migrates config to current version if needed.
/// Returns the config as-is if already at current version.
fn migrate_config(mut config: Config) -> Result<Config> {
    if config.version > CONFIG_VERSION {
        return Err(CommandError::Config(format!(
            "Config version {} is newer than supported version {}",
            config.version, CONFIG_VERSION
        )));
    }

    // Version 1 is the initial schema; later versions add their steps here.
    config.version = CONFIG_VERSION;
    Ok(config)
}

/// Executes the config show command.
pub fn execute_show(ctx: &CommandContext) -> Result<String> {
    let config = load_config()?;
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": config,
        });
        return Ok(format!("{}\n", serde_json::to_string_pretty(&output)?));
    }
    if ctx.quiet {
        return Ok(String::new());
    }

    let mut output = String::new();
    let header = "Configuration";
    if ctx.use_colors {
        output.push_str(&format!("{}\n\n", header.green().bold()));
    } else {
        output.push_str(&format!("{}\n\n", header));
    }

    output.push_str(&format!("File: {}\n", path.display()));
    output.push_str(&format!("Exists: {}\n\n", path.exists()));

    output.push_str("[output]\n");
    output.push_str(&format!(
        "  color: {}\n",
        config.output.color.unwrap_or(true)
    ));
    output.push_str(&format!("  date_format: {}\n", config.date_format()?));

    output.push_str("\n[tasks]\n");
    output.push_str(&format!("  seed_demo: {}\n", config.seed_demo()));
    output.push_str(&format!(
        "  default_priority: {}\n",
        config.default_priority()?
    ));

    if !path.exists() {
        output.push_str("\n(No config file exists; showing defaults.)\n");
    }

    Ok(output)
}

/// Executes the config path command.
pub fn execute_path(ctx: &CommandContext) -> Result<String> {
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        });
        return Ok(format!("{}\n", serde_json::to_string_pretty(&output)?));
    }

    Ok(format!("{}\n", path.display()))
}
