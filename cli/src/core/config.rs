//! # RuleBot Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for RuleBot, handling loading,
//! merging, validation, and access to configuration data. It combines defaults,
//! user settings, and project-specific overrides.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.rulebot.toml` in current directory or ancestors
//! 2. User-specific `config.toml` in the platform config directory, or the
//!    file named by `RULEBOT_CONFIG` when that variable is set
//! 3. Default values defined in the code
//!
//! Command-line flags (`--seed`, `--port`, ...) are applied on top by the
//! individual commands.
//!
//! ## Examples
//!
//! ```toml
//! [responder]
//! seed = 42
//! clock = "utc"
//!
//! [chat]
//! user_label = "Me"
//! bot_label = "Bot"
//!
//! [srv]
//! port = 9000
//! host = "0.0.0.0"
//! enable_cors = false
//! ```
//!
//! ```rust,no_run
//! let cfg = rulebot::core::config::load_config()?;
//! println!("chatting as {}", cfg.chat.user_label);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
use crate::core::error::{RulebotError, Result};
use crate::responder::clock::ClockKind;
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    net::{IpAddr, Ipv4Addr},
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Environment variable naming an explicit user-level config file.
pub const CONFIG_ENV_VAR: &str = "RULEBOT_CONFIG";

const PROJECT_CONFIG_FILENAME: &str = ".rulebot.toml";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub responder: ResponderConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub srv: SrvConfig,
}

/// Settings for the rule dispatcher.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ResponderConfig {
    /// Fixed seed for random replies. Unset means entropy-seeded.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Clock read by the time and date rules.
    #[serde(default)]
    pub clock: ClockKind,
}

/// Labels printed by `rulebot chat`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    #[serde(default = "default_user_label")]
    pub user_label: String,
    #[serde(default = "default_bot_label")]
    pub bot_label: String,
}

/// Defaults for `rulebot srv`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SrvConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            user_label: default_user_label(),
            bot_label: default_bot_label(),
        }
    }
}

impl Default for SrvConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            enable_cors: default_enable_cors(),
        }
    }
}

fn default_user_label() -> String {
    "You".to_string()
}
fn default_bot_label() -> String {
    "RuleBot".to_string()
}
fn default_port() -> u16 {
    8000
}
fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}
fn default_enable_cors() -> bool {
    true
}

/// Loads, merges and validates configuration for the current directory.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let project_config = load_project_config(&current_dir)?;
    let merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(explicit) = std::env::var_os(CONFIG_ENV_VAR) {
        let config_path = PathBuf::from(explicit);
        info!(
            "Loading configuration named by {}: {}",
            CONFIG_ENV_VAR,
            config_path.display()
        );
        return load_config_from_path(&config_path).map(Some);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "RuleBot", "rulebot") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start: &Path) -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path(start) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file (.rulebot.toml) found in {} or ancestors.",
            start.display()
        );
        Ok(None)
    }
}

/// Walks up from `start` looking for `.rulebot.toml`, stopping at a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the built-in defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = Config::default();
    let mut merged = Config::default();

    merged.responder.seed = project_cfg.responder.seed.or(user.responder.seed);
    merged.responder.clock = if project_cfg.responder.clock != defaults.responder.clock {
        project_cfg.responder.clock
    } else {
        user.responder.clock
    };

    merged.chat.user_label = if project_cfg.chat.user_label != defaults.chat.user_label {
        project_cfg.chat.user_label
    } else {
        user.chat.user_label
    };
    merged.chat.bot_label = if project_cfg.chat.bot_label != defaults.chat.bot_label {
        project_cfg.chat.bot_label
    } else {
        user.chat.bot_label
    };

    merged.srv.port = if project_cfg.srv.port != defaults.srv.port {
        project_cfg.srv.port
    } else {
        user.srv.port
    };
    merged.srv.host = if project_cfg.srv.host != defaults.srv.host {
        project_cfg.srv.host
    } else {
        user.srv.host
    };
    merged.srv.enable_cors = if project_cfg.srv.enable_cors != defaults.srv.enable_cors {
        project_cfg.srv.enable_cors
    } else {
        user.srv.enable_cors
    };
    merged
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    for (key, label) in [
        ("chat.user_label", &config.chat.user_label),
        ("chat.bot_label", &config.chat.bot_label),
    ] {
        if label.trim().is_empty() {
            return Err(anyhow!(RulebotError::Config(format!(
                "'{}' cannot be empty.",
                key
            ))));
        }
    }
    if config.srv.port == 0 {
        return Err(anyhow!(RulebotError::Config(
            "'srv.port' must be between 1 and 65535.".to_string()
        )));
    }
    info!("Configuration validation successful.");
    Ok(())
}
