//! Configuration paths and persisted settings.
//!
//! The only persisted setting today is the joint name -> actuator id table,
//! stored as JSON next to other config files.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::entities::{JointMap, default_joint_map};

/// Settings file name inside the config directory
pub const SETTINGS_FILE: &str = "motion_edit.json";
/// Default log file name inside the data directory
pub const LOG_FILE: &str = "motion_edit.log";
/// Environment override for the config directory
pub const CONFIG_DIR_ENV: &str = "MOTION_EDIT_CONFIG_DIR";

/// Configuration for overriding default application paths
#[derive(Debug, Clone)]
pub struct PathConfig {
    /// Custom config directory (from CLI or ENV)
    pub config_dir: Option<PathBuf>,
}

impl PathConfig {
    /// Create PathConfig from CLI arguments and environment variables
    ///
    /// Priority: CLI args → ENV var (MOTION_EDIT_CONFIG_DIR) → None (use defaults)
    pub fn from_env_and_cli(cli_dir: Option<PathBuf>) -> Self {
        let config_dir = cli_dir.or_else(|| std::env::var(CONFIG_DIR_ENV).ok().map(PathBuf::from));

        Self { config_dir }
    }
}

/// Get path to a configuration file
///
/// Priority:
/// 1. CLI --config-dir argument
/// 2. MOTION_EDIT_CONFIG_DIR environment variable
/// 3. Local folder IF any config files exist (motion_edit.json, motion_edit.log)
/// 4. Platform-specific config directory from dirs-next (default)
///
/// Platform paths:
/// - Linux: ~/.config/motion-edit/{name}
/// - macOS: ~/Library/Application Support/motion-edit/{name}
/// - Windows: %APPDATA%\motion-edit\{name}
pub fn config_file(name: &str, config: &PathConfig) -> PathBuf {
    get_config_dir(config).join(name)
}

/// Get path to a data file (logs)
///
/// Same priority as `config_file`, but falls back to the platform data
/// directory (~/.local/share/motion-edit on Linux).
pub fn data_file(name: &str, config: &PathConfig) -> PathBuf {
    get_data_dir(config).join(name)
}

/// Ensure that configuration and data directories exist
pub fn ensure_dirs(config: &PathConfig) -> Result<()> {
    let config_dir = get_config_dir(config);
    let data_dir = get_data_dir(config);

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)
            .with_context(|| format!("Failed to create config directory: {}", config_dir.display()))?;
    }

    // Only create data_dir if it's different from config_dir
    if data_dir != config_dir && !data_dir.exists() {
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    }

    Ok(())
}

/// Check if any config files exist in the given directory
fn has_local_config_files(dir: &Path) -> bool {
    [SETTINGS_FILE, LOG_FILE].iter().any(|f| dir.join(f).exists())
}

fn resolve_dir(config: &PathConfig, platform_dir: Option<PathBuf>) -> PathBuf {
    // Priority 1: Custom directory from CLI or ENV
    if let Some(dir) = &config.config_dir {
        return dir.clone();
    }

    // Priority 2: Local folder IF config files exist there
    if let Ok(current_dir) = std::env::current_dir() {
        if has_local_config_files(&current_dir) {
            return current_dir;
        }
    }

    // Priority 3: Platform-specific directory
    if let Some(dir) = platform_dir {
        return dir.join("motion-edit");
    }

    PathBuf::from(".")
}

fn get_config_dir(config: &PathConfig) -> PathBuf {
    resolve_dir(config, dirs_next::config_dir())
}

fn get_data_dir(config: &PathConfig) -> PathBuf {
    resolve_dir(config, dirs_next::data_dir())
}

/// Persisted editor settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Joint name -> actuator id used for name-addressed edits
    pub joint_to_id: JointMap,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            joint_to_id: default_joint_map(),
        }
    }
}

impl Settings {
    /// Load settings from `path`; a missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Read settings error: {}", path.display()))?;
        let settings = serde_json::from_str(&json)
            .with_context(|| format!("Parse settings error: {}", path.display()))?;
        info!("Settings loaded from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Serialize settings error")?;
        std::fs::write(path, json)
            .with_context(|| format!("Write settings error: {}", path.display()))?;
        info!("Settings saved to {}", path.display());
        Ok(())
    }
}

/// Load a bare `{ "joint": id, ... }` JSON table.
pub fn load_joint_map(path: &Path) -> Result<JointMap> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Read joint map error: {}", path.display()))?;
    let map: JointMap = serde_json::from_str(&json)
        .with_context(|| format!("Parse joint map error: {}", path.display()))?;
    debug!("Joint map with {} entries loaded from {}", map.len(), path.display());
    Ok(map)
}
