//! User loadout configuration, persisted as a TOML file
//!
//! Selections are stored as ids and re-resolved against fresh data on
//! load, so a stale saved object can never shadow refreshed data.

use crate::types::{ArmorSlot, CombatStyle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const MIN_CONSTITUTION: u32 = 1;
pub const MAX_CONSTITUTION: u32 = 120;
/// Hard enrage cap; a selected boss's own cap tightens it
pub const MAX_ENRAGE: u32 = 4000;

const CONFIG_DIR: &str = "surv-calc";
const CONFIG_FILE: &str = "config.toml";

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("no platform config directory available")]
    NoConfigDir,
}

/// Persisted loadout preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub combat_style: CombatStyle,
    pub constitution_level: u32,
    pub active_prayer: Option<String>,
    pub active_aura: Option<String>,
    pub familiar: Option<String>,
    pub boss: Option<String>,
    pub boss_mode: Option<String>,
    /// Enrage percentage points (100 = 100%)
    pub enrage: u32,
    pub current_hitpoints_percent: f64,
    /// Selected armor piece id per slot; kept last so the TOML table
    /// serializes after the scalar fields
    pub armor: BTreeMap<ArmorSlot, u64>,
}

impl Default for UserConfig {
    fn default() -> Self {
        UserConfig {
            combat_style: CombatStyle::Melee,
            constitution_level: 99,
            active_prayer: None,
            active_aura: None,
            familiar: None,
            boss: None,
            boss_mode: None,
            enrage: 0,
            current_hitpoints_percent: 100.0,
            armor: BTreeMap::new(),
        }
    }
}

impl UserConfig {
    /// Default location under the platform config directory
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load from a TOML file; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(UserConfig::default());
        }
        let content = fs::read_to_string(path)?;
        let mut config: UserConfig = toml::from_str(&content)?;
        config.clamp();
        Ok(config)
    }

    /// Save as TOML, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Pull out-of-range values back into their valid ranges
    pub fn clamp(&mut self) {
        self.constitution_level = self
            .constitution_level
            .clamp(MIN_CONSTITUTION, MAX_CONSTITUTION);
        self.enrage = self.enrage.min(MAX_ENRAGE);
        self.current_hitpoints_percent = self.current_hitpoints_percent.clamp(0.0, 100.0);
    }
}
