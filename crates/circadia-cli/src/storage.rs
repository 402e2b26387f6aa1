//! TOML-based record store for onboarding data.
//!
//! Holds the circadian profile and the optional menstrual cycle baseline at
//! `~/.config/circadia/records.toml`. This is the persistence collaborator
//! the engine reads from; the engine itself never touches the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use circadia_core::{CircadianProfile, ConfigError, CoreError, MenstrualCycleBaseline};

/// The two onboarding records, both optional on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordStore {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<CircadianProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle: Option<MenstrualCycleBaseline>,
}

/// Configuration directory for circadia.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("circadia"))
        .ok_or(ConfigError::NoConfigDir)
}

fn records_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("records.toml"))
}

impl RecordStore {
    /// Load records from the default location. A missing file is an empty
    /// store, not an error.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&records_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Save records to the default location, creating parent directories.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&records_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::SaveFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        }
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        fs::write(path, raw).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// The stored profile, or a pointer at onboarding when there is none.
    pub fn require_profile(&self) -> Result<&CircadianProfile, CoreError> {
        self.profile.as_ref().ok_or_else(|| {
            CoreError::Custom(
                "no circadian profile found; run `circadia profile set` first".to_string(),
            )
        })
    }
}
