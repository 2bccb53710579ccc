use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at an alternative config file
pub const CONFIG_ENV_VAR: &str = "TWCAL_CONFIG";

pub const DEFAULT_SOURCE_LABEL: &str = "中華民國政府行政機關辦公日曆表";
pub const DEFAULT_CORRECTED_MARKER: &str = "修正版";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub source: SourceConfig,
}

/// Directories for each stage of the pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub csv_dir: PathBuf,
    pub json_dir: PathBuf,
    pub ics_dir: PathBuf,
}

/// How source CSV files are named
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub label: String,
    pub corrected_marker: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        let data = PathBuf::from("data");
        Self {
            csv_dir: data.join(DEFAULT_SOURCE_LABEL),
            json_dir: data.join("json"),
            ics_dir: data.join("calendars"),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_SOURCE_LABEL.to_string(),
            corrected_marker: DEFAULT_CORRECTED_MARKER.to_string(),
        }
    }
}

impl Config {
    /// Load the user config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        match get_config_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            Some(path) => {
                log::debug!("No config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        log::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}

fn get_config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV_VAR) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    ProjectDirs::from("tw", "twcal", "twcal").map(|dirs| dirs.config_dir().join("config.toml"))
}
