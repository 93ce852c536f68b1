//! Configuration management for diffcheck
//!
//! Supports a single feature section:
//! - [compare] - report rendering and save settings

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Current configuration version
pub const CURRENT_CONFIG_VERSION: &str = "1";

/// Supported configuration versions
pub const SUPPORTED_CONFIG_VERSIONS: &[&str] = &["1"];

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version for tracking schema changes
    #[serde(default = "default_config_version")]
    pub version: String,

    /// Comparison report configuration
    #[serde(default)]
    pub compare: Option<CompareConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_config_version(),
            compare: None,
        }
    }
}

/// Configuration for comparison reports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Directory used when --save is given a directory-less bare name
    #[serde(default = "default_save_dir")]
    pub save_dir: String,

    /// Include unchanged lines in per-function reports
    #[serde(default = "default_show_unchanged")]
    pub show_unchanged: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            save_dir: default_save_dir(),
            show_unchanged: default_show_unchanged(),
        }
    }
}

fn default_config_version() -> String {
    CURRENT_CONFIG_VERSION.to_string()
}

fn default_save_dir() -> String {
    "diffcheck-reports".to_string()
}

fn default_show_unchanged() -> bool {
    true
}

impl Config {
    /// Check if the configuration version is supported
    pub fn is_version_supported(&self) -> bool {
        SUPPORTED_CONFIG_VERSIONS.contains(&self.version.as_str())
    }

    /// Get a warning message for unsupported versions
    pub fn version_warning(&self) -> Option<String> {
        if self.is_version_supported() {
            return None;
        }
        Some(format!(
            "Warning: config version '{}' is unsupported (supported: {}); falling back to defaults where needed",
            self.version,
            SUPPORTED_CONFIG_VERSIONS.join(", ")
        ))
    }

    /// Load configuration from file
    pub fn load_from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        if let Some(warning) = config.version_warning() {
            eprintln!("{}", warning);
        }

        if config.version.is_empty() {
            config.version = CURRENT_CONFIG_VERSION.to_string();
        }

        Ok(config)
    }

    /// Get the default config directory path
    pub fn get_config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".config").join("diffcheck"))
    }

    /// Load configuration with priority:
    /// 1. Defaults
    /// 2. Global config (~/.config/diffcheck/config.toml)
    /// 3. Repo config (.diffcheck.toml)
    /// 4. Explicit --config path, when given
    pub fn load(explicit_path: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(config_dir) = Self::get_config_dir() {
            let global_config = config_dir.join("config.toml");
            if global_config.exists() {
                if let Ok(loaded) = Self::load_from_file(&global_config) {
                    config = config.merge(loaded);
                }
            }
        }

        let repo_config = PathBuf::from(".diffcheck.toml");
        if repo_config.exists() {
            if let Ok(loaded) = Self::load_from_file(&repo_config) {
                config = config.merge(loaded);
            }
        }

        if let Some(path) = explicit_path {
            if let Ok(loaded) = Self::load_from_file(&PathBuf::from(path)) {
                config = config.merge(loaded);
            }
        }

        config
    }

    /// Merge another config into this one (other takes precedence)
    pub fn merge(mut self, other: Config) -> Self {
        if !other.version.is_empty() {
            self.version = other.version;
        }
        if other.compare.is_some() {
            self.compare = other.compare;
        }
        self
    }

    /// Compare section with defaults filled in
    pub fn compare(&self) -> CompareConfig {
        self.compare.clone().unwrap_or_default()
    }
}
