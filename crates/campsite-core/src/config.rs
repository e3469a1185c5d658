//! Configuration management for campsite-info

use crate::error::{CampsiteError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Data file settings
    pub data: DataConfig,
    /// Asset resolution settings
    pub assets: AssetConfig,
    /// Navigation settings
    pub navigation: NavigationConfig,
    /// Comment form settings
    pub form: FormConfig,
    /// UI settings
    pub ui: UiConfig,
}

impl Config {
    /// Load configuration from a TOML file, falling back to defaults when absent
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| CampsiteError::from(e).with_context(format!("Failed to parse {}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<()> {
        if self.form.author_min_length > self.form.author_max_length {
            return Err(CampsiteError::Config(format!(
                "form.author_min_length ({}) exceeds form.author_max_length ({})",
                self.form.author_min_length, self.form.author_max_length
            )));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(CampsiteError::Config(
                "ui.tick_rate_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Data file configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path of the directory data file (platform data dir when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Asset-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Prefix for campsite image references
    pub base_url: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            base_url: "assets/".to_string(),
        }
    }
}

/// Navigation-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Link target of the breadcrumb's parent item
    pub directory_link: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            directory_link: "/directory".to_string(),
        }
    }
}

/// Comment form configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Minimum author name length
    pub author_min_length: usize,
    /// Maximum author name length
    pub author_max_length: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            author_min_length: 2,
            author_max_length: 15,
        }
    }
}

/// UI-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Reveal comments one per tick
    pub animate_comments: bool,
    /// Event loop tick in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            animate_comments: true,
            tick_rate_ms: 100,
        }
    }
}
