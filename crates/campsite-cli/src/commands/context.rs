//! Resolved configuration and data locations shared by the commands

use anyhow::{Context as _, Result};
use campsite_core::config::Config;
use campsite_storage::FileSystemStorage;
use std::path::{Path, PathBuf};

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Loaded configuration plus the paths it came from
#[derive(Debug, Clone)]
pub struct Context {
    pub config_path: PathBuf,
    pub config: Config,
    pub data_path: PathBuf,
}

impl Context {
    /// Load the config and resolve the data file
    ///
    /// Data path precedence: `--data`, then `[data] path` (relative to the
    /// config file), then the platform data directory.
    pub fn load(config_path: Option<PathBuf>, data_path: Option<PathBuf>) -> Result<Self> {
        let config_path = config_path.unwrap_or_else(default_config_path);
        let config = Config::load(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

        let data_path = data_path
            .or_else(|| {
                config
                    .data
                    .path
                    .as_ref()
                    .map(|p| resolve_relative(&config_path, p))
            })
            .unwrap_or_else(FileSystemStorage::default_path);

        tracing::debug!("Config: {:?}, data: {:?}", config_path, data_path);

        Ok(Self {
            config_path,
            config,
            data_path,
        })
    }

    /// Storage over the resolved data file
    pub fn storage(&self) -> Result<FileSystemStorage> {
        FileSystemStorage::new(&self.data_path).with_context(|| {
            format!("Failed to open data file {}", self.data_path.display())
        })
    }
}

/// Platform config file path (`~/.campsite-info/config.toml` as fallback)
pub fn default_config_path() -> PathBuf {
    directories::ProjectDirs::from("com", "campsite-info", "campsite-info")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".campsite-info"))
        .join(CONFIG_FILE_NAME)
}

fn resolve_relative(config_path: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    config_path
        .parent()
        .map(|dir| dir.join(path))
        .unwrap_or_else(|| path.to_path_buf())
}
