//! File system storage for the campsite directory

use campsite_core::campsite::Directory;
use campsite_core::error::{CampsiteError, Result};
use campsite_core::store::DirectoryStorage;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the directory data file
pub const DATA_FILE_NAME: &str = "campsites.json";

/// Single JSON file holding campsites and comments
pub struct FileSystemStorage {
    /// Path of the data file
    path: PathBuf,
}

impl FileSystemStorage {
    /// Create a storage over the given data file, creating its parent directory
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let storage = Self { path: path.into() };
        storage.ensure_parent()?;
        Ok(storage)
    }

    /// Platform data file path (`~/.campsite-info/campsites.json` as fallback)
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "campsite-info", "campsite-info")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".campsite-info")
            })
            .join(DATA_FILE_NAME)
    }

    /// Path of the data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the parent directory exists
    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    CampsiteError::Io(std::io::Error::new(
                        e.kind(),
                        format!("Failed to create data directory: {}", e),
                    ))
                })?;
                debug!("Created data directory: {:?}", parent);
            }
        }
        Ok(())
    }

    /// Get a temporary path for atomic writes
    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(DATA_FILE_NAME);
        self.path.with_file_name(format!(".{}.tmp", name))
    }

    /// Write atomically (write to temp, then rename)
    fn atomic_write(&self, directory: &Directory) -> Result<()> {
        let temp_path = self.temp_path();

        let temp_file = fs::File::create(&temp_path).map_err(|e| {
            CampsiteError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create temp file: {}", e),
            ))
        })?;
        let mut writer = BufWriter::new(temp_file);
        serde_json::to_writer_pretty(&mut writer, directory)?;
        writer.flush()?;

        // Rename to final path (atomic on most filesystems)
        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            CampsiteError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to rename temp file: {}", e),
            ))
        })?;

        debug!(
            "Saved {} campsites and {} comments to {:?}",
            directory.campsites.len(),
            directory.comments.len(),
            self.path
        );
        Ok(())
    }
}

impl DirectoryStorage for FileSystemStorage {
    fn load(&self) -> Result<Directory> {
        let file = fs::File::open(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CampsiteError::DataFileNotFound(self.path.clone())
            } else {
                CampsiteError::Io(e)
            }
        })?;

        let reader = BufReader::new(file);
        let directory: Directory = serde_json::from_reader(reader)
            .map_err(|e| CampsiteError::from(e).with_context(format!("Failed to parse {}", self.path.display())))?;

        debug!("Loaded {} campsites from {:?}", directory.campsites.len(), self.path);
        Ok(directory)
    }

    fn save(&self, directory: &Directory) -> Result<()> {
        self.atomic_write(directory)
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}
