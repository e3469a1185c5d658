//! Directory storage trait and abstractions

use crate::campsite::Directory;
use crate::error::Result;

/// Trait for directory storage implementations
pub trait DirectoryStorage: Send + Sync {
    /// Load the whole directory
    fn load(&self) -> Result<Directory>;

    /// Replace the stored directory
    fn save(&self, directory: &Directory) -> Result<()>;

    /// Check whether anything has been stored yet
    fn exists(&self) -> bool;

    /// Load, or fall back to an empty directory when nothing is stored
    fn load_or_default(&self) -> Result<Directory> {
        if self.exists() {
            self.load()
        } else {
            Ok(Directory::default())
        }
    }
}

/// In-memory storage for tests and throwaway sessions
pub mod memory {
    use super::*;
    use std::sync::RwLock;

    /// In-memory directory storage
    #[derive(Debug, Default)]
    pub struct MemoryStorage {
        directory: RwLock<Option<Directory>>,
    }

    impl MemoryStorage {
        /// Create an empty in-memory storage
        pub fn new() -> Self {
            Self::default()
        }

        /// Create a storage already holding a directory
        pub fn with_directory(directory: Directory) -> Self {
            Self {
                directory: RwLock::new(Some(directory)),
            }
        }
    }

    impl DirectoryStorage for MemoryStorage {
        fn load(&self) -> Result<Directory> {
            let guard = self
                .directory
                .read()
                .map_err(|_| crate::CampsiteError::Config("storage lock poisoned".to_string()))?;
            Ok(guard.clone().unwrap_or_default())
        }

        fn save(&self, directory: &Directory) -> Result<()> {
            let mut guard = self
                .directory
                .write()
                .map_err(|_| crate::CampsiteError::Config("storage lock poisoned".to_string()))?;
            *guard = Some(directory.clone());
            Ok(())
        }

        fn exists(&self) -> bool {
            self.directory
                .read()
                .map(|guard| guard.is_some())
                .unwrap_or(false)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::types::CampsiteId;

        #[test]
        fn test_memory_storage_save_load() {
            let storage = MemoryStorage::new();
            assert!(!storage.exists());
            assert!(storage.load_or_default().unwrap().campsites.is_empty());

            storage.save(&Directory::sample()).unwrap();
            assert!(storage.exists());

            let loaded = storage.load().unwrap();
            assert!(loaded.campsite(CampsiteId(0)).is_some());
        }

        #[test]
        fn test_with_directory() {
            let storage = MemoryStorage::with_directory(Directory::sample());
            assert!(storage.exists());
            assert_eq!(storage.load().unwrap(), Directory::sample());
        }
    }
}
