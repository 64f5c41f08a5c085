//! File-backed storage port
//!
//! Keeps one file per storage key in a directory, holding the key's JSON
//! text verbatim.

use crate::config::app::NAME;
use crate::error::{AppError, Result};
use newsdesk::error::{NewsError, Result as StoreResult};
use newsdesk::store::Storage;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File extension for stored values
const VALUE_EXT: &str = "json";

/// Get the application config directory path
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(NAME))
        .ok_or_else(|| AppError::Config(
            "Could not determine config directory. HOME environment variable may not be set.".to_string()
        ))
}

/// Ensure the config directory exists, creating it if necessary
pub fn ensure_config_dir() -> Result<PathBuf> {
    let dir = config_dir()?;
    create_dir_if_needed(&dir)?;
    Ok(dir)
}

/// Create a directory if it doesn't exist, with proper error handling
fn create_dir_if_needed(path: &Path) -> StoreResult<()> {
    match fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) => {
            let msg = match e.kind() {
                ErrorKind::PermissionDenied => {
                    format!("Permission denied: cannot create directory {:?}", path)
                }
                _ => format!("Failed to create directory {:?}: {}", path, e),
            };
            Err(NewsError::Storage(msg))
        }
    }
}

/// Storage keeping each key in `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at the default config directory
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(ensure_config_dir()?))
    }

    /// Storage rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the value files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(NewsError::Storage(format!("Invalid storage key '{}'", key)));
        }
        Ok(self.dir.join(format!("{key}.{VALUE_EXT}")))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) => match e.kind() {
                ErrorKind::NotFound => Ok(None),
                ErrorKind::PermissionDenied => Err(NewsError::Storage(format!(
                    "Permission denied: cannot read {:?}",
                    path
                ))),
                _ => Err(NewsError::Storage(format!(
                    "Failed to read {:?}: {}",
                    path, e
                ))),
            },
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        create_dir_if_needed(&self.dir)?;

        match fs::write(&path, value) {
            Ok(()) => Ok(()),
            Err(e) => {
                let msg = match e.kind() {
                    ErrorKind::PermissionDenied => {
                        format!("Permission denied: cannot write to {:?}", path)
                    }
                    ErrorKind::ReadOnlyFilesystem => {
                        format!("Cannot write to {:?}: filesystem is read-only", path)
                    }
                    _ => format!("Failed to write to {:?}: {}", path, e),
                };
                Err(NewsError::Storage(msg))
            }
        }
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) => match e.kind() {
                ErrorKind::NotFound => Ok(()), // Already gone, that's fine
                _ => Err(NewsError::Storage(format!(
                    "Failed to delete {:?}: {}",
                    path, e
                ))),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsdesk::config::keys::FAVORITES;
    use newsdesk::store::NewsStore;
    use std::env::temp_dir;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_storage(name: &str) -> FileStorage {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        FileStorage::new(temp_dir().join(format!("newsdesk_test_{}_{}", id, name)))
    }

    fn cleanup(storage: &FileStorage) {
        let _ = fs::remove_dir_all(storage.dir());
    }

    #[test]
    fn test_set_and_get() {
        let storage = temp_storage("set_get");

        storage.set("favoritesNews", "[2,3]").unwrap();
        assert!(storage.dir().join("favoritesNews.json").exists());
        assert_eq!(storage.get("favoritesNews").unwrap().as_deref(), Some("[2,3]"));

        cleanup(&storage);
    }

    #[test]
    fn test_get_missing_key() {
        let storage = temp_storage("missing");
        assert_eq!(storage.get("favoritesNews").unwrap(), None);
    }

    #[test]
    fn test_creates_dir_on_write() {
        let storage = temp_storage("nested");
        let storage = FileStorage::new(storage.dir().join("subdir"));
        assert!(!storage.dir().exists());

        storage.set("categoriesList", "[]").unwrap();
        assert!(storage.dir().exists());

        if let Some(parent) = storage.dir().parent() {
            let _ = fs::remove_dir_all(parent);
        }
    }

    #[test]
    fn test_remove() {
        let storage = temp_storage("remove");

        storage.set("newsCategories", "{}").unwrap();
        storage.remove("newsCategories").unwrap();
        assert_eq!(storage.get("newsCategories").unwrap(), None);

        // Should not error
        storage.remove("newsCategories").unwrap();

        cleanup(&storage);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let storage = temp_storage("keys");
        assert!(storage.path_for("../escape").is_err());
        assert!(storage.path_for("a/b").is_err());
        assert!(storage.path_for("").is_err());
        assert!(storage.set("../escape", "x").is_err());
        assert!(storage.path_for("favoritesNews").is_ok());
    }

    #[test]
    fn test_news_store_writes_through_to_file() {
        let storage = temp_storage("write_through");
        let shared: Arc<dyn Storage> = Arc::new(storage.clone());

        let mut store = NewsStore::load(shared.clone());
        store.add_favorite(2);
        store.add_favorite(3);

        let raw = fs::read_to_string(storage.path_for(FAVORITES).unwrap()).unwrap();
        assert_eq!(raw, "[2,3]");

        let reloaded = NewsStore::load(shared);
        assert_eq!(reloaded.favorites(), &[2, 3]);

        cleanup(&storage);
    }

    #[test]
    fn test_corrupt_file_is_ignored_by_store() {
        let storage = temp_storage("corrupt");
        storage.set(FAVORITES, "not valid json").unwrap();

        let store = NewsStore::load(Arc::new(storage.clone()));
        assert!(store.favorites().is_empty());

        cleanup(&storage);
    }
}
