use crate::domain::ports::Storage;
use crate::utils::error::{PlannerError, Result};
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Joins `path` onto the base directory. Absolute paths and `..` are refused.
    fn resolve(&self, path: &str) -> Result<PathBuf> {
        let relative = Path::new(path);
        let contained = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !contained || path.is_empty() {
            return Err(PlannerError::ValidationError {
                message: format!("Path '{}' is outside the storage directory", path),
            });
        }
        Ok(self.base_path.join(relative))
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path)?;
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path)?;

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }

    async fn delete_file(&self, path: &str) -> Result<()> {
        let full_path = self.resolve(path)?;
        match tokio::fs::remove_file(full_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process storage, mostly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.files.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.files.lock().await.is_empty()
    }
}

impl Storage for MemoryStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let files = self.files.lock().await;
        files.get(path).cloned().ok_or_else(|| {
            PlannerError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path),
            ))
        })
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let mut files = self.files.lock().await;
        files.insert(path.to_string(), data.to_vec());
        Ok(())
    }

    async fn delete_file(&self, path: &str) -> Result<()> {
        self.files.lock().await.remove(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_local_storage_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        storage.write_file("nested/dir/plan.json", b"{}").await.unwrap();
        let data = storage.read_file("nested/dir/plan.json").await.unwrap();
        assert_eq!(data, b"{}");

        storage.delete_file("nested/dir/plan.json").await.unwrap();
        assert!(storage.read_file("nested/dir/plan.json").await.is_err());
        // deleting twice is fine
        storage.delete_file("nested/dir/plan.json").await.unwrap();
    }

    #[tokio::test]
    async fn test_local_storage_refuses_paths_outside_base() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().join("output"));

        for path in ["../escaped.html", "a/../../escaped.html", "/tmp/escaped.html", ""] {
            assert!(matches!(
                storage.write_file(path, b"x").await,
                Err(PlannerError::ValidationError { .. })
            ));
        }
        assert!(!temp_dir.path().join("escaped.html").exists());
    }

    #[tokio::test]
    async fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty().await);

        storage.write_file("a.json", b"data").await.unwrap();
        assert_eq!(storage.len().await, 1);
        assert_eq!(storage.read_file("a.json").await.unwrap(), b"data");

        storage.delete_file("a.json").await.unwrap();
        assert!(matches!(
            storage.read_file("a.json").await,
            Err(PlannerError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound
        ));
    }
}
