use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

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

    /// Storage rooted at the working directory.
    pub fn current_dir() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Truncates an existing file; the handle is closed before returning.
        fs::write(full_path, data)?;
        Ok(())
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let full_path = self.base_path.join(path);
        fs::canonicalize(&full_path).unwrap_or_else(|_| absolute(&full_path))
    }
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_file_creates_and_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        storage.write_file("out.tle", b"first version, longer\n").await.unwrap();
        storage.write_file("out.tle", b"second\n").await.unwrap();

        let content = fs::read_to_string(temp_dir.path().join("out.tle")).unwrap();
        assert_eq!(content, "second\n");
    }

    #[tokio::test]
    async fn test_write_file_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        storage.write_file("nested/dir/out.tle", b"x\n").await.unwrap();

        assert!(temp_dir.path().join("nested/dir/out.tle").exists());
    }

    #[tokio::test]
    async fn test_resolve_is_absolute() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());
        storage.write_file("out.tle", b"x\n").await.unwrap();

        let resolved = storage.resolve("out.tle");
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("out.tle"));
    }

    #[tokio::test]
    async fn test_write_below_a_regular_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());
        storage.write_file("blocker", b"file, not dir").await.unwrap();

        let err = storage.write_file("blocker/out.tle", b"x").await.unwrap_err();
        assert!(matches!(err, crate::utils::error::MergeError::IoError(_)));
    }
}
