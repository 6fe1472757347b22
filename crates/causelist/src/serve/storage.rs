use crate::prelude::*;
use causelist_core::upload::is_safe_filename;
use std::io;
use std::path::{Path, PathBuf};

/// Flat directory holding uploads between receipt and extraction.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Open the store, creating the directory when it does not exist.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .with_context(|| f!("Failed to create uploads directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of a stored file, or `None` for names that would leave the directory.
    pub fn path_for(&self, filename: &str) -> Option<PathBuf> {
        is_safe_filename(filename).then(|| self.dir.join(filename))
    }

    fn resolve(&self, filename: &str) -> io::Result<PathBuf> {
        self.path_for(filename).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                f!("invalid file name '{filename}'"),
            )
        })
    }

    pub async fn save(&self, filename: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        let path = self.resolve(filename)?;
        tokio::fs::write(&path, bytes).await?;
        Ok(path)
    }

    pub async fn exists(&self, filename: &str) -> bool {
        match self.path_for(filename) {
            Some(path) => tokio::fs::try_exists(path).await.unwrap_or(false),
            None => false,
        }
    }

    /// Read a stored file as text, replacing invalid UTF-8 sequences.
    pub async fn read(&self, filename: &str) -> io::Result<String> {
        let bytes = tokio::fs::read(self.resolve(filename)?).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    pub async fn remove(&self, filename: &str) -> io::Result<()> {
        tokio::fs::remove_file(self.resolve(filename)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_directory() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("nested").join("Uploads");
        let store = UploadStore::open(&dir).unwrap();
        assert!(store.dir().is_dir());
    }

    #[test]
    fn test_path_for_rejects_traversal() {
        let root = tempfile::tempdir().unwrap();
        let store = UploadStore::open(root.path()).unwrap();
        assert!(store.path_for("../escape.html").is_none());
        assert_eq!(
            store.path_for("1-list.html").unwrap(),
            root.path().join("1-list.html")
        );
    }

    #[tokio::test]
    async fn test_save_read_remove() {
        let root = tempfile::tempdir().unwrap();
        let store = UploadStore::open(root.path()).unwrap();

        store.save("1-list.html", b"<table></table>").await.unwrap();
        assert!(store.exists("1-list.html").await);
        assert_eq!(store.read("1-list.html").await.unwrap(), "<table></table>");

        store.remove("1-list.html").await.unwrap();
        assert!(!store.exists("1-list.html").await);
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let root = tempfile::tempdir().unwrap();
        let store = UploadStore::open(root.path()).unwrap();
        assert!(store.read("nope.html").await.is_err());
        assert!(!store.exists("nope.html").await);
    }

    #[tokio::test]
    async fn test_save_rejects_unsafe_name() {
        let root = tempfile::tempdir().unwrap();
        let store = UploadStore::open(root.path()).unwrap();
        let err = store.save("../x.html", b"x").await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
