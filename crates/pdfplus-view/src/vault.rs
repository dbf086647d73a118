//! Filesystem-backed vault.

use std::io;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use pdfplus_model::VaultFile;
use pdfplus_xfdf::VaultAdapter;
use pdfplus_xfdf::path::{normalize, to_file_url, to_resource_locator};

use crate::host::Vault;

/// A vault rooted at a local directory.
#[derive(Debug, Clone)]
pub struct FsVault {
    root: PathBuf,
    resource_prefix: String,
}

impl FsVault {
    /// Create a vault at `root`. Relative roots are made absolute against the
    /// working directory.
    pub fn new(root: impl Into<PathBuf>, resource_prefix: impl Into<String>) -> Self {
        let root = root.into();
        Self {
            root: std::path::absolute(&root).unwrap_or(root),
            resource_prefix: resource_prefix.into(),
        }
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem path of `file`.
    pub fn absolute(&self, file: &VaultFile) -> PathBuf {
        self.root.join(file.path())
    }
}

impl Vault for FsVault {
    async fn read(&self, file: &VaultFile) -> io::Result<String> {
        tokio::fs::read_to_string(self.absolute(file)).await
    }

    fn resource_path(&self, file: &VaultFile) -> String {
        let absolute = self.absolute(file);
        let url = to_file_url(&normalize(&absolute.to_string_lossy()));
        let locator = to_resource_locator(&self.resource_prefix, &url).unwrap_or(url);

        let modified = std::fs::metadata(&absolute)
            .and_then(|meta| meta.modified())
            .ok()
            .and_then(|time| time.duration_since(UNIX_EPOCH).ok());
        match modified {
            Some(since_epoch) => format!("{locator}?{}", since_epoch.as_millis()),
            None => locator,
        }
    }
}

impl VaultAdapter for FsVault {
    fn base_path(&self) -> Option<PathBuf> {
        Some(self.root.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdfplus_model::strip_cache_buster;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_read() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("notes")).unwrap();
        std::fs::write(dir.path().join("notes/a.xfdf"), "<xfdf/>").unwrap();

        let vault = FsVault::new(dir.path(), "app://local/");
        let content = vault.read(&VaultFile::new("notes/a.xfdf")).await.unwrap();
        assert_eq!(content, "<xfdf/>");
    }

    #[test]
    fn test_resource_path_has_cache_buster_for_existing_files() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.xfdf"), "<xfdf/>").unwrap();
        let vault = FsVault::new(dir.path(), "app://local/");

        let existing = vault.resource_path(&VaultFile::new("a.xfdf"));
        assert!(existing.starts_with("app://local/"));
        assert_ne!(strip_cache_buster(&existing), existing);
        assert!(strip_cache_buster(&existing).ends_with("/a.xfdf"));

        let missing = vault.resource_path(&VaultFile::new("b.xfdf"));
        assert_eq!(strip_cache_buster(&missing), missing);
    }

    #[test]
    fn test_base_path() {
        let dir = tempdir().unwrap();
        let vault = FsVault::new(dir.path(), "app://local/");
        assert_eq!(vault.base_path().as_deref(), Some(dir.path()));
    }
}
