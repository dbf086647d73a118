//! Environment the resolver runs in, injected at construction.

use std::path::{Path, PathBuf};

/// Storage backend of the content store.
pub trait VaultAdapter {
    /// Absolute filesystem location of the store root, or `None` when the
    /// store is not backed by a local filesystem.
    fn base_path(&self) -> Option<PathBuf>;
}

/// Existence check for resolved targets.
pub trait FileProbe {
    /// Whether `path` names a loadable file.
    fn exists(&self, path: &Path) -> bool;
}

/// A store with no filesystem root (remote or in-memory).
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedVault;

impl VaultAdapter for DetachedVault {
    fn base_path(&self) -> Option<PathBuf> {
        None
    }
}

impl VaultAdapter for PathBuf {
    fn base_path(&self) -> Option<PathBuf> {
        Some(self.clone())
    }
}

/// Checks the local filesystem. Directories do not count as targets.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileProbe;

impl FileProbe for LocalFileProbe {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}
