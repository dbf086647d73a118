//! Files inside the content store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A file addressed by its `/`-separated path relative to the store root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VaultFile {
    path: String,
}

impl VaultFile {
    /// Create a file reference. Backslashes and leading slashes are
    /// normalized away so the path is always store-relative.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into().replace('\\', "/");
        Self {
            path: path.trim_start_matches('/').to_string(),
        }
    }

    /// Store-relative path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Final path component.
    pub fn name(&self) -> &str {
        self.path
            .rsplit_once('/')
            .map_or(self.path.as_str(), |(_, name)| name)
    }

    /// Extension without the dot, if the name has one.
    pub fn extension(&self) -> Option<&str> {
        match self.name().rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
            _ => None,
        }
    }

    /// Store-relative directory containing the file (`""` at the root).
    pub fn parent(&self) -> &str {
        self.path.rsplit_once('/').map_or("", |(dir, _)| dir)
    }

    /// Whether the extension equals `extension`, ignoring ASCII case.
    pub fn has_extension(&self, extension: &str) -> bool {
        self.extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
    }
}

impl fmt::Display for VaultFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl From<&str> for VaultFile {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components() {
        let file = VaultFile::new("folder/sub/note.xfdf");
        assert_eq!(file.name(), "note.xfdf");
        assert_eq!(file.parent(), "folder/sub");
        assert_eq!(file.extension(), Some("xfdf"));
    }

    #[test]
    fn test_root_file() {
        let file = VaultFile::new("/note.XFDF");
        assert_eq!(file.path(), "note.XFDF");
        assert_eq!(file.parent(), "");
        assert!(file.has_extension("xfdf"));
    }

    #[test]
    fn test_dotfile_has_no_extension() {
        assert_eq!(VaultFile::new("dir/.hidden").extension(), None);
        assert_eq!(VaultFile::new("dir/README").extension(), None);
    }

    #[test]
    fn test_backslashes_normalized() {
        assert_eq!(VaultFile::new("a\\b\\c.pdf").parent(), "a/b");
    }
}
