//! Persisted settings.
//!
//! Loaded from TOML in the user's config directory; missing or unreadable
//! files fall back to defaults.

use std::path::{Path, PathBuf};

use pdfplus_xfdf::{DEFAULT_RESOURCE_PREFIX, ExternalPathResolver, VaultAdapter};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::SettingsError;

/// Settings file name inside the config directory.
pub const SETTINGS_FILE: &str = "settings.toml";

/// Root settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// View-state behaviour.
    pub view: ViewSettings,

    /// External-file redirects.
    pub redirect: RedirectSettings,
}

/// View-state behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Make every state restore a back/forward history entry.
    pub always_record_history: bool,
}

/// External-file redirects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectSettings {
    /// Host prefix that turns a filesystem path into a loadable resource.
    pub resource_path_prefix: String,

    /// Extension of descriptor files (compared case-insensitively).
    pub descriptor_extension: String,
}

impl Default for RedirectSettings {
    fn default() -> Self {
        Self {
            resource_path_prefix: DEFAULT_RESOURCE_PREFIX.to_string(),
            descriptor_extension: "xfdf".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        toml::from_str(&content).unwrap_or_else(|error| {
            warn!(path = %path.display(), %error, "invalid settings file, using defaults");
            Self::default()
        })
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                operation: "create directory for",
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| SettingsError::Io {
            operation: "write",
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("md", "PdfPlus", "pdfplus")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
            .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE))
    }

    /// Resolver for a vault, using the configured resource prefix.
    pub fn resolver(&self, adapter: impl VaultAdapter + 'static) -> ExternalPathResolver {
        ExternalPathResolver::new(adapter, self.redirect.resource_path_prefix.clone())
    }
}
