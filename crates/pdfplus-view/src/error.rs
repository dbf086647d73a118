//! Error types for view operations and settings persistence.

use std::path::PathBuf;

use pdfplus_xfdf::XfdfError;
use thiserror::Error;

/// Failure of a decorated view operation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ViewError {
    /// The descriptor file could not be read from the vault.
    #[error("failed to read descriptor {path}")]
    ReadDescriptor {
        /// Vault path of the descriptor.
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The descriptor could not be resolved to an external target.
    #[error(transparent)]
    Resolve(#[from] XfdfError),

    /// The view closed before a document child was attached.
    #[error("no document child to load {path} into")]
    Detached {
        /// Vault path of the file being loaded.
        path: String,
    },

    /// The host failed to load the document.
    #[error("document load failed: {0}")]
    Load(String),

    /// The host failed to apply a state write.
    #[error("view state update failed: {0}")]
    State(String),
}

impl ViewError {
    /// Message suitable for a user-facing notice.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::ReadDescriptor { .. } => "Failed to load PDF from XFDF file.".to_string(),
            Self::Resolve(error) => error.user_message(),
            Self::Detached { .. } | Self::Load(_) => "Failed to load the PDF document.".to_string(),
            Self::State(_) => "Failed to restore the PDF view.".to_string(),
        }
    }

    /// Whether the failure happened before anything was loaded.
    #[must_use]
    pub fn is_resolution_failure(&self) -> bool {
        matches!(self, Self::ReadDescriptor { .. } | Self::Resolve(_))
    }
}

/// Result type alias for view operations.
pub type Result<T> = std::result::Result<T, ViewError>;

/// Failure to persist settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Filesystem error while writing.
    #[error("Failed to {operation} settings file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings could not be encoded as TOML.
    #[error("Failed to serialize settings")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_failures() {
        let err = ViewError::from(XfdfError::MalformedDescriptor);
        assert!(err.is_resolution_failure());
        assert!(err.user_message().contains("<f href>"));

        let err = ViewError::ReadDescriptor {
            path: "a.xfdf".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.is_resolution_failure());

        assert!(!ViewError::Load("boom".to_string()).is_resolution_failure());
        assert!(
            !ViewError::Detached {
                path: "a.xfdf".to_string()
            }
            .is_resolution_failure()
        );
    }
}
