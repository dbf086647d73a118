//! Descriptor resolution errors.
//!
//! Every failure aborts the load before any redirect is set up, so each
//! variant carries enough context for a single user-facing notice.

use thiserror::Error;

/// Failure while turning a descriptor into an external target.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum XfdfError {
    /// The descriptor has no `<f href="...">` element.
    #[error("descriptor has no <f href> element")]
    MalformedDescriptor,

    /// The `href` matches none of the supported path forms.
    #[error("unsupported path format: {raw}")]
    UnsupportedPathFormat {
        /// The offending `href` value.
        raw: String,
    },

    /// A relative `href` needs the store's filesystem root, and the store
    /// has none.
    #[error("relative path requires a filesystem-backed vault")]
    UnsupportedEnvironment,

    /// The resolved target does not exist.
    #[error("target not found: {path}")]
    TargetNotFound {
        /// Filesystem path that was checked.
        path: String,
    },

    /// The descriptor is not well-formed XML.
    #[error("failed to parse descriptor: {message}")]
    ParseFailure {
        /// Parser diagnostic.
        message: String,
    },
}

impl XfdfError {
    /// Message suitable for a user-facing notice.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MalformedDescriptor => {
                "The XFDF file does not reference a PDF (missing <f href> element).".to_string()
            }
            Self::UnsupportedPathFormat { raw } => {
                format!("Unsupported PDF path format: \"{raw}\"")
            }
            Self::UnsupportedEnvironment => {
                "Cannot resolve relative path: the vault is not stored on the local file system."
                    .to_string()
            }
            Self::TargetNotFound { path } => format!("Referenced PDF file not found: {path}"),
            Self::ParseFailure { .. } => "Failed to load PDF from XFDF file.".to_string(),
        }
    }

    pub(crate) fn parse(error: impl std::fmt::Display) -> Self {
        Self::ParseFailure {
            message: error.to_string(),
        }
    }
}

/// Result type alias for resolution operations.
pub type Result<T> = std::result::Result<T, XfdfError>;
