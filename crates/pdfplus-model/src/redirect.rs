//! Redirect types.

use serde::{Deserialize, Serialize};

/// A descriptor file's external target, fully resolved.
///
/// Created per load attempt and never cached: the descriptor may point
/// somewhere else the next time it is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectDescriptor {
    /// The `href` exactly as written in the descriptor.
    pub raw_path: String,

    /// Absolute `file://` URL of the target.
    pub resolved_external_path: String,

    /// Host-addressable form of the target.
    pub resource_locator: String,
}

/// Substitution of one resource locator for another during a single load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectMapping {
    /// Locator the viewer would otherwise fetch for the descriptor file.
    pub from: String,

    /// Locator of the external target.
    pub to: String,
}

impl RedirectMapping {
    /// Build the mapping for `descriptor`, given the internal locator of the
    /// descriptor file.
    ///
    /// Any cache-busting `?<digits>` suffix on the internal locator is removed.
    pub fn for_descriptor(internal_locator: &str, descriptor: &RedirectDescriptor) -> Self {
        Self {
            from: strip_cache_buster(internal_locator).to_string(),
            to: descriptor.resource_locator.clone(),
        }
    }
}

/// Marks a document child as showing a file from outside the content store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalSource {
    /// Resource locator the child's content was loaded from.
    pub url: String,
}

impl ExternalSource {
    /// Create a marker for `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Remove a trailing `?<digits>` query (the host appends the modification
/// time to resource locators).
pub fn strip_cache_buster(locator: &str) -> &str {
    match locator.rsplit_once('?') {
        Some((base, query)) if !query.is_empty() && query.bytes().all(|b| b.is_ascii_digit()) => {
            base
        }
        _ => locator,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_cache_buster() {
        assert_eq!(
            strip_cache_buster("app://local/vault/a.xfdf?1712345678901"),
            "app://local/vault/a.xfdf"
        );
        assert_eq!(strip_cache_buster("app://local/a.xfdf"), "app://local/a.xfdf");
        assert_eq!(strip_cache_buster("app://local/a.xfdf?v=2"), "app://local/a.xfdf?v=2");
        assert_eq!(strip_cache_buster("app://local/a.xfdf?"), "app://local/a.xfdf?");
    }

    #[test]
    fn test_mapping_for_descriptor() {
        let descriptor = RedirectDescriptor {
            raw_path: "G:/docs/file.pdf".to_string(),
            resolved_external_path: "file:///G:/docs/file.pdf".to_string(),
            resource_locator: "app://local/G:/docs/file.pdf".to_string(),
        };
        let mapping = RedirectMapping::for_descriptor("app://local/v/n.xfdf?42", &descriptor);

        assert_eq!(mapping.from, "app://local/v/n.xfdf");
        assert_eq!(mapping.to, "app://local/G:/docs/file.pdf");
    }
}
