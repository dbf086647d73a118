//! Descriptor to external target resolution.

use std::fmt;
use std::path::Path;

use pdfplus_model::{RedirectDescriptor, VaultFile};
use tracing::debug;

use crate::descriptor::extract_href;
use crate::env::{FileProbe, LocalFileProbe, VaultAdapter};
use crate::error::{Result, XfdfError};
use crate::path::{
    PathForm, classify, file_url_to_path, join, normalize, to_file_url, to_resource_locator,
};

/// Default host resource-locator prefix.
pub const DEFAULT_RESOURCE_PREFIX: &str = "app://local/";

/// Turns descriptor files into [`RedirectDescriptor`]s.
///
/// The store adapter, existence probe and resource-locator prefix are fixed
/// at construction so tests can substitute fakes.
pub struct ExternalPathResolver {
    adapter: Box<dyn VaultAdapter>,
    probe: Box<dyn FileProbe>,
    resource_prefix: String,
}

impl fmt::Debug for ExternalPathResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExternalPathResolver")
            .field("base_path", &self.adapter.base_path())
            .field("resource_prefix", &self.resource_prefix)
            .finish_non_exhaustive()
    }
}

impl ExternalPathResolver {
    /// Create a resolver that checks targets on the local filesystem.
    pub fn new(adapter: impl VaultAdapter + 'static, resource_prefix: impl Into<String>) -> Self {
        Self {
            adapter: Box::new(adapter),
            probe: Box::new(LocalFileProbe),
            resource_prefix: resource_prefix.into(),
        }
    }

    /// Replace the existence probe.
    #[must_use]
    pub fn with_probe(mut self, probe: impl FileProbe + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    /// Resolve the raw XFDF `content` of `descriptor`.
    pub fn resolve(&self, descriptor: &VaultFile, content: &str) -> Result<RedirectDescriptor> {
        let raw_path = extract_href(content)?;
        self.resolve_href(descriptor, &raw_path)
    }

    /// Resolve an `href` value found in `descriptor`.
    pub fn resolve_href(&self, descriptor: &VaultFile, raw_path: &str) -> Result<RedirectDescriptor> {
        let form = classify(raw_path)?;
        debug!(raw_path, ?form, descriptor = %descriptor, "classified descriptor path");

        let normalized = match form {
            PathForm::RootedDrive { drive, rest } => normalize(&format!("{drive}:/{rest}")),
            PathForm::BareDrive => normalize(raw_path),
            PathForm::Relative => {
                let base = self
                    .adapter
                    .base_path()
                    .ok_or(XfdfError::UnsupportedEnvironment)?;
                let base = base.to_string_lossy();
                join(&[&*base, descriptor.parent(), raw_path])
            }
        };

        let resolved_external_path = to_file_url(&normalized);
        let system_path =
            file_url_to_path(&resolved_external_path).ok_or_else(|| unexpected(&normalized))?;
        if !self.probe.exists(Path::new(system_path)) {
            return Err(XfdfError::TargetNotFound {
                path: system_path.to_string(),
            });
        }

        let resource_locator = to_resource_locator(&self.resource_prefix, &resolved_external_path)
            .ok_or_else(|| unexpected(&normalized))?;

        debug!(%resolved_external_path, %resource_locator, "resolved external target");
        Ok(RedirectDescriptor {
            raw_path: raw_path.to_string(),
            resolved_external_path,
            resource_locator,
        })
    }
}

fn unexpected(path: &str) -> XfdfError {
    XfdfError::parse(format!("could not build a file URL for {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::DetachedVault;
    use std::path::PathBuf;

    struct AlwaysExists;

    impl FileProbe for AlwaysExists {
        fn exists(&self, _path: &Path) -> bool {
            true
        }
    }

    struct NeverExists;

    impl FileProbe for NeverExists {
        fn exists(&self, _path: &Path) -> bool {
            false
        }
    }

    fn resolver() -> ExternalPathResolver {
        ExternalPathResolver::new(PathBuf::from("/vault"), DEFAULT_RESOURCE_PREFIX)
            .with_probe(AlwaysExists)
    }

    fn note() -> VaultFile {
        VaultFile::new("folder/note.xfdf")
    }

    #[test]
    fn test_rooted_drive() {
        let resolved = resolver().resolve_href(&note(), "/G/docs/file.pdf").unwrap();
        assert_eq!(resolved.resolved_external_path, "file:///G:/docs/file.pdf");
        assert_eq!(resolved.resource_locator, "app://local/G:/docs/file.pdf");
        assert_eq!(resolved.raw_path, "/G/docs/file.pdf");
    }

    #[test]
    fn test_rooted_drive_normalizes_rest() {
        let resolved = resolver()
            .resolve_href(&note(), "/g/docs\\old\\..//file.pdf")
            .unwrap();
        assert_eq!(resolved.resolved_external_path, "file:///g:/docs/file.pdf");
    }

    #[test]
    fn test_bare_drive() {
        let resolved = resolver().resolve_href(&note(), "G:/docs/file.pdf").unwrap();
        assert_eq!(resolved.resolved_external_path, "file:///G:/docs/file.pdf");
    }

    #[test]
    fn test_relative() {
        let resolved = resolver().resolve_href(&note(), "../pdfs/file.pdf").unwrap();
        assert_eq!(resolved.resolved_external_path, "file:///vault/pdfs/file.pdf");
        assert_eq!(resolved.resource_locator, "app://local/vault/pdfs/file.pdf");
    }

    #[test]
    fn test_relative_from_store_root() {
        let resolved = resolver()
            .resolve_href(&VaultFile::new("note.xfdf"), "pdfs/file.pdf")
            .unwrap();
        assert_eq!(resolved.resolved_external_path, "file:///vault/pdfs/file.pdf");
    }

    #[test]
    fn test_relative_in_network_share_vault() {
        let resolver = ExternalPathResolver::new(
            PathBuf::from("\\\\nas\\vault"),
            DEFAULT_RESOURCE_PREFIX,
        )
        .with_probe(AlwaysExists);
        let resolved = resolver.resolve_href(&note(), "../pdfs/file.pdf").unwrap();
        assert_eq!(
            resolved.resolved_external_path,
            "file:////nas/vault/pdfs/file.pdf"
        );
    }

    #[test]
    fn test_relative_without_filesystem() {
        let resolver = ExternalPathResolver::new(DetachedVault, DEFAULT_RESOURCE_PREFIX)
            .with_probe(AlwaysExists);
        assert_eq!(
            resolver.resolve_href(&note(), "../pdfs/file.pdf"),
            Err(XfdfError::UnsupportedEnvironment)
        );
        // drive forms do not need the store root
        assert!(resolver.resolve_href(&note(), "G:/a.pdf").is_ok());
    }

    #[test]
    fn test_unsupported_format_checked_before_existence() {
        let resolver = resolver().with_probe(NeverExists);
        assert!(matches!(
            resolver.resolve_href(&note(), "http://example.com/file.pdf"),
            Err(XfdfError::UnsupportedPathFormat { .. })
        ));
    }

    #[test]
    fn test_missing_target() {
        let resolver = resolver().with_probe(NeverExists);
        assert_eq!(
            resolver.resolve_href(&note(), "G:/docs/file.pdf"),
            Err(XfdfError::TargetNotFound {
                path: "G:/docs/file.pdf".to_string()
            })
        );
    }

    #[test]
    fn test_resolve_reads_href_from_content() {
        let content = r#"<xfdf xmlns="http://ns.adobe.com/xfdf/"><f href="./same-dir.pdf"/></xfdf>"#;
        let resolved = resolver().resolve(&note(), content).unwrap();
        assert_eq!(
            resolved.resolved_external_path,
            "file:///vault/folder/same-dir.pdf"
        );
    }
}
