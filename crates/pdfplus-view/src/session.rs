//! Single-load redirect to an external file.

use pdfplus_model::{ExternalSource, RedirectDescriptor, RedirectMapping, VaultFile};
use tracing::info;

use crate::error::Result;
use crate::host::{LoadRequest, PdfViewerChild};

/// Redirect of one descriptor load to its external target.
///
/// The mapping is moved into the single [`LoadRequest`] the session issues,
/// so it cannot leak into a later load whether the load succeeds, fails or
/// unwinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectSession {
    mapping: RedirectMapping,
}

impl RedirectSession {
    /// Prepare a redirect from the descriptor's internal locator (cache
    /// buster stripped) to the resolved target.
    pub fn new(internal_locator: &str, descriptor: &RedirectDescriptor) -> Self {
        Self {
            mapping: RedirectMapping::for_descriptor(internal_locator, descriptor),
        }
    }

    /// Mark `child` as external and load `file` through the redirect.
    pub async fn load<C: PdfViewerChild>(self, child: &mut C, file: &VaultFile) -> Result<()> {
        info!(
            file = %file,
            from = %self.mapping.from,
            to = %self.mapping.to,
            "loading descriptor from external source"
        );
        child.set_external_source(Some(ExternalSource::new(self.mapping.to.clone())));
        child
            .load_file(LoadRequest::new(file).with_redirect(self.mapping))
            .await
    }
}
