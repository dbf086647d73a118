//! Host-side collaborators.
//!
//! The host owns the viewer, the vault and the UI. These traits are the seams
//! the view extensions call through; [`PdfView`] is also the decorator
//! interface, so a decorated view can itself be decorated.

use std::io;

use pdfplus_model::{
    AnchorLocation, ExternalSource, RedirectMapping, VaultFile, ViewState, ViewStateRecord,
    ViewStateResult,
};
use tracing::warn;

use crate::error::Result;

/// Live PDF viewer attached to a document child.
pub trait PdfViewer {
    /// The page/offset whose top edge is the scroll reference, if recorded.
    fn anchor_location(&self) -> Option<AnchorLocation>;

    /// Page occupying most of the screen.
    fn current_page_number(&self) -> u32;

    /// Current scale factor.
    fn current_scale(&self) -> f64;

    /// Scroll and zoom to `state`.
    fn apply_view_state(&mut self, state: &ViewState);
}

/// One load of a file into a document child.
///
/// Passed by value: a redirect carried here is gone once the load returns.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRequest<'a> {
    /// File being loaded.
    pub file: &'a VaultFile,
    /// Page/zoom fragment to open at.
    pub subpath: Option<String>,
    /// Source substitution for this load only.
    pub redirect: Option<RedirectMapping>,
}

impl<'a> LoadRequest<'a> {
    /// Plain load of `file`.
    pub fn new(file: &'a VaultFile) -> Self {
        Self {
            file,
            subpath: None,
            redirect: None,
        }
    }

    /// Open at `subpath`.
    #[must_use]
    pub fn with_subpath(mut self, subpath: Option<String>) -> Self {
        self.subpath = subpath;
        self
    }

    /// Load the content from `mapping.to` instead of `mapping.from`.
    #[must_use]
    pub fn with_redirect(mut self, mapping: RedirectMapping) -> Self {
        self.redirect = Some(mapping);
        self
    }
}

/// Document child of a view: owns the viewer and performs loads.
#[allow(async_fn_in_trait)]
pub trait PdfViewerChild {
    /// Viewer type.
    type Viewer: PdfViewer;

    /// The live viewer, once the document has been set up.
    fn pdf_viewer(&self) -> Option<&Self::Viewer>;

    /// Mutable access to the live viewer.
    fn pdf_viewer_mut(&mut self) -> Option<&mut Self::Viewer>;

    /// Record where the child's content comes from (`None` = the vault).
    fn set_external_source(&mut self, source: Option<ExternalSource>);

    /// Load a file into the viewer.
    async fn load_file(&mut self, request: LoadRequest<'_>) -> Result<()>;
}

/// Document view operations that get decorated.
///
/// A decorator holds the next `PdfView` and calls the corresponding
/// operation on it exactly once per call.
#[allow(async_fn_in_trait)]
pub trait PdfView {
    /// Document child type.
    type Child: PdfViewerChild;

    /// Serialize the view's state.
    fn get_state(&self) -> ViewStateRecord;

    /// Restore a serialized state. Completes once the view has applied it.
    async fn set_state(
        &mut self,
        state: &ViewStateRecord,
        result: &mut ViewStateResult,
    ) -> Result<()>;

    /// (Re)load `file` into the view.
    async fn on_load_file(&mut self, file: &VaultFile) -> Result<()>;

    /// Current document child, if attached.
    fn child(&self) -> Option<&Self::Child>;

    /// Mutable access to the current document child.
    fn child_mut(&mut self) -> Option<&mut Self::Child>;

    /// Wait until the document child is attached, then return it.
    ///
    /// `None` means the view was closed before a child appeared. Hosts that
    /// attach the child synchronously can keep the default.
    async fn ready_child(&mut self) -> Option<&mut Self::Child> {
        self.child_mut()
    }
}

/// Content store access.
#[allow(async_fn_in_trait)]
pub trait Vault {
    /// Read a text file.
    async fn read(&self, file: &VaultFile) -> io::Result<String>;

    /// Resource locator the viewer would use for `file`. May carry a
    /// `?<mtime>` suffix.
    fn resource_path(&self, file: &VaultFile) -> String;
}

/// Maps a serialized state to a link subpath (`#page=...`).
pub trait SubpathMapper {
    /// Subpath for `state`, or `None` when the state has no position.
    fn subpath(&self, state: &ViewStateRecord) -> Option<String>;
}

/// User-facing failure notices.
pub trait Notifier {
    /// Show `message` to the user.
    fn notify(&self, message: &str);
}

/// Notifier that writes notices to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        warn!(target: "pdfplus::notice", "{message}");
    }
}
