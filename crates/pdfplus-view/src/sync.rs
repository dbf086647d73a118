//! View-state capture/restore and load interception.

use pdfplus_model::{RedirectDescriptor, VaultFile, ViewState, ViewStateRecord, ViewStateResult};
use pdfplus_xfdf::ExternalPathResolver;
use tracing::{debug, warn};

use crate::error::{Result, ViewError};
use crate::host::{
    LoadRequest, Notifier, PdfView, PdfViewer, PdfViewerChild, SubpathMapper, TracingNotifier,
    Vault,
};
use crate::session::RedirectSession;
use crate::settings::Settings;
use crate::subpath::PageFragment;

/// Read the position and zoom of a live viewer.
///
/// The anchor page is preferred over the current page: when the top edge of
/// the viewport sits in the lower half of page N, the current page is
/// already N+1 but N is where reading resumes.
pub fn capture_view_state(viewer: &impl PdfViewer) -> ViewState {
    let anchor = viewer.anchor_location();
    ViewState {
        page: anchor.map_or_else(|| viewer.current_page_number(), |a| a.page_number),
        left: anchor.and_then(|a| a.left),
        top: anchor.and_then(|a| a.top),
        zoom: Some(viewer.current_scale()),
    }
}

/// Decorates a [`PdfView`] with exact position/zoom persistence and
/// XFDF-descriptor redirects.
///
/// - `get_state` overlays the live viewer's page, offset and zoom.
/// - `set_state` pushes a restored position into the viewer once the
///   underlying restore completes. Best effort: skipped when no viewer is
///   attached.
/// - `on_load_file` reloads ordinary documents at the current position, and
///   loads descriptor files from the external PDF they reference.
pub struct ViewStateSync<V, S> {
    inner: V,
    vault: S,
    resolver: ExternalPathResolver,
    subpaths: Box<dyn SubpathMapper>,
    notifier: Box<dyn Notifier>,
    settings: Settings,
}

impl<V: PdfView, S: Vault> ViewStateSync<V, S> {
    /// Wrap `inner`. Uses [`PageFragment`] subpaths, log notices and default
    /// settings until overridden.
    pub fn new(inner: V, vault: S, resolver: ExternalPathResolver) -> Self {
        Self {
            inner,
            vault,
            resolver,
            subpaths: Box::new(PageFragment),
            notifier: Box::new(TracingNotifier),
            settings: Settings::default(),
        }
    }

    /// Replace the state→subpath mapping.
    #[must_use]
    pub fn with_subpath_mapper(mut self, mapper: impl SubpathMapper + 'static) -> Self {
        self.subpaths = Box::new(mapper);
        self
    }

    /// Replace the failure notice sink.
    #[must_use]
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    /// Replace the settings.
    #[must_use]
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// The wrapped view.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Mutable access to the wrapped view.
    pub fn inner_mut(&mut self) -> &mut V {
        &mut self.inner
    }

    /// Snapshot of the live viewer, if one is attached.
    pub fn capture(&self) -> Option<ViewState> {
        let viewer = self.inner.child()?.pdf_viewer()?;
        Some(capture_view_state(viewer))
    }

    fn is_descriptor(&self, file: &VaultFile) -> bool {
        file.has_extension(&self.settings.redirect.descriptor_extension)
    }

    async fn resolve_descriptor(&self, file: &VaultFile) -> Result<RedirectDescriptor> {
        let content = self
            .vault
            .read(file)
            .await
            .map_err(|source| ViewError::ReadDescriptor {
                path: file.path().to_string(),
                source,
            })?;
        Ok(self.resolver.resolve(file, &content)?)
    }

    async fn load_descriptor(&mut self, file: &VaultFile) -> Result<()> {
        let descriptor = match self.resolve_descriptor(file).await {
            Ok(descriptor) => descriptor,
            Err(error) => {
                warn!(file = %file, %error, "could not resolve descriptor");
                self.notifier.notify(&error.user_message());
                return Err(error);
            }
        };

        let internal_locator = self.vault.resource_path(file);
        let Some(child) = self.inner.ready_child().await else {
            let error = ViewError::Detached {
                path: file.path().to_string(),
            };
            warn!(file = %file, %error, "view closed before the redirect could load");
            self.notifier.notify(&error.user_message());
            return Err(error);
        };
        if child.pdf_viewer().is_none() {
            debug!(file = %file, "viewer not ready, skipping redirect");
            return Ok(());
        }

        RedirectSession::new(&internal_locator, &descriptor)
            .load(child, file)
            .await
    }

    async fn load_document(&mut self, file: &VaultFile) -> Result<()> {
        let state = self.get_state();
        let subpath = self.subpaths.subpath(&state);

        match self.inner.child_mut() {
            Some(child) => {
                child.set_external_source(None);
                child
                    .load_file(LoadRequest::new(file).with_subpath(subpath))
                    .await
            }
            None => self.inner.on_load_file(file).await,
        }
    }
}

impl<V: PdfView, S: Vault> PdfView for ViewStateSync<V, S> {
    type Child = V::Child;

    fn get_state(&self) -> ViewStateRecord {
        let mut state = self.inner.get_state();
        if let Some(view_state) = self.capture() {
            view_state.write_to(&mut state);
        }
        state
    }

    async fn set_state(
        &mut self,
        state: &ViewStateRecord,
        result: &mut ViewStateResult,
    ) -> Result<()> {
        if self.settings.view.always_record_history {
            result.history = true;
        }

        self.inner.set_state(state, result).await?;

        let Some(view_state) = ViewState::from_record(state) else {
            return Ok(());
        };
        match self
            .inner
            .child_mut()
            .and_then(PdfViewerChild::pdf_viewer_mut)
        {
            Some(viewer) => viewer.apply_view_state(&view_state),
            None => debug!(page = view_state.page, "no viewer attached, position not restored"),
        }
        Ok(())
    }

    async fn on_load_file(&mut self, file: &VaultFile) -> Result<()> {
        if self.is_descriptor(file) {
            self.load_descriptor(file).await
        } else {
            self.load_document(file).await
        }
    }

    fn child(&self) -> Option<&Self::Child> {
        self.inner.child()
    }

    fn child_mut(&mut self) -> Option<&mut Self::Child> {
        self.inner.child_mut()
    }

    async fn ready_child(&mut self) -> Option<&mut Self::Child> {
        self.inner.ready_child().await
    }
}
