//! View-state synchronization and external-file redirects for a PDF view.
//!
//! [`ViewStateSync`] decorates the host's [`PdfView`]:
//!
//! - State saves record the exact page, scroll offset and zoom of the live
//!   viewer; state restores push them back once the view has loaded.
//! - Reloading a document reopens it at the current position.
//! - Opening an XFDF descriptor loads the external PDF it references,
//!   through a [`RedirectSession`] that lasts exactly one load.
//!
//! Everything the host provides (viewer, vault, notices, subpath mapping) is
//! injected through the traits in [`host`].
//!
//! # Example
//!
//! ```ignore
//! use pdfplus_view::{FsVault, Settings, ViewStateSync};
//!
//! let settings = Settings::load();
//! let vault = FsVault::new("/vault", settings.redirect.resource_path_prefix.clone());
//! let resolver = settings.resolver(vault.clone());
//! let mut view = ViewStateSync::new(host_view, vault, resolver).with_settings(settings);
//!
//! view.on_load_file(&VaultFile::new("papers/annotated.xfdf")).await?;
//! ```

mod error;
pub mod host;
mod session;
mod settings;
mod subpath;
mod sync;
mod vault;

pub use error::{Result, SettingsError, ViewError};
pub use host::{
    LoadRequest, Notifier, PdfView, PdfViewer, PdfViewerChild, SubpathMapper, TracingNotifier,
    Vault,
};
pub use session::RedirectSession;
pub use settings::{RedirectSettings, SETTINGS_FILE, Settings, ViewSettings};
pub use subpath::PageFragment;
pub use sync::{ViewStateSync, capture_view_state};
pub use vault::FsVault;
