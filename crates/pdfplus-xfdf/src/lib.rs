//! Resolution of XFDF descriptor files to external PDF locations.
//!
//! An XFDF file stored in the vault can stand in for a PDF that lives
//! elsewhere on disk: its `<f href="...">` element names the real document.
//! [`ExternalPathResolver`] reads that element, classifies and normalizes the
//! path, checks the target exists, and produces the `file://` URL and host
//! resource locator the viewer loads from.
//!
//! # Path forms
//!
//! | Form          | Example             | Resolved                        |
//! |---------------|---------------------|---------------------------------|
//! | Rooted drive  | `/G/docs/a.pdf`     | `file:///G:/docs/a.pdf`         |
//! | Bare drive    | `G:/docs/a.pdf`     | `file:///G:/docs/a.pdf`         |
//! | Relative      | `../pdfs/a.pdf`     | against the descriptor's folder |
//!
//! Anything else (URLs, `/home/...`) is rejected.
//!
//! # Example
//!
//! ```
//! use std::path::PathBuf;
//! use pdfplus_model::VaultFile;
//! use pdfplus_xfdf::{ExternalPathResolver, XfdfError};
//!
//! let resolver = ExternalPathResolver::new(PathBuf::from("/vault"), "app://local/");
//! let err = resolver
//!     .resolve(&VaultFile::new("note.xfdf"), r#"<xfdf><f href="http://x/a.pdf"/></xfdf>"#)
//!     .unwrap_err();
//! assert!(matches!(err, XfdfError::UnsupportedPathFormat { .. }));
//! ```

mod descriptor;
mod env;
mod error;
pub mod path;
mod resolver;

pub use descriptor::extract_href;
pub use env::{DetachedVault, FileProbe, LocalFileProbe, VaultAdapter};
pub use error::{Result, XfdfError};
pub use resolver::{DEFAULT_RESOURCE_PREFIX, ExternalPathResolver};
