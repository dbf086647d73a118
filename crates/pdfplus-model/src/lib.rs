//! Data types shared by the PDF view extensions.
//!
//! The crate has no behaviour of its own beyond small accessors; it is the
//! vocabulary the resolver, the view-state decorator and the CLI agree on.
//!
//! # Module Organization
//!
//! - [`view_state`]: typed [`ViewState`] snapshots and the host's loosely-typed
//!   [`ViewStateRecord`]
//! - [`redirect`]: [`RedirectDescriptor`], [`RedirectMapping`] and the
//!   [`ExternalSource`] marker
//! - [`file`]: [`VaultFile`], a file addressed relative to the content store

pub mod file;
pub mod redirect;
pub mod view_state;

pub use file::VaultFile;
pub use redirect::{ExternalSource, RedirectDescriptor, RedirectMapping, strip_cache_buster};
pub use view_state::{AnchorLocation, ViewState, ViewStateRecord, ViewStateResult};
