//! Page fragments for links into a PDF.

use std::fmt::Write;

use pdfplus_model::{ViewState, ViewStateRecord};

use crate::host::SubpathMapper;

/// `#page=N`, plus `&offset=LEFT,TOP[,ZOOM]` when both offsets are known.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageFragment;

impl SubpathMapper for PageFragment {
    fn subpath(&self, state: &ViewStateRecord) -> Option<String> {
        let view = ViewState::from_record(state)?;
        let mut subpath = format!("#page={}", view.page);

        if let (Some(left), Some(top)) = (view.left, view.top) {
            let _ = write!(subpath, "&offset={left},{top}");
            if let Some(zoom) = view.zoom {
                let _ = write!(subpath, ",{zoom}");
            }
        }

        Some(subpath)
    }
}
