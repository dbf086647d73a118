//! View-state snapshots.
//!
//! The host persists view state as an untyped key/value object that also
//! carries fields this workspace never looks at (the file path, the view
//! mode, ...). [`ViewStateRecord`] keeps that object intact and exposes typed
//! accessors for the four position fields; [`ViewState`] is the typed snapshot
//! pushed into a live viewer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

const FILE_KEY: &str = "file";
const PAGE_KEY: &str = "page";
const LEFT_KEY: &str = "left";
const TOP_KEY: &str = "top";
const ZOOM_KEY: &str = "zoom";

/// Page, scroll offset and zoom of a document view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// 1-based page number.
    pub page: u32,

    /// Horizontal scroll offset within the page, in PDF units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,

    /// Vertical scroll offset within the page, in PDF units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,

    /// Scale factor (1.0 = 100%).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f64>,
}

impl ViewState {
    /// Create a state pointing at the top of `page` with no zoom preference.
    pub fn new(page: u32) -> Self {
        Self {
            page,
            left: None,
            top: None,
            zoom: None,
        }
    }

    /// Set the scroll offset.
    #[must_use]
    pub fn with_offset(mut self, left: Option<f64>, top: Option<f64>) -> Self {
        self.left = left;
        self.top = top;
        self
    }

    /// Set the zoom level.
    #[must_use]
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = Some(zoom);
        self
    }

    /// Extract a view state from a host record.
    ///
    /// Returns `None` unless the record carries a numeric `page` of at least 1.
    /// Fractional pages are truncated to the page they start on. A zoom that
    /// is not strictly positive is dropped.
    ///
    /// A viewer only scrolls to whole, 1-based pages and rejects a zero or
    /// negative scale, so these values are settled here rather than handed
    /// to the viewer as stored. Every state the viewer itself captured
    /// passes through unchanged.
    pub fn from_record(record: &ViewStateRecord) -> Option<Self> {
        let page = record.page()?;
        if !page.is_finite() || page < 1.0 {
            return None;
        }

        Some(Self {
            page: page.trunc().min(f64::from(u32::MAX)) as u32,
            left: record.left(),
            top: record.top(),
            zoom: record.zoom().filter(|zoom| *zoom > 0.0),
        })
    }

    /// Overwrite the position fields of `record` with this snapshot.
    ///
    /// Offsets and zoom that are `None` are removed from the record rather
    /// than left stale.
    pub fn write_to(&self, record: &mut ViewStateRecord) {
        record.set_page(self.page);
        record.set_number(LEFT_KEY, self.left);
        record.set_number(TOP_KEY, self.top);
        record.set_number(ZOOM_KEY, self.zoom);
    }
}

/// The viewer's scroll reference: the page whose top edge has been scrolled
/// past, plus the offset within it.
///
/// This differs from the viewer's "current page", which is the page taking up
/// most of the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorLocation {
    /// 1-based page number.
    pub page_number: u32,
    /// Horizontal offset, if the viewer has recorded one.
    pub left: Option<f64>,
    /// Vertical offset, if the viewer has recorded one.
    pub top: Option<f64>,
}

/// Serialized view state as the host stores it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewStateRecord(Map<String, Value>);

impl ViewStateRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing JSON object.
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Set the vault path of the file the state belongs to.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.0.insert(FILE_KEY.to_string(), Value::String(path.into()));
        self
    }

    /// Set the page number.
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.set_page(page);
        self
    }

    /// Vault path of the file the state belongs to.
    pub fn file(&self) -> Option<&str> {
        self.0.get(FILE_KEY).and_then(Value::as_str)
    }

    /// Raw access to any field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Page number, if the record carries a numeric one.
    pub fn page(&self) -> Option<f64> {
        self.number(PAGE_KEY)
    }

    /// Horizontal offset, if numeric.
    pub fn left(&self) -> Option<f64> {
        self.number(LEFT_KEY)
    }

    /// Vertical offset, if numeric.
    pub fn top(&self) -> Option<f64> {
        self.number(TOP_KEY)
    }

    /// Zoom level, if numeric.
    pub fn zoom(&self) -> Option<f64> {
        self.number(ZOOM_KEY)
    }

    /// Store an integral page number.
    pub fn set_page(&mut self, page: u32) {
        self.0.insert(PAGE_KEY.to_string(), Value::from(page));
    }

    fn number(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    fn set_number(&mut self, key: &str, value: Option<f64>) {
        match value.and_then(Number::from_f64) {
            Some(number) => {
                self.0.insert(key.to_string(), Value::Number(number));
            }
            None => {
                self.0.remove(key);
            }
        }
    }
}

impl From<Map<String, Value>> for ViewStateRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Outcome flags of a state write, filled in by the writer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewStateResult {
    /// Record the state change as a back/forward history entry.
    pub history: bool,
}
