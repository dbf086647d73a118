//! Tests for pdfplus-model types.

use pdfplus_model::{
    RedirectDescriptor, RedirectMapping, VaultFile, ViewState, ViewStateRecord, ViewStateResult,
};
use serde_json::json;

#[test]
fn record_preserves_host_fields_through_serde() {
    let value = json!({
        "file": "papers/paper.pdf",
        "page": 3,
        "left": 10.0,
        "top": 742.5,
        "zoom": 1.5,
        "sidebar": { "open": true }
    });
    let record: ViewStateRecord = serde_json::from_value(value.clone()).expect("deserialize");

    assert_eq!(record.file(), Some("papers/paper.pdf"));
    assert_eq!(serde_json::to_value(&record).expect("serialize"), value);
}

#[test]
fn view_state_written_then_read_from_record() {
    let mut record = ViewStateRecord::new().with_file("a.pdf");
    let state = ViewState::new(12)
        .with_offset(Some(0.0), Some(512.0))
        .with_zoom(0.8);
    state.write_to(&mut record);

    assert_eq!(ViewState::from_record(&record), Some(state));
}

#[test]
fn view_state_omits_missing_fields_when_serialized() {
    let json = serde_json::to_value(ViewState::new(2)).expect("serialize");
    assert_eq!(json, json!({ "page": 2 }));
}

#[test]
fn result_defaults_to_no_history() {
    assert!(!ViewStateResult::default().history);
}

#[test]
fn mapping_targets_descriptor_locator() {
    let descriptor = RedirectDescriptor {
        raw_path: "../pdfs/file.pdf".to_string(),
        resolved_external_path: "file:///vault/pdfs/file.pdf".to_string(),
        resource_locator: "app://local/vault/pdfs/file.pdf".to_string(),
    };
    let mapping = RedirectMapping::for_descriptor("app://local/vault/folder/note.xfdf?1", &descriptor);

    assert_eq!(mapping.from, "app://local/vault/folder/note.xfdf");
    assert_eq!(mapping.to, descriptor.resource_locator);
}

#[test]
fn vault_file_displays_store_path() {
    assert_eq!(VaultFile::from("folder/note.xfdf").to_string(), "folder/note.xfdf");
}
