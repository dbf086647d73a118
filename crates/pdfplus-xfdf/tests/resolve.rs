//! End-to-end resolution against a real directory tree.

use std::fs;
use std::path::Path;

use pdfplus_model::VaultFile;
use pdfplus_xfdf::{DEFAULT_RESOURCE_PREFIX, ExternalPathResolver, XfdfError};
use tempfile::tempdir;

fn descriptor(href: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<xfdf xmlns="http://ns.adobe.com/xfdf/" xml:space="preserve">
  <annots/>
  <f href="{href}"/>
  <ids original="7d2b" modified="7d2b"/>
</xfdf>"#
    )
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().expect("parent")).expect("create dirs");
    fs::write(path, content).expect("write file");
}

#[test]
fn relative_href_resolves_next_to_vault() {
    let root = tempdir().expect("tempdir");
    let vault = root.path().join("vault");
    write(&root.path().join("library/paper.pdf"), "%PDF-1.7");
    write(&vault.join("notes/paper.xfdf"), &descriptor("../../library/paper.pdf"));

    let resolver = ExternalPathResolver::new(vault.clone(), DEFAULT_RESOURCE_PREFIX);
    let file = VaultFile::new("notes/paper.xfdf");
    let content = fs::read_to_string(vault.join(file.path())).expect("read descriptor");
    let resolved = resolver.resolve(&file, &content).expect("resolve");

    let expected = root.path().join("library/paper.pdf");
    let expected = expected.to_string_lossy().replace('\\', "/");
    assert!(
        resolved.resolved_external_path.ends_with(&expected),
        "{} does not end with {expected}",
        resolved.resolved_external_path
    );
    assert!(resolved.resolved_external_path.starts_with("file:///"));
    assert!(resolved.resource_locator.starts_with(DEFAULT_RESOURCE_PREFIX));
    assert!(!resolved.resource_locator["app://".len()..].contains("//"));
}

#[test]
fn missing_relative_target_is_reported_with_its_path() {
    let root = tempdir().expect("tempdir");
    let resolver = ExternalPathResolver::new(root.path().to_path_buf(), DEFAULT_RESOURCE_PREFIX);

    let err = resolver
        .resolve(&VaultFile::new("a/b.xfdf"), &descriptor("gone.pdf"))
        .expect_err("target is missing");

    match err {
        XfdfError::TargetNotFound { path } => assert!(path.ends_with("a/gone.pdf"), "{path}"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn directory_is_not_a_target() {
    let root = tempdir().expect("tempdir");
    fs::create_dir_all(root.path().join("pdfs")).expect("mkdir");
    let resolver = ExternalPathResolver::new(root.path().to_path_buf(), DEFAULT_RESOURCE_PREFIX);

    assert!(matches!(
        resolver.resolve(&VaultFile::new("n.xfdf"), &descriptor("pdfs")),
        Err(XfdfError::TargetNotFound { .. })
    ));
}

#[test]
fn url_href_is_rejected() {
    let root = tempdir().expect("tempdir");
    let resolver = ExternalPathResolver::new(root.path().to_path_buf(), DEFAULT_RESOURCE_PREFIX);

    assert_eq!(
        resolver.resolve(
            &VaultFile::new("n.xfdf"),
            &descriptor("http://example.com/file.pdf")
        ),
        Err(XfdfError::UnsupportedPathFormat {
            raw: "http://example.com/file.pdf".to_string()
        })
    );
}
