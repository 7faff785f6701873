use std::fmt;

use apidoc_core::{Application, ExpressAdapter, HostApplication};
use apidoc_openapi::{
    create_document, merge_document, DocumentConfig, ScanOptions, ScannedDocument, Scanner,
};
use serde_json::{json, Map, Value};

// ── Helpers ─────────────────────────────────────────────────────────────────

/// Returns a fixed fragment regardless of the application.
struct FixedScanner(ScannedDocument);

impl Scanner for FixedScanner {
    type Error = ScannerDown;

    fn scan_application(
        &self,
        _app: &dyn HostApplication,
        _options: &ScanOptions,
    ) -> Result<ScannedDocument, ScannerDown> {
        Ok(self.0.clone())
    }
}

#[derive(Debug, PartialEq)]
struct ScannerDown;

impl fmt::Display for ScannerDown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("scanner down")
    }
}

impl std::error::Error for ScannerDown {}

struct FailingScanner;

impl Scanner for FailingScanner {
    type Error = ScannerDown;

    fn scan_application(
        &self,
        _app: &dyn HostApplication,
        _options: &ScanOptions,
    ) -> Result<ScannedDocument, ScannerDown> {
        Err(ScannerDown)
    }
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

fn scanned(value: Value) -> ScannedDocument {
    serde_json::from_value(value).unwrap()
}

fn app() -> Application<ExpressAdapter> {
    Application::without_adapter()
}

// ── Merge rules ─────────────────────────────────────────────────────────────

#[test]
fn paths_come_from_the_scanner() {
    let doc = merge_document(
        DocumentConfig::new(),
        scanned(json!({ "paths": { "/cats": { "get": {} } } })),
    );
    assert_eq!(doc.paths().unwrap(), &object(json!({ "/cats": { "get": {} } })));
}

#[test]
fn openapi_version_defaults_to_3_0_0() {
    let doc = merge_document(DocumentConfig::new(), ScannedDocument::default());
    assert_eq!(doc.openapi(), Some("3.0.0"));
}

#[test]
fn caller_can_override_openapi_version() {
    let config = DocumentConfig::from_value(json!({ "openapi": "3.0.3" }));
    let doc = merge_document(config, ScannedDocument::default());
    assert_eq!(doc.openapi(), Some("3.0.3"));
}

#[test]
fn scanner_overrides_openapi_version_over_caller() {
    let config = DocumentConfig::from_value(json!({ "openapi": "3.0.3" }));
    let doc = merge_document(config, scanned(json!({ "paths": {}, "openapi": "3.0.1" })));
    assert_eq!(doc.openapi(), Some("3.0.1"));
}

#[test]
fn caller_fields_are_kept() {
    let config = DocumentConfig::from_value(json!({
        "info": { "title": "Cats example", "version": "1.0" },
        "tags": [{ "name": "cats" }]
    }));
    let doc = merge_document(config, ScannedDocument::default());
    assert_eq!(doc.title(), Some("Cats example"));
    assert_eq!(doc.get("tags"), Some(&json!([{ "name": "cats" }])));
}

#[test]
fn scanned_top_level_fields_win() {
    let config = DocumentConfig::from_value(json!({
        "info": { "title": "From caller" },
        "servers": [{ "url": "http://caller" }]
    }));
    let doc = merge_document(
        config,
        scanned(json!({ "paths": {}, "info": { "title": "From scanner" } })),
    );
    assert_eq!(doc.title(), Some("From scanner"));
    assert_eq!(doc.get("servers"), Some(&json!([{ "url": "http://caller" }])));
}

#[test]
fn components_are_always_present() {
    let doc = merge_document(DocumentConfig::new(), ScannedDocument::default());
    assert_eq!(doc.components(), Some(&Map::new()));
}

#[test]
fn components_merge_key_by_key() {
    let config = DocumentConfig::from_value(json!({
        "components": {
            "securitySchemes": { "bearer": { "type": "http" } },
            "schemas": { "Old": {} }
        }
    }));
    let doc = merge_document(
        config,
        scanned(json!({
            "paths": {},
            "components": { "schemas": { "Cat": { "type": "object" } } }
        })),
    );

    let components = doc.components().unwrap();
    assert_eq!(
        components["securitySchemes"],
        json!({ "bearer": { "type": "http" } })
    );
    // Shallow: the scanned `schemas` replaces the caller's entirely.
    assert_eq!(components["schemas"], json!({ "Cat": { "type": "object" } }));
}

#[test]
fn caller_components_survive_scanner_without_components() {
    let config = DocumentConfig::from_value(json!({ "components": { "schemas": { "A": {} } } }));
    let doc = merge_document(config, scanned(json!({ "paths": {} })));
    assert_eq!(doc.components().unwrap()["schemas"], json!({ "A": {} }));
}

#[test]
fn caller_paths_are_never_used() {
    let mut config = DocumentConfig::new();
    config.set("paths", json!({ "/fake": {} }));
    let doc = merge_document(config, ScannedDocument::default());
    assert!(doc.paths().unwrap().is_empty());
}

#[test]
fn document_serializes_as_plain_object() {
    let doc = merge_document(
        DocumentConfig::from_value(json!({ "info": { "title": "T" } })),
        ScannedDocument::default(),
    );
    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        value,
        json!({ "openapi": "3.0.0", "info": { "title": "T" }, "paths": {}, "components": {} })
    );
}

// ── create_document ─────────────────────────────────────────────────────────

#[test]
fn create_document_uses_the_scanner() {
    let scanner = FixedScanner(scanned(json!({
        "paths": { "/dogs": { "get": {} } },
        "components": { "schemas": { "Dog": {} } }
    })));
    let config = DocumentConfig::from_value(json!({ "info": { "title": "Dogs" } }));

    let doc = create_document(&scanner, &app(), config, &ScanOptions::new()).unwrap();
    assert_eq!(doc.title(), Some("Dogs"));
    assert!(doc.paths().unwrap().contains_key("/dogs"));
    assert_eq!(doc.components().unwrap()["schemas"], json!({ "Dog": {} }));
}

#[test]
fn scanner_errors_propagate_unchanged() {
    let err = create_document(
        &FailingScanner,
        &app(),
        DocumentConfig::new(),
        &ScanOptions::new(),
    )
    .unwrap_err();
    assert_eq!(err, ScannerDown);
}

#[test]
fn works_with_a_boxed_scanner() {
    let scanner: Box<dyn Scanner<Error = ScannerDown>> =
        Box::new(FixedScanner(ScannedDocument::default()));
    let doc = create_document(&*scanner, &app(), DocumentConfig::new(), &ScanOptions::new())
        .unwrap();
    assert_eq!(doc.openapi(), Some("3.0.0"));
}
