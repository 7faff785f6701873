use std::fmt;

use apidoc_core::HostApplication;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::options::ScanOptions;
use crate::scanner::Scanner;

/// The OpenAPI version stamped on every document unless overridden.
pub const OPENAPI_VERSION: &str = "3.0.0";

/// A complete OpenAPI document, ready to be served.
///
/// The document is an open JSON object: every key the caller or a scanner
/// supplies is kept. Once created it is only ever read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpenApiDocument(Map<String, Value>);

impl OpenApiDocument {
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The `openapi` version string.
    pub fn openapi(&self) -> Option<&str> {
        self.0.get("openapi").and_then(Value::as_str)
    }

    /// `info.title`, if present.
    pub fn title(&self) -> Option<&str> {
        self.0
            .get("info")
            .and_then(|info| info.get("title"))
            .and_then(Value::as_str)
    }

    pub fn paths(&self) -> Option<&Map<String, Value>> {
        self.0.get("paths").and_then(Value::as_object)
    }

    pub fn components(&self) -> Option<&Map<String, Value>> {
        self.0.get("components").and_then(Value::as_object)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl fmt::Display for OpenApiDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(&self.0) {
            Ok(json) => f.write_str(&json),
            Err(_) => Err(fmt::Error),
        }
    }
}

/// Caller-supplied document fields: any OpenAPI top-level field except `paths`.
///
/// Usually produced by [`DocumentBuilder`](crate::DocumentBuilder). A
/// `paths` key is dropped on construction since paths always come from
/// scanning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct DocumentConfig(Map<String, Value>);

impl DocumentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from a JSON value. Non-object values yield an empty config.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::from(map),
            _ => Self::default(),
        }
    }

    /// Set a top-level field. `paths` is ignored.
    pub fn set(&mut self, key: &str, value: Value) {
        if key == "paths" {
            tracing::warn!("Ignoring `paths` in document config; paths come from scanning");
            return;
        }
        self.0.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn components(&self) -> Option<&Map<String, Value>> {
        self.0.get("components").and_then(Value::as_object)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for DocumentConfig {
    fn from(mut map: Map<String, Value>) -> Self {
        map.remove("paths");
        Self(map)
    }
}

impl From<DocumentConfig> for Map<String, Value> {
    fn from(config: DocumentConfig) -> Self {
        config.0
    }
}

/// What a scanner produces: the path operations, optional components and
/// any additional top-level fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScannedDocument {
    #[serde(default)]
    pub paths: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Combine caller config and scan output into a document.
///
/// Precedence, lowest first: the default `openapi` version, the caller
/// config, then the scanned fields. `paths` always comes from the scan.
/// `components` is always present: the caller's entries overlaid by the
/// scanned ones, key by key.
pub fn merge_document(config: DocumentConfig, scanned: ScannedDocument) -> OpenApiDocument {
    let ScannedDocument {
        paths,
        components: scanned_components,
        extra,
    } = scanned;

    let mut document = Map::new();
    document.insert("openapi".into(), Value::String(OPENAPI_VERSION.into()));

    let mut config = Map::from(config);
    let mut components = match config.remove("components") {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    };
    document.extend(config);

    for (key, value) in extra {
        if key != "paths" && key != "components" {
            document.insert(key, value);
        }
    }
    if let Some(scanned) = scanned_components {
        components.extend(scanned);
    }

    document.insert("paths".into(), Value::Object(paths));
    document.insert("components".into(), Value::Object(components));
    OpenApiDocument(document)
}

/// Scan `app` with `scanner` and merge the result over `config`.
///
/// Scanner errors propagate unchanged.
pub fn create_document<S>(
    scanner: &S,
    app: &dyn HostApplication,
    config: DocumentConfig,
    options: &ScanOptions,
) -> Result<OpenApiDocument, S::Error>
where
    S: Scanner + ?Sized,
{
    let scanned = scanner.scan_application(app, options)?;
    tracing::debug!(paths = scanned.paths.len(), "Application scanned");
    Ok(merge_document(config, scanned))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(value: Value) -> DocumentConfig {
        DocumentConfig::from_value(value)
    }

    #[test]
    fn config_drops_paths() {
        let config = config(json!({ "paths": { "/x": {} }, "info": {} }));
        assert!(config.get("paths").is_none());
        assert!(config.get("info").is_some());
    }

    #[test]
    fn non_object_components_are_replaced() {
        let doc = merge_document(config(json!({ "components": null })), ScannedDocument::default());
        assert_eq!(doc.get("components"), Some(&json!({})));
    }

    #[test]
    fn display_is_compact_json() {
        let doc = merge_document(DocumentConfig::new(), ScannedDocument::default());
        assert_eq!(
            doc.to_string(),
            r#"{"openapi":"3.0.0","paths":{},"components":{}}"#
        );
    }
}
