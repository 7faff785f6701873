use std::collections::HashSet;
use std::fmt;

use apidoc_core::meta::{ModuleInfo, RouteInfo};
use apidoc_core::{join_path, HostApplication};
use serde_json::{json, Map, Value};

use crate::document::ScannedDocument;
use crate::options::ScanOptions;
use crate::schema::SchemaRegistry;

/// Produces the `paths` (and optional `components`) of a document from a
/// running application.
pub trait Scanner {
    type Error: std::error::Error + Send + Sync + 'static;

    fn scan_application(
        &self,
        app: &dyn HostApplication,
        options: &ScanOptions,
    ) -> Result<ScannedDocument, Self::Error>;
}

/// Error raised by [`RouteScanner`] for route metadata it cannot document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    EmptyPath { controller: String, handler: String },
    UnsupportedMethod { method: String, path: String },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::EmptyPath {
                controller,
                handler,
            } => write!(f, "Route {controller}::{handler} has an empty path"),
            ScanError::UnsupportedMethod { method, path } => {
                write!(f, "Unsupported HTTP method '{method}' for route {path}")
            }
        }
    }
}

impl std::error::Error for ScanError {}

const METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "patch", "options", "head", "trace",
];

/// The default scanner: walks the application's module tree and turns
/// every [`RouteInfo`] into an OpenAPI operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteScanner;

impl RouteScanner {
    pub fn new() -> Self {
        Self
    }
}

impl Scanner for RouteScanner {
    type Error = ScanError;

    fn scan_application(
        &self,
        app: &dyn HostApplication,
        options: &ScanOptions,
    ) -> Result<ScannedDocument, ScanError> {
        let prefix = if options.ignore_global_prefix {
            None
        } else {
            app.global_prefix()
        };

        let mut paths: Map<String, Value> = Map::new();
        let mut registry = SchemaRegistry::new();

        for module in select_modules(app.modules(), options) {
            for route in &module.routes {
                if route.path.trim().is_empty() {
                    return Err(ScanError::EmptyPath {
                        controller: route.controller.clone(),
                        handler: route.handler.clone(),
                    });
                }
                let method = route.method.to_lowercase();
                if !METHODS.contains(&method.as_str()) {
                    return Err(ScanError::UnsupportedMethod {
                        method: route.method.clone(),
                        path: route.path.clone(),
                    });
                }

                let path = openapi_path(prefix, &route.path);
                let operation = build_operation(route, &path, options);
                tracing::debug!(method = %method, path = %path, "Documenting route");

                if let Some(ref body_type) = route.request_body_type {
                    registry.register(body_type, route.request_body_schema.as_ref());
                }
                if let Some(ref resp_type) = route.response_type {
                    registry.register(resp_type, route.response_schema.as_ref());
                }

                let path_entry = paths.entry(path).or_insert_with(|| json!({}));
                if let Some(obj) = path_entry.as_object_mut() {
                    obj.insert(method, operation);
                }
            }
        }

        for model in &options.extra_models {
            registry.register(&model.name, Some(&model.schema));
        }

        let components = (!registry.is_empty()).then(|| {
            let mut components = Map::new();
            components.insert("schemas".into(), Value::Object(registry.into_schemas()));
            components
        });

        Ok(ScannedDocument {
            paths,
            components,
            extra: Map::new(),
        })
    }
}

/// Modules to document, each name at most once, in tree order.
fn select_modules<'a>(roots: &'a [ModuleInfo], options: &ScanOptions) -> Vec<&'a ModuleInfo> {
    let mut selected = Vec::new();
    let mut seen = HashSet::new();

    if options.include.is_empty() {
        for module in roots {
            collect(module, true, &mut seen, &mut selected);
        }
        return selected;
    }

    let mut all = Vec::new();
    let mut all_seen = HashSet::new();
    for module in roots {
        collect(module, true, &mut all_seen, &mut all);
    }
    for module in all {
        if options.include.iter().any(|name| *name == module.name) {
            collect(module, options.deep_scan_routes, &mut seen, &mut selected);
        }
    }
    selected
}

fn collect<'a>(
    module: &'a ModuleInfo,
    recurse: bool,
    seen: &mut HashSet<&'a str>,
    out: &mut Vec<&'a ModuleInfo>,
) {
    if !seen.insert(module.name.as_str()) {
        return;
    }
    out.push(module);
    if recurse {
        for import in &module.imports {
            collect(import, true, seen, out);
        }
    }
}

/// Prefix the route and rewrite `:param` segments as `{param}`.
fn openapi_path(prefix: Option<&str>, path: &str) -> String {
    let joined = join_path(prefix.unwrap_or(""), path);
    let trimmed = match joined.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    trimmed
        .split('/')
        .map(|segment| match segment.strip_prefix(':') {
            Some(name) => format!("{{{name}}}"),
            None => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// `{name}` segments of an OpenAPI path.
fn path_params(path: &str) -> impl Iterator<Item = &str> {
    path.split('/')
        .filter_map(|segment| segment.strip_prefix('{')?.strip_suffix('}'))
}

fn build_operation(route: &RouteInfo, path: &str, options: &ScanOptions) -> Value {
    let mut operation: Map<String, Value> = Map::new();
    operation.insert(
        "operationId".into(),
        json!(options.operation_id(&route.controller, &route.handler)),
    );

    if !route.tags.is_empty() {
        operation.insert("tags".into(), json!(route.tags));
    }
    if let Some(ref summary) = route.summary {
        operation.insert("summary".into(), json!(summary));
    }
    if let Some(ref description) = route.description {
        operation.insert("description".into(), json!(description));
    }
    if route.deprecated {
        operation.insert("deprecated".into(), json!(true));
    }

    // Declared parameters first, then undeclared path segments as strings.
    let mut params: Vec<Value> = route
        .params
        .iter()
        .map(|p| {
            json!({
                "name": p.name,
                "in": p.location.as_str(),
                "required": p.required,
                "schema": { "type": p.param_type }
            })
        })
        .collect();
    for name in path_params(path) {
        let declared = route.params.iter().any(|p| p.name == name);
        if !declared {
            params.push(json!({
                "name": name,
                "in": "path",
                "required": true,
                "schema": { "type": "string" }
            }));
        }
    }
    if !params.is_empty() {
        operation.insert("parameters".into(), json!(params));
    }

    if let Some(ref body_type) = route.request_body_type {
        operation.insert(
            "requestBody".into(),
            json!({
                "required": route.request_body_required,
                "content": {
                    "application/json": {
                        "schema": { "$ref": format!("#/components/schemas/{body_type}") }
                    }
                }
            }),
        );
    }

    let status_key = route.response_status.to_string();
    let status_desc = match route.response_status {
        201 => "Created",
        204 => "No content",
        _ => "Successful response",
    };
    let mut responses: Map<String, Value> = Map::new();
    match route.response_type {
        Some(ref resp_type) if route.response_status != 204 => {
            responses.insert(
                status_key,
                json!({
                    "description": status_desc,
                    "content": {
                        "application/json": {
                            "schema": { "$ref": format!("#/components/schemas/{resp_type}") }
                        }
                    }
                }),
            );
        }
        _ => {
            responses.insert(status_key, json!({ "description": status_desc }));
        }
    }
    if route.has_auth {
        responses.insert("401".into(), json!({ "description": "Unauthorized" }));
        responses.insert("403".into(), json!({ "description": "Forbidden" }));
    }
    operation.insert("responses".into(), Value::Object(responses));

    if route.has_auth {
        operation.insert("security".into(), json!([{ "bearer": route.roles }]));
    }

    Value::Object(operation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_colon_params() {
        assert_eq!(openapi_path(None, "/cats/:id"), "/cats/{id}");
        assert_eq!(openapi_path(Some("api"), "cats/:id/toys/"), "/api/cats/{id}/toys");
        assert_eq!(openapi_path(Some("/api/"), "/"), "/api");
        assert_eq!(openapi_path(None, "/"), "/");
    }

    #[test]
    fn finds_path_params() {
        let params: Vec<_> = path_params("/cats/{id}/toys/{toy}").collect();
        assert_eq!(params, vec!["id", "toy"]);
    }
}
