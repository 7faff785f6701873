use std::sync::Arc;

use apidoc_core::http::{
    Html, IntoResponse, Json, RouteHandler, StatusCode, CONTENT_TYPE, LOCATION,
};
use apidoc_core::{is_literal_path, join_path, AdapterError, Scope, ScopedPlugin};
use apidoc_openapi::{OpenApiDocument, SwaggerCustomOptions};

use crate::html::SwaggerUi;

/// Route prefix used when none is given.
pub const DEFAULT_ROUTE_PREFIX: &str = "/documentation";

const PLUGIN_NAME: &str = "swagger";

/// Where the plugin takes the served document from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Serve `specification.document` as given.
    Static,
    /// Serve the `swagger` document.
    #[default]
    Dynamic,
}

/// A pre-built document for [`Mode::Static`].
#[derive(Debug, Clone)]
pub struct Specification {
    pub document: Arc<OpenApiDocument>,
}

#[derive(Debug, Clone)]
pub struct SwaggerPluginOptions {
    pub swagger: Arc<OpenApiDocument>,
    /// Register the documentation routes. The document is attached to the
    /// scope either way.
    pub expose_route: bool,
    /// Raw prefix; normalized by the plugin.
    pub route_prefix: String,
    pub mode: Mode,
    pub specification: Option<Specification>,
    pub ui: SwaggerCustomOptions,
}

impl SwaggerPluginOptions {
    pub fn new(document: Arc<OpenApiDocument>) -> Self {
        Self {
            swagger: document,
            expose_route: false,
            route_prefix: String::new(),
            mode: Mode::default(),
            specification: None,
            ui: SwaggerCustomOptions::default(),
        }
    }
}

/// The document attached to the plugin's scope.
#[derive(Debug, Clone)]
pub struct Swagger(pub Arc<OpenApiDocument>);

impl Swagger {
    pub fn document(&self) -> &OpenApiDocument {
        &self.0
    }
}

/// Scoped plugin that decorates its scope with the document and, when
/// `expose_route` is set, serves it under the route prefix `P`:
///
/// | Route                     | Response                     |
/// |---------------------------|------------------------------|
/// | `GET P`                   | 302 to `P/static/index.html` |
/// | `GET P/static/index.html` | Swagger UI page              |
/// | `GET P/static/<file>`     | UI support files             |
/// | `GET P/json`              | the document as JSON         |
/// | `GET P/yaml`              | the document as YAML         |
#[derive(Debug, Clone)]
pub struct SwaggerPlugin {
    options: SwaggerPluginOptions,
}

impl SwaggerPlugin {
    pub fn new(options: SwaggerPluginOptions) -> Self {
        Self { options }
    }

    /// The normalized route prefix.
    pub fn route_prefix(&self) -> String {
        normalize_prefix(&self.options.route_prefix)
    }

    fn document(&self) -> Result<Arc<OpenApiDocument>, AdapterError> {
        match (self.options.mode, &self.options.specification) {
            (Mode::Dynamic, _) => Ok(self.options.swagger.clone()),
            (Mode::Static, Some(specification)) => Ok(specification.document.clone()),
            (Mode::Static, None) => Err(plugin_error(
                "static mode requires `specification.document`",
            )),
        }
    }
}

impl ScopedPlugin for SwaggerPlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn register(self: Box<Self>, scope: &mut Scope) -> Result<(), AdapterError> {
        let document = self.document()?;
        scope.decorate(Swagger(document.clone()));

        if !self.options.expose_route {
            tracing::debug!("Swagger routes not exposed");
            return Ok(());
        }

        let prefix = self.route_prefix();
        if !is_literal_path(&prefix) {
            return Err(plugin_error(&format!(
                "route prefix '{prefix}' must not contain route parameters or wildcards"
            )));
        }
        let static_prefix = join_path(&prefix, "static");
        let index_path = join_path(&static_prefix, "index.html");
        let json_path = join_path(&prefix, "json");
        let yaml_path = join_path(&prefix, "yaml");

        let mut ui_options = self.options.ui.clone();
        if ui_options.swagger_url.is_none() {
            ui_options.swagger_url = Some(json_path.clone());
        }
        let ui = SwaggerUi::new();
        let html = ui.generate_html(&document, &ui_options).map_err(render_error)?;
        let files = ui.serve_files(&document, &ui_options).map_err(render_error)?;
        let yaml: Arc<str> = serde_yaml::to_string(&*document)
            .map_err(|e| plugin_error(&format!("cannot render YAML: {e}")))?
            .into();
        let html: Arc<str> = html.into();

        let target = index_path.clone();
        scope.get(
            &prefix,
            RouteHandler::write(move |_, res| {
                res.write_head(StatusCode::FOUND, [(LOCATION, target.as_str())]);
                res.end("");
            }),
        );
        scope.get(
            &index_path,
            RouteHandler::respond(move |_| Html(html.to_string()).into_response()),
        );
        scope.mount(&static_prefix, files);
        let json_doc = document.clone();
        scope.get(
            &json_path,
            RouteHandler::respond(move |_| Json(&*json_doc).into_response()),
        );
        scope.get(
            &yaml_path,
            RouteHandler::respond(move |_| {
                ([(CONTENT_TYPE, "application/x-yaml")], yaml.to_string()).into_response()
            }),
        );

        tracing::info!(prefix = %prefix, "Swagger plugin registered");
        Ok(())
    }
}

/// Empty prefixes fall back to [`DEFAULT_ROUTE_PREFIX`]; others get one
/// leading slash and no trailing slash.
pub fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    match (prefix.is_empty(), trimmed.is_empty()) {
        (true, _) => DEFAULT_ROUTE_PREFIX.to_string(),
        (false, true) => "/".to_string(),
        (false, false) => format!("/{trimmed}"),
    }
}

fn plugin_error(message: &str) -> AdapterError {
    AdapterError::Plugin {
        plugin: PLUGIN_NAME.to_string(),
        message: message.to_string(),
    }
}

fn render_error(err: serde_json::Error) -> AdapterError {
    plugin_error(&format!("cannot render Swagger UI: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_normalization() {
        assert_eq!(normalize_prefix(""), "/documentation");
        assert_eq!(normalize_prefix("docs"), "/docs");
        assert_eq!(normalize_prefix("/docs/"), "/docs");
        assert_eq!(normalize_prefix("/"), "/");
    }
}
