use std::fmt;
use std::sync::Arc;

use apidoc_core::config::{AppConfig, ConfigError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Builds an `operationId` from a controller name and a handler name.
pub type OperationIdFactory = Arc<dyn Fn(&str, &str) -> String + Send + Sync>;

/// A schema added to `components.schemas` even when no route references it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtraModel {
    pub name: String,
    pub schema: Value,
}

impl ExtraModel {
    pub fn new(name: &str, schema: Value) -> Self {
        Self {
            name: name.to_string(),
            schema,
        }
    }

    /// Derive the model from a `schemars::JsonSchema` type.
    pub fn of<T: JsonSchema>() -> Self {
        Self {
            name: T::schema_name().into_owned(),
            schema: schemars::schema_for!(T).to_value(),
        }
    }
}

/// Options understood by the scanner when building a document.
#[derive(Clone, Default)]
pub struct ScanOptions {
    /// Module names to document. Empty means every module.
    pub include: Vec<String>,
    pub extra_models: Vec<ExtraModel>,
    pub ignore_global_prefix: bool,
    /// Also scan the imports of included modules.
    pub deep_scan_routes: bool,
    pub operation_id_factory: Option<OperationIdFactory>,
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include(mut self, module: &str) -> Self {
        self.include.push(module.to_string());
        self
    }

    pub fn extra_model<T: JsonSchema>(mut self) -> Self {
        self.extra_models.push(ExtraModel::of::<T>());
        self
    }

    pub fn ignore_global_prefix(mut self, ignore: bool) -> Self {
        self.ignore_global_prefix = ignore;
        self
    }

    pub fn deep_scan_routes(mut self, deep: bool) -> Self {
        self.deep_scan_routes = deep;
        self
    }

    pub fn operation_id_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        self.operation_id_factory = Some(Arc::new(factory));
        self
    }

    /// The `operationId` for a handler; `{controller}_{handler}` by default.
    pub fn operation_id(&self, controller: &str, handler: &str) -> String {
        match &self.operation_id_factory {
            Some(factory) => factory(controller, handler),
            None => format!("{controller}_{handler}"),
        }
    }
}

impl fmt::Debug for ScanOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanOptions")
            .field("include", &self.include)
            .field("extra_models", &self.extra_models)
            .field("ignore_global_prefix", &self.ignore_global_prefix)
            .field("deep_scan_routes", &self.deep_scan_routes)
            .field(
                "operation_id_factory",
                &self.operation_id_factory.as_ref().map(|_| ".."),
            )
            .finish()
    }
}

/// Options forwarded to the Swagger UI renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwaggerCustomOptions {
    /// Show the explorer bar (URL input) at the top of the UI.
    pub explorer: bool,
    /// Merged into the `SwaggerUIBundle` configuration.
    pub swagger_options: Map<String, Value>,
    /// Inline CSS appended after the default stylesheet.
    pub custom_css: Option<String>,
    pub custom_css_url: Option<String>,
    /// URL of an extra script loaded after the UI bundle.
    pub custom_js: Option<String>,
    pub custom_favicon: Option<String>,
    pub custom_site_title: Option<String>,
    /// Load the document from this URL instead of inlining it.
    pub swagger_url: Option<String>,
}

impl SwaggerCustomOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the `swagger.*` configuration keys.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            explorer: config.get_opt("swagger.explorer")?.unwrap_or(false),
            custom_site_title: config.get_opt("swagger.title")?,
            custom_favicon: config.get_opt("swagger.favicon")?,
            custom_css_url: config.get_opt("swagger.css")?,
            custom_js: config.get_opt("swagger.js")?,
            ..Self::default()
        })
    }

    pub fn explorer(mut self, explorer: bool) -> Self {
        self.explorer = explorer;
        self
    }

    pub fn swagger_option(mut self, key: &str, value: Value) -> Self {
        self.swagger_options.insert(key.to_string(), value);
        self
    }

    pub fn custom_css(mut self, css: &str) -> Self {
        self.custom_css = Some(css.to_string());
        self
    }

    pub fn custom_css_url(mut self, url: &str) -> Self {
        self.custom_css_url = Some(url.to_string());
        self
    }

    pub fn custom_js(mut self, url: &str) -> Self {
        self.custom_js = Some(url.to_string());
        self
    }

    pub fn custom_favicon(mut self, url: &str) -> Self {
        self.custom_favicon = Some(url.to_string());
        self
    }

    pub fn custom_site_title(mut self, title: &str) -> Self {
        self.custom_site_title = Some(title.to_string());
        self
    }

    pub fn swagger_url(mut self, url: &str) -> Self {
        self.swagger_url = Some(url.to_string());
        self
    }
}
