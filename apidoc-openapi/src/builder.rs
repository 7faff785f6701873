use apidoc_core::config::{AppConfig, ConfigError};
use serde_json::{json, Map, Value};

use crate::document::{DocumentConfig, OPENAPI_VERSION};

/// Fluent builder for the caller half of a document.
///
/// ```
/// use apidoc_openapi::DocumentBuilder;
///
/// let config = DocumentBuilder::new()
///     .title("Cats example")
///     .description("The cats API description")
///     .version("1.0")
///     .add_tag("cats", None)
///     .add_bearer_auth()
///     .build();
/// assert_eq!(config.get("info").unwrap()["title"], "Cats example");
/// ```
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    document: Map<String, Value>,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder {
    pub fn new() -> Self {
        let mut document = Map::new();
        document.insert("openapi".into(), json!(OPENAPI_VERSION));
        document.insert(
            "info".into(),
            json!({ "title": "", "description": "", "version": "1.0.0", "contact": {} }),
        );
        document.insert("tags".into(), json!([]));
        document.insert("servers".into(), json!([]));
        document.insert("components".into(), json!({}));
        Self { document }
    }

    /// Seed a builder from `openapi.title`, `openapi.description`,
    /// `openapi.version` and `openapi.servers`.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let mut builder = Self::new();
        if let Some(title) = config.get_opt::<String>("openapi.title")? {
            builder = builder.title(&title);
        }
        if let Some(description) = config.get_opt::<String>("openapi.description")? {
            builder = builder.description(&description);
        }
        if let Some(version) = config.get_opt::<String>("openapi.version")? {
            builder = builder.version(&version);
        }
        for server in config.get_opt::<Vec<String>>("openapi.servers")?.unwrap_or_default() {
            builder = builder.add_server(&server, None);
        }
        Ok(builder)
    }

    pub fn title(self, title: &str) -> Self {
        self.set_info("title", json!(title))
    }

    pub fn description(self, description: &str) -> Self {
        self.set_info("description", json!(description))
    }

    pub fn version(self, version: &str) -> Self {
        self.set_info("version", json!(version))
    }

    pub fn terms_of_service(self, url: &str) -> Self {
        self.set_info("termsOfService", json!(url))
    }

    pub fn contact(self, name: &str, url: &str, email: &str) -> Self {
        self.set_info("contact", json!({ "name": name, "url": url, "email": email }))
    }

    pub fn license(self, name: &str, url: &str) -> Self {
        self.set_info("license", json!({ "name": name, "url": url }))
    }

    pub fn add_server(self, url: &str, description: Option<&str>) -> Self {
        let mut server = json!({ "url": url });
        if let Some(description) = description {
            server["description"] = json!(description);
        }
        self.push("servers", server)
    }

    pub fn add_tag(self, name: &str, description: Option<&str>) -> Self {
        let mut tag = json!({ "name": name });
        if let Some(description) = description {
            tag["description"] = json!(description);
        }
        self.push("tags", tag)
    }

    pub fn external_doc(mut self, description: &str, url: &str) -> Self {
        self.document.insert(
            "externalDocs".into(),
            json!({ "description": description, "url": url }),
        );
        self
    }

    /// Register a security scheme under `components.securitySchemes.<name>`.
    pub fn add_security(mut self, name: &str, scheme: Value) -> Self {
        with_object(&mut self.document, "components", |components| {
            with_object(components, "securitySchemes", |schemes| {
                schemes.insert(name.to_string(), scheme);
            });
        });
        self
    }

    /// Require a security scheme for every operation.
    pub fn add_security_requirement(self, name: &str, scopes: &[&str]) -> Self {
        self.push("security", json!({ name: scopes }))
    }

    /// HTTP bearer (JWT) scheme named `bearer`.
    pub fn add_bearer_auth(self) -> Self {
        self.add_security(
            "bearer",
            json!({ "type": "http", "scheme": "bearer", "bearerFormat": "JWT" }),
        )
    }

    /// API key sent in the `api_key` header, scheme named `api_key`.
    pub fn add_api_key(self) -> Self {
        self.add_security(
            "api_key",
            json!({ "type": "apiKey", "in": "header", "name": "api_key" }),
        )
    }

    pub fn add_basic_auth(self) -> Self {
        self.add_security("basic", json!({ "type": "http", "scheme": "basic" }))
    }

    /// API key carried by `cookie_name`, scheme named `cookie`.
    pub fn add_cookie_auth(self, cookie_name: &str) -> Self {
        self.add_security(
            "cookie",
            json!({ "type": "apiKey", "in": "cookie", "name": cookie_name }),
        )
    }

    pub fn build(self) -> DocumentConfig {
        DocumentConfig::from(self.document)
    }

    fn set_info(mut self, key: &str, value: Value) -> Self {
        with_object(&mut self.document, "info", |info| {
            info.insert(key.to_string(), value);
        });
        self
    }

    fn push(mut self, key: &str, value: Value) -> Self {
        let entry = self
            .document
            .entry(key.to_string())
            .or_insert_with(|| json!([]));
        if !entry.is_array() {
            *entry = json!([]);
        }
        if let Value::Array(items) = entry {
            items.push(value);
        }
        self
    }
}

/// Run `f` on the object stored under `key`, creating (or replacing) it if needed.
fn with_object(map: &mut Map<String, Value>, key: &str, f: impl FnOnce(&mut Map<String, Value>)) {
    let entry = map.entry(key.to_string()).or_insert_with(|| json!({}));
    if !entry.is_object() {
        *entry = json!({});
    }
    if let Some(obj) = entry.as_object_mut() {
        f(obj);
    }
}
