//! Swagger UI for apidoc documents.
//!
//! - [`SwaggerUi`] renders the UI page (`generate_html`) and the files it
//!   needs (`serve_files`), for adapters that register plain routes.
//! - [`SwaggerPlugin`] is a scoped plugin that owns its routes under a
//!   prefix, for adapters with encapsulated plugin registration.

mod assets;
mod html;
mod plugin;

pub use html::{SwaggerUi, INIT_SCRIPT, SWAGGER_UI_CDN};
pub use plugin::{
    normalize_prefix, Mode, Specification, Swagger, SwaggerPlugin, SwaggerPluginOptions,
    DEFAULT_ROUTE_PREFIX,
};
