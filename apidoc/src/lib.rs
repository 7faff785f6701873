//! apidoc: OpenAPI documents and Swagger UI for axum applications.
//!
//! This facade crate re-exports the apidoc sub-crates through a single
//! dependency and provides [`SwaggerModule`], the entry point that builds a
//! document from an application and mounts the documentation UI on it.
//!
//! ```ignore
//! use apidoc::prelude::*;
//!
//! let config = DocumentBuilder::new().title("Cats example").build();
//! let document = SwaggerModule::create_document(&app, config, &ScanOptions::default())?;
//! SwaggerModule::setup("api-docs", &mut app, &document, None)?;
//! ```
//!
//! # Feature flags
//!
//! | Feature          | Default | Enables                                         |
//! |------------------|---------|-------------------------------------------------|
//! | `swagger-ui`     | **yes** | UI renderer for express- and azure-style setup  |
//! | `swagger-plugin` | **yes** | scoped Swagger plugin for fastify-style setup   |
//!
//! Without a feature, setup on the matching adapter fails with
//! [`SetupError::MissingPackage`] naming the feature.

mod module;

pub use apidoc_core;
pub use apidoc_openapi;
#[cfg(any(feature = "swagger-ui", feature = "swagger-plugin"))]
pub use apidoc_swagger_ui;

pub use apidoc_core::*;
pub use apidoc_openapi::{
    DocumentBuilder, DocumentConfig, OpenApiDocument, RouteScanner, ScanError, ScanOptions,
    ScannedDocument, Scanner, SwaggerCustomOptions,
};
pub use module::SwaggerModule;

/// Unified prelude: import everything with `use apidoc::prelude::*`.
pub mod prelude {
    pub use crate::module::SwaggerModule;
    pub use apidoc_core::prelude::*;
    pub use apidoc_openapi::{
        DocumentBuilder, DocumentConfig, OpenApiDocument, ScanOptions, Scanner,
        SwaggerCustomOptions,
    };
}
