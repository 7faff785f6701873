//! OpenAPI document generation.
//!
//! A document is the merge of two halves: the caller's [`DocumentConfig`]
//! (usually built with [`DocumentBuilder`]) and the [`ScannedDocument`] a
//! [`Scanner`] extracts from the application. [`create_document`] runs the
//! scanner and applies the merge rules.

mod builder;
mod document;
mod options;
mod scanner;
pub mod schema;

pub use builder::DocumentBuilder;
pub use document::{
    create_document, merge_document, DocumentConfig, OpenApiDocument, ScannedDocument,
    OPENAPI_VERSION,
};
pub use options::{ExtraModel, OperationIdFactory, ScanOptions, SwaggerCustomOptions};
pub use scanner::{RouteScanner, ScanError, Scanner};
pub use schema::SchemaRegistry;
