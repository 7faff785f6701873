pub use axum::http::header::{HeaderName, HeaderValue, CONTENT_TYPE, LOCATION};
pub use axum::http::request::Parts;
pub use axum::http::{HeaderMap, Method, StatusCode};

/// `Content-Type` of the documentation UI page.
pub const TEXT_HTML: &str = "text/html";

/// `Content-Type` of the raw OpenAPI document.
pub const APPLICATION_JSON: &str = "application/json";
