pub mod assets;
pub mod handler;
pub mod header;

pub use axum::body::Body;
pub use axum::extract::Request;
pub use axum::response::{Html, IntoResponse, Response};
pub use axum::{Json, Router};
pub use self::assets::{StaticAsset, StaticAssets};
pub use self::handler::{ResponseWriter, RouteHandler};
pub use self::header::{
    HeaderMap, HeaderName, HeaderValue, Method, Parts, StatusCode, APPLICATION_JSON, TEXT_HTML,
    CONTENT_TYPE, LOCATION,
};
