//! apidoc-core prelude: the host-side types in a single `use`.
//!
//! ```ignore
//! use apidoc_core::prelude::*;
//! ```

pub use crate::adapter::{
    plugin_fn, AdapterKind, AzureHttpAdapter, ExpressAdapter, FastifyAdapter, HttpAdapter, Scope,
    ScopedPlugin,
};
pub use crate::app::{Application, HostApplication};
pub use crate::config::AppConfig;
pub use crate::error::{AdapterError, SetupError};
pub use crate::http::{
    Html, IntoResponse, Json, Response, ResponseWriter, RouteHandler, Router, StaticAssets,
    StatusCode,
};
pub use crate::meta::{ModuleInfo, ParamInfo, RouteInfo};
