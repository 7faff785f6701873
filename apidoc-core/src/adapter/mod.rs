//! HTTP adapters.
//!
//! An adapter is the host application's abstraction over a concrete HTTP
//! server. Documentation setup talks to it only through [`HttpAdapter`] and
//! picks a registration strategy from [`AdapterKind`].
//!
//! | Adapter              | Type string    | Registration style                         |
//! |----------------------|----------------|--------------------------------------------|
//! | [`ExpressAdapter`]   | `express`      | routes + mounted files on an axum `Router` |
//! | [`AzureHttpAdapter`] | `azure-http`   | function host, low-level response writer   |
//! | [`FastifyAdapter`]   | `fastify`      | encapsulated plugin scopes                 |

mod azure;
mod express;
mod fastify;
mod table;

use std::fmt;

use crate::error::AdapterError;
use crate::http::{RouteHandler, StaticAssets};

pub use azure::AzureHttpAdapter;
pub use express::ExpressAdapter;
pub use fastify::{plugin_fn, FastifyAdapter, Scope, ScopedPlugin};

/// Route registration capabilities of a host HTTP server.
pub trait HttpAdapter: Send {
    /// The adapter's type identifier (`"express"`, `"fastify"`, `"azure-http"`, ...).
    fn adapter_type(&self) -> &str;

    /// Register a GET handler at an absolute path.
    fn get(&mut self, path: &str, handler: RouteHandler);

    /// Serve `assets` below `path`.
    fn mount(&mut self, path: &str, assets: StaticAssets);

    /// Register a plugin in a new encapsulated scope.
    ///
    /// Only scope-aware adapters support this; the default refuses.
    fn register(&mut self, plugin: Box<dyn ScopedPlugin>) -> Result<(), AdapterError> {
        tracing::debug!(plugin = plugin.name(), "adapter cannot register scoped plugins");
        Err(AdapterError::Unsupported {
            adapter: self.adapter_type().to_string(),
            capability: "register",
        })
    }

    /// The adapter kind derived from [`adapter_type`](Self::adapter_type).
    fn kind(&self) -> AdapterKind {
        AdapterKind::parse(self.adapter_type())
    }
}

/// The closed set of adapter flavors documentation setup knows about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterKind {
    Express,
    Fastify,
    AzureHttp,
    /// Any other type string, kept verbatim for diagnostics.
    Unknown(String),
}

impl AdapterKind {
    pub const EXPRESS: &'static str = "express";
    pub const FASTIFY: &'static str = "fastify";
    pub const AZURE_HTTP: &'static str = "azure-http";

    /// Map an adapter type string to its kind. Matching is exact.
    pub fn parse(adapter_type: &str) -> Self {
        match adapter_type {
            Self::EXPRESS => AdapterKind::Express,
            Self::FASTIFY => AdapterKind::Fastify,
            Self::AZURE_HTTP => AdapterKind::AzureHttp,
            other => AdapterKind::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AdapterKind::Express => Self::EXPRESS,
            AdapterKind::Fastify => Self::FASTIFY,
            AdapterKind::AzureHttp => Self::AZURE_HTTP,
            AdapterKind::Unknown(other) => other,
        }
    }
}

impl fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
