use std::sync::Arc;

use super::table::RouteTable;
use super::{AdapterKind, HttpAdapter};
use crate::http::{IntoResponse, Method, Request, Response, RouteHandler, Router, StaticAssets, StatusCode};

/// Function-host adapter in the style of serverless HTTP triggers.
///
/// Every request goes through a single entry point, [`handle`](Self::handle),
/// which dispatches on the exact request path. Handlers registered with
/// [`RouteHandler::write`] get the host's low-level response object.
#[derive(Debug, Clone, Default)]
pub struct AzureHttpAdapter {
    table: RouteTable,
}

impl AzureHttpAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registered_paths(&self) -> Vec<String> {
        self.table.paths()
    }

    /// Dispatch one request. Only `GET` and `HEAD` are served.
    pub fn handle(&self, request: Request) -> Response {
        let (parts, _body) = request.into_parts();
        if parts.method != Method::GET && parts.method != Method::HEAD {
            return StatusCode::METHOD_NOT_ALLOWED.into_response();
        }
        match self.table.dispatch(&parts) {
            Some(response) => response,
            None => StatusCode::NOT_FOUND.into_response(),
        }
    }

    /// Expose the host as an axum router whose fallback is [`handle`](Self::handle).
    pub fn into_router(self) -> Router {
        let host = Arc::new(self);
        Router::new().fallback(move |request: Request| {
            let host = host.clone();
            async move { host.handle(request) }
        })
    }
}

impl HttpAdapter for AzureHttpAdapter {
    fn adapter_type(&self) -> &str {
        AdapterKind::AZURE_HTTP
    }

    fn get(&mut self, path: &str, handler: RouteHandler) {
        self.table.add(path, handler);
    }

    fn mount(&mut self, path: &str, assets: StaticAssets) {
        self.table.mount(path, assets);
    }
}
