use super::table::RouteTable;
use super::{AdapterKind, HttpAdapter};
use crate::http::{RouteHandler, Router, StaticAssets};

/// Conventional router adapter backed by an axum [`Router`].
///
/// Routes and mounted files are collected while the application is being
/// set up and merged into the wrapped router by [`into_router`](Self::into_router).
/// Merging panics if the wrapped router already serves one of the collected
/// paths, as `Router::merge` does.
#[derive(Debug, Default)]
pub struct ExpressAdapter {
    router: Router,
    table: RouteTable,
}

impl ExpressAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing application router.
    pub fn from_router(router: Router) -> Self {
        Self {
            router,
            table: RouteTable::default(),
        }
    }

    /// Paths of the GET routes registered so far, in registration order.
    pub fn registered_paths(&self) -> Vec<String> {
        self.table.paths()
    }

    pub fn into_router(self) -> Router {
        self.router.merge(self.table.into_router())
    }
}

impl HttpAdapter for ExpressAdapter {
    fn adapter_type(&self) -> &str {
        AdapterKind::EXPRESS
    }

    fn get(&mut self, path: &str, handler: RouteHandler) {
        self.table.add(path, handler);
    }

    fn mount(&mut self, path: &str, assets: StaticAssets) {
        self.table.mount(path, assets);
    }
}
