use std::collections::HashSet;

use axum::routing::get;

use crate::http::{Parts, Request, Response, RouteHandler, Router, StaticAssets};
use crate::path::join_path;

/// GET routes and mounted files collected by an adapter.
///
/// The first handler registered for a path wins; later duplicates are
/// dropped with a warning. Explicit routes shadow mounted files.
#[derive(Debug, Clone, Default)]
pub(crate) struct RouteTable {
    routes: Vec<(String, RouteHandler)>,
    mounts: Vec<(String, StaticAssets)>,
}

impl RouteTable {
    pub(crate) fn add(&mut self, path: &str, handler: RouteHandler) {
        if self.routes.iter().any(|(existing, _)| existing == path) {
            tracing::warn!(path, "GET route already registered, keeping the first handler");
            return;
        }
        tracing::debug!(path, "registered GET route");
        self.routes.push((path.to_string(), handler));
    }

    pub(crate) fn mount(&mut self, path: &str, assets: StaticAssets) {
        tracing::debug!(path, files = assets.len(), "mounted static files");
        self.mounts.push((path.to_string(), assets));
    }

    pub(crate) fn merge(&mut self, other: RouteTable) {
        for (path, handler) in other.routes {
            self.add(&path, handler);
        }
        self.mounts.extend(other.mounts);
    }

    pub(crate) fn paths(&self) -> Vec<String> {
        self.routes.iter().map(|(path, _)| path.clone()).collect()
    }

    /// Answer a request head by exact path match, then by mounted file.
    pub(crate) fn dispatch(&self, parts: &Parts) -> Option<Response> {
        let path = parts.uri.path();
        if let Some((_, handler)) = self.routes.iter().find(|(p, _)| p == path) {
            return Some(handler.call(parts));
        }
        self.mounts.iter().find_map(|(mount, assets)| {
            assets
                .iter()
                .find(|(name, _)| join_path(mount, name) == path)
                .map(|(_, asset)| asset.to_response())
        })
    }

    pub(crate) fn into_router(self) -> Router {
        let mut router = Router::new();
        let mut taken: HashSet<String> = HashSet::new();

        for (path, handler) in self.routes {
            taken.insert(path.clone());
            router = router.route(
                &path,
                get(move |request: Request| {
                    let handler = handler.clone();
                    async move {
                        let (parts, _body) = request.into_parts();
                        handler.call(&parts)
                    }
                }),
            );
        }

        for (mount, assets) in self.mounts {
            for (name, asset) in assets.iter() {
                let path = join_path(&mount, name);
                if !taken.insert(path.clone()) {
                    continue;
                }
                let asset = asset.clone();
                router = router.route(
                    &path,
                    get(move || {
                        let asset = asset.clone();
                        async move { asset.to_response() }
                    }),
                );
            }
        }

        router
    }
}
