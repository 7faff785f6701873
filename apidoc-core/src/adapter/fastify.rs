use http::Extensions;

use super::table::RouteTable;
use super::{AdapterKind, HttpAdapter};
use crate::error::AdapterError;
use crate::http::{RouteHandler, Router, StaticAssets};
use crate::path::join_path;

/// A unit of registration run inside its own [`Scope`].
pub trait ScopedPlugin: Send {
    /// Plugin name, used in logs and errors.
    fn name(&self) -> &str;

    fn register(self: Box<Self>, scope: &mut Scope) -> Result<(), AdapterError>;
}

struct FnPlugin<F> {
    name: &'static str,
    f: F,
}

impl<F> ScopedPlugin for FnPlugin<F>
where
    F: FnOnce(&mut Scope) -> Result<(), AdapterError> + Send,
{
    fn name(&self) -> &str {
        self.name
    }

    fn register(self: Box<Self>, scope: &mut Scope) -> Result<(), AdapterError> {
        (self.f)(scope)
    }
}

/// Build a plugin from a closure.
///
/// ```
/// use apidoc_core::{plugin_fn, FastifyAdapter, HttpAdapter};
///
/// let mut adapter = FastifyAdapter::new();
/// adapter
///     .register(plugin_fn("outer", |scope| {
///         scope.decorate(7u32);
///         Ok(())
///     }))
///     .unwrap();
/// assert!(adapter.root().decoration::<u32>().is_none());
/// ```
pub fn plugin_fn<F>(name: &'static str, f: F) -> Box<dyn ScopedPlugin>
where
    F: FnOnce(&mut Scope) -> Result<(), AdapterError> + Send + 'static,
{
    Box::new(FnPlugin { name, f })
}

/// An encapsulation context.
///
/// A child scope inherits its parent's prefix and decorations. Decorations
/// added inside a scope stay there: neither the parent nor sibling scopes
/// see them. Routes are global and bubble up to the server once the plugin
/// has finished registering.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    prefix: String,
    depth: usize,
    decorations: Extensions,
    table: RouteTable,
}

impl Scope {
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Nesting level; the server's root scope is `0`.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Register a GET route relative to the scope prefix.
    pub fn get(&mut self, path: &str, handler: RouteHandler) {
        let full = join_path(&self.prefix, path);
        self.table.add(&full, handler);
    }

    pub fn mount(&mut self, path: &str, assets: StaticAssets) {
        let full = join_path(&self.prefix, path);
        self.table.mount(&full, assets);
    }

    /// Attach a value visible to this scope and its descendants.
    pub fn decorate<T: Clone + Send + Sync + 'static>(&mut self, value: T) {
        self.decorations.insert(value);
    }

    pub fn decoration<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.decorations.get::<T>()
    }

    /// Run `plugin` in a new child scope.
    pub fn register(&mut self, plugin: Box<dyn ScopedPlugin>) -> Result<(), AdapterError> {
        self.register_with_prefix(plugin, "")
    }

    /// Run `plugin` in a new child scope whose routes live under `prefix`.
    pub fn register_with_prefix(
        &mut self,
        plugin: Box<dyn ScopedPlugin>,
        prefix: &str,
    ) -> Result<(), AdapterError> {
        let mut child = Scope {
            prefix: if prefix.is_empty() {
                self.prefix.clone()
            } else {
                join_path(&self.prefix, prefix)
            },
            depth: self.depth + 1,
            decorations: self.decorations.clone(),
            table: RouteTable::default(),
        };
        tracing::debug!(plugin = plugin.name(), depth = child.depth, "registering plugin");
        plugin.register(&mut child)?;
        self.table.merge(child.table);
        Ok(())
    }

    pub(crate) fn paths(&self) -> Vec<String> {
        self.table.paths()
    }
}

/// Adapter for servers built from encapsulated plugins.
#[derive(Debug, Default)]
pub struct FastifyAdapter {
    root: Scope,
}

impl FastifyAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The server's root scope.
    pub fn root(&self) -> &Scope {
        &self.root
    }

    pub fn registered_paths(&self) -> Vec<String> {
        self.root.paths()
    }

    pub fn into_router(self) -> Router {
        self.root.table.into_router()
    }
}

impl HttpAdapter for FastifyAdapter {
    fn adapter_type(&self) -> &str {
        AdapterKind::FASTIFY
    }

    fn get(&mut self, path: &str, handler: RouteHandler) {
        self.root.get(path, handler);
    }

    fn mount(&mut self, path: &str, assets: StaticAssets) {
        self.root.mount(path, assets);
    }

    fn register(&mut self, plugin: Box<dyn ScopedPlugin>) -> Result<(), AdapterError> {
        self.root.register(plugin)
    }
}
