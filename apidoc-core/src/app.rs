use crate::adapter::HttpAdapter;
use crate::meta::ModuleInfo;

/// The capabilities documentation setup needs from a running application.
///
/// Setup never owns the application: it asks for the HTTP adapter to
/// register routes on and for the module tree to scan.
pub trait HostApplication {
    /// The adapter routes are registered on, if the application has one.
    fn http_adapter(&mut self) -> Option<&mut dyn HttpAdapter>;

    /// Root modules of the application.
    fn modules(&self) -> &[ModuleInfo];

    /// Prefix applied to every application route (e.g. `api/v1`).
    fn global_prefix(&self) -> Option<&str> {
        None
    }
}

/// A minimal host application: one adapter plus route metadata.
///
/// # Example
///
/// ```
/// use apidoc_core::{Application, ExpressAdapter, ModuleInfo, RouteInfo};
///
/// let app = Application::new(ExpressAdapter::new())
///     .set_global_prefix("api")
///     .with_module(
///         ModuleInfo::new("CatsModule")
///             .with_route(RouteInfo::new("GET", "/cats", "CatsController", "find_all")),
///     );
/// let router = app.into_adapter().unwrap().into_router();
/// # let _ = router;
/// ```
pub struct Application<A> {
    adapter: Option<A>,
    modules: Vec<ModuleInfo>,
    global_prefix: Option<String>,
}

impl<A: HttpAdapter> Application<A> {
    pub fn new(adapter: A) -> Self {
        Self {
            adapter: Some(adapter),
            modules: Vec::new(),
            global_prefix: None,
        }
    }

    /// An application that has not been attached to an HTTP server.
    pub fn without_adapter() -> Self {
        Self {
            adapter: None,
            modules: Vec::new(),
            global_prefix: None,
        }
    }

    pub fn with_module(mut self, module: ModuleInfo) -> Self {
        self.modules.push(module);
        self
    }

    pub fn set_global_prefix(mut self, prefix: &str) -> Self {
        self.global_prefix = Some(prefix.to_string());
        self
    }

    pub fn adapter(&self) -> Option<&A> {
        self.adapter.as_ref()
    }

    pub fn into_adapter(self) -> Option<A> {
        self.adapter
    }
}

impl<A: HttpAdapter + 'static> HostApplication for Application<A> {
    fn http_adapter(&mut self) -> Option<&mut dyn HttpAdapter> {
        self.adapter.as_mut().map(|a| a as &mut dyn HttpAdapter)
    }

    fn modules(&self) -> &[ModuleInfo] {
        &self.modules
    }

    fn global_prefix(&self) -> Option<&str> {
        self.global_prefix.as_deref()
    }
}
