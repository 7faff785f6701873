pub mod adapter;
pub mod app;
pub mod config;
pub mod error;
pub mod http;
pub mod layers;
pub mod meta;
pub mod package;
pub mod path;
pub mod prelude;

pub use adapter::{
    plugin_fn, AdapterKind, AzureHttpAdapter, ExpressAdapter, FastifyAdapter, HttpAdapter, Scope,
    ScopedPlugin,
};
pub use app::{Application, HostApplication};
pub use config::{AppConfig, ConfigError, ConfigValue, FromConfigValue};
pub use error::{AdapterError, SetupError};
pub use layers::{default_trace, init_tracing};
pub use meta::{ModuleInfo, ParamInfo, ParamLocation, RouteInfo};
pub use package::{load_package, MissingPackageError};
pub use path::{is_literal_path, join_path, validate_path};
