use std::fmt;

use crate::package::MissingPackageError;

/// An adapter could not carry out a registration.
#[derive(Debug)]
pub enum AdapterError {
    /// The adapter does not offer the requested capability.
    Unsupported {
        adapter: String,
        capability: &'static str,
    },
    /// A scoped plugin failed while registering itself.
    Plugin { plugin: String, message: String },
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdapterError::Unsupported { adapter, capability } => {
                write!(f, "HTTP adapter '{adapter}' does not support '{capability}'")
            }
            AdapterError::Plugin { plugin, message } => {
                write!(f, "Plugin '{plugin}' failed to register: {message}")
            }
        }
    }
}

impl std::error::Error for AdapterError {}

/// Error returned while wiring documentation routes into an application.
#[derive(Debug)]
pub enum SetupError {
    /// A setup argument is unusable, e.g. an empty mount path.
    InvalidPath {
        argument: &'static str,
        reason: &'static str,
    },
    /// A collaborator package needed by the selected adapter is not compiled in.
    MissingPackage(MissingPackageError),
    /// The application has no HTTP adapter to register routes on.
    MissingAdapter,
    Adapter(AdapterError),
    /// The document could not be serialized ahead of serving it.
    Serialize(serde_json::Error),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::InvalidPath { argument, reason } => {
                write!(f, "Invalid argument '{argument}': {reason}")
            }
            SetupError::MissingPackage(err) => write!(f, "{err}"),
            SetupError::MissingAdapter => {
                write!(f, "The application has no HTTP adapter to register routes on")
            }
            SetupError::Adapter(err) => write!(f, "{err}"),
            SetupError::Serialize(err) => write!(f, "Failed to serialize document: {err}"),
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SetupError::MissingPackage(err) => Some(err),
            SetupError::Adapter(err) => Some(err),
            SetupError::Serialize(err) => Some(err),
            SetupError::InvalidPath { .. } | SetupError::MissingAdapter => None,
        }
    }
}

impl From<MissingPackageError> for SetupError {
    fn from(err: MissingPackageError) -> Self {
        SetupError::MissingPackage(err)
    }
}

impl From<AdapterError> for SetupError {
    fn from(err: AdapterError) -> Self {
        SetupError::Adapter(err)
    }
}

impl From<serde_json::Error> for SetupError {
    fn from(err: serde_json::Error) -> Self {
        SetupError::Serialize(err)
    }
}
