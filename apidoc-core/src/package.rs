//! Lazy resolution of optional collaborator packages.
//!
//! UI renderers and plugins live behind cargo features. Callers resolve them
//! through [`load_package`] at first use, so a disabled feature surfaces as a
//! named [`MissingPackageError`] at setup time instead of a missing symbol.

use std::fmt;
use std::sync::OnceLock;

/// A collaborator package required by a feature is not available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingPackageError {
    /// Name of the missing package (also the cargo feature that enables it).
    pub package: &'static str,
    /// The component that asked for it.
    pub context: &'static str,
}

impl fmt::Display for MissingPackageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The \"{}\" package is missing. Enable the `{}` feature to take advantage of {}.",
            self.package, self.package, self.context
        )
    }
}

impl std::error::Error for MissingPackageError {}

/// Resolve a package once per process and cache the outcome in `slot`.
///
/// `loader` runs at most once; it returns `None` when the package is not
/// compiled in. A missing package stays missing for the process lifetime.
pub fn load_package<T: Send + Sync>(
    slot: &'static OnceLock<Option<T>>,
    package: &'static str,
    context: &'static str,
    loader: impl FnOnce() -> Option<T>,
) -> Result<&'static T, MissingPackageError> {
    let loaded = slot.get_or_init(|| {
        tracing::debug!(package, context, "resolving package");
        loader()
    });
    match loaded {
        Some(loaded) => Ok(loaded),
        None => {
            let err = MissingPackageError { package, context };
            tracing::error!("{err}");
            Err(err)
        }
    }
}
