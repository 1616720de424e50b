//! Introspection smoke test.
//!
//! Checks that the generated `Graphene-1.0.gir` exposes the basic API and
//! does not leak the SIMD implementation-selection macros.

mod checks;
mod gir;
mod locate;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

pub use checks::{
    CheckOutcome, IntrospectionReport, SIMD_SYMBOLS, check_basics, check_simd_not_exposed,
    run_checks,
};
pub use gir::GirNamespace;
pub use locate::{
    SYSTEM_GIR_DIRS, gir_file_name, gir_search_dirs, gir_search_dirs_from, locate_gir, locate_gir_in,
};

pub const DEFAULT_NAMESPACE: &str = "Graphene";
pub const DEFAULT_NAMESPACE_VERSION: &str = "1.0";

/// Errors produced while loading introspection data.
#[derive(Debug, Error)]
pub enum IntrospectionError {
    /// The `.gir` file could not be read.
    #[error("Failed to read introspection data {}: {source}", path.display())]
    Read {
        /// File that failed to load.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The document declares no namespace.
    #[error("Introspection data has no <namespace> element")]
    MissingNamespace,
    /// The document describes a different namespace.
    #[error("Expected namespace {expected}, found {found}")]
    WrongNamespace { expected: String, found: String },
}

/// Runs every check against `gir`, or against the installed
/// `<namespace>-<version>.gir` when no path is given.
///
/// Failing to find an installed file skips the run; an explicit path that
/// cannot be read is an error.
pub fn check_introspection(
    gir: Option<&Path>,
    namespace: &str,
    version: &str,
) -> Result<IntrospectionReport, IntrospectionError> {
    let path = match gir {
        Some(path) => path.to_path_buf(),
        None => match locate_gir(namespace, version) {
            Some(path) => path,
            None => {
                let reason = format!("{} not found", gir_file_name(namespace, version));
                warn!("Skipping introspection checks: {reason}");
                return Ok(IntrospectionReport::Skipped(reason));
            },
        },
    };

    let ns = GirNamespace::from_path(&path)?;
    if ns.name() != namespace {
        return Err(IntrospectionError::WrongNamespace {
            expected: namespace.to_string(),
            found: ns.name().to_string(),
        });
    }

    Ok(IntrospectionReport::Ran(run_checks(&ns)))
}
