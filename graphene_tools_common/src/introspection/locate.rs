//! Lookup of installed `.gir` files.

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

/// Directories scanned after the environment-provided ones.
pub const SYSTEM_GIR_DIRS: [&str; 2] = ["/usr/local/share/gir-1.0", "/usr/share/gir-1.0"];

pub fn gir_file_name(namespace: &str, version: &str) -> String {
    format!("{namespace}-{version}.gir")
}

/// Directories to search for the current environment.
pub fn gir_search_dirs() -> Vec<PathBuf> {
    gir_search_dirs_from(
        env::var_os("GI_GIR_PATH").as_deref(),
        env::var_os("XDG_DATA_DIRS").as_deref(),
    )
}

/// Directories to search, in priority order: every `gi_gir_path` entry, then
/// each `xdg_data_dirs` entry joined with `gir-1.0`, then the system
/// locations. Empty list entries are skipped.
pub fn gir_search_dirs_from(
    gi_gir_path: Option<&OsStr>,
    xdg_data_dirs: Option<&OsStr>,
) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = Vec::new();

    if let Some(paths) = gi_gir_path {
        dirs.extend(env::split_paths(paths).filter(|p| !p.as_os_str().is_empty()));
    }
    if let Some(paths) = xdg_data_dirs {
        dirs.extend(
            env::split_paths(paths)
                .filter(|p| !p.as_os_str().is_empty())
                .map(|p| p.join("gir-1.0")),
        );
    }
    dirs.extend(SYSTEM_GIR_DIRS.iter().map(PathBuf::from));

    dirs
}

/// First `<namespace>-<version>.gir` found in `dirs`.
pub fn locate_gir_in<I, P>(dirs: I, namespace: &str, version: &str) -> Option<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let file_name = gir_file_name(namespace, version);
    dirs.into_iter().find_map(|dir| {
        let candidate = dir.as_ref().join(&file_name);
        debug!("looking for {}", candidate.display());
        candidate.is_file().then_some(candidate)
    })
}

pub fn locate_gir(namespace: &str, version: &str) -> Option<PathBuf> {
    let found = locate_gir_in(gir_search_dirs(), namespace, version);
    if let Some(path) = &found {
        info!("Using introspection data: {}", path.display());
    }
    found
}
