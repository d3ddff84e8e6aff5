use crate::error::{IconsError, Result};
use std::path::{Path, PathBuf};

/// Locate an installed icon package's root directory.
///
/// Walks upward from `search_root` checking `node_modules/<package>` at each
/// ancestor, the same lookup a bundler's module resolution performs. The
/// first hit wins.
pub fn resolve_package_dir(search_root: &Path, package: &str) -> Result<PathBuf> {
    let mut dir = search_root.to_path_buf();
    loop {
        let candidate = dir.join("node_modules").join(package);
        if candidate.is_dir() {
            return Ok(candidate);
        }
        match dir.parent() {
            Some(p) => dir = p.to_path_buf(),
            None => break,
        }
    }
    Err(IconsError::PackageNotFound(package.to_string()))
}
