//! Lexical path normalization functions.
//!
//! This module provides functionality to compose paths without touching
//! the filesystem:
//! - Joining relative paths onto an absolute base
//! - Resolving `.` and `..` components
//! - Expanding tilde (~) for user-supplied inputs at the CLI boundary
//!
//! Symlink resolution is a discovery concern and never happens here.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user`
/// syntax. It is intended for explicit user input (CLI arguments); the
/// core resolvers never call it.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use monoroot::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// // Expands ~/path to home/path
/// let expanded = expand_tilde(Path::new("~/project")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("project"));
///
/// // Leaves other paths unchanged
/// let expanded = expand_tilde(Path::new("/absolute")).unwrap();
/// assert_eq!(expanded, Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "path contains invalid UTF-8".to_string(),
    })?;

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Resolve `.` and `..` components in a path.
///
/// Current-directory (`.`) components are elided and parent-directory
/// (`..`) components pop the preceding component. On an absolute path a
/// `..` that would climb past the filesystem root is clamped there rather
/// than rejected, so `/a/../..` resolves to `/`. On a relative path
/// unmatched leading `..` components are preserved.
///
/// # Examples
///
/// ```
/// use monoroot::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(
///     resolve_components(Path::new("/a/./b/../c")),
///     PathBuf::from("/a/c")
/// );
/// assert_eq!(resolve_components(Path::new("/a/../..")), PathBuf::from("/"));
/// ```
#[must_use]
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    let mut has_root = false;

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Prefix(prefix) => {
                // Windows prefix
                result.push(prefix.as_os_str());
                has_root = true;
            }
            Component::Normal(c) => {
                result.push(c);
            }
            Component::CurDir => {
                // Skip "." - it doesn't change the path
            }
            Component::ParentDir => {
                let last_is_normal =
                    matches!(result.components().next_back(), Some(Component::Normal(_)));
                if last_is_normal {
                    result.pop();
                } else if !has_root {
                    // Nothing to pop on a relative path: keep the ".."
                    result.push(component);
                }
                // A ".." at the root clamps rather than escaping it.
            }
        }
    }

    // Ensure we at least have a root if we started with one
    if has_root && result.as_os_str().is_empty() {
        result.push(Component::RootDir);
    }

    result
}

/// Join a path onto an absolute base and normalize the result.
///
/// This is the core resolution primitive: an absolute `path` replaces the
/// base entirely, a relative `path` is appended to it, and the combined
/// path has its `.` and `..` components resolved. The empty path yields
/// the (normalized) base itself.
///
/// # Examples
///
/// ```
/// use monoroot::path::normalize::join_normalized;
/// use std::path::{Path, PathBuf};
///
/// let base = Path::new("/repo");
/// assert_eq!(
///     join_normalized(base, Path::new("src/index.ts")),
///     PathBuf::from("/repo/src/index.ts")
/// );
/// assert_eq!(
///     join_normalized(base, Path::new("a/../b")),
///     PathBuf::from("/repo/b")
/// );
/// assert_eq!(join_normalized(base, Path::new("")), PathBuf::from("/repo"));
/// assert_eq!(
///     join_normalized(base, Path::new("/etc/hosts")),
///     PathBuf::from("/etc/hosts")
/// );
/// ```
#[must_use]
pub fn join_normalized(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        resolve_components(path)
    } else {
        resolve_components(&base.join(path))
    }
}
