//! Root-anchored path resolution.
//!
//! This module provides the [`RootContext`] type: the value produced once
//! by discovery and passed to every consumer that needs root-relative
//! path resolution. Holding the context makes resolution infallible; the
//! fallible part is obtaining one, either from discovery or from the
//! published environment variable.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::discovery::{self, DiscoveryConfig, ROOT_DIR_VAR};
use crate::error::{Error, Result};
use crate::path::normalize::join_normalized;

/// The resolved root and workspace directories for one process.
///
/// `root` is the monorepo top level chosen by discovery (or its fallback)
/// and `workspace` is the symlink-resolved current working directory the
/// scan started from. Both are absolute. The context is a plain value:
/// compute it once at startup and hand it to whoever needs it.
///
/// # Examples
///
/// ```
/// use monoroot::path::RootContext;
/// use std::path::PathBuf;
///
/// let context = RootContext::new("/repo", "/repo/packages/app");
/// assert_eq!(
///     context.resolve_root("src/index.ts"),
///     PathBuf::from("/repo/src/index.ts")
/// );
/// assert_eq!(
///     context.resolve_workspace("src/index.ts"),
///     PathBuf::from("/repo/packages/app/src/index.ts")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootContext {
    root: PathBuf,
    workspace: PathBuf,
}

impl RootContext {
    /// Creates a context from already-resolved directories.
    ///
    /// Discovery is the usual constructor; this one exists for tests and
    /// for callers that manage the directories themselves.
    pub fn new(root: impl Into<PathBuf>, workspace: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            workspace: workspace.into(),
        }
    }

    /// Runs root discovery with an explicit configuration.
    ///
    /// Convenience alias for [`discovery::discover_root`]. This does not
    /// touch process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CurrentDirUnavailable`] if the configured start
    /// directory cannot be resolved on disk.
    pub fn discover(config: &DiscoveryConfig) -> Result<Self> {
        discovery::discover_root(config)
    }

    /// Builds a context from the published [`ROOT_DIR_VAR`] variable.
    ///
    /// This trusts a previously published root instead of re-deriving it
    /// from the filesystem; use [`discovery::init_from_env`] when the
    /// root should be (re)computed.
    ///
    /// # Errors
    ///
    /// - [`Error::RootUndefined`] if the variable is unset or empty.
    /// - [`Error::InvalidPath`] if the published value cannot be resolved
    ///   on disk.
    /// - [`Error::CurrentDirUnavailable`] if the current working
    ///   directory cannot be resolved.
    pub fn from_env() -> Result<Self> {
        let raw = env::var(ROOT_DIR_VAR)
            .ok()
            .filter(|value| !value.is_empty())
            .ok_or(Error::RootUndefined {
                variable: ROOT_DIR_VAR,
            })?;

        let root = fs::canonicalize(&raw).map_err(|e| Error::InvalidPath {
            path: PathBuf::from(&raw),
            reason: format!("published root could not be resolved: {e}"),
        })?;
        let workspace = current_dir_resolved()?;

        Ok(Self { root, workspace })
    }

    /// The root working directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The symlink-resolved current working directory at discovery time.
    #[must_use]
    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    /// Resolves a path against the root working directory.
    ///
    /// Purely lexical: `.` segments are elided, `..` segments pop, an
    /// absolute input replaces the base, and the empty path yields the
    /// root itself. No filesystem access occurs.
    pub fn resolve_root(&self, path: impl AsRef<Path>) -> PathBuf {
        join_normalized(&self.root, path.as_ref())
    }

    /// Resolves a path against the workspace (current working) directory.
    ///
    /// Same lexical composition as [`RootContext::resolve_root`], anchored
    /// at the scan origin instead of the chosen root.
    pub fn resolve_workspace(&self, path: impl AsRef<Path>) -> PathBuf {
        join_normalized(&self.workspace, path.as_ref())
    }
}

/// Resolves a path against the root published in [`ROOT_DIR_VAR`].
///
/// For consumers that do not hold a [`RootContext`]. Each call re-reads
/// the environment; the composition itself is lexical.
///
/// # Errors
///
/// Fails with [`Error::RootUndefined`] (naming the variable to set) when
/// no root has been published, or with the errors of
/// [`RootContext::from_env`].
///
/// # Examples
///
/// ```no_run
/// use monoroot::path::resolve_root_path;
///
/// let absolute = resolve_root_path("src/index.ts")?;
/// println!("{}", absolute.display());
/// # Ok::<(), monoroot::Error>(())
/// ```
pub fn resolve_root_path(path: impl AsRef<Path>) -> Result<PathBuf> {
    let context = RootContext::from_env()?;
    Ok(context.resolve_root(path))
}

/// Resolves a path against the current working directory.
///
/// Independent of any published root: only the working directory is
/// consulted, so this works before discovery has run.
///
/// # Errors
///
/// Returns [`Error::CurrentDirUnavailable`] if the working directory
/// cannot be resolved.
pub fn resolve_workspace_path(path: impl AsRef<Path>) -> Result<PathBuf> {
    let workspace = current_dir_resolved()?;
    Ok(join_normalized(&workspace, path.as_ref()))
}

/// The symlink-resolved current working directory.
///
/// Failure here is the one unrecoverable condition in the library.
pub(crate) fn current_dir_resolved() -> Result<PathBuf> {
    let cwd = env::current_dir().map_err(|e| Error::CurrentDirUnavailable {
        reason: e.to_string(),
    })?;
    fs::canonicalize(&cwd).map_err(|e| Error::CurrentDirUnavailable {
        reason: format!("{}: {e}", cwd.display()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn context() -> RootContext {
        RootContext::new("/repo", "/repo/packages/app")
    }

    #[test]
    fn test_resolve_root_plain() {
        assert_eq!(
            context().resolve_root("src/index.ts"),
            PathBuf::from("/repo/src/index.ts")
        );
    }

    #[test]
    fn test_resolve_root_normalizes() {
        let ctx = context();
        assert_eq!(ctx.resolve_root("./a/b"), ctx.resolve_root("a/b"));
        assert_eq!(ctx.resolve_root("a/../b"), ctx.resolve_root("b"));
    }

    #[test]
    fn test_resolve_root_empty_is_root() {
        assert_eq!(context().resolve_root(""), PathBuf::from("/repo"));
    }

    #[test]
    fn test_resolve_root_absolute_input() {
        assert_eq!(
            context().resolve_root("/etc/hosts"),
            PathBuf::from("/etc/hosts")
        );
    }

    #[test]
    fn test_resolve_root_repeatable() {
        let ctx = context();
        assert_eq!(ctx.resolve_root("src/utils"), ctx.resolve_root("src/utils"));
    }

    #[test]
    fn test_resolve_workspace_uses_workspace_base() {
        assert_eq!(
            context().resolve_workspace("src/index.ts"),
            PathBuf::from("/repo/packages/app/src/index.ts")
        );
    }

    #[test]
    fn test_accessors() {
        let ctx = context();
        assert_eq!(ctx.root(), Path::new("/repo"));
        assert_eq!(ctx.workspace(), Path::new("/repo/packages/app"));
    }

    #[test]
    #[serial]
    fn test_from_env_missing_variable() {
        let saved = env::var(ROOT_DIR_VAR).ok();
        env::remove_var(ROOT_DIR_VAR);

        let err = RootContext::from_env().unwrap_err();
        assert!(err.is_configuration());
        assert!(format!("{err}").contains(ROOT_DIR_VAR));

        if let Some(val) = saved {
            env::set_var(ROOT_DIR_VAR, val);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_empty_variable() {
        let saved = env::var(ROOT_DIR_VAR).ok();
        env::set_var(ROOT_DIR_VAR, "");

        let err = RootContext::from_env().unwrap_err();
        assert!(err.is_configuration());

        match saved {
            Some(val) => env::set_var(ROOT_DIR_VAR, val),
            None => env::remove_var(ROOT_DIR_VAR),
        }
    }

    #[test]
    #[serial]
    fn test_from_env_published_root() {
        let dir = tempdir().unwrap();
        let canonical = fs::canonicalize(dir.path()).unwrap();

        let saved = env::var(ROOT_DIR_VAR).ok();
        env::set_var(ROOT_DIR_VAR, dir.path());

        let ctx = RootContext::from_env().unwrap();
        assert_eq!(ctx.root(), canonical);
        assert_eq!(
            ctx.resolve_root("src/index.ts"),
            canonical.join("src/index.ts")
        );

        match saved {
            Some(val) => env::set_var(ROOT_DIR_VAR, val),
            None => env::remove_var(ROOT_DIR_VAR),
        }
    }

    #[test]
    #[serial]
    fn test_from_env_unresolvable_root() {
        let saved = env::var(ROOT_DIR_VAR).ok();
        env::set_var(ROOT_DIR_VAR, "/nonexistent/monoroot/test/path");

        let err = RootContext::from_env().unwrap_err();
        assert!(matches!(err, Error::InvalidPath { .. }));

        match saved {
            Some(val) => env::set_var(ROOT_DIR_VAR, val),
            None => env::remove_var(ROOT_DIR_VAR),
        }
    }

    #[test]
    fn test_resolve_workspace_path_is_cwd_anchored() {
        let expected = current_dir_resolved().unwrap().join("src");
        assert_eq!(resolve_workspace_path("src").unwrap(), expected);
    }

    // Property-based tests
    #[cfg(unix)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn segment_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec("[a-zA-Z0-9_-]{1,10}", 1..=5).prop_map(|parts| parts.join("/"))
        }

        proptest! {
            /// Root-anchored resolution of dot-free paths is literal concatenation
            #[test]
            fn resolve_root_concatenates(s in segment_strategy()) {
                let ctx = RootContext::new("/repo", "/repo/app");
                prop_assert_eq!(
                    ctx.resolve_root(&s),
                    PathBuf::from(format!("/repo/{s}"))
                );
            }

            /// Resolution is deterministic across repeated calls
            #[test]
            fn resolve_root_repeatable(s in segment_strategy()) {
                let ctx = RootContext::new("/repo", "/repo/app");
                prop_assert_eq!(ctx.resolve_root(&s), ctx.resolve_root(&s));
            }

            /// Resolved paths stay inside the root for dot-free inputs
            #[test]
            fn resolve_root_stays_under_root(s in segment_strategy()) {
                let ctx = RootContext::new("/repo", "/repo/app");
                prop_assert!(ctx.resolve_root(&s).starts_with("/repo"));
            }
        }
    }
}
