//! Root working directory discovery.
//!
//! Discovery walks the module-resolution search path for the current
//! working directory — the `node_modules` location of every ancestor,
//! nearest first — and derives a sibling `package.json` candidate at each
//! level. Candidates that exist and declare a non-empty workspace member
//! list mark their directory as a potential root:
//!
//! - exactly one such manifest → its directory is the root;
//! - none → the current working directory is the root;
//! - more than one → the current working directory again (a well-formed
//!   workspace never nests workspace manifests, but the fallback keeps
//!   the result deterministic rather than failing).
//!
//! The algorithm is a pure function of a [`DiscoveryConfig`] plus the
//! filesystem; reading environment variables and publishing the result
//! into [`ROOT_DIR_VAR`] happen only in [`init_from_env`].

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::logging::{Logger, LogLevel};
use crate::manifest::{self, WorkspaceManifest, MANIFEST_FILENAME};
use crate::path::resolver::{current_dir_resolved, RootContext};

/// Environment variable the discovered root is published under.
pub const ROOT_DIR_VAR: &str = "MONOROOT_ROOT_DIR";

/// Directory name conventionally searched for dependencies.
pub const DEPENDENCY_DIR: &str = "node_modules";

/// Explicit inputs to one discovery pass.
///
/// Ambient state (the process working directory, the verbosity variable)
/// is captured into this struct at the boundary so the algorithm itself
/// stays a function of its arguments.
///
/// # Examples
///
/// ```no_run
/// use monoroot::{discover_root, DiscoveryConfig, LogLevel};
/// use std::path::PathBuf;
///
/// let config = DiscoveryConfig::new("/repo/packages/app").with_log_level(LogLevel::Info);
/// let context = discover_root(&config)?;
/// println!("root: {}", context.root().display());
/// # Ok::<(), monoroot::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Directory the scan starts from, normally the working directory.
    pub start_dir: PathBuf,
    /// Diagnostics verbosity for this pass.
    pub log_level: LogLevel,
}

impl DiscoveryConfig {
    /// Creates a configuration scanning upward from `start_dir`.
    pub fn new(start_dir: impl Into<PathBuf>) -> Self {
        Self {
            start_dir: start_dir.into(),
            log_level: LogLevel::None,
        }
    }

    /// Sets the diagnostics verbosity.
    #[must_use]
    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    /// Captures the ambient configuration: the symlink-resolved current
    /// working directory and the [`crate::logging::LOG_LEVEL_VAR`] setting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CurrentDirUnavailable`] if the working directory
    /// cannot be resolved. An invalid verbosity value is reported on
    /// stderr and degrades to `none` instead of failing.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            start_dir: current_dir_resolved()?,
            log_level: LogLevel::from_env(),
        })
    }
}

/// Enumerates the module-resolution search path for a directory.
///
/// Yields `<ancestor>/node_modules` for the directory itself and every
/// ancestor up to the filesystem root, nearest first. Entries are derived
/// lexically; none of them need exist.
///
/// # Examples
///
/// ```
/// use monoroot::discovery::search_paths;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(
///     search_paths(Path::new("/a/b")),
///     vec![
///         PathBuf::from("/a/b/node_modules"),
///         PathBuf::from("/a/node_modules"),
///         PathBuf::from("/node_modules"),
///     ]
/// );
/// ```
#[must_use]
pub fn search_paths(start: &Path) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    let mut current = start.to_path_buf();
    loop {
        paths.push(current.join(DEPENDENCY_DIR));
        if !current.pop() {
            break;
        }
    }
    paths
}

/// Derives manifest candidates from a module-resolution search path.
///
/// Each entry's trailing dependency-directory name is replaced with the
/// manifest filename, producing the sibling `package.json` at the same
/// ancestor level.
#[must_use]
pub fn manifest_candidates(search: &[PathBuf]) -> Vec<PathBuf> {
    search
        .iter()
        .map(|path| path.with_file_name(MANIFEST_FILENAME))
        .collect()
}

/// Discovers the root working directory for an explicit configuration.
///
/// Pure with respect to process state: only `config` and the filesystem
/// are consulted, and nothing is written back to the environment. Use
/// [`init_from_env`] for the publish-on-startup behavior.
///
/// # Errors
///
/// Returns [`Error::CurrentDirUnavailable`] if `config.start_dir` cannot
/// be resolved on disk — the one fatal condition. Unreadable or malformed
/// manifest candidates are never errors; they are simply not matches.
pub fn discover_root(config: &DiscoveryConfig) -> Result<RootContext> {
    let logger = Logger::new(config.log_level);

    let cwd = fs::canonicalize(&config.start_dir).map_err(|e| Error::CurrentDirUnavailable {
        reason: format!("{}: {e}", config.start_dir.display()),
    })?;
    logger.verbose(&format!("current working directory: {}", cwd.display()));

    let search = search_paths(&cwd);
    logger.verbose(&format!("module search paths: {search:?}"));

    let candidates = manifest_candidates(&search);
    logger.verbose(&format!("manifest candidates: {candidates:?}"));

    // Symlink-resolved existence filter; failure to resolve means the
    // candidate does not exist, never a fatal error.
    let existing: Vec<PathBuf> = candidates
        .iter()
        .filter_map(|candidate| fs::canonicalize(candidate).ok())
        .collect();
    logger.verbose(&format!("existing manifests: {existing:?}"));

    if existing.is_empty() {
        logger.info("no package manifest found along the search path");
    }

    let workspaces: Vec<WorkspaceManifest> = existing
        .iter()
        .filter_map(|path| manifest::classify(path))
        .collect();
    logger.verbose(&format!(
        "workspace manifests: {:?}",
        workspaces.iter().map(|w| &w.path).collect::<Vec<_>>()
    ));

    let root = match workspaces.as_slice() {
        [] => {
            logger.info("no workspace manifest found along the search path");
            cwd.clone()
        }
        [only] => {
            logger.info(&format!(
                "single workspace manifest found: {}",
                only.path.display()
            ));
            only.root_dir().to_path_buf()
        }
        many => {
            let listed = many
                .iter()
                .map(|w| w.path.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            logger.info(&format!(
                "multiple workspace manifests found: {listed}; falling back to the current working directory"
            ));
            cwd.clone()
        }
    };

    logger.info(&format!("root working directory determined: {}", root.display()));
    Ok(RootContext::new(root, cwd))
}

/// Runs discovery for the current process and publishes the result.
///
/// Captures the ambient configuration, discovers the root, writes it into
/// [`ROOT_DIR_VAR`], and returns the context. Any pre-set value of the
/// variable is ignored and overwritten: the root is always re-derived
/// from the filesystem. Re-invocation is safe and, with an unchanged
/// filesystem, republishes the identical value.
///
/// # Errors
///
/// Returns [`Error::CurrentDirUnavailable`] if the working directory
/// cannot be resolved.
///
/// # Examples
///
/// ```no_run
/// use monoroot::discovery;
///
/// let context = discovery::init_from_env()?;
/// println!("root: {}", context.root().display());
/// # Ok::<(), monoroot::Error>(())
/// ```
pub fn init_from_env() -> Result<RootContext> {
    let config = DiscoveryConfig::from_env()?;
    let context = discover_root(&config)?;
    env::set_var(ROOT_DIR_VAR, context.root());
    Ok(context)
}
