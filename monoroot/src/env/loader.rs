//! Candidate selection and sequential loading of `.env` layers.

use std::env;
use std::path::{Path, PathBuf};

use crate::logging::Logger;

/// Environment variable naming the deployment environment (e.g. `production`).
pub const ENVIRONMENT_VAR: &str = "MONOROOT_ENV";

/// Environment name whose `.local` layer is suppressed.
///
/// Local development settings must not leak into test runs, so
/// `<base>.local` is skipped when the environment is `test`.
pub const TEST_ENVIRONMENT: &str = "test";

/// Derives the layered candidate files for a base path, in priority order.
///
/// With an environment name the list is:
/// `<base>.<env>.local`, `<base>.<env>`, `<base>.local`, `<base>` —
/// except that `<base>.local` is omitted for the [`TEST_ENVIRONMENT`].
/// Without one, only `<base>.local` and `<base>` remain.
///
/// # Examples
///
/// ```
/// use monoroot::env::dotenv_candidates;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(
///     dotenv_candidates(Path::new(".env"), Some("production")),
///     vec![
///         PathBuf::from(".env.production.local"),
///         PathBuf::from(".env.production"),
///         PathBuf::from(".env.local"),
///         PathBuf::from(".env"),
///     ]
/// );
/// ```
#[must_use]
pub fn dotenv_candidates(base: &Path, environment: Option<&str>) -> Vec<PathBuf> {
    let base_str = base.to_string_lossy();
    let mut candidates = Vec::with_capacity(4);

    if let Some(environment) = environment.filter(|name| !name.is_empty()) {
        candidates.push(PathBuf::from(format!("{base_str}.{environment}.local")));
        candidates.push(PathBuf::from(format!("{base_str}.{environment}")));
        if environment != TEST_ENVIRONMENT {
            candidates.push(PathBuf::from(format!("{base_str}.local")));
        }
    } else {
        candidates.push(PathBuf::from(format!("{base_str}.local")));
    }

    candidates.push(base.to_path_buf());
    candidates
}

/// Loads the layered files for `base` into the process environment.
///
/// Candidates are processed sequentially in priority order; each existing
/// file is handed to `dotenvy`, whose merge never overwrites variables
/// that are already set, so earlier files take precedence over later
/// ones. Missing files are skipped silently; a file that exists but
/// cannot be parsed is a soft failure reported through `logger`.
///
/// Returns the files actually loaded, in load order.
pub fn load_layered(base: &Path, environment: Option<&str>, logger: &Logger) -> Vec<PathBuf> {
    let mut loaded = Vec::new();

    for candidate in dotenv_candidates(base, environment) {
        if !candidate.exists() {
            logger.verbose(&format!(
                "environment file not present: {}",
                candidate.display()
            ));
            continue;
        }
        match dotenvy::from_path(&candidate) {
            Ok(()) => {
                logger.info(&format!("loaded environment file: {}", candidate.display()));
                loaded.push(candidate);
            }
            Err(e) => {
                logger.warn(&format!(
                    "skipping unreadable environment file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    loaded
}

/// Reads the deployment environment name from [`ENVIRONMENT_VAR`].
///
/// An unset or empty variable yields `None`.
#[must_use]
pub fn environment_from_env() -> Option<String> {
    env::var(ENVIRONMENT_VAR)
        .ok()
        .filter(|name| !name.is_empty())
}

/// Loads the layered files for `base` using the ambient configuration.
///
/// Boundary convenience over [`load_layered`]: the environment name comes
/// from [`ENVIRONMENT_VAR`] and the diagnostics verbosity from the usual
/// logging variable.
///
/// # Examples
///
/// ```no_run
/// use monoroot::env::load_layered_from_env;
/// use std::path::Path;
///
/// let loaded = load_layered_from_env(Path::new(".env"));
/// println!("loaded {} environment file(s)", loaded.len());
/// ```
pub fn load_layered_from_env(base: &Path) -> Vec<PathBuf> {
    let logger = Logger::new(crate::logging::LogLevel::from_env());
    load_layered(base, environment_from_env().as_deref(), &logger)
}
