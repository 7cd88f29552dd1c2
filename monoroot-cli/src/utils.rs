//! Utility functions for CLI operations.

use crate::error::CliError;
use monoroot::path::normalize::expand_tilde;
use monoroot::{discover_root, DiscoveryConfig, LogLevel, RootContext};
use std::env;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Copy)]
pub struct GlobalOptions {
    /// Effective diagnostics verbosity for this invocation.
    pub log_level: LogLevel,
}

/// Run root discovery from the current working directory.
///
/// Every command anchors on the same pass: the working directory is the
/// scan origin and the global flags set the diagnostics verbosity.
pub fn discover(global: &GlobalOptions) -> Result<RootContext, CliError> {
    let cwd = env::current_dir()?;
    let config = DiscoveryConfig::new(cwd).with_log_level(global.log_level);
    discover_root(&config).map_err(CliError::from)
}

/// Normalize an explicit user-supplied path argument.
///
/// Only tilde expansion happens here; the lexical join against the chosen
/// base is the library's job.
pub fn normalize_input(path: &Path) -> Result<PathBuf, CliError> {
    expand_tilde(path).map_err(CliError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_input_plain_path() {
        let path = Path::new("src/index.ts");
        assert_eq!(normalize_input(path).unwrap(), path);
    }

    #[cfg(unix)]
    #[test]
    fn test_normalize_input_tilde() {
        let home = PathBuf::from(env::var_os("HOME").expect("HOME not set in test environment"));
        assert_eq!(
            normalize_input(Path::new("~/project")).unwrap(),
            home.join("project")
        );
    }
}
