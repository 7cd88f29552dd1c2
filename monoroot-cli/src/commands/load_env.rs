//! Command to load layered environment files.

use crate::error::CliError;
use crate::utils::{normalize_input, GlobalOptions};
use clap::Args;
use monoroot::env::load_layered;
use monoroot::Logger;
use std::path::PathBuf;

/// Load layered .env files for a base path and list what was loaded.
///
/// Candidates are derived from the deployment environment name
/// (`<base>.<env>.local`, `<base>.<env>`, `<base>.local`, `<base>`) and
/// loaded most specific first; files that are missing are skipped.
#[derive(Args)]
pub struct LoadEnvCommand {
    /// Base environment file path
    #[arg(value_name = "BASE", default_value = ".env")]
    pub base: PathBuf,

    /// Deployment environment name selecting the extra layers
    #[arg(long, value_name = "NAME", env = "MONOROOT_ENV")]
    pub environment: Option<String>,
}

impl LoadEnvCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let base = normalize_input(&self.base)?;
        let logger = Logger::new(global.log_level);

        let loaded = load_layered(&base, self.environment.as_deref(), &logger);

        if loaded.is_empty() {
            println!("no environment files found for {}", base.display());
        } else {
            for file in loaded {
                println!("loaded {}", file.display());
            }
        }
        Ok(())
    }
}
