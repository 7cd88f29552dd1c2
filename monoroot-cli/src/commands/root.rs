//! Command to discover and print the root working directory.

use crate::error::CliError;
use crate::utils::{discover, GlobalOptions};
use clap::Args;
use monoroot::ROOT_DIR_VAR;

/// Discover the monorepo root for the current directory and print it.
#[derive(Args)]
pub struct RootCommand {
    /// Print a shell export line instead of the bare path
    #[arg(long)]
    pub export: bool,
}

impl RootCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let context = discover(global)?;

        if self.export {
            println!("export {ROOT_DIR_VAR}={}", context.root().display());
        } else {
            println!("{}", context.root().display());
        }
        Ok(())
    }
}
