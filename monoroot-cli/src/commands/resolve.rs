//! Command to resolve a path against the discovered root.

use crate::error::CliError;
use crate::utils::{discover, normalize_input, GlobalOptions};
use clap::Args;
use std::path::{Path, PathBuf};

/// Print a path anchored at the discovered root working directory.
#[derive(Args)]
pub struct ResolveCommand {
    /// Path to resolve (omit to print the base directory itself)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Anchor at the current working directory instead of the root
    #[arg(long)]
    pub workspace: bool,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let context = discover(global)?;
        let input = normalize_input(self.path.as_deref().unwrap_or(Path::new("")))?;

        let resolved = if self.workspace {
            context.resolve_workspace(&input)
        } else {
            context.resolve_root(&input)
        };

        println!("{}", resolved.display());
        Ok(())
    }
}
