//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{LoadEnvCommand, ResolveCommand, RootCommand};
use clap::{Parser, Subcommand};

/// Command-line tool for discovering monorepo roots.
#[derive(Parser)]
#[command(name = "monoroot")]
#[command(version, about = "Discover monorepo roots and resolve root-relative paths", long_about = None)]
pub struct Cli {
    /// Enable verbose discovery diagnostics
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress discovery diagnostics
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Discover and print the root working directory
    Root(RootCommand),

    /// Print a path anchored at the discovered root
    Resolve(ResolveCommand),

    /// Load layered .env files into the environment
    #[command(name = "load-env")]
    LoadEnv(LoadEnvCommand),
}
