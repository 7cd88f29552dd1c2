//! Main entry point for the monoroot CLI.
//!
//! This is the command-line interface for monorepo root discovery.
//! It provides commands for inspecting what the library would do inside
//! the current directory:
//! - `root`: discover and print the root working directory
//! - `resolve`: print a path anchored at the discovered root
//! - `load-env`: load layered `.env` files and list what was loaded

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Pick the effective verbosity (flags beat the environment)
    let log_level = monoroot::init_log_level(cli.verbose, cli.quiet);

    let global = GlobalOptions { log_level };

    // Execute the command
    let result = match cli.command {
        cli::Command::Root(cmd) => cmd.execute(&global),
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::LoadEnv(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
