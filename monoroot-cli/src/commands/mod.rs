//! CLI command implementations.
//!
//! Each command is a clap `Args` struct with an `execute` method taking
//! the shared global options.

mod load_env;
mod resolve;
mod root;

pub use load_env::LoadEnvCommand;
pub use resolve::ResolveCommand;
pub use root::RootCommand;
