#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # monoroot
//!
//! A library for discovering a monorepo's root working directory and
//! resolving paths against it.
//!
//! Discovery scans the ancestors of the current working directory for a
//! `package.json` declaring a non-empty workspace member list, picks
//! exactly one root (falling back to the working directory itself), and
//! can publish the result into the process environment for other
//! consumers. Resolution is purely lexical path composition against the
//! chosen root or the working directory.
//!
//! ## Core Types
//!
//! - [`DiscoveryConfig`] and [`discover_root`]: the root discovery pass
//! - [`RootContext`]: the resolved root/workspace pair with anchoring methods
//! - [`PackageManifest`] and [`WorkspaceManifest`]: manifest classification
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: discovery diagnostics
//!
//! ## Examples
//!
//! ```
//! use monoroot::path::RootContext;
//! use std::path::PathBuf;
//!
//! let context = RootContext::new("/repo", "/repo/packages/app");
//! assert_eq!(
//!     context.resolve_root("src/index.ts"),
//!     PathBuf::from("/repo/src/index.ts")
//! );
//! assert_eq!(
//!     context.resolve_workspace("../lib"),
//!     PathBuf::from("/repo/packages/lib")
//! );
//! ```
//!
//! A process that wants the reference startup behavior runs discovery
//! once and publishes the result:
//!
//! ```no_run
//! let context = monoroot::discovery::init_from_env()?;
//! println!("root: {}", context.root().display());
//! # Ok::<(), monoroot::Error>(())
//! ```

pub mod discovery;
pub mod env;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod path;

// Re-export key types at crate root for convenience
pub use discovery::{discover_root, DiscoveryConfig, DEPENDENCY_DIR, ROOT_DIR_VAR};
pub use error::{Error, Result};
pub use logging::{init_log_level, LogLevel, Logger, LOG_LEVEL_VAR};
pub use manifest::{PackageManifest, WorkspaceManifest, Workspaces, MANIFEST_FILENAME};
pub use path::{resolve_root_path, resolve_workspace_path, RootContext};
