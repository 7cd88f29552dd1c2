//! Path handling anchored at a discovered root.
//!
//! This module provides the two halves of path resolution:
//!
//! - [`normalize`]: purely lexical path composition. Relative inputs are
//!   joined onto a base, `.` segments are elided, `..` segments pop the
//!   preceding segment (clamped at the filesystem root), and absolute
//!   inputs replace the base entirely. No filesystem access occurs.
//! - [`resolver`]: the [`RootContext`] handle produced by discovery, with
//!   `resolve_root` / `resolve_workspace` anchoring methods, plus
//!   environment-backed free functions for consumers without a handle.
//!
//! # Examples
//!
//! ```
//! use monoroot::path::RootContext;
//! use std::path::{Path, PathBuf};
//!
//! let context = RootContext::new("/repo", "/repo/packages/app");
//! assert_eq!(
//!     context.resolve_root("src/index.ts"),
//!     PathBuf::from("/repo/src/index.ts")
//! );
//! assert_eq!(context.resolve_root(""), Path::new("/repo"));
//! ```

pub mod normalize;
pub mod resolver;

// Re-export key types
pub use resolver::{resolve_root_path, resolve_workspace_path, RootContext};
