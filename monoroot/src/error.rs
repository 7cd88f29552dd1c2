//! Error types for the monoroot library.
//!
//! This module provides the error hierarchy for root discovery and path
//! resolution, using `thiserror` for ergonomic error handling.
//!
//! The hierarchy distinguishes three severities:
//! - Fatal: the current working directory cannot be resolved. Nothing can
//!   be anchored without it, so discovery and resolution stop immediately.
//! - Configuration: a resolver was invoked before a root directory was
//!   published. The message names the exact environment variable to set.
//! - Everything else (unreadable manifests, malformed workspace fields,
//!   unrecognized verbosity values) degrades to a safe default and is only
//!   surfaced through diagnostic logging, never through this type.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a monoroot error.
///
/// # Examples
///
/// ```
/// use monoroot::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(8080)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the monoroot library.
#[derive(Debug, Error)]
pub enum Error {
    /// The process's current working directory could not be resolved.
    ///
    /// This is the one unrecoverable condition: it typically means the
    /// working directory was deleted out from under the process.
    #[error("current working directory could not be resolved: {reason}")]
    CurrentDirUnavailable {
        /// Why resolution failed.
        reason: String,
    },

    /// A root-anchored resolver was invoked with no published root directory.
    ///
    /// Unlike [`Error::CurrentDirUnavailable`] this is recoverable: the
    /// caller can run discovery (or set the named variable) and retry.
    #[error("root working directory is not defined; set the {variable} environment variable to the desired root path")]
    RootUndefined {
        /// The environment variable that would supply the root.
        variable: &'static str,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A package manifest exists but could not be read or parsed.
    ///
    /// Discovery never raises this (unreadable candidates are simply not
    /// matches); it is returned by the explicit manifest loading API.
    #[error("invalid manifest {}: {reason}", path.display())]
    Manifest {
        /// Path to the offending manifest file.
        path: PathBuf,
        /// The reason parsing failed.
        reason: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if this error is the unrecoverable missing-working-directory case.
    ///
    /// # Examples
    ///
    /// ```
    /// use monoroot::Error;
    ///
    /// let err = Error::CurrentDirUnavailable { reason: "gone".to_string() };
    /// assert!(err.is_fatal());
    /// ```
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::CurrentDirUnavailable { .. })
    }

    /// Check if this error indicates a missing root configuration.
    ///
    /// Configuration errors are recoverable: the caller can run discovery
    /// or supply a default base directory and retry.
    ///
    /// # Examples
    ///
    /// ```
    /// use monoroot::{discovery, Error};
    ///
    /// let err = Error::RootUndefined { variable: discovery::ROOT_DIR_VAR };
    /// assert!(err.is_configuration());
    /// ```
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::RootUndefined { .. })
    }
}
