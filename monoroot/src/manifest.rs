//! Package manifest parsing and workspace classification.
//!
//! A directory is a workspace root candidate when its `package.json`
//! declares a non-empty list of member-package globs. Both shapes in the
//! wild are accepted:
//!
//! ```json
//! { "workspaces": ["packages/*"] }
//! { "workspaces": { "packages": ["packages/*"] } }
//! ```
//!
//! Classification is deliberately lossy: a candidate that is unreadable,
//! unparseable, or simply not a workspace manifest classifies as `None`.
//! Discovery filters on that option instead of suppressing exceptions.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Canonical package manifest filename.
pub const MANIFEST_FILENAME: &str = "package.json";

/// The subset of `package.json` this library cares about.
///
/// Unknown fields are ignored; only the workspace declaration matters for
/// root discovery.
///
/// # Examples
///
/// ```
/// use monoroot::PackageManifest;
///
/// let manifest = PackageManifest::from_str(r#"{"workspaces": ["packages/*"]}"#).unwrap();
/// assert!(manifest.declares_workspace());
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    /// Package name, if declared.
    #[serde(default)]
    pub name: Option<String>,
    /// Package version, if declared.
    #[serde(default)]
    pub version: Option<String>,
    /// Workspace member declaration, if present.
    #[serde(default)]
    pub workspaces: Option<Workspaces>,
}

/// The `workspaces` field of a package manifest.
///
/// npm and yarn accept either a bare array of member globs or an object
/// wrapping the same list under `packages`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Workspaces {
    /// Bare array form: `"workspaces": ["packages/*"]`.
    Members(Vec<String>),
    /// Object form: `"workspaces": {"packages": ["packages/*"]}`.
    Detailed {
        /// Member-package location globs.
        #[serde(default)]
        packages: Vec<String>,
    },
}

impl Workspaces {
    /// Returns the declared member globs, regardless of declaration shape.
    #[must_use]
    pub fn members(&self) -> &[String] {
        match self {
            Self::Members(members) => members,
            Self::Detailed { packages } => packages,
        }
    }
}

impl PackageManifest {
    /// Parses a manifest from raw JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Manifest`] if the text is not valid JSON for a
    /// package manifest.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).map_err(|e| Error::Manifest {
            path: PathBuf::from(MANIFEST_FILENAME),
            reason: e.to_string(),
        })
    }

    /// Reads and parses a manifest file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Manifest`] if the file cannot be read or does not
    /// contain valid manifest JSON.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::Manifest {
            path: path.to_path_buf(),
            reason: format!("failed to read manifest: {e}"),
        })?;
        serde_json::from_str(&contents).map_err(|e| Error::Manifest {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Returns the workspace member globs when the declaration is non-empty.
    #[must_use]
    pub fn workspace_members(&self) -> Option<&[String]> {
        match &self.workspaces {
            Some(workspaces) if !workspaces.members().is_empty() => Some(workspaces.members()),
            _ => None,
        }
    }

    /// Whether this manifest marks its directory as a workspace root.
    #[must_use]
    pub fn declares_workspace(&self) -> bool {
        self.workspace_members().is_some()
    }
}

/// A manifest that exists on disk and declares a non-empty workspace.
#[derive(Debug, Clone)]
pub struct WorkspaceManifest {
    /// Path of the manifest file.
    pub path: PathBuf,
    /// Declared member-package location globs.
    pub members: Vec<String>,
}

impl WorkspaceManifest {
    /// The directory containing this manifest — the workspace root it marks.
    #[must_use]
    pub fn root_dir(&self) -> &Path {
        // Manifest paths always name a file inside a directory.
        self.path.parent().unwrap_or(&self.path)
    }
}

/// Classifies a manifest candidate path.
///
/// Returns `Some` only when the file exists, parses as manifest JSON, and
/// declares a non-empty workspace member list. Every other outcome
/// (missing file, read failure, malformed JSON, absent or empty
/// `workspaces` field) returns `None`.
///
/// # Examples
///
/// ```no_run
/// use monoroot::manifest::classify;
/// use std::path::Path;
///
/// if let Some(manifest) = classify(Path::new("/repo/package.json")) {
///     println!("workspace root: {}", manifest.root_dir().display());
/// }
/// ```
#[must_use]
pub fn classify(path: &Path) -> Option<WorkspaceManifest> {
    let manifest = PackageManifest::from_path(path).ok()?;
    let members = manifest.workspace_members()?;
    Some(WorkspaceManifest {
        path: path.to_path_buf(),
        members: members.to_vec(),
    })
}
