//! Layered environment-file loading.
//!
//! Given a base file path such as `.env`, the loader derives up to four
//! layered candidates from the deployment environment name and loads the
//! ones that exist, most specific first. Parsing and merging of file
//! contents is delegated to `dotenvy`, which never overwrites variables
//! already present in the process environment — so earlier (more
//! specific) files win deterministically.

mod loader;

// Re-export key items
pub use loader::{
    dotenv_candidates, environment_from_env, load_layered, load_layered_from_env, ENVIRONMENT_VAR,
    TEST_ENVIRONMENT,
};
