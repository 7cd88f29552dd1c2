//! Diagnostic logging for root discovery.
//!
//! This module provides a simple stderr-based logging system with three
//! verbosity tiers. Logging is purely diagnostic: it never changes what
//! discovery or resolution return.

use std::env;
use std::fmt;

/// Environment variable controlling discovery diagnostics verbosity.
///
/// Recognized values are `none`, `info`, and `verbose` (case-insensitive).
/// An unrecognized value is reported on stderr and treated as `none`.
pub const LOG_LEVEL_VAR: &str = "MONOROOT_LOG_LEVEL";

/// Verbosity tier for discovery diagnostics.
///
/// Levels are ordered from least verbose (`None`) to most verbose
/// (`Verbose`).
///
/// # Examples
///
/// ```
/// use monoroot::LogLevel;
///
/// assert!(LogLevel::None < LogLevel::Info);
/// assert!(LogLevel::Info < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all diagnostics.
    #[default]
    None,
    /// Emit the final decision narrative only.
    Info,
    /// Emit the decision narrative plus raw intermediate lists.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Info => write!(f, "info"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "none", "info", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use monoroot::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("none").unwrap(), LogLevel::None);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("bogus").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "info" => Ok(Self::Info),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// Reads the log level from [`LOG_LEVEL_VAR`].
    ///
    /// An unset variable yields [`LogLevel::None`]. An unrecognized value
    /// is reported on stderr and also yields [`LogLevel::None`]; it never
    /// fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use monoroot::LogLevel;
    ///
    /// let level = LogLevel::from_env();
    /// assert!(level <= LogLevel::Verbose);
    /// ```
    #[must_use]
    pub fn from_env() -> Self {
        match env::var(LOG_LEVEL_VAR) {
            Ok(raw) => Self::parse(&raw).unwrap_or_else(|_| {
                eprintln!(
                    "invalid value for environment variable {LOG_LEVEL_VAR}: {raw}; defaulting to none"
                );
                Self::None
            }),
            Err(_) => Self::None,
        }
    }
}

/// A stderr logger gated by a [`LogLevel`].
///
/// # Examples
///
/// ```
/// use monoroot::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Info);
/// logger.info("decision made");
/// logger.verbose("this will not be printed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Logs a decision-narrative message (printed at `info` and above).
    pub fn info(&self, message: &str) {
        if self.level >= LogLevel::Info {
            eprintln!("monoroot: {message}");
        }
    }

    /// Logs a warning about a soft failure (printed at `info` and above).
    pub fn warn(&self, message: &str) {
        if self.level >= LogLevel::Info {
            eprintln!("monoroot: warning: {message}");
        }
    }

    /// Logs an intermediate-state message (printed only at `verbose`).
    pub fn verbose(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("monoroot: {message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::None)
    }
}

/// Picks the effective log level from CLI flags and the environment.
///
/// The priority order is:
/// 1. CLI flags (`verbose`/`quiet`)
/// 2. The [`LOG_LEVEL_VAR`] environment variable
/// 3. Default (`None`)
///
/// If both `verbose` and `quiet` are set, `verbose` takes precedence.
///
/// # Examples
///
/// ```
/// use monoroot::{init_log_level, LogLevel};
///
/// assert_eq!(init_log_level(true, false), LogLevel::Verbose);
/// assert_eq!(init_log_level(false, true), LogLevel::None);
/// ```
#[must_use]
pub fn init_log_level(verbose: bool, quiet: bool) -> LogLevel {
    if verbose {
        return LogLevel::Verbose;
    }
    if quiet {
        return LogLevel::None;
    }
    LogLevel::from_env()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::None < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Verbose);
        assert!(LogLevel::None < LogLevel::Verbose);
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::None), "none");
        assert_eq!(format!("{}", LogLevel::Info), "info");
        assert_eq!(format!("{}", LogLevel::Verbose), "verbose");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("none").unwrap(), LogLevel::None);
        assert_eq!(LogLevel::parse("info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::parse("verbose").unwrap(), LogLevel::Verbose);

        // Case insensitive
        assert_eq!(LogLevel::parse("NONE").unwrap(), LogLevel::None);
        assert_eq!(LogLevel::parse("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);

        // Invalid
        assert!(LogLevel::parse("bogus").is_err());
        assert!(LogLevel::parse("").is_err());
    }

    #[test]
    fn test_log_level_default() {
        assert_eq!(LogLevel::default(), LogLevel::None);
    }

    #[test]
    fn test_logger_level() {
        let logger = Logger::new(LogLevel::Verbose);
        assert_eq!(logger.level(), LogLevel::Verbose);
        assert_eq!(Logger::default().level(), LogLevel::None);
    }

    #[test]
    #[serial]
    fn test_from_env_unset_defaults_to_none() {
        let saved = env::var(LOG_LEVEL_VAR).ok();
        env::remove_var(LOG_LEVEL_VAR);

        assert_eq!(LogLevel::from_env(), LogLevel::None);

        if let Some(val) = saved {
            env::set_var(LOG_LEVEL_VAR, val);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_reads_value() {
        let saved = env::var(LOG_LEVEL_VAR).ok();

        env::set_var(LOG_LEVEL_VAR, "verbose");
        assert_eq!(LogLevel::from_env(), LogLevel::Verbose);

        env::set_var(LOG_LEVEL_VAR, "info");
        assert_eq!(LogLevel::from_env(), LogLevel::Info);

        match saved {
            Some(val) => env::set_var(LOG_LEVEL_VAR, val),
            None => env::remove_var(LOG_LEVEL_VAR),
        }
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_degrades_to_none() {
        let saved = env::var(LOG_LEVEL_VAR).ok();

        env::set_var(LOG_LEVEL_VAR, "bogus");
        assert_eq!(LogLevel::from_env(), LogLevel::None);

        match saved {
            Some(val) => env::set_var(LOG_LEVEL_VAR, val),
            None => env::remove_var(LOG_LEVEL_VAR),
        }
    }

    #[test]
    #[serial]
    fn test_init_log_level_flag_precedence() {
        let saved = env::var(LOG_LEVEL_VAR).ok();
        env::set_var(LOG_LEVEL_VAR, "info");

        // CLI flags override the environment
        assert_eq!(init_log_level(true, false), LogLevel::Verbose);
        assert_eq!(init_log_level(false, true), LogLevel::None);
        assert_eq!(init_log_level(true, true), LogLevel::Verbose);

        // No flags: environment wins
        assert_eq!(init_log_level(false, false), LogLevel::Info);

        match saved {
            Some(val) => env::set_var(LOG_LEVEL_VAR, val),
            None => env::remove_var(LOG_LEVEL_VAR),
        }
    }
}
