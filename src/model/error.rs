//! Error types for the tripline front end.
//!
//! The timeline core has no error paths: every edit operation degrades to a
//! no-op on invalid input and reports that through `EditOutcome`. The types
//! here cover the impure shell only - reading a snapshot, loading config,
//! initializing logging and driving the terminal.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from the binary's main path
//!   - [`InputError`] - Snapshot reading failures (file not found, IO, bad JSON)
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing subscriber setup
//!   - `std::io::Error` - Terminal/TUI failures

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all shell failure modes.
///
/// Domain-specific errors convert via `From`, so shell code composes with `?`.
/// All variants are fatal to the binary: the timeline cannot be shown
/// without a snapshot and a working terminal.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the itinerary snapshot.
    #[error("Failed to read itinerary: {0}")]
    Input(#[from] InputError),

    /// Configuration file exists but could not be used.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading an itinerary snapshot.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use tripline::model::error::InputError;
///
/// let err = InputError::FileNotFound {
///     path: PathBuf::from("/tmp/missing.json"),
/// };
/// assert!(err.to_string().contains("/tmp/missing.json"));
/// ```
#[derive(Debug, Error)]
pub enum InputError {
    /// The given snapshot file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// The snapshot is not a valid itinerary document.
    ///
    /// Structural validity beyond the JSON shape (unique ids, sentinel kinds)
    /// is the caller's responsibility and is not checked.
    #[error("Invalid itinerary JSON from {origin}: {message}")]
    InvalidJson {
        /// File path or `<stdin>`.
        origin: String,
        /// Parser message from `serde_json`.
        message: String,
    },

    /// `-` was given but stdin is an interactive terminal.
    #[error("No itinerary piped to stdin")]
    NoInput,

    /// Generic I/O error reading from the input source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
