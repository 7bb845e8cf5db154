//! # Error Handling
//!
//! Centralized error handling for `folder-matrix`, built on `thiserror`.
//!
//! The taxonomy mirrors the failure policy of the pipeline:
//!
//! - **`Config`** errors are fatal and raised before any git command runs
//!   (mutually exclusive options supplied together, no comparison target).
//! - **`GitCommand`** errors are produced by the git plumbing; the pipeline
//!   orchestrator recovers from them by degrading to an empty change set.
//! - **`SortKeyMismatch`** is fatal: mixing numeric and string sort keys
//!   across folders would corrupt the metadata ordering contract, so it is
//!   propagated rather than coerced.
//! - Descriptor read/parse failures (`Io`, `Yaml`) never escape the
//!   metadata resolver; they are logged and the folder is classified as
//!   having no metadata.

use thiserror::Error;

/// Main error type for folder-matrix operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid run configuration, detected before the pipeline starts.
    ///
    /// Includes an optional hint about how to fix the invocation.
    #[error("Configuration error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Config {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A git command exited unsuccessfully or could not be spawned.
    #[error("Git command failed: {command} - {stderr}")]
    GitCommand { command: String, stderr: String },

    /// Metadata sort keys are of incomparable types across folders.
    #[error("Incomparable sort keys: folder {folder}: {detail}")]
    SortKeyMismatch { folder: String, detail: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON serialization error, wrapped from `serde_json::Error`.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
