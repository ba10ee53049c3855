//! Error types for tagflow.
//!
//! - [`AppError`] - top-level error wrapping every domain failure
//!   - [`SourceError`] - post provider failures (missing file, IO, bad JSON)
//!   - [`ConfigError`] - config file read/parse failures and invalid values
//!   - [`LayoutError`] - flow layout built from invalid spacing
//!   - `std::io::Error` - terminal failures
//!
//! Everything here is fatal at startup. Once the TUI runs, nothing can fail
//! except the terminal itself.

use crate::config::ConfigError;
use crate::flow::LayoutError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Posts could not be loaded.
    #[error("Failed to load posts: {0}")]
    Source(#[from] SourceError),

    /// Configuration could not be resolved.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Flow layout settings are invalid.
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors raised by post providers.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The posts file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// The posts file exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The posts file is not a JSON array of posts.
    #[error("Invalid posts JSON in {path}: {source}")]
    Parse {
        /// Path with invalid content.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_names_path() {
        let err = SourceError::FileNotFound {
            path: PathBuf::from("/tmp/missing.json"),
        };
        assert!(err.to_string().contains("/tmp/missing.json"));
    }

    #[test]
    fn source_error_converts_to_app_error() {
        let err: AppError = SourceError::FileNotFound {
            path: PathBuf::from("x.json"),
        }
        .into();
        assert!(matches!(err, AppError::Source(_)));
        assert!(err.to_string().starts_with("Failed to load posts"));
    }

    #[test]
    fn layout_error_converts_to_app_error() {
        let err: AppError = LayoutError::InvalidSpacing(-1.0).into();
        assert!(matches!(err, AppError::Layout(_)));
    }

    #[test]
    fn io_error_converts_to_terminal_error() {
        let err: AppError = std::io::Error::other("broken pipe").into();
        assert!(matches!(err, AppError::Terminal(_)));
    }
}
