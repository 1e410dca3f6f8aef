//! Error types for SSB desktop integration.
//!
//! Install-side failures surface through [`SsbError`]; the uninstall path never
//! raises and reports problems through diagnostics instead (see
//! `integrator::UninstallOutcome`).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for SSB desktop integration.
#[derive(Debug, Error)]
pub enum SsbError {
    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Network errors (remote icon sources)
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    // Icon decode/encode errors
    #[error("Image error: {message}")]
    Image {
        message: String,
        #[source]
        source: Option<image::ImageError>,
    },

    #[error("Unsupported icon source scheme: {scheme} ({url})")]
    UnsupportedIconScheme { scheme: String, url: String },

    #[error("Invalid icon source URL: {url}")]
    InvalidIconUrl { url: String },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for SSB desktop operations.
pub type Result<T> = std::result::Result<T, SsbError>;

// Conversion implementations for common error types

impl From<std::io::Error> for SsbError {
    fn from(err: std::io::Error) -> Self {
        SsbError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<reqwest::Error> for SsbError {
    fn from(err: reqwest::Error) -> Self {
        SsbError::Network {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<image::ImageError> for SsbError {
    fn from(err: image::ImageError) -> Self {
        SsbError::Image {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl SsbError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        SsbError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SsbError::Config {
            message: "no home directory".into(),
        };
        assert_eq!(err.to_string(), "Configuration error: no home directory");
    }

    #[test]
    fn test_io_with_path_keeps_path() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = SsbError::io_with_path(io, "/tmp/ssb");
        match err {
            SsbError::Io { path, .. } => assert_eq!(path, Some(PathBuf::from("/tmp/ssb"))),
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
