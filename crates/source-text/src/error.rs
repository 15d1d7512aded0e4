//! Error values for source diagnostics and loading.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A diagnostic value carrying a message and the 1-based coordinates it
/// points at.
///
/// This is not a failure of this crate: a [`Readable`] manufactures these
/// on request and the caller decides whether to raise, collect, or print
/// them. The message is carried verbatim and never inspected.
///
/// [`Readable`]: crate::Readable
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message} at {line}:{column}")]
pub struct PositionedError {
    /// Human-readable description, untouched by this crate.
    pub message: String,
    /// Line the diagnostic points at (1-based).
    pub line: usize,
    /// Column the diagnostic points at (1-based).
    pub column: usize,
}

/// Failures raised by the filesystem loader ([`FileSource::read`]).
///
/// The source abstraction itself never performs IO; these surface only at
/// the construction boundary, before any [`Readable`] exists.
///
/// [`FileSource::read`]: crate::FileSource::read
/// [`Readable`]: crate::Readable
#[derive(Debug, Error)]
pub enum SourceError {
    /// The path does not exist.
    #[error("file \"{}\" not found", .path.display())]
    NotFound { path: PathBuf },

    /// The path exists but its bytes could not be obtained as text.
    #[error("can not read the file \"{}\": {source}", .path.display())]
    NotReadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_positioned_error_displays_message_and_coordinates() {
        let error = PositionedError {
            message: "unexpected token".to_string(),
            line: 3,
            column: 14,
        };
        assert_eq!(error.to_string(), "unexpected token at 3:14");
    }

    #[test]
    fn test_positioned_error_is_a_std_error() {
        let error = PositionedError {
            message: "boom".to_string(),
            line: 1,
            column: 1,
        };
        let boxed: Box<dyn std::error::Error> = Box::new(error);
        assert_eq!(boxed.to_string(), "boom at 1:1");
    }

    #[test]
    fn test_positioned_error_serialization_round_trip() {
        let error = PositionedError {
            message: "missing delimiter".to_string(),
            line: 12,
            column: 40,
        };
        let json = serde_json::to_string(&error).unwrap();
        let back: PositionedError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, back);
    }

    #[test]
    fn test_not_found_names_the_path() {
        let error = SourceError::NotFound {
            path: PathBuf::from("/tmp/schema.gql"),
        };
        assert_eq!(error.to_string(), "file \"/tmp/schema.gql\" not found");
    }

    #[test]
    fn test_not_readable_chains_the_io_error() {
        let error = SourceError::NotReadable {
            path: PathBuf::from("/tmp/locked.gql"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert_eq!(
            error.to_string(),
            "can not read the file \"/tmp/locked.gql\": permission denied"
        );
        assert!(error.source().is_some());
    }
}
