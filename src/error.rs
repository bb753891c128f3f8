//! Record codec error types

use std::io;

use thiserror::Error;

/// Errors that can occur while reading or writing record fields
///
/// The codec has no failure modes of its own; every variant is a
/// stream-level condition surfaced from the underlying resource.
#[derive(Debug, Error)]
pub enum RecError {
    /// Stream ended inside a fixed-width field
    #[error("unexpected end of stream inside a fixed-width field")]
    UnexpectedEof,
    /// IO error from the underlying stream
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, RecError>;

/// Fold `read_exact`'s EOF kind into the dedicated variant.
pub(crate) fn eof_or_io(err: io::Error) -> RecError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        RecError::UnexpectedEof
    } else {
        RecError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            RecError::UnexpectedEof.to_string(),
            "unexpected end of stream inside a fixed-width field"
        );
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert!(RecError::from(io_err).to_string().starts_with("IO error:"));
    }

    #[test]
    fn test_eof_folding() {
        let eof = io::Error::new(io::ErrorKind::UnexpectedEof, "eof");
        assert!(matches!(eof_or_io(eof), RecError::UnexpectedEof));
        let other = io::Error::new(io::ErrorKind::BrokenPipe, "pipe");
        assert!(matches!(eof_or_io(other), RecError::Io(_)));
    }
}
