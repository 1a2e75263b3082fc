//! Error types for domain extraction.
//!
//! Malformed URLs are never errors: every extraction operation degrades to
//! an empty string, an empty list or an absent port. Only misuse of the
//! API surfaces here.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while configuring the extraction pipeline.
#[derive(Error, Debug)]
pub enum DomainError {
    /// No suffix oracle was supplied to a `DomainExtractor`.
    #[error("a suffix oracle must be supplied before building the extractor")]
    MissingSuffixProvider,

    /// The supplied public suffix data could not be parsed.
    #[error("invalid public suffix list: {0}")]
    InvalidSuffixList(String),

    /// The supplied public suffix data contains no rules.
    #[error("public suffix list contains no rules")]
    EmptySuffixList,

    /// A public suffix list file could not be read.
    #[error("failed to read public suffix list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::MissingSuffixProvider.to_string(),
            "a suffix oracle must be supplied before building the extractor"
        );
        assert_eq!(
            DomainError::InvalidSuffixList("bad rule".to_string()).to_string(),
            "invalid public suffix list: bad rule"
        );
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let err = DomainError::Io {
            path: PathBuf::from("/missing/list.dat"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("/missing/list.dat"));
        assert!(err.source().is_some());
    }
}
