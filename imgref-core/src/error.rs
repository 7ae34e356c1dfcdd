//! Error types for image reference checking
//!
//! Only two things can fail a run outright: reading the source file and
//! compiling the reference pattern. Every per-reference filesystem failure
//! (missing file, unreadable directory, non-directory path segment) is
//! classified as a problem for that one reference and never surfaces here.

use thiserror::Error;

/// Errors that abort a check run
#[derive(Debug, Error)]
pub enum CheckError {
    /// The source data file could not be opened or decoded
    #[error("Source read error: {0}")]
    Source(String),

    /// The reference extraction pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(String),
}

/// Result type for check operations
pub type CheckResult<T> = Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CheckError::Source("no such file".to_string());
        assert_eq!(err.to_string(), "Source read error: no such file");

        let err = CheckError::Pattern("unbalanced group".to_string());
        assert_eq!(err.to_string(), "Pattern error: unbalanced group");
    }
}
