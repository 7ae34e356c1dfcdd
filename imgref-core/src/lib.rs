//! imgref-core - Image reference verification for content projects
//!
//! This library provides the core functionality for validating the image
//! paths referenced by a content data file against the assets that actually
//! exist on disk. It is the single source of truth for the `imgref` CLI.
//!
//! # Architecture
//!
//! A run is a linear pipeline:
//!
//! - **Extraction**: a lexical scan of the source text for `image: '...'`
//!   fields, preserving document order ([`extract_image_references`])
//! - **Checking**: each reference is resolved against the asset root and
//!   verified, either for plain existence or for a byte-for-byte
//!   case-sensitive match of every path segment ([`ExistenceChecker`])
//! - **Reporting**: totals and problem references are collected into a
//!   [`ReferenceReport`] and printed once at the end
//!
//! The case-sensitive variant exists because a plain existence check
//! silently accepts wrong-case references on case-insensitive filesystems
//! (macOS, Windows), which then break on case-sensitive deployment targets.
//!
//! # Design Principles
//!
//! - **Read-only**: the filesystem is never written to
//! - **Fail-soft per reference**: a filesystem error while checking one
//!   reference classifies it as a problem and never aborts the run; only a
//!   failure to read the source file itself is fatal
//! - **Lexically narrow**: extraction matches single-quoted scalar fields
//!   only, by design; it is not a parser for the data format

#![forbid(unsafe_code)]

// Core modules
pub mod checker;
pub mod config;
pub mod error;
pub mod extract;
pub mod report;
pub mod run;

// Public API
pub use checker::ExistenceChecker;
pub use config::{CheckConfig, CheckMode};
pub use error::{CheckError, CheckResult};
pub use extract::extract_image_references;
pub use report::ReferenceReport;
pub use run::run_check;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_defined() {
        assert!(!VERSION.is_empty(), "Version should be defined");
    }
}
