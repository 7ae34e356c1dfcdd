//! Reference existence checking
//!
//! Two verification strategies over the same resolution rule:
//!
//! - [`ExistenceChecker::exists`] asks the filesystem whether anything is
//!   at the resolved path. On case-insensitive filesystems this accepts a
//!   reference whose casing differs from the on-disk name.
//! - [`ExistenceChecker::exists_exact_case`] walks the reference segment by
//!   segment, requiring each one to appear verbatim in the listing of the
//!   directory above it. This catches wrong-case references even when the
//!   host filesystem would resolve them.
//!
//! Neither strategy returns an error: any filesystem failure along the way
//! classifies the reference as missing/invalid and the caller moves on to
//! the next reference.

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

/// Checks extracted references against an asset root directory
#[derive(Debug, Clone)]
pub struct ExistenceChecker {
    root: PathBuf,
}

impl ExistenceChecker {
    /// Create a checker rooted at the given asset directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The asset root this checker resolves references against
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a reference to an on-disk path.
    ///
    /// Strips exactly one leading `/` (references are written site-absolute,
    /// e.g. `/cocktails/mule.png`) and joins the remainder onto the root. No
    /// `.` or `..` normalization beyond what `Path::join` performs.
    pub fn resolve(&self, reference: &str) -> PathBuf {
        let relative = reference.strip_prefix('/').unwrap_or(reference);
        self.root.join(relative)
    }

    /// Plain existence check.
    ///
    /// A stat failure of any kind reads as "does not exist". On a
    /// case-insensitive filesystem this reports `true` for a reference that
    /// exists only under a different case; use
    /// [`exists_exact_case`](Self::exists_exact_case) to catch those.
    pub fn exists(&self, reference: &str) -> bool {
        self.resolve(reference).exists()
    }

    /// Existence check with byte-for-byte case verification.
    ///
    /// Splits the stripped reference on `/` and descends from the root one
    /// segment at a time, requiring the segment to be present verbatim in
    /// the immediate entries of the current directory. Stops at the first
    /// segment that is absent, case-folded, or unreachable (a prior segment
    /// resolved to a non-directory, or the listing failed).
    ///
    /// Listings are re-read for every reference; with the expected input
    /// sizes a per-directory cache has not been worth adding.
    pub fn exists_exact_case(&self, reference: &str) -> bool {
        let relative = reference.strip_prefix('/').unwrap_or(reference);
        let mut current = self.root.clone();

        for segment in relative.split('/') {
            if !directory_contains(&current, segment) {
                return false;
            }
            current.push(segment);
        }

        true
    }
}

/// Whether `dir` has an immediate entry named exactly `name`.
///
/// Exact `OsStr` equality, no case folding. An unlistable `dir` is treated
/// as not containing anything.
fn directory_contains(dir: &Path, name: &str) -> bool {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return false,
    };

    for entry in entries.flatten() {
        if entry.file_name() == OsStr::new(name) {
            return true;
        }
    }

    false
}
