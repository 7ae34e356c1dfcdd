//! Check run pipeline
//!
//! Read the source once, extract every reference, check each one against
//! the asset root, collect the failures. Strictly sequential; each
//! reference is checked exactly once and a failing reference never stops
//! the run.

use std::fs;

use colored::Colorize;

use crate::{
    checker::ExistenceChecker,
    config::{CheckConfig, CheckMode},
    error::{CheckError, CheckResult},
    extract::extract_image_references,
    report::ReferenceReport,
};

/// Run a full check and produce the report.
///
/// The only fatal failure is reading the source file; a missing or
/// unreadable asset root just classifies every reference as a problem.
pub fn run_check(config: &CheckConfig) -> CheckResult<ReferenceReport> {
    let content = fs::read_to_string(&config.source).map_err(|e| {
        CheckError::Source(format!(
            "Failed to read {}: {}",
            config.source.display(),
            e
        ))
    })?;

    let references = extract_image_references(&content)?;
    let checker = ExistenceChecker::new(&config.root);

    let mut problems = Vec::new();
    for reference in &references {
        let valid = match config.mode {
            CheckMode::Existence => checker.exists(reference),
            CheckMode::ExactCase => checker.exists_exact_case(reference),
        };

        if config.verbose {
            let marker = if valid {
                "✅".bright_green()
            } else {
                "❌".bright_red()
            };
            println!("  {} {}", marker, reference);
        }

        if !valid {
            problems.push(reference.clone());
        }
    }

    Ok(ReferenceReport::new(
        config.mode,
        references.len(),
        problems,
    ))
}

#[cfg(test)]
mod tests {
    use std::{fs::File, io::Write};

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_missing_source_is_fatal() {
        let config = CheckConfig::new("/no/such/recipes.ts", "/no/such/public");
        let err = run_check(&config).unwrap_err();
        assert!(matches!(err, CheckError::Source(_)));
    }

    #[test]
    fn test_problems_keep_extraction_order() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("recipes.ts");
        let mut file = File::create(&source).unwrap();
        writeln!(file, "image: '/z.png'").unwrap();
        writeln!(file, "image: '/a.png'").unwrap();

        let config = CheckConfig::new(&source, dir.path().join("public"));
        let report = run_check(&config).unwrap();

        assert_eq!(report.total, 2);
        assert_eq!(report.problems, vec!["/z.png", "/a.png"]);
    }
}
