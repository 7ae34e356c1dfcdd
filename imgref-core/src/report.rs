//! Check report model and console rendering
//!
//! One report per run: the total number of extracted references and the
//! ordered list of problematic ones. The two verification modes share the
//! shape and differ only in wording; in exact-case mode a missing file and
//! a case-mismatched one are deliberately not distinguished, the checker
//! cannot tell them apart without a second case-folded pass and the fix is
//! the same either way.

use colored::Colorize;
use serde::Serialize;

use crate::config::CheckMode;

/// Outcome of a single check run
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceReport {
    /// Verification strategy that produced this report
    pub mode:     CheckMode,
    /// Total number of references extracted from the source
    pub total:    usize,
    /// Problematic references, in extraction order
    pub problems: Vec<String>,
}

impl ReferenceReport {
    /// Create a report from a run's accumulated results
    pub fn new(mode: CheckMode, total: usize, problems: Vec<String>) -> Self {
        Self {
            mode,
            total,
            problems,
        }
    }

    /// Whether every reference checked out
    pub fn is_success(&self) -> bool {
        self.problems.is_empty()
    }

    /// Header printed above the problem list
    pub fn problem_header(&self) -> &'static str {
        match self.mode {
            CheckMode::Existence => "Missing images:",
            CheckMode::ExactCase => "Case mismatch or missing images:",
        }
    }

    /// Line printed when no problems were found
    pub fn success_line(&self) -> &'static str {
        match self.mode {
            CheckMode::Existence => "All referenced images exist.",
            CheckMode::ExactCase => "All referenced images exist with correct case.",
        }
    }

    /// Print the human-readable report to stdout.
    ///
    /// Exit status is not derived from the outcome; callers that need a
    /// machine-checkable signal should use the JSON output instead.
    pub fn print_human(&self) {
        println!(
            "{} Found {} image references",
            "🔍".bright_blue(),
            self.total
        );

        if self.is_success() {
            println!("{} {}", "✅".bright_green(), self.success_line());
        } else {
            println!("{} {}", "❌".bright_red(), self.problem_header());
            for problem in &self.problems {
                println!("  - {}", problem);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_with_empty_problem_list() {
        let report = ReferenceReport::new(CheckMode::Existence, 3, vec![]);
        assert!(report.is_success());
        assert_eq!(report.success_line(), "All referenced images exist.");
    }

    #[test]
    fn test_headers_follow_mode() {
        let plain = ReferenceReport::new(CheckMode::Existence, 1, vec!["/a.png".to_string()]);
        assert!(!plain.is_success());
        assert_eq!(plain.problem_header(), "Missing images:");

        let exact = ReferenceReport::new(CheckMode::ExactCase, 1, vec!["/a.png".to_string()]);
        assert_eq!(
            exact.problem_header(),
            "Case mismatch or missing images:"
        );
        assert_eq!(
            exact.success_line(),
            "All referenced images exist with correct case."
        );
    }

    #[test]
    fn test_json_shape() {
        let report = ReferenceReport::new(
            CheckMode::ExactCase,
            2,
            vec!["/cocktails/B.png".to_string()],
        );

        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["mode"], "exact-case");
        assert_eq!(json["total"], 2);
        assert_eq!(json["problems"][0], "/cocktails/B.png");
    }
}
