//! Image reference extraction
//!
//! Lexical scan of a source data file for the values of quoted `image`
//! fields. The scan is deliberately narrow: it matches the literal token
//! `image:` followed by optional whitespace and a single-quoted string on
//! one line. Double-quoted fields, template literals, and multi-line
//! values are not matched. That narrowness is a documented property of the
//! tool, not an oversight; the data file is written by hand in a fixed
//! style and a full parser would exceed the tool's purpose.

use regex::Regex;

use crate::error::{CheckError, CheckResult};

/// Pattern for single-quoted `image` field values
const IMAGE_FIELD_PATTERN: &str = r"image:\s*'([^']+)'";

/// Extract all image references from source text, in document order.
///
/// Duplicates are kept and no path-syntax validation is performed; whatever
/// was written between the quotes is returned verbatim, without the quotes.
/// Returns an empty vector when the pattern never occurs.
pub fn extract_image_references(content: &str) -> CheckResult<Vec<String>> {
    let pattern = Regex::new(IMAGE_FIELD_PATTERN)
        .map_err(|e| CheckError::Pattern(format!("Invalid reference pattern: {}", e)))?;

    Ok(pattern
        .captures_iter(content)
        .map(|captures| captures[1].to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_in_document_order() {
        let source = "\
const a = { name: 'Old Fashioned', image: '/cocktails/old-fashioned.png' };
const b = { name: 'Mule', image: '/cocktails/mule.png' };
const c = { name: 'Negroni', image: '/cocktails/negroni.png' };
";
        let refs = extract_image_references(source).unwrap();
        assert_eq!(
            refs,
            vec![
                "/cocktails/old-fashioned.png",
                "/cocktails/mule.png",
                "/cocktails/negroni.png"
            ]
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let source = "image: '/a.png' image: '/a.png'";
        let refs = extract_image_references(source).unwrap();
        assert_eq!(refs, vec!["/a.png", "/a.png"]);
    }

    #[test]
    fn test_whitespace_after_colon_is_optional() {
        let source = "image:'/tight.png'\nimage:   '/spaced.png'";
        let refs = extract_image_references(source).unwrap();
        assert_eq!(refs, vec!["/tight.png", "/spaced.png"]);
    }

    #[test]
    fn test_double_quotes_are_not_matched() {
        let source = r#"image: "/cocktails/sour.png""#;
        let refs = extract_image_references(source).unwrap();
        assert!(refs.is_empty());
    }

    #[test]
    fn test_empty_source_yields_no_references() {
        let refs = extract_image_references("").unwrap();
        assert!(refs.is_empty());
    }

    #[test]
    fn test_unrelated_fields_are_ignored() {
        let source = "thumbnail: '/thumbs/a.png'\nimageUrl: '/b.png'";
        let refs = extract_image_references(source).unwrap();
        // `imageUrl:` still contains the token `image` but not `image:`,
        // and `thumbnail:` does not match at all.
        assert!(refs.is_empty());
    }
}
