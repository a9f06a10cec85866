//! Pattern explainer: breaks a regex into human-readable parts.
//!
//! Explanation is total over every input string. Nothing here compiles or
//! runs the pattern; see [`crate::tester`] for that.

pub mod scanner;
pub mod summary;
pub mod tables;

use serde::Serialize;

pub use scanner::Scanner;
pub use summary::summarize;

/// One classified span of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplanationPart {
    pub component: String,
    pub explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl ExplanationPart {
    pub fn new(component: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            explanation: explanation.into(),
            example: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternExplanation {
    /// `None` only when no pattern was supplied at all.
    pub pattern: Option<String>,
    pub parts: Vec<ExplanationPart>,
    pub summary: String,
}

/// Explain `pattern`. An absent pattern yields no parts and an empty summary.
pub fn explain<'a>(pattern: impl Into<Option<&'a str>>) -> PatternExplanation {
    let Some(pattern) = pattern.into() else {
        return PatternExplanation {
            pattern: None,
            parts: Vec::new(),
            summary: String::new(),
        };
    };

    let parts = Scanner::new(pattern).scan();
    let summary = if parts.is_empty() {
        String::new()
    } else {
        summarize(&parts)
    };

    PatternExplanation {
        pattern: Some(pattern.to_string()),
        parts,
        summary,
    }
}

/// Summary sentence only.
pub fn quick_summary<'a>(pattern: impl Into<Option<&'a str>>) -> String {
    explain(pattern).summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_pattern() {
        let e = explain(None);
        assert!(e.pattern.is_none());
        assert!(e.parts.is_empty());
        assert!(e.summary.is_empty());
    }

    #[test]
    fn empty_pattern() {
        let e = explain("");
        assert_eq!(e.pattern.as_deref(), Some(""));
        assert!(e.parts.is_empty());
        assert!(e.summary.is_empty());
    }

    #[test]
    fn anchored_literal() {
        let e = explain("^abc$");
        let comps: Vec<&str> = e.parts.iter().map(|p| p.component.as_str()).collect();
        assert_eq!(comps, vec!["^", "a", "b", "c", "$"]);
        assert!(e.summary.starts_with("Matches the entire string that "));
    }

    #[test]
    fn class_plus() {
        let e = explain("[a-z]+");
        assert_eq!(e.parts.len(), 2);
        assert_eq!(e.parts[0].component, "[a-z]");
        assert!(e.parts[0].explanation.contains("lowercase letters"));
        assert_eq!(e.parts[1].component, "+");
        assert_eq!(
            e.parts[1].explanation,
            "One or more of the preceding element"
        );
    }

    #[test]
    fn mid_pattern_caret_still_counts_as_anchor() {
        // `a\^` has no anchor token, but `a^b$` does even though `^` is mid-pattern.
        assert!(explain("a\\^").summary.starts_with("Matches strings containing"));
        assert!(explain("a^b$").summary.starts_with("Matches the entire string"));
    }

    #[test]
    fn quick_summary_matches_explain() {
        assert_eq!(quick_summary("abc"), explain("abc").summary);
        assert!(!quick_summary("abc").trim().is_empty());
        assert_eq!(quick_summary(None), "");
    }

    #[test]
    fn example_is_not_serialized_when_absent() {
        let json = serde_json::to_value(explain("a")).unwrap();
        assert!(json["parts"][0].get("example").is_none());
        assert_eq!(json["parts"][0]["component"], "a");
    }

    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn explain_is_total_and_deterministic(pattern in "\\PC{0,40}") {
                let first = explain(pattern.as_str());
                let second = explain(pattern.as_str());
                prop_assert_eq!(&first, &second);
            }

            #[test]
            fn parts_reassemble_the_pattern(pattern in "[\\\\\\[\\](){}^$.*+?|a-c0-9,]{0,30}") {
                let e = explain(pattern.as_str());
                let joined: String = e.parts.iter().map(|p| p.component.as_str()).collect();
                prop_assert_eq!(joined, pattern);
                prop_assert!(e.parts.iter().all(|p| !p.component.is_empty()));
            }
        }
    }
}
