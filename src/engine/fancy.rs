use fancy_regex::{Regex, RegexBuilder, RuntimeError};

use super::{Deadline, Engine, GroupRecord, MatchRecord, Matcher};
use crate::error::{RegexError, RegexResult};

/// Backtracking engine built on `fancy_regex`.
///
/// Runaway backtracking inside a single match is cut off by the step budget
/// and reported as a timeout.
pub struct FancyEngine {
    backtrack_limit: usize,
}

impl FancyEngine {
    pub fn new(backtrack_limit: usize) -> Self {
        Self { backtrack_limit }
    }
}

impl Engine for FancyEngine {
    fn name(&self) -> &'static str {
        "fancy"
    }

    fn compile(&self, pattern: &str) -> RegexResult<Box<dyn Matcher>> {
        build(pattern, self.backtrack_limit)
    }

    fn compile_unbounded(&self, pattern: &str) -> RegexResult<Box<dyn Matcher>> {
        build(pattern, usize::MAX)
    }
}

fn build(pattern: &str, backtrack_limit: usize) -> RegexResult<Box<dyn Matcher>> {
    let regex = RegexBuilder::new(pattern)
        .backtrack_limit(backtrack_limit)
        .build()
        .map_err(|e| map_error(e, backtrack_limit))?;
    let names = regex
        .capture_names()
        .skip(1)
        .map(|n| n.map(String::from))
        .collect();
    Ok(Box::new(FancyMatcher {
        regex,
        names,
        backtrack_limit,
    }))
}

struct FancyMatcher {
    regex: Regex,
    names: Vec<Option<String>>,
    backtrack_limit: usize,
}

impl Matcher for FancyMatcher {
    fn find_all(&self, text: &str, deadline: Deadline) -> RegexResult<Vec<MatchRecord>> {
        let mut records = Vec::new();
        for caps in self.regex.captures_iter(text) {
            let caps = caps.map_err(|e| map_error(e, self.backtrack_limit))?;
            deadline.check()?;

            let Some(whole) = caps.get(0) else { continue };
            let groups = self
                .names
                .iter()
                .enumerate()
                .map(|(i, name)| match caps.get(i + 1) {
                    Some(g) => GroupRecord {
                        name: name.clone(),
                        value: g.as_str().to_string(),
                        start: g.start(),
                        length: g.end() - g.start(),
                        matched: true,
                    },
                    None => GroupRecord::unmatched(name.clone()),
                })
                .collect();

            records.push(MatchRecord {
                value: whole.as_str().to_string(),
                start: whole.start(),
                length: whole.end() - whole.start(),
                groups,
            });
        }
        deadline.check()?;
        Ok(records)
    }

    fn is_match(&self, text: &str) -> RegexResult<bool> {
        self.regex
            .is_match(text)
            .map_err(|e| map_error(e, self.backtrack_limit))
    }
}

fn map_error(err: fancy_regex::Error, backtrack_limit: usize) -> RegexError {
    match err {
        fancy_regex::Error::ParseError(..) | fancy_regex::Error::CompileError(_) => {
            RegexError::InvalidPattern(err.to_string())
        }
        fancy_regex::Error::RuntimeError(RuntimeError::BacktrackLimitExceeded) => {
            RegexError::Timeout(format!(
                "backtracking exceeded {backtrack_limit} steps"
            ))
        }
        other => RegexError::Unexpected(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::time::Duration;

    fn engine() -> FancyEngine {
        FancyEngine::new(1_000_000)
    }

    #[test]
    fn compiles_lookaround_and_backrefs() {
        assert!(engine().compile("(?=a)a").is_ok());
        assert!(engine().compile("(\\w)\\1").is_ok());
    }

    #[test]
    fn syntax_error_is_invalid_pattern() {
        let err = engine().compile("[").err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidPattern);
        assert!(err.to_string().starts_with("invalid pattern: "));
    }

    #[test]
    fn captures_with_names_and_unmatched_groups() {
        let m = engine().compile("(?<x>a)|(b)").unwrap();
        let found = m.find_all("ab", Deadline::none()).unwrap();
        assert_eq!(found.len(), 2);

        assert_eq!(found[0].value, "a");
        assert_eq!(found[0].groups[0].name.as_deref(), Some("x"));
        assert!(found[0].groups[0].matched);
        assert!(!found[0].groups[1].matched);

        assert_eq!(found[1].start, 1);
        assert!(!found[1].groups[0].matched);
        assert_eq!(found[1].groups[1].value, "b");
        assert_eq!(found[1].groups[1].start, 1);
        assert_eq!(found[1].groups[1].length, 1);
    }

    #[test]
    fn backreference_matching() {
        let m = engine().compile("(\\w)\\1").unwrap();
        let found = m.find_all("abccdee", Deadline::none()).unwrap();
        let values: Vec<&str> = found.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["cc", "ee"]);
    }

    #[test]
    fn step_budget_is_a_timeout() {
        let input = format!("{}b", "a".repeat(30));
        let m = FancyEngine::new(10_000).compile("^(a|aa)+\\1$").unwrap();
        let err = m.find_all(&input, Deadline::none()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Timeout);
        assert!(m.is_match(&input).is_err());
    }

    #[test]
    fn unbounded_compile_ignores_step_budget() {
        let input = format!("{}b", "a".repeat(22));
        let m = FancyEngine::new(10_000).compile_unbounded("^(a|aa)+\\1$").unwrap();
        assert!(!m.is_match(&input).unwrap());
    }

    #[test]
    fn slow_search_without_matches_hits_deadline() {
        let input = format!("{}b", "a".repeat(24));
        let m = FancyEngine::new(usize::MAX).compile("^(a|aa)+\\1$").unwrap();
        let err = m
            .find_all(&input, Deadline::start(Some(Duration::from_micros(1))))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Timeout);
    }

    #[test]
    fn is_match_reports_presence() {
        let m = engine().compile("b+").unwrap();
        assert!(m.is_match("abbc").unwrap());
        assert!(!m.is_match("ac").unwrap());
    }
}
