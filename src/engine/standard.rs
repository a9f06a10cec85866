use regex::Regex;

use super::{Deadline, Engine, GroupRecord, MatchRecord, Matcher};
use crate::error::{RegexError, RegexResult};

/// Linear-time engine built on the `regex` crate. Matching cannot backtrack
/// catastrophically, so only the between-match deadline applies.
pub struct StandardEngine;

impl Engine for StandardEngine {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn compile(&self, pattern: &str) -> RegexResult<Box<dyn Matcher>> {
        let regex = Regex::new(pattern).map_err(|e| match e {
            regex::Error::Syntax(detail) => RegexError::InvalidPattern(detail),
            other => RegexError::Unexpected(other.to_string()),
        })?;
        Ok(Box::new(StandardMatcher { regex }))
    }
}

struct StandardMatcher {
    regex: Regex,
}

impl Matcher for StandardMatcher {
    fn find_all(&self, text: &str, deadline: Deadline) -> RegexResult<Vec<MatchRecord>> {
        let names: Vec<Option<&str>> = self.regex.capture_names().skip(1).collect();
        let mut records = Vec::new();

        for caps in self.regex.captures_iter(text) {
            deadline.check()?;
            let Some(whole) = caps.get(0) else { continue };

            let groups = names
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    let name = name.map(String::from);
                    match caps.get(i + 1) {
                        Some(g) => GroupRecord {
                            name,
                            value: g.as_str().to_string(),
                            start: g.start(),
                            length: g.len(),
                            matched: true,
                        },
                        None => GroupRecord::unmatched(name),
                    }
                })
                .collect();

            records.push(MatchRecord {
                value: whole.as_str().to_string(),
                start: whole.start(),
                length: whole.len(),
                groups,
            });
        }

        deadline.check()?;
        Ok(records)
    }

    fn is_match(&self, text: &str) -> RegexResult<bool> {
        Ok(self.regex.is_match(text))
    }
}
