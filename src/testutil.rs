use std::time::Duration;

use crate::engine::{Deadline, Engine, MatchRecord, Matcher};
use crate::error::{RegexError, RegexResult};

/// Scripted behaviour for [`FakeEngine`]. Every pattern compiles; the
/// script decides what matching does.
#[derive(Debug, Clone, Copy)]
pub enum FakeResult {
    /// `find_all` reports the engine's own step budget running out.
    Timeout,
    /// `find_all` fails with an engine error unrelated to time.
    Unexpected,
    /// `find_all` yields `count` matches, sleeping `delay` before each and
    /// honouring the deadline between them.
    SlowMatches { count: usize, delay: Duration },
}

pub struct FakeEngine {
    script: FakeResult,
}

impl FakeEngine {
    pub fn new(script: FakeResult) -> Self {
        Self { script }
    }
}

impl Engine for FakeEngine {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn compile(&self, _pattern: &str) -> RegexResult<Box<dyn Matcher>> {
        Ok(Box::new(FakeMatcher {
            script: self.script,
        }))
    }
}

struct FakeMatcher {
    script: FakeResult,
}

impl Matcher for FakeMatcher {
    fn find_all(&self, text: &str, deadline: Deadline) -> RegexResult<Vec<MatchRecord>> {
        match self.script {
            FakeResult::Timeout => Err(RegexError::Timeout("scripted step limit".to_string())),
            FakeResult::Unexpected => Err(RegexError::Unexpected("scripted failure".to_string())),
            FakeResult::SlowMatches { count, delay } => {
                let mut out = Vec::with_capacity(count);
                for i in 0..count {
                    std::thread::sleep(delay);
                    deadline.check()?;
                    out.push(MatchRecord {
                        value: String::new(),
                        start: i.min(text.len()),
                        length: 0,
                        groups: Vec::new(),
                    });
                }
                Ok(out)
            }
        }
    }

    fn is_match(&self, _text: &str) -> RegexResult<bool> {
        match self.script {
            FakeResult::Unexpected => Err(RegexError::Unexpected("scripted failure".to_string())),
            _ => Ok(true),
        }
    }
}
