//! The matching primitive behind the tester.
//!
//! `Engine` compiles a pattern; `Matcher` enumerates leftmost, non-overlapping
//! matches. Either backend can be swapped in without touching the tester.

pub mod fancy;
pub mod standard;

use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::error::{RegexError, RegexResult};

pub use fancy::FancyEngine;
pub use standard::StandardEngine;

/// A capture group within one match. Offsets are byte offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub value: String,
    pub start: usize,
    pub length: usize,
    /// `false` when the group did not participate in the match.
    pub matched: bool,
}

impl GroupRecord {
    pub fn unmatched(name: Option<String>) -> Self {
        Self {
            name,
            value: String::new(),
            start: 0,
            length: 0,
            matched: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub value: String,
    pub start: usize,
    pub length: usize,
    /// Groups 1..n in index order; the whole match is not repeated here.
    pub groups: Vec<GroupRecord>,
}

/// Wall-clock budget for one `find_all` call.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    started: Instant,
    limit: Option<Duration>,
}

impl Deadline {
    pub fn start(limit: Option<Duration>) -> Self {
        Self {
            started: Instant::now(),
            limit,
        }
    }

    pub fn none() -> Self {
        Self::start(None)
    }

    pub fn check(&self) -> RegexResult<()> {
        match self.limit {
            Some(limit) if self.started.elapsed() > limit => Err(RegexError::Timeout(format!(
                "execution exceeded {limit:?}"
            ))),
            _ => Ok(()),
        }
    }
}

pub trait Matcher: Send + Sync {
    /// All non-overlapping matches, left to right. The deadline is checked
    /// after every match and once more when the search ends, so a run that
    /// overshoots it never reports success. A single runaway match is cut
    /// short only by the engine's own step budget.
    fn find_all(&self, text: &str, deadline: Deadline) -> RegexResult<Vec<MatchRecord>>;

    /// Whether `text` contains at least one match.
    fn is_match(&self, text: &str) -> RegexResult<bool>;
}

pub trait Engine: Send + Sync {
    fn name(&self) -> &'static str;

    /// Compile `pattern`. Syntax problems come back as `RegexError::InvalidPattern`.
    fn compile(&self, pattern: &str) -> RegexResult<Box<dyn Matcher>>;

    /// Compile `pattern` without any per-match step budget, for callers that
    /// must run to completion. Engines without a budget reuse `compile`.
    fn compile_unbounded(&self, pattern: &str) -> RegexResult<Box<dyn Matcher>> {
        self.compile(pattern)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Backtracking engine with lookaround and backreferences.
    #[default]
    Fancy,
    /// Linear-time engine; rejects lookaround and backreferences.
    Standard,
}

impl FromStr for EngineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fancy" => Ok(EngineKind::Fancy),
            "standard" => Ok(EngineKind::Standard),
            other => Err(format!("unknown engine {other:?} (expected fancy or standard)")),
        }
    }
}

impl EngineKind {
    pub fn build(self, backtrack_limit: usize) -> Arc<dyn Engine> {
        match self {
            EngineKind::Fancy => Arc::new(FancyEngine::new(backtrack_limit)),
            EngineKind::Standard => Arc::new(StandardEngine),
        }
    }
}
