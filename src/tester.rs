//! Pattern validation, bounded execution, batch testing, and latency measurement.

use std::hint::black_box;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::debug;

use crate::config::Config;
use crate::engine::{Deadline, Engine, EngineKind, MatchRecord};
use crate::error::{RegexError, RegexResult};

/// Ceiling on a single `test_pattern` execution.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Step budget handed to the backtracking engine.
pub const DEFAULT_BACKTRACK_LIMIT: usize = 1_000_000;

pub const DEFAULT_ITERATIONS: i64 = 1000;

/// Result of running one pattern against one input.
///
/// `matches` is empty whenever `is_valid_pattern` is false, and
/// `error_message` is set exactly when `is_valid_pattern` is false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestOutcome {
    pub pattern: Option<String>,
    pub input: String,
    pub is_match: bool,
    pub matches: Vec<MatchRecord>,
    pub elapsed: Duration,
    pub error_message: Option<String>,
    pub is_valid_pattern: bool,
}

impl TestOutcome {
    fn matched(pattern: &str, input: &str, matches: Vec<MatchRecord>, elapsed: Duration) -> Self {
        Self {
            pattern: Some(pattern.to_string()),
            input: input.to_string(),
            is_match: !matches.is_empty(),
            matches,
            elapsed,
            error_message: None,
            is_valid_pattern: true,
        }
    }

    fn failed(pattern: Option<&str>, input: &str, error: &RegexError, elapsed: Duration) -> Self {
        Self {
            pattern: pattern.map(String::from),
            input: input.to_string(),
            is_match: false,
            matches: Vec::new(),
            elapsed,
            error_message: Some(error.to_string()),
            is_valid_pattern: false,
        }
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn has_error(&self) -> bool {
        self.error_message.as_deref().is_some_and(|m| !m.is_empty())
    }
}

/// Stateless front door to the matching engine. Every call compiles its own
/// matcher, so one tester can be shared freely across threads.
#[derive(Clone)]
pub struct RegexTester {
    engine: Arc<dyn Engine>,
    timeout: Duration,
}

impl Default for RegexTester {
    fn default() -> Self {
        Self::new(
            EngineKind::default().build(DEFAULT_BACKTRACK_LIMIT),
            DEFAULT_TIMEOUT,
        )
    }
}

impl RegexTester {
    pub fn new(engine: Arc<dyn Engine>, timeout: Duration) -> Self {
        Self { engine, timeout }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.engine.build(config.backtrack_limit),
            config.timeout(),
        )
    }

    pub fn engine_name(&self) -> &'static str {
        self.engine.name()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// True iff `pattern` is non-empty and compiles. Never fails.
    pub fn is_valid_pattern<'a>(&self, pattern: impl Into<Option<&'a str>>) -> bool {
        match pattern.into() {
            Some(p) if !p.is_empty() => self.engine.compile(p).is_ok(),
            _ => false,
        }
    }

    /// Compile `pattern` and collect every match in `input`, bounded by the
    /// tester's timeout. Failures are reported on the outcome, never raised.
    pub fn test_pattern<'a>(&self, pattern: impl Into<Option<&'a str>>, input: &str) -> TestOutcome {
        let pattern = match pattern.into() {
            Some(p) if !p.is_empty() => p,
            other => {
                return TestOutcome::failed(other, input, &RegexError::EmptyPattern, Duration::ZERO);
            }
        };

        let started = Instant::now();
        let result = self.execute(pattern, input);
        let elapsed = started.elapsed();

        match result {
            Ok(matches) => {
                debug!(
                    engine = self.engine.name(),
                    matches = matches.len(),
                    ?elapsed,
                    "pattern executed"
                );
                TestOutcome::matched(pattern, input, matches, elapsed)
            }
            Err(err) => {
                debug!(engine = self.engine.name(), error = %err, ?elapsed, "pattern failed");
                TestOutcome::failed(Some(pattern), input, &err, elapsed)
            }
        }
    }

    fn execute(&self, pattern: &str, input: &str) -> RegexResult<Vec<MatchRecord>> {
        let matcher = self.engine.compile(pattern)?;
        matcher.find_all(input, Deadline::start(Some(self.timeout)))
    }

    /// Run `test_pattern` for every input. Inputs are processed in parallel;
    /// the returned outcomes follow input order. An absent input list yields
    /// an absent result.
    pub fn test_pattern_batch<'a, S>(
        &self,
        pattern: impl Into<Option<&'a str>>,
        inputs: Option<&[S]>,
    ) -> Option<Vec<TestOutcome>>
    where
        S: AsRef<str> + Sync,
    {
        let inputs = inputs?;
        let pattern = pattern.into();
        Some(
            inputs
                .par_iter()
                .map(|input| self.test_pattern(pattern, input.as_ref()))
                .collect(),
        )
    }

    /// Mean time of one match-only check over `iterations` runs.
    ///
    /// The pattern is compiled once up front without a step budget; an
    /// invalid pattern is the only error. Non-positive `iterations` yields zero.
    pub fn measure_performance<'a>(
        &self,
        pattern: impl Into<Option<&'a str>>,
        input: &str,
        iterations: i64,
    ) -> RegexResult<Duration> {
        let pattern = match pattern.into() {
            Some(p) if !p.is_empty() => p,
            _ => return Err(RegexError::InvalidPattern(RegexError::EmptyPattern.to_string())),
        };
        let matcher = self.engine.compile_unbounded(pattern).map_err(|err| match err {
            RegexError::InvalidPattern(detail) => RegexError::InvalidPattern(detail),
            other => RegexError::InvalidPattern(other.to_string()),
        })?;

        if iterations <= 0 {
            return Ok(Duration::ZERO);
        }

        // Each run is timed to completion; a failed run counts as no match.
        let started = Instant::now();
        for _ in 0..iterations {
            black_box(matcher.is_match(black_box(input)).unwrap_or(false));
        }
        let total = started.elapsed();

        let mean = Duration::from_nanos((total.as_nanos() / iterations as u128) as u64);
        debug!(iterations, ?total, ?mean, "performance measured");
        Ok(mean)
    }
}
