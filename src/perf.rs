//! Performance report combining one bounded test run with a latency average.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::error::RegexResult;
use crate::tester::RegexTester;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Rating {
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Moderate,
    Slow,
}

impl Rating {
    /// Rating for a mean per-match latency.
    pub fn for_average(average: Duration) -> Rating {
        match average.as_nanos() {
            0..10_000 => Rating::Excellent,
            10_000..100_000 => Rating::VeryGood,
            100_000..1_000_000 => Rating::Good,
            1_000_000..10_000_000 => Rating::Moderate,
            _ => Rating::Slow,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent (< 0.01ms)",
            Rating::VeryGood => "Very Good (< 0.1ms)",
            Rating::Good => "Good (< 1ms)",
            Rating::Moderate => "Moderate (< 10ms)",
            Rating::Slow => "Slow (> 10ms)",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const TIPS: [&str; 4] = [
    "Consider using more specific character classes",
    "Avoid excessive backtracking with possessive quantifiers",
    "Use anchors (^ $) when matching entire strings",
    "Consider breaking complex patterns into simpler ones",
];

#[derive(Debug, Clone)]
pub struct PerformanceReport {
    pub pattern: String,
    pub input: String,
    pub iterations: i64,
    pub single_execution: Duration,
    pub average: Duration,
    pub is_match: bool,
    pub rating: Rating,
}

impl PerformanceReport {
    /// `None` when the average rounds to zero.
    pub fn operations_per_second(&self) -> Option<f64> {
        let secs = self.average.as_secs_f64();
        (secs > 0.0).then(|| 1.0 / secs)
    }

    /// Optimization hints, offered only when a single match averages over 1ms.
    pub fn tips(&self) -> &'static [&'static str] {
        if self.average > Duration::from_millis(1) {
            &TIPS
        } else {
            &[]
        }
    }
}

/// Measure `pattern` against `input`. Fails when the pattern does not compile.
pub fn profile(
    tester: &RegexTester,
    pattern: &str,
    input: &str,
    iterations: i64,
) -> RegexResult<PerformanceReport> {
    let average = tester.measure_performance(pattern, input, iterations)?;
    let single = tester.test_pattern(pattern, input);

    Ok(PerformanceReport {
        pattern: pattern.to_string(),
        input: input.to_string(),
        iterations,
        single_execution: single.elapsed,
        average,
        is_match: single.is_match,
        rating: Rating::for_average(average),
    })
}
