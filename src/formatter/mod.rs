pub mod json;
pub mod text;

use std::io::Write;
use std::time::Duration;

use crate::codegen::CodeSnippet;
use crate::explain::PatternExplanation;
use crate::library::PatternItem;
use crate::perf::PerformanceReport;
use crate::request::LimitViolation;
use crate::tester::TestOutcome;

/// Everything the CLI can render.
pub enum Report<'a> {
    Explanation(&'a PatternExplanation),
    Outcomes(&'a [TestOutcome]),
    Validation { pattern: &'a str, valid: bool },
    Performance(&'a PerformanceReport),
    Patterns(&'a [&'a PatternItem]),
    Categories(&'a [&'a str]),
    Violations(&'a [LimitViolation]),
    Snippets(&'a [CodeSnippet]),
}

pub trait Formatter {
    fn format_to(&self, report: &Report<'_>, out: &mut dyn Write);
}

pub fn create_formatter(format: &str) -> Box<dyn Formatter> {
    match format {
        "json" => Box::new(json::JsonFormatter),
        // "text" and any unknown value
        _ => Box::new(text::TextFormatter),
    }
}

/// Milliseconds with sub-millisecond precision, as shown to users.
pub(crate) fn millis(d: Duration) -> f64 {
    d.as_nanos() as f64 / 1_000_000.0
}
