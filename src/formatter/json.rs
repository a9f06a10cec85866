use std::io::Write;

use serde::Serialize;

use crate::codegen::CodeSnippet;
use crate::engine::MatchRecord;
use crate::formatter::{Formatter, Report, millis};
use crate::library::PatternItem;
use crate::perf::Rating;
use crate::tester::TestOutcome;

pub struct JsonFormatter;

#[derive(Serialize)]
struct OutcomeOutput<'a> {
    pattern: Option<&'a str>,
    input: &'a str,
    is_match: bool,
    match_count: usize,
    execution_time_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_message: Option<&'a str>,
    is_valid: bool,
    matches: &'a [MatchRecord],
}

impl<'a> From<&'a TestOutcome> for OutcomeOutput<'a> {
    fn from(o: &'a TestOutcome) -> Self {
        OutcomeOutput {
            pattern: o.pattern.as_deref(),
            input: &o.input,
            is_match: o.is_match,
            match_count: o.match_count(),
            execution_time_ms: millis(o.elapsed),
            error_message: o.error_message.as_deref(),
            is_valid: o.is_valid_pattern,
            matches: &o.matches,
        }
    }
}

#[derive(Serialize)]
struct PerformanceOutput<'a> {
    pattern: &'a str,
    input: &'a str,
    iterations: i64,
    single_execution_time_ms: f64,
    average_execution_time_ms: f64,
    operations_per_second: Option<f64>,
    is_match: bool,
    rating: Rating,
    tips: &'a [&'a str],
}

#[derive(Serialize)]
struct ValidationOutput<'a> {
    pattern: &'a str,
    is_valid: bool,
}

#[derive(Serialize)]
struct PatternsOutput<'a> {
    count: usize,
    patterns: &'a [&'a PatternItem],
}

#[derive(Serialize)]
struct CategoriesOutput<'a> {
    count: usize,
    categories: &'a [&'a str],
}

#[derive(Serialize)]
struct SnippetsOutput<'a> {
    snippets: &'a [CodeSnippet],
}

#[derive(Serialize)]
struct ViolationOutput<'a> {
    field: &'a str,
    message: &'a str,
}

#[derive(Serialize)]
struct ViolationsOutput<'a> {
    errors: Vec<ViolationOutput<'a>>,
}

impl Formatter for JsonFormatter {
    fn format_to(&self, report: &Report<'_>, out: &mut dyn Write) {
        let rendered = match report {
            Report::Explanation(e) => serde_json::to_string_pretty(e),
            Report::Outcomes(outcomes) => {
                let list: Vec<OutcomeOutput<'_>> = outcomes.iter().map(OutcomeOutput::from).collect();
                serde_json::to_string_pretty(&list)
            }
            Report::Validation { pattern, valid } => serde_json::to_string_pretty(&ValidationOutput {
                pattern,
                is_valid: *valid,
            }),
            Report::Performance(r) => serde_json::to_string_pretty(&PerformanceOutput {
                pattern: &r.pattern,
                input: &r.input,
                iterations: r.iterations,
                single_execution_time_ms: millis(r.single_execution),
                average_execution_time_ms: millis(r.average),
                operations_per_second: r.operations_per_second(),
                is_match: r.is_match,
                rating: r.rating,
                tips: r.tips(),
            }),
            Report::Patterns(items) => serde_json::to_string_pretty(&PatternsOutput {
                count: items.len(),
                patterns: items,
            }),
            Report::Categories(categories) => serde_json::to_string_pretty(&CategoriesOutput {
                count: categories.len(),
                categories,
            }),
            Report::Violations(violations) => serde_json::to_string_pretty(&ViolationsOutput {
                errors: violations
                    .iter()
                    .map(|v| ViolationOutput {
                        field: v.field,
                        message: &v.message,
                    })
                    .collect(),
            }),
            Report::Snippets(snippets) => serde_json::to_string_pretty(&SnippetsOutput { snippets }),
        };

        match rendered {
            Ok(json) => {
                let _ = writeln!(out, "{json}");
            }
            Err(e) => {
                let _ = writeln!(out, "{{\"error\": \"failed to serialize report: {e}\"}}");
            }
        }
    }
}
