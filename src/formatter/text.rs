use std::io::Write;

use crate::explain::PatternExplanation;
use crate::formatter::{Formatter, Report, millis};
use crate::library::PatternItem;
use crate::perf::PerformanceReport;
use crate::request::LimitViolation;
use crate::tester::TestOutcome;

/// Widest component column before explanations wrap onto their own line.
const MAX_COMPONENT_WIDTH: usize = 24;

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format_to(&self, report: &Report<'_>, out: &mut dyn Write) {
        match report {
            Report::Explanation(e) => explanation(e, out),
            Report::Outcomes(outcomes) => {
                for (i, o) in outcomes.iter().enumerate() {
                    if i > 0 {
                        let _ = writeln!(out);
                    }
                    outcome(o, out);
                }
            }
            Report::Validation { pattern, valid } => {
                let verdict = if *valid { "valid" } else { "invalid" };
                let _ = writeln!(out, "{pattern}: {verdict}");
            }
            Report::Performance(r) => performance(r, out),
            Report::Patterns(items) => patterns(items, out),
            Report::Categories(categories) => {
                for c in categories.iter() {
                    let _ = writeln!(out, "{c}");
                }
            }
            Report::Violations(violations) => violations_list(violations, out),
            Report::Snippets(snippets) => {
                for (i, s) in snippets.iter().enumerate() {
                    if i > 0 {
                        let _ = writeln!(out);
                    }
                    let _ = writeln!(out, "== {} ==", s.language);
                    let _ = writeln!(out, "{}\n", s.description);
                    let _ = write!(out, "{}", s.code);
                }
            }
        }
    }
}

fn explanation(e: &PatternExplanation, out: &mut dyn Write) {
    let _ = writeln!(out, "Pattern: {}", e.pattern.as_deref().unwrap_or(""));
    if e.parts.is_empty() {
        let _ = writeln!(out, "  (no components)");
        return;
    }

    let width = e
        .parts
        .iter()
        .map(|p| p.component.chars().count())
        .filter(|&w| w <= MAX_COMPONENT_WIDTH)
        .max()
        .unwrap_or(0);

    for p in &e.parts {
        if p.component.chars().count() > MAX_COMPONENT_WIDTH {
            let _ = writeln!(out, "  {}", p.component);
            let _ = writeln!(out, "  {:width$}  {}", "", p.explanation);
        } else {
            let _ = writeln!(out, "  {:width$}  {}", p.component, p.explanation);
        }
    }
    let _ = writeln!(out, "\nSummary: {}", e.summary);
}

fn outcome(o: &TestOutcome, out: &mut dyn Write) {
    let _ = writeln!(out, "Pattern: {}", o.pattern.as_deref().unwrap_or(""));
    let _ = writeln!(out, "Input:   {}", o.input);

    if let Some(err) = &o.error_message {
        let _ = writeln!(out, "Error:   {err}");
        return;
    }

    let count = o.match_count();
    let match_word = if count == 1 { "match" } else { "matches" };
    let _ = writeln!(
        out,
        "Result:  {} ({count} {match_word}) in {:.4}ms",
        if o.is_match { "match" } else { "no match" },
        millis(o.elapsed),
    );

    for (i, m) in o.matches.iter().enumerate() {
        let _ = writeln!(
            out,
            "  Match {}: '{}' at {}, length {}",
            i + 1,
            m.value,
            m.start,
            m.length
        );
        for (g, group) in m.groups.iter().enumerate() {
            let label = match &group.name {
                Some(name) => format!("Group {} <{name}>", g + 1),
                None => format!("Group {}", g + 1),
            };
            if group.matched {
                let _ = writeln!(
                    out,
                    "    {label}: '{}' at {}, length {}",
                    group.value, group.start, group.length
                );
            } else {
                let _ = writeln!(out, "    {label}: (did not participate)");
            }
        }
    }
}

fn performance(r: &PerformanceReport, out: &mut dyn Write) {
    let _ = writeln!(out, "Pattern:          {}", r.pattern);
    let _ = writeln!(out, "Input:            {}", r.input);
    let _ = writeln!(out, "Iterations:       {}", r.iterations);
    let _ = writeln!(out, "Single execution: {:.4}ms", millis(r.single_execution));
    let _ = writeln!(out, "Average time:     {:.4}ms", millis(r.average));
    match r.operations_per_second() {
        Some(ops) => {
            let _ = writeln!(out, "Operations/sec:   {ops:.0}");
        }
        None => {
            let _ = writeln!(out, "Operations/sec:   n/a");
        }
    }
    let _ = writeln!(
        out,
        "Match result:     {}",
        if r.is_match { "match" } else { "no match" }
    );
    let _ = writeln!(out, "Performance:      {}", r.rating);

    let tips = r.tips();
    if !tips.is_empty() {
        let _ = writeln!(out, "\nOptimization tips:");
        for tip in tips {
            let _ = writeln!(out, "  - {tip}");
        }
    }
}

fn patterns(items: &[&PatternItem], out: &mut dyn Write) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            let _ = writeln!(out);
        }
        let _ = writeln!(out, "{} [{}]", item.name, item.category);
        let _ = writeln!(out, "  {}", item.pattern);
        if !item.description.is_empty() {
            let _ = writeln!(out, "  {}", item.description);
        }
        if !item.examples.is_empty() {
            let _ = writeln!(out, "  e.g. {}", item.examples.join(", "));
        }
    }
    let word = if items.len() == 1 { "pattern" } else { "patterns" };
    let _ = writeln!(out, "\n{} {word}", items.len());
}

fn violations_list(violations: &[LimitViolation], out: &mut dyn Write) {
    for v in violations {
        let _ = writeln!(out, "error: {v}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explain::explain;
    use crate::tester::RegexTester;

    fn render(report: &Report<'_>) -> String {
        let mut buf = Vec::new();
        TextFormatter.format_to(report, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn explanation_lists_parts_and_summary() {
        let out = render(&Report::Explanation(&explain("^a+$")));
        assert!(out.starts_with("Pattern: ^a+$\n"));
        assert!(out.contains("  +  One or more of the preceding element\n"));
        assert!(out.contains("Summary: Matches the entire string that "));
    }

    #[test]
    fn outcome_with_groups() {
        let outcomes = [RegexTester::default().test_pattern("(?<d>\\d)(x)?", "a1")];
        let out = render(&Report::Outcomes(&outcomes));
        assert!(out.contains("Result:  match (1 match)"));
        assert!(out.contains("  Match 1: '1' at 1, length 1\n"));
        assert!(out.contains("    Group 1 <d>: '1' at 1, length 1\n"));
        assert!(out.contains("    Group 2: (did not participate)\n"));
    }

    #[test]
    fn outcome_error() {
        let outcomes = [RegexTester::default().test_pattern("", "a")];
        let out = render(&Report::Outcomes(&outcomes));
        assert!(out.contains("Error:   Pattern cannot be null or empty.\n"));
        assert!(!out.contains("Result:"));
    }

    #[test]
    fn validation_line() {
        assert_eq!(
            render(&Report::Validation { pattern: "[", valid: false }),
            "[: invalid\n"
        );
    }

    #[test]
    fn snippets_have_headers() {
        let snippets = crate::codegen::generate("a", None);
        let out = render(&Report::Snippets(&snippets));
        assert!(out.starts_with("== C# ==\nC# implementation using System.Text.RegularExpressions\n\n"));
        assert!(out.contains("\n== PHP ==\n"));
        assert!(out.ends_with("?>\n"));
    }

    #[test]
    fn violations_are_prefixed() {
        let v = crate::request::Limits::default().check_pattern("");
        assert_eq!(
            render(&Report::Violations(&v)),
            "error: pattern: Pattern is required\n"
        );
    }
}
