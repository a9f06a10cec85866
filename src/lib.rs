pub mod cli;
pub mod codegen;
pub mod config;
pub mod engine;
pub mod error;
pub mod explain;
pub mod formatter;
pub mod library;
pub mod perf;
pub mod request;
pub mod tester;

#[cfg(test)]
pub mod testutil;

use std::io::Write;

use anyhow::{Result, anyhow};
use tracing::debug;

use cli::{Args, Command};
use codegen::Language;
use config::{Config, load_config};
use formatter::{Formatter, Report, create_formatter};
use library::{PatternItem, PatternLibrary};
use request::LimitViolation;
use tester::RegexTester;

/// Run a command, printing to stdout. Returns the exit code:
/// 0 = success, 1 = `validate` found the pattern invalid,
/// 2 = a request limit was violated.
pub fn run(args: Args) -> Result<i32> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    run_with_output(args, &mut lock)
}

/// Same as [`run`], rendering into `out`.
pub fn run_with_output(args: Args, out: &mut dyn Write) -> Result<i32> {
    let config = resolve_config(&args)?;
    let tester = RegexTester::from_config(&config);
    let formatter = create_formatter(&args.format);

    debug!(
        engine = tester.engine_name(),
        timeout = ?tester.timeout(),
        config = ?config.source(),
        "starting"
    );

    match args.command {
        Command::Explain { pattern } => {
            let violations = config.limits.check_pattern(&pattern);
            if !violations.is_empty() {
                return Ok(reject(&*formatter, &violations, out));
            }
            let explanation = explain::explain(pattern.as_str());
            debug!(parts = explanation.parts.len(), "pattern explained");
            formatter.format_to(&Report::Explanation(&explanation), out);
            Ok(0)
        }
        Command::Test { pattern, inputs } => {
            let violations = config.limits.check_test(&pattern, &inputs[..]);
            if !violations.is_empty() {
                return Ok(reject(&*formatter, &violations, out));
            }
            let outcomes = tester
                .test_pattern_batch(pattern.as_str(), Some(&inputs[..]))
                .unwrap_or_default();
            formatter.format_to(&Report::Outcomes(&outcomes), out);
            Ok(0)
        }
        Command::Validate { pattern } => {
            let violations = config.limits.check_pattern(&pattern);
            if !violations.is_empty() {
                return Ok(reject(&*formatter, &violations, out));
            }
            let valid = tester.is_valid_pattern(pattern.as_str());
            formatter.format_to(
                &Report::Validation {
                    pattern: &pattern,
                    valid,
                },
                out,
            );
            Ok(if valid { 0 } else { 1 })
        }
        Command::Perf {
            pattern,
            input,
            iterations,
        } => {
            let iterations = iterations.unwrap_or(config.iterations);
            let violations = config.limits.check_perf(&pattern, &input, iterations);
            if !violations.is_empty() {
                return Ok(reject(&*formatter, &violations, out));
            }
            let report = perf::profile(&tester, &pattern, &input, iterations)?;
            formatter.format_to(&Report::Performance(&report), out);
            Ok(0)
        }
        Command::Codegen {
            pattern,
            language,
            sample,
        } => {
            let violations =
                config
                    .limits
                    .check_codegen(&pattern, sample.as_deref(), language.as_deref());
            if !violations.is_empty() {
                return Ok(reject(&*formatter, &violations, out));
            }
            let snippets = match language.as_deref().filter(|l| !l.is_empty()) {
                Some(id) => {
                    let language: Language = id.parse().map_err(|e: String| anyhow!(e))?;
                    vec![codegen::generate_for(language, &pattern, sample.as_deref())]
                }
                None => codegen::generate(&pattern, sample.as_deref()),
            };
            debug!(count = snippets.len(), "snippets generated");
            formatter.format_to(&Report::Snippets(&snippets), out);
            Ok(0)
        }
        Command::Library {
            category,
            search,
            name,
            categories,
        } => {
            let library = PatternLibrary::builtin()?;
            if categories {
                formatter.format_to(&Report::Categories(&library.categories()), out);
                return Ok(0);
            }
            let items: Vec<&PatternItem> = if let Some(name) = name {
                let item = library
                    .by_name(&name)
                    .ok_or_else(|| anyhow!("no pattern named {name:?} in the catalog"))?;
                vec![item]
            } else if let Some(category) = category {
                library.by_category(&category)
            } else if let Some(term) = search {
                library.search(&term)
            } else {
                library.all().iter().collect()
            };
            formatter.format_to(&Report::Patterns(&items), out);
            Ok(0)
        }
    }
}

/// Config file overlaid with command-line overrides.
fn resolve_config(args: &Args) -> Result<Config> {
    let mut config = load_config(args.config.as_deref(), None)?;
    if let Some(engine) = args.engine {
        config.engine = engine;
    }
    if let Some(ms) = args.timeout_ms {
        if ms == 0 {
            anyhow::bail!("--timeout-ms must be positive");
        }
        config.timeout_ms = ms;
    }
    Ok(config)
}

fn reject(formatter: &dyn Formatter, violations: &[LimitViolation], out: &mut dyn Write) -> i32 {
    debug!(count = violations.len(), "request rejected");
    formatter.format_to(&Report::Violations(violations), out);
    2
}
