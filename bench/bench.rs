//! Benchmark the matching engines against the built-in pattern catalog.
//!
//! Usage:
//!   cargo run --release --bin bench_regexcraft                 # both engines, print table
//!   cargo run --release --bin bench_regexcraft -- --engine fancy
//!   cargo run --release --bin bench_regexcraft -- --output bench/results.md

use std::fmt::Write;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;

use regexcraft::engine::{Engine, EngineKind};
use regexcraft::library::PatternLibrary;
use regexcraft::perf::{Rating, profile};
use regexcraft::tester::{DEFAULT_BACKTRACK_LIMIT, DEFAULT_TIMEOUT, RegexTester};

// --- CLI ---

#[derive(Parser)]
#[command(about = "Benchmark regexcraft engines on the pattern catalog.")]
struct Args {
    /// Engine to run: fancy, standard, or omit for both
    #[arg(long)]
    engine: Option<EngineKind>,

    /// Iterations per pattern/example pair
    #[arg(short = 'n', long, default_value_t = 10_000)]
    iterations: i64,

    /// Write a markdown report here instead of printing to stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

// --- Helpers ---

fn format_time(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos >= 1_000_000 {
        format!("{:.2}ms", nanos as f64 / 1_000_000.0)
    } else if nanos >= 1_000 {
        format!("{:.2}µs", nanos as f64 / 1_000.0)
    } else {
        format!("{nanos}ns")
    }
}

fn format_speedup(slow: Duration, fast: Duration) -> String {
    if fast.is_zero() {
        return "-".to_string();
    }
    format!("{:.1}x", slow.as_nanos() as f64 / fast.as_nanos() as f64)
}

fn engines(args: &Args) -> Vec<(EngineKind, Arc<dyn Engine>)> {
    let kinds = match args.engine {
        None => vec![EngineKind::Fancy, EngineKind::Standard],
        Some(kind) => vec![kind],
    };
    kinds
        .into_iter()
        .map(|k| (k, k.build(DEFAULT_BACKTRACK_LIMIT)))
        .collect()
}

// --- Bench ---

struct Row {
    name: String,
    example: String,
    /// Mean per engine, in `engines()` order. `None` when the engine rejects the pattern.
    means: Vec<Option<(Duration, Rating)>>,
}

fn run_bench(args: &Args, engines: &[(EngineKind, Arc<dyn Engine>)]) -> Vec<Row> {
    let library = match PatternLibrary::builtin() {
        Ok(lib) => lib,
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    };

    let testers: Vec<RegexTester> = engines
        .iter()
        .map(|(_, e)| RegexTester::new(e.clone(), DEFAULT_TIMEOUT))
        .collect();

    let mut rows = Vec::new();
    for item in library.all() {
        eprintln!("=== {} ({} examples) ===", item.name, item.examples.len());
        for example in &item.examples {
            let means = testers
                .iter()
                .map(|t| {
                    profile(t, &item.pattern, example, args.iterations)
                        .ok()
                        .map(|r| (r.average, r.rating))
                })
                .collect();
            rows.push(Row {
                name: item.name.clone(),
                example: example.clone(),
                means,
            });
        }
    }
    rows
}

// --- Report ---

fn generate_report(
    rows: &[Row],
    engines: &[(EngineKind, Arc<dyn Engine>)],
    args: &Args,
    elapsed: Duration,
) -> String {
    let mut md = String::new();
    writeln!(md, "# regexcraft Catalog Benchmark").unwrap();
    writeln!(md).unwrap();
    writeln!(
        md,
        "> Generated by `cargo run --release --bin bench_regexcraft`. Do not edit manually."
    )
    .unwrap();
    writeln!(md).unwrap();
    writeln!(md, "**Iterations:** {} per example", args.iterations).unwrap();
    writeln!(md, "**Total time:** {:.1}s", elapsed.as_secs_f64()).unwrap();
    writeln!(md).unwrap();

    let names: Vec<&str> = engines.iter().map(|(_, e)| e.name()).collect();
    let both = engines.len() == 2;
    write!(md, "| Pattern | Example |").unwrap();
    for name in &names {
        write!(md, " {name} |").unwrap();
    }
    if both {
        write!(md, " Speedup |").unwrap();
    }
    writeln!(md).unwrap();
    write!(md, "|---------|---------|").unwrap();
    for _ in &names {
        write!(md, "------:|").unwrap();
    }
    if both {
        write!(md, "-------:|").unwrap();
    }
    writeln!(md).unwrap();

    for row in rows {
        write!(md, "| {} | `{}` |", row.name, row.example).unwrap();
        for mean in &row.means {
            match mean {
                Some((d, rating)) => write!(md, " {} ({rating}) |", format_time(*d)).unwrap(),
                None => write!(md, " invalid |").unwrap(),
            }
        }
        if both {
            let speedup = match (&row.means[0], &row.means[1]) {
                (Some((fancy, _)), Some((standard, _))) => format_speedup(*fancy, *standard),
                _ => "-".to_string(),
            };
            write!(md, " {speedup} |").unwrap();
        }
        writeln!(md).unwrap();
    }
    md
}

fn main() {
    let args = Args::parse();
    let engines = engines(&args);

    let start = Instant::now();
    let rows = run_bench(&args, &engines);
    let md = generate_report(&rows, &engines, &args, start.elapsed());

    match &args.output {
        Some(path) => {
            fs::write(path, &md).unwrap();
            eprintln!("\nWrote {}", path.display());
        }
        None => print!("{md}"),
    }
}
