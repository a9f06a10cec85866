use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::engine::EngineKind;

#[derive(Parser, Debug)]
#[command(name = "regexcraft", version, about = "Explain, test, and benchmark regular expressions")]
pub struct Args {
    /// Path to configuration file (default: ./.regexcraft.yml if present)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text", value_parser = ["text", "json"], global = true)]
    pub format: String,

    /// Matching engine: fancy or standard (overrides config)
    #[arg(long, value_name = "ENGINE", global = true)]
    pub engine: Option<EngineKind>,

    /// Execution timeout in milliseconds for test runs (overrides config)
    #[arg(long, value_name = "MS", global = true)]
    pub timeout_ms: Option<u64>,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Break a pattern into its components with plain-English explanations
    Explain {
        #[arg(allow_hyphen_values = true)]
        pattern: String,
    },

    /// Run a pattern against one or more inputs and show every match
    Test {
        #[arg(allow_hyphen_values = true)]
        pattern: String,

        /// Inputs to test; each is run independently
        #[arg(required = true, allow_hyphen_values = true)]
        inputs: Vec<String>,
    },

    /// Check whether a pattern compiles (exit code 1 when it does not)
    Validate {
        #[arg(allow_hyphen_values = true)]
        pattern: String,
    },

    /// Measure mean match latency over repeated runs
    Perf {
        #[arg(allow_hyphen_values = true)]
        pattern: String,
        #[arg(allow_hyphen_values = true)]
        input: String,

        /// Number of iterations (default from config, 1000)
        #[arg(short = 'n', long)]
        iterations: Option<i64>,
    },

    /// Generate code that uses the pattern in other languages
    Codegen {
        #[arg(allow_hyphen_values = true)]
        pattern: String,

        /// Only this language: csharp, javascript, python, java, or php
        #[arg(short, long)]
        language: Option<String>,

        /// Sample text embedded in the snippet
        #[arg(short, long, allow_hyphen_values = true)]
        sample: Option<String>,
    },

    /// Browse the built-in pattern catalog
    Library {
        /// Only patterns in this category
        #[arg(long, conflicts_with_all = ["search", "name", "categories"])]
        category: Option<String>,

        /// Case-insensitive search over name, description, and category
        #[arg(long, conflicts_with_all = ["name", "categories"])]
        search: Option<String>,

        /// Show a single pattern by name
        #[arg(long, conflicts_with = "categories")]
        name: Option<String>,

        /// List categories only
        #[arg(long)]
        categories: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn explain_subcommand() {
        let args = parse(&["regexcraft", "explain", "^a+$"]);
        assert!(matches!(args.command, Command::Explain { ref pattern } if pattern == "^a+$"));
        assert_eq!(args.format, "text");
        assert!(!args.debug);
    }

    #[test]
    fn test_requires_inputs() {
        assert!(Args::try_parse_from(["regexcraft", "test", "a"]).is_err());
        let args = parse(&["regexcraft", "test", "a", "x", "y"]);
        match args.command {
            Command::Test { inputs, .. } => assert_eq!(inputs, vec!["x", "y"]),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = parse(&["regexcraft", "validate", "a", "--format", "json", "--engine", "standard"]);
        assert_eq!(args.format, "json");
        assert_eq!(args.engine, Some(EngineKind::Standard));
    }

    #[test]
    fn perf_iterations() {
        let args = parse(&["regexcraft", "perf", "a", "banana", "-n", "50"]);
        match args.command {
            Command::Perf { iterations, .. } => assert_eq!(iterations, Some(50)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn codegen_options() {
        let args = parse(&["regexcraft", "codegen", "\\d+", "-l", "python", "--sample", "a 1"]);
        match args.command {
            Command::Codegen {
                pattern,
                language,
                sample,
            } => {
                assert_eq!(pattern, "\\d+");
                assert_eq!(language.as_deref(), Some("python"));
                assert_eq!(sample.as_deref(), Some("a 1"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn library_filters_conflict() {
        assert!(
            Args::try_parse_from(["regexcraft", "library", "--category", "x", "--search", "y"]).is_err()
        );
        let args = parse(&["regexcraft", "library", "--categories"]);
        assert!(matches!(args.command, Command::Library { categories: true, .. }));
    }

    #[test]
    fn unknown_engine_rejected() {
        assert!(Args::try_parse_from(["regexcraft", "--engine", "pcre", "explain", "a"]).is_err());
    }

    #[test]
    fn unknown_format_rejected() {
        assert!(Args::try_parse_from(["regexcraft", "--format", "xml", "explain", "a"]).is_err());
    }
}
