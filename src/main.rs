use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use regexcraft::cli::Args;

fn main() {
    let args = Args::parse();

    let default_filter = if args.debug { "regexcraft=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match regexcraft::run(args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(3);
        }
    }
}
