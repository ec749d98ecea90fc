//! sprint - sprint task tables CLI
//!
//! Builds dependency-aware, ordered task tables for a sprint from a JSON
//! snapshot of its tasks, edges, story points and owner handles.

use clap::Parser;
use sprint::cli::Cli;
use sprint::output::emit_error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    let cli = Cli::parse();
    let command = cli.command_name();

    // Tracing is opt-in via RUST_LOG, or --verbose for this crate's debug logs.
    // Keep startup robust: ignore invalid/huge filters.
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() || raw.len() > 4096 {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| {
            if cli.verbose {
                EnvFilter::new("sprint=debug")
            } else {
                EnvFilter::new("off")
            }
        });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let json = cli.json;
    if let Err(err) = cli.run() {
        let _ = emit_error(command, &err, json);
        std::process::exit(err.exit_code());
    }
}
