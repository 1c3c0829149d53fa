//! # Lineup CLI
//!
//! Reads a JSON edge list and prints the performance order as JSON.

use std::io::{self, Write};

use clap::Parser;
use lineup_planner::TrailBuilder;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod input;

use cli::Args;

/// Run the CLI with parsed arguments.
fn run(args: Args) -> anyhow::Result<()> {
    let config = args.merge_into(input::read_config(args.config.as_deref())?);
    let edges = input::read_edges(args.input.as_deref())?;

    info!("Loaded {} edges", edges.len());

    let builder = TrailBuilder::with_config(config);
    let report = builder.run(&edges)?;

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&report.trail)?
    } else {
        serde_json::to_string(&report.trail)?
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")?;

    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    run(Args::parse())
}
