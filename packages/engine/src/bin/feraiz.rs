//! Command-line front end for the Ferâiz engine.
//!
//! Usage:
//!   feraiz --heir wife=1 --heir father=1 --heir mother=1
//!   echo '{"husband": 1, "son": 2}' | feraiz --json
//!
//! Heirs are read from `--heir key=count` arguments, or from a JSON object on
//! stdin when no `--heir` is given. Output is a text table followed by the
//! reasoning log, or the full report as JSON with `--json`.

use clap::Parser;
use console::style;
use feraiz_engine::input::{parse_assignment, parse_counts, parse_counts_json};
use feraiz_engine::{calculate, DistributionReport, HeirCounts, HeirKey, Result};
use std::io::Read;
use tracing_subscriber::EnvFilter;

/// Ferâiz - exact Hanafi inheritance shares.
#[derive(Parser)]
#[command(name = "feraiz")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Heir and count, e.g. `son=2` (repeatable)
    #[arg(long = "heir", value_name = "KEY=COUNT")]
    heirs: Vec<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// List the known heir identifiers and exit
    #[arg(long)]
    list_heirs: bool,
}

fn read_counts(cli: &Cli) -> Result<HeirCounts> {
    if cli.heirs.is_empty() {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        return parse_counts_json(&input);
    }

    let entries = cli
        .heirs
        .iter()
        .map(|arg| parse_assignment(arg))
        .collect::<Result<Vec<_>>>()?;
    parse_counts(entries)
}

fn run(cli: &Cli) -> Result<()> {
    if cli.list_heirs {
        for key in HeirKey::ALL {
            println!("{:<24} {}", key.as_str(), key.name());
        }
        return Ok(());
    }

    let counts = read_counts(cli)?;
    tracing::info!(heirs = ?counts.present().collect::<Vec<_>>(), "Calculating distribution");

    let result = calculate(&counts)?;
    let report = DistributionReport::new(&counts, &result)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render());
        if !report.unassigned.is_zero() {
            eprintln!(
                "{} no heir is eligible for the remaining {}",
                style("warning:").yellow().bold(),
                report.unassigned
            );
        }
    }
    Ok(())
}

fn main() {
    // Initialize tracing with WARN level by default, respecting RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{} {e}", style("error:").red().bold());
        std::process::exit(1);
    }
}
