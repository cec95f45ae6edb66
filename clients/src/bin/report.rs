//! `tck-report` — Interprets TCK JSON reports and writes summarized data.
//!
//! **Outputs:**
//! - `<out>/<parser>_<language>_detailed_report.json` — Interpreted results
//! - `<out>/<parser>_<language>_features_stats.json` — Per-feature statistics
//! - `<out>/index.json` — Whole-report statistics of every parser
//!
//! **Usage:**
//! ```
//! tck-report [--repo-branch-url <url>] [--out <path>] <REPORT>...
//! ```
//!
//! Exits non-zero if none of the given reports could be processed.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tck_reporter::writer::JsonSink;
use tck_reporter::{generate, ReportOptions, Stats, Tally};
use tracing_subscriber::EnvFilter;

/// Generate summarized TCK data from TCK JSON reports.
#[derive(Parser)]
#[command(
    name = "tck-report",
    about = "Interpret TCK JSON reports and compose per-parser and per-feature statistics"
)]
struct Args {
    /// TCK JSON reports to process, one per parser.
    #[arg(required = true, value_name = "REPORT")]
    reports: Vec<PathBuf>,

    /// Output directory for generated documents.
    #[arg(long, default_value = "public/tck")]
    out: PathBuf,

    /// GitHub repo branch blob URL used to link TCK test files,
    /// e.g. "https://github.com/USER/REPO/blob/BRANCH".
    #[arg(long, env = "TCK_REPO_BRANCH_URL")]
    repo_branch_url: Option<String>,

    /// Verbose output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = ReportOptions {
        repo_branch_url: args.repo_branch_url,
    };
    let mut sink = JsonSink::new(&args.out);

    let summary = generate(&args.reports, &options, &mut sink)
        .with_context(|| format!("Failed to generate reports into {}", args.out.display()))?;

    println!("TCK Report Overview");
    println!("===================");
    println!();

    for stats in &summary.stats {
        print_stats(stats);
    }

    println!();
    println!(
        "Summary: {} of {} report(s) processed",
        summary.len(),
        args.reports.len()
    );
    println!("  Output: {}", sink.out_dir().display());

    if summary.is_empty() {
        eprintln!("No TCK report could be processed.");
        process::exit(1);
    }

    Ok(())
}

/// Installs the stderr subscriber; `RUST_LOG` overrides the `-v` level.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn print_stats(stats: &Stats) {
    println!("{}  {}", stats.parser.label(), stats.parser.url);
    for (name, tally) in [
        ("Valid Files", &stats.valid),
        ("Invalid Files", &stats.invalid),
        ("Optional Files", &stats.optional),
        ("Total", &stats.all),
    ] {
        println!("  {:<15} {}", name, format_tally(tally));
    }
}

fn format_tally(tally: &Tally) -> String {
    format!("{}% ({}/{})", tally.success_perc, tally.success, tally.total)
}
