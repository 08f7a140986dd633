//! `plane-verify` — Counts and checks the lines of the affine plane AG(2, q).
//!
//! **Usage:**
//! ```text
//! plane-verify lines <q> [--unchecked]
//! plane-verify classes <q> [--unchecked]
//! plane-verify sweep [--moduli 2,3,5] [--unchecked] [--config <file>] [--format text|json]
//! ```
//!
//! `classes` and `sweep` exit non-zero if any identity fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use affine_plane::{enumerate, Modulus, ModulusPolicy};
use affine_plane_conformance::{run_all, ConformanceReport, Severity, SweepConfig};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Count and verify the lines of AG(2, q).
#[derive(Parser)]
#[command(
    name = "plane-verify",
    version,
    about = "Verify line and parallel-class counts of AG(2, q)"
)]
struct Cli {
    /// Tracing filter (overrides RUST_LOG), e.g. `debug` or `affine_plane=debug`.
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Count the distinct lines of AG(2, q).
    Lines(SingleArgs),
    /// List the parallel classes of AG(2, q).
    Classes(SingleArgs),
    /// Run the conformance suite over a list of moduli.
    Sweep(SweepArgs),
}

#[derive(Args)]
struct SingleArgs {
    /// Field size.
    q: u64,

    /// Accept a composite q (inverses are computed unsoundly).
    #[arg(long)]
    unchecked: bool,
}

#[derive(Args)]
struct SweepArgs {
    /// Comma-separated moduli (default: the configured or built-in list).
    #[arg(long, value_delimiter = ',')]
    moduli: Option<Vec<u64>>,

    /// Run composite moduli instead of skipping them.
    #[arg(long)]
    unchecked: bool,

    /// TOML file with `moduli` and `policy` keys.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn policy(unchecked: bool) -> ModulusPolicy {
    if unchecked {
        ModulusPolicy::Unchecked
    } else {
        ModulusPolicy::PrimeOnly
    }
}

fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log.as_deref());

    let ok = match cli.command {
        Command::Lines(args) => lines(&args)?,
        Command::Classes(args) => classes(&args)?,
        Command::Sweep(args) => sweep(args)?,
    };

    if !ok {
        process::exit(1);
    }
    Ok(())
}

fn modulus(args: &SingleArgs) -> Result<Modulus> {
    Modulus::new(args.q, policy(args.unchecked))
        .with_context(|| format!("cannot use q = {}", args.q))
}

fn lines(args: &SingleArgs) -> Result<bool> {
    let q = modulus(args)?;
    let actual = enumerate::count_distinct_lines(q);
    let expected = q.expected_lines();

    println!("Distinct lines in AG(2, {q}): {actual} (computed), {expected} (expected)");
    Ok(actual == expected)
}

fn classes(args: &SingleArgs) -> Result<bool> {
    let q = modulus(args)?;
    let classes = enumerate::parallel_classes(q);

    for (slope, intercepts) in classes.iter() {
        let label = if slope.is_vertical() { " (b = 0)" } else { "" };
        println!(
            "Slope {slope}{label}: {} lines (expected: {q})",
            intercepts.len()
        );
    }

    let summary = classes.summarize(q);
    println!(
        "Total parallel classes: {} (expected: {})",
        summary.class_count,
        q.expected_classes()
    );
    println!(
        "Total lines: {} (expected: {})",
        summary.total_lines,
        q.expected_lines()
    );

    for violation in &summary.violations {
        eprintln!("violation: {violation}");
    }
    Ok(summary.is_valid())
}

fn sweep(args: SweepArgs) -> Result<bool> {
    let mut config = match &args.config {
        Some(path) => SweepConfig::load(path)?,
        None => SweepConfig::default(),
    };
    if let Some(moduli) = args.moduli {
        config.moduli = moduli;
    }
    if args.unchecked {
        config.policy = ModulusPolicy::Unchecked;
    }
    config.validate()?;
    debug!(moduli = ?config.moduli, policy = ?config.policy, "starting sweep");

    let report = run_all(&config);
    match args.format {
        Format::Text => print_text(&report),
        Format::Json => println!(
            "{}",
            report.to_json().context("Failed to serialize report")?
        ),
    }

    Ok(report.all_passed())
}

fn print_text(report: &ConformanceReport) {
    println!("AG(2, q) Conformance Report");
    println!("===========================");
    println!();

    for result in &report.results {
        let status = match result.severity {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        };
        println!(
            "[{}] q={:<3} {} — {}",
            status, result.q, result.validator, result.message
        );
        for detail in &result.details {
            println!("       {}", detail);
        }
    }

    let summary = report.summary();
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        summary.passed, summary.warnings, summary.failed
    );

    if summary.failed > 0 {
        eprintln!(
            "Conformance FAILED: {} check(s) did not pass.",
            summary.failed
        );
    } else {
        println!("Conformance PASSED.");
    }
}
