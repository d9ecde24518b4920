//! myproject — Conformance Harness
//!
//! Loads the reference fixture cases and replays them through the
//! arithmetic, printing one line per case.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use myproject::conformance::run_cases;
use myproject::fixtures::load_cases;

const DEFAULT_FIXTURE_PATHS: &[&str] = &[
    "tests/fixtures/cases.json",
    "myproject/tests/fixtures/cases.json",
];

#[derive(Debug, Parser)]
#[command(version, about = "Replay arithmetic fixture cases")]
struct Args {
    /// Fixture file. Searched for in the usual places when omitted.
    fixtures: Option<PathBuf>,
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn find_fixtures() -> Option<PathBuf> {
    DEFAULT_FIXTURE_PATHS
        .iter()
        .map(Path::new)
        .find(|p| p.exists())
        .map(Path::to_path_buf)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let Some(path) = args.fixtures.or_else(find_fixtures) else {
        tracing::error!("no fixture file given and none found in {:?}", DEFAULT_FIXTURE_PATHS);
        return ExitCode::FAILURE;
    };

    let cases = match load_cases(&path) {
        Ok(cases) => cases,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(path = %path.display(), "loaded {} cases", cases.len());

    let report = run_cases(&cases);
    for case in &cases {
        match report.failures.iter().find(|f| &f.case == case) {
            Some(failure) => println!("[FAIL] {case} (got {})", failure.actual),
            None => println!("[PASS] {case}"),
        }
    }

    println!("\n===========================================");
    println!("Results: {}/{} passed", report.passed, report.total);
    if report.all_passed() {
        println!("[OK] All arithmetic cases PASSED.");
        ExitCode::SUCCESS
    } else {
        println!("[FAIL] Some cases failed.");
        ExitCode::FAILURE
    }
}
