use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use recovery_core::batch::run_batch;
use tracing::info;

mod cli;
mod telemetry;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    telemetry::setup_simple_tracing(cli.log_level())?;

    let summary = run_batch(&cli.files, &cli.search_config(), |recovery| {
        println!("{recovery}\n");
    });
    info!(
        processed = summary.processed(),
        recovered = summary.recovered,
        failed = summary.failures.len(),
        "batch finished"
    );

    // per-file failures are reported above and do not affect the exit code
    Ok(ExitCode::SUCCESS)
}
