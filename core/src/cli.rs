use std::path::PathBuf;

use clap::{ArgAction, Parser};
use math::lagrange::DivisionMode;
use recovery_core::params::SearchConfig;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "recover-secret")]
#[command(
    about = "Recover the constant term of a polynomial from possibly corrupted shares",
    long_about = None
)]
pub struct Cli {
    /// Instance files to process, in order
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `-vvv`
    /// will give you trace level output
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Score subsets on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Treat non-integer interpolated values as errors instead of truncating
    #[arg(long)]
    pub strict: bool,

    /// Keep searching after a subset already matches every share
    #[arg(long)]
    pub exhaustive: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,
                1 => Level::INFO,
                2 => Level::DEBUG,
                _ => Level::TRACE,
            }
        }
    }

    pub fn search_config(&self) -> SearchConfig {
        let division = if self.strict {
            DivisionMode::Exact
        } else {
            DivisionMode::Truncating
        };
        SearchConfig::default()
            .with_parallel(self.parallel)
            .with_division(division)
            .with_stop_on_full_support(!self.exhaustive)
    }
}
