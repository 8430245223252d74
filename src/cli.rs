use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "profile-score",
    version,
    about = "Intranet profile completion scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print only reports and errors; silences logs and warnings
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory containing profile-score.toml
    #[arg(long, global = true, default_value = ".")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a single profile snapshot
    Score(ScoreCommand),
    /// Score every snapshot file under a directory
    Batch(BatchCommand),
    /// List the fields still missing from a profile
    Gaps(GapsCommand),
    /// Print the effective category weights
    Weights,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Snapshot JSON file, or - for stdin
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct BatchCommand {
    pub dir: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct GapsCommand {
    /// Snapshot JSON file, or - for stdin
    pub path: PathBuf,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
