use crate::types::scoring::StrategyKind;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "majormatch",
    version,
    about = "Assessment profiling and university major compatibility CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors and skip status messages; reports are still printed
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding majormatch.toml; relative store paths resolve here
    #[arg(long, global = true, default_value = ".")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Derive a DNA profile from an assessment file
    Analyze(AnalyzeCommand),
    /// Analyze an assessment and store it as the user's profile
    Submit(SubmitCommand),
    /// Rank the catalog for an assessment without storing anything
    Match(MatchCommand),
    /// Rank the catalog for a stored profile and keep a snapshot
    Recommend(RecommendCommand),
    /// List stored recommendation snapshots
    History(HistoryCommand),
    /// Explain the highlighted majors for a stored profile
    Explain(ExplainCommand),
    /// List the majors catalog
    Majors(MajorsCommand),
}

#[derive(Args)]
pub struct AnalyzeCommand {
    #[arg(long)]
    pub input: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct SubmitCommand {
    #[arg(long)]
    pub user: String,
    #[arg(long)]
    pub input: PathBuf,
}

#[derive(Args)]
pub struct MatchCommand {
    #[arg(long)]
    pub input: PathBuf,
    /// Overrides scoring.strategy from config
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyKind>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Catalog JSON file; defaults to store.catalog or the bundled catalog
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Args)]
pub struct RecommendCommand {
    #[arg(long)]
    pub user: String,
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyKind>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct HistoryCommand {
    #[arg(long)]
    pub user: String,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ExplainCommand {
    #[arg(long)]
    pub user: String,
    /// File holding a text generator response to use instead of templates
    #[arg(long)]
    pub ai_output: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyKind>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct MajorsCommand {
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
