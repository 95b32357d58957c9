use clap::{Args, Parser, Subcommand};
use focuspath_domain::Quadrant;
use std::path::PathBuf;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_COMMIT_HASH"), ")");

#[derive(Parser)]
#[command(name = "focuspath")]
#[command(about = "Sort a brain dump into an Eisenhower matrix", long_about = None)]
#[command(version = VERSION)]
pub struct Cli {
    /// Config file (default: focuspath/config.toml in the platform config dir)
    #[arg(long, global = true, value_name = "PATH", env = "FOCUSPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Model used for classification
    #[arg(long, global = true, env = "FOCUSPATH_MODEL")]
    pub model: Option<String>,

    /// Base URL of the generative language API
    #[arg(long, global = true, env = "FOCUSPATH_ENDPOINT")]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a brain dump and print the plan as JSON
    Analyze(AnalyzeArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// File with the brain dump; reads stdin when omitted or `-`
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Only print tasks with at least this urgency (1-10)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub min_urgency: Option<u8>,

    /// Only print tasks with at least this importance (1-10)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub min_importance: Option<u8>,

    /// Only print tasks whose title, time or rationale contains this text
    #[arg(long)]
    pub search: Option<String>,

    /// Only print tasks in this quadrant (DO_FIRST, SCHEDULE, DELEGATE, ELIMINATE)
    #[arg(long)]
    pub quadrant: Option<Quadrant>,
}
