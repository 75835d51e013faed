use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "occurs", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Text files to check (default: stdin)
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// YAML suite of containment checks
    #[arg(long, value_name = "FILE")]
    pub suite: Option<PathBuf>,

    /// Number of parallel workers (default: CPU count)
    #[arg(long, global = true)]
    pub jobs: Option<usize>,

    /// Emit progress to stderr
    #[arg(long, global = true)]
    pub progress: bool,

    /// Print operator.json and exit
    #[arg(long)]
    pub describe: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Count occurrences of terms in each input
    Count {
        /// Term to count (repeatable; reported in CLI order)
        #[arg(long = "term", value_name = "TERM", required = true)]
        terms: Vec<String>,

        /// Compare ignoring case
        #[arg(long)]
        ignore_case: bool,

        /// Text files to read (default: stdin)
        #[arg(value_name = "INPUT")]
        inputs: Vec<PathBuf>,
    },
}
