//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Find the degrees of separation between two people.
#[derive(Debug, Clone, Parser)]
#[command(name = "degrees", version, about)]
pub struct Args {
    /// Directory holding people.csv, movies.csv and stars.csv.
    #[arg(default_value = "large")]
    pub directory: PathBuf,

    /// Name of the first person (prompted for when omitted).
    #[arg(long)]
    pub source: Option<String>,

    /// Name of the second person (prompted for when omitted).
    #[arg(long)]
    pub target: Option<String>,

    /// Write the search trace as canonical JSON to this file.
    #[arg(long, value_name = "PATH")]
    pub trace: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` wins.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
