use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "todoz", version)]
#[command(about = "In-memory user accounts and todo lists", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print envelopes as single-line JSON
    #[arg(long, global = true)]
    pub compact: bool,

    /// Directory holding config.json
    #[arg(long, global = true, value_name = "DIR")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay the registration and todo walkthrough (default)
    Demo,

    /// Run JSON-lines requests, one envelope per request
    Run {
        /// Request file; reads stdin when omitted
        file: Option<PathBuf>,
    },
}
