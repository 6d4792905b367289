//! Command-line interface for noughts.

use clap::Parser;

/// Noughts - two-player tic-tac-toe on the console
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe on the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Diagnostic log filter (e.g. "debug", "noughts=trace").
    /// Falls back to RUST_LOG, then "warn". Logs go to stderr.
    #[arg(long)]
    pub log_filter: Option<String>,
}
