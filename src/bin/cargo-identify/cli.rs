//! CLI definitions using clap.

use std::path::PathBuf;

use clap::Parser;

/// cargo-identify - identify binary Cargo packages in workspaces
#[derive(Parser)]
#[command(name = "cargo-identify")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Candidate directories (defaults to the current directory)
    pub paths: Vec<PathBuf>,

    /// Treat every directory below each path that holds a Cargo.toml as a candidate
    #[arg(short, long)]
    pub recursive: bool,

    /// Print identified packages as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to a configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Get the candidate roots, defaulting to `.`.
    pub fn roots(&self) -> Vec<PathBuf> {
        if self.paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.paths.clone()
        }
    }
}
