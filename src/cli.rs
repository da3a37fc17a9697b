//! Command-line interface for the quoridor binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Quoridor - two-player Quoridor in the terminal
#[derive(Parser, Debug)]
#[command(name = "quoridor")]
#[command(about = "Play or replay Quoridor games from text commands", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the session config file
    #[arg(short, long, global = true, default_value = "quoridor.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play,

    /// Run a command script and print the final board
    Replay {
        /// Script file, one command per line
        script: PathBuf,
    },
}
