//! Command-line interface for tictactoe_timetravel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timetravel")]
#[command(about = "Terminal tic-tac-toe with time-travel history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Show the move list newest first
        #[arg(long)]
        descending: bool,

        /// File to write logs to while the UI is running
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Replay scripted clicks and print the resulting session
    Replay {
        /// Cells to click in order, numbered 1-9 from the top-left
        #[arg(long, value_delimiter = ',')]
        moves: Vec<String>,

        /// History index to jump to after the clicks
        #[arg(long)]
        jump: Option<usize>,

        /// Show the move list newest first
        #[arg(long)]
        descending: bool,

        /// Print the session as JSON
        #[arg(long)]
        json: bool,
    },
}
