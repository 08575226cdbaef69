//! Time-travel tic-tac-toe - unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_timetravel::{SessionReport, TuiConfig, parse_moves, render_text, replay, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command.unwrap_or(Command::Play {
        descending: false,
        log_file: None,
    }) {
        Command::Play {
            descending,
            log_file,
        } => tui::run_tui(&config.with_overrides(descending, log_file)),
        Command::Replay {
            moves,
            jump,
            descending,
            json,
        } => run_replay(&config, &moves, jump, descending, json),
    }
}

/// Replay scripted clicks and print the result to stdout
fn run_replay(
    config: &TuiConfig,
    moves: &[String],
    jump: Option<usize>,
    descending: bool,
    json: bool,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(moves = moves.len(), "Replaying scripted session");

    let positions = parse_moves(moves)?;
    let session = replay(&positions, jump, descending || *config.descending())?;

    if json {
        let report = SessionReport::new(&session);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&session));
    }
    Ok(())
}
