//! Noughts - terminal tic-tac-toe
//!
//! Play against a friend or the computer, or watch the computer play itself.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{Difficulty, FirstPlayer, GameConfig, GameEngine};
use noughts_cli::{Cli, Command, Overrides, computer_match, load_config, play, watch};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            name,
            computer,
            opponent,
            first,
        } => run_play(
            config,
            Overrides {
                name,
                computer,
                opponent,
                first,
            },
        ),
        Command::Watch {
            first,
            second,
            games,
            opening,
            no_center_opening,
            json,
        } => run_watch(first, second, games, opening, !no_center_opening, json),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(overrides))]
fn run_play(config: Option<PathBuf>, overrides: Overrides) -> Result<()> {
    let base = match config {
        Some(path) => load_config(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    let config = overrides.apply(base);

    let game = GameEngine::new(config).context("Failed to start game")?;
    let stdin = std::io::stdin();
    let played = play::run(game, stdin.lock(), std::io::stdout())?;

    info!(played, "Session over");
    Ok(())
}

/// Run a computer-only match and print the tally
#[instrument]
fn run_watch(
    first: Difficulty,
    second: Difficulty,
    games: u32,
    opening: FirstPlayer,
    center_opening: bool,
    json: bool,
) -> Result<()> {
    let config = computer_match(first, second, opening, center_opening);
    let summary = watch::run(&config, games)?;

    if json {
        let out = serde_json::to_string_pretty(&summary).context("Failed to encode summary")?;
        println!("{}", out);
    } else {
        println!("{}", summary);
    }
    Ok(())
}
