//! Computer-versus-computer matches.

use anyhow::{Context, Result};
use noughts::{GameConfig, GameEngine, Mark, Outcome};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Tally of a series of games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Name of player one.
    pub first: String,
    /// Name of player two.
    pub second: String,
    /// Games played.
    pub games: u32,
    /// Games won by player one.
    pub first_wins: u32,
    /// Games won by player two.
    pub second_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Summary {
    fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Win(Mark::First) => self.first_wins += 1,
            Outcome::Win(Mark::Second) => self.second_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} games", self.games)?;
        writeln!(f, "  {}: {} wins", self.first, self.first_wins)?;
        writeln!(f, "  {}: {} wins", self.second, self.second_wins)?;
        write!(f, "  Draws: {}", self.draws)
    }
}

/// Plays `games` computer-only games and tallies the results.
///
/// Every player in `config` should be a computer; a game that stops
/// waiting for a human is an error.
#[instrument(skip(config))]
pub fn run(config: &GameConfig, games: u32) -> Result<Summary> {
    let mut summary = Summary::default();

    for index in 0..games {
        let game = GameEngine::new(config.clone())
            .with_context(|| format!("Game {} failed", index + 1))?;

        if summary.first.is_empty() {
            summary.first = game.player(Mark::First).name().to_string();
            summary.second = game.player(Mark::Second).name().to_string();
        }

        let outcome = game
            .outcome()
            .with_context(|| format!("Game {} is waiting for a human player", index + 1))?;
        debug!(game = index + 1, %outcome, moves = game.history().len(), "Game complete");
        summary.record(outcome);
    }

    info!(
        games = summary.games,
        first_wins = summary.first_wins,
        second_wins = summary.second_wins,
        draws = summary.draws,
        "Match complete"
    );
    Ok(summary)
}
