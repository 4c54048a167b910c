//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts::{Difficulty, FirstPlayer};

/// Noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game
    Play {
        /// TOML game configuration; the flags below override it
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Player one's name
        #[arg(long)]
        name: Option<String>,

        /// Play against the computer at this difficulty (easy, impossible)
        #[arg(long)]
        computer: Option<Difficulty>,

        /// Player two's name
        #[arg(long)]
        opponent: Option<String>,

        /// Who moves first (first, second, random)
        #[arg(long)]
        first: Option<FirstPlayer>,
    },

    /// Watch the computer play itself
    Watch {
        /// Difficulty of player one (O)
        #[arg(long, default_value = "impossible")]
        first: Difficulty,

        /// Difficulty of player two (X)
        #[arg(long, default_value = "easy")]
        second: Difficulty,

        /// Number of games to play
        #[arg(short, long, default_value = "10")]
        games: u32,

        /// Who moves first in each game (first, second, random)
        #[arg(long, default_value = "random")]
        opening: FirstPlayer,

        /// Let the opening computer search instead of taking the center
        #[arg(long)]
        no_center_opening: bool,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}
