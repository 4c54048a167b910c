//! Noughts CLI library - terminal front end for the noughts engine
//!
//! # Architecture
//!
//! - **Cli**: clap command definitions
//! - **Settings**: TOML game configuration and command-line overrides
//! - **Play**: interactive game loop over any reader and writer
//! - **Watch**: computer-versus-computer matches with a result tally
//!
//! # Example
//!
//! ```
//! use noughts::{Difficulty, FirstPlayer};
//! use noughts_cli::{computer_match, watch};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = computer_match(Difficulty::Impossible, Difficulty::Easy, FirstPlayer::First, true);
//! let summary = watch::run(&config, 5)?;
//! assert_eq!(summary.second_wins, 0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod settings;

// Public runners
pub mod play;
pub mod watch;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Settings
pub use settings::{ConfigError, Overrides, computer_match, load_config};

// Crate-level exports - Match results
pub use watch::Summary;
