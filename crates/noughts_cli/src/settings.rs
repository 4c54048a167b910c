//! Game configuration from TOML files and command-line overrides.

use derive_more::{Display, Error};
use noughts::{Controller, Difficulty, FirstPlayer, GameConfig, PlayerConfig};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Loads a game configuration from a TOML file.
///
/// ```toml
/// first_player = "random"
///
/// [first]
/// name = "Ada"
///
/// [second]
/// controller = { computer = "impossible" }
/// ```
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_config(path: impl AsRef<Path>) -> Result<GameConfig, ConfigError> {
    debug!("Loading config from file");
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

    let config: GameConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

    info!(
        first = %config.first().display_name("Player 1"),
        second = %config.second().display_name("Player 2"),
        "Config loaded successfully"
    );
    Ok(config)
}

/// Command-line settings layered over a base configuration.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Player one's name.
    pub name: Option<String>,
    /// Computer opponent for player two.
    pub computer: Option<Difficulty>,
    /// Player two's name.
    pub opponent: Option<String>,
    /// Opening policy.
    pub first: Option<FirstPlayer>,
}

impl Overrides {
    /// Applies the overrides to `base`.
    #[instrument(skip(base))]
    pub fn apply(self, base: GameConfig) -> GameConfig {
        let mut config = base;

        if let Some(name) = self.name {
            let first = config.first().clone().with_name(name);
            config = config.with_first(first);
        }

        if let Some(difficulty) = self.computer {
            let second = config
                .second()
                .clone()
                .with_controller(Controller::Computer(difficulty));
            config = config.with_second(second);
        }

        if let Some(opponent) = self.opponent {
            let second = config.second().clone().with_name(opponent);
            config = config.with_second(second);
        }

        if let Some(first) = self.first {
            config = config.with_first_player(first);
        }

        config
    }
}

/// Builds the configuration for a computer-only game.
#[instrument]
pub fn computer_match(
    first: Difficulty,
    second: Difficulty,
    opening: FirstPlayer,
    center_opening: bool,
) -> GameConfig {
    GameConfig::default()
        .with_first(PlayerConfig::computer(first).with_name(format!("Computer O ({})", first)))
        .with_second(PlayerConfig::computer(second).with_name(format!("Computer X ({})", second)))
        .with_first_player(opening)
        .with_computer_opens_center(center_opening)
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
