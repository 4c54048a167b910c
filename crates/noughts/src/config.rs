//! Plain-data game configuration.
//!
//! Front-ends build these (from flags, a form, a TOML file) and hand them to
//! [`GameEngine::new`](crate::GameEngine::new).

use crate::strategy::Difficulty;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Who decides a player's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Controller {
    /// Moves arrive through `submit_move`.
    #[default]
    Human,
    /// Moves are computed at the given difficulty.
    Computer(Difficulty),
}

impl Controller {
    /// True for computer-controlled players.
    pub fn is_computer(self) -> bool {
        matches!(self, Controller::Computer(_))
    }
}

/// Which player opens the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FirstPlayer {
    /// Player one moves first.
    #[default]
    First,
    /// Player two moves first.
    Second,
    /// A coin flip decides.
    Random,
}

/// One player's settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct PlayerConfig {
    /// Display name; blank picks a default.
    #[serde(default)]
    #[setters(into)]
    name: String,

    /// Human or computer.
    #[serde(default)]
    controller: Controller,
}

impl PlayerConfig {
    /// A human player with the given name.
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            controller: Controller::Human,
        }
    }

    /// An unnamed computer player.
    pub fn computer(difficulty: Difficulty) -> Self {
        Self {
            name: String::new(),
            controller: Controller::Computer(difficulty),
        }
    }

    /// The name to show, falling back to `default_name` (or "Computer" for
    /// computer players) when none was given.
    #[instrument(skip(self))]
    pub fn display_name(&self, default_name: &str) -> String {
        let name = self.name.trim();
        if !name.is_empty() {
            name.to_string()
        } else if self.controller.is_computer() {
            "Computer".to_string()
        } else {
            default_name.to_string()
        }
    }
}

/// Settings for one game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Player one, playing `O`.
    #[serde(default)]
    first: PlayerConfig,

    /// Player two, playing `X`.
    #[serde(default)]
    second: PlayerConfig,

    /// Opening policy.
    #[serde(default)]
    first_player: FirstPlayer,

    /// A computer making the first move of the game takes the center.
    #[serde(default = "default_opens_center")]
    computer_opens_center: bool,
}

fn default_opens_center() -> bool {
    true
}

impl GameConfig {
    /// Human vs. computer at the given difficulty.
    pub fn against_computer(name: impl Into<String>, difficulty: Difficulty) -> Self {
        Self::default()
            .with_first(PlayerConfig::human(name))
            .with_second(PlayerConfig::computer(difficulty))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first: PlayerConfig::default(),
            second: PlayerConfig::default(),
            first_player: FirstPlayer::default(),
            computer_opens_center: default_opens_center(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_defaults() {
        assert_eq!(PlayerConfig::default().display_name("Player 1"), "Player 1");
        assert_eq!(PlayerConfig::human("  Ada ").display_name("Player 1"), "Ada");
        assert_eq!(
            PlayerConfig::computer(Difficulty::Easy).display_name("Player 2"),
            "Computer"
        );
        assert_eq!(
            PlayerConfig::computer(Difficulty::Easy)
                .with_name("HAL")
                .display_name("Player 2"),
            "HAL"
        );
    }

    #[test]
    fn test_against_computer() {
        let config = GameConfig::against_computer("Ada", Difficulty::Impossible);
        assert_eq!(config.first().name(), "Ada");
        assert_eq!(
            *config.second().controller(),
            Controller::Computer(Difficulty::Impossible)
        );
        assert!(*config.computer_opens_center());
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = GameConfig::against_computer("Ada", Difficulty::Easy)
            .with_first_player(FirstPlayer::Random);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
