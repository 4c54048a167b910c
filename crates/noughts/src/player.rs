//! Players taking part in a game.

use crate::config::Controller;
use crate::strategy::{Difficulty, Strategy};
use crate::types::Mark;

/// A participant: a mark, a name, and for computer players a strategy.
#[derive(Debug)]
pub struct Player {
    mark: Mark,
    name: String,
    controller: Controller,
    strategy: Option<Box<dyn Strategy>>,
}

impl Player {
    /// Creates a player, building a strategy for computer controllers.
    pub fn new(mark: Mark, name: impl Into<String>, controller: Controller) -> Self {
        let strategy = match controller {
            Controller::Human => None,
            Controller::Computer(difficulty) => Some(difficulty.strategy()),
        };
        Self {
            mark,
            name: name.into(),
            controller,
            strategy,
        }
    }

    /// Creates a computer player around an existing strategy.
    ///
    /// `difficulty` labels the player; `strategy` decides its moves.
    pub fn with_strategy(
        mark: Mark,
        name: impl Into<String>,
        difficulty: Difficulty,
        strategy: Box<dyn Strategy>,
    ) -> Self {
        Self {
            mark,
            name: name.into(),
            controller: Controller::Computer(difficulty),
            strategy: Some(strategy),
        }
    }

    /// The player's mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How this player's moves are decided.
    pub fn controller(&self) -> Controller {
        self.controller
    }

    /// True if the engine computes this player's moves.
    pub fn is_computer(&self) -> bool {
        self.strategy.is_some()
    }

    pub(crate) fn strategy_mut(&mut self) -> Option<&mut (dyn Strategy + 'static)> {
        self.strategy.as_deref_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RandomStrategy;

    #[test]
    fn test_controller_matches_strategy() {
        let human = Player::new(Mark::First, "Ada", Controller::Human);
        assert!(!human.is_computer());
        assert!(!human.controller().is_computer());

        let computer = Player::new(Mark::Second, "HAL", Controller::Computer(Difficulty::Easy));
        assert!(computer.is_computer());
        assert!(computer.controller().is_computer());

        let seeded = Player::with_strategy(
            Mark::Second,
            "Seeded",
            Difficulty::Easy,
            Box::new(RandomStrategy::seeded(3)),
        );
        assert!(seeded.is_computer());
        assert_eq!(seeded.controller(), Controller::Computer(Difficulty::Easy));
    }
}
