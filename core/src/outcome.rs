//! Win detection.

use crate::{entity::AnimalKind, state::SimState};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    Ongoing,
    /// Every wolf is dead.
    SheepWin,
    /// Every sheep is dead.
    WolvesWin,
    /// Both sides are gone at once (or never existed).
    Draw,
}

impl GameOutcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ongoing => f.write_str("Battle ongoing"),
            Self::SheepWin => f.write_str("Sheep Win!"),
            Self::WolvesWin => f.write_str("Wolves Win!"),
            Self::Draw => f.write_str("Draw!"),
        }
    }
}

impl SimState {
    pub fn check_game_over(&self) -> GameOutcome {
        let wolves = self.living_count(AnimalKind::Wolf);
        let sheep = self.living_count(AnimalKind::Sheep);
        match (wolves, sheep) {
            (0, 0) => GameOutcome::Draw,
            (0, _) => GameOutcome::SheepWin,
            (_, 0) => GameOutcome::WolvesWin,
            _ => GameOutcome::Ongoing,
        }
    }
}
