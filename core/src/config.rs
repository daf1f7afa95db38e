//! Battle setup.
//!
//! Rule constants are fixed (see `rules.rs`); this is only what a
//! battle starts with and how the headless runner paces it.

use crate::{
    error::{SimError, SimResult},
    rules::{DEFAULT_VOTING_DURATION, GRID_SIZE},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    pub seed:            u64,
    pub wolves:          usize,
    pub sheep:           usize,
    /// Upper bound on rounds for batch runs.
    pub max_rounds:      u64,
    /// Rounds between voting windows in batch runs. 0 disables voting.
    pub voting_interval: u64,
    pub voting_duration: u32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            wolves: 3,
            sheep: 8,
            max_rounds: 200,
            voting_interval: 10,
            voting_duration: DEFAULT_VOTING_DURATION,
        }
    }
}

impl BattleConfig {
    /// Load from a JSON file. Missing fields take their defaults.
    pub fn load(path: &str) -> SimResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: BattleConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Small fixed battle used by tests.
    pub fn default_test() -> Self {
        Self {
            seed: 7,
            wolves: 2,
            sheep: 5,
            max_rounds: 50,
            voting_interval: 5,
            voting_duration: 3,
        }
    }

    pub fn validate(&self) -> SimResult<()> {
        check_population(self.wolves, self.sheep)
    }
}

/// Every animal needs its own cell.
pub fn check_population(wolves: usize, sheep: usize) -> SimResult<()> {
    let cells = (GRID_SIZE * GRID_SIZE) as usize;
    match wolves.checked_add(sheep) {
        Some(total) if total <= cells => Ok(()),
        Some(total) => Err(SimError::InvalidConfig {
            reason: format!("{total} animals do not fit on {cells} cells"),
        }),
        None => Err(SimError::InvalidConfig {
            reason: format!("{wolves} wolves and {sheep} sheep do not fit on {cells} cells"),
        }),
    }
}
