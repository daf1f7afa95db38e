//! Read-only status snapshot for renderers.
//!
//! A snapshot is a detached copy: holding one never borrows the engine,
//! and it serializes straight to JSON for the runner's command loop.

use crate::{
    entity::{Action, AnimalKind, Entity},
    geometry::Position,
    outcome::GameOutcome,
    state::SimState,
    types::{EntityId, Round},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub round:                 Round,
    pub voting_open:           bool,
    pub voting_time_remaining: u32,
    pub outcome:               GameOutcome,
    /// Every animal, dead ones included, in creation order.
    pub animals:               Vec<AnimalStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalStatus {
    pub id:          EntityId,
    pub kind:        AnimalKind,
    pub health:      u32,
    pub is_alive:    bool,
    pub position:    Position,
    pub last_action: Option<Action>,
    pub votes:       u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stamina:     Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy:      Option<u32>,
}

impl From<&Entity> for AnimalStatus {
    fn from(e: &Entity) -> Self {
        Self {
            id: e.id.clone(),
            kind: e.kind(),
            health: e.health(),
            is_alive: e.is_alive(),
            position: e.position,
            last_action: e.last_action,
            votes: e.votes,
            stamina: e.stamina(),
            energy: e.energy(),
        }
    }
}

impl SimState {
    pub fn status(&self) -> StatusSnapshot {
        StatusSnapshot {
            round: self.round,
            voting_open: self.voting.open,
            voting_time_remaining: self.voting.time_remaining,
            outcome: self.check_game_over(),
            animals: self.entities().iter().map(AnimalStatus::from).collect(),
        }
    }
}
