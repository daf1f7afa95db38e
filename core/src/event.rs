//! Battle events: everything an animal does that a consumer should hear
//! about. `Display` renders the battle-log line for each event.
//!
//! RULE: Events are emitted only for actions that happened (or, for
//! `AttackOutOfRange`, were attempted). Silent no-ops emit nothing.

use crate::{entity::AnimalKind, geometry::Position, types::EntityId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Variants are added over time, never removed or reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BattleEvent {
    // ── Wolf events ────────────────────────────────
    Attacked {
        wolf_id: EntityId,
        target_kind: AnimalKind,
        target_id: EntityId,
        damage: u32,
        target_health: u32,
    },
    AttackOutOfRange {
        wolf_id: EntityId,
    },
    WolfRested {
        wolf_id: EntityId,
        stamina: u32,
    },
    WolfMoved {
        wolf_id: EntityId,
        to: Position,
    },

    // ── Sheep events ───────────────────────────────
    Defended {
        sheep_id: EntityId,
        healed: u32,
        health: u32,
    },
    Fled {
        sheep_id: EntityId,
        to: Position,
    },
    SheepRested {
        sheep_id: EntityId,
        energy: u32,
    },
}

impl BattleEvent {
    /// Id of the animal that acted.
    pub fn actor(&self) -> &str {
        match self {
            Self::Attacked { wolf_id, .. }
            | Self::AttackOutOfRange { wolf_id }
            | Self::WolfRested { wolf_id, .. }
            | Self::WolfMoved { wolf_id, .. } => wolf_id,
            Self::Defended { sheep_id, .. }
            | Self::Fled { sheep_id, .. }
            | Self::SheepRested { sheep_id, .. } => sheep_id,
        }
    }
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attacked { wolf_id, target_kind, target_id, damage, target_health } => write!(
                f,
                "Wolf {wolf_id} attacked {target_kind} {target_id} for {damage} damage! Target health: {target_health}"
            ),
            Self::AttackOutOfRange { wolf_id } => write!(f, "Wolf {wolf_id} is too far to attack!"),
            Self::WolfRested { wolf_id, stamina } => {
                write!(f, "Wolf {wolf_id} rested. Stamina restored to {stamina}")
            }
            Self::WolfMoved { wolf_id, .. } => write!(f, "Wolf {wolf_id} moved toward sheep"),
            Self::Defended { sheep_id, healed, health } => write!(
                f,
                "Sheep {sheep_id} defended with herd bonus! Healed for {healed}. Current health: {health}"
            ),
            Self::Fled { sheep_id, .. } => write!(f, "Sheep {sheep_id} fled from wolf!"),
            Self::SheepRested { sheep_id, energy } => {
                write!(f, "Sheep {sheep_id} rested. Energy restored to {energy}")
            }
        }
    }
}
