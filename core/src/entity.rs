//! Animals on the grid.
//!
//! An `Entity` holds everything wolves and sheep share; the kind-specific
//! resource lives in `Traits`. Behaviour dispatches on the variant
//! (see `wolf.rs` and `sheep.rs`), there are no per-kind trait objects.
//!
//! INVARIANTS:
//!   - health ∈ [0, MAX_HEALTH] and `is_alive() == (health > 0)`.
//!   - Death is permanent: nothing heals a dead animal back to life.

use crate::{
    geometry::Position,
    rules::{MAX_ENERGY, MAX_HEALTH, MAX_STAMINA, SHEEP_DEFENSE_POWER, WOLF_ATTACK_POWER},
    types::EntityId,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimalKind {
    Wolf,
    Sheep,
}

impl fmt::Display for AnimalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wolf => f.write_str("wolf"),
            Self::Sheep => f.write_str("sheep"),
        }
    }
}

/// The most recent thing an animal did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Attack,
    Rest,
    Defend,
    Flee,
    Move,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WolfTraits {
    pub stamina:      u32,
    pub attack_power: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheepTraits {
    pub energy:        u32,
    pub defense_power: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Traits {
    Wolf(WolfTraits),
    Sheep(SheepTraits),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id:          EntityId,
    pub position:    Position,
    pub votes:       u32,
    pub last_action: Option<Action>,
    pub traits:      Traits,
    health:          u32,
    alive:           bool,
}

impl Entity {
    pub fn wolf(id: EntityId, position: Position) -> Self {
        Self::new(
            id,
            position,
            Traits::Wolf(WolfTraits {
                stamina: MAX_STAMINA,
                attack_power: WOLF_ATTACK_POWER,
            }),
        )
    }

    pub fn sheep(id: EntityId, position: Position) -> Self {
        Self::new(
            id,
            position,
            Traits::Sheep(SheepTraits {
                energy: MAX_ENERGY,
                defense_power: SHEEP_DEFENSE_POWER,
            }),
        )
    }

    pub fn spawn(kind: AnimalKind, id: EntityId, position: Position) -> Self {
        match kind {
            AnimalKind::Wolf => Self::wolf(id, position),
            AnimalKind::Sheep => Self::sheep(id, position),
        }
    }

    fn new(id: EntityId, position: Position, traits: Traits) -> Self {
        Self {
            id,
            position,
            votes: 0,
            last_action: None,
            traits,
            health: MAX_HEALTH,
            alive: true,
        }
    }

    pub fn kind(&self) -> AnimalKind {
        match self.traits {
            Traits::Wolf(_) => AnimalKind::Wolf,
            Traits::Sheep(_) => AnimalKind::Sheep,
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_living(&self, kind: AnimalKind) -> bool {
        self.alive && self.kind() == kind
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
        if self.health == 0 {
            self.alive = false;
        }
    }

    /// Restore health up to the cap. Dead animals stay dead.
    pub fn heal(&mut self, amount: u32) {
        if !self.alive {
            return;
        }
        self.health = (self.health + amount).min(MAX_HEALTH);
    }

    pub fn stamina(&self) -> Option<u32> {
        match &self.traits {
            Traits::Wolf(w) => Some(w.stamina),
            Traits::Sheep(_) => None,
        }
    }

    pub fn energy(&self) -> Option<u32> {
        match &self.traits {
            Traits::Sheep(s) => Some(s.energy),
            Traits::Wolf(_) => None,
        }
    }

    pub fn wolf_traits_mut(&mut self) -> Option<&mut WolfTraits> {
        match &mut self.traits {
            Traits::Wolf(w) => Some(w),
            Traits::Sheep(_) => None,
        }
    }

    pub fn sheep_traits_mut(&mut self) -> Option<&mut SheepTraits> {
        match &mut self.traits {
            Traits::Sheep(s) => Some(s),
            Traits::Wolf(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheep() -> Entity {
        Entity::sheep("s".into(), Position::new(1, 1))
    }

    #[test]
    fn damage_floors_at_zero_and_kills() {
        let mut s = sheep();
        s.take_damage(30);
        assert_eq!(s.health(), 70);
        assert!(s.is_alive());

        s.take_damage(500);
        assert_eq!(s.health(), 0);
        assert!(!s.is_alive());
    }

    #[test]
    fn heal_caps_at_max_health() {
        let mut s = sheep();
        s.take_damage(5);
        s.heal(40);
        assert_eq!(s.health(), MAX_HEALTH);
    }

    #[test]
    fn dead_animals_cannot_be_healed() {
        let mut s = sheep();
        s.take_damage(MAX_HEALTH);
        s.heal(20);
        assert_eq!(s.health(), 0);
        assert!(!s.is_alive());
    }

    #[test]
    fn kind_specific_resources() {
        let w = Entity::wolf("w".into(), Position::new(0, 0));
        assert_eq!(w.kind(), AnimalKind::Wolf);
        assert_eq!(w.stamina(), Some(100));
        assert_eq!(w.energy(), None);
        assert_eq!(sheep().energy(), Some(100));
        assert_eq!(sheep().stamina(), None);
    }
}
