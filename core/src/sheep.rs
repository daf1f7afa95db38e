//! Sheep behaviour: defend with a herd bonus, flee the nearest wolf,
//! rest to recover energy.

use crate::{
    entity::{Action, AnimalKind, Traits},
    event::BattleEvent,
    geometry::step_away,
    rules::{
        ALLY_RANGE, MAX_ENERGY, SHEEP_DEFEND_ENERGY_COST, SHEEP_FLEE_ENERGY_COST,
        SHEEP_HERD_BONUS, SHEEP_REST_ENERGY,
    },
    state::SimState,
};

impl SimState {
    /// Heal by defense power plus the herd bonus. No-op below
    /// `SHEEP_DEFEND_ENERGY_COST` energy.
    pub fn sheep_defend(&mut self, sheep_id: &str) -> Option<BattleEvent> {
        let slot = self.slot_of(sheep_id)?;
        self.defend_slot(slot)
    }

    pub(crate) fn defend_slot(&mut self, slot: usize) -> Option<BattleEvent> {
        let sheep = self.slot(slot);
        let Traits::Sheep(traits) = &sheep.traits else {
            return None;
        };
        if !sheep.is_alive() || traits.energy < SHEEP_DEFEND_ENERGY_COST {
            return None;
        }

        let herd = self.nearby_ally_slots(slot, ALLY_RANGE).len() as u32;
        let healed = traits.defense_power + SHEEP_HERD_BONUS * herd;

        let sheep = self.slot_mut(slot);
        sheep.heal(healed);
        if let Some(s) = sheep.sheep_traits_mut() {
            s.energy -= SHEEP_DEFEND_ENERGY_COST;
        }
        sheep.last_action = Some(Action::Defend);

        log::debug!("sheep {} defended for {healed} (herd={herd})", sheep.id);
        Some(BattleEvent::Defended {
            sheep_id: sheep.id.clone(),
            healed,
            health: sheep.health(),
        })
    }

    /// Step directly away from the nearest living wolf.
    ///
    /// No-op below `SHEEP_FLEE_ENERGY_COST` energy, with no wolves alive,
    /// when the wolf shares the sheep's cell, or when the step is blocked.
    pub fn sheep_flee(&mut self, sheep_id: &str) -> Option<BattleEvent> {
        let slot = self.slot_of(sheep_id)?;
        self.flee_slot(slot)
    }

    pub(crate) fn flee_slot(&mut self, slot: usize) -> Option<BattleEvent> {
        let sheep = self.slot(slot);
        let Traits::Sheep(traits) = &sheep.traits else {
            return None;
        };
        if !sheep.is_alive() || traits.energy < SHEEP_FLEE_ENERGY_COST {
            return None;
        }

        let wolf = self.nearest_living(sheep.position, AnimalKind::Wolf)?;
        let (dx, dy) = step_away(sheep.position, self.slot(wolf).position)?;
        if !self.move_slot(slot, dx, dy) {
            return None;
        }

        let sheep = self.slot_mut(slot);
        if let Some(s) = sheep.sheep_traits_mut() {
            s.energy -= SHEEP_FLEE_ENERGY_COST;
        }
        sheep.last_action = Some(Action::Flee);

        log::debug!("sheep {} fled to {}", sheep.id, sheep.position);
        Some(BattleEvent::Fled { sheep_id: sheep.id.clone(), to: sheep.position })
    }

    /// Recover energy. Always succeeds for a sheep.
    pub fn sheep_rest(&mut self, sheep_id: &str) -> Option<BattleEvent> {
        let slot = self.slot_of(sheep_id)?;
        self.sheep_rest_slot(slot)
    }

    pub(crate) fn sheep_rest_slot(&mut self, slot: usize) -> Option<BattleEvent> {
        let sheep = self.slot_mut(slot);
        let traits = sheep.sheep_traits_mut()?;
        traits.energy = (traits.energy + SHEEP_REST_ENERGY).min(MAX_ENERGY);
        let energy = traits.energy;
        sheep.last_action = Some(Action::Rest);
        Some(BattleEvent::SheepRested { sheep_id: sheep.id.clone(), energy })
    }
}
