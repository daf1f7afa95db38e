//! Simulation state: the roster, turn order, voting window, round
//! counter and battle log.
//!
//! RULE: Only the state mutates animals. Wolf and sheep behaviour are
//! `impl SimState` blocks in their own modules, addressing animals by
//! roster slot. Slots are stable because animals are never removed:
//! death is `is_alive() == false`, not removal.
//!
//! Nothing here caches a lookup across calls. Every "nearest" or
//! "nearby" query is resolved against the current roster, since animals
//! move and die within a single round.

use crate::{
    entity::{AnimalKind, Entity},
    event::BattleEvent,
    geometry::{distance, Position},
    rng::SimRng,
    types::{Coord, EntityId, Round},
    voting::VotingWindow,
};

#[derive(Debug, Clone)]
pub struct SimState {
    entities:   Vec<Entity>,
    turn_order: Vec<EntityId>,
    pub round:  Round,
    pub voting: VotingWindow,
    battle_log: Vec<Vec<BattleEvent>>,
}

impl Default for SimState {
    fn default() -> Self {
        Self::new()
    }
}

impl SimState {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            turn_order: Vec::new(),
            round: 1,
            voting: VotingWindow::default(),
            battle_log: Vec::new(),
        }
    }

    // ── Roster ─────────────────────────────────────────────────

    /// Append an animal and reshuffle the turn order.
    pub fn add_entity(&mut self, entity: Entity, rng: &mut SimRng) {
        log::debug!(
            "added {} {} at {}",
            entity.kind(),
            entity.id,
            entity.position
        );
        self.entities.push(entity);
        self.update_turn_order(rng);
    }

    /// All animals, dead ones included, in creation order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn entity_mut(&mut self, id: &str) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn slot_of(&self, id: &str) -> Option<usize> {
        self.entities.iter().position(|e| e.id == id)
    }

    pub(crate) fn slot(&self, slot: usize) -> &Entity {
        &self.entities[slot]
    }

    pub(crate) fn slot_mut(&mut self, slot: usize) -> &mut Entity {
        &mut self.entities[slot]
    }

    pub fn living(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.is_alive())
    }

    pub fn living_count(&self, kind: AnimalKind) -> usize {
        self.entities.iter().filter(|e| e.is_living(kind)).count()
    }

    /// Whether a living animal other than `except` stands on `cell`.
    pub fn is_occupied(&self, cell: Position, except: Option<usize>) -> bool {
        self.entities
            .iter()
            .enumerate()
            .any(|(slot, e)| Some(slot) != except && e.is_alive() && e.position == cell)
    }

    // ── Turn order ─────────────────────────────────────────────

    /// Living ids in a freshly shuffled order.
    pub fn turn_order(&self) -> &[EntityId] {
        &self.turn_order
    }

    pub fn update_turn_order(&mut self, rng: &mut SimRng) {
        self.turn_order = self.living().map(|e| e.id.clone()).collect();
        rng.shuffle(&mut self.turn_order);
    }

    // ── Movement and spatial queries ───────────────────────────

    /// Move an animal by one step. Fails without mutation when the step
    /// is longer than one cell, leaves the grid, or lands on a living
    /// animal.
    pub fn move_entity(&mut self, id: &str, dx: Coord, dy: Coord) -> bool {
        match self.slot_of(id) {
            Some(slot) => self.move_slot(slot, dx, dy),
            None => false,
        }
    }

    pub(crate) fn move_slot(&mut self, slot: usize, dx: Coord, dy: Coord) -> bool {
        if dx.abs() > 1 || dy.abs() > 1 {
            return false;
        }
        let target = self.entities[slot].position.offset(dx, dy);
        if !target.in_bounds() || self.is_occupied(target, Some(slot)) {
            return false;
        }
        self.entities[slot].position = target;
        true
    }

    /// Living animals of the same kind within `range` (inclusive),
    /// excluding the animal itself.
    pub fn nearby_allies(&self, id: &str, range: f64) -> Vec<&Entity> {
        match self.slot_of(id) {
            Some(slot) => self
                .nearby_ally_slots(slot, range)
                .into_iter()
                .map(|s| &self.entities[s])
                .collect(),
            None => Vec::new(),
        }
    }

    pub(crate) fn nearby_ally_slots(&self, slot: usize, range: f64) -> Vec<usize> {
        let me = &self.entities[slot];
        self.entities
            .iter()
            .enumerate()
            .filter(|(other, e)| {
                *other != slot
                    && e.is_living(me.kind())
                    && distance(me.position, e.position) <= range
            })
            .map(|(other, _)| other)
            .collect()
    }

    /// Nearest living animal of `kind` to `from`. Ties go to the
    /// earliest in the roster.
    pub(crate) fn nearest_living(&self, from: Position, kind: AnimalKind) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (slot, e) in self.entities.iter().enumerate() {
            if !e.is_living(kind) {
                continue;
            }
            let d = distance(from, e.position);
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((slot, d));
            }
        }
        best.map(|(slot, _)| slot)
    }

    /// Living animals of `kind` within `range` (inclusive) of `from`.
    pub(crate) fn living_within(&self, from: Position, kind: AnimalKind, range: f64) -> usize {
        self.entities
            .iter()
            .filter(|e| e.is_living(kind) && distance(from, e.position) <= range)
            .count()
    }

    // ── Battle log ─────────────────────────────────────────────

    pub fn battle_log(&self) -> &[Vec<BattleEvent>] {
        &self.battle_log
    }

    /// Close the current round: log its events and advance the counter.
    pub(crate) fn finish_round(&mut self, events: Vec<BattleEvent>) {
        self.battle_log.push(events);
        self.round += 1;
    }
}
