//! The battle engine: owns the state and every RNG stream, and runs
//! rounds.
//!
//! ROUND ORDER (one pass per `execute_round`):
//!   1. Reshuffle the turn order over living animals.
//!   2. Each animal in turn order acts, unless it died earlier this round.
//!        Wolf:  attack the nearest sheep if in range, else step toward it.
//!        Sheep: with a wolf close by, flee, or defend if fleeing fails;
//!               otherwise rest.
//!   3. Log the round's events and advance the round counter.
//!
//! RULES:
//!   - All randomness flows through the RngBank.
//!   - Targets are re-resolved on every turn, never carried over.

use crate::{
    config::{check_population, BattleConfig},
    entity::{Action, AnimalKind, Entity},
    error::{SimError, SimResult},
    event::BattleEvent,
    geometry::{distance, step_towards, Position},
    identity::IdGenerator,
    outcome::GameOutcome,
    rng::{RngBank, SimRng, StreamSlot},
    rules::{GRID_SIZE, SHEEP_ALERT_RANGE, WOLF_ATTACK_RANGE},
    snapshot::StatusSnapshot,
    state::SimState,
    types::{EntityId, Round},
    voting::VotingOutcome,
};

pub struct BattleEngine {
    pub state:     SimState,
    pub rng_bank:  RngBank,
    placement_rng: SimRng,
    turn_rng:      SimRng,
    ids:           IdGenerator,
}

impl BattleEngine {
    /// An empty battlefield. Populate it with `initialize_battle` or
    /// `spawn`.
    pub fn new(seed: u64) -> Self {
        let rng_bank = RngBank::new(seed);
        Self {
            state: SimState::new(),
            placement_rng: rng_bank.for_stream(StreamSlot::Placement),
            turn_rng: rng_bank.for_stream(StreamSlot::TurnOrder),
            ids: IdGenerator::new(rng_bank.for_stream(StreamSlot::Identity)),
            rng_bank,
        }
    }

    /// Build an engine with a battle already set up from `config`.
    pub fn build(config: &BattleConfig) -> SimResult<Self> {
        config.validate()?;
        let mut engine = Self::new(config.seed);
        engine.initialize_battle(config.wolves, config.sheep)?;
        Ok(engine)
    }

    /// Reset the state and scatter the animals over distinct random
    /// cells, wolves first.
    pub fn initialize_battle(&mut self, wolves: usize, sheep: usize) -> SimResult<()> {
        check_population(wolves, sheep)?;
        self.state = SimState::new();

        let cells: Vec<Position> = (0..GRID_SIZE)
            .flat_map(|y| (0..GRID_SIZE).map(move |x| Position::new(x, y)))
            .collect();
        let spots = self.placement_rng.sample(&cells, wolves + sheep);

        for (i, position) in spots.into_iter().enumerate() {
            let kind = if i < wolves { AnimalKind::Wolf } else { AnimalKind::Sheep };
            let id = self.fresh_id();
            self.state.add_entity(Entity::spawn(kind, id, position), &mut self.turn_rng);
        }

        log::info!(
            "battle initialized: {wolves} wolves, {sheep} sheep (seed {})",
            self.rng_bank.master_seed()
        );
        Ok(())
    }

    /// Place one animal on a chosen cell.
    pub fn spawn(&mut self, kind: AnimalKind, position: Position) -> SimResult<EntityId> {
        if !position.in_bounds() {
            return Err(SimError::OutOfBounds { x: position.x, y: position.y });
        }
        if self.state.is_occupied(position, None) {
            return Err(SimError::CellOccupied { x: position.x, y: position.y });
        }
        let id = self.fresh_id();
        self.state.add_entity(Entity::spawn(kind, id.clone(), position), &mut self.turn_rng);
        Ok(id)
    }

    fn fresh_id(&mut self) -> EntityId {
        loop {
            let id = self.ids.next_id();
            if self.state.slot_of(&id).is_none() {
                return id;
            }
        }
    }

    /// Advance the battle by one round. Returns the round's events in
    /// the order they happened.
    pub fn execute_round(&mut self) -> Vec<BattleEvent> {
        let round = self.state.round;
        self.state.update_turn_order(&mut self.turn_rng);
        let order = self.state.turn_order().to_vec();

        let mut events = Vec::new();
        for id in &order {
            let Some(slot) = self.state.slot_of(id) else {
                continue;
            };
            if !self.state.slot(slot).is_alive() {
                continue;
            }
            let event = match self.state.slot(slot).kind() {
                AnimalKind::Wolf => self.wolf_turn(slot),
                AnimalKind::Sheep => self.sheep_turn(slot),
            };
            events.extend(event);
        }

        log::debug!("round {round}: {} events, {} turns", events.len(), order.len());
        self.state.finish_round(events.clone());
        events
    }

    fn wolf_turn(&mut self, slot: usize) -> Option<BattleEvent> {
        let here = self.state.slot(slot).position;
        let prey = self.state.nearest_living(here, AnimalKind::Sheep)?;
        let there = self.state.slot(prey).position;

        if distance(here, there) <= WOLF_ATTACK_RANGE {
            return self.state.attack_slot(slot, prey);
        }

        let (dx, dy) = step_towards(here, there);
        if !self.state.move_slot(slot, dx, dy) {
            return None;
        }
        let wolf = self.state.slot_mut(slot);
        wolf.last_action = Some(Action::Move);
        Some(BattleEvent::WolfMoved { wolf_id: wolf.id.clone(), to: wolf.position })
    }

    fn sheep_turn(&mut self, slot: usize) -> Option<BattleEvent> {
        let here = self.state.slot(slot).position;
        if self.state.living_within(here, AnimalKind::Wolf, SHEEP_ALERT_RANGE) == 0 {
            return self.state.sheep_rest_slot(slot);
        }
        self.state
            .flee_slot(slot)
            .or_else(|| self.state.defend_slot(slot))
    }

    /// Run up to `rounds` rounds, stopping as soon as the battle is over.
    pub fn run_rounds(&mut self, rounds: Round) -> GameOutcome {
        for _ in 0..rounds {
            let outcome = self.check_game_over();
            if outcome.is_over() {
                return outcome;
            }
            self.execute_round();
        }
        self.check_game_over()
    }

    // ── Voting, win detection and status ──────────────────────

    pub fn start_voting(&mut self, duration: u32) {
        self.state.start_voting(duration);
    }

    pub fn cast_vote(&mut self, id: &str) -> bool {
        self.state.cast_vote(id)
    }

    pub fn end_voting(&mut self) -> SimResult<VotingOutcome> {
        self.state.end_voting()
    }

    pub fn tick_voting_clock(&mut self) -> SimResult<Option<VotingOutcome>> {
        self.state.tick_voting_clock()
    }

    pub fn check_game_over(&self) -> GameOutcome {
        self.state.check_game_over()
    }

    pub fn status(&self) -> StatusSnapshot {
        self.state.status()
    }

    /// Every logged round's events, rendered as battle-log lines.
    pub fn log_lines(&self) -> Vec<Vec<String>> {
        self.state
            .battle_log()
            .iter()
            .map(|round| round.iter().map(ToString::to_string).collect())
            .collect()
    }
}
