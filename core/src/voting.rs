//! Voting: the player's lever on the battle.
//!
//! A voting window opens for a number of clock ticks. While open, votes
//! may be cast for any living animal. Closing the window heals the
//! animal with the most votes.

use crate::{
    entity::{AnimalKind, Entity},
    error::{SimError, SimResult},
    rules::VOTE_WINNER_HEAL,
    state::SimState,
    types::EntityId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingWindow {
    pub open:           bool,
    pub time_remaining: u32,
}

/// One animal's standing in a vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    pub id:    EntityId,
    pub kind:  AnimalKind,
    pub votes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingOutcome {
    pub winner:        VoteTally,
    /// Winner's health after the reward.
    pub winner_health: u32,
    /// Every living animal, in roster order.
    pub tallies:       Vec<VoteTally>,
}

impl SimState {
    /// Open a window and clear every animal's votes.
    pub fn start_voting(&mut self, duration: u32) {
        self.voting = VotingWindow { open: true, time_remaining: duration };
        for slot in 0..self.entities().len() {
            self.slot_mut(slot).votes = 0;
        }
        log::info!("round {}: voting opened for {duration}", self.round);
    }

    /// Count one vote for a living animal. `false` when the window is
    /// closed or the animal is unknown or dead.
    pub fn cast_vote(&mut self, target_id: &str) -> bool {
        if !self.voting.open {
            return false;
        }
        match self.entity_mut(target_id) {
            Some(target) if target.is_alive() => {
                target.votes += 1;
                true
            }
            Some(_) => false,
            None => {
                log::warn!("vote for unknown animal {target_id}");
                false
            }
        }
    }

    /// Close the window and heal the living animal with the most votes
    /// (ties go to the earliest in the roster).
    ///
    /// The window is closed even on error. Fails with `NoLivingEntities`
    /// when nobody is left to reward.
    pub fn end_voting(&mut self) -> SimResult<VotingOutcome> {
        if !self.voting.open {
            log::warn!("round {}: ending a voting window that was not open", self.round);
        }
        self.voting = VotingWindow::default();

        let mut winner: Option<usize> = None;
        for (slot, e) in self.entities().iter().enumerate() {
            if !e.is_alive() {
                continue;
            }
            if winner.map_or(true, |w| e.votes > self.slot(w).votes) {
                winner = Some(slot);
            }
        }
        let winner = winner.ok_or(SimError::NoLivingEntities)?;

        self.slot_mut(winner).heal(VOTE_WINNER_HEAL);

        let tally = |e: &Entity| VoteTally {
            id: e.id.clone(),
            kind: e.kind(),
            votes: e.votes,
        };
        let champion = self.slot(winner);
        let outcome = VotingOutcome {
            winner: tally(champion),
            winner_health: champion.health(),
            tallies: self.living().map(tally).collect(),
        };
        log::info!(
            "round {}: {} {} won the vote with {} votes",
            self.round,
            outcome.winner.kind,
            outcome.winner.id,
            outcome.winner.votes
        );
        Ok(outcome)
    }

    /// Advance the voting clock by one tick. Resolves the window when
    /// time runs out; closed windows ignore ticks.
    pub fn tick_voting_clock(&mut self) -> SimResult<Option<VotingOutcome>> {
        if !self.voting.open {
            return Ok(None);
        }
        self.voting.time_remaining = self.voting.time_remaining.saturating_sub(1);
        if self.voting.time_remaining > 0 {
            return Ok(None);
        }
        self.end_voting().map(Some)
    }
}
