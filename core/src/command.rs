use crate::{
    engine::BattleEngine,
    error::SimResult,
    outcome::GameOutcome,
    rules::DEFAULT_VOTING_DURATION,
    snapshot::StatusSnapshot,
    types::{EntityId, Round},
    voting::VotingOutcome,
};
use serde::{Deserialize, Serialize};

/// Everything a front end can ask the engine to do.
/// Variants are added over time, never removed or reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PlayerCommand {
    // ── Battle lifecycle ──────────────────────────
    Initialize { wolves: usize, sheep: usize },
    ExecuteRound,
    Status,

    // ── Voting ────────────────────────────────────
    StartVoting {
        #[serde(default)]
        duration: Option<u32>,
    },
    CastVote { entity_id: EntityId },
    EndVoting,
    TickVotingClock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reply", rename_all = "snake_case")]
pub enum CommandReply {
    Initialized { animals: usize },
    RoundExecuted {
        round: Round,
        messages: Vec<String>,
        outcome: GameOutcome,
    },
    Status(StatusSnapshot),
    VotingStarted { duration: u32 },
    VoteCast { entity_id: EntityId, accepted: bool },
    VotingResolved(VotingOutcome),
    VotingClock {
        time_remaining: u32,
        resolved: Option<VotingOutcome>,
    },
}

impl BattleEngine {
    /// Dispatch one command. Gameplay no-ops (a rejected vote) are
    /// successful replies; only real failures are errors.
    pub fn apply(&mut self, command: PlayerCommand) -> SimResult<CommandReply> {
        log::debug!("command: {command:?}");
        let reply = match command {
            PlayerCommand::Initialize { wolves, sheep } => {
                self.initialize_battle(wolves, sheep)?;
                CommandReply::Initialized { animals: self.state.entities().len() }
            }
            PlayerCommand::ExecuteRound => {
                let round = self.state.round;
                let messages = self.execute_round().iter().map(ToString::to_string).collect();
                CommandReply::RoundExecuted { round, messages, outcome: self.check_game_over() }
            }
            PlayerCommand::Status => CommandReply::Status(self.status()),
            PlayerCommand::StartVoting { duration } => {
                let duration = duration.unwrap_or(DEFAULT_VOTING_DURATION);
                self.start_voting(duration);
                CommandReply::VotingStarted { duration }
            }
            PlayerCommand::CastVote { entity_id } => {
                let accepted = self.cast_vote(&entity_id);
                CommandReply::VoteCast { entity_id, accepted }
            }
            PlayerCommand::EndVoting => CommandReply::VotingResolved(self.end_voting()?),
            PlayerCommand::TickVotingClock => {
                let resolved = self.tick_voting_clock()?;
                CommandReply::VotingClock {
                    time_remaining: self.state.voting.time_remaining,
                    resolved,
                }
            }
        };
        Ok(reply)
    }
}
