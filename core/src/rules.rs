//! Fixed game rules.
//!
//! These are the only balance numbers in the game. They are constants,
//! not configuration: battle setup lives in `config.rs`.

use crate::types::Coord;

/// Side length of the square grid. Valid coordinates are `0..GRID_SIZE`.
pub const GRID_SIZE: Coord = 20;

pub const MAX_HEALTH: u32 = 100;
pub const MAX_STAMINA: u32 = 100;
pub const MAX_ENERGY: u32 = 100;

// ── Wolves ─────────────────────────────────────────────────────
pub const WOLF_ATTACK_POWER: u32 = 20;
pub const WOLF_ATTACK_RANGE: f64 = 2.0;
pub const WOLF_PACK_BONUS: u32 = 5;
pub const WOLF_ATTACK_STAMINA_COST: u32 = 20;
pub const WOLF_REST_STAMINA: u32 = 30;

// ── Sheep ──────────────────────────────────────────────────────
pub const SHEEP_DEFENSE_POWER: u32 = 10;
pub const SHEEP_HERD_BONUS: u32 = 5;
pub const SHEEP_DEFEND_ENERGY_COST: u32 = 15;
pub const SHEEP_FLEE_ENERGY_COST: u32 = 10;
pub const SHEEP_REST_ENERGY: u32 = 25;
/// Sheep start reacting to wolves one cell beyond the wolves' reach.
pub const SHEEP_ALERT_RANGE: f64 = WOLF_ATTACK_RANGE + 1.0;

/// Radius used for pack and herd bonuses.
pub const ALLY_RANGE: f64 = 2.0;

// ── Voting ─────────────────────────────────────────────────────
pub const VOTE_WINNER_HEAL: u32 = 20;
pub const DEFAULT_VOTING_DURATION: u32 = 30;
