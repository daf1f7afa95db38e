//! Wolves-and-sheep battle simulation core.
//!
//! Wolves hunt, sheep flee or huddle, and a player tips the balance by
//! voting for animals to heal. Everything here is synchronous and
//! single-threaded: one call, one complete state transition.

pub mod command;
pub mod config;
pub mod engine;
pub mod entity;
pub mod error;
pub mod event;
pub mod geometry;
pub mod identity;
pub mod outcome;
pub mod rng;
pub mod rules;
pub mod sheep;
pub mod snapshot;
pub mod state;
pub mod types;
pub mod voting;
pub mod wolf;
