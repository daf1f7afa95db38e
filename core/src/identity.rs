//! Entity id generation.
//!
//! Ids are v4-shaped UUIDs whose bytes come from the engine's identity
//! stream, so a seeded battle always hands out the same ids.

use crate::{rng::SimRng, types::EntityId};
use uuid::Builder;

pub struct IdGenerator {
    rng: SimRng,
}

impl IdGenerator {
    pub fn new(rng: SimRng) -> Self {
        Self { rng }
    }

    pub fn next_id(&mut self) -> EntityId {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        Builder::from_random_bytes(bytes).into_uuid().to_string()
    }
}
