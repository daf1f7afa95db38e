//! Shared primitive types used across the entire simulation.

/// A simulation round. The first round of a battle is round 1.
pub type Round = u64;

/// A stable, unique identifier for an animal. Opaque to consumers.
pub type EntityId = String;

/// A single grid coordinate. Signed so that step offsets can be applied
/// before bounds are checked.
pub type Coord = i32;
