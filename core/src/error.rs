use thiserror::Error;

use crate::types::Coord;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No living entities to resolve the vote")]
    NoLivingEntities,

    #[error("Position ({x}, {y}) is outside the grid")]
    OutOfBounds { x: Coord, y: Coord },

    #[error("Cell ({x}, {y}) is already occupied")]
    CellOccupied { x: Coord, y: Coord },

    #[error("Invalid battle config: {reason}")]
    InvalidConfig { reason: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
