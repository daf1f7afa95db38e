//! Grid positions and distances.

use crate::{rules::GRID_SIZE, types::Coord};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: Coord,
    pub y: Coord,
}

impl Position {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    pub fn in_bounds(&self) -> bool {
        (0..GRID_SIZE).contains(&self.x) && (0..GRID_SIZE).contains(&self.y)
    }

    pub fn offset(&self, dx: Coord, dy: Coord) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Euclidean distance between two cells.
pub fn distance(a: Position, b: Position) -> f64 {
    let dx = f64::from(b.x - a.x);
    let dy = f64::from(b.y - a.y);
    dx.hypot(dy)
}

/// One grid step (each axis in {-1, 0, 1}) pointing from `from` towards
/// `to`, using the sign of each axis independently.
pub fn step_towards(from: Position, to: Position) -> (Coord, Coord) {
    ((to.x - from.x).signum(), (to.y - from.y).signum())
}

/// One grid step pointing from `threat` to `from`, quantised to the eight
/// compass directions by rounding the unit vector per axis.
/// `None` when both share a cell and there is no direction to run.
pub fn step_away(from: Position, threat: Position) -> Option<(Coord, Coord)> {
    let dx = f64::from(from.x - threat.x);
    let dy = f64::from(from.y - threat.y);
    let magnitude = dx.hypot(dy);
    if magnitude == 0.0 {
        return None;
    }
    Some(((dx / magnitude).round() as Coord, (dy / magnitude).round() as Coord))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Position::new(0, 0);
        assert_eq!(distance(a, Position::new(3, 4)), 5.0);
        assert_eq!(distance(Position::new(3, 4), a), 5.0);
        assert_eq!(distance(a, a), 0.0);
        assert!((distance(a, Position::new(1, 1)) - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn bounds_cover_the_grid_only() {
        assert!(Position::new(0, 0).in_bounds());
        assert!(Position::new(GRID_SIZE - 1, GRID_SIZE - 1).in_bounds());
        assert!(!Position::new(-1, 0).in_bounds());
        assert!(!Position::new(0, GRID_SIZE).in_bounds());
    }

    #[test]
    fn step_towards_uses_axis_signs() {
        let from = Position::new(5, 5);
        assert_eq!(step_towards(from, Position::new(9, 1)), (1, -1));
        assert_eq!(step_towards(from, Position::new(5, 12)), (0, 1));
        assert_eq!(step_towards(from, Position::new(0, 5)), (-1, 0));
    }

    #[test]
    fn step_away_quantises_to_compass_directions() {
        let me = Position::new(5, 5);
        // Straight line
        assert_eq!(step_away(me, Position::new(4, 5)), Some((1, 0)));
        // Exact diagonal
        assert_eq!(step_away(me, Position::new(4, 4)), Some((1, 1)));
        // Mostly vertical: (1, 3) normalised is (0.32, 0.95)
        assert_eq!(step_away(me, Position::new(4, 2)), Some((0, 1)));
        // Same cell
        assert_eq!(step_away(me, me), None);
    }
}
