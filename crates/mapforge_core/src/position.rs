//! Map cell coordinates

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 3D map cell coordinate.
///
/// `x`/`y` address the horizontal plane, `z` is the floor. Positions are
/// plain values: two commands touching the same cell compare equal positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: u16,
    pub y: u16,
    pub z: u8,
}

/// The highest valid floor index.
pub const MAX_FLOOR: u8 = 15;

/// The ground-level floor.
pub const GROUND_FLOOR: u8 = 7;

impl Position {
    pub fn new(x: u16, y: u16, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Returns `true` if the floor index is within the valid range.
    pub fn is_valid_floor(&self) -> bool {
        self.z <= MAX_FLOOR
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
