//! Sparse tile storage

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::{Position, Tile};

/// A map: sparse tile storage addressed by [`Position`].
///
/// Only occupied cells are stored. Clearing a cell removes its entry, so
/// `get_tile` returning `None` means "empty cell" and round-trips through
/// serialization without bloat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Map {
    pub id: Uuid,
    pub name: String,
    // Serialized as a sequence of (position, tile) pairs: JSON object keys
    // must be strings, so the map form would not survive serde_json.
    #[serde(with = "tiles_as_entries")]
    tiles: HashMap<Position, Tile>,
}

mod tiles_as_entries {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        tiles: &HashMap<Position, Tile>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(tiles.iter())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<HashMap<Position, Tile>, D::Error> {
        let entries = Vec::<(Position, Tile)>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

impl Map {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            tiles: HashMap::new(),
        }
    }

    /// Get the tile at `position`, or `None` if the cell is empty.
    pub fn get_tile(&self, position: Position) -> Option<&Tile> {
        self.tiles.get(&position)
    }

    /// An owned copy of the tile at `position`, for undo snapshots.
    pub fn tile_snapshot(&self, position: Position) -> Option<Tile> {
        self.tiles.get(&position).cloned()
    }

    /// Replace the tile at `position`. `None` clears the cell.
    pub fn set_tile(&mut self, position: Position, tile: Option<Tile>) {
        match tile {
            Some(tile) => {
                self.tiles.insert(position, tile);
            }
            None => {
                self.tiles.remove(&position);
            }
        }
    }

    /// Number of occupied cells.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Iterate over all occupied cells.
    pub fn tiles(&self) -> impl Iterator<Item = (&Position, &Tile)> {
        self.tiles.iter()
    }
}
