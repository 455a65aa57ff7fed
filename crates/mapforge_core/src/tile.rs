//! Tile contents
//!
//! A `Tile` is a copyable snapshot of everything occupying one map cell.
//! The undo system relies on tiles being plain values: commands hold
//! independent clones, never references into live map storage.

use serde::{Deserialize, Serialize};

/// One item stacked on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item type id.
    pub id: u32,
    /// Stack count for stackable items; 1 otherwise.
    pub count: u8,
}

impl Item {
    pub fn new(id: u32) -> Self {
        Self { id, count: 1 }
    }

    pub fn with_count(id: u32, count: u8) -> Self {
        Self { id, count }
    }
}

/// A creature placed on a tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    pub name: String,
}

impl Creature {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The contents of one map cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tile {
    /// The ground item, if any.
    pub ground: Option<Item>,
    /// Items stacked on top of the ground, bottom first.
    pub items: Vec<Item>,
    /// At most one creature per tile.
    pub creature: Option<Creature>,
}

impl Tile {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tile consisting of a single ground item.
    pub fn with_ground(item: Item) -> Self {
        Self {
            ground: Some(item),
            ..Self::default()
        }
    }

    /// Returns `true` if the tile holds nothing at all.
    pub fn is_empty(&self) -> bool {
        self.ground.is_none() && self.items.is_empty() && self.creature.is_none()
    }

    /// Add an item on top of the stack.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// The topmost item, or the ground if the stack is empty.
    pub fn top_item(&self) -> Option<&Item> {
        self.items.last().or(self.ground.as_ref())
    }
}
