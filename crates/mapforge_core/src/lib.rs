//! Core data structures for mapforge
//!
//! This crate provides the fundamental types for representing tile-based maps:
//! - `Position` - A 3D map cell coordinate
//! - `Tile` - The contents of one cell (ground, items, creature)
//! - `Map` - Sparse tile storage addressed by position
//! - `Project` - The set of maps open in an editing session

mod io;
mod map;
mod position;
mod project;
mod tile;

pub use io::{load_map, save_map, MapError};
pub use map::Map;
pub use position::{Position, GROUND_FLOOR, MAX_FLOOR};
pub use project::Project;
pub use tile::{Creature, Item, Tile};
