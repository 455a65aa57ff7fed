//! Undo/redo command system for mapforge
//!
//! Edits are expressed as [`EditCommand`] values and routed through a
//! [`CommandHistory`], which owns the undo and redo stacks. Single-tile
//! edits made in quick succession at the same cell coalesce into one
//! history entry when grouping is enabled in [`UndoSettings`], so a brush
//! drag undoes as a single step without an explicit begin/end batch API.
//!
//! The whole system is synchronous and single-threaded: the hosting editor
//! calls into the history from its event loop, and no two commands ever
//! touch a map concurrently.

mod command;
mod history;
mod settings;

pub use command::{BatchTileCommand, ChangeTileCommand, CommandKind, EditCommand};
pub use history::CommandHistory;
pub use settings::{UndoSettings, DEFAULT_MAX_HISTORY, DEFAULT_STACKING_DELAY_MS};
