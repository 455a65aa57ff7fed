//! Undoable edit commands
//!
//! [`ChangeTileCommand`] is the workhorse: one "set tile at position" edit
//! with lazy pre-state capture and time-windowed coalescing.
//! [`BatchTileCommand`] covers strokes and fills that were applied while
//! painting and recorded as a single diff. [`EditCommand`] is the tagged
//! variant the history stores; merge candidacy is decided by comparing
//! [`CommandKind`] discriminants, never by runtime type identity.

use std::collections::HashMap;
use std::time::Instant;

use log::warn;
use uuid::Uuid;

use mapforge_core::{Position, Project, Tile};

use crate::UndoSettings;

/// Discriminant used by the history to decide merge candidacy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    ChangeTile,
    BatchTile,
}

// ─── ChangeTileCommand ────────────────────────────────────────────────────────

/// One "set tile at position P" edit.
///
/// The pre-state is not captured at construction: the command may sit in a
/// queue behind other edits, so the cell's content is only known once
/// [`execute`](ChangeTileCommand::execute) runs. `old_tile` is re-captured
/// on every execution and `undo` re-reads the live cell before restoring,
/// so the command stays correct even if the hosting editor mutated the map
/// outside the history (an automap pass, for instance) between calls.
#[derive(Debug, Clone)]
pub struct ChangeTileCommand {
    map_id: Uuid,
    position: Position,
    /// Map state immediately prior to this command's application.
    old_tile: Option<Tile>,
    /// The command's target state; absorbs later merged edits.
    new_tile: Option<Tile>,
    first_execution: bool,
    pub(crate) created_at: Instant,
    description: String,
}

impl ChangeTileCommand {
    /// Create a command that will place `new_tile` at `position` on the map
    /// with id `map_id`. `None` clears the cell. The map is not touched.
    pub fn new(map_id: Uuid, position: Position, new_tile: Option<Tile>) -> Self {
        let description = match &new_tile {
            Some(_) => format!("Set tile at {}", position),
            None => format!("Clear tile at {}", position),
        };
        Self {
            map_id,
            position,
            old_tile: None,
            new_tile,
            first_execution: true,
            created_at: Instant::now(),
            description,
        }
    }

    /// Apply the edit. Re-captures the cell's current content as the
    /// undo target, then writes `new_tile`.
    pub fn execute(&mut self, project: &mut Project) {
        let Some(map) = project.get_map_mut(self.map_id) else {
            warn!(
                "ChangeTileCommand::execute: map {} not found, skipping",
                self.map_id
            );
            return;
        };
        self.old_tile = map.tile_snapshot(self.position);
        self.first_execution = false;
        map.set_tile(self.position, self.new_tile.clone());
    }

    /// Reverse the edit. The displaced cell content becomes the new redo
    /// target, so undo followed by execute round-trips exactly.
    pub fn undo(&mut self, project: &mut Project) {
        let Some(map) = project.get_map_mut(self.map_id) else {
            warn!(
                "ChangeTileCommand::undo: map {} not found, skipping",
                self.map_id
            );
            return;
        };
        let displaced = map.tile_snapshot(self.position);
        map.set_tile(self.position, self.old_tile.clone());
        self.new_tile = displaced;
    }

    /// Absorb `incoming` into this command if both edits target the same
    /// cell on the same map and `incoming` was created within the stacking
    /// delay. Returns `true` when merged; the caller drops `incoming`.
    pub fn try_merge(&mut self, incoming: &ChangeTileCommand, settings: &UndoSettings) -> bool {
        if !settings.group_actions {
            return false;
        }
        if incoming.map_id != self.map_id || incoming.position != self.position {
            return false;
        }
        // Strict window: an edit exactly stacking_delay later starts a new entry.
        if incoming.created_at.saturating_duration_since(self.created_at)
            >= settings.stacking_delay
        {
            return false;
        }
        self.new_tile = incoming.new_tile.clone();
        self.description = incoming.description.clone();
        true
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn map_id(&self) -> Uuid {
        self.map_id
    }

    /// `false` until the first `execute` has run.
    pub fn has_executed(&self) -> bool {
        !self.first_execution
    }
}

// ─── BatchTileCommand ─────────────────────────────────────────────────────────

/// A multi-cell edit recorded as per-cell (old, new) pairs.
///
/// Used for painting strokes, fills and paste operations where the changes
/// were applied incrementally and diffed afterwards. Batches never
/// coalesce with anything.
#[derive(Debug, Clone)]
pub struct BatchTileCommand {
    map_id: Uuid,
    /// Per-cell change: position -> (old_tile, new_tile).
    changes: HashMap<Position, (Option<Tile>, Option<Tile>)>,
    description: String,
}

impl BatchTileCommand {
    pub fn new(
        map_id: Uuid,
        changes: HashMap<Position, (Option<Tile>, Option<Tile>)>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            map_id,
            changes,
            description: description.into(),
        }
    }

    /// Build from before/after cell snapshots, keeping only cells that
    /// actually changed.
    pub fn from_diff(
        map_id: Uuid,
        before: HashMap<Position, Option<Tile>>,
        after: HashMap<Position, Option<Tile>>,
        description: impl Into<String>,
    ) -> Self {
        let mut changes = HashMap::new();
        for (position, old_tile) in before {
            let new_tile = after.get(&position).cloned().flatten();
            if old_tile != new_tile {
                changes.insert(position, (old_tile, new_tile));
            }
        }
        Self::new(map_id, changes, description)
    }

    /// `true` if no cell changes are recorded. An empty batch is valid to
    /// push but has no visible effect; callers may wish to skip it.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn execute(&mut self, project: &mut Project) {
        let Some(map) = project.get_map_mut(self.map_id) else {
            warn!(
                "BatchTileCommand::execute: map {} not found, skipping",
                self.map_id
            );
            return;
        };
        for (position, (_, new_tile)) in &self.changes {
            map.set_tile(*position, new_tile.clone());
        }
    }

    pub fn undo(&mut self, project: &mut Project) {
        let Some(map) = project.get_map_mut(self.map_id) else {
            warn!(
                "BatchTileCommand::undo: map {} not found, skipping",
                self.map_id
            );
            return;
        };
        for (position, (old_tile, _)) in &self.changes {
            map.set_tile(*position, old_tile.clone());
        }
    }

    pub fn map_id(&self) -> Uuid {
        self.map_id
    }
}

// ─── EditCommand ──────────────────────────────────────────────────────────────

/// The tagged variant stored on the history stacks.
#[derive(Debug, Clone)]
pub enum EditCommand {
    ChangeTile(ChangeTileCommand),
    BatchTile(BatchTileCommand),
}

impl EditCommand {
    /// Apply the edit (do/redo).
    pub fn execute(&mut self, project: &mut Project) {
        match self {
            EditCommand::ChangeTile(cmd) => cmd.execute(project),
            EditCommand::BatchTile(cmd) => cmd.execute(project),
        }
    }

    /// Reverse the edit.
    pub fn undo(&mut self, project: &mut Project) {
        match self {
            EditCommand::ChangeTile(cmd) => cmd.undo(project),
            EditCommand::BatchTile(cmd) => cmd.undo(project),
        }
    }

    /// Human-readable label for the Edit menu.
    pub fn description(&self) -> &str {
        match self {
            EditCommand::ChangeTile(cmd) => &cmd.description,
            EditCommand::BatchTile(cmd) => &cmd.description,
        }
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            EditCommand::ChangeTile(_) => CommandKind::ChangeTile,
            EditCommand::BatchTile(_) => CommandKind::BatchTile,
        }
    }

    /// The cells this command touches, for dirty-region tracking.
    pub fn affected_positions(&self) -> Vec<Position> {
        match self {
            EditCommand::ChangeTile(cmd) => vec![cmd.position],
            EditCommand::BatchTile(cmd) => cmd.changes.keys().copied().collect(),
        }
    }

    /// Attempt to absorb `incoming`. Only same-kind single-tile commands
    /// are candidates; the history checks [`kind`](EditCommand::kind)
    /// equality before calling this.
    pub fn try_merge(&mut self, incoming: &EditCommand, settings: &UndoSettings) -> bool {
        match (self, incoming) {
            (EditCommand::ChangeTile(top), EditCommand::ChangeTile(new)) => {
                top.try_merge(new, settings)
            }
            _ => false,
        }
    }
}

impl From<ChangeTileCommand> for EditCommand {
    fn from(cmd: ChangeTileCommand) -> Self {
        EditCommand::ChangeTile(cmd)
    }
}

impl From<BatchTileCommand> for EditCommand {
    fn from(cmd: BatchTileCommand) -> Self {
        EditCommand::BatchTile(cmd)
    }
}
