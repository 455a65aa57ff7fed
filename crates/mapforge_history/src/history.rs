//! Command history: undo/redo stacks with merge-on-push

use mapforge_core::{Position, Project};

use crate::{EditCommand, UndoSettings};

/// Stores command history for undo/redo.
///
/// New commands are executed, then either coalesced into the top history
/// entry or pushed as a new one. Merging is only ever attempted between
/// adjacent entries of the same [`CommandKind`](crate::CommandKind); the command itself decides
/// the rest (same cell, within the stacking window).
///
/// Every mutating call returns the affected cell positions so the caller
/// can invalidate exactly the dirty region of its view.
#[derive(Debug, Default)]
pub struct CommandHistory {
    /// Commands that have been executed.
    undo_stack: Vec<EditCommand>,
    /// Commands that have been undone.
    redo_stack: Vec<EditCommand>,
    settings: UndoSettings,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: UndoSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &UndoSettings {
        &self.settings
    }

    /// The preferences layer writes through this when the user changes
    /// grouping, stacking delay or the history cap.
    pub fn settings_mut(&mut self) -> &mut UndoSettings {
        &mut self.settings
    }

    /// Execute a command and record it, coalescing with the top entry when
    /// eligible. Returns the positions the command touched.
    pub fn execute(
        &mut self,
        command: impl Into<EditCommand>,
        project: &mut Project,
    ) -> Vec<Position> {
        let mut command = command.into();
        command.execute(project);
        let affected = command.affected_positions();

        self.redo_stack.clear(); // Clear redo stack on new command
        self.absorb_or_push(command);
        project.mark_dirty();
        affected
    }

    /// Record a command whose changes were already applied (e.g. during
    /// painting) without executing it again.
    pub fn push_executed(&mut self, command: impl Into<EditCommand>) {
        self.redo_stack.clear();
        self.absorb_or_push(command.into());
    }

    fn absorb_or_push(&mut self, command: EditCommand) {
        let merged = match self.undo_stack.last_mut() {
            Some(top) if top.kind() == command.kind() => {
                top.try_merge(&command, &self.settings)
            }
            _ => false,
        };
        if !merged {
            self.undo_stack.push(command);
        }
        // Evict the oldest entry once over the cap.
        if self.undo_stack.len() > self.settings.max_history {
            self.undo_stack.remove(0);
        }
    }

    /// Undo the last command. Returns the positions it touched, empty if
    /// there was nothing to undo.
    pub fn undo(&mut self, project: &mut Project) -> Vec<Position> {
        let Some(mut command) = self.undo_stack.pop() else {
            return Vec::new();
        };
        command.undo(project);
        let affected = command.affected_positions();
        self.redo_stack.push(command);
        project.mark_dirty();
        affected
    }

    /// Redo the last undone command. Returns the positions it touched,
    /// empty if there was nothing to redo.
    pub fn redo(&mut self, project: &mut Project) -> Vec<Position> {
        let Some(mut command) = self.redo_stack.pop() else {
            return Vec::new();
        };
        command.execute(project);
        let affected = command.affected_positions();
        self.undo_stack.push(command);
        project.mark_dirty();
        affected
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Label of the command an undo would reverse, for the Edit menu.
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack.last().map(|c| c.description())
    }

    /// Label of the command a redo would re-apply.
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack.last().map(|c| c.description())
    }

    /// Number of entries available to undo.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Clear all history.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
