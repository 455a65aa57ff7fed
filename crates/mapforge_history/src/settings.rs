//! Undo behaviour settings

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default coalescing window in milliseconds.
pub const DEFAULT_STACKING_DELAY_MS: u64 = 1000;

/// Default maximum number of history entries to keep.
pub const DEFAULT_MAX_HISTORY: usize = 100;

/// Undo behaviour settings, owned by [`CommandHistory`](crate::CommandHistory).
///
/// The hosting editor's preferences layer reads and writes these; they are
/// serde-derived so they can be persisted alongside the rest of the editor
/// configuration. No command ever reads them through global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UndoSettings {
    /// When `true`, rapid same-cell edits collapse into one history entry.
    pub group_actions: bool,
    /// Maximum age gap between two edits for them to coalesce.
    pub stacking_delay: Duration,
    /// History entries beyond this are evicted, oldest first.
    pub max_history: usize,
}

impl Default for UndoSettings {
    fn default() -> Self {
        Self {
            group_actions: false,
            stacking_delay: Duration::from_millis(DEFAULT_STACKING_DELAY_MS),
            max_history: DEFAULT_MAX_HISTORY,
        }
    }
}
