//! The editing session: open maps and the unsaved-changes flag

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Map;

/// The set of maps open in an editing session.
///
/// Commands address their target map by id and look it up here at
/// execution time, so a command created against a since-closed map
/// degrades to a no-op instead of dangling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    pub maps: Vec<Map>,
    /// Set whenever any map is mutated; cleared on save. Session state,
    /// never persisted.
    #[serde(skip)]
    pub dirty: bool,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_map(&mut self, map: Map) {
        self.maps.push(map);
        self.dirty = true;
    }

    pub fn get_map(&self, id: Uuid) -> Option<&Map> {
        self.maps.iter().find(|m| m.id == id)
    }

    pub fn get_map_mut(&mut self, id: Uuid) -> Option<&mut Map> {
        self.maps.iter_mut().find(|m| m.id == id)
    }

    pub fn remove_map(&mut self, id: Uuid) -> Option<Map> {
        let idx = self.maps.iter().position(|m| m.id == id)?;
        self.dirty = true;
        Some(self.maps.remove(idx))
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        let mut project = Project::new();
        let map = Map::new("Rookgaard");
        let id = map.id;
        project.add_map(map);

        assert_eq!(project.get_map(id).unwrap().name, "Rookgaard");
        assert!(project.get_map(Uuid::new_v4()).is_none());
    }

    #[test]
    fn remove_returns_the_map() {
        let mut project = Project::new();
        let map = Map::new("Rookgaard");
        let id = map.id;
        project.add_map(map);

        let removed = project.remove_map(id).unwrap();
        assert_eq!(removed.id, id);
        assert!(project.get_map(id).is_none());
    }

    #[test]
    fn dirty_flag_tracks_mutation() {
        let mut project = Project::new();
        assert!(!project.is_dirty());
        project.add_map(Map::new("Rookgaard"));
        assert!(project.is_dirty());
        project.clear_dirty();
        assert!(!project.is_dirty());
    }
}
