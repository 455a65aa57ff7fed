//! JSON persistence for maps

use std::path::Path;
use thiserror::Error;

use crate::Map;

/// Errors that can occur when loading or saving maps
#[derive(Debug, Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Load a map from a JSON file
pub fn load_map(path: &Path) -> Result<Map, MapError> {
    let content = std::fs::read_to_string(path).map_err(|e| MapError::IoError(e.to_string()))?;

    serde_json::from_str(&content).map_err(|e| MapError::ParseError(e.to_string()))
}

/// Save a map to a JSON file
pub fn save_map(map: &Map, path: &Path) -> Result<(), MapError> {
    let content =
        serde_json::to_string_pretty(map).map_err(|e| MapError::ParseError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| MapError::IoError(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Item, Position, Tile};

    #[test]
    fn save_load_round_trip() {
        let mut map = Map::new("Carlin");
        map.set_tile(
            Position::new(10, 20, 7),
            Some(Tile::with_ground(Item::new(4526))),
        );
        map.set_tile(Position::new(11, 20, 7), Some(Tile::new()));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("carlin.map.json");

        save_map(&map, &path).unwrap();
        let loaded = load_map(&path).unwrap();

        assert_eq!(loaded.id, map.id);
        assert_eq!(loaded.name, "Carlin");
        assert_eq!(loaded.tile_count(), 2);
        assert_eq!(
            loaded.get_tile(Position::new(10, 20, 7)).unwrap().ground,
            Some(Item::new(4526))
        );
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load_map(Path::new("/nonexistent/no.map.json")).unwrap_err();
        assert!(matches!(err, MapError::IoError(_)));
    }

    #[test]
    fn load_garbage_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.map.json");
        std::fs::write(&path, "not json").unwrap();

        let err = load_map(&path).unwrap_err();
        assert!(matches!(err, MapError::ParseError(_)));
    }
}
