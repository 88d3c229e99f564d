// loam_core/src/storage/level_io.rs
use std::fs;
use std::path::Path;

use log::info;

use crate::error::LoadError;
use crate::world::level::Level;

/// Save a level as pretty RON. The parent folder is created on demand.
pub fn save_level(path: &Path, level: &Level) -> Result<(), LoadError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pretty = ron::ser::PrettyConfig::new().depth_limit(4);
    let text = ron::ser::to_string_pretty(level, pretty)?;
    fs::write(path, text)?;
    info!("saved level {} to {}", level.name, path.display());
    Ok(())
}

/// Load a level from RON. Parse failures are fatal; no partial level is
/// ever returned.
pub fn load_level(path: &Path) -> Result<Level, LoadError> {
    let text = fs::read_to_string(path)?;
    let level: Level = ron::from_str(&text)?;
    info!("loaded level {} from {}", level.name, path.display());
    Ok(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::grid_pos::GridPos;
    use crate::tiles::tile::{Material, Tile};
    use glam::Vec2;
    use tempfile::tempdir;

    #[test]
    fn levels_round_trip_through_ron() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("levels").join("hollow.ron");

        let mut level = Level::new("hollow", 6, 4, 16.0);
        level.spawn = Some(Vec2::new(24.0, 8.0));
        level.grid.set_block(GridPos::new(1, 3), Tile::indexed(7));
        level.grid.push_background(
            GridPos::new(0, 0),
            Tile::Material {
                material: Material::Dirt,
                variant: 3,
            },
        );
        level
            .grid
            .push_foreground(GridPos::new(2, 2), Tile::indexed(10));

        save_level(&path, &level).unwrap();
        let loaded = load_level(&path).unwrap();
        assert_eq!(loaded, level);
    }

    #[test]
    fn corrupt_ron_is_a_fatal_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.ron");
        fs::write(&path, "Level(nope").unwrap();
        assert!(load_level(&path).is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let err = load_level(&dir.path().join("absent.ron")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
