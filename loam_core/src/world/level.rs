// loam_core/src/world/level.rs
use glam::Vec2;
use serde::{Deserialize, Serialize};
use serde_with::{FromInto, serde_as};
use uuid::Uuid;

use crate::constants::{DEFAULT_LEVEL_HEIGHT, DEFAULT_LEVEL_WIDTH, DEFAULT_TILE_SIZE};
use crate::grid::world_grid::WorldGrid;

/// One playable level: an identified, named grid plus the spawn point.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Level {
    pub id: Uuid,
    pub name: String,
    #[serde_as(as = "Option<FromInto<[f32; 2]>>")]
    #[serde(default)]
    // World coordinates, inside the grid.
    pub spawn: Option<Vec2>,
    pub grid: WorldGrid,
}

impl Level {
    pub fn new(name: &str, width: usize, height: usize, tile_size: f32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            spawn: None,
            grid: WorldGrid::new(width, height, tile_size),
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::new(
            "untitled",
            DEFAULT_LEVEL_WIDTH,
            DEFAULT_LEVEL_HEIGHT,
            DEFAULT_TILE_SIZE,
        )
    }
}
