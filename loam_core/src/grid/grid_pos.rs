// loam_core/src/grid/grid_pos.rs
use glam::{IVec2, Vec2};

/// Integer cell coordinate on a world grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos(pub IVec2);

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        GridPos(IVec2::new(x, y))
    }

    pub fn x(&self) -> i32 {
        self.0.x
    }

    pub fn y(&self) -> i32 {
        self.0.y
    }

    /// Check if this position is within map bounds.
    pub fn is_in_bounds(&self, width: usize, height: usize) -> bool {
        self.0.x >= 0
            && self.0.y >= 0
            && self.0.x < width as i32
            && self.0.y < height as i32
    }

    /// Convert from world coordinates to tile coordinates. No clamping;
    /// callers check bounds separately.
    pub fn from_world(world_pos: Vec2, tile_size: f32) -> Self {
        GridPos::new(
            (world_pos.x / tile_size).floor() as i32,
            (world_pos.y / tile_size).floor() as i32,
        )
    }

    /// Convert to usize tuple (if valid).
    pub fn as_usize(&self) -> Option<(usize, usize)> {
        if self.0.x >= 0 && self.0.y >= 0 {
            Some((self.0.x as usize, self.0.y as usize))
        } else {
            None
        }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        GridPos::new(self.0.x + dx, self.0.y + dy)
    }
}
