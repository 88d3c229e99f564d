// loam_core/src/grid/world_grid.rs
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::grid::cell::Cell;
use crate::grid::grid_pos::GridPos;
use crate::tiles::tile::Tile;

/// Packed RGBA32 colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const BLACK: Rgba = Rgba([0, 0, 0, 255]);
    pub const LIGHT_GRAY: Rgba = Rgba([199, 199, 199, 255]);
    pub const SKY_BLUE: Rgba = Rgba([135, 206, 235, 255]);

    pub fn pack(self) -> u32 {
        u32::from_le_bytes(self.0)
    }

    pub fn unpack(raw: u32) -> Self {
        Rgba(raw.to_le_bytes())
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::LIGHT_GRAY
    }
}

/// Fixed-size 2D grid of cells. Dimensions never change after
/// construction; cells are allocated once and mutated in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldGrid {
    width: usize,
    height: usize,
    tile_size: f32,
    pub background: Rgba,
    cells: Vec<Cell>,
}

impl WorldGrid {
    pub fn new(width: usize, height: usize, tile_size: f32) -> Self {
        Self {
            width,
            height,
            tile_size,
            background: Rgba::default(),
            cells: vec![Cell::default(); width * height],
        }
    }

    pub(crate) fn from_parts(
        width: usize,
        height: usize,
        tile_size: f32,
        background: Rgba,
        cells: Vec<Cell>,
    ) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            tile_size,
            background,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Convert world coordinates to the containing cell. No clamping.
    pub fn world_to_tile(&self, world_pos: Vec2) -> GridPos {
        GridPos::from_world(world_pos, self.tile_size)
    }

    /// Top-left corner of a cell in world coordinates. Exact inverse of
    /// [`Self::world_to_tile`] for in-bounds cells.
    pub fn tile_to_world(&self, pos: GridPos) -> Vec2 {
        Vec2::new(
            pos.x() as f32 * self.tile_size,
            pos.y() as f32 * self.tile_size,
        )
    }

    pub fn is_in_bounds(&self, pos: GridPos) -> bool {
        pos.is_in_bounds(self.width, self.height)
    }

    pub fn cell(&self, pos: GridPos) -> Option<&Cell> {
        let (x, y) = pos.as_usize()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(&self.cells[y * self.width + x])
    }

    pub fn cell_mut(&mut self, pos: GridPos) -> Option<&mut Cell> {
        let (x, y) = pos.as_usize()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(&mut self.cells[y * self.width + x])
    }

    /// Whether a single cell blocks movement. Out-of-bounds coordinates
    /// are blocked, so the grid edge behaves like a solid frame.
    pub fn is_blocked(&self, pos: GridPos) -> bool {
        match self.cell(pos) {
            Some(cell) => !cell.is_passable(),
            None => true,
        }
    }

    /// True iff both named cells are in bounds and unblocked. The two
    /// cells are the ends of an entity edge span; callers pass the same
    /// cell twice for a one-cell span.
    pub fn is_passable(&self, a: GridPos, b: GridPos) -> bool {
        !self.is_blocked(a) && !self.is_blocked(b)
    }

    /// Put a tile in the block slot. Out-of-bounds stamps are ignored.
    pub fn set_block(&mut self, pos: GridPos, tile: Tile) {
        if let Some(cell) = self.cell_mut(pos) {
            cell.block = Some(tile);
        }
    }

    /// Clear the block slot. Out-of-bounds clears are ignored.
    pub fn clear_block(&mut self, pos: GridPos) {
        if let Some(cell) = self.cell_mut(pos) {
            cell.block = None;
        }
    }

    pub fn push_foreground(&mut self, pos: GridPos, tile: Tile) {
        if let Some(cell) = self.cell_mut(pos) {
            cell.push_foreground(tile);
        }
    }

    pub fn push_background(&mut self, pos: GridPos, tile: Tile) {
        if let Some(cell) = self.cell_mut(pos) {
            cell.push_background(tile);
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
