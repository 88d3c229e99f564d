// loam_core/src/grid/cell.rs
use serde::{Deserialize, Serialize};

use crate::tiles::tile::Tile;

/// One grid cell: ordered decoration layers plus at most one solid block.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cell {
    /// Decorative tiles rendered behind the block. Never collide.
    pub background: Vec<Tile>,
    /// Decorative tiles rendered in front of the block. Never collide.
    pub foreground: Vec<Tile>,
    /// The solid occupant; passability is decided by this slot alone.
    pub block: Option<Tile>,
}

impl Cell {
    pub fn is_passable(&self) -> bool {
        self.block.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.background.is_empty() && self.foreground.is_empty() && self.block.is_none()
    }

    pub fn push_background(&mut self, tile: Tile) {
        push_layer(&mut self.background, tile);
    }

    pub fn push_foreground(&mut self, tile: Tile) {
        push_layer(&mut self.foreground, tile);
    }
}

/// Append to a decoration layer. A tile equal to one already present is
/// moved to the end rather than duplicated: most recently placed wins
/// position.
fn push_layer(layer: &mut Vec<Tile>, tile: Tile) {
    layer.retain(|existing| *existing != tile);
    layer.push(tile);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decoration_never_blocks() {
        let mut cell = Cell::default();
        cell.push_foreground(Tile::indexed(1));
        cell.push_background(Tile::indexed(2));
        assert!(cell.is_passable());
        cell.block = Some(Tile::indexed(3));
        assert!(!cell.is_passable());
    }

    #[test]
    fn repeated_push_moves_to_the_end() {
        let mut cell = Cell::default();
        cell.push_foreground(Tile::indexed(1));
        cell.push_foreground(Tile::indexed(2));
        cell.push_foreground(Tile::indexed(1));
        assert_eq!(
            cell.foreground,
            vec![Tile::indexed(2), Tile::indexed(1)]
        );
    }
}
