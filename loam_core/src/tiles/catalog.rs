// loam_core/src/tiles/catalog.rs
use std::collections::HashMap;

use glam::Vec2;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::tiles::flags::TileFlags;
use crate::tiles::tile::{Material, Tile, TileIndex};

/// Visual identity of one catalog slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileVisual {
    /// A cell of a tile sheet.
    Sheet { sheet: String, index: u32 },
    /// A standalone named image.
    Named { name: String },
}

/// What the render adapter gets back for a tile.
///
/// The adapter switches on this; the grid and collision code never see it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedTile<'a> {
    Visual(&'a TileVisual),
    /// Content gap: draw a bordered rectangle plus this label so missing
    /// tiles are obvious while authoring.
    Placeholder { label: String },
}

/// Seed data handed to whatever spawns a prefab at a world position.
#[derive(Clone, Debug, PartialEq)]
pub struct PrefabSeed {
    pub name: &'static str,
    pub position: Vec2,
}

pub type PrefabFn = fn(Vec2) -> PrefabSeed;

/// Registry of tile visuals, per-tile flags and material buckets.
///
/// Constructed explicitly and passed by reference; there is no global
/// content store.
#[derive(Default)]
pub struct TileCatalog {
    tile_size: f32,
    tiles: Vec<TileVisual>,
    flags: HashMap<TileIndex, TileFlags>,
    materials: HashMap<Material, Vec<TileIndex>>,
    pub prefabs: HashMap<String, PrefabFn>,
}

impl TileCatalog {
    pub fn new(tile_size: f32) -> Self {
        Self {
            tile_size,
            ..Self::default()
        }
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[TileVisual] {
        &self.tiles
    }

    /// Append visuals to the tile list. Existing indices stay stable;
    /// registration is append-only during a load phase.
    pub fn register_tiles<I>(&mut self, visuals: I)
    where
        I: IntoIterator<Item = TileVisual>,
    {
        self.tiles.extend(visuals);
    }

    /// Assign `flags` to every given index. Last write wins per index.
    pub fn set_flags(&mut self, flags: TileFlags, indices: &[usize]) {
        for &index in indices {
            self.flags.insert(TileIndex(index), flags);
        }
    }

    /// Flags for a tile index; unregistered indices (including ones past
    /// the tile list) report no flags.
    pub fn flags(&self, index: usize) -> TileFlags {
        self.flags
            .get(&TileIndex(index))
            .copied()
            .unwrap_or_default()
    }

    pub fn flag_entries(&self) -> impl Iterator<Item = (TileIndex, TileFlags)> + '_ {
        self.flags.iter().map(|(i, f)| (*i, *f))
    }

    /// Append tile indices to a material bucket.
    pub fn register_material(&mut self, material: Material, indices: &[usize]) {
        let bucket = self.materials.entry(material).or_default();
        bucket.extend(indices.iter().map(|&i| TileIndex(i)));
    }

    /// Mutable bucket for a material, created empty on first access.
    pub fn material_tiles(&mut self, material: Material) -> &mut Vec<TileIndex> {
        self.materials.entry(material).or_default()
    }

    /// Read-only bucket view; unknown categories are an empty slice.
    pub fn registered_materials(&self, material: Material) -> &[TileIndex] {
        self.materials
            .get(&material)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn material_entries(&self) -> impl Iterator<Item = (Material, &[TileIndex])> + '_ {
        self.materials.iter().map(|(m, v)| (*m, v.as_slice()))
    }

    /// Resolve a tile to its visual. Out-of-range indices and empty
    /// material buckets degrade to a placeholder, never a panic.
    pub fn resolve<'a>(&'a self, tile: &Tile) -> ResolvedTile<'a> {
        match tile {
            Tile::Indexed(TileIndex(i)) => self.visual_or_placeholder(*i, tile),
            Tile::Material { material, variant } => {
                let bucket = self.registered_materials(*material);
                if bucket.is_empty() {
                    warn!("material {material} has no registered tiles");
                    return ResolvedTile::Placeholder {
                        label: tile.label(),
                    };
                }
                let TileIndex(i) = bucket[*variant as usize % bucket.len()];
                self.visual_or_placeholder(i, tile)
            }
        }
    }

    fn visual_or_placeholder<'a>(&'a self, index: usize, tile: &Tile) -> ResolvedTile<'a> {
        match self.tiles.get(index) {
            Some(visual) => ResolvedTile::Visual(visual),
            None => {
                warn!(
                    "tile index {index} outside catalog ({} tiles)",
                    self.tiles.len()
                );
                ResolvedTile::Placeholder {
                    label: tile.label(),
                }
            }
        }
    }
}
