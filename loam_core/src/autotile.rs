// loam_core/src/autotile.rs
pub mod rules;
pub mod rulesets;

use log::info;
use rand::Rng;

use crate::autotile::rules::{Decoration, Neighbors, Ruleset};
use crate::grid::grid_pos::GridPos;
use crate::grid::world_grid::WorldGrid;
use crate::tiles::tile::Tile;

/// Snapshot of block occupancy, taken before a pass so the ground mask is
/// not affected by the rewrites the pass itself performs.
pub struct BlockMask {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl BlockMask {
    pub fn of(map: &WorldGrid) -> Self {
        Self {
            width: map.width(),
            height: map.height(),
            bits: map.cells().iter().map(|cell| !cell.is_passable()).collect(),
        }
    }

    pub fn is_ground(&self, pos: GridPos) -> bool {
        match pos.as_usize() {
            Some((x, y)) if x < self.width && y < self.height => self.bits[y * self.width + x],
            _ => false,
        }
    }
}

/// Run one autotile pass: every cell the ground mask covers gets its block
/// rewritten to the first matching rule's tile, and exposed top edges get
/// grass decoration in the row above.
///
/// Raster order, rule order and the per-cell rng draw schedule are part of
/// the contract: the same mask and seed reproduce the same grid.
pub fn autotile<F, R>(map: &mut WorldGrid, mask: F, ruleset: &Ruleset, rng: &mut R)
where
    F: Fn(GridPos) -> bool,
    R: Rng,
{
    let mut rewritten = 0usize;
    for y in 0..map.height() as i32 {
        for x in 0..map.width() as i32 {
            let pos = GridPos::new(x, y);
            if !mask(pos) {
                continue;
            }
            let neighbors = Neighbors::sample(pos, &mask);

            if let Some(rule) = ruleset.rules.iter().find(|r| r.pattern.matches(&neighbors)) {
                // One draw per match, even for single-candidate rules, so
                // the draw sequence is a function of the mask alone.
                let pick = rng.gen_range(0..rule.blocks.len());
                map.set_block(pos, Tile::indexed(rule.blocks[pick]));
                rewritten += 1;
            }

            // Exposed top edge; checked independently of the rule match.
            if !neighbors.north() {
                decorate_above(map, pos, &ruleset.decoration, rng);
            }
        }
    }
    info!("autotile: ruleset {} rewrote {} cells", ruleset.name, rewritten);
}

/// Append grass to the cell above, with an accent follow-up when the grass
/// pick was the accent-eligible variant. Draws happen before the bounds
/// check so off-grid rows consume the same rng sequence.
fn decorate_above<R: Rng>(map: &mut WorldGrid, pos: GridPos, deco: &Decoration, rng: &mut R) {
    let pick = rng.gen_range(0..deco.grass.len());
    let accent_roll = rng.gen_bool(deco.accent_chance);

    let above = pos.offset(0, -1);
    if !map.is_in_bounds(above) {
        return;
    }
    map.push_foreground(above, Tile::indexed(deco.grass[pick]));
    if pick == deco.accent_on && accent_roll {
        map.push_foreground(above, Tile::indexed(deco.accent));
    }
}
