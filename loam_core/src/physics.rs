// loam_core/src/physics.rs
pub mod body;

use crate::constants::{GRAVITY, TERMINAL_VELOCITY};
use crate::grid::grid_pos::GridPos;
use crate::grid::world_grid::WorldGrid;
use crate::physics::body::Body;

/// Inset applied when sampling an occupied edge, so a body sitting flush
/// against a tile boundary samples its own cell and not the neighbour.
const EDGE_NUDGE: f32 = 0.01;

/// Advance one body by `dt` against the grid.
///
/// Axis-separated: gravity, then X resolution, then Y resolution with the
/// already-resolved X, then ground detection at the final position. Each
/// leading edge is tested with a two-point sample (both corners of the
/// edge), so per-step displacement above one tile can tunnel through a
/// one-tile obstacle. Keep speeds below one tile per step.
pub fn step(body: &mut Body, map: &WorldGrid, dt: f32) {
    apply_gravity(body);
    let dv = body.velocity * dt;
    resolve_horizontal(body, map, dv.x);
    resolve_vertical(body, map, dv.y);
    update_grounding(body, map);
}

/// Gravity is added once per step and clamped to terminal velocity. A body
/// resting on ground is left alone so it does not creep into the floor.
fn apply_gravity(body: &mut Body) {
    if body.gravity && !body.on_ground {
        body.velocity.y = (body.velocity.y + GRAVITY).min(TERMINAL_VELOCITY);
    }
}

fn resolve_horizontal(body: &mut Body, map: &WorldGrid, dx: f32) {
    if dx == 0.0 {
        return;
    }
    let ts = map.tile_size();
    let next_x = body.position.x + dx;

    // Rows covered by the body's vertical extent.
    let row_top = ((body.top() + EDGE_NUDGE) / ts).floor() as i32;
    let row_bottom = ((body.bottom() - EDGE_NUDGE) / ts).floor() as i32;

    if dx > 0.0 {
        let col = ((next_x + body.width - EDGE_NUDGE) / ts).floor() as i32;
        if map.is_passable(GridPos::new(col, row_top), GridPos::new(col, row_bottom)) {
            body.position.x = next_x;
        } else {
            // Snap the right edge to the left boundary of the column.
            body.position.x = col as f32 * ts - body.width;
            body.velocity.x = 0.0;
        }
    } else {
        let col = ((next_x + EDGE_NUDGE) / ts).floor() as i32;
        if map.is_passable(GridPos::new(col, row_top), GridPos::new(col, row_bottom)) {
            body.position.x = next_x;
        } else {
            body.position.x = (col + 1) as f32 * ts;
            body.velocity.x = 0.0;
        }
    }
}

fn resolve_vertical(body: &mut Body, map: &WorldGrid, dy: f32) {
    if dy == 0.0 {
        return;
    }
    let ts = map.tile_size();
    let next_y = body.position.y + dy;

    // Columns covered by the body's horizontal extent, post X resolution.
    let col_left = ((body.left() + EDGE_NUDGE) / ts).floor() as i32;
    let col_right = ((body.right() - EDGE_NUDGE) / ts).floor() as i32;

    if dy > 0.0 {
        let row = ((next_y + body.height - EDGE_NUDGE) / ts).floor() as i32;
        if map.is_passable(GridPos::new(col_left, row), GridPos::new(col_right, row)) {
            body.position.y = next_y;
        } else {
            // Snap the bottom edge to the top of the row.
            body.position.y = row as f32 * ts - body.height;
            body.velocity.y = 0.0;
        }
    } else {
        let row = ((next_y + EDGE_NUDGE) / ts).floor() as i32;
        if map.is_passable(GridPos::new(col_left, row), GridPos::new(col_right, row)) {
            body.position.y = next_y;
        } else {
            body.position.y = (row + 1) as f32 * ts;
            body.velocity.y = 0.0;
        }
    }
}

/// Ground test at the final resolved position, independent of the axis
/// passes: sample the span just below the bottom edge. The flag gates
/// gravity next step and jump eligibility in the behaviour layer.
fn update_grounding(body: &mut Body, map: &WorldGrid) {
    let ts = map.tile_size();
    let col_left = ((body.left() + EDGE_NUDGE) / ts).floor() as i32;
    let col_right = ((body.right() - EDGE_NUDGE) / ts).floor() as i32;
    let row = ((body.bottom() + EDGE_NUDGE) / ts).floor() as i32;
    body.on_ground = !map.is_passable(GridPos::new(col_left, row), GridPos::new(col_right, row));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::tile::Tile;
    use glam::Vec2;

    /// 8x6 grid, 16px tiles, solid floor on the bottom row.
    fn floored_map() -> WorldGrid {
        let mut map = WorldGrid::new(8, 6, 16.0);
        for x in 0..8 {
            map.set_block(GridPos::new(x, 5), Tile::indexed(0));
        }
        map
    }

    #[test]
    fn falling_body_lands_flush_on_the_floor() {
        let map = floored_map();
        let mut body = Body::new(Vec2::new(16.0, 16.0), 16.0, 16.0);
        for _ in 0..200 {
            step(&mut body, &map, 1.0);
        }
        // Floor top is at y = 80; a 16-tall body rests at y = 64.
        assert_eq!(body.position.y, 64.0);
        assert_eq!(body.velocity.y, 0.0);
        assert!(body.on_ground);

        // Idempotent at rest.
        let rested = body;
        step(&mut body, &map, 1.0);
        assert_eq!(body.position, rested.position);
        assert!(body.on_ground);
    }

    #[test]
    fn gravity_is_clamped_to_terminal_velocity() {
        let mut body = Body::new(Vec2::new(16.0, 0.0), 8.0, 8.0);
        for _ in 0..100 {
            apply_gravity(&mut body);
        }
        assert_eq!(body.velocity.y, TERMINAL_VELOCITY);
    }

    #[test]
    fn gravity_skipped_while_grounded() {
        let mut body = Body::new(Vec2::ZERO, 8.0, 8.0);
        body.on_ground = true;
        apply_gravity(&mut body);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn rightward_motion_snaps_to_a_wall() {
        let mut map = floored_map();
        // Wall column at x = 4, two tiles high above the floor.
        map.set_block(GridPos::new(4, 4), Tile::indexed(0));
        map.set_block(GridPos::new(4, 3), Tile::indexed(0));

        // Body resting on the floor, moving right toward the wall.
        let mut body = Body::new(Vec2::new(16.0, 64.0), 16.0, 16.0);
        body.on_ground = true;
        body.velocity.x = 6.0;
        for _ in 0..20 {
            step(&mut body, &map, 1.0);
        }
        // Wall left face is at x = 64; right edge snaps flush.
        assert_eq!(body.position.x, 48.0);
        assert_eq!(body.velocity.x, 0.0);
    }

    #[test]
    fn diagonal_motion_slides_along_the_blocked_axis() {
        // L-shaped obstacle: floor plus a wall on the right.
        let mut map = floored_map();
        for y in 0..5 {
            map.set_block(GridPos::new(6, y), Tile::indexed(0));
        }

        let mut body = Body::new(Vec2::new(40.0, 24.0), 16.0, 16.0);
        body.gravity = false;
        body.velocity = Vec2::new(4.0, 4.0);
        for _ in 0..30 {
            step(&mut body, &map, 1.0);
            body.velocity = Vec2::new(4.0, 4.0);
        }
        // X stopped at the wall (left face x = 96), Y at the floor.
        assert_eq!(body.position.x, 80.0);
        assert_eq!(body.position.y, 64.0);
    }

    #[test]
    fn upward_motion_snaps_to_a_ceiling() {
        let mut map = floored_map();
        map.set_block(GridPos::new(1, 1), Tile::indexed(0));

        let mut body = Body::new(Vec2::new(16.0, 48.0), 16.0, 16.0);
        body.gravity = false;
        body.velocity.y = -6.0;
        for _ in 0..10 {
            step(&mut body, &map, 1.0);
        }
        // Ceiling bottom face is at y = 32.
        assert_eq!(body.position.y, 32.0);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn grid_edge_behaves_like_a_solid_frame() {
        let map = WorldGrid::new(4, 4, 16.0);
        let mut body = Body::new(Vec2::new(8.0, 8.0), 16.0, 16.0);
        body.gravity = false;
        body.velocity.x = -6.0;
        for _ in 0..10 {
            step(&mut body, &map, 1.0);
        }
        assert_eq!(body.position.x, 0.0);
        assert_eq!(body.velocity.x, 0.0);
    }

    #[test]
    fn wide_body_two_point_sample_catches_both_columns() {
        let mut map = floored_map();
        // Only the right of the two columns under the body is solid.
        map.clear_block(GridPos::new(0, 5));
        map.clear_block(GridPos::new(1, 5));

        // Body straddles columns 1 and 2; column 2's floor remains.
        let mut body = Body::new(Vec2::new(24.0, 40.0), 16.0, 16.0);
        for _ in 0..60 {
            step(&mut body, &map, 1.0);
        }
        assert_eq!(body.position.y, 64.0);
        assert!(body.on_ground);
    }
}
