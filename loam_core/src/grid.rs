pub mod cell;
pub mod grid_pos;
pub mod world_grid;
