pub mod autotile;
pub mod constants;
pub mod error;
pub mod grid;
pub mod logging;
pub mod physics;
pub mod storage;
pub mod tiles;
pub mod world;
