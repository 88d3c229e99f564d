// loam_core/src/constants.rs

/// 60Hz physics.
pub const FIXED_DT: f32 = 1.0 / 60.0;
/// Protects against long freezes.
pub const MAX_ACCUM: f32 = 0.5;

/// Default tile size in world units.
pub const DEFAULT_TILE_SIZE: f32 = 16.0;

/// Downward acceleration added once per step to airborne bodies.
pub const GRAVITY: f32 = 0.5;
/// Cap on downward speed.
pub const TERMINAL_VELOCITY: f32 = 12.0;

/// Grid size of a freshly created level.
pub const DEFAULT_LEVEL_WIDTH: usize = 16;
pub const DEFAULT_LEVEL_HEIGHT: usize = 10;

/// Name of the root user-facing save folder.
pub const SAVE_ROOT: &str = "loam";

/// Name of the folder that holds level .ron files.
pub const LEVELS_FOLDER: &str = "levels";

/// Name of the tile catalog .ron file.
pub const CATALOG_RON: &str = "catalog.ron";
