// loam_core/src/tiles/flags.rs
use bitflags::bitflags;

bitflags! {
    /// Per-tile behaviour flags. Absent catalog entries mean no flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct TileFlags: u32 {
        const WATER       = 1 << 0;
        const ONE_WAY     = 1 << 1;
        const LADDER      = 1 << 2;
        const SLOPE_LEFT  = 1 << 3;
        const SLOPE_RIGHT = 1 << 4;
        const STEPS_LEFT  = 1 << 5;
        const STEPS_RIGHT = 1 << 6;
    }
}
