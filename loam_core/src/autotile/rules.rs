// loam_core/src/autotile/rules.rs
use crate::grid::grid_pos::GridPos;

/// Neighbor sample order used by every pattern:
/// N, NE, E, SE, S, SW, W, NW (clockwise from north).
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Ground occupancy of the 8 neighbors, in [`NEIGHBOR_OFFSETS`] order.
/// Out-of-grid neighbors count as not ground.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbors(pub [bool; 8]);

impl Neighbors {
    pub fn sample<F>(pos: GridPos, mask: &F) -> Self
    where
        F: Fn(GridPos) -> bool,
    {
        let mut around = [false; 8];
        for (slot, (dx, dy)) in around.iter_mut().zip(NEIGHBOR_OFFSETS) {
            *slot = mask(pos.offset(dx, dy));
        }
        Neighbors(around)
    }

    pub fn north(&self) -> bool {
        self.0[0]
    }

    pub fn south(&self) -> bool {
        self.0[4]
    }
}

/// Requirement on one neighbor direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Req {
    Ground,
    Empty,
    Any,
}

/// Tri-state match over all 8 directions.
#[derive(Clone, Copy, Debug)]
pub struct Pattern(pub [Req; 8]);

impl Pattern {
    /// Pattern constrained on the four cardinals only; corners are
    /// wildcards.
    pub const fn cardinal(n: Req, e: Req, s: Req, w: Req) -> Self {
        Pattern([n, Req::Any, e, Req::Any, s, Req::Any, w, Req::Any])
    }

    pub const fn any() -> Self {
        Pattern([Req::Any; 8])
    }

    pub fn matches(&self, neighbors: &Neighbors) -> bool {
        self.0
            .iter()
            .zip(neighbors.0.iter())
            .all(|(req, ground)| match req {
                Req::Ground => *ground,
                Req::Empty => !*ground,
                Req::Any => true,
            })
    }
}

/// One entry in an ordered rule table. The table is scanned top to bottom
/// and the first match wins, so earlier, more specific rules shadow later,
/// more general ones.
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    pub pattern: Pattern,
    /// Candidate block tiles; one is drawn per application.
    pub blocks: &'static [usize],
}

/// Decoration choices shared by a ruleset.
#[derive(Clone, Copy, Debug)]
pub struct Decoration {
    /// Grass-like tiles appended above an exposed top edge.
    pub grass: &'static [usize],
    /// Index into `grass` that makes an accent eligible.
    pub accent_on: usize,
    /// Accent tile appended when the grass pick hit `accent_on` and the
    /// follow-up roll passes.
    pub accent: usize,
    pub accent_chance: f64,
}

/// An ordered rule table plus its decoration constants. Rulesets share the
/// matching algorithm and differ only in tables and emitted tiles.
#[derive(Clone, Copy, Debug)]
pub struct Ruleset {
    pub name: &'static str,
    pub rules: &'static [Rule],
    pub decoration: Decoration,
}
