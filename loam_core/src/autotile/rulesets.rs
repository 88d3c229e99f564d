// loam_core/src/autotile/rulesets.rs
//
// Builtin rule tables. Indices refer to catalog slots of the matching
// theme sheet; a game registers the sheet so these line up.
use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::autotile::rules::{Decoration, Pattern, Req, Rule, Ruleset};

// Meadow sheet slots.
pub const MEADOW_CAP_LEFT: usize = 0;
pub const MEADOW_CAP: usize = 1;
pub const MEADOW_CAP_ALT: usize = 2;
pub const MEADOW_CAP_RIGHT: usize = 3;
pub const MEADOW_COLUMN: usize = 4;
pub const MEADOW_WALL_LEFT: usize = 5;
pub const MEADOW_WALL_RIGHT: usize = 6;
pub const MEADOW_FILL: usize = 7;
pub const MEADOW_FILL_MOSSY: usize = 8;
pub const MEADOW_BOTTOM: usize = 9;
pub const MEADOW_TUFT: usize = 10;
pub const MEADOW_TUFT_TALL: usize = 11;
pub const MEADOW_FLOWER: usize = 12;

// Cavern sheet slots.
pub const CAVERN_LEDGE: usize = 16;
pub const CAVERN_LEDGE_CRACKED: usize = 17;
pub const CAVERN_RIM_LEFT: usize = 18;
pub const CAVERN_RIM_RIGHT: usize = 19;
pub const CAVERN_ROCK: usize = 20;
pub const CAVERN_ROCK_VEINED: usize = 21;
pub const CAVERN_MOSS: usize = 22;
pub const CAVERN_MOSS_HANGING: usize = 23;
pub const CAVERN_GLOWCAP: usize = 24;

// Ordered most specific to most general; the engine takes the first match.
static MEADOW_RULES: &[Rule] = &[
    // Free-standing column top.
    Rule {
        pattern: Pattern::cardinal(Req::Empty, Req::Empty, Req::Any, Req::Empty),
        blocks: &[MEADOW_COLUMN],
    },
    // Surface corners.
    Rule {
        pattern: Pattern::cardinal(Req::Empty, Req::Ground, Req::Any, Req::Empty),
        blocks: &[MEADOW_CAP_LEFT],
    },
    Rule {
        pattern: Pattern::cardinal(Req::Empty, Req::Empty, Req::Any, Req::Ground),
        blocks: &[MEADOW_CAP_RIGHT],
    },
    // Plain surface run.
    Rule {
        pattern: Pattern::cardinal(Req::Empty, Req::Ground, Req::Any, Req::Ground),
        blocks: &[MEADOW_CAP, MEADOW_CAP_ALT],
    },
    // Vertical faces.
    Rule {
        pattern: Pattern::cardinal(Req::Ground, Req::Ground, Req::Ground, Req::Empty),
        blocks: &[MEADOW_WALL_LEFT],
    },
    Rule {
        pattern: Pattern::cardinal(Req::Ground, Req::Empty, Req::Ground, Req::Ground),
        blocks: &[MEADOW_WALL_RIGHT],
    },
    // Underside of an overhang.
    Rule {
        pattern: Pattern::cardinal(Req::Ground, Req::Any, Req::Empty, Req::Any),
        blocks: &[MEADOW_BOTTOM],
    },
    // Interior.
    Rule {
        pattern: Pattern::any(),
        blocks: &[MEADOW_FILL, MEADOW_FILL_MOSSY],
    },
];

static CAVERN_RULES: &[Rule] = &[
    Rule {
        pattern: Pattern::cardinal(Req::Empty, Req::Ground, Req::Any, Req::Empty),
        blocks: &[CAVERN_RIM_LEFT],
    },
    Rule {
        pattern: Pattern::cardinal(Req::Empty, Req::Empty, Req::Any, Req::Ground),
        blocks: &[CAVERN_RIM_RIGHT],
    },
    Rule {
        pattern: Pattern::cardinal(Req::Empty, Req::Any, Req::Any, Req::Any),
        blocks: &[CAVERN_LEDGE, CAVERN_LEDGE_CRACKED],
    },
    Rule {
        pattern: Pattern::any(),
        blocks: &[CAVERN_ROCK, CAVERN_ROCK_VEINED],
    },
];

pub static MEADOW: Ruleset = Ruleset {
    name: "meadow",
    rules: MEADOW_RULES,
    decoration: Decoration {
        grass: &[MEADOW_TUFT, MEADOW_TUFT_TALL],
        accent_on: 0,
        accent: MEADOW_FLOWER,
        accent_chance: 0.25,
    },
};

pub static CAVERN: Ruleset = Ruleset {
    name: "cavern",
    rules: CAVERN_RULES,
    decoration: Decoration {
        grass: &[CAVERN_MOSS, CAVERN_MOSS_HANGING],
        accent_on: 1,
        accent: CAVERN_GLOWCAP,
        accent_chance: 0.15,
    },
};

/// Builtin rulesets by name.
pub static RULESETS: Lazy<HashMap<&'static str, &'static Ruleset>> =
    Lazy::new(|| HashMap::from([(MEADOW.name, &MEADOW), (CAVERN.name, &CAVERN)]));

pub fn ruleset(name: &str) -> Option<&'static Ruleset> {
    RULESETS.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_rulesets_resolve_by_name() {
        assert_eq!(ruleset("meadow").unwrap().name, "meadow");
        assert_eq!(ruleset("cavern").unwrap().name, "cavern");
        assert!(ruleset("tundra").is_none());
    }

    #[test]
    fn every_rule_offers_at_least_one_block() {
        for set in RULESETS.values() {
            for rule in set.rules {
                assert!(!rule.blocks.is_empty(), "empty rule in {}", set.name);
            }
            assert!(!set.decoration.grass.is_empty());
        }
    }

    #[test]
    fn rule_tables_end_with_a_catch_all() {
        use crate::autotile::rules::Neighbors;
        for set in RULESETS.values() {
            let last = set.rules.last().unwrap();
            assert!(last.pattern.matches(&Neighbors([false; 8])));
            assert!(last.pattern.matches(&Neighbors([true; 8])));
        }
    }
}
