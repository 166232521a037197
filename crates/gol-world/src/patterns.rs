//! Library of named starting patterns.
//!
//! Patterns are drawn as text rows (`O` = live, anything else = dead) and
//! placed in the middle of the world when a population is built. Cells that
//! would land on the rim or outside the grid are dropped.

use std::collections::BTreeSet;

use gol_types::{Coordinate, WorldSize};

/// Set of live coordinates produced by placing a pattern in a world.
pub type PatternCells = BTreeSet<Coordinate>;

/// A named arrangement of live cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    /// Canonical name, lower snake case.
    pub name: &'static str,
    /// Text drawing of the pattern, one string per row.
    pub rows: &'static [&'static str],
}

impl Pattern {
    /// Number of rows in the drawing.
    pub fn height(&self) -> u32 {
        u32::try_from(self.rows.len()).unwrap_or(u32::MAX)
    }

    /// Width of the widest row in the drawing.
    pub fn width(&self) -> u32 {
        self.rows
            .iter()
            .map(|row| u32::try_from(row.chars().count()).unwrap_or(u32::MAX))
            .max()
            .unwrap_or(0)
    }

    /// Live cells relative to the top-left corner of the drawing.
    pub fn offsets(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.rows.iter().zip(0_u32..).flat_map(|(line, row)| {
            line.chars()
                .zip(0_u32..)
                .filter(|(ch, _)| *ch == 'O')
                .map(move |(_, col)| Coordinate::new(row, col))
        })
    }

    /// Centre the pattern in the world and return its live interior cells.
    pub fn place(&self, world_size: WorldSize) -> PatternCells {
        let top = world_size.height().saturating_sub(self.height()) / 2;
        let left = world_size.width().saturating_sub(self.width()) / 2;
        self.offsets()
            .filter_map(|offset| {
                let coord = Coordinate::new(
                    top.checked_add(offset.row)?,
                    left.checked_add(offset.col)?,
                );
                (world_size.contains(coord) && !world_size.is_rim(coord)).then_some(coord)
            })
            .collect()
    }
}

/// Every pattern that can be requested by name.
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "block",
        rows: &["OO", "OO"],
    },
    Pattern {
        name: "blinker",
        rows: &["OOO"],
    },
    Pattern {
        name: "toad",
        rows: &[".OOO", "OOO."],
    },
    Pattern {
        name: "beacon",
        rows: &["OO..", "OO..", "..OO", "..OO"],
    },
    Pattern {
        name: "glider",
        rows: &[".O.", "..O", "OOO"],
    },
    Pattern {
        name: "lwss",
        rows: &[".O..O", "O....", "O...O", "OOOO."],
    },
    Pattern {
        name: "r_pentomino",
        rows: &[".OO", "OO.", ".O."],
    },
    Pattern {
        name: "pulsar",
        rows: &[
            "..OOO...OOO..",
            ".............",
            "O....O.O....O",
            "O....O.O....O",
            "O....O.O....O",
            "..OOO...OOO..",
            ".............",
            "..OOO...OOO..",
            "O....O.O....O",
            "O....O.O....O",
            "O....O.O....O",
            ".............",
            "..OOO...OOO..",
        ],
    },
    Pattern {
        name: "gosper_glider_gun",
        rows: &[
            "........................O...........",
            "......................O.O...........",
            "............OO......OO............OO",
            "...........O...O....OO............OO",
            "OO........O.....O...OO..............",
            "OO........O...O.OO....O.O...........",
            "..........O.....O.......O...........",
            "...........O...O....................",
            "............OO......................",
        ],
    },
];

/// Look up a pattern by name.
///
/// Matching ignores case, `-`, `_` and spaces, so `"R-pentomino"`,
/// `"r_pentomino"` and `"RPentomino"` all resolve to the same pattern.
pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    let wanted = normalize(name);
    PATTERNS.iter().find(|pattern| normalize(pattern.name) == wanted)
}

/// Names of all known patterns, in library order.
pub fn pattern_names() -> impl Iterator<Item = &'static str> {
    PATTERNS.iter().map(|pattern| pattern.name)
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|ch| !matches!(ch, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(width: u32, height: u32) -> WorldSize {
        WorldSize::new(width, height).unwrap_or_default()
    }

    #[test]
    fn lookup_is_forgiving() {
        assert_eq!(find_pattern("R-pentomino").map(|p| p.name), Some("r_pentomino"));
        assert_eq!(find_pattern("GLIDER").map(|p| p.name), Some("glider"));
        assert_eq!(
            find_pattern("gosper glider gun").map(|p| p.name),
            Some("gosper_glider_gun")
        );
        assert!(find_pattern("not-a-pattern").is_none());
    }

    #[test]
    fn cell_counts() {
        let count = |name: &str| find_pattern(name).map(|p| p.offsets().count());
        assert_eq!(count("block"), Some(4));
        assert_eq!(count("blinker"), Some(3));
        assert_eq!(count("glider"), Some(5));
        assert_eq!(count("lwss"), Some(9));
        assert_eq!(count("pulsar"), Some(48));
        assert_eq!(count("gosper_glider_gun"), Some(36));
    }

    #[test]
    fn blinker_is_centred() {
        let cells = find_pattern("blinker").map(|p| p.place(size(7, 7)));
        let expected: PatternCells = [
            Coordinate::new(3, 2),
            Coordinate::new(3, 3),
            Coordinate::new(3, 4),
        ]
        .into_iter()
        .collect();
        assert_eq!(cells, Some(expected));
    }

    #[test]
    fn placement_never_touches_rim() {
        let world = size(20, 6);
        for pattern in PATTERNS {
            for coord in pattern.place(world) {
                assert!(world.contains(coord), "{} placed {coord} outside", pattern.name);
                assert!(!world.is_rim(coord), "{} placed {coord} on rim", pattern.name);
            }
        }
    }

    #[test]
    fn dimensions() {
        let gun = find_pattern("gosper_glider_gun");
        assert_eq!(gun.map(Pattern::width), Some(36));
        assert_eq!(gun.map(Pattern::height), Some(9));
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<&str> = pattern_names().collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
