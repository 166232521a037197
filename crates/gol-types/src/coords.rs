//! Grid coordinates and world dimensions.
//!
//! A [`Coordinate`] is a `(row, col)` pair and orders row-major, so any
//! ordered map keyed by coordinates iterates in the same order the grid is
//! drawn. A [`WorldSize`] is validated once and never changes during a run.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoordinateError, WorldSizeError};

/// A `(row, col)` position in the grid.
///
/// Serializes as a two-element array `[row, col]`, which is also the shape
/// used for neighbour lists in seed files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct Coordinate {
    /// Zero-based row index (vertical axis).
    pub row: u32,
    /// Zero-based column index (horizontal axis).
    pub col: u32,
}

impl Coordinate {
    /// Create a coordinate from a row and a column.
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl From<(u32, u32)> for Coordinate {
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

impl From<Coordinate> for (u32, u32) {
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    /// Parse the tuple form `"(row, col)"`. Surrounding whitespace and
    /// whitespace around either number are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CoordinateError::Malformed {
            input: s.to_owned(),
        };

        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(malformed)?;
        let (row, col) = inner.split_once(',').ok_or_else(malformed)?;
        let row = row.trim().parse::<u32>().map_err(|_err| malformed())?;
        let col = col.trim().parse::<u32>().map_err(|_err| malformed())?;
        Ok(Self { row, col })
    }
}

/// Dimensions of the world: `width` columns by `height` rows.
///
/// Both dimensions are at least 1. Serializes as `[width, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u32; 2]", into = "[u32; 2]")]
pub struct WorldSize {
    width: u32,
    height: u32,
}

impl WorldSize {
    /// Width used when no valid size is supplied.
    pub const DEFAULT_WIDTH: u32 = 80;

    /// Height used when no valid size is supplied.
    pub const DEFAULT_HEIGHT: u32 = 40;

    /// Create a world size.
    ///
    /// # Errors
    ///
    /// Returns [`WorldSizeError::NonPositive`] if either dimension is zero.
    pub const fn new(width: u32, height: u32) -> Result<Self, WorldSizeError> {
        if width == 0 {
            return Err(WorldSizeError::NonPositive { value: 0 });
        }
        if height == 0 {
            return Err(WorldSizeError::NonPositive { value: 0 });
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub const fn width(self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub const fn height(self) -> u32 {
        self.height
    }

    /// Whether the coordinate lies inside `[0, height) x [0, width)`.
    pub const fn contains(self, coord: Coordinate) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    /// Whether the coordinate sits on the outer ring of the grid.
    ///
    /// The rim is row 0, row `height - 1`, column 0 and column `width - 1`.
    pub const fn is_rim(self, coord: Coordinate) -> bool {
        coord.row == 0
            || coord.col == 0
            || coord.row == self.height.saturating_sub(1)
            || coord.col == self.width.saturating_sub(1)
    }

    /// Whether the column is the last one in its row (a line break follows
    /// it when rendering).
    pub const fn is_last_column(self, coord: Coordinate) -> bool {
        coord.col == self.width.saturating_sub(1)
    }

    /// Total number of cells, rim included.
    pub fn cell_count(self) -> u64 {
        u64::from(self.width).saturating_mul(u64::from(self.height))
    }

    /// Iterate over every coordinate in row-major order.
    pub fn coordinates(self) -> impl Iterator<Item = Coordinate> {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Coordinate { row, col }))
    }
}

impl Default for WorldSize {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        }
    }
}

impl fmt::Display for WorldSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl TryFrom<[u32; 2]> for WorldSize {
    type Error = WorldSizeError;

    fn try_from([width, height]: [u32; 2]) -> Result<Self, Self::Error> {
        Self::new(width, height)
    }
}

impl From<WorldSize> for [u32; 2] {
    fn from(size: WorldSize) -> Self {
        [size.width, size.height]
    }
}

impl FromStr for WorldSize {
    type Err = WorldSizeError;

    /// Parse the `"<width>x<height>"` form, e.g. `"80x40"`.
    ///
    /// Tokens are checked in order (width first), so the reported error
    /// names the first offending token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split('x').collect();
        let [width, height] = tokens.as_slice() else {
            return Err(WorldSizeError::WrongTokenCount {
                input: s.to_owned(),
            });
        };
        let width = parse_dimension(s, width)?;
        let height = parse_dimension(s, height)?;
        Self::new(width, height)
    }
}

/// Parse one side of a `WxH` string into a positive dimension.
fn parse_dimension(input: &str, token: &str) -> Result<u32, WorldSizeError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(WorldSizeError::EmptyToken {
            input: input.to_owned(),
        });
    }
    let value = token
        .parse::<i64>()
        .map_err(|_err| WorldSizeError::NotAnInteger {
            token: token.to_owned(),
        })?;
    if value < 1 {
        return Err(WorldSizeError::NonPositive { value });
    }
    u32::try_from(value).map_err(|_err| WorldSizeError::TooLarge { value })
}
