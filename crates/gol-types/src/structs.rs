//! Core entity structs: cells, the population map, and per-tick statistics.

use std::collections::BTreeMap;
use std::collections::btree_map;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::coords::Coordinate;
use crate::enums::CellState;

/// The eight Moore-neighbourhood coordinates of an interior cell.
pub type Neighbourhood = [Coordinate; 8];

/// An interior (non-rim) cell.
///
/// The neighbour list is fixed when the population is built and copied
/// unchanged into every later generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteriorCell {
    /// Current state.
    pub state: CellState,
    /// Consecutive ticks survived. `None` when the cell came from a seed
    /// that carried no age; such a cell is treated as newly born the first
    /// time it survives.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Moore neighbourhood, possibly including rim coordinates.
    pub neighbours: Neighbourhood,
}

impl InteriorCell {
    /// A dead cell with age zero.
    pub const fn dead(neighbours: Neighbourhood) -> Self {
        Self {
            state: CellState::Dead,
            age: Some(0),
            neighbours,
        }
    }

    /// A freshly seeded living cell with age zero.
    pub const fn alive(neighbours: Neighbourhood) -> Self {
        Self {
            state: CellState::Alive,
            age: Some(0),
            neighbours,
        }
    }
}

/// A cell in the population map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Outer-ring sentinel. Never changes and never counts as living.
    Border,
    /// A cell subject to the survival rule.
    Interior(InteriorCell),
}

impl Cell {
    /// Whether this is a rim cell.
    pub const fn is_border(&self) -> bool {
        matches!(self, Self::Border)
    }

    /// Whether this is an interior cell in a living state.
    pub const fn is_living(&self) -> bool {
        match self {
            Self::Border => false,
            Self::Interior(cell) => cell.state.is_living(),
        }
    }

    /// State of an interior cell; `None` for the rim.
    pub const fn state(&self) -> Option<CellState> {
        match self {
            Self::Border => None,
            Self::Interior(cell) => Some(cell.state),
        }
    }

    /// Borrow the interior payload, if any.
    pub const fn as_interior(&self) -> Option<&InteriorCell> {
        match self {
            Self::Border => None,
            Self::Interior(cell) => Some(cell),
        }
    }
}

impl From<Option<InteriorCell>> for Cell {
    fn from(cell: Option<InteriorCell>) -> Self {
        cell.map_or(Self::Border, Self::Interior)
    }
}

impl From<Cell> for Option<InteriorCell> {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Border => None,
            Cell::Interior(interior) => Some(interior),
        }
    }
}

/// One generation of the grid: every coordinate mapped to its cell.
///
/// Keys are ordered row-major, so iteration follows render order. A
/// population is assembled once and then only read; each tick builds a
/// fresh one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Population {
    cells: BTreeMap<Coordinate, Cell>,
}

impl Population {
    /// Create an empty population.
    pub const fn new() -> Self {
        Self {
            cells: BTreeMap::new(),
        }
    }

    /// Insert a cell, returning the previous cell at that coordinate.
    pub fn insert(&mut self, coord: Coordinate, cell: Cell) -> Option<Cell> {
        self.cells.insert(coord, cell)
    }

    /// Look up the cell at a coordinate.
    pub fn get(&self, coord: Coordinate) -> Option<&Cell> {
        self.cells.get(&coord)
    }

    /// Number of cells, rim included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the map holds no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over `(coordinate, cell)` pairs in row-major order.
    pub fn iter(&self) -> btree_map::Iter<'_, Coordinate, Cell> {
        self.cells.iter()
    }

    /// Coordinates of every living interior cell.
    pub fn living(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells
            .iter()
            .filter(|(_, cell)| cell.is_living())
            .map(|(coord, _)| *coord)
    }

    /// Count non-rim cells by state.
    pub fn stats(&self) -> PopulationStats {
        self.cells
            .values()
            .filter_map(Cell::state)
            .fold(PopulationStats::default(), PopulationStats::with_cell)
    }
}

impl FromIterator<(Coordinate, Cell)> for Population {
    fn from_iter<I: IntoIterator<Item = (Coordinate, Cell)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = (&'a Coordinate, &'a Cell);
    type IntoIter = btree_map::Iter<'a, Coordinate, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Census of the non-rim cells of one generation.
///
/// `alive` counts every living cell, so `elders` and `prime_elders` are
/// subsets of it and `alive + dead == population`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationStats {
    /// Number of interior cells.
    pub population: u64,
    /// Living cells of any age.
    pub alive: u64,
    /// Living cells in the [`CellState::Elder`] state.
    pub elders: u64,
    /// Living cells in the [`CellState::PrimeElder`] state.
    pub prime_elders: u64,
    /// Dead interior cells.
    pub dead: u64,
}

impl PopulationStats {
    /// Add one interior cell with the given state to the census.
    #[must_use]
    pub const fn with_cell(mut self, state: CellState) -> Self {
        self.population = self.population.saturating_add(1);
        match state {
            CellState::Dead => self.dead = self.dead.saturating_add(1),
            CellState::Alive => self.alive = self.alive.saturating_add(1),
            CellState::Elder => {
                self.alive = self.alive.saturating_add(1);
                self.elders = self.elders.saturating_add(1);
            }
            CellState::PrimeElder => {
                self.alive = self.alive.saturating_add(1);
                self.prime_elders = self.prime_elders.saturating_add(1);
            }
        }
        self
    }
}

/// The statistics line emitted once per tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Zero-based index of the generation the statistics describe.
    pub generation: u64,
    /// Census of that generation.
    #[serde(flatten)]
    pub stats: PopulationStats,
    /// Wall-clock time the record was produced.
    pub recorded_at: DateTime<Utc>,
}

impl GenerationRecord {
    /// Stamp a census with the current time.
    pub fn now(generation: u64, stats: PopulationStats) -> Self {
        Self {
            generation,
            stats,
            recorded_at: Utc::now(),
        }
    }
}
