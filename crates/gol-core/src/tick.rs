//! Transition engine: computes generation N+1 from generation N.
//!
//! A tick reads the current population as an immutable snapshot and builds
//! a brand new one. No cell ever observes an already-updated neighbour, so
//! the order in which cells are visited cannot change the result.
//!
//! Per interior cell:
//!
//! 1. Count living neighbours (interior, state not dead). Rim neighbours
//!    never count.
//! 2. A living cell survives with 2 or 3 living neighbours; a dead cell is
//!    born with exactly 3. Elders and prime elders are living like any
//!    other living cell.
//! 3. A cell alive after the tick has its age bumped by one (a cell with no
//!    recorded age starts at 1) and is classified by that age. Any other
//!    cell is dead with age 0.
//!
//! Neighbour lists are carried forward untouched.

use gol_types::{Cell, CellState, Coordinate, InteriorCell, Neighbourhood, Population};

/// Errors that can occur during a tick.
///
/// Both indicate a population that does not match its own topology
/// (usually a seed file built for a different world size). Neither can be
/// recovered from: the run must stop.
#[derive(Debug, thiserror::Error)]
pub enum TickError {
    /// A neighbour coordinate is not present in the population.
    #[error(
        "topology mismatch: cell {cell} lists neighbour {neighbour}, which is not in the \
         population (was the seed built for a different world size?)"
    )]
    MissingNeighbour {
        /// The cell being updated.
        cell: Coordinate,
        /// The neighbour that could not be found.
        neighbour: Coordinate,
    },

    /// A cell's age would exceed `u32::MAX`.
    #[error("age counter overflow at cell {cell}")]
    AgeOverflow {
        /// The cell whose age overflowed.
        cell: Coordinate,
    },
}

/// Compute the next generation.
///
/// # Errors
///
/// Returns [`TickError::MissingNeighbour`] if any interior cell references a
/// coordinate absent from `current`, or [`TickError::AgeOverflow`] if a
/// cell's age cannot be incremented.
pub fn step(current: &Population) -> Result<Population, TickError> {
    current
        .iter()
        .map(|(coord, cell)| Ok((*coord, next_cell(*coord, cell, current)?)))
        .collect()
}

/// Compute the next state of one cell from the current snapshot.
///
/// # Errors
///
/// See [`step`].
pub fn next_cell(coord: Coordinate, cell: &Cell, current: &Population) -> Result<Cell, TickError> {
    match cell {
        Cell::Border => Ok(Cell::Border),
        Cell::Interior(interior) => next_interior(coord, interior, current).map(Cell::Interior),
    }
}

/// Count living interior cells among `neighbours`.
///
/// # Errors
///
/// Returns [`TickError::MissingNeighbour`] on the first neighbour that is
/// not in `current`.
pub fn count_living_neighbours(
    coord: Coordinate,
    neighbours: &Neighbourhood,
    current: &Population,
) -> Result<u8, TickError> {
    let mut living: u8 = 0;
    for neighbour in neighbours {
        let cell = current
            .get(*neighbour)
            .ok_or(TickError::MissingNeighbour {
                cell: coord,
                neighbour: *neighbour,
            })?;
        if cell.is_living() {
            // At most 8 neighbours, cannot overflow.
            living = living.saturating_add(1);
        }
    }
    Ok(living)
}

/// The survival rule: whether a cell in `state` with `living` live
/// neighbours is alive in the next generation.
pub const fn survives(state: CellState, living: u8) -> bool {
    if state.is_living() {
        matches!(living, 2 | 3)
    } else {
        living == 3
    }
}

fn next_interior(
    coord: Coordinate,
    cell: &InteriorCell,
    current: &Population,
) -> Result<InteriorCell, TickError> {
    let living = count_living_neighbours(coord, &cell.neighbours, current)?;

    if !survives(cell.state, living) {
        return Ok(InteriorCell::dead(cell.neighbours));
    }

    let age = match cell.age {
        Some(age) => age
            .checked_add(1)
            .ok_or(TickError::AgeOverflow { cell: coord })?,
        None => 1,
    };

    Ok(InteriorCell {
        state: CellState::from_age(age),
        age: Some(age),
        neighbours: cell.neighbours,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use gol_types::WorldSize;
    use gol_world::population;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn size(width: u32, height: u32) -> WorldSize {
        WorldSize::new(width, height).unwrap_or_default()
    }

    fn with_live(world: WorldSize, live: &[(u32, u32)]) -> Population {
        let cells: BTreeSet<Coordinate> = live
            .iter()
            .map(|&(row, col)| Coordinate::new(row, col))
            .collect();
        population::build_from_pattern(world, &cells)
    }

    fn living(pop: &Population) -> BTreeSet<Coordinate> {
        pop.living().collect()
    }

    fn coords(list: &[(u32, u32)]) -> BTreeSet<Coordinate> {
        list.iter().map(|&(r, c)| Coordinate::new(r, c)).collect()
    }

    fn interior(pop: &Population, row: u32, col: u32) -> Option<InteriorCell> {
        pop.get(Coordinate::new(row, col))
            .and_then(Cell::as_interior)
            .copied()
    }

    #[test]
    fn survival_rule_table() {
        for living in 0..=8 {
            let expected_alive = matches!(living, 2 | 3);
            assert_eq!(survives(CellState::Alive, living), expected_alive, "alive {living}");
            assert_eq!(survives(CellState::Elder, living), expected_alive, "elder {living}");
            assert_eq!(
                survives(CellState::PrimeElder, living),
                expected_alive,
                "prime {living}"
            );
            assert_eq!(survives(CellState::Dead, living), living == 3, "dead {living}");
        }
    }

    #[test]
    fn isolated_cell_dies() {
        let world = size(7, 7);
        let next = step(&with_live(world, &[(3, 3)]));
        assert!(next.is_ok());
        let next = next.unwrap_or_default();
        assert!(living(&next).is_empty());
        assert_eq!(interior(&next, 3, 3).and_then(|c| c.age), Some(0));
    }

    #[test]
    fn cell_with_one_neighbour_dies() {
        let world = size(7, 7);
        let next = step(&with_live(world, &[(3, 3), (3, 4)])).unwrap_or_default();
        assert!(living(&next).is_empty());
    }

    #[test]
    fn overcrowded_cell_dies() {
        // Centre of a plus sign has 4 living neighbours.
        let world = size(7, 7);
        let next = step(&with_live(world, &[(3, 3), (2, 3), (4, 3), (3, 2), (3, 4)]))
            .unwrap_or_default();
        assert_eq!(
            interior(&next, 3, 3).map(|c| c.state),
            Some(CellState::Dead)
        );
    }

    #[test]
    fn dead_cell_with_three_neighbours_is_born() {
        let world = size(7, 7);
        let next = step(&with_live(world, &[(2, 2), (2, 3), (2, 4)])).unwrap_or_default();
        let born = interior(&next, 3, 3);
        assert_eq!(born.map(|c| c.state), Some(CellState::Alive));
        assert_eq!(born.and_then(|c| c.age), Some(1));
    }

    #[test]
    fn block_is_still_life() {
        let world = size(6, 6);
        let block = [(2, 2), (2, 3), (3, 2), (3, 3)];
        let next = step(&with_live(world, &block)).unwrap_or_default();
        assert_eq!(living(&next), coords(&block));
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let world = size(7, 7);
        let horizontal = [(3, 2), (3, 3), (3, 4)];
        let vertical = [(2, 3), (3, 3), (4, 3)];

        let first = step(&with_live(world, &horizontal)).unwrap_or_default();
        assert_eq!(living(&first), coords(&vertical));

        let second = step(&first).unwrap_or_default();
        assert_eq!(living(&second), coords(&horizontal));
    }

    #[test]
    fn elders_age_out_of_a_block() {
        // A block never changes, so its cells age one tick at a time.
        let world = size(6, 6);
        let mut pop = with_live(world, &[(2, 2), (2, 3), (3, 2), (3, 3)]);
        for k in 1..=12_u32 {
            pop = step(&pop).unwrap_or_default();
            let cell = interior(&pop, 2, 2);
            assert_eq!(cell.and_then(|c| c.age), Some(k));
            let expected = match k {
                1..=4 => CellState::Alive,
                5..=9 => CellState::Elder,
                _ => CellState::PrimeElder,
            };
            assert_eq!(cell.map(|c| c.state), Some(expected), "after {k} ticks");
        }
    }

    #[test]
    fn death_resets_age_and_rebirth_starts_at_one() {
        let world = size(7, 7);
        // Blinker centre ends survives, the ends die and are reborn.
        let mut pop = with_live(world, &[(3, 2), (3, 3), (3, 4)]);
        pop = step(&pop).unwrap_or_default();
        assert_eq!(interior(&pop, 3, 2).and_then(|c| c.age), Some(0));
        assert_eq!(interior(&pop, 3, 3).and_then(|c| c.age), Some(1));
        pop = step(&pop).unwrap_or_default();
        assert_eq!(interior(&pop, 3, 2).and_then(|c| c.age), Some(1));
        assert_eq!(interior(&pop, 3, 3).and_then(|c| c.age), Some(2));
        assert_eq!(interior(&pop, 2, 3).and_then(|c| c.age), Some(0));
    }

    #[test]
    fn unaged_cell_starts_at_one() {
        let world = size(6, 6);
        let block = [(2, 2), (2, 3), (3, 2), (3, 3)];
        let mut pop = with_live(world, &block);
        let target = Coordinate::new(2, 2);
        if let Some(cell) = interior(&pop, 2, 2) {
            pop.insert(
                target,
                Cell::Interior(InteriorCell {
                    age: None,
                    state: CellState::Elder,
                    ..cell
                }),
            );
        }
        let next = step(&pop).unwrap_or_default();
        let cell = interior(&next, 2, 2);
        assert_eq!(cell.and_then(|c| c.age), Some(1));
        assert_eq!(cell.map(|c| c.state), Some(CellState::Alive));
    }

    #[test]
    fn border_is_invariant_and_never_counts() {
        let world = size(8, 6);
        let mut pop = population::build_random(world, &mut StdRng::seed_from_u64(11));
        for _ in 0..10 {
            pop = step(&pop).unwrap_or_default();
            for (coord, cell) in &pop {
                assert_eq!(cell.is_border(), world.is_rim(*coord));
            }
            assert_eq!(pop.stats().population, 24);
        }
    }

    #[test]
    fn empty_grid_stays_empty() {
        let world = size(10, 10);
        let mut pop = with_live(world, &[]);
        for _ in 0..20 {
            pop = step(&pop).unwrap_or_default();
            assert_eq!(pop.stats().alive, 0);
        }
    }

    #[test]
    fn iteration_order_does_not_matter() {
        let world = size(12, 10);
        let pop = population::build_random(world, &mut StdRng::seed_from_u64(3));
        let forward = step(&pop).unwrap_or_default();

        let mut reversed: Vec<(Coordinate, Cell)> = pop.iter().map(|(c, cell)| (*c, *cell)).collect();
        reversed.reverse();
        let backward: Population = reversed
            .into_iter()
            .map(|(coord, cell)| (coord, next_cell(coord, &cell, &pop).unwrap_or(Cell::Border)))
            .collect();

        assert_eq!(forward, backward);
    }

    #[test]
    fn missing_neighbour_is_fatal() {
        let world = size(5, 5);
        let mut pop = with_live(world, &[(2, 2)]);
        // Drop a rim cell that (1, 1) points at.
        let truncated: Population = pop
            .iter()
            .filter(|(coord, _)| **coord != Coordinate::new(0, 0))
            .map(|(c, cell)| (*c, *cell))
            .collect();
        pop = truncated;
        let result = step(&pop);
        assert!(matches!(
            result,
            Err(TickError::MissingNeighbour { cell, neighbour })
                if cell == Coordinate::new(1, 1) && neighbour == Coordinate::new(0, 0)
        ));
    }

    #[test]
    fn age_overflow_is_reported() {
        let world = size(6, 6);
        let mut pop = with_live(world, &[(2, 2), (2, 3), (3, 2), (3, 3)]);
        if let Some(cell) = interior(&pop, 2, 2) {
            pop.insert(
                Coordinate::new(2, 2),
                Cell::Interior(InteriorCell {
                    age: Some(u32::MAX),
                    ..cell
                }),
            );
        }
        assert!(matches!(step(&pop), Err(TickError::AgeOverflow { .. })));
    }
}
