//! Building the first generation.
//!
//! Every coordinate of the world gets a cell: the outer ring becomes
//! [`Cell::Border`], everything else an interior cell with its neighbour
//! list computed up front. Interior cells start either from a placed
//! pattern or from a random roll.

use gol_types::{Cell, Coordinate, InteriorCell, Population, WorldSize};
use rand::Rng;

use crate::patterns::PatternCells;
use crate::topology;

/// Upper bound (inclusive) of the random roll for a procedural cell.
const SPAWN_ROLL_MAX: u32 = 21;

/// A roll at or above this value makes the cell start alive.
const SPAWN_ROLL_ALIVE: u32 = 15;

/// Build a population for `world_size`.
///
/// With a pattern, exactly the pattern's interior cells start alive. An
/// empty pattern set yields an all-dead grid. Without a pattern, each
/// interior cell starts alive when a uniform roll in `0..=21` is at least
/// 15. All interior cells start with age zero.
pub fn build(world_size: WorldSize, pattern: Option<&PatternCells>, rng: &mut impl Rng) -> Population {
    match pattern {
        Some(cells) => build_from_pattern(world_size, cells),
        None => build_random(world_size, rng),
    }
}

/// Build a population where each interior cell is alive with a fixed
/// random chance.
pub fn build_random(world_size: WorldSize, rng: &mut impl Rng) -> Population {
    populate(world_size, |_| {
        rng.random_range(0..=SPAWN_ROLL_MAX) >= SPAWN_ROLL_ALIVE
    })
}

/// Build a population where exactly the given coordinates start alive.
pub fn build_from_pattern(world_size: WorldSize, cells: &PatternCells) -> Population {
    populate(world_size, |coord| cells.contains(&coord))
}

fn populate(world_size: WorldSize, mut starts_alive: impl FnMut(Coordinate) -> bool) -> Population {
    world_size
        .coordinates()
        .map(|coord| {
            let cell = if world_size.is_rim(coord) {
                Cell::Border
            } else {
                let neighbours = topology::neighbours(coord);
                if starts_alive(coord) {
                    Cell::Interior(InteriorCell::alive(neighbours))
                } else {
                    Cell::Interior(InteriorCell::dead(neighbours))
                }
            };
            (coord, cell)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use gol_types::CellState;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn size(width: u32, height: u32) -> WorldSize {
        WorldSize::new(width, height).unwrap_or_default()
    }

    #[test]
    fn map_is_total_over_world() {
        let world = size(6, 4);
        let mut rng = StdRng::seed_from_u64(1);
        let pop = build(world, None, &mut rng);
        assert_eq!(pop.len(), 24);
        for coord in world.coordinates() {
            assert!(pop.get(coord).is_some(), "missing {coord}");
        }
    }

    #[test]
    fn rim_is_border_and_interior_is_not() {
        let world = size(6, 5);
        let mut rng = StdRng::seed_from_u64(2);
        let pop = build(world, None, &mut rng);
        for (coord, cell) in &pop {
            assert_eq!(cell.is_border(), world.is_rim(*coord), "at {coord}");
        }
    }

    #[test]
    fn interior_cells_carry_their_topology() {
        let world = size(5, 5);
        let pop = build_from_pattern(world, &PatternCells::new());
        let cell = pop.get(Coordinate::new(2, 2)).and_then(Cell::as_interior);
        assert_eq!(
            cell.map(|c| c.neighbours),
            Some(topology::neighbours(Coordinate::new(2, 2)))
        );
        assert_eq!(cell.and_then(|c| c.age), Some(0));
    }

    #[test]
    fn pattern_cells_start_alive() {
        let world = size(7, 7);
        let cells: PatternCells = [Coordinate::new(3, 2), Coordinate::new(3, 3)]
            .into_iter()
            .collect();
        let mut rng = StdRng::seed_from_u64(3);
        let pop = build(world, Some(&cells), &mut rng);
        let living: PatternCells = pop.living().collect();
        assert_eq!(living, cells);
    }

    #[test]
    fn empty_pattern_is_all_dead() {
        let world = size(8, 8);
        let mut rng = StdRng::seed_from_u64(4);
        let pop = build(world, Some(&PatternCells::new()), &mut rng);
        assert_eq!(pop.stats().alive, 0);
        assert_eq!(pop.stats().population, 36);
    }

    #[test]
    fn random_population_is_reproducible_and_roughly_a_third_alive() {
        let world = size(60, 60);
        let a = build_random(world, &mut StdRng::seed_from_u64(42));
        let b = build_random(world, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);

        let stats = a.stats();
        // 7 of 22 rolls are alive; allow a generous band.
        assert!(stats.alive > stats.population / 5, "{stats:?}");
        assert!(stats.alive < stats.population / 2, "{stats:?}");
        for cell in a.iter().filter_map(|(_, cell)| cell.state()) {
            assert!(matches!(cell, CellState::Alive | CellState::Dead));
        }
    }

    #[test]
    fn tiny_world_is_all_rim() {
        let world = size(2, 2);
        let pop = build_random(world, &mut StdRng::seed_from_u64(5));
        assert_eq!(pop.len(), 4);
        assert_eq!(pop.stats().population, 0);
    }
}
