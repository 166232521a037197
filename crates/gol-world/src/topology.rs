//! Moore-neighbourhood topology.
//!
//! Neighbour lists are computed once per interior cell when a population is
//! built and never recomputed: the grid cannot resize during a run.

use gol_types::{Coordinate, Neighbourhood};

/// Row and column offsets of the eight neighbours, in NW, N, NE, W, E, SW,
/// S, SE order.
const OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The eight coordinates adjacent to `coord` (cardinal and diagonal).
///
/// No bounds checking: only call this for interior coordinates of a grid
/// whose rim is at least one cell thick. A rim coordinate wraps around
/// `u32` and yields neighbours that no population contains.
pub fn neighbours(coord: Coordinate) -> Neighbourhood {
    OFFSETS.map(|(d_row, d_col)| {
        Coordinate::new(
            coord.row.wrapping_add_signed(d_row),
            coord.col.wrapping_add_signed(d_col),
        )
    })
}
