//! Text frames of a generation.
//!
//! A frame has one line per grid row and one glyph per cell. Coordinates
//! missing from the population render as blanks.

use gol_types::{Cell, CellState, Population, WorldSize};

/// Glyph set used to draw a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    /// Rim cells.
    pub border: char,
    /// Dead interior cells.
    pub dead: char,
    /// Living cells younger than elder age.
    pub alive: char,
    /// Elders.
    pub elder: char,
    /// Prime elders.
    pub prime_elder: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            border: '#',
            dead: ' ',
            alive: 'o',
            elder: 'O',
            prime_elder: '@',
        }
    }
}

impl Glyphs {
    /// Glyph for one cell.
    pub const fn glyph(&self, cell: &Cell) -> char {
        match cell {
            Cell::Border => self.border,
            Cell::Interior(interior) => match interior.state {
                CellState::Dead => self.dead,
                CellState::Alive => self.alive,
                CellState::Elder => self.elder,
                CellState::PrimeElder => self.prime_elder,
            },
        }
    }

    /// Draw a whole generation, rows separated by `\n`, with a trailing
    /// newline after the last row.
    pub fn frame(&self, population: &Population, world_size: WorldSize) -> String {
        let width = usize::try_from(world_size.width()).unwrap_or(0);
        let height = usize::try_from(world_size.height()).unwrap_or(0);
        let mut out = String::with_capacity(width.saturating_add(1).saturating_mul(height));
        for coord in world_size.coordinates() {
            out.push(
                population
                    .get(coord)
                    .map_or(' ', |cell| self.glyph(cell)),
            );
            if world_size.is_last_column(coord) {
                out.push('\n');
            }
        }
        out
    }
}

/// Convenience wrapper: draw `population` with the default glyphs.
pub fn frame(population: &Population, world_size: WorldSize) -> String {
    Glyphs::default().frame(population, world_size)
}
