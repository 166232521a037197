//! Terminal renderer.

use std::io::Write;

use gol_core::{Glyphs, Renderer, SinkError};
use gol_types::{Population, WorldSize};

/// ANSI sequence: clear the screen and move the cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Draws each generation as text on a writer, usually stdout.
#[derive(Debug)]
pub struct ConsoleRenderer<W: Write> {
    out: W,
    glyphs: Glyphs,
    clear_screen: bool,
}

impl<W: Write> ConsoleRenderer<W> {
    /// Create a renderer with the default glyph set.
    pub fn new(out: W, clear_screen: bool) -> Self {
        Self {
            out,
            glyphs: Glyphs::default(),
            clear_screen,
        }
    }

    /// Give back the underlying writer.
    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render(
        &mut self,
        _generation: u64,
        population: &Population,
        world_size: WorldSize,
    ) -> Result<(), SinkError> {
        let frame = self.glyphs.frame(population, world_size);
        let write = |out: &mut W| -> std::io::Result<()> {
            if self.clear_screen {
                out.write_all(CLEAR_SCREEN.as_bytes())?;
            }
            out.write_all(frame.as_bytes())?;
            out.flush()
        };
        write(&mut self.out).map_err(|source| SinkError::Render { source })
    }
}
