//! Per-tick statistics log.
//!
//! Each record is appended to the statistics file as one JSON line and
//! mirrored as a `debug!` event, so it also shows up in the diagnostic log
//! when `RUST_LOG=debug` is set.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use gol_core::{GenerationLog, SinkError};
use gol_types::GenerationRecord;
use tracing::debug;

/// Writes statistics records as JSON lines.
#[derive(Debug)]
pub struct StatsFileLog<W: Write> {
    writer: W,
}

impl StatsFileLog<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Log`] if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self, SinkError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| SinkError::Log { source })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> StatsFileLog<W> {
    /// Wrap an existing writer.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Give back the underlying writer.
    #[cfg(test)]
    fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> GenerationLog for StatsFileLog<W> {
    fn record(&mut self, record: &GenerationRecord) -> Result<(), SinkError> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer
            .write_all(b"\n")
            .and_then(|()| self.writer.flush())
            .map_err(|source| SinkError::Log { source })?;

        debug!(
            generation = record.generation,
            population = record.stats.population,
            alive = record.stats.alive,
            elders = record.stats.elders,
            prime_elders = record.stats.prime_elders,
            dead = record.stats.dead,
            "Generation statistics"
        );
        Ok(())
    }
}
