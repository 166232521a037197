//! Output seams of the simulation driver.
//!
//! The driver hands every generation to a [`Renderer`] and every statistics
//! record to a [`GenerationLog`]. Console and file implementations live in
//! the binary; the no-op and in-memory ones here serve headless runs and
//! tests.

use gol_types::{GenerationRecord, Population, WorldSize};

/// Errors raised by renderers and statistics logs.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// Writing a frame failed.
    #[error("failed to render frame: {source}")]
    Render {
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Writing a statistics record failed.
    #[error("failed to write statistics record: {source}")]
    Log {
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Serializing a statistics record failed.
    #[error("failed to encode statistics record: {source}")]
    Encode {
        /// The underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

/// Draws one generation.
pub trait Renderer {
    /// Called once per tick, before the transition, with the generation
    /// about to be replaced.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Render`] if output fails.
    fn render(
        &mut self,
        generation: u64,
        population: &Population,
        world_size: WorldSize,
    ) -> Result<(), SinkError>;
}

/// Receives one statistics record per tick.
pub trait GenerationLog {
    /// Append a record.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] if the record cannot be written.
    fn record(&mut self, record: &GenerationRecord) -> Result<(), SinkError>;
}

/// A renderer that draws nothing, for headless runs.
#[derive(Debug, Default)]
pub struct NoOpRenderer;

impl Renderer for NoOpRenderer {
    fn render(&mut self, _: u64, _: &Population, _: WorldSize) -> Result<(), SinkError> {
        Ok(())
    }
}

/// A statistics log that keeps every record in memory.
#[derive(Debug, Default)]
pub struct MemoryLog {
    /// Records in the order they were received.
    pub records: Vec<GenerationRecord>,
}

impl GenerationLog for MemoryLog {
    fn record(&mut self, record: &GenerationRecord) -> Result<(), SinkError> {
        self.records.push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use gol_types::PopulationStats;

    use super::*;

    #[test]
    fn memory_log_keeps_order() {
        let mut log = MemoryLog::default();
        for generation in 0..3 {
            let result = log.record(&GenerationRecord::now(generation, PopulationStats::default()));
            assert!(result.is_ok());
        }
        let generations: Vec<u64> = log.records.iter().map(|r| r.generation).collect();
        assert_eq!(generations, vec![0, 1, 2]);
    }

    #[test]
    fn noop_renderer_accepts_anything() {
        let mut renderer = NoOpRenderer;
        assert!(
            renderer
                .render(0, &Population::new(), WorldSize::default())
                .is_ok()
        );
    }
}
