//! Error types for the `gol` binary.
//!
//! Wraps the library errors that can end a run. Seed-source problems never
//! show up here: they are recovered from during startup.

use gol_core::{ConfigError, RunnerError, SinkError};
use gol_world::SeedError;

/// Errors that stop the binary with a non-zero exit status.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The configuration file could not be read or parsed.
    #[error("configuration error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// The statistics log could not be opened.
    #[error("statistics log unavailable: {source}")]
    Sink {
        /// The underlying sink error.
        #[from]
        source: SinkError,
    },

    /// The starting population could not be exported.
    #[error("seed export failed: {source}")]
    Export {
        /// The underlying seed error.
        #[from]
        source: SeedError,
    },

    /// The run itself failed.
    #[error("simulation aborted: {source}")]
    Runner {
        /// The underlying runner error.
        #[from]
        source: RunnerError,
    },

    /// The diagnostic logger could not be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}
