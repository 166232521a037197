//! Error types for the `gol-world` crate.
//!
//! Every error here is recoverable at startup: the caller falls back to a
//! procedurally generated population. See
//! [`create_starting_population`](crate::create_starting_population).

use std::path::PathBuf;

use gol_types::CoordinateError;

/// Errors that can occur while choosing or building a starting population.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// No pattern with the requested name exists in the library.
    #[error("unknown seed pattern '{name}'")]
    UnknownPattern {
        /// The requested name.
        name: String,
    },

    /// Loading a seed file failed.
    #[error("seed file error: {source}")]
    Seed {
        /// The underlying seed error.
        #[from]
        source: SeedError,
    },
}

/// Errors that can occur while reading or writing a seed file.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The file could not be read or written.
    #[error("cannot access seed file {}: {source}", path.display())]
    Io {
        /// The file that was accessed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The content is not a valid seed document.
    #[error("malformed seed JSON: {source}")]
    Json {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },

    /// A population key is not a `(row, col)` tuple.
    #[error("invalid population key: {source}")]
    InvalidKey {
        /// The underlying parse error.
        #[from]
        source: CoordinateError,
    },
}
