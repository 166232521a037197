//! Grid topology, population building, and seed sources for the Elder Life
//! simulation.
//!
//! This crate produces the first generation of a run and everything that
//! generation needs to be stepped forward: the rim, the interior cells, and
//! each interior cell's fixed Moore neighbourhood.
//!
//! # Modules
//!
//! - [`topology`] -- Moore-neighbourhood coordinates for interior cells.
//! - [`population`] -- Building a population at random or from a pattern.
//! - [`patterns`] -- Library of named starting patterns.
//! - [`seed`] -- JSON seed file encoding, decoding, and path resolution.
//! - [`starting_world`] -- Picking a starting population with fallbacks.
//! - [`error`] -- Error types for seed and pattern failures.

pub mod error;
pub mod patterns;
pub mod population;
pub mod seed;
pub mod starting_world;
pub mod topology;

// Re-export primary types at crate root.
pub use error::{SeedError, WorldError};
pub use patterns::{Pattern, PatternCells, find_pattern};
pub use seed::{Seed, decode_seed, encode_seed, load_seed_file, resolve_seed_path, write_seed_file};
pub use starting_world::{SeedOrigin, SeedRequest, StartingPopulation, create_starting_population};
