//! Shared type definitions for the Elder Life simulation.
//!
//! This crate is the single source of truth for the data model used across
//! the workspace: grid coordinates, world dimensions, cells, whole
//! generations, and the per-tick census.
//!
//! # Modules
//!
//! - [`coords`] -- [`Coordinate`] and [`WorldSize`], with their text forms
//! - [`enums`] -- [`CellState`] and the aging thresholds
//! - [`structs`] -- [`Cell`], [`Population`], [`PopulationStats`],
//!   [`GenerationRecord`]
//! - [`error`] -- parse and validation errors

pub mod coords;
pub mod enums;
pub mod error;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use coords::{Coordinate, WorldSize};
pub use enums::{CellState, ELDER_AGE, PRIME_ELDER_AGE};
pub use error::{CoordinateError, WorldSizeError};
pub use structs::{Cell, GenerationRecord, InteriorCell, Neighbourhood, Population, PopulationStats};
