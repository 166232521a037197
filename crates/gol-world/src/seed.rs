//! JSON seed files.
//!
//! A seed file stores a whole population together with the world size it
//! was built for:
//!
//! ```json
//! {
//!   "world_size": [80, 40],
//!   "population": {
//!     "(0, 0)": null,
//!     "(1, 1)": { "state": "alive", "neighbours": [[0, 0], [0, 1], ...] }
//!   }
//! }
//! ```
//!
//! `null` marks a rim cell. Neighbour lists are taken verbatim: they are
//! not recomputed or checked against `world_size`. A seed whose neighbours
//! point outside its own population is only detected when the first tick
//! runs.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use gol_types::{Cell, Coordinate, InteriorCell, Population, WorldSize};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SeedError;

/// File extension appended to seed names that lack one.
const SEED_EXTENSION: &str = "json";

/// On-disk layout of a seed file.
#[derive(Debug, Serialize, Deserialize)]
struct SeedDocument {
    world_size: WorldSize,
    population: BTreeMap<String, Option<InteriorCell>>,
}

/// A population restored from a seed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    /// The restored cells.
    pub population: Population,
    /// The world size recorded in the file.
    pub world_size: WorldSize,
}

/// Parse a seed document.
///
/// # Errors
///
/// Returns [`SeedError::Json`] if the document does not match the seed
/// layout, or [`SeedError::InvalidKey`] if a population key is not a
/// `(row, col)` tuple.
pub fn decode_seed(json: &str) -> Result<Seed, SeedError> {
    let document: SeedDocument = serde_json::from_str(json)?;
    let population = document
        .population
        .into_iter()
        .map(|(key, cell)| -> Result<(Coordinate, Cell), SeedError> {
            Ok((key.parse::<Coordinate>()?, Cell::from(cell)))
        })
        .collect::<Result<Population, SeedError>>()?;
    Ok(Seed {
        population,
        world_size: document.world_size,
    })
}

/// Serialize a population as a pretty-printed seed document.
///
/// # Errors
///
/// Returns [`SeedError::Json`] if serialization fails.
pub fn encode_seed(population: &Population, world_size: WorldSize) -> Result<String, SeedError> {
    let document = SeedDocument {
        world_size,
        population: population
            .iter()
            .map(|(coord, cell)| (coord.to_string(), Option::<InteriorCell>::from(*cell)))
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Read and parse a seed file.
///
/// # Errors
///
/// Returns [`SeedError::Io`] if the file cannot be read, otherwise any
/// error from [`decode_seed`].
pub fn load_seed_file(path: &Path) -> Result<Seed, SeedError> {
    let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let seed = decode_seed(&json)?;
    debug!(
        path = %path.display(),
        world_size = %seed.world_size,
        cells = seed.population.len(),
        "Seed file loaded"
    );
    Ok(seed)
}

/// Write a population to a seed file, replacing any existing file.
///
/// # Errors
///
/// Returns [`SeedError::Json`] if serialization fails or
/// [`SeedError::Io`] if the file cannot be written.
pub fn write_seed_file(
    path: &Path,
    population: &Population,
    world_size: WorldSize,
) -> Result<(), SeedError> {
    let json = encode_seed(population, world_size)?;
    std::fs::write(path, json).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Turn a seed name from the command line into a file path.
///
/// A `.json` extension is appended when the name has none. Absolute paths
/// and paths that exist relative to the working directory are used as
/// given; anything else is looked up in `resources_dir`.
pub fn resolve_seed_path(resources_dir: &Path, name: &str) -> PathBuf {
    let mut file = PathBuf::from(name);
    if file.extension().is_none_or(|ext| ext != SEED_EXTENSION) {
        file.as_mut_os_string().push(".");
        file.as_mut_os_string().push(SEED_EXTENSION);
    }
    if file.is_absolute() || file.exists() {
        file
    } else {
        resources_dir.join(file)
    }
}
