//! Choosing the starting population.
//!
//! Sources are tried in order: seed file, named pattern, random roll. A
//! source that fails is logged and recorded, and the next one is tried, so
//! a starting population is always produced.

use std::path::PathBuf;

use gol_types::{Population, WorldSize};
use rand::Rng;
use tracing::{info, warn};

use crate::error::WorldError;
use crate::patterns;
use crate::population;
use crate::seed;

/// Which starting sources were asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedRequest {
    /// Seed file to load, already resolved to a path.
    pub file: Option<PathBuf>,
    /// Named pattern to place.
    pub pattern: Option<String>,
}

/// Where the starting population actually came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOrigin {
    /// Loaded from this seed file.
    File(PathBuf),
    /// Built from the named library pattern.
    Pattern(&'static str),
    /// Rolled procedurally.
    Random,
}

/// The result of [`create_starting_population`].
#[derive(Debug)]
pub struct StartingPopulation {
    /// The first generation.
    pub population: Population,
    /// World size of the run. Taken from the seed file when one loaded.
    pub world_size: WorldSize,
    /// Which source produced the population.
    pub origin: SeedOrigin,
    /// Sources that were requested but failed, in the order tried.
    pub fallbacks: Vec<WorldError>,
}

impl StartingPopulation {
    /// Whether any requested source had to be skipped.
    pub fn degraded(&self) -> bool {
        !self.fallbacks.is_empty()
    }
}

/// Build the first generation from the best available source.
///
/// A seed file that loads wins and dictates the world size. Otherwise a
/// known pattern is placed in a `world_size` grid, and failing that the
/// grid is rolled at random. Failures never abort startup.
pub fn create_starting_population(
    request: &SeedRequest,
    world_size: WorldSize,
    rng: &mut impl Rng,
) -> StartingPopulation {
    let mut fallbacks = Vec::new();

    if let Some(path) = &request.file {
        match seed::load_seed_file(path) {
            Ok(loaded) => {
                info!(
                    path = %path.display(),
                    world_size = %loaded.world_size,
                    "Starting population loaded from seed file"
                );
                return StartingPopulation {
                    population: loaded.population,
                    world_size: loaded.world_size,
                    origin: SeedOrigin::File(path.clone()),
                    fallbacks,
                };
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Seed file unusable, falling back to generated population"
                );
                fallbacks.push(WorldError::from(e));
            }
        }
    }

    if let Some(name) = &request.pattern {
        if let Some(pattern) = patterns::find_pattern(name) {
            let cells = pattern.place(world_size);
            info!(
                pattern = pattern.name,
                live_cells = cells.len(),
                world_size = %world_size,
                "Starting population built from pattern"
            );
            return StartingPopulation {
                population: population::build_from_pattern(world_size, &cells),
                world_size,
                origin: SeedOrigin::Pattern(pattern.name),
                fallbacks,
            };
        }
        warn!(
            pattern = name.as_str(),
            known = ?patterns::pattern_names().collect::<Vec<_>>(),
            "Unknown seed pattern, falling back to random population"
        );
        fallbacks.push(WorldError::UnknownPattern { name: name.clone() });
    }

    let population = population::build_random(world_size, rng);
    info!(
        world_size = %world_size,
        alive = population.stats().alive,
        "Starting population rolled at random"
    );
    StartingPopulation {
        population,
        world_size,
        origin: SeedOrigin::Random,
        fallbacks,
    }
}
