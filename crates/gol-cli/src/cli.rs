//! Command-line arguments.
//!
//! Flags override values from the YAML configuration. Free-text values
//! (world size, generation count) are passed through unvalidated so that a
//! bad value produces a warning and a default instead of a usage error.

use std::path::{Path, PathBuf};

use clap::Parser;
use gol_core::SimulationConfig;

/// Configuration file picked up from the working directory when `--config`
/// is not given.
pub const DEFAULT_CONFIG_FILE: &str = "gol-config.yaml";

/// Command-line arguments for the `gol` binary.
#[derive(Debug, Default, Parser)]
#[command(author, version, about = "Conway's Game of Life with aging cells", long_about = None)]
pub struct Cli {
    /// Number of generations to run. Zero or a non-number falls back to 50.
    #[arg(short = 'g', long = "generations", value_name = "COUNT")]
    pub generations: Option<String>,

    /// Named starting pattern, for example glider or pulsar.
    #[arg(short = 's', long = "seed", value_name = "PATTERN")]
    pub seed: Option<String>,

    /// Grid dimensions as width x height, for example 60x30. Malformed
    /// sizes fall back to 80x40. The short form is --ws with two dashes;
    /// a single-dash -ws is not accepted.
    #[arg(long = "worldsize", visible_alias = "ws", value_name = "WIDTHxHEIGHT")]
    pub world_size: Option<String>,

    /// Seed file name or path. Names without a directory are looked up in
    /// the resources directory; `.json` is appended when missing.
    #[arg(short = 'f', long = "file", value_name = "NAME")]
    pub file: Option<String>,

    /// YAML configuration file.
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Run without pacing, warning pauses, or screen clearing.
    #[arg(long)]
    pub headless: bool,

    /// Write the starting population to this seed file before running.
    #[arg(long = "export-seed", value_name = "PATH")]
    pub export_seed: Option<PathBuf>,

    /// Seed for the random starting population.
    #[arg(long = "rng-seed", value_name = "N")]
    pub rng_seed: Option<u64>,
}

impl Cli {
    /// The configuration file to load, if any.
    ///
    /// An explicit `--config` is always returned, so a missing file is
    /// reported. The default file is only used when it exists.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(|| {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            default.exists().then(|| default.to_path_buf())
        })
    }

    /// Layer the flags that were given on top of `config`.
    pub fn apply_to(&self, config: &mut SimulationConfig) {
        if let Some(generations) = &self.generations {
            config.simulation.generations.clone_from(generations);
        }
        if let Some(world_size) = &self.world_size {
            config.simulation.world_size.clone_from(world_size);
        }
        if let Some(rng_seed) = self.rng_seed {
            config.simulation.rng_seed = Some(rng_seed);
        }
        if self.seed.is_some() {
            config.seed.pattern.clone_from(&self.seed);
        }
        if self.file.is_some() {
            config.seed.file.clone_from(&self.file);
        }
        if self.headless {
            config.simulation.tick_interval_ms = 0;
            config.simulation.warning_pause_ms = 0;
            config.render.clear_screen = false;
        }
    }
}
