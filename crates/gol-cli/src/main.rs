//! Terminal entry point for the Elder Life simulation.
//!
//! Loads configuration, picks a starting population, then renders the grid
//! once per generation while appending statistics to the stats log.
//!
//! # Startup
//!
//! ```text
//! YAML config --> CLI flags --> resolve (warn + default) --> seed source --> runner
//! ```
//!
//! Bad settings and unusable seed sources are explained on stderr, followed
//! by a short pause, and the run continues with a fallback. Only an
//! unreadable config file, an unwritable stats log, or a population whose
//! neighbour lists do not match its cells stop the program.

mod cli;
mod console;
mod error;
mod stats_log;

use std::time::Duration;

use clap::Parser;
use gol_core::config::{LogFormat, LoggingConfig};
use gol_core::{ConfigWarning, SimulationConfig, SimulationRunner, log_simulation_end};
use gol_world::{
    SeedOrigin, SeedRequest, create_starting_population, resolve_seed_path, write_seed_file,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::console::ConsoleRenderer;
use crate::error::EngineError;
use crate::stats_log::StatsFileLog;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, the statistics log, or the run
/// itself fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(&cli).await?;
    Ok(())
}

async fn run(cli: &Cli) -> Result<(), EngineError> {
    let mut config = cli
        .config_path()
        .map(|path| SimulationConfig::from_file(&path))
        .transpose()?
        .unwrap_or_else(|| {
            let mut config = SimulationConfig::default();
            config.apply_env_overrides();
            config
        });
    cli.apply_to(&mut config);

    init_tracing(&config.logging)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        config = ?cli.config_path(),
        "gol starting"
    );

    let (settings, warnings) = config.resolve();

    let request = SeedRequest {
        file: config
            .seed
            .file
            .as_deref()
            .map(|name| resolve_seed_path(&config.seed.resources_dir, name)),
        pattern: config.seed.pattern.clone(),
    };
    let mut rng = settings
        .rng_seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let start = create_starting_population(&request, settings.world_size, &mut rng);
    for warning in &warnings {
        if superseded_by_origin(warning, &start.origin) {
            debug!(warning = %warning, "Setting ignored, seed file sets the world size");
        } else {
            announce(&warning.to_string(), settings.warning_pause).await;
        }
    }
    for fallback in &start.fallbacks {
        announce(
            &format!("{fallback}; using a generated population instead"),
            settings.warning_pause,
        )
        .await;
    }

    if let Some(path) = &cli.export_seed {
        write_seed_file(path, &start.population, start.world_size)?;
        info!(path = %path.display(), "Starting population exported");
    }

    let mut renderer = ConsoleRenderer::new(std::io::stdout(), config.render.clear_screen);
    let mut stats_log = StatsFileLog::open(&config.logging.stats_file)?;
    info!(
        stats_file = %config.logging.stats_file.display(),
        origin = ?start.origin,
        "Statistics log opened"
    );

    let mut runner = SimulationRunner::new(&mut renderer, &mut stats_log, settings.tick_interval);
    match runner
        .run(settings.generations, start.population, start.world_size)
        .await
    {
        Ok(result) => {
            log_simulation_end(&result);
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Simulation aborted");
            Err(e.into())
        }
    }
}

/// Install the diagnostic logger on stderr, keeping stdout for the grid.
fn init_tracing(logging: &LoggingConfig) -> Result<(), EngineError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let installed = match logging.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| EngineError::Logging(e.to_string()))
}

/// Whether `warning` is moot given where the starting population came from.
/// A seed file carries its own world size.
const fn superseded_by_origin(warning: &ConfigWarning, origin: &SeedOrigin) -> bool {
    matches!(
        (warning, origin),
        (ConfigWarning::WorldSize { .. }, SeedOrigin::File(_))
    )
}

/// Print a warning for the user and give them time to read it.
async fn announce(message: &str, pause: Duration) {
    warn!(warning = message, "Falling back to default");
    eprintln!("warning: {message}");
    if !pause.is_zero() {
        tokio::time::sleep(pause).await;
    }
}
