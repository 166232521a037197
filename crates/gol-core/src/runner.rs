//! Simulation driver.
//!
//! [`SimulationRunner`] owns one run: it takes the first generation, steps
//! it forward a fixed number of times, and hands each generation to the
//! injected renderer and statistics log before replacing it. Each tick:
//!
//! 1. render the current generation;
//! 2. take its census;
//! 3. record the census;
//! 4. compute the next generation;
//! 5. wait the pacing delay (skipped when zero);
//! 6. replace the current generation.
//!
//! A runner goes `Idle -> Running -> Done` exactly once. There is no pause,
//! rewind, or resume.

use std::time::Duration;

use gol_types::{GenerationRecord, Population, PopulationStats, WorldSize};
use tracing::{debug, info, warn};

use crate::sink::{GenerationLog, Renderer, SinkError};
use crate::tick::{self, TickError};

/// Errors that can occur during a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// A tick failed. Fatal: the population no longer matches its topology.
    #[error("generation {generation} could not be advanced: {source}")]
    Tick {
        /// The generation being stepped when the error occurred.
        generation: u64,
        /// The underlying tick error.
        source: TickError,
    },

    /// Rendering or recording a generation failed.
    #[error("output sink failed: {source}")]
    Sink {
        /// The underlying sink error.
        #[from]
        source: SinkError,
    },

    /// The runner already ran.
    #[error("runner cannot be started from phase {phase:?}")]
    NotIdle {
        /// The phase the runner was in.
        phase: RunPhase,
    },
}

/// Lifecycle of a [`SimulationRunner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Constructed, not yet started.
    Idle,
    /// Processing the given generation.
    Running {
        /// Zero-based generation index.
        generation: u64,
    },
    /// Finished, successfully or not.
    Done,
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Number of ticks executed.
    pub generations_run: u64,
    /// The population after the last tick.
    pub final_population: Population,
    /// Census of the last generation that was rendered, if any tick ran.
    pub last_stats: Option<PopulationStats>,
}

/// Drives a single run against a renderer and a statistics log.
pub struct SimulationRunner<'a> {
    renderer: &'a mut dyn Renderer,
    generation_log: &'a mut dyn GenerationLog,
    pacing: Duration,
    phase: RunPhase,
}

impl<'a> SimulationRunner<'a> {
    /// Create an idle runner.
    ///
    /// A zero `pacing` runs ticks back to back.
    pub const fn new(
        renderer: &'a mut dyn Renderer,
        generation_log: &'a mut dyn GenerationLog,
        pacing: Duration,
    ) -> Self {
        Self {
            renderer,
            generation_log,
            pacing,
            phase: RunPhase::Idle,
        }
    }

    /// Current lifecycle phase.
    pub const fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Run `generations` ticks starting from `initial`.
    ///
    /// The runner is `Done` when this returns, whether or not it succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::NotIdle`] if the runner was already used,
    /// [`RunnerError::Tick`] if a generation cannot be stepped, or
    /// [`RunnerError::Sink`] if rendering or recording fails.
    pub async fn run(
        &mut self,
        generations: u64,
        initial: Population,
        world_size: WorldSize,
    ) -> Result<SimulationResult, RunnerError> {
        if self.phase != RunPhase::Idle {
            return Err(RunnerError::NotIdle { phase: self.phase });
        }

        info!(
            generations,
            world_size = %world_size,
            pacing_ms = self.pacing.as_millis(),
            "Simulation starting"
        );

        let outcome = self.run_ticks(generations, initial, world_size).await;
        self.phase = RunPhase::Done;
        outcome
    }

    async fn run_ticks(
        &mut self,
        generations: u64,
        initial: Population,
        world_size: WorldSize,
    ) -> Result<SimulationResult, RunnerError> {
        let mut current = initial;
        let mut last_stats = None;
        let mut generations_run: u64 = 0;

        for generation in 0..generations {
            self.phase = RunPhase::Running { generation };

            self.renderer.render(generation, &current, world_size)?;

            let stats = current.stats();
            self.generation_log
                .record(&GenerationRecord::now(generation, stats))?;

            let next = tick::step(&current)
                .map_err(|source| RunnerError::Tick { generation, source })?;

            debug!(
                generation,
                alive = stats.alive,
                elders = stats.elders,
                prime_elders = stats.prime_elders,
                "Tick complete"
            );

            if !self.pacing.is_zero() {
                tokio::time::sleep(self.pacing).await;
            }

            current = next;
            last_stats = Some(stats);
            generations_run = generations_run.saturating_add(1);
        }

        Ok(SimulationResult {
            generations_run,
            final_population: current,
            last_stats,
        })
    }
}

/// Log the end of a run.
pub fn log_simulation_end(result: &SimulationResult) {
    let final_stats = result.final_population.stats();
    info!(
        generations_run = result.generations_run,
        final_alive = final_stats.alive,
        final_elders = final_stats.elders,
        final_prime_elders = final_stats.prime_elders,
        "Simulation ended"
    );

    if result.last_stats.is_none() {
        warn!("Simulation ended with no ticks executed");
    }
}
