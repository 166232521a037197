//! Transition engine, simulation driver, and configuration for the Elder
//! Life simulation.
//!
//! # Modules
//!
//! - [`tick`] -- Computes the next generation from the current one.
//! - [`runner`] -- Drives a bounded run: render, record, step, pace.
//! - [`sink`] -- Renderer and statistics log seams used by the runner.
//! - [`render`] -- Text frames of a generation.
//! - [`config`] -- YAML configuration and fallback resolution.

pub mod config;
pub mod render;
pub mod runner;
pub mod sink;
pub mod tick;

// Re-export primary types at crate root.
pub use config::{ConfigError, ConfigWarning, RunSettings, SimulationConfig};
pub use render::Glyphs;
pub use runner::{RunPhase, RunnerError, SimulationResult, SimulationRunner, log_simulation_end};
pub use sink::{GenerationLog, MemoryLog, NoOpRenderer, Renderer, SinkError};
pub use tick::{TickError, step};
