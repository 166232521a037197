//! Configuration loading and typed config structures for the Elder Life
//! simulation.
//!
//! Configuration lives in `gol-config.yaml`. Every field has a default, so
//! an empty file (or no file at all) is a valid configuration. Command-line
//! flags are layered on top by the binary.
//!
//! Values that arrive as free text (world size, generation count) are not
//! validated at load time. [`SimulationConfig::resolve`] turns them into a
//! [`RunSettings`], replacing anything unusable with the default and
//! reporting a [`ConfigWarning`] for it instead of failing.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use gol_types::{WorldSize, WorldSizeError};
use serde::Deserialize;
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};

/// Generations run when none (or an unusable count) is given.
pub const DEFAULT_GENERATIONS: u64 = 50;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// A setting that could not be used and was replaced by its default.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigWarning {
    /// The world size string was malformed.
    #[error("invalid world size {input:?} ({source}), using {fallback}")]
    WorldSize {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        source: WorldSizeError,
        /// The size used instead.
        fallback: WorldSize,
    },

    /// The generation count was not a positive integer.
    #[error("invalid generation count {input:?}, using {fallback}")]
    Generations {
        /// The rejected input.
        input: String,
        /// The count used instead.
        fallback: u64,
    },
}

/// Top-level configuration.
///
/// Mirrors the structure of `gol-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// Run length, world size, and timing.
    #[serde(default)]
    pub simulation: RunConfig,

    /// Where the starting population comes from.
    #[serde(default)]
    pub seed: SeedConfig,

    /// Logging and statistics output.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Console rendering.
    #[serde(default)]
    pub render: RenderConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `GOL_RESOURCES_DIR` overrides `seed.resources_dir`
    /// - `GOL_STATS_FILE` overrides `logging.stats_file`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as a map.
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply `GOL_*` environment overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("GOL_RESOURCES_DIR") {
            self.seed.resources_dir = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("GOL_STATS_FILE") {
            self.logging.stats_file = PathBuf::from(val);
        }
    }

    /// Validate the free-text settings and produce the effective run
    /// settings.
    ///
    /// Unusable values fall back to their defaults. Fallbacks are returned,
    /// not logged; the caller decides which ones to report.
    pub fn resolve(&self) -> (RunSettings, Vec<ConfigWarning>) {
        let mut warnings = Vec::new();

        let world_size = match self.simulation.world_size.parse::<WorldSize>() {
            Ok(size) => size,
            Err(source) => {
                let fallback = WorldSize::default();
                warnings.push(ConfigWarning::WorldSize {
                    input: self.simulation.world_size.clone(),
                    source,
                    fallback,
                });
                fallback
            }
        };

        let generations = match parse_generations(&self.simulation.generations) {
            Ok(count) => count,
            Err(warning) => {
                warnings.push(warning);
                DEFAULT_GENERATIONS
            }
        };

        let settings = RunSettings {
            generations,
            world_size,
            tick_interval: Duration::from_millis(self.simulation.tick_interval_ms),
            warning_pause: Duration::from_millis(self.simulation.warning_pause_ms),
            rng_seed: self.simulation.rng_seed,
        };
        (settings, warnings)
    }
}

/// Parse a generation count. Zero, negatives, and non-integers are
/// rejected.
///
/// # Errors
///
/// Returns [`ConfigWarning::Generations`] naming the default to use.
pub fn parse_generations(raw: &str) -> Result<u64, ConfigWarning> {
    match raw.trim().parse::<u64>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(ConfigWarning::Generations {
            input: raw.to_owned(),
            fallback: DEFAULT_GENERATIONS,
        }),
    }
}

/// Effective, validated settings for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    /// Number of ticks to run.
    pub generations: u64,
    /// Grid dimensions, unless a seed file dictates otherwise.
    pub world_size: WorldSize,
    /// Delay between ticks.
    pub tick_interval: Duration,
    /// Pause after a warning so the user can read it.
    pub warning_pause: Duration,
    /// Seed for the procedural population, if reproducibility is wanted.
    pub rng_seed: Option<u64>,
}

/// Run settings as written in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    /// Number of generations, as text. Validated by
    /// [`SimulationConfig::resolve`].
    #[serde(default = "default_generations", deserialize_with = "scalar_text")]
    pub generations: String,

    /// World size as `WIDTHxHEIGHT`.
    #[serde(default = "default_world_size", deserialize_with = "scalar_text")]
    pub world_size: String,

    /// Real-time milliseconds between ticks. Zero disables pacing.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Milliseconds to pause after printing a warning.
    #[serde(default = "default_warning_pause_ms")]
    pub warning_pause_ms: u64,

    /// Random seed for the procedural population.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            generations: default_generations(),
            world_size: default_world_size(),
            tick_interval_ms: default_tick_interval_ms(),
            warning_pause_ms: default_warning_pause_ms(),
            rng_seed: None,
        }
    }
}

/// Starting population sources.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedConfig {
    /// Directory searched for seed files given by name.
    #[serde(default = "default_resources_dir")]
    pub resources_dir: PathBuf,

    /// Named pattern to place when no seed file loads.
    #[serde(default)]
    pub pattern: Option<String>,

    /// Seed file name or path.
    #[serde(default)]
    pub file: Option<String>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            resources_dir: default_resources_dir(),
            pattern: None,
            file: None,
        }
    }
}

/// Output format of the diagnostic log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Diagnostic log format.
    #[serde(default)]
    pub format: LogFormat,

    /// File receiving one JSON statistics record per tick.
    #[serde(default = "default_stats_file")]
    pub stats_file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            stats_file: default_stats_file(),
        }
    }
}

/// Console rendering configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RenderConfig {
    /// Clear the terminal before each frame.
    #[serde(default = "default_clear_screen")]
    pub clear_screen: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            clear_screen: default_clear_screen(),
        }
    }
}

/// Read any YAML value as text, leaving validation to
/// [`SimulationConfig::resolve`]. Numbers and booleans keep their literal
/// form, null becomes empty, and sequences and mappings become a
/// placeholder that never validates.
fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserializer.deserialize_any(ScalarText)
}

struct ScalarText;

impl<'de> Visitor<'de> for ScalarText {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a scalar setting")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_owned())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_unit<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<String, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok("[...]".to_owned())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<String, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok("{...}".to_owned())
    }
}

fn default_generations() -> String {
    DEFAULT_GENERATIONS.to_string()
}

fn default_world_size() -> String {
    WorldSize::default().to_string()
}

const fn default_tick_interval_ms() -> u64 {
    200
}

const fn default_warning_pause_ms() -> u64 {
    1_000
}

fn default_resources_dir() -> PathBuf {
    PathBuf::from("resources")
}

fn default_log_level() -> String {
    "info".to_owned()
}

fn default_stats_file() -> PathBuf {
    PathBuf::from("gol.log")
}

const fn default_clear_screen() -> bool {
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_gives_defaults() {
        let config = SimulationConfig::parse("").unwrap();
        assert_eq!(config.simulation, RunConfig::default());
        assert_eq!(config.simulation.world_size, "80x40");
        assert_eq!(config.simulation.generations, "50");
        assert_eq!(config.simulation.tick_interval_ms, 200);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.render.clear_screen);
    }

    #[test]
    fn full_yaml_parses() {
        let yaml = r#"
simulation:
  generations: 120
  world_size: "40x20"
  tick_interval_ms: 0
  warning_pause_ms: 0
  rng_seed: 7
seed:
  pattern: glider
  file: my_seed
logging:
  level: debug
  format: json
render:
  clear_screen: false
"#;
        let config = SimulationConfig::parse(yaml).unwrap();
        assert_eq!(config.simulation.generations, "120");
        assert_eq!(config.simulation.rng_seed, Some(7));
        assert_eq!(config.seed.pattern.as_deref(), Some("glider"));
        assert_eq!(config.seed.file.as_deref(), Some("my_seed"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(!config.render.clear_screen);

        let (settings, warnings) = config.resolve();
        assert!(warnings.is_empty());
        assert_eq!(settings.generations, 120);
        assert_eq!(settings.world_size, WorldSize::new(40, 20).unwrap());
        assert_eq!(settings.tick_interval, Duration::ZERO);
        assert_eq!(settings.rng_seed, Some(7));
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let result = SimulationConfig::parse("simulation: [unclosed");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = SimulationConfig::from_file(Path::new("/definitely/not/gol-config.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn malformed_world_sizes_fall_back() {
        for input in ["80", "0x40", "abcx40", "x40", "80x40x2", "-5x10"] {
            let mut config = SimulationConfig::default();
            config.simulation.world_size = input.to_owned();
            let (settings, warnings) = config.resolve();
            assert_eq!(settings.world_size, WorldSize::default(), "{input}");
            assert!(
                matches!(
                    warnings.as_slice(),
                    [ConfigWarning::WorldSize { input: rejected, .. }] if rejected == input
                ),
                "{input}"
            );
        }
    }

    #[test]
    fn bad_generation_counts_fall_back() {
        for input in ["0", "-3", "many", ""] {
            let mut config = SimulationConfig::default();
            config.simulation.generations = input.to_owned();
            let (settings, warnings) = config.resolve();
            assert_eq!(settings.generations, DEFAULT_GENERATIONS, "{input:?}");
            assert_eq!(warnings.len(), 1, "{input:?}");
        }
    }

    #[test]
    fn odd_yaml_generation_values_fall_back() {
        for (value, text) in [
            ("2.5", "2.5"),
            ("99999999999999999999", "99999999999999999999"),
            ("true", "true"),
            ("-4", "-4"),
            ("null", ""),
            ("[1, 2]", "[...]"),
        ] {
            let yaml = format!("simulation:\n  generations: {value}\n");
            let config = SimulationConfig::parse(&yaml);
            assert!(config.is_ok(), "{value}: {config:?}");
            let config = config.unwrap();
            assert_eq!(config.simulation.generations, text);

            let (settings, warnings) = config.resolve();
            assert_eq!(settings.generations, DEFAULT_GENERATIONS, "{value}");
            assert!(
                matches!(warnings.as_slice(), [ConfigWarning::Generations { .. }]),
                "{value}"
            );
        }
    }

    #[test]
    fn numeric_yaml_values_are_read_as_text() {
        let config =
            SimulationConfig::parse("simulation:\n  generations: 75\n  world_size: 80\n").unwrap();
        assert_eq!(config.simulation.generations, "75");
        assert_eq!(config.simulation.world_size, "80");

        let (settings, warnings) = config.resolve();
        assert_eq!(settings.generations, 75);
        assert_eq!(settings.world_size, WorldSize::default());
        assert!(matches!(warnings.as_slice(), [ConfigWarning::WorldSize { .. }]));
    }

    #[test]
    fn parse_generations_accepts_positive_counts() {
        assert_eq!(parse_generations("1").ok(), Some(1));
        assert_eq!(parse_generations(" 75 ").ok(), Some(75));
        assert!(parse_generations("0").is_err());
    }
}
