//! Enumeration types for the Elder Life simulation.

use serde::{Deserialize, Serialize};

/// Age (in consecutive survived ticks) at which a living cell becomes an elder.
pub const ELDER_AGE: u32 = 5;

/// Age at which a living cell becomes a prime elder.
pub const PRIME_ELDER_AGE: u32 = 10;

/// The state of an interior cell.
///
/// [`Elder`](Self::Elder) and [`PrimeElder`](Self::PrimeElder) are reporting
/// refinements of [`Alive`](Self::Alive): every non-dead state counts as
/// living for the survival rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    /// Unpopulated.
    #[serde(alias = "DEAD")]
    Dead,
    /// Living, younger than [`ELDER_AGE`].
    #[serde(alias = "ALIVE")]
    Alive,
    /// Living for [`ELDER_AGE`] through `PRIME_ELDER_AGE - 1` ticks.
    #[serde(alias = "ELDER")]
    Elder,
    /// Living for at least [`PRIME_ELDER_AGE`] ticks.
    #[serde(alias = "PRIME_ELDER")]
    PrimeElder,
}

impl CellState {
    /// Whether the state counts as living toward neighbour counts.
    pub const fn is_living(self) -> bool {
        !matches!(self, Self::Dead)
    }

    /// Classify a living cell by the number of ticks it has survived.
    pub const fn from_age(age: u32) -> Self {
        if age < ELDER_AGE {
            Self::Alive
        } else if age < PRIME_ELDER_AGE {
            Self::Elder
        } else {
            Self::PrimeElder
        }
    }
}
