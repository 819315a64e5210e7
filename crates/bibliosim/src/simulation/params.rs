//! Run configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};

/// Default age up to which authors carry the full productivity share
pub const DEFAULT_AGE_MIN: u32 = 40;

/// Default retirement age
pub const DEFAULT_AGE_MAX: u32 = 60;

/// Half-width of the uniform jitter added to the new-author rate each year
pub const NEW_AUTHOR_RATE_JITTER: f64 = 0.01;

/// Accepted range for the baseline new-author rate
pub const NEW_AUTHOR_RATE_BOUNDS: std::ops::RangeInclusive<f64> = -1.0..=2.0;

/// Which authors grow one year older at the end of a simulated year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AgingPolicy {
    /// Only authors present when the year started; newcomers keep age 1 until next year
    #[default]
    ExistingOnly,
    /// Every author, including those created during the year
    IncludeNewcomers,
}

/// Parameters of a simulation run
///
/// # Example
/// ```
/// use bibliosim::SimulationParams;
///
/// let params = SimulationParams::new(30, 600, 0.1).with_age_window(35, 65);
/// assert!(params.validate().is_ok());
///
/// let broken = SimulationParams::new(30, 0, 0.1);
/// assert!(broken.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParams {
    /// Number of simulated years
    pub years: u32,
    /// Publication budget distributed every year
    pub papers_per_year: u32,
    /// Baseline new-author proportion ρ0 (soft range 0..=1)
    pub new_author_rate: f64,
    /// Age up to which the full productivity share applies
    #[serde(default = "default_age_min")]
    pub age_min: u32,
    /// Retirement age, from which authors stop receiving papers
    #[serde(default = "default_age_max")]
    pub age_max: u32,
    #[serde(default)]
    pub aging: AgingPolicy,
}

fn default_age_min() -> u32 {
    DEFAULT_AGE_MIN
}

fn default_age_max() -> u32 {
    DEFAULT_AGE_MAX
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self::new(50, 600, 0.1)
    }
}

impl SimulationParams {
    pub fn new(years: u32, papers_per_year: u32, new_author_rate: f64) -> Self {
        Self {
            years,
            papers_per_year,
            new_author_rate,
            age_min: DEFAULT_AGE_MIN,
            age_max: DEFAULT_AGE_MAX,
            aging: AgingPolicy::default(),
        }
    }

    pub fn with_age_window(mut self, age_min: u32, age_max: u32) -> Self {
        self.age_min = age_min;
        self.age_max = age_max;
        self
    }

    pub fn with_aging(mut self, aging: AgingPolicy) -> Self {
        self.aging = aging;
        self
    }

    /// Rejects parameters that cannot drive a simulation
    ///
    /// The new-author rate must lie in [`NEW_AUTHOR_RATE_BOUNDS`]: yearly jitter
    /// may push it slightly outside `0..=1` and that is accepted.
    pub fn validate(&self) -> Result<()> {
        if self.papers_per_year == 0 {
            return Err(SimulationError::invalid(
                "papers_per_year",
                "must be positive",
            ));
        }
        if self.age_min >= self.age_max {
            return Err(SimulationError::invalid(
                "age_min",
                format!(
                    "must be below age_max (got {} >= {})",
                    self.age_min, self.age_max
                ),
            ));
        }
        if !NEW_AUTHOR_RATE_BOUNDS.contains(&self.new_author_rate) {
            return Err(SimulationError::invalid(
                "new_author_rate",
                format!(
                    "must be within {:?} (got {})",
                    NEW_AUTHOR_RATE_BOUNDS, self.new_author_rate
                ),
            ));
        }
        Ok(())
    }
}
