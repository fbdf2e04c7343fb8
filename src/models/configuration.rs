use super::FitnessGoal;
use serde::{Deserialize, Serialize};

/// Rejected configuration values. Raised before a run starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("RateOutOfRange: {name} must be between 0.0 and 1.0, got {rate}")]
    RateOutOfRange { name: &'static str, rate: f64 },
    #[error("NonPositivePopulation: {name} must be at least 1")]
    NonPositivePopulation { name: &'static str },
    #[error("InvalidBounds: lower bound must not exceed upper. lower={lower}, upper={upper}")]
    InvalidBounds { lower: i64, upper: i64 },
}

pub(crate) fn validate_rate(name: &'static str, rate: f64) -> Result<f64, ConfigurationError> {
    // Also rejects NaN
    if !(0.0..=1.0).contains(&rate) {
        return Err(ConfigurationError::RateOutOfRange { name, rate });
    }

    Ok(rate)
}

fn validate_population(name: &'static str, size: usize) -> Result<usize, ConfigurationError> {
    if size == 0 {
        return Err(ConfigurationError::NonPositivePopulation { name });
    }

    Ok(size)
}

/// Parameters of a single run.
///
/// Defaults are 4 initial individuals, 5 generations, a crossover rate of 0.7,
/// a mutation rate of 0.01, a target population of 30 and the domain [−10, 10].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub initial_population_size: usize,
    pub generation_count: u32,
    pub crossover_rate: f64,
    pub mutation_rate: f64,
    pub target_population_size: usize,
    pub lower_bound: i64,
    pub upper_bound: i64,
    pub goal: FitnessGoal,
    /// Seed for the engine's generator. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            initial_population_size: 4,
            generation_count: 5,
            crossover_rate: 0.7,
            mutation_rate: 0.01,
            target_population_size: 30,
            lower_bound: -10,
            upper_bound: 10,
            goal: FitnessGoal::Minimize,
            seed: None,
        }
    }
}

impl Configuration {
    /// Checks every field against its documented domain.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        validate_population("initial_population_size", self.initial_population_size)?;
        validate_population("target_population_size", self.target_population_size)?;
        validate_rate("crossover_rate", self.crossover_rate)?;
        validate_rate("mutation_rate", self.mutation_rate)?;

        if self.lower_bound > self.upper_bound {
            return Err(ConfigurationError::InvalidBounds {
                lower: self.lower_bound,
                upper: self.upper_bound,
            });
        }

        Ok(())
    }
}
