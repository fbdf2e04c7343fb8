use crate::{
    models::{Configuration, ConfigurationError},
    services::evolution::{self, Engine, EngineBuilder},
};
use rand::rngs::StdRng;
use std::str::FromStr;

pub const INITIAL_POPULATION_SIZE: &str = "GA_INITIAL_POPULATION_SIZE";
pub const GENERATION_COUNT: &str = "GA_GENERATION_COUNT";
pub const CROSSOVER_RATE: &str = "GA_CROSSOVER_RATE";
pub const MUTATION_RATE: &str = "GA_MUTATION_RATE";
pub const TARGET_POPULATION_SIZE: &str = "GA_TARGET_POPULATION_SIZE";
pub const LOWER_BOUND: &str = "GA_LOWER_BOUND";
pub const UPPER_BOUND: &str = "GA_UPPER_BOUND";
pub const GOAL: &str = "GA_GOAL";
pub const SEED: &str = "GA_SEED";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ParseError: could not parse {key}={value:?}")]
    ParseError { key: &'static str, value: String },
    #[error("ConfigurationError: {0}")]
    ConfigurationError(#[from] ConfigurationError),
    #[error("EngineError: {0}")]
    EngineError(#[from] evolution::Error),
}

/// Reads the configuration from `GA_*` environment variables, falling back to the
/// default for every variable that is unset.
pub fn load_configuration() -> Result<Configuration, Error> {
    configuration_from(|key| std::env::var(key).ok())
}

/// Builds a configuration from an arbitrary key lookup.
pub fn configuration_from<F>(lookup: F) -> Result<Configuration, Error>
where
    F: Fn(&'static str) -> Option<String>,
{
    let defaults = Configuration::default();

    let configuration = Configuration {
        initial_population_size: parse_or(
            &lookup,
            INITIAL_POPULATION_SIZE,
            defaults.initial_population_size,
        )?,
        generation_count: parse_or(&lookup, GENERATION_COUNT, defaults.generation_count)?,
        crossover_rate: parse_or(&lookup, CROSSOVER_RATE, defaults.crossover_rate)?,
        mutation_rate: parse_or(&lookup, MUTATION_RATE, defaults.mutation_rate)?,
        target_population_size: parse_or(
            &lookup,
            TARGET_POPULATION_SIZE,
            defaults.target_population_size,
        )?,
        lower_bound: parse_or(&lookup, LOWER_BOUND, defaults.lower_bound)?,
        upper_bound: parse_or(&lookup, UPPER_BOUND, defaults.upper_bound)?,
        goal: parse_or(&lookup, GOAL, defaults.goal)?,
        seed: match lookup(SEED) {
            Some(value) => Some(parse(SEED, value)?),
            None => defaults.seed,
        },
    };

    configuration.validate()?;

    Ok(configuration)
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, Error>
where
    F: Fn(&'static str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => parse(key, value),
        None => Ok(default),
    }
}

fn parse<T: FromStr>(key: &'static str, value: String) -> Result<T, Error> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::ParseError { key, value })
}

/// Creates an engine for `configuration`, seeded from `configuration.seed` when set.
pub fn bootstrap(configuration: Configuration) -> Result<Engine<StdRng>, Error> {
    Ok(EngineBuilder::from_configuration(configuration).build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FitnessGoal;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let vars: HashMap<&'static str, String> =
            vars.iter().map(|(k, v)| (*k, v.to_string())).collect();

        move |key| vars.get(key).cloned()
    }

    #[test]
    fn it_falls_back_to_defaults() {
        let configuration = configuration_from(lookup_from(&[])).expect("defaults are valid");

        assert_eq!(configuration, Configuration::default());
    }

    #[test]
    fn it_reads_every_variable() {
        let configuration = configuration_from(lookup_from(&[
            (INITIAL_POPULATION_SIZE, "8"),
            (GENERATION_COUNT, "12"),
            (CROSSOVER_RATE, "0.9"),
            (MUTATION_RATE, " 0.05 "),
            (TARGET_POPULATION_SIZE, "40"),
            (LOWER_BOUND, "-100"),
            (UPPER_BOUND, "100"),
            (GOAL, "maximize"),
            (SEED, "42"),
        ]))
        .expect("configuration is valid");

        assert_eq!(configuration.initial_population_size, 8);
        assert_eq!(configuration.generation_count, 12);
        assert_eq!(configuration.crossover_rate, 0.9);
        assert_eq!(configuration.mutation_rate, 0.05);
        assert_eq!(configuration.target_population_size, 40);
        assert_eq!(configuration.lower_bound, -100);
        assert_eq!(configuration.upper_bound, 100);
        assert_eq!(configuration.goal, FitnessGoal::Maximize);
        assert_eq!(configuration.seed, Some(42));
    }

    #[test]
    fn it_reports_the_offending_variable() {
        let result = configuration_from(lookup_from(&[(GENERATION_COUNT, "five")]));

        assert!(matches!(
            result,
            Err(Error::ParseError {
                key: GENERATION_COUNT,
                ..
            })
        ));
    }

    #[test]
    fn it_validates_the_result() {
        let result = configuration_from(lookup_from(&[(MUTATION_RATE, "1.01")]));

        assert!(matches!(result, Err(Error::ConfigurationError(_))));
    }

    #[test]
    fn it_bootstraps_a_seeded_engine() {
        let configuration = Configuration {
            seed: Some(7),
            ..Default::default()
        };

        let first = bootstrap(configuration.clone()).expect("is valid");
        let second = bootstrap(configuration).expect("is valid");

        assert_eq!(first.population(), second.population());
    }
}
