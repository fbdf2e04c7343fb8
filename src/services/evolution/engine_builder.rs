use super::{Engine, Error};
use crate::models::{Configuration, FitnessGoal};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Fluent construction of an [`Engine`], starting from the default configuration.
///
/// ```rust
/// use quadratic_ga::Engine;
/// use quadratic_ga::services::evolution::GenerationReport;
///
/// let mut engine = Engine::builder()
///     .generation_count(10)
///     .target_population_size(20)
///     .seed(7)
///     .build()?;
///
/// let mut reports: Vec<GenerationReport> = Vec::new();
/// let last = engine.run(&mut reports)?;
/// assert_eq!(reports.len(), 11);
/// assert!((-10..=10).contains(&last.best_value));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    configuration: Configuration,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_configuration(configuration: Configuration) -> Self {
        Self { configuration }
    }

    pub fn initial_population_size(mut self, size: usize) -> Self {
        self.configuration.initial_population_size = size;
        self
    }

    pub fn generation_count(mut self, count: u32) -> Self {
        self.configuration.generation_count = count;
        self
    }

    pub fn crossover_rate(mut self, rate: f64) -> Self {
        self.configuration.crossover_rate = rate;
        self
    }

    pub fn mutation_rate(mut self, rate: f64) -> Self {
        self.configuration.mutation_rate = rate;
        self
    }

    pub fn target_population_size(mut self, size: usize) -> Self {
        self.configuration.target_population_size = size;
        self
    }

    pub fn bounds(mut self, lower: i64, upper: i64) -> Self {
        self.configuration.lower_bound = lower;
        self.configuration.upper_bound = upper;
        self
    }

    pub fn goal(mut self, goal: FitnessGoal) -> Self {
        self.configuration.goal = goal;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.configuration.seed = Some(seed);
        self
    }

    /// Builds with a [`StdRng`] seeded from the configured seed, or from the
    /// operating system when none is set.
    pub fn build(self) -> Result<Engine<StdRng>, Error> {
        let rng = match self.configuration.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        self.build_with_rng(rng)
    }

    /// Builds with a caller-supplied generator. The configured seed is ignored.
    pub fn build_with_rng<R: Rng>(self, rng: R) -> Result<Engine<R>, Error> {
        Engine::new(self.configuration, rng)
    }
}
