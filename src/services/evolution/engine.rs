use super::{EngineBuilder, Error, GenerationReport, Reporter};
use crate::models::{
    Bounds, Configuration, Crossover, Individual, Mutagen, Population, Selector,
};
use rand::{Rng, rngs::StdRng};
use tracing::instrument;
use uuid::Uuid;

/// Where a run is in its lifecycle.
///
/// Every population replacement is followed by an evaluation before the next read,
/// so no phase other than `Uninitialized` holds unevaluated members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The initial population exists but has not been evaluated.
    Uninitialized,
    /// The initial population (generation 0) is evaluated.
    Evaluated,
    /// At least one generation has been bred.
    Evolving { generation: u32 },
    /// The final report has been emitted.
    Completed,
}

/// Genetic algorithm over a bounded integer domain.
///
/// The engine owns its parameters, the current population and the random
/// generator. Seeding the generator makes a run fully reproducible.
#[derive(Debug)]
pub struct Engine<R: Rng = StdRng> {
    run_id: Uuid,
    configuration: Configuration,
    bounds: Bounds,
    bit_width: usize,
    crossover: Crossover,
    mutagen: Mutagen,
    selector: Selector,
    population: Population,
    phase: Phase,
    rng: R,
}

impl Engine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }
}

impl<R: Rng> Engine<R> {
    /// Validates `configuration` and draws the initial population from `rng`.
    #[instrument(level = "debug", skip(configuration, rng), fields(configuration = ?configuration))]
    pub fn new(configuration: Configuration, mut rng: R) -> Result<Self, Error> {
        configuration.validate()?;

        let bounds = Bounds::new(configuration.lower_bound, configuration.upper_bound)?;
        let crossover = Crossover::single_point(configuration.crossover_rate)?;
        let mutagen = Mutagen::bit_flip(configuration.mutation_rate)?;
        let population =
            Population::random(configuration.initial_population_size, &bounds, &mut rng);
        let run_id = Uuid::now_v7();

        tracing::info!(
            run_id = %run_id,
            lower = bounds.lower(),
            upper = bounds.upper(),
            bit_width = bounds.bit_width(),
            goal = ?configuration.goal,
            "Engine created"
        );

        Ok(Self {
            run_id,
            bit_width: bounds.bit_width(),
            bounds,
            crossover,
            mutagen,
            selector: Selector::default(),
            population,
            phase: Phase::Uninitialized,
            configuration,
            rng,
        })
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Encoding width in characters, sign token included. Fixed for the run.
    pub fn bit_width(&self) -> usize {
        self.bit_width
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the current population; 0 until the first replacement.
    pub fn generation(&self) -> u32 {
        match self.phase {
            Phase::Uninitialized | Phase::Evaluated => 0,
            Phase::Evolving { generation } => generation,
            Phase::Completed => self.configuration.generation_count,
        }
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Evaluates every member of the current population in place.
    #[instrument(level = "debug", skip(self), fields(run_id = %self.run_id, population_size = self.population.len()))]
    pub fn evaluate_all(&mut self) {
        self.population.evaluate_all();

        if self.phase == Phase::Uninitialized {
            self.phase = Phase::Evaluated;
        }
    }

    /// The member with the best fitness under the configured goal; ties go to the
    /// first in population order.
    pub fn best_individual(&self) -> Result<&Individual, Error> {
        Ok(self.population.best(self.configuration.goal)?)
    }

    /// Binary tournament over the current population, drawn with replacement.
    pub fn select(&mut self) -> Result<Individual, Error> {
        let winner =
            self.selector
                .select(&mut self.rng, &self.population, self.configuration.goal)?;

        Ok(winner.clone())
    }

    /// Single-point crossover gated by the crossover rate. Children come back
    /// adjusted into bounds and unevaluated.
    pub fn crossover(&mut self, lhs: &Individual, rhs: &Individual) -> (Individual, Individual) {
        self.crossover
            .apply(&mut self.rng, lhs, rhs, self.bit_width, &self.bounds)
    }

    /// Clamps `individual` into the bounds, rewriting value and encoding together.
    pub fn adjust_to_bounds(&self, individual: &mut Individual) {
        self.bounds.adjust(individual);
    }

    /// Bit-flip mutation gated by the mutation rate.
    pub fn mutate(&mut self, individual: Individual) -> Individual {
        self.mutagen
            .mutate(&mut self.rng, individual, self.bit_width, &self.bounds)
    }

    /// Evaluates, reports the best individual, then replaces the population with a
    /// freshly bred one and evaluates that.
    ///
    /// The new population holds exactly `target_population_size` members. When a
    /// single slot remains the second child of the last pair is still bred, so the
    /// random stream does not depend on parity, but it is dropped.
    ///
    /// Fails with [`Error::GenerationLimitReached`] once `generation_count`
    /// generations have been bred.
    #[instrument(level = "debug", skip(self, reporter), fields(run_id = %self.run_id, generation = self.generation()))]
    pub fn run_generation(
        &mut self,
        reporter: &mut impl Reporter,
    ) -> Result<GenerationReport, Error> {
        if self.phase == Phase::Completed {
            return Err(Error::AlreadyCompleted);
        }

        let generation_count = self.configuration.generation_count;
        if self.generation() >= generation_count {
            return Err(Error::GenerationLimitReached { generation_count });
        }

        self.evaluate_all();
        let report = self.report(reporter)?;

        self.population = self.breed()?;
        self.evaluate_all();
        self.phase = Phase::Evolving {
            generation: report.generation_index + 1,
        };

        Ok(report)
    }

    /// Runs the remaining generations up to `generation_count` and emits a final
    /// report.
    ///
    /// Generations already driven through [`Engine::run_generation`] count towards
    /// the total, so a run always produces `generation_count + 1` reports. Returns
    /// the last one.
    #[instrument(level = "info", skip(self, reporter), fields(run_id = %self.run_id, generation_count = self.configuration.generation_count))]
    pub fn run(&mut self, reporter: &mut impl Reporter) -> Result<GenerationReport, Error> {
        if self.phase == Phase::Completed {
            return Err(Error::AlreadyCompleted);
        }

        tracing::info!("Run started");
        self.evaluate_all();

        while self.generation() < self.configuration.generation_count {
            self.run_generation(reporter)?;
        }

        self.evaluate_all();
        let report = self.report(reporter)?;
        self.phase = Phase::Completed;

        tracing::info!(
            best_value = report.best_value,
            best_fitness = report.best_fitness,
            "Run completed"
        );

        Ok(report)
    }

    fn report(&self, reporter: &mut impl Reporter) -> Result<GenerationReport, Error> {
        let (best, fitness) = self.population.best_ranked(self.configuration.goal)?;
        let report = GenerationReport::new(
            self.run_id,
            self.generation(),
            best,
            fitness,
            self.population.len(),
        );

        reporter.report(&report);
        Ok(report)
    }

    #[instrument(level = "debug", skip(self), fields(run_id = %self.run_id, target = self.configuration.target_population_size))]
    fn breed(&mut self) -> Result<Population, Error> {
        let target = self.configuration.target_population_size;
        let mut next = Population::with_capacity(target);

        while next.len() < target {
            let lhs = self.select()?;
            let rhs = self.select()?;

            let (first, second) = self.crossover(&lhs, &rhs);
            let first = self.mutate(first);
            let second = self.mutate(second);

            next.push(first);
            if next.len() < target {
                next.push(second);
            }
        }

        Ok(next)
    }
}
