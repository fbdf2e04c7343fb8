use super::{Bounds, FitnessGoal, Individual, SelectionError};
use rand::Rng;
use tracing::instrument;

/// The individuals of one generation, in insertion order.
///
/// Order only makes iteration and tie-breaking deterministic. Duplicate values are
/// expected and kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Population {
    members: Vec<Individual>,
}

impl Population {
    /// An empty accumulator for the next generation.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
        }
    }

    /// `size` unevaluated individuals drawn uniformly from `bounds`.
    #[instrument(level = "debug", skip(bounds, rng), fields(size = size, lower = bounds.lower(), upper = bounds.upper()))]
    pub fn random<R: Rng>(size: usize, bounds: &Bounds, rng: &mut R) -> Self {
        (0..size)
            .map(|_| Individual::new(bounds.random(rng)))
            .collect()
    }

    pub fn push(&mut self, individual: Individual) {
        self.members.push(individual);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.members.get(index)
    }

    pub fn members(&self) -> &[Individual] {
        &self.members
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.members.iter()
    }

    pub(crate) fn evaluate_all(&mut self) {
        for individual in self.members.iter_mut() {
            individual.evaluate();
        }
    }

    /// The individual at `index` together with its fitness.
    pub(crate) fn ranked(&self, index: usize) -> Result<(&Individual, f64), SelectionError> {
        let individual = self
            .members
            .get(index)
            .ok_or(SelectionError::EmptyPopulation)?;
        let fitness = individual
            .fitness()
            .ok_or(SelectionError::Unevaluated { index })?;

        Ok((individual, fitness))
    }

    /// Scans every member and returns the extremal one under `goal`, with its fitness.
    ///
    /// Ties go to the first member in population order.
    pub(crate) fn best_ranked(
        &self,
        goal: FitnessGoal,
    ) -> Result<(&Individual, f64), SelectionError> {
        let mut best = self.ranked(0)?;

        for index in 1..self.members.len() {
            let candidate = self.ranked(index)?;
            if goal.is_better(candidate.1, best.1) {
                best = candidate;
            }
        }

        Ok(best)
    }

    /// The best evaluated individual under `goal`.
    pub fn best(&self, goal: FitnessGoal) -> Result<&Individual, SelectionError> {
        self.best_ranked(goal).map(|(individual, _)| individual)
    }
}

impl FromIterator<Individual> for Population {
    fn from_iter<I: IntoIterator<Item = Individual>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
