//! Parent selection.
//!
//! Tournament selection draws two contestants uniformly at random, with
//! replacement, and keeps the fitter under the run's [`FitnessGoal`]. A
//! contestant only displaces the current winner when it is strictly better, so
//! on ties the earliest draw wins.
//!
//! A tournament of two gives weak selection pressure, which suits the tiny
//! initial populations this engine starts from. Because contestants are drawn
//! with replacement, a population of one still yields a winner.

use super::{FitnessGoal, Individual, Population};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Errors that can occur while reading fitness out of a population.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// The population has no members to select from.
    #[error("EmptyPopulation: the population has no members")]
    EmptyPopulation,

    /// A member was read before it was evaluated.
    ///
    /// The engine evaluates every population before reading from it, so this
    /// points at a caller driving the operators out of order.
    #[error("Unevaluated: member at index {index} has not been evaluated")]
    Unevaluated { index: usize },
}

/// Tournament selection configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selector {
    tournament_size: usize,
}

impl Default for Selector {
    fn default() -> Self {
        Self { tournament_size: 2 }
    }
}

impl Selector {
    /// Runs one tournament over `population` and returns the winner.
    #[instrument(level = "debug", skip(self, rng, population), fields(tournament_size = self.tournament_size, population_size = population.len(), goal = ?goal))]
    pub(crate) fn select<'a, R: Rng>(
        &self,
        rng: &mut R,
        population: &'a Population,
        goal: FitnessGoal,
    ) -> Result<&'a Individual, SelectionError> {
        if population.is_empty() {
            return Err(SelectionError::EmptyPopulation);
        }

        let mut winner = population.ranked(rng.random_range(0..population.len()))?;

        for _ in 1..self.tournament_size {
            let challenger = population.ranked(rng.random_range(0..population.len()))?;
            if goal.is_better(challenger.1, winner.1) {
                winner = challenger;
            }
        }

        Ok(winner.0)
    }
}
