use super::{Bounds, ConfigurationError, Individual, configuration::validate_rate};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Single bit-flip mutation.
///
/// With probability `rate` one position in `0..bit_width` is flipped: position 0
/// toggles the sign, any other position toggles a magnitude bit. Positions past
/// the end of a short encoding flip nothing. The mutant is decoded into a new
/// individual and adjusted into the bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mutagen {
    rate: f64,
}

impl Mutagen {
    pub fn bit_flip(rate: f64) -> Result<Self, ConfigurationError> {
        let rate = validate_rate("mutation_rate", rate)?;

        Ok(Self { rate })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns either a new mutated individual or `individual` unchanged.
    ///
    /// A flip that carries the magnitude past the `i64` range saturates before
    /// the bounds adjustment, so mutation never fails.
    #[instrument(level = "debug", skip(self, rng, individual, bounds), fields(rate = self.rate, value = individual.value(), bit_width = bit_width))]
    pub(crate) fn mutate<R: Rng>(
        &self,
        rng: &mut R,
        individual: Individual,
        bit_width: usize,
        bounds: &Bounds,
    ) -> Individual {
        // Should we mutate at all?
        if rng.random_range(0.0..1.0) >= self.rate {
            return individual;
        }

        let position = rng.random_range(0..bit_width);
        let flipped = individual.encoding().flip(position);
        let mut mutant = Individual::from_encoding_saturating(&flipped);
        bounds.adjust(&mut mutant);

        tracing::debug!(
            position = position,
            from = individual.value(),
            to = mutant.value(),
            "Mutated individual"
        );

        mutant
    }
}
