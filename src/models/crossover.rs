use super::{Bounds, ConfigurationError, Individual, configuration::validate_rate};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Splices two parents' encodings at `cut` into a pair of children.
///
/// The first child takes `lhs` up to the cut and `rhs` after it; the second child
/// the other way round. Children are decoded fresh and may land outside the bounds;
/// magnitudes past the `i64` range saturate.
#[instrument(level = "debug", skip(lhs, rhs), fields(lhs = %lhs.encoding(), rhs = %rhs.encoding(), cut_point = cut))]
fn crossover_single_point(
    lhs: &Individual,
    rhs: &Individual,
    cut: usize,
) -> (Individual, Individual) {
    let first = lhs.encoding().splice(rhs.encoding(), cut);
    let second = rhs.encoding().splice(lhs.encoding(), cut);

    (
        Individual::from_encoding_saturating(&first),
        Individual::from_encoding_saturating(&second),
    )
}

/// Single-point crossover over signed binary encodings.
///
/// Each call first draws from [0, 1) and recombines only when the draw falls below
/// `rate`. The cut point is drawn uniformly from `1..=bit_width`, counted in
/// characters of the encoding with the sign token at position 0. A cut of 1 keeps
/// each parent's sign and swaps every digit; a cut at or past the wider parent's
/// width clones both parents.
///
/// When the draw fails the children are fresh copies of the parents' values, with
/// fitness cleared.
///
/// # Examples
///
/// ```rust
/// use quadratic_ga::models::Crossover;
///
/// let crossover = Crossover::single_point(0.7)?;
/// assert_eq!(crossover.rate(), 0.7);
///
/// assert!(Crossover::single_point(1.5).is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crossover {
    rate: f64,
}

impl Crossover {
    /// Creates a single-point crossover applied with probability `rate`.
    pub fn single_point(rate: f64) -> Result<Self, ConfigurationError> {
        let rate = validate_rate("crossover_rate", rate)?;

        Ok(Self { rate })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Produces two children from two parents, adjusting recombined children into `bounds`.
    #[instrument(level = "debug", skip(self, rng, lhs, rhs, bounds), fields(rate = self.rate, lhs = lhs.value(), rhs = rhs.value(), bit_width = bit_width))]
    pub(crate) fn apply<R: Rng>(
        &self,
        rng: &mut R,
        lhs: &Individual,
        rhs: &Individual,
        bit_width: usize,
        bounds: &Bounds,
    ) -> (Individual, Individual) {
        if rng.random_range(0.0..1.0) >= self.rate {
            return (Individual::new(lhs.value()), Individual::new(rhs.value()));
        }

        let cut = rng.random_range(1..=bit_width);
        let (mut first, mut second) = crossover_single_point(lhs, rhs, cut);

        bounds.adjust(&mut first);
        bounds.adjust(&mut second);

        (first, second)
    }
}
