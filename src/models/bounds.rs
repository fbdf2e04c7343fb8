use super::{ConfigurationError, Individual, codec};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The inclusive decimal domain every individual must end up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    lower: i64,
    upper: i64,
}

impl Bounds {
    #[instrument(level = "debug", fields(lower = lower, upper = upper))]
    pub fn new(lower: i64, upper: i64) -> Result<Self, ConfigurationError> {
        if lower > upper {
            return Err(ConfigurationError::InvalidBounds { lower, upper });
        }

        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> i64 {
        self.lower
    }

    pub fn upper(&self) -> i64 {
        self.upper
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.lower..=self.upper).contains(&value)
    }

    /// Encoding width, sign token included, needed for the widest value in range.
    pub fn bit_width(&self) -> usize {
        codec::bit_width(self.lower, self.upper)
    }

    /// Draws a value uniformly from the inclusive range.
    pub fn random<R: Rng>(&self, rng: &mut R) -> i64 {
        rng.random_range(self.lower..=self.upper)
    }

    /// Clamps an out-of-range individual onto the nearest bound.
    ///
    /// Value and encoding are rewritten together. Returns whether anything changed;
    /// an individual already in range is left untouched, fitness included.
    #[instrument(level = "debug", skip(self, individual), fields(value = individual.value(), lower = self.lower, upper = self.upper))]
    pub fn adjust(&self, individual: &mut Individual) -> bool {
        let value = individual.value();
        let clamped = value.clamp(self.lower, self.upper);

        if clamped == value {
            return false;
        }

        tracing::debug!(from = value, to = clamped, "Clamped individual into bounds");
        individual.set_value(clamped);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn default_bounds() -> Bounds {
        Bounds::new(-10, 10).expect("is valid")
    }

    #[test]
    fn it_rejects_inverted_bounds() {
        assert_eq!(
            Bounds::new(5, -5),
            Err(ConfigurationError::InvalidBounds { lower: 5, upper: -5 })
        );
        assert!(Bounds::new(3, 3).is_ok());
    }

    #[test]
    fn it_clamps_values_above_the_upper_bound() {
        let bounds = default_bounds();
        let mut individual = Individual::new(999);

        assert!(bounds.adjust(&mut individual));
        assert_eq!(individual.value(), 10);
        assert_eq!(individual.encoding().as_str(), "+1010");
        assert_eq!(codec::decode(individual.encoding().as_str()), Ok(10));
    }

    #[test]
    fn it_clamps_values_below_the_lower_bound() {
        let bounds = default_bounds();
        let mut individual = Individual::new(-999);

        assert!(bounds.adjust(&mut individual));
        assert_eq!(individual.value(), -10);
        assert_eq!(individual.encoding().as_str(), "-1010");
    }

    #[test]
    fn it_leaves_values_in_range_untouched() {
        let bounds = default_bounds();
        let mut individual = Individual::new(-4);
        individual.evaluate();
        let before = individual.clone();

        assert!(!bounds.adjust(&mut individual));
        assert_eq!(individual, before);
    }

    #[test]
    fn it_draws_random_values_in_range() {
        let bounds = default_bounds();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            assert!(bounds.contains(bounds.random(&mut rng)));
        }
    }

    #[test]
    fn it_draws_the_only_value_of_a_degenerate_range() {
        let bounds = Bounds::new(7, 7).expect("is valid");
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(bounds.random(&mut rng), 7);
    }

    #[test]
    fn it_reports_the_bit_width() {
        assert_eq!(default_bounds().bit_width(), 5);
        assert_eq!(Bounds::new(0, 1).expect("is valid").bit_width(), 2);
    }

    proptest! {
        #[test]
        fn it_adjusts_idempotently(value in any::<i64>(), lower in -1_000i64..0, upper in 0i64..1_000) {
            let bounds = Bounds::new(lower, upper).expect("lower <= upper");

            let mut once = Individual::new(value);
            bounds.adjust(&mut once);

            let mut twice = once.clone();
            prop_assert!(!bounds.adjust(&mut twice));
            prop_assert_eq!(&once, &twice);
            prop_assert!(bounds.contains(once.value()));
        }
    }
}
