use super::codec::{self, CodecError, Encoding};
use std::fmt;

/// The fixed objective, `x² − 3x + 4`.
///
/// Computed in `f64` so values decoded far outside the bounds cannot overflow.
pub fn objective(value: i64) -> f64 {
    let x = value as f64;
    x * x - 3.0 * x + 4.0
}

/// A candidate solution.
///
/// `value` is canonical; `encoding` is always derived from it and the two are only
/// ever rewritten together. `fitness` is `None` until [`Individual::evaluate`] runs
/// and is cleared whenever the value changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    value: i64,
    encoding: Encoding,
    fitness: Option<f64>,
}

impl Individual {
    pub fn new(value: i64) -> Self {
        Self {
            value,
            encoding: codec::encode(value),
            fitness: None,
        }
    }

    /// Decodes `encoding` and builds a fresh individual from the result.
    ///
    /// The stored encoding is re-derived from the decoded value, so `-0` becomes `+0`.
    pub fn from_encoding(encoding: &Encoding) -> Result<Self, CodecError> {
        Ok(Self::new(codec::decode(encoding.as_str())?))
    }

    /// Builds an individual from an operator's output encoding, saturating values
    /// past the `i64` range instead of failing.
    pub(crate) fn from_encoding_saturating(encoding: &Encoding) -> Self {
        Self::new(codec::decode_saturating(encoding))
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn encoding(&self) -> &Encoding {
        &self.encoding
    }

    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// Runs the objective on the current value and caches the result.
    pub fn evaluate(&mut self) -> f64 {
        let fitness = objective(self.value);
        self.fitness = Some(fitness);
        fitness
    }

    pub(crate) fn set_value(&mut self, value: i64) {
        self.value = value;
        self.encoding = codec::encode(value);
        self.fitness = None;
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fitness {
            Some(fitness) => write!(f, "{} ({}) fitness={}", self.value, self.encoding, fitness),
            None => write!(f, "{} ({}) unevaluated", self.value, self.encoding),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_evaluates_the_objective() {
        assert_eq!(Individual::new(0).evaluate(), 4.0);
        assert_eq!(Individual::new(3).evaluate(), 4.0);
        assert_eq!(Individual::new(-10).evaluate(), 134.0);
        assert_eq!(Individual::new(10).evaluate(), 74.0);
    }

    #[test]
    fn it_starts_unevaluated() {
        let mut individual = Individual::new(7);
        assert_eq!(individual.fitness(), None);

        individual.evaluate();
        assert_eq!(individual.fitness(), Some(32.0));
    }

    #[test]
    fn it_derives_the_encoding_from_the_value() {
        let individual = Individual::new(-5);

        assert_eq!(individual.encoding().as_str(), "-101");
        assert_eq!(codec::decode(individual.encoding().as_str()), Ok(-5));
    }

    #[test]
    fn it_canonicalizes_when_built_from_an_encoding() {
        let encoding: Encoding = "-0".parse().expect("is well formed");
        let individual = Individual::from_encoding(&encoding).expect("decodes");

        assert_eq!(individual.value(), 0);
        assert_eq!(individual.encoding().as_str(), "+0");
    }

    #[test]
    fn it_saturates_offspring_past_the_extremes() {
        let beyond_min = Individual::new(i64::MIN).encoding().flip(64);

        assert!(Individual::from_encoding(&beyond_min).is_err());

        let individual = Individual::from_encoding_saturating(&beyond_min);
        assert_eq!(individual.value(), i64::MIN);
        assert_eq!(codec::decode(individual.encoding().as_str()), Ok(i64::MIN));
    }

    #[test]
    fn it_rewrites_value_and_encoding_together() {
        let mut individual = Individual::new(999);
        individual.evaluate();

        individual.set_value(10);

        assert_eq!(individual.value(), 10);
        assert_eq!(individual.encoding().as_str(), "+1010");
        assert!(!individual.is_evaluated());
    }

    #[test]
    fn it_does_not_overflow_far_outside_the_bounds() {
        let fitness = Individual::new(i64::MIN).evaluate();
        assert!(fitness.is_finite());
    }
}
