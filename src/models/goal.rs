use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Direction of the search.
///
/// The objective is a parabola with its vertex inside any range that straddles
/// 1.5, so minimizing is the meaningful target and is the default. Both
/// `best_individual` and tournament selection read the same goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessGoal {
    /// Lower fitness is better.
    #[default]
    Minimize,
    /// Higher fitness is better.
    Maximize,
}

#[derive(Debug, thiserror::Error)]
#[error("fitness goal must be either \"minimize\" or \"maximize\", got {0:?}")]
pub struct UnknownGoal(String);

impl FitnessGoal {
    /// True when `candidate` strictly beats `incumbent`. Equal fitness never wins,
    /// which keeps the first-encountered individual on ties.
    pub fn is_better(&self, candidate: f64, incumbent: f64) -> bool {
        match self {
            FitnessGoal::Minimize => candidate < incumbent,
            FitnessGoal::Maximize => candidate > incumbent,
        }
    }
}

impl FromStr for FitnessGoal {
    type Err = UnknownGoal;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimize" | "min" => Ok(FitnessGoal::Minimize),
            "maximize" | "max" => Ok(FitnessGoal::Maximize),
            _ => Err(UnknownGoal(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_better_minimize() {
        let goal = FitnessGoal::Minimize;

        assert!(goal.is_better(4.0, 74.0));
        assert!(!goal.is_better(74.0, 4.0));
        assert!(!goal.is_better(4.0, 4.0)); // Ties keep the incumbent
    }

    #[test]
    fn test_is_better_maximize() {
        let goal = FitnessGoal::Maximize;

        assert!(goal.is_better(134.0, 74.0));
        assert!(!goal.is_better(74.0, 134.0));
        assert!(!goal.is_better(74.0, 74.0));
    }

    #[test]
    fn test_default_is_minimize() {
        assert_eq!(FitnessGoal::default(), FitnessGoal::Minimize);
    }

    #[test]
    fn test_parse() {
        assert_eq!("minimize".parse::<FitnessGoal>().ok(), Some(FitnessGoal::Minimize));
        assert_eq!(" MAX ".parse::<FitnessGoal>().ok(), Some(FitnessGoal::Maximize));
        assert!("sideways".parse::<FitnessGoal>().is_err());
    }
}
