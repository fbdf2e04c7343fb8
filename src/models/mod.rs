pub mod codec;

mod bounds;
mod configuration;
mod crossover;
mod goal;
mod individual;
mod mutagen;
mod population;
mod selector;

pub use bounds::Bounds;
pub use codec::{CodecError, Encoding};
pub use configuration::{Configuration, ConfigurationError};
pub use crossover::Crossover;
pub use goal::{FitnessGoal, UnknownGoal};
pub use individual::{Individual, objective};
pub use mutagen::Mutagen;
pub use population::Population;
pub use selector::{SelectionError, Selector};
