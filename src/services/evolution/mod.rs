mod engine;
mod engine_builder;
mod errors;
mod reports;

pub use engine::{Engine, Phase};
pub use engine_builder::EngineBuilder;
pub use errors::Error;
pub use reports::{GenerationReport, Reporter, TracingReporter};
