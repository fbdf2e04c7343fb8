//! A small genetic algorithm searching a bounded integer range for the minimum of
//! `f(x) = x² − 3x + 4`.
//!
//! Candidates are encoded as signed binary strings, paired by binary tournament,
//! recombined by single-point crossover, mutated by a single bit flip and clamped
//! back into range. The [`Engine`] drives the loop and hands a
//! [`GenerationReport`](services::evolution::GenerationReport) to a
//! [`Reporter`](services::evolution::Reporter) at every generation boundary.

pub mod bootstrap;
pub mod models;
pub mod services;

pub use services::evolution::Engine;
