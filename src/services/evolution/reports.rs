use crate::models::Individual;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Snapshot of the best individual at a generation boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: Uuid,
    pub generation_index: u32,
    pub best_value: i64,
    pub best_fitness: f64,
    pub population_size: usize,
    pub reported_at: DateTime<Utc>,
}

impl GenerationReport {
    pub(crate) fn new(
        run_id: Uuid,
        generation_index: u32,
        best: &Individual,
        best_fitness: f64,
        population_size: usize,
    ) -> Self {
        Self {
            run_id,
            generation_index,
            best_value: best.value(),
            best_fitness,
            population_size,
            reported_at: Utc::now(),
        }
    }
}

/// Receives one report per generation boundary, plus a final one after the loop.
pub trait Reporter {
    fn report(&mut self, report: &GenerationReport);
}

impl<T: Reporter + ?Sized> Reporter for &mut T {
    fn report(&mut self, report: &GenerationReport) {
        (**self).report(report)
    }
}

/// Collects every report in order.
impl Reporter for Vec<GenerationReport> {
    fn report(&mut self, report: &GenerationReport) {
        self.push(report.clone());
    }
}

/// Logs each report at `info`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, report: &GenerationReport) {
        tracing::info!(
            run_id = %report.run_id,
            generation = report.generation_index,
            best_value = report.best_value,
            best_fitness = report.best_fitness,
            population_size = report.population_size,
            "Generation best"
        );
    }
}
