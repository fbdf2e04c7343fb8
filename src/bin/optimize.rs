use quadratic_ga::{
    bootstrap::{bootstrap, load_configuration},
    services::evolution::TracingReporter,
};
use tracing::Level;

// Runs one optimization with the configuration taken from GA_* variables, or
// from .env.local when present, and prints the final report as JSON.
fn main() -> anyhow::Result<()> {
    dotenv::from_filename(".env.local").ok();
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let configuration = load_configuration()?;
    let mut engine = bootstrap(configuration)?;

    let report = engine.run(&mut TracingReporter)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
