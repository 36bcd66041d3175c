//! Shared helpers for CLI commands.

use std::future::Future;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ValueEnum;
use console::style;
use tracing::debug;

use qmaze_adapter_sim::SimulatorBackend;
use qmaze_demos::histogram::Histogram;
use qmaze_demos::create_spinner;
use qmaze_hal::{Backend, BackendConfig, BackendRegistry, ExecutionResult};

/// Name the local simulator is registered under.
pub const SIMULATOR: &str = "simulator";

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// Serialized execution result
    Json,
}

/// Options shared by the program commands.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub seed: Option<u64>,
    pub plot: Option<PathBuf>,
    pub format: OutputFormat,
}

impl RunOptions {
    pub fn is_table(&self) -> bool {
        self.format == OutputFormat::Table
    }
}

/// Registry of every backend the CLI can run on.
pub fn create_registry() -> BackendRegistry {
    let mut registry = BackendRegistry::new();
    registry.register::<SimulatorBackend>(SIMULATOR);
    registry
}

/// Create the simulator, seeded if `seed` is set.
pub fn create_simulator(seed: Option<u64>) -> Result<Box<dyn Backend>> {
    debug!(?seed, "Creating simulator backend");
    let config = BackendConfig::new(SIMULATOR).with_extra("seed", serde_json::json!(seed));
    create_registry()
        .create(SIMULATOR, config)
        .context("Failed to create simulator backend")
}

/// Await `run` while showing a spinner.
pub async fn with_spinner<T>(message: &str, run: impl Future<Output = Result<T>>) -> Result<T> {
    let spinner = create_spinner(message);
    let result = run.await;
    spinner.finish_and_clear();
    result
}

/// Print the result in the requested format and write the plot, if any.
pub fn report(result: &ExecutionResult, options: &RunOptions, title: &str) -> Result<()> {
    match options.format {
        OutputFormat::Table => print_results(result),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(result)
                .context("Failed to serialize execution result")?;
            println!("{json}");
        }
    }

    if let Some(path) = &options.plot {
        Histogram::from_counts(&result.counts)
            .with_title(title)
            .write_svg(path)?;
        if options.is_table() {
            println!(
                "\n{} Histogram written to {}",
                style("✓").green().bold(),
                style(path.display()).cyan()
            );
        }
    }

    Ok(())
}

/// Print execution results in a table format.
pub fn print_results(result: &ExecutionResult) {
    println!(
        "\n{} Results ({} shots):",
        style("✓").green().bold(),
        result.shots
    );

    let hist = Histogram::from_counts(&result.counts);
    for line in hist.render_text(40).lines() {
        println!("  {}", style(line).green());
    }

    if let Some((bitstring, probability)) = result.most_frequent() {
        println!(
            "\n  Most frequent: {} ({:.1}%)",
            style(bitstring).cyan(),
            probability * 100.0
        );
    }

    if let Some(time_ms) = result.execution_time_ms {
        println!("  Execution time: {} ms", style(time_ms).yellow());
    }
}
