//! qmaze Demo Programs
//!
//! Two small programs built on the qmaze circuit IR and the local simulator:
//!
//! - **Maze via superposition**: three qubits in uniform superposition, one
//!   measured bitstring per "path" through the maze.
//! - **Quantum walk**: four qubits in superposition with a pluggable walk
//!   step applied a configurable number of times.
//!
//! Both programs share [`runners::execute`] for running a circuit on a
//! [`qmaze_hal::Backend`] and [`histogram::Histogram`] for plotting counts.
//!
//! ```ignore
//! use qmaze_adapter_sim::SimulatorBackend;
//! use qmaze_demos::circuits::maze::solve_maze;
//! use qmaze_hal::DEFAULT_SHOTS;
//!
//! let backend = SimulatorBackend::new();
//! let result = solve_maze(&backend, DEFAULT_SHOTS).await?;
//! println!("Possible paths: {}", result.counts);
//! ```

pub mod circuits;
pub mod histogram;
pub mod runners;

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Create a spinner shown while a job runs.
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Print a demo header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
    println!();
}

/// Print a demo section.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("ℹ").blue(), message);
}
