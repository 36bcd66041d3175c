//! Maze command implementation.

use anyhow::Result;

use qmaze_demos::circuits::{MAZE_QUBITS, solve_maze};
use qmaze_demos::{print_header, print_result, print_section};

use super::common::{RunOptions, create_simulator, report, with_spinner};

/// Execute the maze command.
pub async fn execute(shots: u32, options: &RunOptions) -> Result<()> {
    if options.is_table() {
        print_header("Maze Exploration via Superposition");
        print_section("Circuit");
        print_result("Qubits", MAZE_QUBITS);
        print_result("Shots", shots);
        if let Some(seed) = options.seed {
            print_result("Seed", seed);
        }
    }

    let backend = create_simulator(options.seed)?;
    let message = format!("Exploring maze on {}", backend.name());
    let result = with_spinner(&message, solve_maze(backend.as_ref(), shots)).await?;

    if options.is_table() {
        println!("\nPossible paths: {}", result.counts);
    }

    report(&result, options, "Possible paths")
}
