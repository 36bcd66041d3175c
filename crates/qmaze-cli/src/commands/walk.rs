//! Walk command implementation.

use anyhow::Result;

use qmaze_demos::circuits::{WALK_QUBITS, run_walk};
use qmaze_demos::{print_header, print_info, print_result, print_section};

use super::common::{RunOptions, create_simulator, report, with_spinner};

/// Execute the walk command.
pub async fn execute(steps: usize, shots: u32, options: &RunOptions) -> Result<()> {
    if options.is_table() {
        print_header("Quantum Walk");
        print_section("Circuit");
        print_result("Qubits", WALK_QUBITS);
        print_result("Walk steps", steps);
        print_result("Shots", shots);
        if let Some(seed) = options.seed {
            print_result("Seed", seed);
        }
        print_info("The walk step is a placeholder; the state stays uniform.");
    }

    let backend = create_simulator(options.seed)?;
    let message = format!("Walking {steps} steps on {}", backend.name());
    let result = with_spinner(&message, run_walk(backend.as_ref(), steps, shots)).await?;

    if options.is_table() {
        println!("\nWalk outcomes: {}", result.counts);
    }

    report(&result, options, &format!("Quantum walk ({steps} steps)"))
}
