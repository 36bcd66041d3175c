//! Maze exploration via superposition.
//!
//! Each of the three qubits stands for one binary turn in the maze. Putting
//! all of them into uniform superposition and measuring yields every path
//! with equal probability; the counts map is the list of possible paths.

use anyhow::Result;
use qmaze_hal::{Backend, ExecutionResult};
use qmaze_ir::{Circuit, IrResult, QubitId};

use crate::runners::execute;

/// Number of binary turns, one qubit each.
pub const MAZE_QUBITS: u32 = 3;

/// Build the maze circuit: H on every qubit, then measure all.
pub fn create_maze_circuit() -> IrResult<Circuit> {
    let mut circuit = Circuit::with_size("maze_superposition", MAZE_QUBITS, 0);
    for q in 0..MAZE_QUBITS {
        circuit.h(QubitId(q))?;
    }
    circuit.measure_all()?;
    Ok(circuit)
}

/// Run the maze circuit on `backend`.
///
/// The result's counts are the possible paths.
pub async fn solve_maze(backend: &dyn Backend, shots: u32) -> Result<ExecutionResult> {
    let circuit = create_maze_circuit()?;
    execute(backend, &circuit, shots).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maze_circuit_shape() {
        let circuit = create_maze_circuit().unwrap();

        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_clbits(), 3);
        assert_eq!(circuit.depth(), 2);

        let ops = circuit.count_ops();
        assert_eq!(ops.get("h"), Some(&3));
        assert_eq!(ops.get("measure"), Some(&3));
    }

    #[test]
    fn test_maze_circuit_measures_into_meas_register() {
        let circuit = create_maze_circuit().unwrap();
        assert!(circuit.clbits().iter().all(|c| c.register.as_deref() == Some("meas")));
    }
}
