//! Quantum walk over a four-qubit register.
//!
//! The walk starts from a uniform superposition and applies a [`WalkStep`]
//! a fixed number of times before measuring. The shipped step,
//! [`PlaceholderStep`], leaves the circuit untouched; a coin-and-shift
//! operator plugs in by implementing [`WalkStep`].

use anyhow::Result;
use qmaze_hal::{Backend, ExecutionResult};
use qmaze_ir::{Circuit, IrResult};
use tracing::trace;

use crate::runners::execute;

/// Size of the walk register.
pub const WALK_QUBITS: u32 = 4;

/// Shots used by the walk program.
pub const WALK_SHOTS: u32 = 1000;

/// Walk steps used when none are given.
pub const DEFAULT_WALK_STEPS: usize = 3;

/// One step of a quantum walk.
pub trait WalkStep {
    /// Append this step's operations to `circuit`.
    fn apply(&self, circuit: &mut Circuit) -> IrResult<()>;
}

/// Walk step that appends nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderStep;

impl WalkStep for PlaceholderStep {
    fn apply(&self, _circuit: &mut Circuit) -> IrResult<()> {
        Ok(())
    }
}

/// Apply `steps` iterations of the default walk step.
pub fn apply_quantum_walk(circuit: &mut Circuit, steps: usize) -> IrResult<()> {
    apply_walk_with(circuit, steps, &PlaceholderStep)
}

/// Apply `steps` iterations of `step`.
pub fn apply_walk_with(circuit: &mut Circuit, steps: usize, step: &dyn WalkStep) -> IrResult<()> {
    for i in 0..steps {
        trace!(step = i, "applying walk step");
        step.apply(circuit)?;
    }
    Ok(())
}

/// Build the walk circuit: H on all qubits, `steps` walk steps, measure all.
pub fn create_walk_circuit(steps: usize) -> IrResult<Circuit> {
    create_walk_circuit_with(steps, &PlaceholderStep)
}

/// Build the walk circuit with a custom step.
pub fn create_walk_circuit_with(steps: usize, step: &dyn WalkStep) -> IrResult<Circuit> {
    let mut circuit = Circuit::with_size("quantum_walk", WALK_QUBITS, 0);
    circuit.h_all()?;
    apply_walk_with(&mut circuit, steps, step)?;
    circuit.measure_all()?;
    Ok(circuit)
}

/// Build and run the walk circuit on `backend`.
pub async fn run_walk(backend: &dyn Backend, steps: usize, shots: u32) -> Result<ExecutionResult> {
    let circuit = create_walk_circuit(steps)?;
    execute(backend, &circuit, shots).await
}
