//! Circuit builders for the demo programs.

pub mod maze;
pub mod walk;

pub use maze::{MAZE_QUBITS, create_maze_circuit, solve_maze};
pub use walk::{
    DEFAULT_WALK_STEPS, PlaceholderStep, WALK_QUBITS, WALK_SHOTS, WalkStep, apply_quantum_walk,
    apply_walk_with, create_walk_circuit, create_walk_circuit_with, run_walk,
};
