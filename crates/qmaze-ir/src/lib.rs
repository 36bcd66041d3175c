//! qmaze Circuit Descriptor
//!
//! This crate provides the data structures the qmaze programs use to describe
//! a quantum circuit before handing it to a backend.
//!
//! # Overview
//!
//! A [`Circuit`] is an ordered list of [`Instruction`]s over a fixed set of
//! qubits and classical bits. Every append is validated (gate arity, operand
//! existence, duplicate operands), so a circuit that was built successfully
//! can always be executed by a backend that supports its gates.
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`]
//! - **Gates**: [`StandardGate`], the small built-in gate set
//! - **Instructions**: [`Instruction`] combining a gate or measurement with its operands
//! - **Circuit**: [`Circuit`] builder API
//!
//! # Example: Uniform Superposition
//!
//! ```rust
//! use qmaze_ir::Circuit;
//!
//! let mut circuit = Circuit::with_size("superposition", 3, 0);
//! circuit.h_all().unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 3);
//! assert_eq!(circuit.num_clbits(), 3);
//! assert_eq!(circuit.depth(), 2); // H layer, measure layer
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `I` | 1 | Identity |
//! | `H` | 1 | Hadamard gate |
//! | `X`, `Y`, `Z` | 1 | Pauli gates |
//! | `CX` | 2 | Controlled-NOT (CNOT) |
//! | `CZ` | 2 | Controlled-Z |
//! | `Swap` | 2 | SWAP gate |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{Clbit, ClbitId, Qubit, QubitId};
