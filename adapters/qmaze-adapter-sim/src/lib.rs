//! qmaze Local Statevector Simulator
//!
//! A local backend for the qmaze programs. It evolves the full statevector
//! once per job and then draws the requested number of shots from the final
//! probability distribution, so a job costs one simulation regardless of
//! the shot count.
//!
//! # Bit ordering
//!
//! Counts keys are classical-bit strings with clbit 0 as the rightmost
//! character, e.g. an `x` on qubit 0 of a 3-qubit circuit followed by
//! `measure_all` yields `"001"`.
//!
//! # Reproducibility
//!
//! [`SimulatorBackend::with_seed`] fixes the sampling RNG; each job starts
//! from the same seed, so identical circuits produce identical counts.
//!
//! | Qubits | Memory |
//! |--------|--------|
//! | 10 | ~16 KB |
//! | 15 | ~512 KB |
//! | 20 | ~16 MB |
//!
//! # Example
//!
//! ```ignore
//! use qmaze_adapter_sim::SimulatorBackend;
//! use qmaze_hal::Backend;
//! use qmaze_ir::Circuit;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SimulatorBackend::new().with_seed(42);
//!
//!     let mut circuit = Circuit::with_size("superposition", 3, 0);
//!     circuit.h_all()?.measure_all()?;
//!
//!     let job_id = backend.submit(&circuit, 1000).await?;
//!     let result = backend.wait(&job_id).await?;
//!     println!("Results: {}", result.counts);
//!
//!     Ok(())
//! }
//! ```

mod simulator;
pub mod statevector;

pub use simulator::{DEFAULT_MAX_QUBITS, MAX_SUPPORTED_QUBITS, SimulatorBackend};
