//! qmaze Backend Abstraction Layer
//!
//! This crate defines how the qmaze programs talk to something that can run a
//! circuit: the [`Backend`] trait, the job lifecycle, backend capabilities and
//! the [`Counts`] / [`ExecutionResult`] types every backend returns.
//!
//! # Example: Running a Circuit
//!
//! ```ignore
//! use qmaze_adapter_sim::SimulatorBackend;
//! use qmaze_hal::{Backend, DEFAULT_SHOTS};
//! use qmaze_ir::Circuit;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let mut circuit = Circuit::with_size("superposition", 3, 0);
//!     circuit.h_all()?.measure_all()?;
//!
//!     let backend = SimulatorBackend::new();
//!     let job_id = backend.submit(&circuit, DEFAULT_SHOTS).await?;
//!     let result = backend.wait(&job_id).await?;
//!
//!     println!("Counts: {}", result.counts);
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod capability;
pub mod error;
pub mod job;
pub mod registry;
pub mod result;

pub use backend::{
    Backend, BackendAvailability, BackendConfig, BackendFactory, DEFAULT_SHOTS, ValidationResult,
};
pub use capability::{Capabilities, GateSet};
pub use error::{HalError, HalResult};
pub use job::{Job, JobId, JobStatus};
pub use registry::BackendRegistry;
pub use result::{Counts, ExecutionResult};
