//! Running circuits on a backend.

use anyhow::{Context, Result, bail};
use qmaze_hal::{Backend, ExecutionResult, ValidationResult};
use qmaze_ir::Circuit;
use tracing::{debug, info, instrument};

/// Run `circuit` on `backend` and wait for its result.
///
/// Checks availability and validates the circuit before submitting, so a
/// rejected circuit reports every reason at once instead of the first.
#[instrument(skip(backend, circuit), fields(backend = backend.name(), circuit = circuit.name()))]
pub async fn execute(
    backend: &dyn Backend,
    circuit: &Circuit,
    shots: u32,
) -> Result<ExecutionResult> {
    let availability = backend.availability().await?;
    if !availability.is_available {
        bail!(
            "Backend '{}' is unavailable: {}",
            backend.name(),
            availability
                .status_message
                .as_deref()
                .unwrap_or("no reason given")
        );
    }

    if let ValidationResult::Invalid { reasons } = backend.validate(circuit).await? {
        bail!(
            "Circuit '{}' is not valid for backend '{}': {}",
            circuit.name(),
            backend.name(),
            reasons.join("; ")
        );
    }

    let job_id = backend
        .submit(circuit, shots)
        .await
        .with_context(|| format!("Failed to submit '{}'", circuit.name()))?;
    info!(%job_id, shots, "Job submitted");

    let result = backend.wait(&job_id).await?;
    debug!(
        outcomes = result.counts.len(),
        time_ms = ?result.execution_time_ms,
        "Job finished"
    );

    Ok(result)
}
