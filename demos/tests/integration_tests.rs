//! Integration tests for the demo programs.
//!
//! Runs both programs end to end on a seeded simulator, plus a mock backend
//! for the failure paths of the shared runner.

use async_trait::async_trait;
use qmaze_adapter_sim::SimulatorBackend;
use qmaze_demos::circuits::{
    DEFAULT_WALK_STEPS, WALK_SHOTS, create_maze_circuit, create_walk_circuit, run_walk,
    solve_maze,
};
use qmaze_demos::histogram::Histogram;
use qmaze_demos::runners::execute;
use qmaze_hal::{
    Backend, BackendAvailability, Capabilities, DEFAULT_SHOTS, ExecutionResult, HalError,
    HalResult, JobId, JobStatus, ValidationResult,
};
use qmaze_ir::Circuit;

/// Backend that is always offline.
struct OfflineBackend {
    capabilities: Capabilities,
}

impl OfflineBackend {
    fn new() -> Self {
        Self {
            capabilities: Capabilities::simulator(8),
        }
    }
}

#[async_trait]
impl Backend for OfflineBackend {
    fn name(&self) -> &str {
        "offline"
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    async fn availability(&self) -> HalResult<BackendAvailability> {
        Ok(BackendAvailability::unavailable("maintenance window"))
    }

    async fn validate(&self, _circuit: &Circuit) -> HalResult<ValidationResult> {
        Ok(ValidationResult::Valid)
    }

    async fn submit(&self, _circuit: &Circuit, _shots: u32) -> HalResult<JobId> {
        Err(HalError::BackendUnavailable("offline".into()))
    }

    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus> {
        Err(HalError::JobNotFound(job_id.0.clone()))
    }

    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        Err(HalError::JobNotFound(job_id.0.clone()))
    }

    async fn cancel(&self, job_id: &JobId) -> HalResult<()> {
        Err(HalError::JobNotFound(job_id.0.clone()))
    }
}

#[tokio::test]
async fn test_maze_lists_every_path() {
    let backend = SimulatorBackend::new().with_seed(2024);
    let counts = solve_maze(&backend, DEFAULT_SHOTS).await.unwrap().counts;

    assert_eq!(counts.total_shots(), u64::from(DEFAULT_SHOTS));
    assert_eq!(counts.len(), 8);
    for path in ["000", "001", "010", "011", "100", "101", "110", "111"] {
        assert!(counts.get(path) > 0, "path {path} never observed");
    }
}

#[tokio::test]
async fn test_walk_uses_requested_shots() {
    let backend = SimulatorBackend::new().with_seed(1);
    let result = run_walk(&backend, DEFAULT_WALK_STEPS, WALK_SHOTS).await.unwrap();

    assert_eq!(result.shots, WALK_SHOTS);
    assert_eq!(result.counts.total_shots(), u64::from(WALK_SHOTS));
    assert!(result.counts.iter().all(|(b, _)| b.len() == 4));
}

#[tokio::test]
async fn test_walk_steps_do_not_change_counts() {
    let mut reference = None;
    for steps in [0, 1, 3, 7] {
        let backend = SimulatorBackend::new().with_seed(77);
        let counts = run_walk(&backend, steps, WALK_SHOTS).await.unwrap().counts;
        match &reference {
            None => reference = Some(counts),
            Some(expected) => assert_eq!(&counts, expected, "steps = {steps}"),
        }
    }
}

#[tokio::test]
async fn test_execute_rejects_offline_backend() {
    let circuit = create_maze_circuit().unwrap();
    let err = execute(&OfflineBackend::new(), &circuit, 10)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("maintenance window"));
}

#[tokio::test]
async fn test_execute_reports_validation_reasons() {
    let backend = SimulatorBackend::with_max_qubits(2).unwrap();
    let circuit = create_walk_circuit(0).unwrap();

    let err = execute(&backend, &circuit, 10).await.unwrap_err();
    let message = err.to_string();
    assert!(message.contains("quantum_walk"));
    assert!(message.contains("only supports 2"));
}

#[tokio::test]
async fn test_execute_rejects_zero_shots() {
    let backend = SimulatorBackend::new();
    let circuit = create_maze_circuit().unwrap();

    let err = execute(&backend, &circuit, 0).await.unwrap_err();
    assert!(format!("{err:#}").contains("Invalid shots"));
}

#[tokio::test]
async fn test_histogram_written_to_file() {
    let backend = SimulatorBackend::new().with_seed(5);
    let counts = solve_maze(&backend, 512).await.unwrap().counts;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("maze.svg");
    Histogram::from_counts(&counts)
        .with_title("Possible paths")
        .write_svg(&path)
        .unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches(r#"class="bar""#).count(), 8);
    assert!(svg.contains("Possible paths"));
}

#[test]
fn test_write_svg_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("plot.svg");
    let hist = Histogram::from_counts(&qmaze_hal::Counts::from_pairs([("0", 1)]));

    let err = hist.write_svg(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to write histogram"));
}
