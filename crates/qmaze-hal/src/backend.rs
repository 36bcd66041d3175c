//! Backend trait and configuration.
//!
//! The [`Backend`] trait defines the lifecycle for running a circuit:
//!
//! ```text
//!   capabilities() ──→ validate() ──→ submit() ──→ status() ──→ result()
//!    (sync, &ref)       (async)       (async)      (async)      (async)
//! ```
//!
//! | Method | Kind | Required | Returns |
//! |--------|------|----------|---------|
//! | `name()` | sync | yes | `&str` |
//! | `capabilities()` | sync | yes | `&Capabilities` |
//! | `availability()` | async | yes | `HalResult<BackendAvailability>` |
//! | `validate()` | async | yes | `HalResult<ValidationResult>` |
//! | `submit()` | async | yes | `HalResult<JobId>` |
//! | `status()` | async | yes | `HalResult<JobStatus>` |
//! | `result()` | async | yes | `HalResult<ExecutionResult>` |
//! | `cancel()` | async | yes | `HalResult<()>` |
//! | `wait()` | async | provided | `HalResult<ExecutionResult>` |

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use qmaze_ir::Circuit;

use crate::capability::Capabilities;
use crate::error::{HalError, HalResult};
use crate::job::{JobId, JobStatus};
use crate::result::ExecutionResult;

/// Shots used when a caller does not choose a count.
pub const DEFAULT_SHOTS: u32 = 1024;

/// Interval between `status()` polls in [`Backend::wait`].
pub const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Number of polls before [`Backend::wait`] gives up (5 minutes).
pub const WAIT_MAX_POLLS: u32 = 600;

/// Configuration for a backend instance.
#[derive(Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Name of the backend.
    pub name: String,
    /// Backend-specific settings.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BackendConfig {
    /// Create a new backend configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Add extra configuration.
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Read an unsigned integer setting.
    ///
    /// Returns `Ok(None)` when the key is absent and a configuration error
    /// when it holds anything but a non-negative integer.
    pub fn get_u64(&self, key: &str) -> HalResult<Option<u64>> {
        match self.extra.get(key) {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(value) => value.as_u64().map(Some).ok_or_else(|| {
                HalError::Configuration(format!(
                    "'{key}' must be a non-negative integer, got {value}"
                ))
            }),
        }
    }
}

impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("name", &self.name)
            .field("extra", &self.extra)
            .finish()
    }
}

/// Trait for quantum backends.
///
/// # Contract
///
/// - `capabilities()` MUST be synchronous and infallible; capabilities are
///   cached at construction time.
/// - `validate()` checks the circuit against backend constraints.
/// - `submit()` MUST reject circuits that `validate()` reports as invalid.
/// - `result()` MUST only succeed when status is `Completed`.
/// - `wait()` polls every 500 ms for up to 5 minutes.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Get the name of this backend.
    fn name(&self) -> &str;

    /// Get the capabilities of this backend.
    fn capabilities(&self) -> &Capabilities;

    /// Check backend availability.
    async fn availability(&self) -> HalResult<BackendAvailability>;

    /// Validate a circuit against backend constraints.
    async fn validate(&self, circuit: &Circuit) -> HalResult<ValidationResult>;

    /// Submit a circuit for execution with `shots` repetitions.
    async fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<JobId>;

    /// Get the status of a job.
    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus>;

    /// Get the result of a completed job.
    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult>;

    /// Cancel a job.
    async fn cancel(&self, job_id: &JobId) -> HalResult<()>;

    /// Wait for a job to complete and return its result.
    async fn wait(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        for _ in 0..WAIT_MAX_POLLS {
            match self.status(job_id).await? {
                JobStatus::Completed => return self.result(job_id).await,
                JobStatus::Failed(msg) => return Err(HalError::JobFailed(msg)),
                JobStatus::Cancelled => return Err(HalError::JobCancelled),
                JobStatus::Queued | JobStatus::Running => {
                    tokio::time::sleep(WAIT_POLL_INTERVAL).await;
                }
            }
        }

        Err(HalError::Timeout(job_id.0.clone()))
    }
}

/// Backend availability information.
#[derive(Debug, Clone)]
pub struct BackendAvailability {
    /// Whether the backend is currently accepting jobs.
    pub is_available: bool,
    /// Number of jobs currently in queue (if known).
    pub queue_depth: Option<u32>,
    /// Human-readable status message.
    pub status_message: Option<String>,
}

impl BackendAvailability {
    /// Availability of a backend with no queue, such as a local simulator.
    pub fn always_available() -> Self {
        Self {
            is_available: true,
            queue_depth: Some(0),
            status_message: None,
        }
    }

    /// Create availability for an offline backend.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            is_available: false,
            queue_depth: None,
            status_message: Some(reason.into()),
        }
    }
}

/// Result of circuit validation against backend constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Circuit is valid and can be submitted directly.
    Valid,
    /// Circuit cannot run on this backend.
    Invalid {
        /// Reasons the circuit is invalid.
        reasons: Vec<String>,
    },
}

impl ValidationResult {
    /// Check if the circuit is valid.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Build a result from a list of problems; empty means valid.
    pub fn from_reasons(reasons: Vec<String>) -> Self {
        if reasons.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid { reasons }
        }
    }
}

/// Trait for creating backends from configuration.
pub trait BackendFactory: Backend + Sized {
    /// Create a backend from configuration.
    fn from_config(config: BackendConfig) -> HalResult<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    use crate::result::Counts;

    /// Backend whose job walks through a fixed list of statuses, repeating
    /// the last one once the list runs out.
    struct ScriptedBackend {
        capabilities: Capabilities,
        statuses: Mutex<VecDeque<JobStatus>>,
        polls: AtomicU32,
    }

    impl ScriptedBackend {
        fn new(statuses: impl IntoIterator<Item = JobStatus>) -> Self {
            Self {
                capabilities: Capabilities::simulator(2),
                statuses: Mutex::new(statuses.into_iter().collect()),
                polls: AtomicU32::new(0),
            }
        }

        fn polls(&self) -> u32 {
            self.polls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Backend for ScriptedBackend {
        fn name(&self) -> &str {
            "scripted"
        }

        fn capabilities(&self) -> &Capabilities {
            &self.capabilities
        }

        async fn availability(&self) -> HalResult<BackendAvailability> {
            Ok(BackendAvailability::always_available())
        }

        async fn validate(&self, _circuit: &Circuit) -> HalResult<ValidationResult> {
            Ok(ValidationResult::Valid)
        }

        async fn submit(&self, _circuit: &Circuit, _shots: u32) -> HalResult<JobId> {
            Ok(JobId::new("job"))
        }

        async fn status(&self, _job_id: &JobId) -> HalResult<JobStatus> {
            self.polls.fetch_add(1, Ordering::SeqCst);
            let mut statuses = self.statuses.lock().unwrap();
            if statuses.len() > 1 {
                Ok(statuses.pop_front().unwrap())
            } else {
                Ok(statuses.front().cloned().unwrap())
            }
        }

        async fn result(&self, _job_id: &JobId) -> HalResult<ExecutionResult> {
            Ok(ExecutionResult::new(Counts::from_pairs([("01", 4)]), 4))
        }

        async fn cancel(&self, _job_id: &JobId) -> HalResult<()> {
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_polls_until_completed() {
        let backend = ScriptedBackend::new([
            JobStatus::Queued,
            JobStatus::Running,
            JobStatus::Completed,
        ]);
        let start = tokio::time::Instant::now();

        let result = backend.wait(&JobId::new("job")).await.unwrap();

        assert_eq!(result.counts.get("01"), 4);
        assert_eq!(backend.polls(), 3);
        assert!(start.elapsed() >= WAIT_POLL_INTERVAL * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_maps_failed_job() {
        let backend = ScriptedBackend::new([
            JobStatus::Running,
            JobStatus::Failed("calibration drift".into()),
        ]);

        let err = backend.wait(&JobId::new("job")).await.unwrap_err();
        assert!(matches!(err, HalError::JobFailed(msg) if msg == "calibration drift"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_maps_cancelled_job() {
        let backend = ScriptedBackend::new([JobStatus::Queued, JobStatus::Cancelled]);

        let err = backend.wait(&JobId::new("job")).await.unwrap_err();
        assert!(matches!(err, HalError::JobCancelled));
        assert_eq!(backend.polls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_times_out() {
        let backend = ScriptedBackend::new([JobStatus::Running]);
        let start = tokio::time::Instant::now();

        let err = backend.wait(&JobId::new("slow")).await.unwrap_err();

        assert!(matches!(err, HalError::Timeout(id) if id == "slow"));
        assert_eq!(backend.polls(), WAIT_MAX_POLLS);
        assert!(start.elapsed() >= Duration::from_secs(300));
    }

    #[test]
    fn test_backend_config() {
        let config = BackendConfig::new("test")
            .with_extra("max_qubits", serde_json::json!(8))
            .with_extra("seed", serde_json::Value::Null);

        assert_eq!(config.name, "test");
        assert_eq!(config.get_u64("max_qubits").unwrap(), Some(8));
        assert_eq!(config.get_u64("seed").unwrap(), None);
        assert_eq!(config.get_u64("missing").unwrap(), None);
    }

    #[test]
    fn test_backend_config_rejects_bad_value() {
        let config = BackendConfig::new("test").with_extra("seed", serde_json::json!("abc"));
        assert!(matches!(config.get_u64("seed"), Err(HalError::Configuration(_))));
    }

    #[test]
    fn test_backend_availability() {
        let avail = BackendAvailability::always_available();
        assert!(avail.is_available);
        assert_eq!(avail.queue_depth, Some(0));

        let down = BackendAvailability::unavailable("maintenance");
        assert!(!down.is_available);
        assert_eq!(down.status_message, Some("maintenance".to_string()));
    }

    #[test]
    fn test_validation_result() {
        assert!(ValidationResult::from_reasons(vec![]).is_valid());
        let invalid = ValidationResult::from_reasons(vec!["too big".into()]);
        assert!(!invalid.is_valid());
        assert_eq!(
            invalid,
            ValidationResult::Invalid {
                reasons: vec!["too big".into()]
            }
        );
    }
}
