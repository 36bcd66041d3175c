//! Backend registry.
//!
//! The [`BackendRegistry`] maps backend names to factories so front ends can
//! construct a backend from a name and a [`BackendConfig`].

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::backend::{Backend, BackendConfig, BackendFactory};
use crate::error::{HalError, HalResult};

type Factory = Box<dyn Fn(BackendConfig) -> HalResult<Box<dyn Backend>> + Send + Sync>;

/// Central registry for backends.
pub struct BackendRegistry {
    factories: FxHashMap<String, Factory>,
}

impl BackendRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            factories: FxHashMap::default(),
        }
    }

    /// Register a backend type under `name`.
    pub fn register<B>(&mut self, name: impl Into<String>)
    where
        B: BackendFactory + 'static,
    {
        let name = name.into();
        debug!("Registering backend: {}", name);
        self.factories.insert(
            name,
            Box::new(|config| {
                let backend = B::from_config(config)?;
                Ok(Box::new(backend))
            }),
        );
    }

    /// Create a backend by name.
    pub fn create(&self, name: &str, config: BackendConfig) -> HalResult<Box<dyn Backend>> {
        let factory = self.factories.get(name).ok_or_else(|| {
            HalError::BackendUnavailable(format!(
                "No backend registered with name '{name}'. Available: {}",
                self.available_backends().join(", ")
            ))
        })?;
        factory(config)
    }

    /// List all registered backend names, sorted.
    pub fn available_backends(&self) -> Vec<String> {
        let mut names: Vec<_> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use qmaze_ir::Circuit;

    use crate::backend::{BackendAvailability, ValidationResult};
    use crate::capability::Capabilities;
    use crate::job::{JobId, JobStatus};
    use crate::result::ExecutionResult;

    struct StubBackend {
        name: String,
        capabilities: Capabilities,
    }

    #[async_trait]
    impl Backend for StubBackend {
        fn name(&self) -> &str {
            &self.name
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
            Err(HalError::BackendUnavailable("stub".into()))
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

    impl BackendFactory for StubBackend {
        fn from_config(config: BackendConfig) -> HalResult<Self> {
            let num_qubits = config.get_u64("num_qubits")?.unwrap_or(2) as u32;
            Ok(Self {
                name: config.name,
                capabilities: Capabilities::simulator(num_qubits),
            })
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = BackendRegistry::new();
        assert!(registry.available_backends().is_empty());
    }

    #[test]
    fn test_register_and_create() {
        let mut registry = BackendRegistry::new();
        registry.register::<StubBackend>("stub");

        let config = BackendConfig::new("stub-a").with_extra("num_qubits", serde_json::json!(5));
        let backend = registry.create("stub", config).ok().unwrap();
        assert_eq!(backend.name(), "stub-a");
        assert_eq!(backend.capabilities().num_qubits, 5);
    }

    #[test]
    fn test_factory_error_propagates() {
        let mut registry = BackendRegistry::new();
        registry.register::<StubBackend>("stub");

        let config = BackendConfig::new("stub").with_extra("num_qubits", serde_json::json!("x"));
        let err = registry.create("stub", config).err().unwrap();
        assert!(matches!(err, HalError::Configuration(_)));
    }

    #[test]
    fn test_create_unknown_backend() {
        let mut registry = BackendRegistry::new();
        registry.register::<StubBackend>("stub");
        let err = registry
            .create("nonexistent", BackendConfig::new("nonexistent"))
            .err()
            .unwrap();
        let message = err.to_string();
        assert!(message.contains("nonexistent"));
        assert!(message.contains("Available: stub"));
    }

    #[test]
    fn test_available_backends_sorted() {
        let mut registry = BackendRegistry::new();
        registry.register::<StubBackend>("zebra");
        registry.register::<StubBackend>("alpha");

        assert_eq!(registry.available_backends(), vec!["alpha", "zebra"]);
    }
}
