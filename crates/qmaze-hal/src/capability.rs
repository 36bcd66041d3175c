//! Backend capability introspection.

use serde::{Deserialize, Serialize};

/// Default maximum number of shots accepted by a simulator.
pub const SIMULATOR_MAX_SHOTS: u32 = 100_000;

/// Hardware capabilities of a backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capabilities {
    /// Name of the backend.
    pub name: String,
    /// Number of qubits available.
    pub num_qubits: u32,
    /// Supported gate set (OpenQASM 3 naming convention).
    pub gate_set: GateSet,
    /// Maximum number of shots per job.
    pub max_shots: u32,
    /// Whether this is a simulator.
    pub is_simulator: bool,
    /// Additional capability flags, e.g. `"statevector"`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

impl Capabilities {
    /// Create capabilities for a simulator.
    pub fn simulator(num_qubits: u32) -> Self {
        Self {
            name: "simulator".into(),
            num_qubits,
            gate_set: GateSet::universal(),
            max_shots: SIMULATOR_MAX_SHOTS,
            is_simulator: true,
            features: vec!["statevector".into(), "seeded_sampling".into()],
        }
    }
}

/// Gates a backend accepts, grouped by arity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateSet {
    /// Single-qubit gates supported.
    pub single_qubit: Vec<String>,
    /// Two-qubit gates supported.
    pub two_qubit: Vec<String>,
}

impl GateSet {
    /// Every gate in the `qmaze-ir` gate set.
    pub fn universal() -> Self {
        Self {
            single_qubit: ["id", "h", "x", "y", "z"].map(String::from).to_vec(),
            two_qubit: ["cx", "cz", "swap"].map(String::from).to_vec(),
        }
    }

    /// Check if a gate is supported.
    pub fn contains(&self, gate: &str) -> bool {
        self.single_qubit.iter().any(|g| g == gate) || self.two_qubit.iter().any(|g| g == gate)
    }

    /// Iterate over all supported gate names.
    pub fn gates(&self) -> impl Iterator<Item = &str> {
        self.single_qubit
            .iter()
            .chain(self.two_qubit.iter())
            .map(String::as_str)
    }
}
