//! Simulator backend implementation.

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;
use tracing::{debug, instrument};
use uuid::Uuid;

use qmaze_hal::{
    Backend, BackendAvailability, BackendConfig, BackendFactory, Capabilities, Counts,
    ExecutionResult, HalError, HalResult, Job, JobId, JobStatus, ValidationResult,
};
use qmaze_ir::{Circuit, InstructionKind};

use crate::statevector::{Sampler, Statevector};

/// Default qubit limit of the simulator.
pub const DEFAULT_MAX_QUBITS: u32 = 20;

/// Largest qubit limit a simulator accepts (2^24 amplitudes, 256 MiB).
pub const MAX_SUPPORTED_QUBITS: u32 = 24;

struct SimJob {
    job: Job,
    result: Option<ExecutionResult>,
}

/// Local simulator backend.
///
/// Evolves a statevector once per job and samples the requested number of
/// shots from the final distribution. With a seed set, the same circuit
/// always produces the same counts.
pub struct SimulatorBackend {
    name: String,
    capabilities: Capabilities,
    jobs: Arc<Mutex<FxHashMap<String, SimJob>>>,
    seed: Option<u64>,
}

impl SimulatorBackend {
    /// Create a new simulator backend with default settings.
    pub fn new() -> Self {
        Self::build(DEFAULT_MAX_QUBITS)
    }

    /// Create a simulator with custom max qubits.
    ///
    /// Fails with [`HalError::Configuration`] above [`MAX_SUPPORTED_QUBITS`].
    pub fn with_max_qubits(max_qubits: u32) -> HalResult<Self> {
        if max_qubits > MAX_SUPPORTED_QUBITS {
            return Err(HalError::Configuration(format!(
                "max_qubits {max_qubits} exceeds the supported maximum of {MAX_SUPPORTED_QUBITS}"
            )));
        }
        Ok(Self::build(max_qubits))
    }

    fn build(max_qubits: u32) -> Self {
        Self {
            name: "simulator".into(),
            capabilities: Capabilities::simulator(max_qubits),
            jobs: Arc::new(Mutex::new(FxHashMap::default())),
            seed: None,
        }
    }

    /// Use a fixed seed for measurement sampling.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The sampling seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn jobs(&self) -> MutexGuard<'_, FxHashMap<String, SimJob>> {
        self.jobs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_circuit(&self, circuit: &Circuit) -> Vec<String> {
        let caps = &self.capabilities;
        let mut reasons = Vec::new();

        if circuit.num_qubits() > caps.num_qubits as usize {
            reasons.push(format!(
                "Circuit has {} qubits but simulator only supports {}",
                circuit.num_qubits(),
                caps.num_qubits
            ));
        }

        let mut measured = FxHashSet::default();
        for inst in circuit.instructions() {
            match &inst.kind {
                InstructionKind::Gate(gate) => {
                    if !caps.gate_set.contains(gate.name()) {
                        reasons.push(format!("Unsupported gate '{}'", gate.name()));
                    }
                    if let Some(q) = inst.qubits.iter().find(|q| measured.contains(*q)) {
                        reasons.push(format!(
                            "Gate '{}' acts on {q} after it was measured",
                            gate.name()
                        ));
                    }
                }
                InstructionKind::Measure => measured.extend(inst.qubits.iter().copied()),
                InstructionKind::Barrier => {}
            }
        }

        if measured.is_empty() {
            reasons.push("Circuit has no measurements".into());
        }

        reasons
    }

    /// Run simulation synchronously.
    #[instrument(skip(self, circuit), fields(circuit = circuit.name()))]
    fn run_simulation(&self, circuit: &Circuit, shots: u32) -> ExecutionResult {
        let start = Instant::now();

        let num_qubits = circuit.num_qubits();
        debug!("Starting simulation: {} qubits, {} shots", num_qubits, shots);

        let mut sv = Statevector::new(num_qubits);
        for inst in circuit.instructions() {
            sv.apply(inst);
        }

        // qubit -> clbit wiring; a later measurement of the same clbit wins.
        let mut wiring: Vec<(usize, usize)> = Vec::new();
        for inst in circuit.instructions().iter().filter(|i| i.is_measure()) {
            for (q, c) in inst.qubits.iter().zip(&inst.clbits) {
                wiring.retain(|&(_, clbit)| clbit != c.0 as usize);
                wiring.push((q.0 as usize, c.0 as usize));
            }
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let sampler = Sampler::new(&sv.probabilities());
        let mut histogram = vec![0u64; 1 << num_qubits];
        for _ in 0..shots {
            histogram[sampler.sample(&mut rng)] += 1;
        }

        let num_clbits = circuit.num_clbits();
        let mut counts = Counts::new();
        for (outcome, &n) in histogram.iter().enumerate().filter(|(_, n)| **n > 0) {
            counts.insert(outcome_to_bitstring(outcome, &wiring, num_clbits), n);
        }

        let elapsed = start.elapsed();
        debug!(
            "Simulation completed in {:?}: {} distinct outcomes",
            elapsed,
            counts.len()
        );

        ExecutionResult::new(counts, shots)
            .with_execution_time(elapsed.as_millis() as u64)
            .with_metadata(serde_json::json!({
                "backend": self.name,
                "num_qubits": num_qubits,
                "seed": self.seed,
            }))
    }
}

/// Render a sampled basis state as a classical bitstring.
///
/// Classical bit 0 is the rightmost character; bits no measurement wrote
/// read `0`.
fn outcome_to_bitstring(outcome: usize, wiring: &[(usize, usize)], num_clbits: usize) -> String {
    let mut bits = vec!['0'; num_clbits];
    for &(qubit, clbit) in wiring {
        if (outcome >> qubit) & 1 == 1 {
            bits[num_clbits - 1 - clbit] = '1';
        }
    }
    bits.into_iter().collect()
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    async fn availability(&self) -> HalResult<BackendAvailability> {
        Ok(BackendAvailability::always_available())
    }

    async fn validate(&self, circuit: &Circuit) -> HalResult<ValidationResult> {
        Ok(ValidationResult::from_reasons(self.check_circuit(circuit)))
    }

    #[instrument(skip(self, circuit), fields(circuit = circuit.name()))]
    async fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<JobId> {
        let max_shots = self.capabilities.max_shots;
        if shots == 0 || shots > max_shots {
            return Err(HalError::InvalidShots(format!(
                "{shots} (must be between 1 and {max_shots})"
            )));
        }

        if circuit.num_qubits() > self.capabilities.num_qubits as usize {
            return Err(HalError::CircuitTooLarge(format!(
                "Circuit has {} qubits but simulator only supports {}",
                circuit.num_qubits(),
                self.capabilities.num_qubits
            )));
        }

        let reasons = self.check_circuit(circuit);
        if !reasons.is_empty() {
            return Err(HalError::InvalidCircuit(reasons.join("; ")));
        }

        let job_id = JobId::new(Uuid::new_v4().to_string());
        let job = Job::new(job_id.clone(), shots).with_backend(self.name.clone());
        self.jobs()
            .insert(job_id.0.clone(), SimJob { job, result: None });

        debug!("Submitted job: {}", job_id);

        if let Some(sim_job) = self.jobs().get_mut(&job_id.0) {
            sim_job.job.transition(JobStatus::Running);
        }

        let result = self.run_simulation(circuit, shots);

        if let Some(sim_job) = self.jobs().get_mut(&job_id.0) {
            sim_job.result = Some(result);
            sim_job.job.transition(JobStatus::Completed);
        }

        Ok(job_id)
    }

    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus> {
        self.jobs()
            .get(&job_id.0)
            .map(|j| j.job.status.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))
    }

    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        let jobs = self.jobs();
        let sim_job = jobs
            .get(&job_id.0)
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))?;

        match (&sim_job.job.status, &sim_job.result) {
            (status, Some(result)) if status.is_success() => Ok(result.clone()),
            (JobStatus::Cancelled, _) => Err(HalError::JobCancelled),
            (status, _) => Err(HalError::JobFailed(format!(
                "Job {job_id} has no result (status: {status})"
            ))),
        }
    }

    async fn cancel(&self, job_id: &JobId) -> HalResult<()> {
        let mut jobs = self.jobs();
        let sim_job = jobs
            .get_mut(&job_id.0)
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))?;
        // Jobs finish inside submit(), so this only affects jobs still pending.
        sim_job.job.transition(JobStatus::Cancelled);
        Ok(())
    }
}

impl BackendFactory for SimulatorBackend {
    fn from_config(config: BackendConfig) -> HalResult<Self> {
        let max_qubits = match config.get_u64("max_qubits")? {
            Some(n) => u32::try_from(n).map_err(|_| {
                HalError::Configuration(format!("max_qubits {n} is out of range"))
            })?,
            None => DEFAULT_MAX_QUBITS,
        };
        let seed = config.get_u64("seed")?;

        let mut backend = Self::with_max_qubits(max_qubits)?;
        backend.capabilities.name.clone_from(&config.name);
        backend.name = config.name;
        backend.seed = seed;
        Ok(backend)
    }
}
