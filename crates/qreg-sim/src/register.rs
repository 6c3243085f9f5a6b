//! The quantum register.

use ndarray::Array1;
use num_complex::Complex64;
use qreg_gates::{GateCatalog, GateDefinition, Matrix, StandardGate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

use crate::basis::{basis_labels, label_to_index};
use crate::config::SimConfig;
use crate::counts::Counts;
use crate::error::{SimError, SimResult};
use crate::operator::{self, StateVector};
use crate::sampler::Sampler;

/// An `n`-qubit register holding a dense state vector.
///
/// The register starts in `|0…0⟩`. Every gate call builds the full
/// `2^n × 2^n` operator, applies it, and discards it. Failed calls leave
/// the state untouched.
///
/// # Example
///
/// ```rust
/// use qreg_sim::Register;
///
/// let mut reg = Register::new(2).unwrap();
/// reg.x(0).unwrap();
/// reg.cx(0, 1).unwrap();
/// assert!((reg.amplitude("11").unwrap().re - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Register {
    num_qubits: usize,
    state: StateVector,
    labels: Vec<String>,
    catalog: GateCatalog,
    config: SimConfig,
}

impl Register {
    /// Create a register with the default configuration and standard gates.
    pub fn new(num_qubits: usize) -> SimResult<Self> {
        Self::build(num_qubits, SimConfig::default(), GateCatalog::standard())
    }

    /// Create a register with a custom configuration.
    pub fn with_config(num_qubits: usize, config: SimConfig) -> SimResult<Self> {
        Self::build(num_qubits, config, GateCatalog::standard())
    }

    /// Create a register with a custom gate catalog.
    pub fn with_catalog(num_qubits: usize, catalog: GateCatalog) -> SimResult<Self> {
        Self::build(num_qubits, SimConfig::default(), catalog)
    }

    /// Create a register with both a custom configuration and catalog.
    pub fn build(num_qubits: usize, config: SimConfig, catalog: GateCatalog) -> SimResult<Self> {
        if num_qubits == 0 {
            return Err(SimError::InvalidQubitCount(num_qubits));
        }
        let max_qubits = config.effective_max_qubits();
        if num_qubits > max_qubits || operator::operator_bytes(num_qubits).is_none() {
            return Err(SimError::RegisterTooLarge {
                requested: num_qubits,
                max_qubits,
            });
        }

        debug!(num_qubits, "creating register");
        Ok(Self {
            num_qubits,
            state: ground_state(num_qubits),
            labels: basis_labels(num_qubits),
            catalog,
            config,
        })
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The current state vector.
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Basis labels, aligned with [`state`](Self::state) indices.
    pub fn basis_labels(&self) -> &[String] {
        &self.labels
    }

    /// Amplitude of the basis state named by `label`.
    pub fn amplitude(&self, label: &str) -> SimResult<Complex64> {
        let index = label_to_index(label, self.num_qubits)?;
        Ok(self.state[index])
    }

    /// Born-rule probabilities, aligned with the basis labels.
    pub fn probabilities(&self) -> Vec<f64> {
        self.state.iter().map(Complex64::norm_sqr).collect()
    }

    /// Total probability mass `Σ|a_i|²`.
    pub fn total_probability(&self) -> f64 {
        self.state.iter().map(Complex64::norm_sqr).sum()
    }

    /// True if the total probability is 1 within the configured tolerance.
    pub fn is_normalized(&self) -> bool {
        (self.total_probability() - 1.0).abs() <= self.config.tolerance
    }

    /// The gate catalog.
    pub fn catalog(&self) -> &GateCatalog {
        &self.catalog
    }

    /// The configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Return to `|0…0⟩`.
    pub fn reset(&mut self) {
        self.state = ground_state(self.num_qubits);
    }

    // =========================================================================
    // Operator engine
    // =========================================================================

    /// Apply a 2×2 gate to `target`.
    #[instrument(skip(self, gate), fields(n = self.num_qubits))]
    pub fn apply_gate(&mut self, gate: &Matrix, target: usize) -> SimResult<&StateVector> {
        let op = operator::expand_single(gate, target, self.num_qubits)?;
        operator::apply_operator(&mut self.state, &op);
        Ok(&self.state)
    }

    /// Apply `base` to `target` when `control` is `|1⟩`.
    #[instrument(skip(self, base), fields(n = self.num_qubits))]
    pub fn apply_controlled_gate(
        &mut self,
        base: &Matrix,
        control: usize,
        target: usize,
    ) -> SimResult<&StateVector> {
        let op = operator::expand_controlled(base, control, target, self.num_qubits)?;
        operator::apply_operator(&mut self.state, &op);
        Ok(&self.state)
    }

    /// Apply a catalog gate by name.
    ///
    /// Single-qubit gates take `[target]`; controlled gates take
    /// `[control, target]`.
    pub fn apply(&mut self, name: &str, qubits: &[usize]) -> SimResult<&StateVector> {
        let definition = self.catalog.get(name)?.clone();
        let expected = definition.num_qubits() as usize;
        if qubits.len() != expected {
            return Err(SimError::WrongArity {
                gate_name: name.to_string(),
                expected,
                got: qubits.len(),
            });
        }
        match definition {
            GateDefinition::Single { matrix } => self.apply_gate(&matrix, qubits[0]),
            GateDefinition::Controlled { base } => {
                self.apply_controlled_gate(&base, qubits[0], qubits[1])
            }
        }
    }

    fn apply_standard(&mut self, gate: StandardGate, qubits: &[usize]) -> SimResult<&StateVector> {
        self.apply(gate.name(), qubits)
    }

    /// Pauli-X on `qubit`.
    pub fn x(&mut self, qubit: usize) -> SimResult<&StateVector> {
        self.apply_standard(StandardGate::X, &[qubit])
    }

    /// Hadamard on `qubit`.
    pub fn h(&mut self, qubit: usize) -> SimResult<&StateVector> {
        self.apply_standard(StandardGate::H, &[qubit])
    }

    /// Pauli-Y on `qubit`.
    pub fn y(&mut self, qubit: usize) -> SimResult<&StateVector> {
        self.apply_standard(StandardGate::Y, &[qubit])
    }

    /// Pauli-Z on `qubit`.
    pub fn z(&mut self, qubit: usize) -> SimResult<&StateVector> {
        self.apply_standard(StandardGate::Z, &[qubit])
    }

    /// S gate on `qubit`.
    pub fn s(&mut self, qubit: usize) -> SimResult<&StateVector> {
        self.apply_standard(StandardGate::S, &[qubit])
    }

    /// T gate on `qubit`.
    pub fn t(&mut self, qubit: usize) -> SimResult<&StateVector> {
        self.apply_standard(StandardGate::T, &[qubit])
    }

    /// CNOT with the given control and target.
    pub fn cx(&mut self, control: usize, target: usize) -> SimResult<&StateVector> {
        self.apply_standard(StandardGate::CX, &[control, target])
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Sample `shots` measurements using `rng`. The state is not collapsed.
    pub fn sample<R: Rng + ?Sized>(&self, shots: usize, rng: &mut R) -> SimResult<Counts> {
        let owned;
        let amplitudes = match self.state.as_slice() {
            Some(slice) => slice,
            None => {
                owned = self.state.to_vec();
                owned.as_slice()
            }
        };
        Sampler::new(self.config.max_shots).sample(amplitudes, &self.labels, shots, rng)
    }

    /// Sample `shots` measurements with a generator seeded from `seed`.
    pub fn sample_seeded(&self, shots: usize, seed: u64) -> SimResult<Counts> {
        self.sample(shots, &mut StdRng::seed_from_u64(seed))
    }

    /// Sample the configured default number of shots.
    pub fn get_counts<R: Rng + ?Sized>(&self, rng: &mut R) -> SimResult<Counts> {
        self.sample(self.config.default_shots, rng)
    }
}

fn ground_state(num_qubits: usize) -> StateVector {
    let mut state = Array1::zeros(1usize << num_qubits);
    state[0] = Complex64::new(1.0, 0.0);
    state
}
