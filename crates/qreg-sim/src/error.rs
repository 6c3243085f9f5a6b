//! Error types for the register simulator.

use std::fmt;

use qreg_gates::GateError;
use rand::distributions::WeightedError;
use thiserror::Error;

/// Errors produced by the register, operator engine and sampler.
///
/// Every variant is a precondition failure detected before the state vector
/// is touched.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// A register needs at least one qubit.
    #[error("Register must have at least 1 qubit, got {0}")]
    InvalidQubitCount(usize),

    /// The dense operator for this many qubits exceeds the configured limit.
    #[error("Register of {requested} qubits exceeds the limit of {max_qubits}")]
    RegisterTooLarge {
        /// Requested qubit count.
        requested: usize,
        /// Configured maximum.
        max_qubits: usize,
    },

    /// A qubit index is outside `[0, num_qubits)`, or a controlled gate
    /// names the same qubit as control and target.
    #[error("Invalid qubit {qubit} for a {num_qubits}-qubit register: {reason}")]
    InvalidQubitIndex {
        /// The offending qubit index.
        qubit: usize,
        /// Number of qubits in the register.
        num_qubits: usize,
        /// Which check rejected the index.
        reason: QubitIndexReason,
    },

    /// A local gate matrix has the wrong dimensions.
    #[error("Gate matrix must be {expected}x{expected}, got {rows}x{cols}")]
    InvalidGateShape {
        /// Expected side length.
        expected: usize,
        /// Actual row count.
        rows: usize,
        /// Actual column count.
        cols: usize,
    },

    /// Shot count exceeds the configured maximum.
    #[error("Shot count {shots} exceeds the limit of {max_shots}")]
    InvalidShotCount {
        /// Requested shots.
        shots: usize,
        /// Configured maximum.
        max_shots: usize,
    },

    /// A basis label is not a bitstring of the register's width.
    #[error("Invalid basis label '{label}' for a {num_qubits}-qubit register")]
    InvalidLabel {
        /// The offending label.
        label: String,
        /// Number of qubits in the register.
        num_qubits: usize,
    },

    /// A named gate was given the wrong number of qubits.
    #[error("Gate '{gate_name}' requires {expected} qubits, got {got}")]
    WrongArity {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of qubits.
        expected: usize,
        /// Actual number of qubits provided.
        got: usize,
    },

    /// Amplitudes and basis labels do not line up one to one.
    #[error("Got {amplitudes} amplitudes but {labels} basis labels")]
    LabelMismatch {
        /// Number of amplitudes.
        amplitudes: usize,
        /// Number of labels.
        labels: usize,
    },

    /// Gate catalog error.
    #[error("Gate catalog error: {0}")]
    Gate(#[from] GateError),

    /// The sampling weights could not form a distribution.
    #[error("Cannot sample from state: {0}")]
    Sampling(#[from] WeightedError),

    /// Configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Why a qubit index was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QubitIndexReason {
    /// The index is not below the register width.
    OutOfRange,
    /// The index was given as both control and target.
    ControlIsTarget,
}

impl fmt::Display for QubitIndexReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange => write!(f, "out of range"),
            Self::ControlIsTarget => write!(f, "used as both control and target"),
        }
    }
}

/// Result type for register simulation.
pub type SimResult<T> = Result<T, SimError>;
