//! `qreg-sim` — a dense statevector simulator for small ideal registers.
//!
//! A [`Register`] holds `2^n` complex amplitudes, starting in `|0…0⟩`.
//! Gates come from a [`GateCatalog`](qreg_gates::GateCatalog) and are
//! applied by expanding the local matrix into a full-register operator with
//! Kronecker products, then multiplying it into the state. The [`Sampler`]
//! draws Born-rule measurement tallies without collapsing the state.
//!
//! # Conventions
//!
//! - Qubit 0 is the leftmost character of a basis label and the
//!   most-significant bit of the state index (`"01"` is index 1).
//! - Operators act on column vectors: `state ← O · state`.
//! - Randomness is always passed in; seed it for reproducible tallies.
//!
//! # Performance
//!
//! | Qubits | Operator size | Per gate |
//! |--------|---------------|----------|
//! | 4 | 4 KB | Instant |
//! | 8 | 1 MB | Fast |
//! | 10 | 16 MB | Moderate |
//! | 12 | 256 MB | Slow |
//! | 13–14 | 1–4 GB | Refused by default (`max_qubits`) |
//! | 15+ | 16 GB+ | Always refused ([`MAX_SUPPORTED_QUBITS`]) |
//!
//! # Quick start
//!
//! ```rust
//! use qreg_sim::Register;
//!
//! let mut reg = Register::new(2).unwrap();
//! reg.h(0).unwrap();
//! reg.cx(0, 1).unwrap();
//!
//! let counts = reg.sample_seeded(1000, 7).unwrap();
//! assert_eq!(counts.get("00") + counts.get("11"), 1000);
//! assert!(!counts.contains("01"));
//! ```

pub mod basis;
pub mod config;
pub mod counts;
pub mod error;
pub mod operator;
pub mod register;
pub mod sampler;

pub use config::{MAX_SUPPORTED_QUBITS, SimConfig};
pub use counts::Counts;
pub use error::{QubitIndexReason, SimError, SimResult};
pub use operator::StateVector;
pub use register::Register;
pub use sampler::Sampler;

pub use qreg_gates::{GateCatalog, GateDefinition, StandardGate};
