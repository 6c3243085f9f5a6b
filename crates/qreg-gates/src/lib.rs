//! `qreg-gates` — gate catalog for the qreg register simulator.
//!
//! The simulator core consumes gates as opaque local matrices. This crate
//! supplies them:
//!
//! - [`StandardGate`]: the fixed gate set (X, H, Y, Z, S, T, CX)
//! - [`GateDefinition`]: a 2×2 single-qubit matrix or a controlled 2×2 base
//! - [`GateCatalog`]: name → definition, with the canonical matrices built in
//!   and JSON/YAML loading for user-supplied catalogs
//! - [`matrix`]: identity, control projectors and unitarity checks
//!
//! # Quick start
//!
//! ```rust
//! use qreg_gates::{GateCatalog, GateDefinition, StandardGate};
//!
//! let catalog = GateCatalog::standard();
//! let cx = catalog.standard_gate(StandardGate::CX).unwrap();
//! assert_eq!(cx.num_qubits(), 2);
//! assert_eq!(cx.local_matrix().dim(), (4, 4));
//! ```

pub mod catalog;
pub mod error;
pub mod matrix;

pub use catalog::{GateCatalog, GateDefinition, StandardGate};
pub use error::{GateError, GateResult};
pub use matrix::Matrix;
