//! Full-register operator construction.
//!
//! A local gate becomes a `2^n × 2^n` operator by an ordered Kronecker
//! product over qubit positions `0..n`: the gate sits at its target position
//! and every other position gets the 2×2 identity. Qubit 0 is the first
//! (most-significant) factor, matching [`basis_labels`](crate::basis::basis_labels).
//!
//! Controlled gates are the sum of two such products:
//!
//! ```text
//!   O = (… ⊗ |0⟩⟨0|_c ⊗ … ⊗ I_t ⊗ …) + (… ⊗ |1⟩⟨1|_c ⊗ … ⊗ U_t ⊗ …)
//! ```
//!
//! Operators act on column vectors: `state ← O · state`.
//!
//! Construction is dense, `O(4^n)` in time and memory per gate.

use ndarray::linalg::kron;
use ndarray::{Array1, Array2};
use num_complex::Complex64;
use qreg_gates::Matrix;
use qreg_gates::matrix::{identity2, projector0, projector1};
use tracing::trace;

use crate::error::{QubitIndexReason, SimError, SimResult};

/// A state vector of `2^n` amplitudes.
pub type StateVector = Array1<Complex64>;

/// Bytes needed for one dense `2^n × 2^n` operator, or `None` if that size
/// cannot be addressed on this host.
pub fn operator_bytes(num_qubits: usize) -> Option<usize> {
    let dim = 1usize.checked_shl(u32::try_from(num_qubits).ok()?)?;
    let bytes = dim
        .checked_mul(dim)?
        .checked_mul(std::mem::size_of::<Complex64>())?;
    (bytes <= isize::MAX as usize).then_some(bytes)
}

/// Ensure `qubit < num_qubits`.
pub fn check_qubit(qubit: usize, num_qubits: usize) -> SimResult<()> {
    if qubit >= num_qubits {
        return Err(SimError::InvalidQubitIndex {
            qubit,
            num_qubits,
            reason: QubitIndexReason::OutOfRange,
        });
    }
    Ok(())
}

/// Ensure `gate` is a 2×2 local matrix.
pub fn check_gate_shape(gate: &Matrix) -> SimResult<()> {
    let (rows, cols) = gate.dim();
    if rows != 2 || cols != 2 {
        return Err(SimError::InvalidGateShape {
            expected: 2,
            rows,
            cols,
        });
    }
    Ok(())
}

/// Ordered tensor product of one factor per qubit.
fn tensor_chain(num_qubits: usize, factor: impl Fn(usize) -> Matrix) -> Matrix {
    (0..num_qubits)
        .map(factor)
        .reduce(|acc, m| kron(&acc, &m))
        .unwrap_or_else(|| Array2::eye(1))
}

/// Expand a single-qubit gate on `target` to the full register.
pub fn expand_single(gate: &Matrix, target: usize, num_qubits: usize) -> SimResult<Matrix> {
    check_gate_shape(gate)?;
    check_qubit(target, num_qubits)?;

    let operator = tensor_chain(num_qubits, |q| {
        if q == target {
            gate.clone()
        } else {
            identity2()
        }
    });
    trace!(target, dim = operator.nrows(), "expanded single-qubit operator");
    Ok(operator)
}

/// Expand a controlled gate to the full register.
///
/// `base` is applied to `target` on the subspace where `control` is `|1⟩`.
pub fn expand_controlled(
    base: &Matrix,
    control: usize,
    target: usize,
    num_qubits: usize,
) -> SimResult<Matrix> {
    check_gate_shape(base)?;
    check_qubit(control, num_qubits)?;
    check_qubit(target, num_qubits)?;
    if control == target {
        return Err(SimError::InvalidQubitIndex {
            qubit: control,
            num_qubits,
            reason: QubitIndexReason::ControlIsTarget,
        });
    }

    let p0 = projector0();
    let p1 = projector1();
    let untouched = tensor_chain(num_qubits, |q| {
        if q == control {
            p0.clone()
        } else {
            identity2()
        }
    });
    let flipped = tensor_chain(num_qubits, |q| {
        if q == control {
            p1.clone()
        } else if q == target {
            base.clone()
        } else {
            identity2()
        }
    });
    let operator = untouched + flipped;
    trace!(
        control,
        target,
        dim = operator.nrows(),
        "expanded controlled operator"
    );
    Ok(operator)
}

/// Apply a full-register operator to a state vector: `state ← O · state`.
///
/// The caller guarantees the operator matches the state's dimension.
pub fn apply_operator(state: &mut StateVector, operator: &Matrix) {
    debug_assert_eq!(operator.ncols(), state.len());
    *state = operator.dot(&*state);
}
