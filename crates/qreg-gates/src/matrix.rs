//! Local gate matrices and checks.
//!
//! Every gate in the catalog is a small dense complex matrix. Single-qubit
//! gates are 2×2; controlled gates carry a 2×2 base gate and are expanded
//! through the control projectors `|0⟩⟨0|` and `|1⟩⟨1|`.

use ndarray::{Array2, array};
use num_complex::Complex64;

use crate::error::{GateError, GateResult};

/// A dense complex matrix.
pub type Matrix = Array2<Complex64>;

/// Tolerance used when validating catalog entries for unitarity.
pub const UNITARY_TOLERANCE: f64 = 1e-9;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// The 2×2 identity.
pub fn identity2() -> Matrix {
    array![[ONE, ZERO], [ZERO, ONE]]
}

/// Projector onto the control-is-0 subspace, `diag(1, 0)`.
pub fn projector0() -> Matrix {
    array![[ONE, ZERO], [ZERO, ZERO]]
}

/// Projector onto the control-is-1 subspace, `diag(0, 1)`.
pub fn projector1() -> Matrix {
    array![[ZERO, ZERO], [ZERO, ONE]]
}

/// Build a matrix from nested rows.
///
/// Returns `InvalidShape` when the rows are ragged.
pub fn from_rows(gate_name: &str, rows: &[Vec<Complex64>]) -> GateResult<Matrix> {
    let n_rows = rows.len();
    let n_cols = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|r| r.len() != n_cols) {
        let widest = rows.iter().map(Vec::len).max().unwrap_or(0);
        return Err(GateError::InvalidShape {
            gate_name: gate_name.to_string(),
            expected: n_rows,
            rows: n_rows,
            cols: widest,
        });
    }
    let flat: Vec<Complex64> = rows.iter().flatten().copied().collect();
    Array2::from_shape_vec((n_rows, n_cols), flat).map_err(|_| GateError::InvalidShape {
        gate_name: gate_name.to_string(),
        expected: n_rows,
        rows: n_rows,
        cols: n_cols,
    })
}

/// Convert a matrix back into nested rows (for serialization).
pub fn to_rows(m: &Matrix) -> Vec<Vec<Complex64>> {
    m.rows().into_iter().map(|r| r.to_vec()).collect()
}

/// Check that `m` is `side × side`.
pub fn check_shape(gate_name: &str, m: &Matrix, side: usize) -> GateResult<()> {
    let (rows, cols) = m.dim();
    if rows != side || cols != side {
        return Err(GateError::InvalidShape {
            gate_name: gate_name.to_string(),
            expected: side,
            rows,
            cols,
        });
    }
    Ok(())
}

/// Check that `m` is a 2×2 single-qubit matrix.
pub fn check_single_qubit_shape(gate_name: &str, m: &Matrix) -> GateResult<()> {
    check_shape(gate_name, m, 2)
}

/// Largest absolute entry of `U†U - I`.
///
/// Returns `f64::INFINITY` for non-square input.
pub fn unitarity_deviation(m: &Matrix) -> f64 {
    let (rows, cols) = m.dim();
    if rows != cols {
        return f64::INFINITY;
    }
    let adjoint = m.t().mapv(|c| c.conj());
    let product = adjoint.dot(m);
    product
        .indexed_iter()
        .map(|((i, j), c)| {
            let expected = if i == j { ONE } else { ZERO };
            (c - expected).norm()
        })
        .fold(0.0, f64::max)
}

/// True if `m` is unitary within `tol`.
pub fn is_unitary(m: &Matrix, tol: f64) -> bool {
    unitarity_deviation(m) <= tol
}

/// Validate a single-qubit gate: 2×2 and unitary.
pub fn validate_single(gate_name: &str, m: &Matrix) -> GateResult<()> {
    check_single_qubit_shape(gate_name, m)?;
    let deviation = unitarity_deviation(m);
    if deviation > UNITARY_TOLERANCE {
        return Err(GateError::NotUnitary {
            gate_name: gate_name.to_string(),
            deviation,
        });
    }
    Ok(())
}

/// The 4×4 matrix of a controlled gate: `|0⟩⟨0| ⊗ I + |1⟩⟨1| ⊗ U`.
///
/// The control is the first (most-significant) factor.
pub fn controlled(base: &Matrix) -> Matrix {
    ndarray::linalg::kron(&projector0(), &identity2()) + ndarray::linalg::kron(&projector1(), base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projectors_sum_to_identity() {
        assert_eq!(projector0() + projector1(), identity2());
    }

    #[test]
    fn test_identity_is_unitary() {
        assert!(is_unitary(&identity2(), 1e-12));
    }

    #[test]
    fn test_projector_is_not_unitary() {
        assert!(!is_unitary(&projector0(), 1e-6));
    }

    #[test]
    fn test_from_rows_ragged() {
        let rows = vec![vec![ONE, ZERO], vec![ONE]];
        assert!(matches!(
            from_rows("bad", &rows),
            Err(GateError::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_check_shape_rejects_3x3() {
        let m = Array2::<Complex64>::eye(3);
        assert!(check_single_qubit_shape("big", &m).is_err());
    }

    #[test]
    fn test_controlled_identity_block() {
        let x = array![[ZERO, ONE], [ONE, ZERO]];
        let cx = controlled(&x);
        assert_eq!(cx.dim(), (4, 4));
        // |10⟩ ↔ |11⟩, |00⟩ and |01⟩ fixed
        assert_eq!(cx[[0, 0]], ONE);
        assert_eq!(cx[[1, 1]], ONE);
        assert_eq!(cx[[2, 3]], ONE);
        assert_eq!(cx[[3, 2]], ONE);
        assert_eq!(cx[[2, 2]], ZERO);
    }
}
