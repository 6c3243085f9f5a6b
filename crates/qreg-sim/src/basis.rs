//! Computational-basis labels.
//!
//! Labels enumerate `{0,1}^n` lexicographically. Qubit 0 is the leftmost
//! character and the most-significant bit of the state-vector index, which
//! is the same order the Kronecker product assigns to its first factor.

use crate::error::{SimError, SimResult};

/// All `2^n` basis labels in state-vector index order.
pub fn basis_labels(num_qubits: usize) -> Vec<String> {
    (0..1usize << num_qubits)
        .map(|index| index_to_label(index, num_qubits))
        .collect()
}

/// Convert a state-vector index to its basis label.
pub fn index_to_label(index: usize, num_qubits: usize) -> String {
    format!("{index:0num_qubits$b}")
}

/// Convert a basis label back to its state-vector index.
pub fn label_to_index(label: &str, num_qubits: usize) -> SimResult<usize> {
    let invalid = || SimError::InvalidLabel {
        label: label.to_string(),
        num_qubits,
    };
    if label.len() != num_qubits || !label.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(invalid());
    }
    usize::from_str_radix(label, 2).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_qubit_order() {
        assert_eq!(basis_labels(2), vec!["00", "01", "10", "11"]);
    }

    #[test]
    fn test_three_qubit_order() {
        let labels = basis_labels(3);
        assert_eq!(labels.len(), 8);
        assert_eq!(labels[1], "001");
        assert_eq!(labels[4], "100");
    }

    #[test]
    fn test_label_index_agree() {
        for (i, label) in basis_labels(4).iter().enumerate() {
            assert_eq!(label_to_index(label, 4).unwrap(), i);
        }
    }

    #[test]
    fn test_bad_labels() {
        assert!(label_to_index("012", 3).is_err());
        assert!(label_to_index("01", 3).is_err());
        assert!(label_to_index("", 1).is_err());
    }
}
