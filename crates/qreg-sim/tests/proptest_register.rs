//! Property-based tests over random gate sequences.

use proptest::prelude::*;
use qreg_sim::Register;

/// Gate operations drawn by the strategies below.
#[derive(Debug, Clone)]
enum GateOp {
    X(usize),
    H(usize),
    Y(usize),
    Z(usize),
    S(usize),
    T(usize),
    CX(usize, usize),
}

impl GateOp {
    fn apply(&self, reg: &mut Register) {
        let result = match *self {
            GateOp::X(q) => reg.x(q),
            GateOp::H(q) => reg.h(q),
            GateOp::Y(q) => reg.y(q),
            GateOp::Z(q) => reg.z(q),
            GateOp::S(q) => reg.s(q),
            GateOp::T(q) => reg.t(q),
            GateOp::CX(c, t) => reg.cx(c, t),
        };
        result.unwrap();
    }
}

fn arb_gate_op(num_qubits: usize) -> impl Strategy<Value = GateOp> {
    let single = prop_oneof![
        (0..num_qubits).prop_map(GateOp::X),
        (0..num_qubits).prop_map(GateOp::H),
        (0..num_qubits).prop_map(GateOp::Y),
        (0..num_qubits).prop_map(GateOp::Z),
        (0..num_qubits).prop_map(GateOp::S),
        (0..num_qubits).prop_map(GateOp::T),
    ];
    if num_qubits < 2 {
        single.boxed()
    } else {
        prop_oneof![
            3 => single,
            1 => (0..num_qubits, 1..num_qubits)
                .prop_map(move |(c, offset)| GateOp::CX(c, (c + offset) % num_qubits)),
        ]
        .boxed()
    }
}

fn arb_program() -> impl Strategy<Value = (usize, Vec<GateOp>)> {
    (1_usize..=4).prop_flat_map(|n| (Just(n), prop::collection::vec(arb_gate_op(n), 0..=12)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn normalization_is_preserved((n, ops) in arb_program()) {
        let mut reg = Register::new(n).unwrap();
        for op in &ops {
            op.apply(&mut reg);
            prop_assert!((reg.total_probability() - 1.0).abs() < 1e-10);
        }
    }

    #[test]
    fn x_and_h_are_self_inverse((n, ops) in arb_program(), q in 0_usize..4, use_h in any::<bool>()) {
        let q = q % n;
        let mut reg = Register::new(n).unwrap();
        for op in &ops {
            op.apply(&mut reg);
        }
        let before = reg.state().clone();
        if use_h {
            reg.h(q).unwrap();
            reg.h(q).unwrap();
        } else {
            reg.x(q).unwrap();
            reg.x(q).unwrap();
        }
        for (a, b) in reg.state().iter().zip(before.iter()) {
            prop_assert!((a - b).norm() < 1e-10);
        }
    }

    #[test]
    fn sampled_labels_are_the_non_zero_amplitudes(
        (n, ops) in arb_program(),
        shots in 0_usize..200,
        seed in any::<u64>(),
    ) {
        let mut reg = Register::new(n).unwrap();
        for op in &ops {
            op.apply(&mut reg);
        }
        let counts = reg.sample_seeded(shots, seed).unwrap();
        let expected: Vec<&str> = reg
            .state()
            .iter()
            .zip(reg.basis_labels())
            .filter(|(amp, _)| amp.re != 0.0 || amp.im != 0.0)
            .map(|(_, label)| label.as_str())
            .collect();
        let got: Vec<&str> = counts.labels().collect();
        prop_assert_eq!(got, expected);
        prop_assert_eq!(counts.total(), shots);
    }
}
