use approx::relative_eq;
use ferrite_infer::math::vector_math::{add, dot_grouped, dot_scalar, relu, softmax};
use ferrite_infer::Matrix;
use proptest::prelude::*;

fn finite() -> impl Strategy<Value = f64> {
    -100.0..100.0_f64
}

/// An input vector plus a weight matrix with matching column count.
fn dot_operands() -> impl Strategy<Value = (Vec<f64>, Matrix)> {
    (1usize..40, 1usize..8).prop_flat_map(|(cols, rows)| {
        (
            prop::collection::vec(finite(), cols),
            prop::collection::vec(prop::collection::vec(finite(), cols), rows),
        )
            .prop_map(|(input, data)| (input, Matrix::from_data(data).unwrap()))
    })
}

proptest! {
    #[test]
    fn scalar_and_grouped_dot_agree((input, weights) in dot_operands()) {
        let s = dot_scalar(&input, &weights).unwrap();
        let g = dot_grouped(&input, &weights).unwrap();
        prop_assert_eq!(s.len(), weights.rows());
        for (row, (a, b)) in s.iter().zip(&g).enumerate() {
            // absolute floor scaled by the row's magnitude covers cancellation to ~0
            let scale: f64 = input.iter().zip(weights.row(row)).map(|(x, w)| (x * w).abs()).sum();
            prop_assert!(
                relative_eq!(*a, *b, epsilon = 1e-12 * scale.max(1.0), max_relative = 1e-5),
                "row {}: scalar {} vs grouped {}", row, a, b
            );
        }
    }

    #[test]
    fn dot_rejects_any_width_mismatch((input, weights) in dot_operands(), extra in 1usize..4) {
        let mut longer = input.clone();
        longer.extend(std::iter::repeat(1.0).take(extra));
        prop_assert!(dot_scalar(&longer, &weights).unwrap_err().is_shape());
        prop_assert!(dot_grouped(&longer, &weights).unwrap_err().is_shape());
    }

    #[test]
    fn add_is_commutative_and_elementwise(
        (a, b) in (1usize..64).prop_flat_map(|n| {
            (prop::collection::vec(finite(), n), prop::collection::vec(finite(), n))
        })
    ) {
        let ab = add(&a, &b).unwrap();
        let ba = add(&b, &a).unwrap();
        prop_assert_eq!(&ab, &ba);
        for i in 0..a.len() {
            prop_assert_eq!(ab[i], a[i] + b[i]);
        }
    }

    #[test]
    fn add_mismatch_always_errors(
        a in prop::collection::vec(finite(), 0..16),
        b in prop::collection::vec(finite(), 0..16),
    ) {
        prop_assume!(a.len() != b.len());
        prop_assert!(add(&a, &b).unwrap_err().is_shape());
    }

    #[test]
    fn relu_is_max_zero_and_idempotent(x in prop::collection::vec(finite(), 0..64)) {
        let r = relu(&x);
        for (v, out) in x.iter().zip(&r) {
            prop_assert_eq!(*out, v.max(0.0));
        }
        prop_assert_eq!(relu(&r), r);
    }

    #[test]
    fn softmax_is_a_distribution(x in prop::collection::vec(finite(), 1..64)) {
        let p = softmax(&x).unwrap();
        prop_assert!(p.iter().all(|&v| v >= 0.0));
        prop_assert!((p.iter().sum::<f64>() - 1.0).abs() <= 1e-6);
    }

    #[test]
    fn softmax_is_shift_invariant(
        x in prop::collection::vec(finite(), 1..32),
        c in -500.0..500.0_f64,
    ) {
        let p = softmax(&x).unwrap();
        let shifted: Vec<f64> = x.iter().map(|v| v + c).collect();
        let q = softmax(&shifted).unwrap();
        for (a, b) in p.iter().zip(&q) {
            prop_assert!((a - b).abs() <= 1e-9, "{} vs {}", a, b);
        }
    }
}
