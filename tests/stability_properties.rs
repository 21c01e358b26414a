//! Property checks for the masked maps, log-sum-exp and normalization.
use hmm_numerics::{
    exp_mask_zero, log_mask_zero, logsumexp, normalize, MaskedOps, Normalize, StructuralMask,
};
use ndarray::{Array, Array1, Array2, Axis};
use proptest::prelude::*;

const TOL: f64 = 1e-10;

fn matrix(
    max_dim: usize,
    elem: impl Strategy<Value = f64> + Clone,
) -> impl Strategy<Value = Array2<f64>> {
    (1..=max_dim, 1..=max_dim).prop_flat_map(move |(r, c)| {
        prop::collection::vec(elem.clone(), r * c)
            .prop_map(move |v| Array2::from_shape_vec((r, c), v).unwrap())
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn exp_mask_zero_never_zero(v in prop::collection::vec(-1e4f64..1e2, 1..64)) {
        let out = exp_mask_zero(&Array1::from(v));
        prop_assert!(out.iter().all(|&x| x != 0.0));
    }

    #[test]
    fn log_mask_zero_never_nan(v in prop::collection::vec(prop::num::f64::ANY, 1..64)) {
        let out = log_mask_zero(&Array1::from(v));
        prop_assert!(out.iter().all(|x| !x.is_nan()));
    }

    #[test]
    fn log_inverts_masked_exp(v in prop::collection::vec(-500f64..500.0, 1..64)) {
        let a = Array1::from(v);
        let back = log_mask_zero(&exp_mask_zero(&a));
        for (x, y) in a.iter().zip(back.iter()) {
            prop_assert!((x - y).abs() <= TOL * x.abs().max(1.0));
        }
    }

    #[test]
    fn logsumexp_matches_naive_sum(a in matrix(6, -30f64..30.0), axis in 0usize..2) {
        let out = logsumexp(&a, axis).unwrap();
        let naive = a.mapv(f64::exp).sum_axis(Axis(axis)).mapv(f64::ln);
        for (x, y) in out.iter().zip(naive.iter()) {
            prop_assert!((x - y).abs() <= 1e-9 * y.abs().max(1.0));
        }
    }

    #[test]
    fn logsumexp_shift_invariance(
        v in prop::collection::vec(-50f64..50.0, 1..32),
        c in -1e3f64..1e3,
    ) {
        let a = Array1::from(v);
        let lhs = logsumexp(&a, 0).unwrap().into_scalar();
        let rhs = logsumexp(&(&a - c), 0).unwrap().into_scalar() + c;
        prop_assert!((lhs - rhs).abs() <= 1e-9 * lhs.abs().max(1.0));
    }

    #[test]
    fn normalized_slices_sum_to_one(a in matrix(6, 0f64..100.0), axis in 0usize..2) {
        let mut a = a;
        normalize(&mut a, Some(axis), &StructuralMask::none()).unwrap();
        for lane in a.lanes(Axis(axis)) {
            prop_assert!((lane.sum() - 1.0).abs() < TOL);
        }
        prop_assert!(a.iter().all(|&x| x > 0.0 && x.is_finite()));
    }

    #[test]
    fn normalize_whole_array_sums_to_one(a in matrix(6, 0f64..1e6)) {
        let mut a = a;
        a.normalize_inplace(None).unwrap();
        prop_assert!((a.sum() - 1.0).abs() < TOL);
    }

    #[test]
    fn masked_transitions_stay_positive(
        n in 1usize..6,
        seed in prop::collection::vec(0f64..10.0, 36),
    ) {
        let mask = StructuralMask::left_to_right(n);
        let mut a = Array::from_iter(seed.into_iter().take(n * n))
            .into_shape_with_order((n, n))
            .unwrap();
        a.normalize_with(Some(1), &mask).unwrap();
        prop_assert!(a.iter().all(|&x| x > 0.0));
        for (i, row) in a.rows().into_iter().enumerate() {
            for (j, &x) in row.iter().enumerate() {
                if mask.contains(i, j) {
                    prop_assert_eq!(x, f64::EPSILON);
                }
            }
            prop_assert!((row.sum() - 1.0).abs() < 1e-9);
        }
        prop_assert!(a.log_mask_zero().iter().all(|x| x.is_finite()));
    }
}
