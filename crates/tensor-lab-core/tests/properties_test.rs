use approx::assert_relative_eq;
use ndarray::{arr1, Axis};
use tensor_lab_core::ops;
use tensor_lab_core::LabRng;

#[test]
fn hadamard_and_matmul_follow_their_definitions() {
    let mut rng = LabRng::seeded(100);
    let a = rng.uniform((4, 4));
    let b = rng.uniform((4, 4));
    let e = ops::hadamard(&a, &b).unwrap();
    let m = ops::matmul(&a, &b).unwrap();

    for i in 0..4 {
        for j in 0..4 {
            assert_eq!(e[[i, j]], a[[i, j]] * b[[i, j]]);
            let expected: f64 = (0..4).map(|k| a[[i, k]] * b[[k, j]]).sum();
            assert_relative_eq!(m[[i, j]], expected, max_relative = 1e-12);
        }
    }
}

#[test]
fn matmul_of_non_square_operands() {
    let mut rng = LabRng::seeded(101);
    let a = rng.uniform((2, 5));
    let b = rng.uniform((5, 3));
    assert_eq!(ops::matmul(&a, &b).unwrap().shape(), &[2, 3]);
    assert!(ops::matmul(&b, &a).is_err());
}

#[test]
fn whole_tensor_dot_agrees_across_seeds() {
    for seed in 0..25 {
        let mut rng = LabRng::seeded(seed);
        let b = rng.uniform((3, 4, 5));
        let c = rng.uniform((3, 4, 5));
        let eq = ops::whole_tensor_dot(&b, &c).unwrap();
        assert!(eq.approx_equal(), "seed {seed}: {eq:?}");
    }
}

#[test]
fn batched_slices_are_independent_products() {
    let mut rng = LabRng::seeded(102);
    let b = rng.uniform((3, 2, 6));
    let c = rng.uniform((2, 4, 6));
    let r = ops::batched_matmul(&b, &c).unwrap();
    assert_eq!(r.shape(), &[3, 4, 6]);

    for i in 0..6 {
        let slice = ops::matmul(&b.index_axis(Axis(2), i), &c.index_axis(Axis(2), i)).unwrap();
        assert_eq!(r.index_axis(Axis(2), i), slice);
    }
}

#[test]
fn transpose_dot_scenario() {
    let x = arr1(&[1i64, 2, 3]);
    let y = arr1(&[4i64, 5, 6]);
    assert_eq!(ops::dot(&x, &y).unwrap(), 32);
    assert_eq!(ops::row_times_column(&x, &y).unwrap()[[0, 0]], 32);
}

#[test]
fn transpose_product_shape_and_entries() {
    let mut rng = LabRng::seeded(103);
    let a = rng.integers((5, 3), -4..5).unwrap();
    let b = rng.integers((5, 3), -4..5).unwrap();
    let g = ops::transpose_product(&a, &b).unwrap();
    assert_eq!(g.shape(), &[3, 3]);
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(g[[i, j]], a.column(i).dot(&b.column(j)));
        }
    }
}
