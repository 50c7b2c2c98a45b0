use crate::error::{TensorError, TensorResult};
use crate::shape::Shape;

use approx::relative_eq;
use ndarray::{
    s, Array, Array1, Array2, Array3, ArrayBase, Axis, Data, Dimension, Ix1, Ix2, Ix3, LinalgScalar,
    Zip,
};

/// Relative tolerance used when comparing accumulated floating-point sums.
pub const REL_TOLERANCE: f64 = 1e-9;
/// Absolute floor for the same comparison, so sums near zero still compare.
pub const ABS_TOLERANCE: f64 = 1e-12;

/// Shape descriptor of any `ndarray` array.
pub fn shape_of<S, D>(a: &ArrayBase<S, D>) -> Shape
where
    S: Data,
    D: Dimension,
{
    Shape::from_slice(a.shape())
}

// ─── Elementwise ────────────────────────────────────────────────────────────

/// Hadamard product: multiply corresponding entries of two equal-shaped arrays.
pub fn hadamard<A, S1, S2, D>(
    a: &ArrayBase<S1, D>,
    b: &ArrayBase<S2, D>,
) -> TensorResult<Array<A, D>>
where
    A: LinalgScalar,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    D: Dimension,
{
    shape_of(a).expect_same(&shape_of(b))?;
    Ok(Zip::from(a).and(b).map_collect(|&x, &y| x * y))
}

/// Copy an array into a 1-D sequence in row-major order.
pub fn flatten<A, S, D>(a: &ArrayBase<S, D>) -> Array1<A>
where
    A: Clone,
    S: Data<Elem = A>,
    D: Dimension,
{
    a.iter().cloned().collect()
}

// ─── Dot Product / Matrix Multiply ──────────────────────────────────────────

/// Dot product of two 1-D arrays of equal length.
pub fn dot<A, S1, S2>(x: &ArrayBase<S1, Ix1>, y: &ArrayBase<S2, Ix1>) -> TensorResult<A>
where
    A: LinalgScalar,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
{
    shape_of(x).expect_same(&shape_of(y))?;
    Ok(x.dot(y))
}

/// Row-by-column matrix product.
///
/// Accepts arrays of any rank so callers can see the error produced for
/// operands that are not matrices; only `(m, n) × (n, p)` succeeds.
pub fn matmul<A, S1, S2, D1, D2>(
    a: &ArrayBase<S1, D1>,
    b: &ArrayBase<S2, D2>,
) -> TensorResult<Array2<A>>
where
    A: LinalgScalar,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    D1: Dimension,
    D2: Dimension,
{
    shape_of(a).matmul(&shape_of(b))?;
    let a2 = a
        .view()
        .into_dimensionality::<Ix2>()
        .map_err(|e| TensorError::InvalidOperation(e.to_string()))?;
    let b2 = b
        .view()
        .into_dimensionality::<Ix2>()
        .map_err(|e| TensorError::InvalidOperation(e.to_string()))?;
    Ok(a2.dot(&b2))
}

/// `xᵀ · y` for two vectors: `x` as a `1×n` row, `y` as an `n×1` column.
///
/// The result is a `1×1` matrix holding the same value as [`dot`].
pub fn row_times_column<A, S1, S2>(
    x: &ArrayBase<S1, Ix1>,
    y: &ArrayBase<S2, Ix1>,
) -> TensorResult<Array2<A>>
where
    A: LinalgScalar,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
{
    shape_of(x).expect_same(&shape_of(y))?;
    let row = x.view().insert_axis(Axis(0));
    let column = y.view().insert_axis(Axis(1));
    matmul(&row, &column)
}

/// `Aᵀ · B`: entry `(i, j)` is the dot of column `i` of `a` with column `j` of `b`.
pub fn transpose_product<A, S1, S2>(
    a: &ArrayBase<S1, Ix2>,
    b: &ArrayBase<S2, Ix2>,
) -> TensorResult<Array2<A>>
where
    A: LinalgScalar,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
{
    matmul(&a.t(), b)
}

// ─── Whole-tensor reductions ────────────────────────────────────────────────

/// The two ways of reducing a pair of equal-shaped arrays to one number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotEquivalence {
    /// Sum over all entries of the elementwise product.
    pub summed_product: f64,
    /// Dot product of the row-major flattened arrays.
    pub flattened_dot: f64,
}

impl DotEquivalence {
    pub fn exactly_equal(&self) -> bool {
        self.summed_product == self.flattened_dot
    }

    pub fn approx_equal(&self) -> bool {
        relative_eq!(
            self.summed_product,
            self.flattened_dot,
            epsilon = ABS_TOLERANCE,
            max_relative = REL_TOLERANCE
        )
    }
}

/// Reduce two equal-shaped arrays both as `sum(a * b)` and as `flat(a) · flat(b)`.
pub fn whole_tensor_dot<S1, S2, D>(
    a: &ArrayBase<S1, D>,
    b: &ArrayBase<S2, D>,
) -> TensorResult<DotEquivalence>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: Dimension,
{
    let summed_product = hadamard(a, b)?.sum();
    let flattened_dot = dot(&flatten(a), &flatten(b))?;
    Ok(DotEquivalence {
        summed_product,
        flattened_dot,
    })
}

// ─── Per-slice (batched) products ───────────────────────────────────────────

/// Copy of the 2-D slice `a[:, :, index]`.
pub fn trailing_slice<A, S>(a: &ArrayBase<S, Ix3>, index: usize) -> TensorResult<Array2<A>>
where
    A: Clone,
    S: Data<Elem = A>,
{
    let size = a.len_of(Axis(2));
    if index >= size {
        return Err(TensorError::IndexOutOfBounds {
            index,
            axis: 2,
            size,
        });
    }
    Ok(a.index_axis(Axis(2), index).to_owned())
}

/// Independent matrix products over the trailing axis.
///
/// For `b` of shape `(m, n, k)` and `c` of shape `(n, p, k)` the result has
/// shape `(m, p, k)` and `result[:, :, i] = b[:, :, i] · c[:, :, i]`.
pub fn batched_matmul<A, S1, S2>(
    b: &ArrayBase<S1, Ix3>,
    c: &ArrayBase<S2, Ix3>,
) -> TensorResult<Array3<A>>
where
    A: LinalgScalar,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
{
    let out = shape_of(b).batched_matmul(&shape_of(c))?;
    let (m, p, k) = (out.dim(0)?, out.dim(1)?, out.dim(2)?);
    let mut result = Array3::<A>::zeros((m, p, k));
    for i in 0..k {
        let product = matmul(&b.index_axis(Axis(2), i), &c.index_axis(Axis(2), i))?;
        result.index_axis_mut(Axis(2), i).assign(&product);
    }
    Ok(result)
}

/// Illustrative "full dot" of `b` against `c`.
///
/// Swaps the first two axes of `c`, cuts both arrays to the index range they
/// share on every axis, and sums the elementwise product. For `(2, 3, 4)`
/// against `(3, 2, 4)` the swap makes the shapes line up exactly. This is an
/// alignment for illustration, not an algebraic tensor contraction.
pub fn aligned_full_dot<A, S1, S2>(
    b: &ArrayBase<S1, Ix3>,
    c: &ArrayBase<S2, Ix3>,
) -> TensorResult<A>
where
    A: LinalgScalar,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
{
    let swapped = c.view().permuted_axes([1, 0, 2]);
    let common = shape_of(b).overlap(&shape_of(&swapped))?;
    let (d0, d1, d2) = (common.dim(0)?, common.dim(1)?, common.dim(2)?);
    let b_cut = b.slice(s![..d0, ..d1, ..d2]);
    let c_cut = swapped.slice(s![..d0, ..d1, ..d2]);
    Ok(hadamard(&b_cut, &c_cut)?.sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{arr1, arr2, Array};

    #[test]
    fn test_hadamard() {
        let a = arr2(&[[1.0, 2.0], [3.0, 4.0]]);
        let b = arr2(&[[5.0, 6.0], [7.0, 8.0]]);
        let e = hadamard(&a, &b).unwrap();
        assert_eq!(e, arr2(&[[5.0, 12.0], [21.0, 32.0]]));
    }

    #[test]
    fn test_hadamard_shape_mismatch() {
        let a = arr2(&[[1.0, 2.0], [3.0, 4.0]]);
        let b = arr2(&[[1.0, 2.0, 3.0]]);
        let err = hadamard(&a, &b).unwrap_err();
        assert_eq!(
            err,
            TensorError::ShapeMismatch {
                expected: "(2, 2)".to_string(),
                got: "(1, 3)".to_string(),
            }
        );
    }

    #[test]
    fn test_matmul() {
        let a = arr2(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let b = arr2(&[[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]);
        let c = matmul(&a, &b).unwrap();
        // [1*7+2*9+3*11, 1*8+2*10+3*12] = [58, 64]
        // [4*7+5*9+6*11, 4*8+5*10+6*12] = [139, 154]
        assert_eq!(c, arr2(&[[58.0, 64.0], [139.0, 154.0]]));
    }

    #[test]
    fn test_matmul_inner_mismatch() {
        let a = arr2(&[[1.0, 2.0, 3.0]]);
        let b = arr2(&[[1.0, 2.0]]);
        assert!(matches!(
            matmul(&a, &b),
            Err(TensorError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_matmul_rejects_3d() {
        let a = Array::<f64, _>::zeros((2, 3, 4));
        let b = Array::<f64, _>::zeros((2, 3, 4));
        let err = matmul(&a, &b).unwrap_err();
        assert!(matches!(err, TensorError::InvalidOperation(_)));
        assert!(err.to_string().contains("(2, 3, 4)"));
    }

    #[test]
    fn test_dot_and_row_times_column() {
        let x = arr1(&[1i64, 2, 3]);
        let y = arr1(&[4i64, 5, 6]);
        assert_eq!(dot(&x, &y).unwrap(), 32);

        let outer = row_times_column(&x, &y).unwrap();
        assert_eq!(outer.shape(), &[1, 1]);
        assert_eq!(outer[[0, 0]], 32);
    }

    #[test]
    fn test_dot_length_mismatch() {
        let x = arr1(&[1i64, 2, 3]);
        let y = arr1(&[4i64, 5]);
        assert!(dot(&x, &y).is_err());
        assert!(row_times_column(&x, &y).is_err());
    }

    #[test]
    fn test_transpose_product_is_column_gram() {
        let a = arr2(&[[1i64, 2], [3, 4], [5, 6]]);
        let b = arr2(&[[7i64, 8], [9, 10], [11, 12]]);
        let g = transpose_product(&a, &b).unwrap();
        assert_eq!(g.shape(), &[2, 2]);
        for i in 0..2 {
            for j in 0..2 {
                assert_eq!(g[[i, j]], a.column(i).dot(&b.column(j)));
            }
        }
        assert_eq!(g, arr2(&[[89i64, 98], [116, 128]]));
    }

    #[test]
    fn test_whole_tensor_dot() {
        let a = Array::from_shape_fn((2, 3, 4), |(i, j, k)| (i * 12 + j * 4 + k) as f64 * 0.5);
        let b = Array::from_shape_fn((2, 3, 4), |(i, j, k)| 1.0 + (i + j + k) as f64);
        let eq = whole_tensor_dot(&a, &b).unwrap();
        assert!(eq.approx_equal());
        assert_abs_diff_eq!(eq.summed_product, eq.flattened_dot, epsilon = 1e-9);
    }

    #[test]
    fn test_dot_equivalence_tolerance() {
        let close = DotEquivalence {
            summed_product: 1.0,
            flattened_dot: 1.0 + 1e-13,
        };
        assert!(close.approx_equal());
        assert!(!close.exactly_equal());

        let far = DotEquivalence {
            summed_product: 1.0,
            flattened_dot: 1.001,
        };
        assert!(!far.approx_equal());
    }

    #[test]
    fn test_batched_matmul() {
        let b = Array::from_shape_fn((2, 3, 4), |(i, j, k)| (i + 2 * j + 3 * k) as f64);
        let c = Array::from_shape_fn((3, 2, 4), |(i, j, k)| (1 + i * j + k) as f64);
        let r = batched_matmul(&b, &c).unwrap();
        assert_eq!(r.shape(), &[2, 2, 4]);
        for k in 0..4 {
            let expected = trailing_slice(&b, k)
                .unwrap()
                .dot(&trailing_slice(&c, k).unwrap());
            assert_eq!(trailing_slice(&r, k).unwrap(), expected);
        }
    }

    #[test]
    fn test_batched_matmul_batch_mismatch() {
        let b = Array::<f64, _>::zeros((2, 3, 4));
        let c = Array::<f64, _>::zeros((3, 2, 5));
        assert!(batched_matmul(&b, &c).is_err());
    }

    #[test]
    fn test_trailing_slice_out_of_bounds() {
        let b = Array::<f64, _>::zeros((2, 3, 4));
        assert_eq!(
            trailing_slice(&b, 4).unwrap_err(),
            TensorError::IndexOutOfBounds {
                index: 4,
                axis: 2,
                size: 4
            }
        );
    }

    #[test]
    fn test_aligned_full_dot() {
        let b = Array::from_shape_fn((2, 3, 4), |(i, j, k)| (i * 12 + j * 4 + k) as f64);
        let c = Array::from_shape_fn((3, 2, 4), |(i, j, k)| (i + j + k) as f64);
        let got = aligned_full_dot(&b, &c).unwrap();

        let mut expected = 0.0;
        for i in 0..2 {
            for j in 0..3 {
                for k in 0..4 {
                    expected += b[[i, j, k]] * c[[j, i, k]];
                }
            }
        }
        assert_abs_diff_eq!(got, expected, epsilon = 1e-9);
    }

    #[test]
    fn test_aligned_full_dot_cuts_to_overlap() {
        // After the swap c is (3, 2, 2); the shared range with b is (2, 2, 2).
        let b = Array::from_elem((2, 3, 4), 1i64);
        let c = Array::from_elem((2, 3, 2), 2i64);
        assert_eq!(aligned_full_dot(&b, &c).unwrap(), 2 * 2 * 2 * 2);
    }
}
