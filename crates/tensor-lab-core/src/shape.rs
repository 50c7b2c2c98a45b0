use crate::error::{TensorError, TensorResult};
use std::fmt;

/// Axis lengths of a dense array, printed as `(2, 3, 4)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    pub fn new(dims: Vec<usize>) -> Self {
        Shape { dims }
    }

    pub fn from_slice(dims: &[usize]) -> Self {
        Shape {
            dims: dims.to_vec(),
        }
    }

    /// Number of dimensions (rank).
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Size along a specific axis.
    pub fn dim(&self, axis: usize) -> TensorResult<usize> {
        self.dims.get(axis).copied().ok_or(TensorError::InvalidAxis {
            axis,
            ndim: self.ndim(),
        })
    }

    /// Total number of elements.
    pub fn numel(&self) -> usize {
        self.dims.iter().product()
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Result shape of the 2-D product `self × other`.
    pub fn matmul(&self, other: &Shape) -> TensorResult<Shape> {
        if self.ndim() != 2 || other.ndim() != 2 {
            return Err(TensorError::InvalidOperation(format!(
                "matrix product is only defined for 2-D operands, got {} and {}",
                self, other
            )));
        }
        let (m, n) = (self.dims[0], self.dims[1]);
        let (n2, p) = (other.dims[0], other.dims[1]);
        if n != n2 {
            return Err(TensorError::DimensionMismatch(format!(
                "matmul: inner dimensions must match, got {} and {}",
                n, n2
            )));
        }
        Ok(Shape::new(vec![m, p]))
    }

    /// Result shape of the per-slice product of `(m, n, k)` and `(n, p, k)`.
    pub fn batched_matmul(&self, other: &Shape) -> TensorResult<Shape> {
        if self.ndim() != 3 || other.ndim() != 3 {
            return Err(TensorError::InvalidOperation(format!(
                "per-slice product expects 3-D operands, got {} and {}",
                self, other
            )));
        }
        if self.dims[2] != other.dims[2] {
            return Err(TensorError::DimensionMismatch(format!(
                "per-slice product: batch axes differ, got {} and {}",
                self.dims[2], other.dims[2]
            )));
        }
        let lhs = Shape::from_slice(&self.dims[..2]);
        let slice = lhs.matmul(&Shape::from_slice(&other.dims[..2]))?;
        Ok(Shape::new(vec![slice.dims[0], slice.dims[1], self.dims[2]]))
    }

    /// Axis-wise minimum of two shapes with the same rank.
    pub fn overlap(&self, other: &Shape) -> TensorResult<Shape> {
        if self.ndim() != other.ndim() {
            return Err(TensorError::DimensionMismatch(format!(
                "cannot overlap {} with {}",
                self, other
            )));
        }
        Ok(Shape::new(
            self.dims
                .iter()
                .zip(other.dims.iter())
                .map(|(&a, &b)| a.min(b))
                .collect(),
        ))
    }

    /// Fail with `ShapeMismatch` unless both shapes are identical.
    pub fn expect_same(&self, other: &Shape) -> TensorResult<()> {
        if self != other {
            return Err(TensorError::ShapeMismatch {
                expected: self.to_string(),
                got: other.to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d)?;
        }
        write!(f, ")")
    }
}
