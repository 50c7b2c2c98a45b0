use tensor_lab_core::{Shape, TensorError, TensorResult};

use std::ops::Range;

/// Operand shapes and seed shared by every demonstration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabConfig {
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Side length of the square matrices in the elementwise demo.
    pub matrix_dim: usize,
    /// Shape of both operands in the whole-tensor dot demo.
    pub tensor_shape: (usize, usize, usize),
    /// `(m, n, p, k)`: per-slice operands are `(m, n, k)` and `(n, p, k)`.
    pub batch_dims: (usize, usize, usize, usize),
    /// `(r, c)` of both integer matrices in the transpose demo.
    pub gram_shape: (usize, usize),
    /// Range the transpose demo draws its integer entries from.
    pub integer_range: Range<i64>,
}

impl Default for LabConfig {
    fn default() -> Self {
        LabConfig {
            seed: None,
            matrix_dim: 3,
            tensor_shape: (2, 3, 4),
            batch_dims: (2, 3, 2, 4),
            gram_shape: (3, 2),
            integer_range: 0..10,
        }
    }
}

impl LabConfig {
    pub fn with_seed(seed: u64) -> Self {
        LabConfig {
            seed: Some(seed),
            ..LabConfig::default()
        }
    }

    /// Shape of the left per-slice operand.
    pub fn batch_lhs(&self) -> (usize, usize, usize) {
        let (m, n, _, k) = self.batch_dims;
        (m, n, k)
    }

    /// Shape of the right per-slice operand.
    pub fn batch_rhs(&self) -> (usize, usize, usize) {
        let (_, n, p, k) = self.batch_dims;
        (n, p, k)
    }

    /// Every operand shape the demos draw, labelled for error messages.
    pub fn operand_shapes(&self) -> Vec<(&'static str, Shape)> {
        let n = self.matrix_dim;
        let (t0, t1, t2) = self.tensor_shape;
        let (m, n_inner, k) = self.batch_lhs();
        let (_, p, _) = self.batch_rhs();
        let (r, c) = self.gram_shape;
        vec![
            ("square matrix", Shape::new(vec![n, n])),
            ("whole-tensor operand", Shape::new(vec![t0, t1, t2])),
            ("per-slice left operand", Shape::new(vec![m, n_inner, k])),
            ("per-slice right operand", Shape::new(vec![n_inner, p, k])),
            ("integer matrix", Shape::new(vec![r, c])),
        ]
    }

    /// Reject empty operands, which would leave nothing to show.
    pub fn validate(&self) -> TensorResult<()> {
        for (name, shape) in self.operand_shapes() {
            if shape.numel() == 0 {
                let axis = shape.dims().iter().position(|&d| d == 0).unwrap_or(0);
                return Err(TensorError::InvalidOperation(format!(
                    "{name} {shape} is empty along axis {axis}"
                )));
            }
        }
        if self.integer_range.is_empty() {
            return Err(TensorError::InvalidOperation(format!(
                "integer range {}..{} is empty",
                self.integer_range.start, self.integer_range.end
            )));
        }
        Ok(())
    }
}
