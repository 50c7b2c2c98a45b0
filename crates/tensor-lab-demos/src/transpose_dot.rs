use crate::config::LabConfig;

use ndarray::{arr1, Array1, Array2};
use std::fmt;
use tensor_lab_core::format::{labeled, matrix, vector};
use tensor_lab_core::ops::{self, shape_of};
use tensor_lab_core::{LabRng, TensorResult};

/// `xᵀ · y` against `x · y` for vectors, and `Aᵀ · B` for matrices.
#[derive(Debug, Clone)]
pub struct TransposeDotReport {
    pub x: Array1<i64>,
    pub y: Array1<i64>,
    /// The `1x1` matrix from the row-times-column product.
    pub row_times_column: Array2<i64>,
    pub dot: i64,
    pub a: Array2<i64>,
    pub b: Array2<i64>,
    /// `c x c` matrix of column-by-column dot products.
    pub gram: Array2<i64>,
}

impl TransposeDotReport {
    pub fn vector_forms_agree(&self) -> bool {
        self.row_times_column.len() == 1 && self.row_times_column[[0, 0]] == self.dot
    }
}

pub fn run(rng: &mut LabRng, config: &LabConfig) -> TensorResult<TransposeDotReport> {
    let x = arr1(&[1i64, 2, 3]);
    let y = arr1(&[4i64, 5, 6]);
    let row_times_column = ops::row_times_column(&x, &y)?;
    let dot = ops::dot(&x, &y)?;

    let a = rng.integers(config.gram_shape, config.integer_range.clone())?;
    let b = rng.integers(config.gram_shape, config.integer_range.clone())?;
    let gram = ops::transpose_product(&a, &b)?;

    Ok(TransposeDotReport {
        x,
        y,
        row_times_column,
        dot,
        a,
        b,
        gram,
    })
}

impl fmt::Display for TransposeDotReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "x = {}", vector(&self.x))?;
        writeln!(f, "y = {}", vector(&self.y))?;
        writeln!(
            f,
            "x^T @ y (x as a row, y as a column) = {}  shape {}",
            matrix(&self.row_times_column),
            shape_of(&self.row_times_column)
        )?;
        writeln!(f, "dot(x, y)                          = {}", self.dot)?;
        writeln!(f, "Same value: {}", self.vector_forms_agree())?;
        writeln!(
            f,
            "The transpose form yields a 1x1 matrix; the dot product yields a bare scalar. \
             The numbers agree even though the containers differ."
        )?;
        writeln!(f)?;
        writeln!(f, "{}", labeled(&format!("A {}", shape_of(&self.a)), &matrix(&self.a)))?;
        writeln!(f, "{}", labeled(&format!("B {}", shape_of(&self.b)), &matrix(&self.b)))?;
        writeln!(
            f,
            "{}",
            labeled(&format!("A^T @ B {}", shape_of(&self.gram)), &matrix(&self.gram))
        )?;
        write!(
            f,
            "Entry (i, j) of A^T @ B is the dot product of column i of A with column j of B."
        )
    }
}
