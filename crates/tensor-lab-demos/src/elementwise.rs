use crate::config::LabConfig;

use ndarray::Array2;
use std::fmt;
use tensor_lab_core::format::{labeled, matrix};
use tensor_lab_core::{ops, LabRng, TensorResult};

/// Two random square matrices, their Hadamard product and their matrix product.
#[derive(Debug, Clone)]
pub struct ElementwiseReport {
    pub a: Array2<f64>,
    pub b: Array2<f64>,
    pub hadamard: Array2<f64>,
    pub product: Array2<f64>,
}

pub fn run(rng: &mut LabRng, config: &LabConfig) -> TensorResult<ElementwiseReport> {
    let n = config.matrix_dim;
    let a = rng.uniform((n, n));
    let b = rng.uniform((n, n));

    let hadamard = ops::hadamard(&a, &b)?;
    let product = ops::matmul(&a, &b)?;
    log::debug!("elementwise demo on {n}x{n} operands");

    Ok(ElementwiseReport {
        a,
        b,
        hadamard,
        product,
    })
}

impl fmt::Display for ElementwiseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", labeled("Matrix A", &matrix(&self.a)))?;
        writeln!(f, "{}", labeled("Matrix B", &matrix(&self.b)))?;
        writeln!(
            f,
            "{}",
            labeled("Elementwise (Hadamard) product A * B", &matrix(&self.hadamard))
        )?;
        writeln!(f, "{}", labeled("Matrix product A @ B", &matrix(&self.product)))?;
        writeln!(
            f,
            "The Hadamard product multiplies corresponding entries and keeps the shape."
        )?;
        write!(
            f,
            "The matrix product takes row-by-column dot products: (m x n) @ (n x p) gives (m x p), \
             and it is undefined when the inner dimensions differ."
        )
    }
}
