use crate::config::LabConfig;

use ndarray::Array3;
use std::fmt;
use tensor_lab_core::format::{labeled, scalar, tensor3};
use tensor_lab_core::ops::{self, DotEquivalence};
use tensor_lab_core::{LabRng, TensorError, TensorResult};

/// `sum(B * C)` against `flat(B) · flat(C)` for two equal-shaped 3-D arrays.
#[derive(Debug, Clone)]
pub struct TensorDotReport {
    pub b: Array3<f64>,
    pub c: Array3<f64>,
    pub equivalence: DotEquivalence,
    /// What the 2-D matrix product reports when handed the raw 3-D arrays.
    pub matmul_error: Option<TensorError>,
}

pub fn run(rng: &mut LabRng, config: &LabConfig) -> TensorResult<TensorDotReport> {
    let b = rng.uniform(config.tensor_shape);
    let c = rng.uniform(config.tensor_shape);

    let equivalence = ops::whole_tensor_dot(&b, &c)?;
    let matmul_error = ops::matmul(&b, &c).err();
    if !equivalence.approx_equal() {
        log::warn!(
            "whole-tensor reductions disagree: {} vs {}",
            equivalence.summed_product,
            equivalence.flattened_dot
        );
    }

    Ok(TensorDotReport {
        b,
        c,
        equivalence,
        matmul_error,
    })
}

impl fmt::Display for TensorDotReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", labeled("Tensor B", &tensor3(&self.b)))?;
        writeln!(f, "{}", labeled("Tensor C", &tensor3(&self.c)))?;
        writeln!(
            f,
            "sum(B * C) over all entries    = {}",
            scalar(self.equivalence.summed_product)
        )?;
        writeln!(
            f,
            "dot(flatten(B), flatten(C))    = {}",
            scalar(self.equivalence.flattened_dot)
        )?;
        writeln!(f, "Exactly equal:       {}", self.equivalence.exactly_equal())?;
        writeln!(f, "Approximately equal: {}", self.equivalence.approx_equal())?;
        writeln!(f)?;
        writeln!(
            f,
            "Summing the elementwise product is the same reduction as \
             a dot product of the flattened arrays."
        )?;
        write!(f, "Direct matrix multiplication is undefined on raw 3-D arrays")?;
        match &self.matmul_error {
            Some(e) => write!(f, ": {}", e),
            None => write!(f, "."),
        }
    }
}
