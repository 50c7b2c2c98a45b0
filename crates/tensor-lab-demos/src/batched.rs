use crate::config::LabConfig;

use ndarray::{Array2, Array3, Axis};
use std::fmt;
use tensor_lab_core::format::{labeled, matrix};
use tensor_lab_core::ops::{self, shape_of};
use tensor_lab_core::{LabRng, TensorResult};

/// `k` independent matrix products `B[:, :, i] · C[:, :, i]` stacked along a trailing axis.
#[derive(Debug, Clone)]
pub struct BatchedReport {
    pub b: Array3<f64>,
    pub c: Array3<f64>,
    pub result: Array3<f64>,
    pub first_slice: Array2<f64>,
}

pub fn run(rng: &mut LabRng, config: &LabConfig) -> TensorResult<BatchedReport> {
    let b = rng.uniform(config.batch_lhs());
    let c = rng.uniform(config.batch_rhs());

    let result = ops::batched_matmul(&b, &c)?;
    let first_slice = ops::trailing_slice(&result, 0)?;
    log::debug!(
        "per-slice product {} x {} -> {}",
        shape_of(&b),
        shape_of(&c),
        shape_of(&result)
    );

    Ok(BatchedReport {
        b,
        c,
        result,
        first_slice,
    })
}

impl fmt::Display for BatchedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Shape of B: {}", shape_of(&self.b))?;
        writeln!(f, "Shape of C: {}", shape_of(&self.c))?;
        writeln!(f, "Shape of R: {}", shape_of(&self.result))?;
        writeln!(f)?;
        let first = matrix(&self.first_slice);
        writeln!(f, "{}", labeled("R[:, :, 0] = B[:, :, 0] @ C[:, :, 0]", &first))?;
        write!(
            f,
            "Each of the {} trailing slices is an independent matrix product; \
             the results are stacked back along the last axis.",
            self.result.len_of(Axis(2))
        )
    }
}
