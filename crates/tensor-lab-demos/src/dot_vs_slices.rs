use ndarray::{Array2, Array3};
use std::fmt;
use tensor_lab_core::format::{labeled, matrix, scalar};
use tensor_lab_core::ops::{self, shape_of};
use tensor_lab_core::{LabRng, TensorResult};

/// One "full dot" scalar next to the per-slice product tensor of the same operands.
#[derive(Debug, Clone)]
pub struct DotVsSlicesReport {
    pub b: Array3<f64>,
    pub c: Array3<f64>,
    /// Sum of `B * swap01(C)` over the shared index range.
    pub full_dot: f64,
    pub per_slice: Array3<f64>,
    pub first_slice: Array2<f64>,
}

/// Shape of `B`. Fixed rather than configured: the axis swap only lines the
/// operands up when `C` is `B` with its first two axes exchanged.
pub const B_SHAPE: (usize, usize, usize) = (2, 3, 4);
/// Shape of `C`.
pub const C_SHAPE: (usize, usize, usize) = (3, 2, 4);

pub fn run(rng: &mut LabRng) -> TensorResult<DotVsSlicesReport> {
    let b = rng.uniform(B_SHAPE);
    let c = rng.uniform(C_SHAPE);

    let full_dot = ops::aligned_full_dot(&b, &c)?;
    let per_slice = ops::batched_matmul(&b, &c)?;
    let first_slice = ops::trailing_slice(&per_slice, 0)?;

    Ok(DotVsSlicesReport {
        b,
        c,
        full_dot,
        per_slice,
        first_slice,
    })
}

impl fmt::Display for DotVsSlicesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "B: {}    C: {}", shape_of(&self.b), shape_of(&self.c))?;
        writeln!(f)?;
        writeln!(
            f,
            "Full dot-style scalar (C's first two axes swapped, product summed): {}",
            scalar(self.full_dot)
        )?;
        writeln!(f, "Per-slice product shape: {}", shape_of(&self.per_slice))?;
        let first = matrix(&self.first_slice);
        writeln!(f, "{}", labeled("Per-slice result [:, :, 0]", &first))?;
        writeln!(
            f,
            "The scalar collapses everything into one measure of overall similarity."
        )?;
        writeln!(
            f,
            "The per-slice product keeps structured batch results: one matrix per trailing index."
        )?;
        write!(
            f,
            "Note: the axis swap only lines the shapes up for illustration; \
             it is not a formal tensor contraction."
        )
    }
}
