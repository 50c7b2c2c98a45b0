use ndarray::{arr2, Array1, Array2, Axis};
use std::fmt;
use tensor_lab_core::format::{labeled, matrix, vector};
use tensor_lab_core::{TensorError, TensorResult};

const SIDE: usize = 3;

/// The same numbers reached through different construction idioms.
#[derive(Debug, Clone)]
pub struct ConstructorsReport {
    /// `0..10` collected into a contiguous array.
    pub range: Array1<i64>,
    /// `0..10` with step 2.
    pub strided: Array1<i64>,
    /// Literal integer block coerced entry by entry to `f64`.
    pub coerced: Array2<f64>,
    /// `1..=9` reshaped to 3x3.
    pub reshaped: Array2<f64>,
    /// `1..=9` placed entry by entry into a 3x3 grid.
    pub comprehension: Array2<f64>,
    /// Column `[0, 3, 6]` broadcast against row `[1, 2, 3]`.
    pub broadcast: Array2<f64>,
}

impl ConstructorsReport {
    pub fn reshape_matches_comprehension(&self) -> bool {
        self.reshaped == self.comprehension
    }

    pub fn broadcast_matches_reshape(&self) -> bool {
        self.broadcast == self.reshaped
    }
}

pub fn run() -> TensorResult<ConstructorsReport> {
    let range: Array1<i64> = (0..10).collect();
    let strided: Array1<i64> = (0..10).step_by(2).collect();
    let coerced = arr2(&[[1i64, 2, 3], [4, 5, 6], [7, 8, 9]]).mapv(|x| x as f64);

    let source = Array1::range(1.0, (SIDE * SIDE + 1) as f64, 1.0);
    let reshaped = source
        .clone()
        .into_shape((SIDE, SIDE))
        .map_err(|e| TensorError::InvalidOperation(e.to_string()))?;
    let comprehension = Array2::from_shape_fn((SIDE, SIDE), |(i, j)| source[i * SIDE + j]);

    let offsets = Array1::range(0.0, (SIDE * SIDE) as f64, SIDE as f64).insert_axis(Axis(1));
    let columns = Array1::range(1.0, (SIDE + 1) as f64, 1.0).insert_axis(Axis(0));
    let broadcast = &offsets + &columns;

    Ok(ConstructorsReport {
        range,
        strided,
        coerced,
        reshaped,
        comprehension,
        broadcast,
    })
}

impl fmt::Display for ConstructorsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", labeled("Range 0..10 as an array", &vector(&self.range)))?;
        writeln!(f, "{}", labeled("Range 0..10 step 2", &vector(&self.strided)))?;
        writeln!(
            f,
            "{}",
            labeled("Integer literal block coerced to f64", &matrix(&self.coerced))
        )?;
        writeln!(f, "{}", labeled("1..=9 reshaped to 3x3", &matrix(&self.reshaped)))?;
        writeln!(
            f,
            "{}",
            labeled("1..=9 placed entry by entry", &matrix(&self.comprehension))
        )?;
        writeln!(
            f,
            "{}",
            labeled("Column [0, 3, 6] broadcast + row [1, 2, 3]", &matrix(&self.broadcast))
        )?;
        writeln!(
            f,
            "reshape == comprehension: {}",
            self.reshape_matches_comprehension()
        )?;
        write!(f, "broadcast == reshape:     {}", self.broadcast_matches_reshape())
    }
}
