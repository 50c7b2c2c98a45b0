use crate::error::{TensorError, TensorResult};

use ndarray::{Array, Dimension, ShapeBuilder};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

/// Source of random demo operands.
///
/// Seeded runs are reproducible; `None` draws the seed from OS entropy.
pub struct LabRng {
    rng: StdRng,
    seed: Option<u64>,
}

impl LabRng {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        LabRng { rng, seed }
    }

    pub fn seeded(seed: u64) -> Self {
        LabRng::new(Some(seed))
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Array with entries drawn uniformly from `[0, 1)`.
    pub fn uniform<Sh, D>(&mut self, shape: Sh) -> Array<f64, D>
    where
        Sh: ShapeBuilder<Dim = D>,
        D: Dimension,
    {
        let rng = &mut self.rng;
        Array::from_shape_simple_fn(shape, || rng.gen::<f64>())
    }

    /// Array with integer entries drawn uniformly from `range`.
    pub fn integers<Sh, D>(&mut self, shape: Sh, range: Range<i64>) -> TensorResult<Array<i64, D>>
    where
        Sh: ShapeBuilder<Dim = D>,
        D: Dimension,
    {
        if range.is_empty() {
            return Err(TensorError::InvalidOperation(format!(
                "empty integer range {}..{}",
                range.start, range.end
            )));
        }
        let rng = &mut self.rng;
        Ok(Array::from_shape_simple_fn(shape, || rng.gen_range(range.clone())))
    }
}
