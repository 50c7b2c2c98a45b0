use crate::config::LabConfig;
use crate::{batched, constructors, dot_vs_slices, elementwise, tensor_dot, transpose_dot};

use tensor_lab_core::{LabRng, TensorResult};

/// The demonstrations offered by the menu, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Demo {
    Elementwise,
    TensorDot,
    BatchedMatmul,
    Constructors,
    DotVsSlices,
    TransposeDot,
}

impl Demo {
    pub const ALL: [Demo; 6] = [
        Demo::Elementwise,
        Demo::TensorDot,
        Demo::BatchedMatmul,
        Demo::Constructors,
        Demo::DotVsSlices,
        Demo::TransposeDot,
    ];

    /// Menu number, starting at 1.
    pub fn number(self) -> i64 {
        match self {
            Demo::Elementwise => 1,
            Demo::TensorDot => 2,
            Demo::BatchedMatmul => 3,
            Demo::Constructors => 4,
            Demo::DotVsSlices => 5,
            Demo::TransposeDot => 6,
        }
    }

    pub fn from_number(n: i64) -> Option<Demo> {
        Demo::ALL.into_iter().find(|d| d.number() == n)
    }

    pub fn title(self) -> &'static str {
        match self {
            Demo::Elementwise => "Elementwise vs Matrix Multiplication",
            Demo::TensorDot => "Whole-Tensor Dot Equivalence",
            Demo::BatchedMatmul => "Per-Slice Batched Matrix Multiplication",
            Demo::Constructors => "Broadcasting & Constructors",
            Demo::DotVsSlices => "Full-Tensor Dot vs Per-Slice Comparison",
            Demo::TransposeDot => "Transpose Dot Product",
        }
    }

    /// Run the demonstration and render its narrated report.
    pub fn render(self, rng: &mut LabRng, config: &LabConfig) -> TensorResult<String> {
        config.validate()?;
        let text = match self {
            Demo::Elementwise => elementwise::run(rng, config)?.to_string(),
            Demo::TensorDot => tensor_dot::run(rng, config)?.to_string(),
            Demo::BatchedMatmul => batched::run(rng, config)?.to_string(),
            Demo::Constructors => constructors::run()?.to_string(),
            Demo::DotVsSlices => dot_vs_slices::run(rng)?.to_string(),
            Demo::TransposeDot => transpose_dot::run(rng, config)?.to_string(),
        };
        Ok(text)
    }
}
