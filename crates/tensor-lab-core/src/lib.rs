//! # tensor-lab core
//!
//! Building blocks shared by the demonstrations:
//!
//! - **ops**: Hadamard and matrix products, whole-tensor dots, per-slice batched products
//! - **random**: seeded generators for uniform and integer operands
//! - **format**: grid rendering for vectors, matrices and 3-D arrays
//! - **shape**: shape descriptor used for validation and printing

pub mod error;
pub mod format;
pub mod ops;
pub mod random;
pub mod shape;

pub use error::{TensorError, TensorResult};
pub use random::LabRng;
pub use shape::Shape;
