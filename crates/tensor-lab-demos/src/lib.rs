//! # tensor-lab demos
//!
//! Six narrated demonstrations of array arithmetic. Each module exposes a
//! `run` function that builds its operands, computes the results and returns a
//! report record; the record's `Display` impl renders the narration.
//!
//! - **elementwise**: Hadamard product vs matrix product
//! - **tensor_dot**: `sum(B * C)` vs dot of flattened arrays
//! - **batched**: per-slice matrix products over a trailing axis
//! - **constructors**: ranges, reshapes, comprehension and broadcasting
//! - **dot_vs_slices**: one aligned scalar vs the per-slice tensor
//! - **transpose_dot**: `xᵀy` vs `x·y`, and `AᵀB`

pub mod batched;
pub mod catalogue;
pub mod config;
pub mod constructors;
pub mod dot_vs_slices;
pub mod elementwise;
pub mod tensor_dot;
pub mod transpose_dot;

pub use catalogue::Demo;
pub use config::LabConfig;
