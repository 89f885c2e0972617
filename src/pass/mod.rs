//! Pass framework: building blocks for analyses over routine CFGs.
//!
//! Terminology note: a "pass" here is a readonly analysis. It never
//! mutates the routine; it only traverses it, possibly multiple times
//! (to converge), to compute derived information.

pub mod lattice;
pub use lattice::*;
