//! Analyses over routine CFGs.

pub mod liveness;
pub use liveness::*;
