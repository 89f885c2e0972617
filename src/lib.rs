//! Per-routine liveness dataflow analysis over control-flow graphs.
//!
//! Given a routine whose instructions are pre-classified as reads or
//! writes of opaque variables, computes per-block UEVar, VarKill, and
//! LiveOut sets by single-scan local analysis plus round-robin
//! iteration to the least fixpoint.

pub mod analysis;
pub mod cfg;
pub mod entity;
mod errors;
pub mod frontend;
mod ir;
pub mod pass;
pub mod report;

pub use errors::*;
pub use ir::*;
