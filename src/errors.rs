//! Error types.

use crate::ir::{Block, Var};

/// An error raised while constructing a `Routine` from host-supplied
/// blocks and edges. The analysis itself is total and never fails;
/// malformed CFGs are rejected here, at construction time.
#[derive(Clone, Debug)]
pub enum CfgError {
    /// A successor edge points at a block that is not in the routine.
    UnknownBlock(Block),
    /// An instruction names a variable that is not in the var table.
    UnknownVar(Var),
    /// The routine has no blocks, so there is no entry block.
    NoEntry,
}

impl std::fmt::Display for CfgError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

impl std::error::Error for CfgError {}
