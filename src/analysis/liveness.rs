//! Backward liveness analysis.
//!
//! Two stages. `LocalSets` scans every block once and derives, per
//! block, UEVar (variables read before any write in that block) and
//! VarKill (variables written anywhere in that block). `Liveness`
//! then iterates the backward dataflow equation
//!
//! ```plain
//! LiveOut(b) = U over succs s of ( UEVar(s) U (LiveOut(s) - VarKill(s)) )
//! ```
//!
//! to its least fixpoint by round-robin sweeps over all blocks.
//! Updates are union-only, so each LiveOut grows monotonically toward
//! a bound given by the routine's finite var table; termination
//! follows, cycles and all, with no special-casing.

use crate::entity::PerEntity;
use crate::ir::{Block, Inst, Routine};
use crate::pass::{Lattice, VarSet};
use log::trace;

/// Per-block UEVar and VarKill, computed once per routine and
/// immutable afterward.
#[derive(Clone, Debug)]
pub struct LocalSets {
    pub ue_var: PerEntity<Block, VarSet>,
    pub var_kill: PerEntity<Block, VarSet>,
}

impl LocalSets {
    /// Single forward scan per block. A read is upward-exposed only
    /// if the variable has not been written earlier in the same
    /// block; a write kills unconditionally and never retracts an
    /// already-recorded upward-exposed use.
    pub fn compute(routine: &Routine) -> LocalSets {
        let mut ue_var: PerEntity<Block, VarSet> = PerEntity::default();
        let mut var_kill: PerEntity<Block, VarSet> = PerEntity::default();
        for (block, data) in routine.blocks.entries() {
            for &inst in &data.insts {
                match inst {
                    Inst::Read(var) => {
                        if !var_kill[block].contains(var) {
                            ue_var[block].insert(var);
                        }
                    }
                    Inst::Write(var) => {
                        var_kill[block].insert(var);
                    }
                    Inst::Other => {}
                }
            }
        }
        LocalSets { ue_var, var_kill }
    }
}

/// LiveOut per block, iterated to the least fixpoint.
#[derive(Clone, Debug)]
pub struct Liveness {
    pub live_out: PerEntity<Block, VarSet>,
}

impl Liveness {
    pub fn compute(routine: &Routine, local: &LocalSets) -> Liveness {
        let mut liveness = Liveness {
            live_out: PerEntity::default(),
        };
        liveness.refine(routine, local);
        liveness
    }

    /// Run sweeps from the current LiveOut values until a full sweep
    /// changes nothing. Returns whether any set changed at all, so
    /// calling this on converged results returns `false` and is a
    /// no-op.
    ///
    /// Each sweep visits every block, reachable or not, and folds
    /// each successor's LiveIn into the block's LiveOut. A
    /// successor's LiveIn is computed from its *current* LiveOut,
    /// which may already have been updated earlier in the same sweep;
    /// since updates are union-only, a fresher value can only be
    /// larger, and the fixpoint reached is the same one the
    /// snapshot-per-sweep variant converges to. Blocks with no
    /// successors keep an empty LiveOut forever.
    pub fn refine(&mut self, routine: &Routine, local: &LocalSets) -> bool {
        let mut any_changed = false;
        let mut changed = true;
        let mut sweeps = 0usize;
        while changed {
            changed = false;
            sweeps += 1;
            for block in routine.blocks.iter() {
                for &succ in routine.succs(block) {
                    let mut live_in = local.ue_var[succ].clone();
                    live_in.union_without(&self.live_out[succ], &local.var_kill[succ]);
                    if self.live_out[block].meet_with(&live_in) {
                        changed = true;
                    }
                }
            }
            trace!("liveness: sweep {} changed={}", sweeps, changed);
            any_changed |= changed;
        }
        any_changed
    }

    pub fn live_out(&self, block: Block) -> &VarSet {
        &self.live_out[block]
    }
}
