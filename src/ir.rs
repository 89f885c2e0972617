//! Routine IR: basic blocks, classified memory accesses, and the CFG
//! edge relation.
//!
//! The host front end is responsible for classifying each instruction
//! as a read of one variable, a write of one variable, or neither;
//! nothing in this crate inspects opcodes. Variables are opaque
//! entity indices, so set membership is identity-based: two accesses
//! touch the same variable iff they carry the same `Var`.

use crate::declare_entity;
use crate::entity::{EntityRef, EntityVec};
use crate::errors::CfgError;
use smallvec::SmallVec;

declare_entity!(Var, "v");
declare_entity!(Block, "block");

/// One instruction, as far as the analysis cares: which variable it
/// reads or writes, if any. An instruction is never both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Inst {
    Read(Var),
    Write(Var),
    Other,
}

#[derive(Clone, Debug, Default)]
pub struct VarData {
    /// Display name for reporting, if the host supplied one.
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct BlockData {
    pub name: String,
    /// Instructions in program order.
    pub insts: Vec<Inst>,
    /// Outgoing CFG edges. May include self-edges; may be empty (an
    /// exit block).
    pub succs: SmallVec<[Block; 4]>,
}

/// An immutable routine: the unit of analysis. Construct via
/// [`RoutineBuilder`], which validates the edge relation.
#[derive(Clone, Debug)]
pub struct Routine {
    /// Entry block; always the first block added.
    pub entry: Block,
    pub blocks: EntityVec<Block, BlockData>,
    pub vars: EntityVec<Var, VarData>,
}

impl Routine {
    pub fn builder() -> RoutineBuilder {
        RoutineBuilder::default()
    }

    pub fn succs(&self, block: Block) -> &[Block] {
        &self.blocks[block].succs[..]
    }

    /// Display name for a variable, falling back to the entity index.
    pub fn var_name(&self, var: Var) -> String {
        match &self.vars[var].name {
            Some(name) => name.clone(),
            None => format!("{}", var),
        }
    }
}

/// Accumulates blocks, instructions, and edges, then validates the
/// whole routine at once. Succ edges may refer to blocks added later,
/// so forward references cost nothing.
#[derive(Clone, Debug, Default)]
pub struct RoutineBuilder {
    blocks: EntityVec<Block, BlockData>,
    vars: EntityVec<Var, VarData>,
}

impl RoutineBuilder {
    pub fn add_var<S: Into<String>>(&mut self, name: Option<S>) -> Var {
        self.vars.push(VarData {
            name: name.map(|s| s.into()),
        })
    }

    pub fn add_block<S: Into<String>>(&mut self, name: S) -> Block {
        self.blocks.push(BlockData {
            name: name.into(),
            insts: vec![],
            succs: SmallVec::new(),
        })
    }

    pub fn push_inst(&mut self, block: Block, inst: Inst) {
        self.blocks[block].insts.push(inst);
    }

    pub fn add_succ(&mut self, block: Block, succ: Block) {
        self.blocks[block].succs.push(succ);
    }

    /// Validate and freeze. Every edge target and every instruction's
    /// variable must be in this builder's tables; the first block
    /// added becomes the entry.
    pub fn build(self) -> Result<Routine, CfgError> {
        if self.blocks.is_empty() {
            return Err(CfgError::NoEntry);
        }
        let n_blocks = self.blocks.len();
        let n_vars = self.vars.len();
        for data in self.blocks.values() {
            for &succ in &data.succs {
                if succ.index() >= n_blocks {
                    return Err(CfgError::UnknownBlock(succ));
                }
            }
            for &inst in &data.insts {
                let var = match inst {
                    Inst::Read(v) | Inst::Write(v) => v,
                    Inst::Other => continue,
                };
                if var.index() >= n_vars {
                    return Err(CfgError::UnknownVar(var));
                }
            }
        }
        Ok(Routine {
            entry: Block::new(0),
            blocks: self.blocks,
            vars: self.vars,
        })
    }
}
