//! Lightweight CFG analyses: facts derivable from the edge relation.

use crate::entity::PerEntity;
use crate::ir::{Block, Routine};
use smallvec::SmallVec;

/// Auxiliary views of a routine's control-flow graph, derived once
/// from the per-block successor lists.
#[derive(Clone, Debug)]
pub struct CFGInfo {
    /// Entry block.
    pub entry: Block,
    /// Blocks with no outgoing edges. Their LiveOut is always empty.
    pub exit_blocks: Vec<Block>,
    /// Preds for a given block, in the order the edges were declared.
    pub preds: PerEntity<Block, SmallVec<[Block; 4]>>,
}

impl CFGInfo {
    pub fn new(routine: &Routine) -> CFGInfo {
        let mut exit_blocks = vec![];
        let mut preds: PerEntity<Block, SmallVec<[Block; 4]>> = PerEntity::default();
        for (block, data) in routine.blocks.entries() {
            if data.succs.is_empty() {
                exit_blocks.push(block);
            }
            for &succ in &data.succs {
                preds[succ].push(block);
            }
        }
        CFGInfo {
            entry: routine.entry,
            exit_blocks,
            preds,
        }
    }

    pub fn preds(&self, block: Block) -> &[Block] {
        &self.preds[block][..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Routine;

    #[test]
    fn preds_mirror_succs() {
        let mut b = Routine::builder();
        let entry = b.add_block("entry");
        let body = b.add_block("body");
        let exit = b.add_block("exit");
        b.add_succ(entry, body);
        b.add_succ(body, body);
        b.add_succ(body, exit);
        let routine = b.build().unwrap();

        let cfg = CFGInfo::new(&routine);
        assert_eq!(cfg.entry, entry);
        assert_eq!(cfg.preds(entry), &[]);
        assert_eq!(cfg.preds(body), &[entry, body]);
        assert_eq!(cfg.preds(exit), &[body]);
        assert_eq!(cfg.exit_blocks, vec![exit]);
    }
}
