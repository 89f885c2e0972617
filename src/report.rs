//! Report writer: per-block UEVAR/VARKILL/LIVEOUT listing.
//!
//! Variables are printed by display name, sorted by entity index so
//! the output is deterministic.

use crate::analysis::{Liveness, LocalSets};
use crate::ir::Routine;
use crate::pass::VarSet;
use std::io::{self, Write};

pub fn write_report<W: Write>(
    routine: &Routine,
    local: &LocalSets,
    liveness: &Liveness,
    w: &mut W,
) -> io::Result<()> {
    for (block, data) in routine.blocks.entries() {
        writeln!(w, "----- {} -----", data.name)?;
        write_set(routine, "UEVAR", &local.ue_var[block], w)?;
        write_set(routine, "VARKILL", &local.var_kill[block], w)?;
        write_set(routine, "LIVEOUT", liveness.live_out(block), w)?;
    }
    Ok(())
}

fn write_set<W: Write>(routine: &Routine, label: &str, set: &VarSet, w: &mut W) -> io::Result<()> {
    write!(w, "{}:", label)?;
    for var in set.sorted() {
        write!(w, " {}", routine.var_name(var))?;
    }
    writeln!(w)
}

/// Convenience wrapper for tests and the CLI's stdout path.
pub fn report_to_string(routine: &Routine, local: &LocalSets, liveness: &Liveness) -> String {
    let mut buf = Vec::new();
    write_report(routine, local, liveness, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Inst, Routine};

    #[test]
    fn report_lists_all_three_sets_per_block() {
        let mut b = Routine::builder();
        let entry = b.add_block("entry");
        let exit = b.add_block("exit");
        let x = b.add_var(Some("x"));
        let y = b.add_var(Some("y"));
        b.add_succ(entry, exit);
        b.push_inst(entry, Inst::Write(y));
        b.push_inst(exit, Inst::Read(x));
        b.push_inst(exit, Inst::Read(y));
        let routine = b.build().unwrap();

        let local = LocalSets::compute(&routine);
        let liveness = Liveness::compute(&routine, &local);
        let report = report_to_string(&routine, &local, &liveness);
        assert_eq!(
            report,
            "----- entry -----\n\
             UEVAR:\n\
             VARKILL: y\n\
             LIVEOUT: x y\n\
             ----- exit -----\n\
             UEVAR: x y\n\
             VARKILL:\n\
             LIVEOUT:\n"
        );
    }
}
