//! Lattice trait definition and the variable-set lattice used by the
//! liveness pass.

use crate::entity::EntityRef;
use crate::ir::Var;
use fxhash::FxHashSet;
use std::fmt::Debug;

/// A lattice type used for an analysis.
///
/// `meet_with` must compute the greatest lower bound of its operands
/// in place, and must obey the usual lattice laws (reflexivity,
/// commutativity, associativity, and `a meet top == a`). We never
/// compare lattice values directly, so `PartialOrd` is not required;
/// the partial order is only depended on implicitly, to guarantee
/// termination. For that the lattice must have finite chain length:
/// repeatedly meeting with new values must stop producing changes
/// after finitely many steps.
pub trait Lattice: Clone + Debug + Default {
    /// Return the `top` lattice value.
    fn top() -> Self;
    /// Mutate self to `meet(self, other)`. Returns `true` if any
    /// changes occurred.
    fn meet_with(&mut self, other: &Self) -> bool;
}

/// A lattice whose values are sets of `Var` indices. `top` is the
/// empty set and `meet` is union. This suits may-analyses such as
/// liveness: membership means the property *may* hold on some path.
/// Chain length is bounded by the routine's finite var table, so
/// union-only updates always converge.
#[derive(Clone, Debug, Default)]
pub struct VarSet {
    set: FxHashSet<Var>,
}

impl Lattice for VarSet {
    fn top() -> Self {
        VarSet {
            set: FxHashSet::default(),
        }
    }

    fn meet_with(&mut self, other: &VarSet) -> bool {
        let before = self.set.len();
        self.set.extend(other.set.iter().copied());
        self.set.len() != before
    }
}

impl VarSet {
    pub fn contains(&self, var: Var) -> bool {
        self.set.contains(&var)
    }

    pub fn insert(&mut self, var: Var) -> bool {
        self.set.insert(var)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Var> + '_ {
        self.set.iter().copied()
    }

    /// Union `other − minus` into self. Returns `true` if any changes
    /// occurred. This is the LiveIn building block: LiveOut(s) minus
    /// VarKill(s), folded into an accumulator.
    pub fn union_without(&mut self, other: &VarSet, minus: &VarSet) -> bool {
        let mut changed = false;
        for var in other.iter() {
            if !minus.contains(var) {
                changed |= self.set.insert(var);
            }
        }
        changed
    }

    /// Members sorted by entity index, for deterministic output.
    pub fn sorted(&self) -> Vec<Var> {
        let mut vars: Vec<Var> = self.set.iter().copied().collect();
        vars.sort_by_key(|v| v.index());
        vars
    }

    pub fn is_subset_of(&self, other: &VarSet) -> bool {
        self.iter().all(|v| other.contains(v))
    }
}

impl PartialEq for VarSet {
    fn eq(&self, other: &Self) -> bool {
        self.set == other.set
    }
}
impl Eq for VarSet {}

impl std::iter::FromIterator<Var> for VarSet {
    fn from_iter<I: IntoIterator<Item = Var>>(iter: I) -> Self {
        VarSet {
            set: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(indices: &[usize]) -> VarSet {
        indices.iter().map(|&i| Var::new(i)).collect()
    }

    #[test]
    fn meet_is_union_and_reports_change() {
        let mut a = set(&[0, 1]);
        let b = set(&[1, 2]);
        assert!(a.meet_with(&b));
        assert_eq!(a, set(&[0, 1, 2]));
        // Meeting again with the same operand is a no-op.
        assert!(!a.meet_with(&b));
    }

    #[test]
    fn meet_with_top_is_identity() {
        let mut a = set(&[3, 4]);
        assert!(!a.meet_with(&VarSet::top()));
        assert_eq!(a, set(&[3, 4]));
    }

    #[test]
    fn union_without_subtracts_kill_set() {
        let mut acc = VarSet::top();
        let live_out = set(&[0, 1, 2]);
        let kill = set(&[1]);
        assert!(acc.union_without(&live_out, &kill));
        assert_eq!(acc, set(&[0, 2]));
        assert!(!acc.union_without(&live_out, &kill));
    }

    #[test]
    fn sorted_orders_by_index() {
        let s = set(&[5, 0, 3]);
        let sorted: Vec<usize> = s.sorted().iter().map(|v| v.index()).collect();
        assert_eq!(sorted, vec![0, 3, 5]);
    }
}
