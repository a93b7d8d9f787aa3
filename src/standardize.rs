//! ## Standardizing Apart
//! Every clause that enters a knowledge base gets its own variables. [VariableRenamer] hands out
//! fresh names of the form `base` + counter (`x` becomes `x1`, `x2`, ...) so renamed variables
//! can still be traced back to the variable they came from.

use log::debug;
use rustc_hash::FxHashMap;

use crate::{
    clause::{Clause, Symbol},
    subst::{Substitutable, Substitution},
};

/// Allocation state for fresh variable names. A renamer is owned by whoever builds a clause set,
/// cloning it forks the allocation so two forks may hand out the same name but never one that
/// was handed out before the fork.
#[derive(Debug, Clone, Default)]
pub struct VariableRenamer {
    counters: FxHashMap<String, usize>,
}

impl VariableRenamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a never used variable name derived from `var`.
    pub fn fresh(&mut self, var: &Symbol) -> Symbol {
        let base = var.base_name();
        let counter = self.counters.entry(base.to_string()).or_insert(0);
        *counter += 1;
        Symbol::new(format!("{}{}", base, counter))
    }

    /// Rename every variable in `clause` to a fresh one, occurrences of the same variable get the
    /// same new name. Ground clauses are returned as is.
    pub fn standardize(&mut self, clause: Clause) -> Clause {
        let mut renaming = Substitution::new();
        for var in clause.variables() {
            if renaming.get(var).is_none() {
                let fresh = self.fresh(var);
                renaming.insert(var.clone(), fresh);
            }
        }

        if renaming.is_nop() {
            clause
        } else {
            let renamed = clause.subst_with(&renaming);
            debug!("Standardized to {}", renamed);
            renamed
        }
    }
}

#[cfg(test)]
mod test {
    use rustc_hash::FxHashSet;

    use crate::clause::{Clause, Literal, Symbol};

    use super::VariableRenamer;

    fn vars(clause: &Clause) -> FxHashSet<Symbol> {
        clause.variables().cloned().collect()
    }

    #[test]
    fn renaming_is_consistent_within_a_clause() {
        let mut renamer = VariableRenamer::new();
        let clause = Clause::new(vec![
            Literal::mk_neg("A", vec!["x".into(), "y".into()]),
            Literal::mk_pos("H", vec!["x".into(), "Tom".into()]),
        ]);
        let renamed = renamer.standardize(clause);
        assert_eq!(renamed.to_string(), "~A(x1,y1) | H(x1,Tom)");
    }

    #[test]
    fn counters_continue_across_clauses() {
        let mut renamer = VariableRenamer::new();
        let clause = Clause::from(Literal::mk_pos("A", vec!["x".into()]));
        let first = renamer.standardize(clause.clone());
        let second = renamer.standardize(clause);
        assert_eq!(first.to_string(), "A(x1)");
        assert_eq!(second.to_string(), "A(x2)");

        // Renamed variables share the counter of their base name.
        let third = renamer.standardize(second);
        assert_eq!(third.to_string(), "A(x3)");
        assert!(vars(&first).is_disjoint(&vars(&third)));
    }

    #[test]
    fn ground_clauses_are_untouched() {
        let mut renamer = VariableRenamer::new();
        let clause = Clause::from(Literal::mk_pos("A", vec!["Tom".into()]));
        assert_eq!(renamer.standardize(clause.clone()), clause);
    }

    #[test]
    fn forks_do_not_reuse_earlier_names() {
        let mut base = VariableRenamer::new();
        let clause = Clause::from(Literal::mk_pos("A", vec!["x".into()]));
        let base_clause = base.standardize(clause.clone());

        let mut fork = base.clone();
        let forked = fork.standardize(clause);
        assert!(vars(&base_clause).is_disjoint(&vars(&forked)));
    }
}
