//! ## Trivial Clause Detection
//! Clauses containing a literal together with a variant of its negation are considered
//! tautologies and are dropped before they ever reach a knowledge base.

use log::info;

use crate::clause::Clause;

/// Check whether `clause` contains a pair of complementary literals that unify by a substitution
/// binding variables to variables only. Complementary literals with identical arguments unify
/// with the empty substitution and are caught as well.
pub fn is_tautology(clause: &Clause) -> bool {
    for (l1_id, l1) in clause.iter() {
        for (_, l2) in clause.iter_after(l1_id) {
            if !l1.is_complementary_to(l2) {
                continue;
            }
            if let Some(subst) = l1.unify(l2) {
                if subst.binds_only_variables() {
                    info!("Tautology killed: {}", clause);
                    return true;
                }
            }
        }
    }
    false
}
