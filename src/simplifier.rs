//! ## Clause Simplifier
//! This module contains the simplification every freshly derived clause goes through before it
//! may enter a knowledge base:
//! - tautologies are discarded, see [is_tautology]
//! - duplicate literals are removed
//! - literals that are a variant of another literal of the same polarity, differing only in
//!   variables that occur nowhere else in the clause, are removed (condensation)

use bitvec::bitvec;
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    clause::{Clause, Literal, Symbol},
    trivial::is_tautology,
};

/// Check whether `general` can be mapped onto `target` by binding only variables from
/// `private`. If so `general` is redundant next to `target` in a clause.
fn matches_onto(general: &Literal, target: &Literal, private: &FxHashSet<&Symbol>) -> bool {
    let mut matching: FxHashMap<&Symbol, &Symbol> = FxHashMap::default();
    for (from, to) in general.get_args().iter().zip(target.get_args()) {
        if private.contains(from) {
            match matching.get(from) {
                Some(bound) if *bound != to => return false,
                Some(_) => (),
                None => {
                    matching.insert(from, to);
                }
            }
        } else if from != to {
            return false;
        }
    }
    true
}

/// Variables of the literal at `idx` that occur in no other literal of `clause`.
fn private_variables(clause: &Clause, idx: usize) -> FxHashSet<&Symbol> {
    let elsewhere: FxHashSet<&Symbol> = clause
        .iter()
        .filter(|(id, _)| id.0 != idx)
        .flat_map(|(_, lit)| lit.variables())
        .collect();
    clause.literals()[idx]
        .variables()
        .filter(|var| !elsewhere.contains(var))
        .collect()
}

/// Simplify `clause`, returning `None` if it is a tautology and should be discarded.
pub fn simplify(clause: Clause) -> Option<Clause> {
    if is_tautology(&clause) {
        return None;
    }

    let mut deleted = bitvec![0; clause.len()];
    for (l1_id, l1) in clause.iter() {
        if deleted[l1_id.0] {
            continue;
        }
        for (l2_id, l2) in clause.iter_after(l1_id) {
            if deleted[l2_id.0] || l1.get_pol() != l2.get_pol() || !l1.same_predicate(l2) {
                continue;
            }
            if l1 == l2 || matches_onto(l2, l1, &private_variables(&clause, l2_id.0)) {
                debug!("Removing {} next to {}", l2, l1);
                deleted.set(l2_id.0, true);
            } else if matches_onto(l1, l2, &private_variables(&clause, l1_id.0)) {
                debug!("Removing {} next to {}", l1, l2);
                deleted.set(l1_id.0, true);
                break;
            }
        }
    }

    if deleted.not_any() {
        Some(clause)
    } else {
        let literals = clause
            .into_literals()
            .into_iter()
            .zip(deleted.iter().by_vals())
            .filter(|(_, del)| !del)
            .map(|(lit, _)| lit)
            .collect();
        Some(Clause::new(literals))
    }
}
