//! ## Clausification
//! Conversion of [Formula] trees into conjunctive normal form and from there into [Clause]s.
//! The conversion runs three passes in a fixed order, each consuming the tree it works on:
//! 1. [eliminate_implications]: `A => B` becomes `~A | B`
//! 2. [push_negations]: negations are moved down to the literals using De Morgan's laws
//! 3. [distribute]: `|` is distributed over `&` until a conjunction of clauses remains
//!
//! [extract_clauses] then turns the resulting tree into a list of clauses.

use crate::{
    clause::{Clause, Literal},
    formula::Formula,
};

/// Check whether `f` is a clause: a literal or a disjunction of literals only.
pub fn is_clause(f: &Formula) -> bool {
    match f {
        Formula::Literal(_) => true,
        Formula::Or(fs) => fs.iter().all(Formula::is_literal),
        Formula::Not(_) | Formula::And(_) | Formula::Implies(..) => false,
    }
}

/// Check whether `f` is in conjunctive normal form: a clause or a conjunction of clauses.
pub fn is_cnf(f: &Formula) -> bool {
    match f {
        Formula::And(fs) => fs.iter().all(is_clause),
        other => is_clause(other),
    }
}

// Negate `f` and bring the result into negation normal form.
fn negate(f: Formula) -> Formula {
    match f {
        Formula::Literal(lit) => Formula::Literal(lit.negate()),
        // A clause is negated in one go: flip every literal and turn the `|` into `&`.
        Formula::Or(fs) if fs.iter().all(Formula::is_literal) => {
            Formula::And(fs.into_iter().map(Formula::not).collect())
        }
        // ~~A => A
        Formula::Not(inner) => push_negations(*inner),
        // ~(A & B) => ~A | ~B
        Formula::And(fs) => Formula::Or(fs.into_iter().map(negate).collect()),
        // ~(A | B) => ~A & ~B
        Formula::Or(fs) => Formula::And(fs.into_iter().map(negate).collect()),
        // ~(A => B) => A & ~B
        Formula::Implies(lhs, rhs) => Formula::And(vec![push_negations(*lhs), negate(*rhs)]),
    }
}

/// Replace every `A => B` in `f` by `~A | B`. The rewrite is applied top down, the negated
/// antecedent is pushed through with the negation rules right away.
pub fn eliminate_implications(f: Formula) -> Formula {
    match f {
        Formula::Literal(_) => f,
        Formula::Implies(lhs, rhs) => Formula::Or(vec![
            negate(eliminate_implications(*lhs)),
            eliminate_implications(*rhs),
        ]),
        Formula::Not(inner) => Formula::Not(Box::new(eliminate_implications(*inner))),
        Formula::And(fs) => Formula::And(fs.into_iter().map(eliminate_implications).collect()),
        Formula::Or(fs) => Formula::Or(fs.into_iter().map(eliminate_implications).collect()),
    }
}

/// Bring `f` into negation normal form: the result contains no [Formula::Not] and no
/// [Formula::Implies] nodes, negation only shows up as literal polarity.
pub fn push_negations(f: Formula) -> Formula {
    match f {
        Formula::Literal(_) => f,
        Formula::Not(inner) => negate(*inner),
        Formula::And(fs) => Formula::And(fs.into_iter().map(push_negations).collect()),
        Formula::Or(fs) => Formula::Or(fs.into_iter().map(push_negations).collect()),
        Formula::Implies(lhs, rhs) => Formula::Or(vec![negate(*lhs), push_negations(*rhs)]),
    }
}

// `(A & B) | C` => `(A | C) & (B | C)`: every clause of `lhs` merged with every clause of `rhs`.
fn cross(lhs: Vec<Vec<Literal>>, rhs: Vec<Vec<Literal>>) -> Vec<Vec<Literal>> {
    let mut acc = Vec::with_capacity(lhs.len() * rhs.len());
    for l in lhs.iter() {
        for r in rhs.iter() {
            let mut merged = l.clone();
            merged.extend(r.iter().cloned());
            acc.push(merged);
        }
    }
    acc
}

// The clauses of the conjunctive normal form of `f` as flat literal lists.
fn clause_lists(f: Formula) -> Vec<Vec<Literal>> {
    match f {
        Formula::Literal(lit) => vec![vec![lit]],
        Formula::And(fs) => fs.into_iter().flat_map(clause_lists).collect(),
        Formula::Or(fs) => fs
            .into_iter()
            .map(clause_lists)
            .fold(vec![Vec::new()], cross),
        Formula::Not(inner) => clause_lists(negate(*inner)),
        Formula::Implies(lhs, rhs) => clause_lists(Formula::Or(vec![negate(*lhs), *rhs])),
    }
}

fn clause_formula(mut lits: Vec<Literal>) -> Formula {
    if lits.len() == 1 {
        Formula::Literal(lits.remove(0))
    } else {
        Formula::Or(lits.into_iter().map(Formula::Literal).collect())
    }
}

/// Distribute `|` over `&` until `f` is a single literal, a single clause or a conjunction of
/// clauses. Nested disjunctions are merged into flat literal lists along the way.
pub fn distribute(f: Formula) -> Formula {
    let mut clauses = clause_lists(f);
    if clauses.len() == 1 {
        clause_formula(clauses.remove(0))
    } else {
        Formula::And(clauses.into_iter().map(clause_formula).collect())
    }
}

/// Convert `f` into conjunctive normal form. Formulas that already are in CNF are returned
/// unchanged.
pub fn to_cnf(f: Formula) -> Formula {
    if is_cnf(&f) {
        return f;
    }
    distribute(push_negations(eliminate_implications(f)))
}

fn into_clause(f: Formula) -> Clause {
    match f {
        Formula::Literal(lit) => Clause::from(lit),
        Formula::Or(fs) => Clause::new(
            fs.into_iter()
                .map(|f| match f {
                    Formula::Literal(lit) => lit,
                    other => panic!("expected a literal inside a clause, found {}", other),
                })
                .collect(),
        ),
        other => panic!("expected a clause, found {}", other),
    }
}

/// Turn a formula in conjunctive normal form into its clauses. Panics if `f` is not in CNF,
/// run [to_cnf] first.
pub fn extract_clauses(f: Formula) -> Vec<Clause> {
    match f {
        Formula::And(fs) => fs.into_iter().map(into_clause).collect(),
        other => vec![into_clause(other)],
    }
}

/// Convert `f` into CNF and extract its clauses.
pub fn clausify(f: Formula) -> Vec<Clause> {
    extract_clauses(to_cnf(f))
}
