//! Property-based tests for clausification, unification and renaming using proptest.

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use crate::{
    clause::{Clause, Literal, Symbol},
    cnf::{clausify, is_cnf, to_cnf},
    formula::Formula,
    simplifier::simplify,
    standardize::VariableRenamer,
    subst::Substitutable,
    trivial::is_tautology,
};

/// Formula description over the propositional atoms `P0(x)` .. `P3(x)`.
#[derive(Debug, Clone)]
enum FormulaDesc {
    Atom(u8, bool),
    Not(Box<FormulaDesc>),
    And(Vec<FormulaDesc>),
    Or(Vec<FormulaDesc>),
    Implies(Box<FormulaDesc>, Box<FormulaDesc>),
}

fn arb_formula_desc(max_depth: u32) -> BoxedStrategy<FormulaDesc> {
    let atom = (0..4u8, any::<bool>()).prop_map(|(idx, pos)| FormulaDesc::Atom(idx, pos));
    if max_depth == 0 {
        atom.boxed()
    } else {
        let sub = arb_formula_desc(max_depth - 1);
        prop_oneof![
            3 => atom,
            1 => sub.clone().prop_map(|f| FormulaDesc::Not(Box::new(f))),
            2 => proptest::collection::vec(sub.clone(), 2..=3).prop_map(FormulaDesc::And),
            2 => proptest::collection::vec(sub.clone(), 2..=3).prop_map(FormulaDesc::Or),
            1 => (sub.clone(), sub)
                .prop_map(|(lhs, rhs)| FormulaDesc::Implies(Box::new(lhs), Box::new(rhs))),
        ]
        .boxed()
    }
}

fn build_formula(desc: &FormulaDesc) -> Formula {
    match desc {
        FormulaDesc::Atom(idx, pos) => {
            let name = format!("P{}", idx);
            let args = vec![Symbol::from("x")];
            if *pos {
                Formula::lit(Literal::mk_pos(name, args))
            } else {
                Formula::lit(Literal::mk_neg(name, args))
            }
        }
        FormulaDesc::Not(inner) => Formula::Not(Box::new(build_formula(inner))),
        FormulaDesc::And(fs) => Formula::And(fs.iter().map(build_formula).collect()),
        FormulaDesc::Or(fs) => Formula::Or(fs.iter().map(build_formula).collect()),
        FormulaDesc::Implies(lhs, rhs) => {
            Formula::implies(build_formula(lhs), build_formula(rhs))
        }
    }
}

// Truth value of the atom `Pi(x)` is bit `i` of `valuation`.
fn eval_literal(lit: &Literal, valuation: u8) -> bool {
    let idx: u8 = lit.get_name()[1..].parse().unwrap();
    let atom = valuation & (1 << idx) != 0;
    atom == lit.is_pos()
}

fn eval(f: &Formula, valuation: u8) -> bool {
    match f {
        Formula::Literal(lit) => eval_literal(lit, valuation),
        Formula::Not(inner) => !eval(inner, valuation),
        Formula::And(fs) => fs.iter().all(|f| eval(f, valuation)),
        Formula::Or(fs) => fs.iter().any(|f| eval(f, valuation)),
        Formula::Implies(lhs, rhs) => !eval(lhs, valuation) || eval(rhs, valuation),
    }
}

fn arb_symbol() -> impl Strategy<Value = Symbol> {
    prop_oneof![
        prop::sample::select(vec!["x", "y", "z"]),
        prop::sample::select(vec!["Tom", "Ann"]),
    ]
    .prop_map(Symbol::from)
}

fn arb_literal(arity: usize) -> impl Strategy<Value = Literal> {
    (
        0..2u8,
        proptest::collection::vec(arb_symbol(), arity),
        any::<bool>(),
    )
        .prop_map(|(name, args, pos)| {
            let name = format!("Q{}", name);
            if pos {
                Literal::mk_pos(name, args)
            } else {
                Literal::mk_neg(name, args)
            }
        })
}

fn arb_clause() -> impl Strategy<Value = Clause> {
    proptest::collection::vec(arb_literal(2), 0..4).prop_map(Clause::new)
}

fn variables(clause: &Clause) -> FxHashSet<Symbol> {
    clause.variables().cloned().collect()
}

// =========================================================================
// Clausification properties
// =========================================================================

proptest! {
    /// The converter always produces a conjunction of clauses.
    #[test]
    fn cnf_shape(desc in arb_formula_desc(3)) {
        let cnf = to_cnf(build_formula(&desc));
        prop_assert!(is_cnf(&cnf), "not in CNF: {}", cnf);
    }

    /// Converting twice changes nothing.
    #[test]
    fn cnf_idempotence(desc in arb_formula_desc(3)) {
        let cnf = to_cnf(build_formula(&desc));
        prop_assert_eq!(to_cnf(cnf.clone()), cnf);
    }

    /// The conversion preserves the truth value under every valuation of the atoms.
    #[test]
    fn cnf_equivalence(desc in arb_formula_desc(3), valuation in 0..16u8) {
        let formula = build_formula(&desc);
        let expected = eval(&formula, valuation);
        let clauses = clausify(formula);
        let actual = clauses
            .iter()
            .all(|clause| clause.literals().iter().any(|lit| eval_literal(lit, valuation)));
        prop_assert_eq!(actual, expected);
    }
}

// =========================================================================
// Unification properties
// =========================================================================

proptest! {
    /// Soundness: if unify(l1, l2) = σ, then l1σ and l2σ have the same arguments
    #[test]
    fn unification_soundness(
        (l1, l2) in (1..4usize).prop_flat_map(|arity| (arb_literal(arity), arb_literal(arity)))
    ) {
        let l2 = Literal::new(l1.get_name(), l2.get_args().to_vec(), l2.get_pol());
        if let Some(sigma) = l1.unify(&l2) {
            let l1_sigma = l1.clone().subst_with(&sigma);
            let l2_sigma = l2.clone().subst_with(&sigma);
            prop_assert_eq!(l1_sigma.get_args(), l2_sigma.get_args());
        }
    }

    /// A literal always unifies with itself without binding anything.
    #[test]
    fn unification_identity(lit in arb_literal(3)) {
        let sigma = lit.unify(&lit);
        prop_assert_eq!(sigma.map(|sigma| sigma.is_nop()), Some(true));
    }
}

// =========================================================================
// Renaming and simplification properties
// =========================================================================

proptest! {
    /// Clauses standardized by the same renamer never share a variable.
    #[test]
    fn standardized_clauses_are_disjoint(clauses in proptest::collection::vec(arb_clause(), 1..6)) {
        let mut renamer = VariableRenamer::new();
        let renamed: Vec<Clause> = clauses
            .into_iter()
            .map(|clause| renamer.standardize(clause))
            .collect();
        for (idx, c1) in renamed.iter().enumerate() {
            for c2 in renamed[idx + 1..].iter() {
                prop_assert!(variables(c1).is_disjoint(&variables(c2)));
            }
        }
    }

    /// Simplification only ever removes literals and never keeps a tautology.
    #[test]
    fn simplification_shrinks(clause in arb_clause()) {
        match simplify(clause.clone()) {
            Some(simplified) => {
                prop_assert!(!is_tautology(&simplified));
                prop_assert!(simplified.len() <= clause.len());
                for lit in simplified.literals() {
                    prop_assert!(clause.literals().contains(lit));
                }
            }
            None => prop_assert!(is_tautology(&clause)),
        }
    }
}
