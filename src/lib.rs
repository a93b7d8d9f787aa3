//! # Refute
//! This library contains a small first-order resolution refutation prover over function free
//! literals. Sentences are converted into clauses by [cnf], stored in a
//! [knowledge_base::KnowledgeBase] and queries are answered by [resolution::search_proof], which
//! tries to derive the empty clause from the negated query. Additionally [parser] and [problem]
//! read the textual problem format into our internal representation.

pub mod clause;
pub mod clause_queue;
pub mod cnf;
pub mod formula;
pub mod knowledge_base;
pub mod parser;
pub mod problem;
pub mod resolution;
pub mod simplifier;
pub mod standardize;
pub mod subst;
pub mod trivial;
pub mod unify;

#[cfg(test)]
mod proptest_tests;
