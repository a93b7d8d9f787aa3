//! ## Knowledge Base
//! This module contains [KnowledgeBase], the clause store the prover works on. Clauses are
//! identified by the [ClauseId] they were inserted under and indexed by the predicate names they
//! mention so resolution partners can be found without scanning the whole store.

use rustc_hash::FxHashMap;

use crate::clause::Clause;

/// Identifier of a clause inside one [KnowledgeBase], stable for the lifetime of that base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClauseId(usize);

/// An append only set of clauses, unique up to variable renaming and literal order.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    clauses: Vec<Clause>,
    by_predicate: FxHashMap<String, Vec<ClauseId>>,
    // canonical form -> clause carrying it
    signatures: FxHashMap<Clause, ClauseId>,
}

impl KnowledgeBase {
    /// Create an empty knowledge base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `clause` unless a variant of it is already present. Returns the identifier of the
    /// new clause or `None` if nothing was inserted.
    pub fn insert(&mut self, clause: Clause) -> Option<ClauseId> {
        let signature = clause.canonical_form();
        if self.signatures.contains_key(&signature) {
            return None;
        }

        let id = ClauseId(self.clauses.len());
        for name in clause.predicate_names() {
            let ids = self.by_predicate.entry(name.to_string()).or_default();
            // Literals of the same predicate within one clause must not list it twice.
            if ids.last() != Some(&id) {
                ids.push(id);
            }
        }
        self.signatures.insert(signature, id);
        self.clauses.push(clause);
        Some(id)
    }

    /// Like [KnowledgeBase::insert] but returns the identifier of the already present variant
    /// if there is one.
    pub fn insert_or_get(&mut self, clause: Clause) -> ClauseId {
        match self.lookup(&clause) {
            Some(id) => id,
            None => match self.insert(clause) {
                Some(id) => id,
                None => unreachable!("lookup found no variant"),
            },
        }
    }

    /// The identifier of a stored variant of `clause`, if any.
    pub fn lookup(&self, clause: &Clause) -> Option<ClauseId> {
        self.signatures.get(&clause.canonical_form()).copied()
    }

    /// Get a clause by its identifier.
    pub fn get(&self, id: ClauseId) -> &Clause {
        &self.clauses[id.0]
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Identifiers of all clauses mentioning the predicate `name`, in insertion order.
    pub fn clauses_with_predicate(&self, name: &str) -> &[ClauseId] {
        self.by_predicate
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Identifiers of all clauses sharing at least one predicate name with `clause`, sorted and
    /// free of duplicates.
    pub fn candidates(&self, clause: &Clause) -> Vec<ClauseId> {
        let mut acc: Vec<ClauseId> = clause
            .predicate_names()
            .flat_map(|name| self.clauses_with_predicate(name).iter().copied())
            .collect();
        acc.sort_unstable();
        acc.dedup();
        acc
    }
}

#[cfg(test)]
mod test {
    use crate::clause::{Clause, Literal};

    use super::KnowledgeBase;

    fn rule() -> Clause {
        Clause::new(vec![
            Literal::mk_neg("A", vec!["x".into()]),
            Literal::mk_pos("H", vec!["x".into()]),
        ])
    }

    #[test]
    fn variants_are_inserted_once() {
        let mut kb = KnowledgeBase::new();
        let id = kb.insert(rule()).unwrap();

        let variant = Clause::new(vec![
            Literal::mk_pos("H", vec!["y1".into()]),
            Literal::mk_neg("A", vec!["y1".into()]),
        ]);
        assert_eq!(kb.lookup(&variant), Some(id));
        assert_eq!(kb.insert(variant.clone()), None);
        assert_eq!(kb.insert_or_get(variant), id);
        assert_eq!(kb.len(), 1);

        // Not a variant: the constant differs.
        let other = Clause::new(vec![
            Literal::mk_neg("A", vec!["Tom".into()]),
            Literal::mk_pos("H", vec!["Tom".into()]),
        ]);
        assert_eq!(kb.lookup(&other), None);
        assert_ne!(kb.insert_or_get(other), id);
        assert_eq!(kb.len(), 2);
    }

    #[test]
    fn predicate_index() {
        let mut kb = KnowledgeBase::new();
        let r = kb.insert(rule()).unwrap();
        let a = kb
            .insert(Clause::from(Literal::mk_pos("A", vec!["Tom".into()])))
            .unwrap();
        let b = kb
            .insert(Clause::new(vec![
                Literal::mk_pos("B", vec!["x".into()]),
                Literal::mk_pos("B", vec!["Tom".into(), "x".into()]),
            ]))
            .unwrap();

        assert_eq!(kb.clauses_with_predicate("A"), &[r, a]);
        assert_eq!(kb.clauses_with_predicate("H"), &[r]);
        assert_eq!(kb.clauses_with_predicate("B"), &[b]);
        assert!(kb.clauses_with_predicate("G").is_empty());

        let query = Clause::new(vec![
            Literal::mk_neg("H", vec!["Tom".into()]),
            Literal::mk_neg("A", vec!["Ann".into()]),
        ]);
        assert_eq!(kb.candidates(&query), vec![r, a]);
        assert_eq!(kb.get(a).to_string(), "A(Tom)");
    }

    #[test]
    fn clones_are_independent() {
        let mut kb = KnowledgeBase::new();
        assert!(kb.is_empty());
        kb.insert(rule());
        let mut session = kb.clone();
        session.insert(Clause::from(Literal::mk_pos("A", vec!["Tom".into()])));
        assert_eq!(kb.len(), 1);
        assert_eq!(session.len(), 2);
        assert!(!kb.is_empty());
    }
}
