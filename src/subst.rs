//! ## Substitutions
//! This module contains an implementation of substitutions on flat first order constructs, the
//! key things exposed are:
//! - [Substitution] which is the representation of a substitution, mapping some variables to new
//!   symbols to replace them with.
//! - [Substitutable] which may be implemented for types that have some notion of substitution.

use rustc_hash::FxHashMap;

use crate::clause::{Clause, Literal, Symbol};

/// A substitution mapping variables to symbols. The map is kept idempotent: no symbol on the
/// right hand side is itself bound, so applying it once is enough.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    map: FxHashMap<Symbol, Symbol>,
}

impl Substitution {
    /// Create a new empty substitution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `var` with `symbol` in the substitution.
    pub fn insert(&mut self, var: Symbol, symbol: Symbol) {
        debug_assert!(var.is_variable(), "cannot bind constant {}", var);
        self.map.insert(var, symbol);
    }

    /// Obtain the symbol associated with `var` if it exists.
    pub fn get(&self, var: &Symbol) -> Option<&Symbol> {
        self.map.get(var)
    }

    /// Return `true` if the substitution is an identity substitution.
    pub fn is_nop(&self) -> bool {
        self.map.is_empty()
    }

    /// Check whether every binding maps a variable to another variable, i.e. the substitution
    /// never commits a variable to a constant. Holds trivially for the identity.
    pub fn binds_only_variables(&self) -> bool {
        self.map.values().all(Symbol::is_variable)
    }

    /// Compose the current substitution with `{ var |-> symbol }`. `var` must be unbound and
    /// `symbol` must not be bound in `self`.
    pub fn compose_binding(&mut self, var: Symbol, symbol: Symbol) {
        debug_assert!(self.get(&var).is_none());
        for value in self.map.values_mut() {
            if *value == var {
                *value = symbol.clone();
            }
        }
        self.insert(var, symbol);
    }
}

/// A type that has a substitution operation on itself.
pub trait Substitutable {
    /// Apply `subst` to `self`.
    fn subst_with(self, subst: &Substitution) -> Self;
}

impl Substitutable for Symbol {
    fn subst_with(self, subst: &Substitution) -> Self {
        match subst.get(&self) {
            Some(replacement) => replacement.clone(),
            None => self,
        }
    }
}

impl Substitutable for Literal {
    /// Apply `subst` to every argument of the literal.
    fn subst_with(self, subst: &Substitution) -> Self {
        if subst.is_nop() {
            self
        } else {
            self.map_args(|arg| arg.subst_with(subst))
        }
    }
}

impl Substitutable for Clause {
    fn subst_with(self, subst: &Substitution) -> Self {
        if subst.is_nop() {
            self
        } else {
            Clause::new(
                self.literals
                    .into_iter()
                    .map(|lit| lit.subst_with(subst))
                    .collect(),
            )
        }
    }
}
