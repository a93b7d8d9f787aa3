//! ## Literal Unification
//! This module implements unification of flat literals, the arguments of which are only ever
//! constants or variables. The key function is [Literal::unify].
//!
//! Arguments are compared left to right against the bindings collected so far:
//! - a variable meeting a constant is bound to it, unless it is already bound to something else
//! - two variables that are both bound must be bound to the same symbol
//! - if only one of two variables is bound, the other one receives the same binding
//! - two unbound variables are identified by binding the first to the second
//!
//! A variable already bound to another variable therefore does not accept a constant later on,
//! even where a more general unifier would exist.
//!
//! There is no occurs check. With flat arguments a binding can never contain the variable it
//! binds, and [Substitution::compose_binding] keeps the bindings idempotent, so no cyclic
//! substitution can arise.

use log::debug;

use crate::{
    clause::{Literal, Symbol},
    subst::Substitution,
};

fn bind_constant(subst: &mut Substitution, var: &Symbol, constant: &Symbol) -> bool {
    match subst.get(var) {
        Some(bound) => bound == constant,
        None => {
            subst.compose_binding(var.clone(), constant.clone());
            true
        }
    }
}

fn bind_variables(subst: &mut Substitution, lhs: &Symbol, rhs: &Symbol) -> bool {
    match (subst.get(lhs).cloned(), subst.get(rhs).cloned()) {
        (Some(l), Some(r)) => l == r,
        (Some(l), None) => {
            if l != *rhs {
                subst.compose_binding(rhs.clone(), l);
            }
            true
        }
        (None, Some(r)) => {
            if r != *lhs {
                subst.compose_binding(lhs.clone(), r);
            }
            true
        }
        (None, None) => {
            subst.compose_binding(lhs.clone(), rhs.clone());
            true
        }
    }
}

impl Literal {
    /// Try to unify the arguments of `self` and `other` position by position, returning
    /// `Some(subst)` on success and `None` otherwise.
    ///
    /// The caller is responsible for only pairing literals with the same predicate name, the
    /// polarity is not looked at. Literals of different arity are a caller bug and panic.
    pub fn unify(&self, other: &Self) -> Option<Substitution> {
        assert_eq!(
            self.arity(),
            other.arity(),
            "attempted to unify {} with {} of different arity",
            self,
            other
        );
        debug_assert_eq!(self.get_name(), other.get_name());
        debug!("Unifying {} with {}", self, other);

        if self.get_args() == other.get_args() {
            return Some(Substitution::new());
        }

        let mut subst = Substitution::new();
        for (lhs, rhs) in self.get_args().iter().zip(other.get_args()) {
            if lhs == rhs {
                continue;
            }
            let ok = match (lhs.is_variable(), rhs.is_variable()) {
                (false, false) => false,
                (true, false) => bind_constant(&mut subst, lhs, rhs),
                (false, true) => bind_constant(&mut subst, rhs, lhs),
                (true, true) => bind_variables(&mut subst, lhs, rhs),
            };
            if !ok {
                debug!("Unification failed on {} vs {}", lhs, rhs);
                return None;
            }
        }
        debug!("Unification succeeded with {:?}", subst);
        Some(subst)
    }
}
