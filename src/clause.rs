//! ## Clauses
//! This module provides the flat first order literals and clauses the prover works on. The key
//! exported data structures are:
//! - [Symbol] for arguments, which are either constants or variables
//! - [Literal] for representing signed predicate applications
//! - [Clause] for representing disjunctions of literals

use std::fmt;

use rustc_hash::FxHashMap;

/// An argument symbol. Symbols starting with a lowercase letter are variables, everything else
/// is a constant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Check whether the symbol is a variable, i.e. starts with a lowercase letter.
    pub fn is_variable(&self) -> bool {
        self.0.chars().next().is_some_and(char::is_lowercase)
    }

    /// Check whether the symbol is a constant.
    pub fn is_constant(&self) -> bool {
        !self.is_variable()
    }

    /// The name with any numeric suffix added by renaming stripped, `x12` has base name `x`.
    pub fn base_name(&self) -> &str {
        self.0.trim_end_matches(|c: char| c.is_ascii_digit())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Whether a literal is positive `P(..)` or negative `~P(..)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Polarity {
    Pos,
    Neg,
}

impl Polarity {
    /// Flip the polarity to the other one.
    pub fn negate(&self) -> Polarity {
        match self {
            Polarity::Pos => Polarity::Neg,
            Polarity::Neg => Polarity::Pos,
        }
    }
}

/// A literal is a predicate name applied to an ordered list of [Symbol] with a polarity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    name: String,
    args: Vec<Symbol>,
    polarity: Polarity,
}

impl Literal {
    pub fn new(name: impl Into<String>, args: Vec<Symbol>, polarity: Polarity) -> Self {
        Self {
            name: name.into(),
            args,
            polarity,
        }
    }

    /// Create the positive literal `name(args)`.
    pub fn mk_pos(name: impl Into<String>, args: Vec<Symbol>) -> Self {
        Self::new(name, args, Polarity::Pos)
    }

    /// Create the negative literal `~name(args)`.
    pub fn mk_neg(name: impl Into<String>, args: Vec<Symbol>) -> Self {
        Self::new(name, args, Polarity::Neg)
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_args(&self) -> &[Symbol] {
        &self.args
    }

    pub fn get_pol(&self) -> Polarity {
        self.polarity
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }

    pub fn is_pos(&self) -> bool {
        self.polarity == Polarity::Pos
    }

    pub fn is_neg(&self) -> bool {
        self.polarity == Polarity::Neg
    }

    /// Flip the polarity of the literal.
    pub fn negate(self) -> Self {
        Self {
            name: self.name,
            args: self.args,
            polarity: self.polarity.negate(),
        }
    }

    /// Check whether `self` and `other` are candidates for resolving against each other: same
    /// name, same arity and opposite polarity.
    pub fn is_complementary_to(&self, other: &Self) -> bool {
        self.polarity == other.polarity.negate() && self.same_predicate(other)
    }

    /// Check whether `self` and `other` share name and arity.
    pub fn same_predicate(&self, other: &Self) -> bool {
        self.name == other.name && self.arity() == other.arity()
    }

    /// Iterator over the variable arguments of the literal, repetitions included.
    pub fn variables(&self) -> impl Iterator<Item = &Symbol> {
        self.args.iter().filter(|arg| arg.is_variable())
    }

    pub fn is_ground(&self) -> bool {
        self.variables().next().is_none()
    }

    pub(crate) fn map_args(self, f: impl FnMut(Symbol) -> Symbol) -> Self {
        Self {
            name: self.name,
            args: self.args.into_iter().map(f).collect(),
            polarity: self.polarity,
        }
    }

    // Sort key that ignores variable names so alphabetic variants end up in the same order.
    fn shape_key(&self) -> (&str, Polarity, Vec<Option<&str>>) {
        let args = self
            .args
            .iter()
            .map(|arg| arg.is_constant().then(|| arg.name()))
            .collect();
        (&self.name, self.polarity, args)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_neg() {
            write!(f, "~")?;
        }
        write!(f, "{}(", self.name)?;
        for (idx, arg) in self.args.iter().enumerate() {
            if idx > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}

/// A unique identifier for a literal within a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LiteralId(pub usize);

/// A disjunction of [Literal]. Clauses compare and hash structurally, the empty clause stands for
/// a contradiction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clause {
    pub(crate) literals: Vec<Literal>,
}

impl Clause {
    /// Create a new clause containing the literals from `vec`.
    pub fn new(vec: Vec<Literal>) -> Self {
        Self { literals: vec }
    }

    /// The empty clause.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Get how many literals are in the clause, counting duplicates, this operation is `O(1)`.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Check if the clause is empty, this operation is `O(1)`.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Check if the clause is unit, this operation is `O(1)`.
    pub fn is_unit(&self) -> bool {
        self.len() == 1
    }

    /// Obtain a literal from the clause by index.
    pub fn get_literal(&self, literal_id: LiteralId) -> &Literal {
        &self.literals[literal_id.0]
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn into_literals(self) -> Vec<Literal> {
        self.literals
    }

    /// Obtain an iterator over the literals in the clause.
    pub fn iter(&self) -> impl Iterator<Item = (LiteralId, &Literal)> {
        self.literals
            .iter()
            .enumerate()
            .map(|(idx, lit)| (LiteralId(idx), lit))
    }

    /// Obtain an iterator over the literals after `id` in the clause.
    pub fn iter_after(&self, id: LiteralId) -> impl Iterator<Item = (LiteralId, &Literal)> {
        self.iter().skip(id.0 + 1)
    }

    /// Clone every literal except the one at `skip`.
    pub fn literals_except(&self, skip: LiteralId) -> impl Iterator<Item = Literal> + '_ {
        self.iter()
            .filter(move |(id, _)| *id != skip)
            .map(|(_, lit)| lit.clone())
    }

    /// Iterator over all variable occurrences in the clause in order of appearance.
    pub fn variables(&self) -> impl Iterator<Item = &Symbol> {
        self.literals.iter().flat_map(Literal::variables)
    }

    /// Iterator over the predicate names used in this clause, may contain duplicates.
    pub fn predicate_names(&self) -> impl Iterator<Item = &str> {
        self.literals.iter().map(Literal::get_name)
    }

    /// A representative of this clause up to variable renaming and literal order. Two clauses
    /// that are alphabetic variants of each other share the same canonical form.
    pub fn canonical_form(&self) -> Clause {
        let mut literals: Vec<&Literal> = self.literals.iter().collect();
        literals.sort_by(|lhs, rhs| lhs.shape_key().cmp(&rhs.shape_key()));

        let mut renaming: FxHashMap<&Symbol, Symbol> = FxHashMap::default();
        let literals = literals
            .into_iter()
            .map(|lit| {
                let args = lit
                    .args
                    .iter()
                    .map(|arg| {
                        if arg.is_variable() {
                            let next = renaming.len();
                            renaming
                                .entry(arg)
                                .or_insert_with(|| Symbol::new(format!("v{}", next)))
                                .clone()
                        } else {
                            arg.clone()
                        }
                    })
                    .collect();
                Literal::new(lit.name.clone(), args, lit.polarity)
            })
            .collect();
        Clause::new(literals)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "⊥");
        }
        for (id, lit) in self.iter() {
            if id.0 > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{}", lit)?;
        }
        Ok(())
    }
}

impl From<Literal> for Clause {
    fn from(lit: Literal) -> Self {
        Clause::new(vec![lit])
    }
}
