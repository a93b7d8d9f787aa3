//! ## Formulas
//! The expression tree sentences are given in before clausification. Negating an atomic literal
//! flips its polarity directly instead of producing a [Formula::Not] node.

use std::fmt;

use crate::clause::Literal;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Formula {
    Literal(Literal),
    Not(Box<Formula>),
    And(Vec<Formula>),
    Or(Vec<Formula>),
    Implies(Box<Formula>, Box<Formula>),
}

impl Formula {
    pub fn lit(lit: Literal) -> Self {
        Formula::Literal(lit)
    }

    /// `~f`, flipping the polarity in place if `f` is a literal.
    pub fn not(f: Formula) -> Self {
        match f {
            Formula::Literal(lit) => Formula::Literal(lit.negate()),
            other => Formula::Not(Box::new(other)),
        }
    }

    pub fn and(lhs: Formula, rhs: Formula) -> Self {
        Formula::And(vec![lhs, rhs])
    }

    pub fn or(lhs: Formula, rhs: Formula) -> Self {
        Formula::Or(vec![lhs, rhs])
    }

    pub fn implies(lhs: Formula, rhs: Formula) -> Self {
        Formula::Implies(Box::new(lhs), Box::new(rhs))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Formula::Literal(_))
    }
}

impl From<Literal> for Formula {
    fn from(lit: Literal) -> Self {
        Formula::Literal(lit)
    }
}

fn write_joined(f: &mut fmt::Formatter, fs: &[Formula], sep: &str) -> fmt::Result {
    write!(
        f,
        "({})",
        fs.iter()
            .map(|t| t.to_string())
            .collect::<Vec<String>>()
            .join(sep)
    )
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Formula::Literal(lit) => write!(f, "{}", lit),
            Formula::Not(inner) => write!(f, "~{}", inner),
            Formula::And(fs) => write_joined(f, fs, " & "),
            Formula::Or(fs) => write_joined(f, fs, " | "),
            Formula::Implies(lhs, rhs) => write!(f, "({} => {})", lhs, rhs),
        }
    }
}
