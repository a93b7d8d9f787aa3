//! ## Problem Files
//! A problem file lists the queries first and the knowledge base second, each section preceded
//! by a line holding its length:
//! ```text
//! 1
//! H(Tom)
//! 2
//! A(x) => H(x)
//! A(Tom)
//! ```
//! The answer file holds one `TRUE` or `FALSE` line per query, in query order.

use std::{fs, io, path::Path, str::FromStr};

use log::info;
use thiserror::Error;

use crate::{
    clause::Literal,
    formula::Formula,
    parser::{ParseError, parse_formula, parse_literal},
    resolution::{Prover, ResourceLimitConfig, SearchResult},
};

#[derive(Error, Debug)]
pub enum ProblemError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: expected a count, found `{found}`")]
    BadCount { line: usize, found: String },

    #[error("expected {expected} {section} but the input ends after {found}")]
    MissingLines {
        section: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: {source}")]
    Parse { line: usize, source: ParseError },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    pub queries: Vec<Literal>,
    pub sentences: Vec<Formula>,
}

// Line cursor remembering the 1-based number of the last line handed out.
struct Lines<'a> {
    inner: std::str::Lines<'a>,
    line: usize,
}

impl<'a> Lines<'a> {
    fn next_line(&mut self) -> Option<&'a str> {
        let next = self.inner.next()?;
        self.line += 1;
        Some(next.trim())
    }

    fn count(&mut self, section: &'static str) -> Result<usize, ProblemError> {
        let Some(text) = self.next_line() else {
            return Err(ProblemError::MissingLines {
                section,
                expected: 1,
                found: 0,
            });
        };
        text.parse().map_err(|_| ProblemError::BadCount {
            line: self.line,
            found: text.to_string(),
        })
    }

    fn section<T>(
        &mut self,
        section: &'static str,
        parse: impl Fn(&str) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ProblemError> {
        let expected = self.count(section)?;
        let mut acc = Vec::with_capacity(expected);
        for found in 0..expected {
            let Some(text) = self.next_line() else {
                return Err(ProblemError::MissingLines {
                    section,
                    expected,
                    found,
                });
            };
            let item = parse(text).map_err(|source| ProblemError::Parse {
                line: self.line,
                source,
            })?;
            acc.push(item);
        }
        Ok(acc)
    }
}

impl Problem {
    pub fn parse(text: &str) -> Result<Self, ProblemError> {
        let mut lines = Lines {
            inner: text.lines(),
            line: 0,
        };
        let queries = lines.section("queries", parse_literal)?;
        let sentences = lines.section("sentences", parse_formula)?;
        Ok(Problem { queries, sentences })
    }

    pub fn read(path: impl AsRef<Path>) -> Result<Self, ProblemError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Build the knowledge base once and answer every query against its own copy of it.
    pub fn solve(&self, resource_config: &ResourceLimitConfig) -> Vec<SearchResult> {
        let mut prover = Prover::new(*resource_config);
        for sentence in self.sentences.iter() {
            prover.add_formula(sentence.clone());
        }
        info!(
            "Knowledge base holds {} clauses",
            prover.knowledge_base().len()
        );
        self.queries.iter().map(|query| prover.prove(query)).collect()
    }
}

impl FromStr for Problem {
    type Err = ProblemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Render one `TRUE`/`FALSE` line per result. Searches cut short by a resource limit count as
/// `FALSE`.
pub fn render_verdicts(results: &[SearchResult]) -> String {
    let mut out = String::new();
    for result in results {
        out.push_str(if result.is_entailed() { "TRUE" } else { "FALSE" });
        out.push('\n');
    }
    out
}

pub fn write_verdicts(
    path: impl AsRef<Path>,
    results: &[SearchResult],
) -> Result<(), ProblemError> {
    fs::write(path, render_verdicts(results))?;
    Ok(())
}
