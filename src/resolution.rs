//! ## Resolution
//! This module contains the binary resolution rule [resolve] and the saturation loop built on
//! top of it. [search_proof] answers a single query against a knowledge base by refutation:
//! the negated query is added to a private copy of the base and resolvents are derived breadth
//! first until the empty clause shows up, nothing new can be derived or the resource budget runs
//! out. [Prover] bundles a knowledge base with its renaming state for repeated querying.

use std::time::{Duration, Instant};

use log::{debug, info};
use memory_stats::memory_stats;

use crate::{
    clause::{Clause, Literal},
    clause_queue::ClauseQueue,
    cnf::clausify,
    formula::Formula,
    knowledge_base::{ClauseId, KnowledgeBase},
    simplifier::simplify,
    standardize::VariableRenamer,
    subst::Substitutable,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceLimitConfig {
    pub duration: Option<Duration>,
    /// Upper bound on the resident memory of the process in bytes.
    pub memory_limit: Option<usize>,
}

impl Default for ResourceLimitConfig {
    fn default() -> Self {
        ResourceLimitConfig {
            duration: Some(Duration::from_secs(30)),
            memory_limit: None,
        }
    }
}

impl ResourceLimitConfig {
    /// A time budget of `secs` seconds and an optional memory limit given in MiB. Limits too
    /// large to count in bytes saturate.
    pub fn from_secs_and_mib(secs: u64, memory_limit_mib: Option<usize>) -> Self {
        ResourceLimitConfig {
            duration: Some(Duration::from_secs(secs)),
            memory_limit: memory_limit_mib.map(|mib| mib.saturating_mul(1024 * 1024)),
        }
    }
}

struct ResourceLimits {
    time_limit: Option<Instant>,
    memory_limit: Option<usize>,
}

impl ResourceLimits {
    fn of_config(config: &ResourceLimitConfig) -> Self {
        let time_limit = config.duration.map(|dur| Instant::now() + dur);
        let memory_limit = config.memory_limit;
        ResourceLimits {
            time_limit,
            memory_limit,
        }
    }

    fn timed_out(&self) -> bool {
        match self.time_limit {
            Some(time_limit) => Instant::now() >= time_limit,
            None => false,
        }
    }

    fn exhausted(&self) -> Option<UnknownReason> {
        if self.timed_out() {
            return Some(UnknownReason::Timeout);
        }

        if let Some(memory_limit) = self.memory_limit {
            if let Some(stats) = memory_stats() {
                if memory_limit < stats.physical_mem {
                    return Some(UnknownReason::OutOfMemory);
                }
            }
        }

        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnknownReason {
    Timeout,
    OutOfMemory,
}

/// Outcome of a single query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchResult {
    /// The empty clause was derived, the query follows from the knowledge base.
    Proved,
    /// Every resolvent has been derived without reaching a contradiction.
    Exhausted,
    /// The search was cut short by a resource limit. This says nothing about the query.
    Unknown(UnknownReason),
}

impl SearchResult {
    /// The verdict reported to the outside world, only [SearchResult::Proved] counts as entailed.
    pub fn is_entailed(&self) -> bool {
        matches!(self, SearchResult::Proved)
    }
}

/// The outcome of resolving two clauses with each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveResult {
    /// Whether the empty clause was derived. If so `resolvents` is empty.
    pub contradiction: bool,
    pub resolvents: Vec<Clause>,
}

/// Compute all binary resolvents of `c1` and `c2`. The clauses must not share variables.
///
/// Every pair of complementary literals whose arguments unify yields one resolvent, which is
/// standardized through `renamer` and simplified before being collected. Tautological resolvents
/// are dropped. As soon as a pair yields the empty clause the search for further resolvents is
/// abandoned and a contradiction reported.
pub fn resolve(c1: &Clause, c2: &Clause, renamer: &mut VariableRenamer) -> ResolveResult {
    let mut resolvents = Vec::new();
    for (l1_id, l1) in c1.iter() {
        for (l2_id, l2) in c2.iter() {
            if !l1.is_complementary_to(l2) {
                continue;
            }
            let Some(subst) = l1.unify(l2) else {
                continue;
            };

            let literals = c1
                .literals_except(l1_id)
                .chain(c2.literals_except(l2_id))
                .map(|lit| lit.subst_with(&subst))
                .collect();
            let resolvent = renamer.standardize(Clause::new(literals));
            let Some(resolvent) = simplify(resolvent) else {
                continue;
            };

            if resolvent.is_empty() {
                debug!("Contradiction between {} and {}", c1, c2);
                return ResolveResult {
                    contradiction: true,
                    resolvents: Vec::new(),
                };
            }
            resolvents.push(resolvent);
        }
    }
    ResolveResult {
        contradiction: false,
        resolvents,
    }
}

struct SearchState {
    kb: KnowledgeBase,
    renamer: VariableRenamer,
    worklist: ClauseQueue,
    resource_limits: ResourceLimits,
}

impl SearchState {
    fn run(mut self) -> SearchResult {
        while let Some(given_id) = self.worklist.pop() {
            let given = self.kb.get(given_id).clone();
            info!("Working clause: {}", given);

            let mut derived = Vec::new();
            for partner_id in self.kb.candidates(&given) {
                if partner_id == given_id {
                    continue;
                }
                if self.resource_limits.timed_out() {
                    return SearchResult::Unknown(UnknownReason::Timeout);
                }
                let result = resolve(&given, self.kb.get(partner_id), &mut self.renamer);
                if result.contradiction {
                    info!(
                        "Contradiction: {} against {}",
                        given,
                        self.kb.get(partner_id)
                    );
                    return SearchResult::Proved;
                }
                derived.extend(result.resolvents);
            }

            for clause in derived {
                if let Some(id) = self.kb.insert(clause) {
                    info!("Derived clause: {}", self.kb.get(id));
                    self.worklist.push(id);
                }
            }

            if let Some(reason) = self.resource_limits.exhausted() {
                return SearchResult::Unknown(reason);
            }
        }
        SearchResult::Exhausted
    }
}

/// Try to refute `¬query` against `kb`. Neither `kb` nor `renamer` are modified, the search
/// works on private copies of both.
pub fn search_proof(
    kb: &KnowledgeBase,
    renamer: &VariableRenamer,
    query: &Literal,
    resource_config: &ResourceLimitConfig,
) -> SearchResult {
    let resource_limits = ResourceLimits::of_config(resource_config);
    let mut kb = kb.clone();
    let mut renamer = renamer.clone();

    let negated = renamer.standardize(Clause::from(query.clone().negate()));
    info!("Negated query: {}", negated);
    let negated_id = kb.insert_or_get(negated);

    let mut worklist = ClauseQueue::new();
    worklist.push(negated_id);

    let state = SearchState {
        kb,
        renamer,
        worklist,
        resource_limits,
    };
    state.run()
}

/// A knowledge base together with the renaming state its clauses were standardized with.
#[derive(Debug, Clone, Default)]
pub struct Prover {
    kb: KnowledgeBase,
    renamer: VariableRenamer,
    resource_config: ResourceLimitConfig,
}

impl Prover {
    pub fn new(resource_config: ResourceLimitConfig) -> Self {
        Prover {
            kb: KnowledgeBase::new(),
            renamer: VariableRenamer::new(),
            resource_config,
        }
    }

    /// Clausify `formula` and add its clauses. Returns the identifiers of the clauses that were
    /// actually new.
    pub fn add_formula(&mut self, formula: Formula) -> Vec<ClauseId> {
        info!("Adding sentence: {}", formula);
        clausify(formula)
            .into_iter()
            .filter_map(|clause| self.add_clause(clause))
            .collect()
    }

    /// Standardize and simplify `clause` and add it unless it is a tautology or a variant of a
    /// known clause.
    pub fn add_clause(&mut self, clause: Clause) -> Option<ClauseId> {
        let clause = simplify(self.renamer.standardize(clause))?;
        let id = self.kb.insert(clause)?;
        info!("Knowledge base clause: {}", self.kb.get(id));
        Some(id)
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn prove(&self, query: &Literal) -> SearchResult {
        let result = search_proof(&self.kb, &self.renamer, query, &self.resource_config);
        info!("Query {}: {:?}", query, result);
        result
    }

    pub fn entails(&self, query: &Literal) -> bool {
        self.prove(query).is_entailed()
    }
}
