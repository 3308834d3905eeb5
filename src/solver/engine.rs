//! The solver: node consistency, AC-3 propagation, and backtracking search
//! over a [`Model`]'s constraint graph.

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::{
    error::{Error, Result, SolveError},
    model::{Model, VariableId},
    solver::{
        chars_match,
        heuristics::{
            value::{LeastConstrainingValue, ValueOrderingHeuristic},
            variable::{MinimumRemainingValues, VariableSelectionHeuristic},
        },
        stats::SearchStats,
        work_list::WorkList,
        Assignment, Domains, Word,
    },
};

/// A backtracking CSP solver for one puzzle.
///
/// The solver owns the mutable state of a solve: the per-variable domains and
/// the running [`SearchStats`]. The constraint graph itself is shared and
/// immutable. Domains only ever shrink; a solve runs synchronously to
/// completion or exhaustion.
///
/// The pipeline is the classic one: [`Solver::enforce_node_consistency`]
/// drops words of the wrong length, [`Solver::ac3`] propagates the overlap
/// constraints to a fixpoint, and [`Solver::solve`] finishes with a
/// backtracking search ordered by the injected heuristics (by default
/// minimum-remaining-values and least-constraining-value).
pub struct Solver {
    model: Arc<Model>,
    domains: Domains,
    variable_heuristic: Box<dyn VariableSelectionHeuristic>,
    value_heuristic: Box<dyn ValueOrderingHeuristic>,
    stats: SearchStats,
}

impl Solver {
    /// Creates a solver with the default heuristics, seeding every variable's
    /// domain with the full word list.
    ///
    /// Words are normalized to ASCII uppercase and deduplicated. A word with
    /// non-ASCII characters is rejected, since overlap checks compare single
    /// bytes.
    pub fn new<S: AsRef<str>>(model: Arc<Model>, words: &[S]) -> Result<Self> {
        Self::with_heuristics(
            model,
            words,
            Box::new(MinimumRemainingValues),
            Box::new(LeastConstrainingValue),
        )
    }

    /// Creates a solver with caller-chosen variable and value heuristics.
    pub fn with_heuristics<S: AsRef<str>>(
        model: Arc<Model>,
        words: &[S],
        variable_heuristic: Box<dyn VariableSelectionHeuristic>,
        value_heuristic: Box<dyn ValueOrderingHeuristic>,
    ) -> Result<Self> {
        let union_domain = normalize(words)?;
        let domains: Domains = model.ids().map(|id| (id, union_domain.clone())).collect();
        Ok(Self {
            model,
            domains,
            variable_heuristic,
            value_heuristic,
            stats: SearchStats::default(),
        })
    }

    /// Replaces the candidate set of a single variable, for callers that want
    /// per-slot word lists rather than one shared union domain.
    pub fn set_domain<S: AsRef<str>>(&mut self, var: VariableId, words: &[S]) -> Result<()> {
        if self.model.variable(var).is_none() {
            return Err(Error::UnknownVariable(var));
        }
        let domain = normalize(words)?;
        self.domains.insert(var, domain);
        Ok(())
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn domains(&self) -> &Domains {
        &self.domains
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Removes from every domain the words whose length does not fit the
    /// slot. Idempotent: a second run finds nothing left to remove.
    pub fn enforce_node_consistency(&mut self) {
        for id in self.model.ids() {
            let length = self.model.variables()[id as usize].length;
            let Some(domain) = self.domains.get(&id) else {
                continue;
            };
            let before = domain.len();
            let filtered: im::HashSet<Word> = domain
                .iter()
                .filter(|word| word.len() == length)
                .cloned()
                .collect();
            let removed = before - filtered.len();
            if removed > 0 {
                self.stats.node_consistency_prunings += removed as u64;
                self.domains.insert(id, filtered);
            }
        }
        debug!(
            prunings = self.stats.node_consistency_prunings,
            "node consistency enforced"
        );
    }

    /// Makes `x` arc-consistent with `y`: removes from `domain(x)` every word
    /// with no agreeing partner in `domain(y)` at the overlap position.
    /// Returns whether anything was removed.
    ///
    /// If `x` and `y` do not overlap there is nothing to revise.
    pub fn revise(&mut self, x: VariableId, y: VariableId) -> bool {
        self.stats.revise_calls += 1;
        let Some(overlap) = self.model.overlap(x, y) else {
            return false;
        };
        let (Some(x_domain), Some(y_domain)) = (self.domains.get(&x), self.domains.get(&y))
        else {
            return false;
        };

        let before = x_domain.len();
        let revised: im::HashSet<Word> = x_domain
            .iter()
            .filter(|word| {
                y_domain
                    .iter()
                    .any(|partner| chars_match(word, overlap.index_a, partner, overlap.index_b))
            })
            .cloned()
            .collect();

        let removed = before - revised.len();
        if removed == 0 {
            return false;
        }
        self.stats.ac3_prunings += removed as u64;
        self.domains.insert(x, revised);
        true
    }

    /// Runs AC-3 seeded with every arc in the constraint graph. Returns
    /// `false` if some domain was emptied (the puzzle is unsatisfiable under
    /// the current domains), `true` once all arcs are consistent.
    pub fn ac3(&mut self) -> bool {
        let arcs: Vec<_> = self.model.arcs().to_vec();
        self.ac3_from(arcs)
    }

    /// Runs AC-3 seeded with the given arcs only. Revising `x` against `y`
    /// re-enqueues `(neighbour, x)` for every other neighbour of `x`, since a
    /// smaller `domain(x)` can invalidate their consistency.
    pub fn ac3_from(&mut self, arcs: impl IntoIterator<Item = (VariableId, VariableId)>) -> bool {
        let mut worklist = WorkList::new();
        for arc in arcs {
            worklist.push_back(arc);
        }
        debug!(seed_arcs = worklist.len(), "starting AC-3");

        while let Some((x, y)) = worklist.pop_front() {
            if self.revise(x, y) {
                let x_empty = self.domains.get(&x).map(|d| d.is_empty()).unwrap_or(true);
                if x_empty {
                    debug!(variable = x, "AC-3 emptied a domain");
                    return false;
                }
                for &neighbour in self.model.neighbours(x) {
                    if neighbour != y {
                        worklist.push_back((neighbour, x));
                    }
                }
            }
        }
        true
    }

    /// Checks whether a partial assignment violates anything it is in a
    /// position to violate: duplicate words, wrong lengths, or a disagreement
    /// at the overlap of two assigned neighbours.
    pub fn consistent(&self, assignment: &Assignment) -> bool {
        let mut seen = std::collections::HashSet::new();
        for (&var, word) in assignment {
            if !seen.insert(word.as_str()) {
                return false;
            }
            if word.len() != self.model.variables()[var as usize].length {
                return false;
            }
            for &neighbour in self.model.neighbours(var) {
                // Each assigned pair is checked twice, once from each side;
                // the check is symmetric so that is merely redundant.
                let Some(partner) = assignment.get(&neighbour) else {
                    continue;
                };
                let Some(overlap) = self.model.overlap(var, neighbour) else {
                    continue;
                };
                if !chars_match(word, overlap.index_a, partner, overlap.index_b) {
                    return false;
                }
            }
        }
        true
    }

    /// Extends a partial assignment to a complete one by depth-first search,
    /// or returns `None` when every branch under it fails.
    ///
    /// Candidate variables come from the variable heuristic, candidate words
    /// from the value heuristic. The assignment is a persistent map, so each
    /// tentative extension is a cheap snapshot and abandoning a branch needs
    /// no undo.
    pub fn backtrack(&mut self, assignment: Assignment) -> Option<Assignment> {
        self.stats.nodes_visited += 1;

        if assignment.len() == self.model.len() {
            return Some(assignment);
        }

        let var = self
            .variable_heuristic
            .select_variable(&self.model, &self.domains, &assignment)?;

        for word in
            self.value_heuristic
                .order_values(var, &self.model, &self.domains, &assignment)
        {
            let extended = assignment.update(var, word);
            if self.consistent(&extended) {
                if let Some(found) = self.backtrack(extended) {
                    return Some(found);
                }
            }
            self.stats.backtracks += 1;
        }

        None
    }

    /// Solves the puzzle: node consistency, then AC-3, then backtracking
    /// search from the empty assignment.
    ///
    /// If AC-3 empties a domain the search is never entered and the solve
    /// fails with [`SolveError::UnsatisfiableDomain`]; an exhausted search
    /// fails with [`SolveError::NoSolution`].
    pub fn solve(&mut self) -> Result<Assignment, SolveError> {
        let start = Instant::now();
        self.enforce_node_consistency();

        let result = if self.ac3() {
            self.backtrack(Assignment::new())
                .ok_or(SolveError::NoSolution)
        } else {
            Err(SolveError::UnsatisfiableDomain)
        };

        self.stats.solve_time_micros = start.elapsed().as_micros() as u64;
        match &result {
            Ok(assignment) => debug!(
                variables = assignment.len(),
                nodes = self.stats.nodes_visited,
                backtracks = self.stats.backtracks,
                "solve succeeded"
            ),
            Err(err) => debug!(%err, "solve failed"),
        }
        result
    }
}

impl std::fmt::Debug for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("variables", &self.model.len())
            .field("domains", &self.domains.len())
            .field("stats", &self.stats)
            .finish()
    }
}

/// Uppercases and deduplicates a word list, rejecting non-ASCII words.
fn normalize<S: AsRef<str>>(words: &[S]) -> Result<im::HashSet<Word>> {
    let mut set = im::HashSet::new();
    for word in words {
        let word = word.as_ref();
        if !word.is_ascii() {
            return Err(Error::NonAsciiWord(word.to_string()));
        }
        set.insert(word.to_ascii_uppercase());
    }
    Ok(set)
}
