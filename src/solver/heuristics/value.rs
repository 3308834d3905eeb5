//! Strategies for ordering the candidate words of a variable before the
//! search tries them.

use crate::{
    model::{Model, VariableId},
    solver::{chars_match, Assignment, Domains, Word},
};

/// A value-ordering heuristic. Returns the variable's candidates as a fully
/// materialized list, so the caller can iterate (and re-iterate) it freely.
/// Implementations must not mutate the domains.
pub trait ValueOrderingHeuristic: std::fmt::Debug {
    fn order_values(
        &self,
        var: VariableId,
        model: &Model,
        domains: &Domains,
        assignment: &Assignment,
    ) -> Vec<Word>;
}

/// Returns the candidates in lexicographic order. No ordering intelligence,
/// but deterministic, which keeps tests and benchmarks stable.
#[derive(Debug)]
pub struct IdentityOrder;

impl ValueOrderingHeuristic for IdentityOrder {
    fn order_values(
        &self,
        var: VariableId,
        _model: &Model,
        domains: &Domains,
        _assignment: &Assignment,
    ) -> Vec<Word> {
        let mut values: Vec<Word> = domains
            .get(&var)
            .map(|d| d.iter().cloned().collect())
            .unwrap_or_default();
        values.sort_unstable();
        values
    }
}

/// Least-constraining-value: tries first the word that rules out the fewest
/// candidates in the unassigned neighbours' domains.
///
/// For each candidate the score is the sum, over every unassigned neighbour,
/// of the neighbour-domain words that disagree at the overlap position.
/// Assigned neighbours are skipped: their word is fixed, so nothing can be
/// ruled out there. Ties are broken lexicographically.
#[derive(Debug)]
pub struct LeastConstrainingValue;

impl ValueOrderingHeuristic for LeastConstrainingValue {
    fn order_values(
        &self,
        var: VariableId,
        model: &Model,
        domains: &Domains,
        assignment: &Assignment,
    ) -> Vec<Word> {
        let Some(domain) = domains.get(&var) else {
            return Vec::new();
        };

        let mut scored: Vec<(usize, Word)> = domain
            .iter()
            .map(|word| {
                let mut ruled_out = 0;
                for &neighbour in model.neighbours(var) {
                    if assignment.contains_key(&neighbour) {
                        continue;
                    }
                    let Some(overlap) = model.overlap(var, neighbour) else {
                        continue;
                    };
                    if let Some(neighbour_domain) = domains.get(&neighbour) {
                        ruled_out += neighbour_domain
                            .iter()
                            .filter(|candidate| {
                                !chars_match(word, overlap.index_a, candidate, overlap.index_b)
                            })
                            .count();
                    }
                }
                (ruled_out, word.clone())
            })
            .collect();

        scored.sort_unstable();
        scored.into_iter().map(|(_, word)| word).collect()
    }
}
