//! Strategies for choosing which unassigned variable the search branches on
//! next.

use std::cmp::Reverse;

use crate::{
    model::{Model, VariableId},
    solver::{Assignment, Domains},
};

/// A variable-selection heuristic. Implementations inspect the model, the
/// current domains, and the partial assignment, and must not mutate any of
/// them.
pub trait VariableSelectionHeuristic: std::fmt::Debug {
    /// Returns the next variable to assign, or `None` when every variable is
    /// already assigned.
    fn select_variable(
        &self,
        model: &Model,
        domains: &Domains,
        assignment: &Assignment,
    ) -> Option<VariableId>;
}

/// Picks the unassigned variable with the lowest id. A deterministic baseline
/// with no ordering intelligence, useful in tests and benchmarks.
#[derive(Debug)]
pub struct SelectFirst;

impl VariableSelectionHeuristic for SelectFirst {
    fn select_variable(
        &self,
        model: &Model,
        _domains: &Domains,
        assignment: &Assignment,
    ) -> Option<VariableId> {
        model.ids().find(|id| !assignment.contains_key(id))
    }
}

/// Minimum-remaining-values: picks the unassigned variable with the smallest
/// current domain, on the theory that the tightest slot should fail as early
/// as possible.
///
/// Ties are broken by highest degree (most neighbours), and any remaining tie
/// by lowest id so the choice is deterministic.
#[derive(Debug)]
pub struct MinimumRemainingValues;

impl VariableSelectionHeuristic for MinimumRemainingValues {
    fn select_variable(
        &self,
        model: &Model,
        domains: &Domains,
        assignment: &Assignment,
    ) -> Option<VariableId> {
        model
            .ids()
            .filter(|id| !assignment.contains_key(id))
            .min_by_key(|&id| {
                let remaining = domains.get(&id).map(|d| d.len()).unwrap_or(0);
                (remaining, Reverse(model.degree(id)), id)
            })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{grid::Grid, model::Model, solver::Domains};

    fn domains_for(model: &Model, words: &[&[&str]]) -> Domains {
        model
            .ids()
            .map(|id| {
                let set: im::HashSet<String> = words[id as usize]
                    .iter()
                    .map(|w| w.to_string())
                    .collect();
                (id, set)
            })
            .collect()
    }

    #[test]
    fn mrv_prefers_the_smallest_domain() {
        // Two disjoint across slots, no overlaps.
        let model = Model::from_grid(&Grid::from_pattern(&["__#__"]).unwrap());
        let domains = domains_for(&model, &[&["AB", "CD"], &["EF"]]);

        let chosen =
            MinimumRemainingValues.select_variable(&model, &domains, &im::HashMap::new());
        assert_eq!(chosen, Some(1));
    }

    #[test]
    fn mrv_breaks_size_ties_by_degree() {
        // Variables 0 (across, crossing) and 2 (down, crossing) have degree 1;
        // variable 1 (across, isolated) has degree 0.
        let model =
            Model::from_grid(&Grid::from_pattern(&["___#__", "_#####", "_#####"]).unwrap());
        assert_eq!(model.degree(0), 1);
        assert_eq!(model.degree(1), 0);
        let domains = domains_for(&model, &[&["AAA", "BBB"], &["AA", "BB"], &["CCC", "DDD"]]);

        let chosen =
            MinimumRemainingValues.select_variable(&model, &domains, &im::HashMap::new());
        assert_eq!(chosen, Some(0));
    }

    #[test]
    fn assigned_variables_are_skipped() {
        let model = Model::from_grid(&Grid::from_pattern(&["__#__"]).unwrap());
        let domains = domains_for(&model, &[&["AB"], &["EF", "GH"]]);
        let assignment: crate::solver::Assignment =
            im::HashMap::unit(0, "AB".to_string());

        let chosen = MinimumRemainingValues.select_variable(&model, &domains, &assignment);
        assert_eq!(chosen, Some(1));

        let assignment = assignment.update(1, "EF".to_string());
        assert_eq!(
            MinimumRemainingValues.select_variable(&model, &domains, &assignment),
            None
        );
        assert_eq!(SelectFirst.select_variable(&model, &domains, &assignment), None);
    }

    #[test]
    fn select_first_takes_the_lowest_unassigned_id() {
        let model = Model::from_grid(&Grid::from_pattern(&["__#__"]).unwrap());
        let domains = domains_for(&model, &[&["AB"], &["EF"]]);
        let assignment: crate::solver::Assignment =
            im::HashMap::unit(0, "AB".to_string());
        assert_eq!(
            SelectFirst.select_variable(&model, &domains, &assignment),
            Some(1)
        );
    }
}
