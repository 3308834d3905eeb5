//! The constraint graph model: variables derived from a grid, and the
//! overlaps between them.
//!
//! A [`Variable`] is a maximal run of at least two fillable cells, across or
//! down. Two variables that share a cell are neighbours, and the shared cell
//! induces an [`Overlap`]: the character position in each word that must
//! carry the same letter. Overlaps are computed once from geometry when the
//! [`Model`] is built and never change during a solve.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// Identifies a variable within its [`Model`]. Ids are assigned in a
/// deterministic order (across slots row by row, then down slots column by
/// column), so the same grid always yields the same ids.
pub type VariableId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Orientation {
    Across,
    Down,
}

/// A slot in the puzzle: starting cell, direction, and length.
///
/// Two variables are equal iff all four fields match. Variables are immutable
/// once the model is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    pub length: usize,
}

impl Variable {
    /// Iterates over the grid cells this variable covers, in word order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (row, col) = (self.row, self.col);
        let orientation = self.orientation;
        (0..self.length).map(move |k| match orientation {
            Orientation::Across => (row, col + k),
            Orientation::Down => (row + k, col),
        })
    }

    /// If `(row, col)` lies on this variable, returns the character index of
    /// that cell within the word.
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        match self.orientation {
            Orientation::Across => {
                (row == self.row && col >= self.col && col < self.col + self.length)
                    .then(|| col - self.col)
            }
            Orientation::Down => {
                (col == self.col && row >= self.row && row < self.row + self.length)
                    .then(|| row - self.row)
            }
        }
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dir = match self.orientation {
            Orientation::Across => "across",
            Orientation::Down => "down",
        };
        write!(f, "({}, {}) {} [{}]", self.row, self.col, dir, self.length)
    }
}

/// The matching character positions of two overlapping variables: index
/// `index_a` in the first word must equal index `index_b` in the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overlap {
    pub index_a: usize,
    pub index_b: usize,
}

/// The constraint graph: every variable, its neighbours, and the overlap for
/// every neighbouring pair.
///
/// Overlaps are stored in both directions, so `overlap(x, y)` and
/// `overlap(y, x)` are both O(1) and symmetric with the indices swapped.
#[derive(Debug, Clone)]
pub struct Model {
    variables: Vec<Variable>,
    overlaps: HashMap<(VariableId, VariableId), Overlap>,
    neighbours: Vec<Vec<VariableId>>,
    arcs: Vec<(VariableId, VariableId)>,
}

impl Model {
    /// Derives the constraint graph from a grid: scans for maximal runs of
    /// fillable cells (length >= 2) across and down, then records an overlap
    /// for every pair of variables sharing a cell.
    pub fn from_grid(grid: &Grid) -> Self {
        let mut variables = Vec::new();

        // Across slots, row by row.
        for row in 0..grid.height() {
            let mut run_start = None;
            for col in 0..=grid.width() {
                let fillable = col < grid.width() && grid.is_fillable(row, col);
                match (run_start, fillable) {
                    (None, true) => run_start = Some(col),
                    (Some(start), false) => {
                        if col - start >= 2 {
                            variables.push(Variable {
                                row,
                                col: start,
                                orientation: Orientation::Across,
                                length: col - start,
                            });
                        }
                        run_start = None;
                    }
                    _ => {}
                }
            }
        }

        // Down slots, column by column.
        for col in 0..grid.width() {
            let mut run_start = None;
            for row in 0..=grid.height() {
                let fillable = row < grid.height() && grid.is_fillable(row, col);
                match (run_start, fillable) {
                    (None, true) => run_start = Some(row),
                    (Some(start), false) => {
                        if row - start >= 2 {
                            variables.push(Variable {
                                row: start,
                                col,
                                orientation: Orientation::Down,
                                length: row - start,
                            });
                        }
                        run_start = None;
                    }
                    _ => {}
                }
            }
        }

        let mut overlaps = HashMap::new();
        let mut neighbours = vec![Vec::new(); variables.len()];
        for (a, var_a) in variables.iter().enumerate() {
            for (b, var_b) in variables.iter().enumerate().skip(a + 1) {
                if let Some(overlap) = Self::intersect(var_a, var_b) {
                    let (a, b) = (a as VariableId, b as VariableId);
                    overlaps.insert((a, b), overlap);
                    overlaps.insert(
                        (b, a),
                        Overlap {
                            index_a: overlap.index_b,
                            index_b: overlap.index_a,
                        },
                    );
                    neighbours[a as usize].push(b);
                    neighbours[b as usize].push(a);
                }
            }
        }
        for list in &mut neighbours {
            list.sort_unstable();
        }

        let mut arcs: Vec<(VariableId, VariableId)> = overlaps.keys().copied().collect();
        arcs.sort_unstable();

        Self {
            variables,
            overlaps,
            neighbours,
            arcs,
        }
    }

    /// Finds the shared cell of two variables, if any. Crossword slots are
    /// maximal runs, so two distinct slots share at most one cell.
    fn intersect(a: &Variable, b: &Variable) -> Option<Overlap> {
        for (index_a, (row, col)) in a.cells().enumerate() {
            if let Some(index_b) = b.index_of(row, col) {
                return Some(Overlap { index_a, index_b });
            }
        }
        None
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, id: VariableId) -> Option<&Variable> {
        self.variables.get(id as usize)
    }

    pub fn ids(&self) -> impl Iterator<Item = VariableId> {
        0..self.variables.len() as VariableId
    }

    /// The variables sharing a constrained cell with `id`, in ascending order.
    pub fn neighbours(&self, id: VariableId) -> &[VariableId] {
        &self.neighbours[id as usize]
    }

    pub fn degree(&self, id: VariableId) -> usize {
        self.neighbours[id as usize].len()
    }

    /// The overlap between `x` and `y`, or `None` if their cells are disjoint.
    pub fn overlap(&self, x: VariableId, y: VariableId) -> Option<Overlap> {
        self.overlaps.get(&(x, y)).copied()
    }

    /// Every ordered pair of variables with a defined overlap, sorted for
    /// deterministic worklist seeding.
    pub fn arcs(&self) -> &[(VariableId, VariableId)] {
        &self.arcs
    }
}
