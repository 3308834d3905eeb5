//! Gridfill fills crossword grids by treating them as constraint satisfaction
//! problems.
//!
//! A puzzle is a [`grid::Grid`] (a mask of fillable cells) plus a word list.
//! The [`model::Model`] derives the constraint graph from the grid: one
//! [`model::Variable`] per maximal run of fillable cells, and an
//! [`model::Overlap`] for every pair of variables sharing a cell. The
//! [`solver::engine::Solver`] then runs the classic CSP pipeline — node
//! consistency, AC-3 constraint propagation, and heuristic backtracking
//! search — and returns either a complete assignment of words to slots or an
//! explicit [`error::SolveError`].
//!
//! # Core Concepts
//!
//! - **[`model::Model`]**: the immutable constraint graph — variables,
//!   neighbour sets, and overlap lookups.
//! - **[`solver::engine::Solver`]**: owns the mutable domains and drives the
//!   solve.
//! - **[`solver::heuristics`]**: pluggable variable-selection and
//!   value-ordering strategies; the defaults are minimum-remaining-values and
//!   least-constraining-value.
//!
//! # Example: A Crossing Pair
//!
//! Two length-3 slots share their first letter. With the word list
//! `{cat, car, dog}` the only compatible distinct pair is `CAT`/`CAR`.
//!
//! ```
//! use std::sync::Arc;
//!
//! use gridfill::{grid::Grid, model::Model, solver::engine::Solver};
//!
//! let grid = Grid::from_pattern(&[
//!     "___",
//!     "_##",
//!     "_##",
//! ])?;
//! let model = Arc::new(Model::from_grid(&grid));
//! assert_eq!(model.len(), 2);
//!
//! let mut solver = Solver::new(model, &["cat", "car", "dog"])?;
//! let assignment = solver.solve().expect("a fill exists");
//!
//! let across = &assignment[&0];
//! let down = &assignment[&1];
//! assert_ne!(across, down);
//! assert_eq!(across.as_bytes()[0], down.as_bytes()[0]);
//! # Ok::<(), gridfill::error::Error>(())
//! ```

pub mod error;
pub mod grid;
pub mod model;
pub mod solver;
