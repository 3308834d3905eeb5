//! The solving machinery: domains, consistency enforcement, heuristics, and
//! backtracking search.

pub mod engine;
pub mod heuristics;
pub mod stats;
pub mod work_list;

use crate::model::VariableId;

/// A candidate word. Words are normalized to ASCII uppercase when they enter
/// the solver, so overlap checks can index bytes directly.
pub type Word = String;

/// The current candidate set for every variable. Persistent, so snapshots are
/// cheap structural-sharing clones rather than deep copies.
pub type Domains = im::HashMap<VariableId, im::HashSet<Word>>;

/// A partial (or complete) mapping from variables to chosen words.
pub type Assignment = im::HashMap<VariableId, Word>;

/// Compares the character of `a` at `ai` with the character of `b` at `bi`.
/// An out-of-range index never matches, so wrong-length words are simply
/// incompatible instead of a panic.
pub(crate) fn chars_match(a: &str, ai: usize, b: &str, bi: usize) -> bool {
    match (a.as_bytes().get(ai), b.as_bytes().get(bi)) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}
