pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while constructing a puzzle: bad geometry or a word list the
/// solver cannot index into.
///
/// These are the collaborator-boundary errors. Once a [`crate::model::Model`]
/// and a [`crate::solver::engine::Solver`] have been built successfully, the
/// solve itself never errors; it either produces an assignment or a
/// [`SolveError`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("grid must have at least one row and one column")]
    EmptyGrid,

    #[error("grid is {height}x{width} but the mask holds {cells} cells")]
    GridShape {
        height: usize,
        width: usize,
        cells: usize,
    },

    #[error("pattern row {row} has {found} cells, expected {expected}")]
    RaggedPattern {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("word {0:?} contains non-ASCII characters")]
    NonAsciiWord(String),

    #[error("unknown variable id {0}")]
    UnknownVariable(u32),
}

/// The two ways a solve can fail. Both are ordinary return values; a failed
/// solve is deterministic for a given model and word list, so there is nothing
/// to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// AC-3 emptied some variable's domain; no complete assignment can exist.
    #[error("a variable's domain became empty during arc consistency")]
    UnsatisfiableDomain,

    /// Backtracking search exhausted every branch.
    #[error("search exhausted all branches without finding a complete assignment")]
    NoSolution,
}
