//! Heuristics for ordering the backtracking search: which variable to assign
//! next, and in which order to try its candidate words.

pub mod value;
pub mod variable;
