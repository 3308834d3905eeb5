//! Demonstrates the two failure modes: a word list that AC-3 collapses
//! outright, and one where every crossing pair would need the same word
//! twice, so the search exhausts.

use std::sync::Arc;

use gridfill::{
    grid::Grid,
    model::Model,
    solver::{engine::Solver, stats::render_stats_table},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // An L-shaped pair: the across slot starts on the down slot's second
    // cell. "AB" would need some word with 'A' in second position, "CD" one
    // with 'C'; neither exists, so AC-3 empties the across domain.
    let bent = Grid::from_pattern(&[
        "_#", //
        "__", //
    ])?;
    let mut solver = Solver::new(Arc::new(Model::from_grid(&bent)), &["AB", "CD"])?;
    let outcome = solver.solve().unwrap_err();
    println!("Propagation failure:  {outcome}");
    println!("{}", render_stats_table(solver.stats()));

    // Two slots crossing at their first letter. Both words fit and support
    // themselves during propagation, but no two *distinct* words share a
    // first letter, so backtracking exhausts.
    let cross = Grid::from_pattern(&[
        "___", //
        "_##", //
        "_##", //
    ])?;
    let mut solver = Solver::new(Arc::new(Model::from_grid(&cross)), &["CAT", "DOG"])?;
    let outcome = solver.solve().unwrap_err();
    println!("Search failure:  {outcome}");
    println!("{}", render_stats_table(solver.stats()));

    Ok(())
}
