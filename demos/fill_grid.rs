use std::sync::Arc;

use clap::Parser;
use serde::Serialize;

use gridfill::{
    grid::Grid,
    model::{Model, Variable},
    solver::{engine::Solver, stats::render_stats_table},
};

/// Fills a small ring-shaped crossword and prints the resulting assignment.
#[derive(Parser)]
struct Args {
    /// Emit the assignment as JSON instead of plain text.
    #[arg(long)]
    json: bool,
    /// Print the solver's search statistics after solving.
    #[arg(long)]
    stats: bool,
}

#[derive(Serialize)]
struct Placement {
    #[serde(flatten)]
    variable: Variable,
    word: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let grid = Grid::from_pattern(&[
        "____", //
        "_##_", //
        "_##_", //
        "____", //
    ])?;
    let model = Arc::new(Model::from_grid(&grid));
    let words = [
        "EAST", "EDGE", "TREE", "EASE", "DOGS", "CATS", "NEST", "STAR",
    ];

    let mut solver = Solver::new(model.clone(), &words)?;
    match solver.solve() {
        Ok(assignment) => {
            if args.json {
                let placements: Vec<Placement> = model
                    .ids()
                    .filter_map(|id| {
                        Some(Placement {
                            variable: *model.variable(id)?,
                            word: assignment.get(&id)?.clone(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&placements)?);
            } else {
                println!("Fill found:");
                for id in model.ids() {
                    if let (Some(variable), Some(word)) =
                        (model.variable(id), assignment.get(&id))
                    {
                        println!("  {variable}: {word}");
                    }
                }
            }
        }
        Err(err) => println!("No fill: {err}"),
    }

    if args.stats {
        println!("{}", render_stats_table(solver.stats()));
    }

    Ok(())
}
