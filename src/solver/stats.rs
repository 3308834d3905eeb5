use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};

/// Counters collected over a single solve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Words removed because their length did not fit the slot.
    pub node_consistency_prunings: u64,
    /// Calls to `revise`, whether or not anything was removed.
    pub revise_calls: u64,
    /// Words removed by AC-3 revisions.
    pub ac3_prunings: u64,
    /// Backtracking nodes expanded.
    pub nodes_visited: u64,
    /// Candidate values abandoned after a failed branch.
    pub backtracks: u64,
    /// Wall-clock duration of the whole solve.
    pub solve_time_micros: u64,
}

/// Renders the counters as a two-column table for terminal display.
pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Count")]));

    let rows: [(&str, u64); 6] = [
        (
            "Node-consistency prunings",
            stats.node_consistency_prunings,
        ),
        ("Revise calls", stats.revise_calls),
        ("AC-3 prunings", stats.ac3_prunings),
        ("Search nodes visited", stats.nodes_visited),
        ("Backtracks", stats.backtracks),
        ("Solve time (us)", stats.solve_time_micros),
    ];
    for (label, count) in rows {
        table.add_row(Row::new(vec![
            Cell::new(label),
            Cell::new(&count.to_string()),
        ]));
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_counter() {
        let stats = SearchStats {
            node_consistency_prunings: 3,
            revise_calls: 12,
            ac3_prunings: 5,
            nodes_visited: 7,
            backtracks: 2,
            solve_time_micros: 140,
        };
        let rendered = render_stats_table(&stats);
        assert!(rendered.contains("Revise calls"));
        assert!(rendered.contains("12"));
        assert!(rendered.contains("Backtracks"));
    }
}
