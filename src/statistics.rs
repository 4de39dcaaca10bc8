use std::fmt;
use std::time::Duration;

use crate::algorithms::common::SearchOutcome;
use crate::algorithms::Algorithm;

#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub algorithm: Algorithm,
    pub visited: usize,
    pub path_steps: Option<usize>,
    pub elapsed: Duration,
}

impl Statistics {
    pub fn new(algorithm: Algorithm, outcome: &SearchOutcome, elapsed: Duration) -> Self {
        Statistics {
            algorithm,
            visited: outcome.trace.len(),
            path_steps: outcome.steps(),
            elapsed,
        }
    }

    /// Path steps relative to the shortest possible route (1.0 is optimal).
    pub fn route_efficiency(&self, optimal_steps: usize) -> Option<f64> {
        match self.path_steps {
            Some(steps) if optimal_steps > 0 => Some(steps as f64 / optimal_steps as f64),
            Some(_) => Some(1.0),
            None => None,
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Search Statistics:", self.algorithm)?;
        writeln!(f, "Cells visited: {}", self.visited)?;
        match self.path_steps {
            Some(steps) => writeln!(f, "Path length: {} steps", steps)?,
            None => writeln!(f, "Path length: no path found")?,
        }
        writeln!(f, "Search time: {:.2?}", self.elapsed)?;
        Ok(())
    }
}

/// Side-by-side table of several solves on the same grid.
pub fn comparison_table(results: &[Statistics]) -> String {
    let optimal = results.iter().filter_map(|s| s.path_steps).min();

    let mut out = String::new();
    out.push_str(&format!(
        "{:<10} {:<8} {:<10} {:<10} {:<12} {:<12}\n",
        "Algorithm", "Success", "Steps", "Visited", "Efficiency", "Time"
    ));
    out.push_str(&"-".repeat(66));
    out.push('\n');

    for stats in results {
        let success = if stats.path_steps.is_some() { "yes" } else { "no" };
        let steps = stats.path_steps.map_or_else(|| "-".to_string(), |s| s.to_string());
        let efficiency = optimal
            .and_then(|o| stats.route_efficiency(o))
            .map_or_else(|| "-".to_string(), |e| format!("{:.3}", e));
        out.push_str(&format!(
            "{:<10} {:<8} {:<10} {:<10} {:<12} {:<12}\n",
            stats.algorithm.to_string(),
            success,
            steps,
            stats.visited,
            efficiency,
            format!("{:.2?}", stats.elapsed)
        ));
    }
    out
}
