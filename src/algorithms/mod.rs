//! Grid search algorithms: depth-first, breadth-first and A*.
//!
//! Each algorithm implements [`SearchAlgorithm`] and returns a
//! [`SearchOutcome`] holding the expansion trace and the reconstructed path.
//! Neighbors are always expanded right, down, left, up, so repeated runs on
//! the same grid produce the same trace.

pub mod a_star;
pub mod bfs;
pub mod common;
pub mod dfs;

use std::fmt;
use std::str::FromStr;

use log::info;

use crate::grid::Grid;
use a_star::AStar;
use bfs::BreadthFirst;
use common::{SearchAlgorithm, SearchOutcome};
use dfs::DepthFirst;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Dfs,
    Bfs,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Dfs, Algorithm::Bfs, Algorithm::AStar];

    fn searcher(self) -> Box<dyn SearchAlgorithm> {
        match self {
            Algorithm::Dfs => Box::new(DepthFirst::new()),
            Algorithm::Bfs => Box::new(BreadthFirst::new()),
            Algorithm::AStar => Box::new(AStar::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Dfs => "DFS",
            Algorithm::Bfs => "BFS",
            Algorithm::AStar => "A*",
        };
        f.write_str(name)
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" => Ok(Algorithm::Dfs),
            "bfs" => Ok(Algorithm::Bfs),
            "a_star" | "a-star" | "astar" | "a*" => Ok(Algorithm::AStar),
            other => Err(format!("unknown algorithm '{other}', expected dfs, bfs or a_star")),
        }
    }
}

/// Runs `algorithm` on `grid`. The grid is only read.
pub fn solve(grid: &Grid, algorithm: Algorithm) -> SearchOutcome {
    let outcome = algorithm.searcher().search(grid);
    match outcome.steps() {
        Some(steps) => info!("{}: path of {} steps, {} cells visited", algorithm, steps, outcome.trace.len()),
        None => info!("{}: no path, {} cells visited", algorithm, outcome.trace.len()),
    }
    outcome
}
