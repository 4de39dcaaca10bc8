use crate::grid::{Cell, Grid};
use rustc_hash::FxHashMap;

/// Result of one search: every expanded cell in order, plus the path from
/// start to end (empty when end was never reached).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub trace: Vec<Cell>,
    pub path: Vec<Cell>,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves along the path, `None` if no path was found.
    pub fn steps(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

pub trait SearchAlgorithm {
    /// Searches from `grid.start()` to `grid.end()` without touching the grid.
    fn search(&self, grid: &Grid) -> SearchOutcome;
}

/// Walks predecessors back from `end` and returns the route start-first.
pub(crate) fn reconstruct_path(predecessors: &FxHashMap<Cell, Cell>, start: Cell, end: Cell) -> Vec<Cell> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        match predecessors.get(&current) {
            Some(&previous) => {
                path.push(previous);
                current = previous;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}
