use crate::algorithms::common::{reconstruct_path, SearchAlgorithm, SearchOutcome};
use crate::grid::Grid;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Breadth-first search. On a 4-connected unweighted grid the returned path
/// has the fewest possible steps.
#[derive(Default)]
pub struct BreadthFirst;

impl BreadthFirst {
    pub fn new() -> Self {
        BreadthFirst
    }
}

impl SearchAlgorithm for BreadthFirst {
    fn search(&self, grid: &Grid) -> SearchOutcome {
        let (start, end) = (grid.start(), grid.end());
        let mut trace = Vec::new();
        let mut queue = VecDeque::from([start]);
        let mut visited = FxHashSet::default();
        let mut predecessors = FxHashMap::default();
        visited.insert(start);

        while let Some(current) = queue.pop_front() {
            trace.push(current);
            if current == end {
                let path = reconstruct_path(&predecessors, start, end);
                return SearchOutcome { trace, path };
            }

            for next in grid.neighbors(&current) {
                if visited.insert(next) {
                    predecessors.insert(next, current);
                    queue.push_back(next);
                }
            }
        }

        SearchOutcome { trace, path: Vec::new() }
    }
}
