use crate::algorithms::common::{reconstruct_path, SearchAlgorithm, SearchOutcome};
use crate::grid::Grid;
use rustc_hash::{FxHashMap, FxHashSet};

/// Depth-first search with an explicit stack. The first path found is
/// returned, which is usually not the shortest.
#[derive(Default)]
pub struct DepthFirst;

impl DepthFirst {
    pub fn new() -> Self {
        DepthFirst
    }
}

impl SearchAlgorithm for DepthFirst {
    fn search(&self, grid: &Grid) -> SearchOutcome {
        let (start, end) = (grid.start(), grid.end());
        let mut trace = Vec::new();
        let mut stack = vec![start];
        let mut visited = FxHashSet::default();
        let mut predecessors = FxHashMap::default();
        visited.insert(start);

        while let Some(current) = stack.pop() {
            trace.push(current);
            if current == end {
                let path = reconstruct_path(&predecessors, start, end);
                return SearchOutcome { trace, path };
            }

            // Pushed in reverse so the first neighbor is explored first.
            for next in grid.neighbors(&current).into_iter().rev() {
                if visited.insert(next) {
                    predecessors.insert(next, current);
                    stack.push(next);
                }
            }
        }

        SearchOutcome { trace, path: Vec::new() }
    }
}
