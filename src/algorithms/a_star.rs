use crate::algorithms::common::{reconstruct_path, SearchAlgorithm, SearchOutcome};
use crate::grid::{Cell, Grid};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Priority of a queued cell. `BinaryHeap` is a max-heap, so `Ord` is
/// reversed: lower f first, then lower h, then earlier insertion.
#[derive(Clone, Copy, PartialEq, Eq)]
struct Entry {
    f: usize,
    h: usize,
    seq: usize,
    g: usize,
    cell: Cell,
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A* with the Manhattan distance to the end as heuristic. The heuristic is
/// consistent on a uniform 4-connected grid, so the path is optimal and a
/// cell never needs reopening once popped.
#[derive(Default)]
pub struct AStar;

impl AStar {
    /// Creates a new instance of the A* search.
    pub fn new() -> Self {
        AStar
    }
}

impl SearchAlgorithm for AStar {
    fn search(&self, grid: &Grid) -> SearchOutcome {
        let (start, end) = (grid.start(), grid.end());
        let mut trace = Vec::new();
        let mut queue = BinaryHeap::new();
        let mut g_scores: FxHashMap<Cell, usize> = FxHashMap::default();
        let mut closed = FxHashSet::default();
        let mut predecessors = FxHashMap::default();
        let mut seq = 0;

        let h = start.manhattan(&end);
        g_scores.insert(start, 0);
        queue.push(Entry { f: h, h, seq, g: 0, cell: start });

        while let Some(Entry { g, cell: current, .. }) = queue.pop() {
            // Stale entry left behind by a cheaper re-insertion.
            if g > g_scores[&current] || !closed.insert(current) {
                continue;
            }

            trace.push(current);
            if current == end {
                let path = reconstruct_path(&predecessors, start, end);
                return SearchOutcome { trace, path };
            }

            for next in grid.neighbors(&current) {
                if closed.contains(&next) {
                    continue;
                }
                let tentative = g + 1;
                if g_scores.get(&next).map_or(true, |&known| tentative < known) {
                    g_scores.insert(next, tentative);
                    predecessors.insert(next, current);
                    let h = next.manhattan(&end);
                    seq += 1;
                    queue.push(Entry { f: tentative + h, h, seq, g: tentative, cell: next });
                }
            }
        }

        SearchOutcome { trace, path: Vec::new() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heads_straight_for_the_goal_on_an_open_grid() {
        // Every cell on a monotone route has f = 8; lower h wins, so the
        // search never expands a cell off the returned path.
        let grid = Grid::new(5).unwrap();
        let outcome = AStar::new().search(&grid);
        assert_eq!(outcome.steps(), Some(8));
        assert_eq!(outcome.trace, outcome.path);
    }

    #[test]
    fn ties_prefer_earlier_insertion() {
        let grid = Grid::new(3).unwrap();
        let outcome = AStar::new().search(&grid);
        // (0,1) is queued before (1,0) with the same f and h.
        assert_eq!(outcome.trace[1], Cell::new(0, 1));
    }

    #[test]
    fn detours_around_a_wall_optimally() {
        let mut grid = Grid::new(5).unwrap();
        for row in 0..4 {
            grid.set_blocked(Cell::new(row, 2), true).unwrap();
        }
        let outcome = AStar::new().search(&grid);
        assert_eq!(outcome.steps(), Some(8));
        assert!(outcome.path.contains(&Cell::new(4, 2)));
    }

    #[test]
    fn cheaper_route_replaces_a_queued_cell() {
        // Lower h pulls the search down the right edge first, queueing (2,3)
        // from (2,4) at g = 7. Expanding (1,3) later lowers it to g = 5.
        let mut grid = Grid::new(5).unwrap();
        grid.set_blocked(Cell::new(3, 4), true).unwrap();
        let outcome = AStar::new().search(&grid);

        assert_eq!(outcome.steps(), Some(8));
        assert_eq!(
            outcome.path,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(0, 3),
                Cell::new(1, 3),
                Cell::new(2, 3),
                Cell::new(3, 3),
                Cell::new(4, 3),
                Cell::new(4, 4),
            ]
        );
        assert_eq!(
            &outcome.trace[5..9],
            &[Cell::new(1, 4), Cell::new(2, 4), Cell::new(1, 3), Cell::new(2, 3)]
        );

        let mut unique = outcome.trace.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), outcome.trace.len());
    }

    #[test]
    fn entry_order_is_min_first() {
        let cell = Cell::new(0, 0);
        let low = Entry { f: 3, h: 1, seq: 5, g: 2, cell };
        let high = Entry { f: 4, h: 0, seq: 0, g: 4, cell };
        let mut heap = BinaryHeap::from([high, low]);
        assert_eq!(heap.pop().map(|e| e.f), Some(3));
    }
}
