use std::fmt;

use log::{debug, info, warn};
use pathfinding::prelude::bfs;
use rand::Rng;
use rustc_hash::FxHashSet;

use crate::error::{MazeError, Result};

/// Side length used by the application when none is given.
pub const DEFAULT_GRID_SIZE: usize = 100;

/// How many random layouts `generate_obstacles` tries before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// A grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }

    /// Manhattan distance between two cells.
    pub fn manhattan(&self, other: &Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Obstacle,
}

/// Summary of a successful `generate_obstacles` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation {
    pub attempts: usize,
    pub blocked: usize,
}

/// Square occupancy map with a fixed start in the top-left corner and a fixed
/// end in the bottom-right corner. Start and end are never blocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    tiles: Vec<Vec<Tile>>,
    start: Cell,
    end: Cell,
}

impl Grid {
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(MazeError::InvalidGridSize(size));
        }
        Ok(Grid {
            size,
            tiles: vec![vec![Tile::Empty; size]; size],
            start: Cell::new(0, 0),
            end: Cell::new(size - 1, size - 1),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn end(&self) -> Cell {
        self.end
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Panics if `cell` lies outside the grid.
    pub fn is_blocked(&self, cell: Cell) -> bool {
        assert!(self.in_bounds(cell), "cell {cell} outside {0}x{0} grid", self.size);
        self.tiles[cell.row][cell.col] == Tile::Obstacle
    }

    /// Marks a single cell, for hand-built grids. Start and end are refused.
    /// Panics if `cell` lies outside the grid.
    pub fn set_blocked(&mut self, cell: Cell, blocked: bool) -> Result<()> {
        assert!(self.in_bounds(cell), "cell {cell} outside {0}x{0} grid", self.size);
        if blocked && self.is_endpoint(cell) {
            return Err(MazeError::ProtectedCell(cell));
        }
        self.tiles[cell.row][cell.col] = if blocked { Tile::Obstacle } else { Tile::Empty };
        Ok(())
    }

    pub fn blocked_count(&self) -> usize {
        self.tiles
            .iter()
            .flatten()
            .filter(|tile| **tile == Tile::Obstacle)
            .count()
    }

    /// Clears every obstacle.
    pub fn reset(&mut self) {
        for row in self.tiles.iter_mut() {
            row.fill(Tile::Empty);
        }
    }

    /// Open orthogonal neighbors, always in the order right, down, left, up.
    /// Panics if `cell` lies outside the grid.
    pub fn neighbors(&self, cell: &Cell) -> Vec<Cell> {
        assert!(self.in_bounds(*cell), "cell {cell} outside {0}x{0} grid", self.size);
        let mut neighbors = Vec::with_capacity(4);
        let (row, col) = (cell.row as isize, cell.col as isize);

        for (dr, dc) in &[(0, 1), (1, 0), (0, -1), (-1, 0)] {
            let nr = row + dr;
            let nc = col + dc;

            if nr >= 0 && nr < self.size as isize && nc >= 0 && nc < self.size as isize {
                let next = Cell::new(nr as usize, nc as usize);
                if self.tiles[next.row][next.col] != Tile::Obstacle {
                    neighbors.push(next);
                }
            }
        }
        neighbors
    }

    /// Whether end can be reached from start through open cells.
    pub fn is_connected(&self) -> bool {
        bfs(&self.start, |cell| self.neighbors(cell), |cell| *cell == self.end).is_some()
    }

    /// Randomizes obstacles with [`DEFAULT_MAX_ATTEMPTS`] retries.
    pub fn generate_obstacles<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) -> Result<Generation> {
        self.generate_obstacles_with_attempts(density, DEFAULT_MAX_ATTEMPTS, rng)
    }

    /// Blocks every cell except start and end with probability `density`,
    /// retrying until start and end are connected. If no attempt succeeds the
    /// grid is restored to its previous layout.
    pub fn generate_obstacles_with_attempts<R: Rng + ?Sized>(
        &mut self,
        density: f64,
        max_attempts: usize,
        rng: &mut R,
    ) -> Result<Generation> {
        if !(0.0..=1.0).contains(&density) {
            return Err(MazeError::InvalidDensity(density));
        }
        if max_attempts == 0 {
            return Err(MazeError::InvalidAttempts(max_attempts));
        }

        let previous = self.tiles.clone();

        for attempt in 1..=max_attempts {
            self.fill_random(density, rng);
            let blocked = self.blocked_count();

            if self.is_connected() {
                info!(
                    "Generated obstacles at density {:.2}: {} blocked cells after {} attempt(s)",
                    density, blocked, attempt
                );
                return Ok(Generation { attempts: attempt, blocked });
            }
            debug!("Attempt {} at density {:.2} left start and end disconnected", attempt, density);
        }

        warn!(
            "Giving up on density {:.2} after {} attempts, keeping previous layout",
            density, max_attempts
        );
        self.tiles = previous;
        Err(MazeError::Unsolvable { density, attempts: max_attempts })
    }

    fn fill_random<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) {
        for row in 0..self.size {
            for col in 0..self.size {
                let cell = Cell::new(row, col);
                self.tiles[row][col] = if !self.is_endpoint(cell) && rng.gen::<f64>() < density {
                    Tile::Obstacle
                } else {
                    Tile::Empty
                };
            }
        }
    }

    fn is_endpoint(&self, cell: Cell) -> bool {
        cell == self.start || cell == self.end
    }

    /// Text rendering of the grid with visited cells and a path drawn on top.
    pub fn render(&self, visited: &[Cell], path: &[Cell]) -> String {
        let visited: FxHashSet<Cell> = visited.iter().copied().collect();
        let path: FxHashSet<Cell> = path.iter().copied().collect();

        let mut out = String::with_capacity(self.size * (self.size + 1) + 64);
        out.push_str("Legend: S=Start, E=End, #=Obstacle, *=Path, o=Visited, .=Empty\n");

        for row in 0..self.size {
            for col in 0..self.size {
                let cell = Cell::new(row, col);
                let ch = if cell == self.start {
                    'S'
                } else if cell == self.end {
                    'E'
                } else if self.tiles[row][col] == Tile::Obstacle {
                    '#'
                } else if path.contains(&cell) {
                    '*'
                } else if visited.contains(&cell) {
                    'o'
                } else {
                    '.'
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_grid_is_empty_with_fixed_endpoints() {
        let grid = Grid::new(DEFAULT_GRID_SIZE).unwrap();
        assert_eq!(grid.start(), Cell::new(0, 0));
        assert_eq!(grid.end(), Cell::new(99, 99));
        assert_eq!(grid.blocked_count(), 0);
        assert!(grid.is_connected());
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(Grid::new(0), Err(MazeError::InvalidGridSize(0)));
    }

    #[test]
    fn neighbors_follow_right_down_left_up() {
        let grid = Grid::new(3).unwrap();
        let center = Cell::new(1, 1);
        assert_eq!(
            grid.neighbors(&center),
            vec![Cell::new(1, 2), Cell::new(2, 1), Cell::new(1, 0), Cell::new(0, 1)]
        );
        assert_eq!(grid.neighbors(&Cell::new(0, 0)), vec![Cell::new(0, 1), Cell::new(1, 0)]);
    }

    #[test]
    fn neighbors_skip_obstacles() {
        let mut grid = Grid::new(3).unwrap();
        grid.set_blocked(Cell::new(1, 2), true).unwrap();
        grid.set_blocked(Cell::new(0, 1), true).unwrap();
        assert_eq!(grid.neighbors(&Cell::new(1, 1)), vec![Cell::new(2, 1), Cell::new(1, 0)]);
    }

    #[test]
    fn endpoints_cannot_be_blocked() {
        let mut grid = Grid::new(5).unwrap();
        assert_eq!(
            grid.set_blocked(grid.start(), true),
            Err(MazeError::ProtectedCell(Cell::new(0, 0)))
        );
        assert_eq!(
            grid.set_blocked(grid.end(), true),
            Err(MazeError::ProtectedCell(Cell::new(4, 4)))
        );
        assert!(grid.set_blocked(grid.end(), false).is_ok());
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_query_panics() {
        let grid = Grid::new(4).unwrap();
        grid.is_blocked(Cell::new(4, 0));
    }

    #[test]
    #[should_panic]
    fn neighbors_of_out_of_bounds_cell_panics() {
        let grid = Grid::new(5).unwrap();
        grid.neighbors(&Cell::new(5, 4));
    }

    #[test]
    fn zero_attempt_budget_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::new(10).unwrap();
        assert_eq!(
            grid.generate_obstacles_with_attempts(0.0, 0, &mut rng),
            Err(MazeError::InvalidAttempts(0))
        );
        assert_eq!(grid.blocked_count(), 0);
    }

    #[test]
    fn invalid_density_is_rejected_before_touching_the_grid() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::new(10).unwrap();
        grid.set_blocked(Cell::new(3, 3), true).unwrap();
        for density in [-0.1, 1.5, f64::NAN] {
            assert!(matches!(
                grid.generate_obstacles(density, &mut rng),
                Err(MazeError::InvalidDensity(_))
            ));
        }
        assert_eq!(grid.blocked_count(), 1);
    }

    #[test]
    fn zero_density_leaves_grid_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(DEFAULT_GRID_SIZE).unwrap();
        let generation = grid.generate_obstacles(0.0, &mut rng).unwrap();
        assert_eq!(generation, Generation { attempts: 1, blocked: 0 });
        assert_eq!(grid.blocked_count(), 0);
    }

    #[test]
    fn full_density_fails_and_keeps_previous_layout() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(20).unwrap();
        grid.set_blocked(Cell::new(5, 5), true).unwrap();
        let before = grid.clone();

        let err = grid.generate_obstacles_with_attempts(1.0, 5, &mut rng).unwrap_err();
        assert_eq!(err, MazeError::Unsolvable { density: 1.0, attempts: 5 });
        assert_eq!(grid, before);
        assert!(!grid.is_blocked(grid.start()));
        assert!(!grid.is_blocked(grid.end()));
    }

    #[test]
    fn generated_grid_is_connected() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut grid = Grid::new(DEFAULT_GRID_SIZE).unwrap();
        let generation = grid.generate_obstacles(0.3, &mut rng).unwrap();
        assert!(generation.attempts >= 1);
        assert_eq!(generation.blocked, grid.blocked_count());
        assert!(grid.is_connected());
        assert!(!grid.is_blocked(grid.start()));
        assert!(!grid.is_blocked(grid.end()));
    }

    #[test]
    fn reset_clears_obstacles() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid = Grid::new(30).unwrap();
        grid.generate_obstacles(0.2, &mut rng).unwrap();
        grid.reset();
        assert_eq!(grid.blocked_count(), 0);
    }

    #[test]
    fn render_marks_layers() {
        let mut grid = Grid::new(3).unwrap();
        grid.set_blocked(Cell::new(1, 1), true).unwrap();
        let path = [Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2), Cell::new(1, 2), Cell::new(2, 2)];
        let visited = [Cell::new(1, 0)];
        let text = grid.render(&visited, &path);
        let rows: Vec<&str> = text.lines().skip(1).collect();
        assert_eq!(rows, vec!["S**", "o#*", "..E"]);
    }
}
