use std::time::Instant;

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::algorithms::common::SearchOutcome;
use crate::algorithms::{solve, Algorithm};
use crate::error::Result;
use crate::grid::{Cell, Generation, Grid, DEFAULT_MAX_ATTEMPTS};
use crate::statistics::Statistics;

/// Everything a front end needs between user actions: the maze, the random
/// source used to fill it, and the most recent solution.
pub struct MazeApp {
    grid: Grid,
    rng: StdRng,
    max_attempts: usize,
    solution: Option<(Algorithm, SearchOutcome)>,
}

#[derive(Debug, Clone)]
pub struct SolveReport {
    pub outcome: SearchOutcome,
    pub statistics: Statistics,
}

impl MazeApp {
    /// Seeded apps produce the same obstacle layouts on every run.
    pub fn new(size: usize, seed: Option<u64>) -> Result<Self> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(MazeApp {
            grid: Grid::new(size)?,
            rng,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            solution: None,
        })
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Last solution, if the maze has been solved since it last changed.
    pub fn solution(&self) -> Option<(Algorithm, &SearchOutcome)> {
        self.solution.as_ref().map(|(algorithm, outcome)| (*algorithm, outcome))
    }

    pub fn generate_obstacles(&mut self, density: f64) -> Result<Generation> {
        let generation = self
            .grid
            .generate_obstacles_with_attempts(density, self.max_attempts, &mut self.rng)?;
        self.solution = None;
        Ok(generation)
    }

    pub fn solve(&mut self, algorithm: Algorithm) -> SolveReport {
        self.clear_solution();
        let started = Instant::now();
        let outcome = solve(&self.grid, algorithm);
        let statistics = Statistics::new(algorithm, &outcome, started.elapsed());
        self.solution = Some((algorithm, outcome.clone()));
        SolveReport { outcome, statistics }
    }

    pub fn clear_solution(&mut self) {
        self.solution = None;
    }

    /// Clears obstacles and any solution.
    pub fn reset(&mut self) {
        info!("Resetting maze");
        self.grid.reset();
        self.solution = None;
    }

    /// Steps through the last solve's trace from the beginning. Empty if
    /// nothing has been solved.
    pub fn replay(&self) -> Replay<'_> {
        let trace: &[Cell] = match &self.solution {
            Some((_, outcome)) => &outcome.trace,
            None => &[],
        };
        Replay::new(trace)
    }
}

/// Cursor over a visitation trace for animating a search one cell at a time.
#[derive(Debug, Clone)]
pub struct Replay<'a> {
    trace: &'a [Cell],
    position: usize,
}

impl<'a> Replay<'a> {
    pub fn new(trace: &'a [Cell]) -> Self {
        Replay { trace, position: 0 }
    }

    /// Cells shown so far.
    pub fn shown(&self) -> &'a [Cell] {
        &self.trace[..self.position]
    }

    pub fn restart(&mut self) {
        self.position = 0;
    }
}

impl<'a> Iterator for Replay<'a> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        let cell = self.trace.get(self.position).copied()?;
        self.position += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.trace.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Replay<'_> {}
