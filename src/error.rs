use std::fmt;

use crate::grid::Cell;

/// Errors raised while building or mutating a maze.
#[derive(Debug, Clone, PartialEq)]
pub enum MazeError {
    /// Obstacle density outside `0.0..=1.0` (or NaN).
    InvalidDensity(f64),
    /// A grid needs at least one cell.
    InvalidGridSize(usize),
    /// Start and end can never be blocked.
    ProtectedCell(Cell),
    /// Generation needs at least one attempt.
    InvalidAttempts(usize),
    /// Every generation attempt left start and end disconnected.
    Unsolvable { density: f64, attempts: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDensity(density) => {
                write!(f, "Obstacle density {density} is outside 0.0..=1.0")
            }
            Self::InvalidGridSize(size) => write!(f, "Grid size {size} is invalid (must be > 0)"),
            Self::InvalidAttempts(attempts) => {
                write!(f, "Attempt budget {attempts} is invalid (must be > 0)")
            }
            Self::ProtectedCell(cell) => write!(f, "Cell {cell} is the start or end and cannot be blocked"),
            Self::Unsolvable { density, attempts } => write!(
                f,
                "Could not generate a solvable maze at density {density:.2} after {attempts} attempts, try a lower density"
            ),
        }
    }
}

impl std::error::Error for MazeError {}

pub type Result<T> = std::result::Result<T, MazeError>;
