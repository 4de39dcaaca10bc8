//! Grid maze generation and step-by-step search with DFS, BFS and A*.

pub mod algorithms;
pub mod app;
pub mod config;
pub mod error;
pub mod grid;
pub mod statistics;

pub use algorithms::common::SearchOutcome;
pub use algorithms::{solve, Algorithm};
pub use error::{MazeError, Result};
pub use grid::{Cell, Grid};
