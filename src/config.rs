use clap::{Parser, ValueEnum};

use crate::algorithms::Algorithm;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Dfs,
    Bfs,
    AStar,
    /// Run every algorithm on the same grid and compare.
    All,
}

impl Selection {
    pub fn algorithms(self) -> Vec<Algorithm> {
        match self {
            Selection::Dfs => vec![Algorithm::Dfs],
            Selection::Bfs => vec![Algorithm::Bfs],
            Selection::AStar => vec![Algorithm::AStar],
            Selection::All => Algorithm::ALL.to_vec(),
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(long, default_value_t = 100)]
    pub grid_size: usize,

    /// Probability that a cell becomes an obstacle (0.0 to 1.0)
    #[arg(long, default_value_t = 0.25)]
    pub density: f64,

    #[arg(long, value_enum, default_value_t = Selection::All)]
    pub algorithm: Selection,

    /// Seed for reproducible obstacle layouts
    #[arg(long)]
    pub seed: Option<u64>,

    /// Random layouts to try before giving up (at least 1)
    #[arg(long, default_value_t = 100, value_parser = parse_attempts)]
    pub max_attempts: usize,

    #[arg(long, default_value_t = 1)]
    pub delay_ms: u64,

    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

fn parse_attempts(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(attempts) => Ok(attempts),
        Err(e) => Err(e.to_string()),
    }
}
