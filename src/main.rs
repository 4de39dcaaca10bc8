use anyhow::{Context, Result};
use clap::Parser;

use maze_search::app::MazeApp;
use maze_search::config::Config;
use maze_search::statistics::comparison_table;
use std::thread;
use std::time::Duration;

/// Snapshots printed while replaying one trace.
const REPLAY_FRAMES: usize = 10;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();

    if !config.quiet {
        println!("Maze: {}x{}, obstacle density {:.2}", config.grid_size, config.grid_size, config.density);
        if let Some(seed) = config.seed {
            println!("Seed: {} (for reproducibility)", seed);
        }
        println!();
    }

    let mut app = MazeApp::new(config.grid_size, config.seed)
        .context("Failed to create maze")?
        .with_max_attempts(config.max_attempts);

    let generation = app
        .generate_obstacles(config.density)
        .context("Failed to generate obstacles")?;

    if !config.quiet {
        println!(
            "Obstacles generated: {} blocked cells ({} attempt(s))",
            generation.blocked, generation.attempts
        );
    }

    let mut results = Vec::new();
    for algorithm in config.algorithm.algorithms() {
        let report = app.solve(algorithm);

        if !config.no_visualization && !config.quiet {
            replay(&app, config.delay_ms);
            println!("{}", app.grid().render(&report.outcome.trace, &report.outcome.path));
        }

        if !config.quiet {
            if report.outcome.found() {
                println!("{}: Path found!", algorithm);
            } else {
                println!("{}: No path from START to FINISH.", algorithm);
            }
            println!("{}", report.statistics);
        }
        results.push(report.statistics);
    }

    if results.len() > 1 {
        println!("\n=== ALGORITHM COMPARISON RESULTS ===\n");
        print!("{}", comparison_table(&results));
    }

    Ok(())
}

/// Plays the last trace back cell by cell, printing a few snapshots with
/// `delay_ms` between them.
fn replay(app: &MazeApp, delay_ms: u64) {
    let mut replay = app.replay();
    let stride = (replay.len() / REPLAY_FRAMES).max(1);
    let delay = Duration::from_millis(delay_ms);

    let mut shown = 0;
    while replay.next().is_some() {
        shown += 1;
        if shown % stride == 0 {
            println!("Visited {} cells", shown);
            println!("{}", app.grid().render(replay.shown(), &[]));
            thread::sleep(delay);
        }
    }
}
