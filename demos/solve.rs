//! Solve the embedded mazes with both algorithms and print the results.
//!
//! Run: cargo run --bin solve

use std::collections::HashSet;
use std::error::Error;

use daedal_core::{Cell, Maze};
use daedal_search::{Algorithm, SearchOutcome, solve};

const MAZES: [(&str, &str); 2] = [
    ("maze1", include_str!("data/maze1.txt")),
    ("maze2", include_str!("data/maze2.txt")),
];

fn main() -> Result<(), Box<dyn Error>> {
    for (name, text) in MAZES {
        let maze = Maze::parse(text)?;
        for algorithm in [Algorithm::BreadthFirst, Algorithm::DepthFirst] {
            let outcome = solve(&maze, algorithm)?;
            println!(
                "{name} / {algorithm:?}: {} moves, {} states explored",
                outcome.solution.len(),
                outcome.num_explored
            );
            println!("{}", render(&maze, &outcome));
        }
    }
    Ok(())
}

/// Draw the maze with the solution (`*`) and the rest of the explored
/// states (`.`) overlaid.
fn render(maze: &Maze, outcome: &SearchOutcome) -> String {
    let path: HashSet<Cell> = outcome.solution.cells.iter().copied().collect();
    let mut out = String::new();
    for row in 0..maze.height() {
        for col in 0..maze.width() {
            let cell = Cell::new(row, col);
            let ch = if cell == maze.start() {
                'A'
            } else if cell == maze.goal() {
                'B'
            } else if maze.is_wall(cell) {
                '#'
            } else if path.contains(&cell) {
                '*'
            } else if outcome.explored.contains(&cell) {
                '.'
            } else {
                ' '
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
