//! Generate a random maze, print it, then solve it.
//!
//! Run: cargo run --bin generate

use std::error::Error;

use daedal_core::{Maze, MazeGen};
use daedal_search::{Algorithm, solve};

fn main() -> Result<(), Box<dyn Error>> {
    let mut mazegen = MazeGen::new(rand::rng());
    let text = mazegen.generate(15, 31);
    println!("{text}\n");

    let maze = Maze::parse(&text)?;
    for algorithm in [Algorithm::BreadthFirst, Algorithm::DepthFirst] {
        let outcome = solve(&maze, algorithm)?;
        println!(
            "{algorithm:?}: {} moves, {} states explored",
            outcome.solution.len(),
            outcome.num_explored
        );
    }
    Ok(())
}
