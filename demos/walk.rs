//! Walk a player along the breadth-first solution, one validated move at
//! a time, until the goal is reached.
//!
//! Run: cargo run --bin walk

use std::error::Error;

use daedal_core::{Maze, Player};
use daedal_search::{Algorithm, solve};

const MAZE: &str = include_str!("data/maze1.txt");

fn main() -> Result<(), Box<dyn Error>> {
    let maze = Maze::parse(MAZE)?;
    let outcome = solve(&maze, Algorithm::BreadthFirst)?;

    let mut player = Player::new(&maze);
    println!("start at {}", player.pos());
    for action in &outcome.solution.actions {
        player.apply(&maze, *action);
        println!("{action:>5} -> {}", player.pos());
    }

    if player.at_goal(&maze) {
        println!("reached the goal in {} moves", outcome.solution.len());
    }
    Ok(())
}
