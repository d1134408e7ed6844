//! The search engine: frontier + explored-set bookkeeping over a maze.

use std::collections::HashSet;

use daedal_core::{Cell, Direction, Maze};
use log::debug;

use crate::error::SearchError;
use crate::frontier::{Frontier, QueueFrontier, StackFrontier};
use crate::tree::SearchTree;

/// Search algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// FIFO frontier; returns a move-count-shortest path.
    BreadthFirst,
    /// LIFO frontier; returns some valid path, not necessarily shortest.
    DepthFirst,
}

/// A found path, ordered from the cell after the start to the goal.
///
/// The two sequences run in lockstep: `cells[i]` is where `actions[i]`
/// lands. The start cell itself is not included.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Moves to take from the start, in order.
    pub actions: Vec<Direction>,
    /// The cell reached after each move; the last one is the goal.
    pub cells: Vec<Cell>,
}

impl Solution {
    /// Number of moves in the path.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the path has no moves.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Everything a single [`solve`] run produces.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The path from start to goal.
    pub solution: Solution,
    /// States that were removed from the frontier and expanded.
    pub explored: HashSet<Cell>,
    /// Number of nodes removed from the frontier, the goal included.
    pub num_explored: usize,
}

/// Search `maze` for a path from its start to its goal.
///
/// Each call owns its frontier, explored set and node arena, so a maze
/// can be solved repeatedly (or from several threads at once) without
/// interference. Errors with [`SearchError::NoSolution`] when the goal
/// is unreachable.
pub fn solve(maze: &Maze, algorithm: Algorithm) -> Result<SearchOutcome, SearchError> {
    debug!(
        "solving {}x{} maze from {} to {} with {algorithm:?}",
        maze.height(),
        maze.width(),
        maze.start(),
        maze.goal(),
    );
    match algorithm {
        Algorithm::BreadthFirst => run(maze, QueueFrontier::new()),
        Algorithm::DepthFirst => run(maze, StackFrontier::new()),
    }
}

fn run<F: Frontier>(maze: &Maze, mut frontier: F) -> Result<SearchOutcome, SearchError> {
    let mut tree = SearchTree::new();
    let mut explored: HashSet<Cell> = HashSet::new();
    let mut num_explored = 0usize;
    let mut nbuf: Vec<(Direction, Cell)> = Vec::with_capacity(4);

    let root = tree.push_root(maze.start());
    frontier.add(root, maze.start());

    loop {
        // Exhausted without reaching the goal: unreachable.
        if frontier.is_empty() {
            debug!("frontier exhausted after {num_explored} removals, no solution");
            return Err(SearchError::NoSolution);
        }

        let id = frontier.remove()?;
        num_explored += 1;
        let state = tree.state(id);

        if state == maze.goal() {
            let (actions, cells) = tree.path_to(id);
            debug!(
                "found a {}-move path after {num_explored} removals",
                actions.len()
            );
            return Ok(SearchOutcome {
                solution: Solution { actions, cells },
                explored,
                num_explored,
            });
        }

        explored.insert(state);
        nbuf.clear();
        maze.neighbors(state, &mut nbuf);
        for &(action, next) in &nbuf {
            // Each state is enqueued at most once per run, which bounds
            // the loop at height x width removals.
            if frontier.contains_state(next) || explored.contains(&next) {
                continue;
            }
            let child = tree.push_child(next, id, action);
            frontier.add(child, next);
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn solution_round_trip() {
        let maze = Maze::parse("A  \n ##\nB  ").unwrap();
        let outcome = solve(&maze, Algorithm::BreadthFirst).unwrap();
        let json = serde_json::to_string(&outcome.solution).unwrap();
        let back: Solution = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome.solution, back);
    }

    #[test]
    fn algorithm_round_trip() {
        for algorithm in [Algorithm::BreadthFirst, Algorithm::DepthFirst] {
            let json = serde_json::to_string(&algorithm).unwrap();
            let back: Algorithm = serde_json::from_str(&json).unwrap();
            assert_eq!(algorithm, back);
        }
    }
}
