//! **daedal-search** — frontier-driven graph search for daedal mazes.
//!
//! The search engine is the classic frontier + explored-set loop over an
//! immutable [`Maze`](daedal_core::Maze). The frontier's removal policy is
//! the entire difference between the two algorithms:
//!
//! | Algorithm | Frontier | Path |
//! |---|---|---|
//! | [`Algorithm::BreadthFirst`] | [`QueueFrontier`] (FIFO) | shortest by move count |
//! | [`Algorithm::DepthFirst`] | [`StackFrontier`] (LIFO) | some valid path |
//!
//! One [`solve`] call owns all of its mutable state (frontier, explored
//! set, node arena), so the engine is reentrant and concurrent runs over a
//! shared maze need no locking.

mod engine;
mod error;
mod frontier;
mod tree;

pub use engine::{Algorithm, SearchOutcome, Solution, solve};
pub use error::SearchError;
pub use frontier::{Frontier, QueueFrontier, StackFrontier};
pub use tree::{NodeId, SearchNode, SearchTree};
