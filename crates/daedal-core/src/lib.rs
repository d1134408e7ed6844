//! **daedal-core** — maze model and session types for the daedal solver.
//!
//! This crate provides everything needed to describe a maze and walk
//! around in it:
//!
//! - [`Cell`] and [`Direction`] — grid coordinates and the four cardinal
//!   moves with their fixed deltas.
//! - [`Maze`] — an immutable grid parsed from ASCII text (`A` start, `B`
//!   goal, spaces open, anything else wall), answering bounds and
//!   adjacency queries.
//! - [`MazeGen`] — a depth-first carver producing maze text that
//!   [`Maze::parse`] accepts.
//! - [`Player`] — a mutable session position threaded by the caller.
//!
//! Search itself lives in the `daedal-search` crate.

pub mod geom;
pub mod mapgen;
pub mod maze;
pub mod player;

pub use geom::{Cell, Direction};
pub use mapgen::MazeGen;
pub use maze::{Maze, MazeError};
pub use player::Player;
