//! Live player session state.
//!
//! A [`Player`] is a mutable position threaded alongside an immutable
//! [`Maze`] by the caller, independent of any search run.

use crate::geom::{Cell, Direction};
use crate::maze::Maze;

/// A player position, starting at the maze's start cell.
///
/// Moves that would leave the maze or enter a wall are silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pos: Cell,
}

impl Player {
    /// Start a session at `maze.start()`.
    pub fn new(maze: &Maze) -> Self {
        Self { pos: maze.start() }
    }

    /// Current position.
    #[inline]
    pub fn pos(&self) -> Cell {
        self.pos
    }

    /// Try to move one step. Illegal moves leave the position unchanged.
    pub fn apply(&mut self, maze: &Maze, dir: Direction) {
        self.pos = maze.step(self.pos, dir);
    }

    /// Whether the player stands on the goal cell.
    pub fn at_goal(&self, maze: &Maze) -> bool {
        self.pos == maze.goal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "A  \n ##\nB  ";

    #[test]
    fn starts_at_start() {
        let maze = Maze::parse(SMALL).unwrap();
        let player = Player::new(&maze);
        assert_eq!(player.pos(), maze.start());
        assert!(!player.at_goal(&maze));
    }

    #[test]
    fn walks_to_goal() {
        let maze = Maze::parse(SMALL).unwrap();
        let mut player = Player::new(&maze);
        player.apply(&maze, Direction::Down);
        assert_eq!(player.pos(), Cell::new(1, 0));
        player.apply(&maze, Direction::Down);
        assert_eq!(player.pos(), Cell::new(2, 0));
        assert!(player.at_goal(&maze));
    }

    #[test]
    fn blocked_moves_are_no_ops() {
        let maze = Maze::parse(SMALL).unwrap();
        let mut player = Player::new(&maze);
        player.apply(&maze, Direction::Up); // off the top edge
        assert_eq!(player.pos(), maze.start());
        player.apply(&maze, Direction::Down);
        player.apply(&maze, Direction::Right); // into the wall at (1, 1)
        assert_eq!(player.pos(), Cell::new(1, 0));
    }
}
