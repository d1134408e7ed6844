//! Maze generation.
//!
//! [`MazeGen`] carves passages with an iterative depth-first walk over the
//! lattice of odd-coordinate cells and renders the result as maze text
//! that [`Maze::parse`](crate::maze::Maze::parse) accepts. The carve is a
//! single connected region, so every generated maze is solvable.

use rand::{Rng, RngExt};

use crate::maze::{GOAL, START};

/// Maze text generator, generic over the random source.
pub struct MazeGen<R: Rng> {
    rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator using the given random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate maze text of roughly the given dimensions.
    ///
    /// `height` and `width` are clamped up to odd values of at least 5 so
    /// the carving lattice has room for distinct start and goal cells. The
    /// start marker lands at the top-left lattice cell and the goal marker
    /// at the bottom-right one; the outer border is solid wall.
    pub fn generate(&mut self, height: i32, width: i32) -> String {
        let h = clamp_odd(height);
        let w = clamp_odd(width);
        let mut walls = vec![true; (h * w) as usize];

        // Carve with an iterative depth-first walk: from the current cell,
        // jump two cells to a random unvisited lattice neighbor and knock
        // down the wall between, backtracking when no jump is possible.
        const JUMPS: [(i32, i32); 4] = [(-2, 0), (2, 0), (0, -2), (0, 2)];
        let mut stack = vec![(1i32, 1i32)];
        walls[(w + 1) as usize] = false;
        let mut candidates: Vec<(i32, i32)> = Vec::with_capacity(4);

        while let Some(&(row, col)) = stack.last() {
            candidates.clear();
            for (dr, dc) in JUMPS {
                let (nr, nc) = (row + dr, col + dc);
                if nr > 0 && nr < h && nc > 0 && nc < w && walls[(nr * w + nc) as usize] {
                    candidates.push((nr, nc));
                }
            }
            if candidates.is_empty() {
                stack.pop();
                continue;
            }
            let (nr, nc) = candidates[self.rng.random_range(0..candidates.len())];
            walls[(((row + nr) / 2) * w + (col + nc) / 2) as usize] = false;
            walls[(nr * w + nc) as usize] = false;
            stack.push((nr, nc));
        }

        render(&walls, h, w)
    }
}

/// Render a wall matrix as maze text with markers at the carved corners.
fn render(walls: &[bool], h: i32, w: i32) -> String {
    let mut out = String::with_capacity((h * (w + 1)) as usize);
    for row in 0..h {
        for col in 0..w {
            let ch = if (row, col) == (1, 1) {
                START
            } else if (row, col) == (h - 2, w - 2) {
                GOAL
            } else if walls[(row * w + col) as usize] {
                '#'
            } else {
                ' '
            };
            out.push(ch);
        }
        if row < h - 1 {
            out.push('\n');
        }
    }
    out
}

/// Round up to an odd value of at least 5.
fn clamp_odd(n: i32) -> i32 {
    let n = n.max(5);
    if n % 2 == 0 { n + 1 } else { n }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Cell;
    use crate::maze::Maze;

    #[test]
    fn output_parses_with_clamped_dimensions() {
        let mut mazegen = MazeGen::new(rand::rng());
        let text = mazegen.generate(10, 16);
        let maze = Maze::parse(&text).unwrap();
        assert_eq!(maze.height(), 11);
        assert_eq!(maze.width(), 17);
        assert_eq!(maze.start(), Cell::new(1, 1));
        assert_eq!(maze.goal(), Cell::new(9, 15));
    }

    #[test]
    fn tiny_requests_are_clamped_up() {
        let mut mazegen = MazeGen::new(rand::rng());
        let maze = Maze::parse(&mazegen.generate(0, 0)).unwrap();
        assert_eq!(maze.height(), 5);
        assert_eq!(maze.width(), 5);
        assert_ne!(maze.start(), maze.goal());
    }

    #[test]
    fn border_is_solid_wall() {
        let mut mazegen = MazeGen::new(rand::rng());
        let maze = Maze::parse(&mazegen.generate(9, 9)).unwrap();
        for row in 0..maze.height() {
            assert!(maze.is_wall(Cell::new(row, 0)));
            assert!(maze.is_wall(Cell::new(row, maze.width() - 1)));
        }
        for col in 0..maze.width() {
            assert!(maze.is_wall(Cell::new(0, col)));
            assert!(maze.is_wall(Cell::new(maze.height() - 1, col)));
        }
    }

    #[test]
    fn every_lattice_cell_is_carved() {
        let mut mazegen = MazeGen::new(rand::rng());
        let maze = Maze::parse(&mazegen.generate(15, 15)).unwrap();
        for row in (1..maze.height()).step_by(2) {
            for col in (1..maze.width()).step_by(2) {
                assert!(maze.is_open(Cell::new(row, col)), "({row}, {col}) not carved");
            }
        }
    }
}
