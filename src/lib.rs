//! Random perfect mazes, their solutions and text rendering
//!
//! Mazes are carved with randomized Kruskal: walls are picked at random and
//! knocked down whenever that joins two separate regions. Carving stops as
//! soon as the start and the finish are joined, so there is exactly one
//! path between them; the rest of the grid may stay partly walled off.
//!
//! # Examples
//! ```
//! use kruskal_maze::maze_generator::MazeGenerator;
//! use kruskal_maze::{render, solve, Mask, Point};
//!
//! let start = Point::new(0, 0);
//! let finish = Point::new(7, 11);
//! let mask = Mask::new();
//!
//! let mut gen = MazeGenerator::seeded(13);
//! let maze = gen.generate(12, 8, start, finish, &mask).unwrap();
//!
//! let path = solve(&maze.connectivity, start, finish).unwrap();
//! assert_eq!(path.first(), Some(&start));
//! assert_eq!(path.last(), Some(&finish));
//!
//! let text = render(&maze.connectivity, &path, &mask, start, finish);
//! assert_eq!(text.lines().count(), 2 * 8 + 1);
//! ```
//!
//! ## Masks
//! Cells in a [Mask] keep all their walls, which can be used to draw
//! pictures into the maze.
//! ```
//! use kruskal_maze::maze_generator::MazeGenerator;
//! use kruskal_maze::{Mask, Point};
//!
//! let mask: Mask = (2..6).map(|x| Point::new(3, x)).collect();
//! let mut gen = MazeGenerator::seeded(7);
//! let maze = gen
//!     .generate(8, 8, Point::new(0, 0), Point::new(7, 7), &mask)
//!     .unwrap();
//!
//! for &cell in mask.iter() {
//!     assert_eq!(maze.connectivity.open_neighbours(cell).count(), 0);
//! }
//! ```

pub mod disjoint_set;
pub mod grid;
pub mod mask;
pub mod maze_generator;
pub mod render;
pub mod solver;

pub use grid::{Connectivity, Wall};
pub use mask::Mask;
pub use render::render;
pub use solver::solve;

/// Location in the maze
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy, Debug)]
pub struct Point {
    /// Row, counted from the top
    pub y: usize,
    /// Column, counted from the left
    pub x: usize,
}

impl Point {
    pub fn new(y: usize, x: usize) -> Self {
        Self { y, x }
    }
}
