//! Wall layout of a rectangular maze

use itertools::Itertools;

use crate::Point;

/// Which wall of a cell is meant.
///
/// Only eastern and southern walls are stored; the western wall of a cell
/// is the eastern wall of its neighbour, and likewise north/south.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Wall {
    East,
    South,
}

/// Connectivity matrix of a `height * width` maze.
///
/// `to_east[i]` tells whether cell `i` (row-major) is open towards its
/// eastern neighbour, `to_south[i]` the same towards the south. Flags on
/// the last column (east) or last row (south) are never set.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Connectivity {
    width: usize,
    height: usize,
    to_east: Vec<bool>,
    to_south: Vec<bool>,
}

impl Connectivity {
    /// Grid with every wall up.
    pub fn walled(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            to_east: vec![false; width * height],
            to_south: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Is `point` inside the grid?
    pub fn contains(&self, point: Point) -> bool {
        point.y < self.height && point.x < self.width
    }

    /// Row-major index of `point`. Caller checks bounds.
    pub(crate) fn index(&self, point: Point) -> usize {
        point.y * self.width + point.x
    }

    /// Neighbour of `point` across `wall`, if it is inside the grid.
    pub fn neighbour(&self, point: Point, wall: Wall) -> Option<Point> {
        let next = match wall {
            Wall::East => Point::new(point.y, point.x + 1),
            Wall::South => Point::new(point.y + 1, point.x),
        };
        (self.contains(point) && self.contains(next)).then_some(next)
    }

    /// Is the given wall of `point` knocked down?
    ///
    /// Walls on the outer boundary and points outside the grid are always
    /// closed.
    pub fn is_open(&self, point: Point, wall: Wall) -> bool {
        if self.neighbour(point, wall).is_none() {
            return false;
        }
        let i = self.index(point);
        match wall {
            Wall::East => self.to_east[i],
            Wall::South => self.to_south[i],
        }
    }

    /// Knock down a wall.
    ///
    /// Returns `false` and leaves the grid untouched for boundary walls and
    /// points outside the grid.
    pub fn open(&mut self, point: Point, wall: Wall) -> bool {
        if self.neighbour(point, wall).is_none() {
            return false;
        }
        let i = self.index(point);
        match wall {
            Wall::East => self.to_east[i] = true,
            Wall::South => self.to_south[i] = true,
        }
        true
    }

    /// Are `a` and `b` orthogonal neighbours joined by an open wall?
    pub fn is_open_between(&self, a: Point, b: Point) -> bool {
        let (first, second) = if (a.y, a.x) <= (b.y, b.x) { (a, b) } else { (b, a) };
        if first.y == second.y && first.x + 1 == second.x {
            self.is_open(first, Wall::East)
        } else if first.x == second.x && first.y + 1 == second.y {
            self.is_open(first, Wall::South)
        } else {
            false
        }
    }

    /// Cells reachable from `point` in one step, in north, east, south,
    /// west order.
    pub fn open_neighbours(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        let north = point
            .y
            .checked_sub(1)
            .map(|y| Point::new(y, point.x))
            .filter(|&p| self.is_open(p, Wall::South));
        let east = self
            .neighbour(point, Wall::East)
            .filter(|_| self.is_open(point, Wall::East));
        let south = self
            .neighbour(point, Wall::South)
            .filter(|_| self.is_open(point, Wall::South));
        let west = point
            .x
            .checked_sub(1)
            .map(|x| Point::new(point.y, x))
            .filter(|&p| self.is_open(p, Wall::East));

        [north, east, south, west].into_iter().flatten()
    }

    /// Number of walls that have been knocked down.
    pub fn open_wall_count(&self) -> usize {
        self.to_east.iter().chain(self.to_south.iter()).filter(|&&open| open).count()
    }

    /// Does `path` walk through the maze?
    ///
    /// The path must be non-empty, stay inside the grid, never repeat a
    /// cell and only step through open walls.
    pub fn is_valid_path(&self, path: &[Point]) -> bool {
        !path.is_empty()
            && path.iter().all(|&p| self.contains(p))
            && path.iter().all_unique()
            && path
                .iter()
                .tuple_windows()
                .all(|(&a, &b)| self.is_open_between(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::{Connectivity, Wall};
    use crate::Point;

    #[test]
    fn starts_fully_walled() {
        let grid = Connectivity::walled(3, 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.open_wall_count(), 0);
        assert_eq!(grid.open_neighbours(Point::new(0, 0)).count(), 0);
    }

    #[test]
    fn boundary_walls_cannot_be_opened() {
        let mut grid = Connectivity::walled(3, 2);
        assert!(!grid.open(Point::new(0, 2), Wall::East));
        assert!(!grid.open(Point::new(1, 0), Wall::South));
        assert!(!grid.open(Point::new(5, 5), Wall::East));
        assert_eq!(grid.open_wall_count(), 0);

        assert!(!grid.is_open(Point::new(0, 2), Wall::East));
        assert!(!grid.is_open(Point::new(9, 9), Wall::South));
    }

    #[test]
    fn open_walls_are_shared_by_both_cells() {
        let mut grid = Connectivity::walled(3, 3);
        assert!(grid.open(Point::new(1, 1), Wall::East));
        assert!(grid.open(Point::new(0, 1), Wall::South));

        let centre: Vec<_> = grid.open_neighbours(Point::new(1, 1)).collect();
        assert_eq!(centre, vec![Point::new(0, 1), Point::new(1, 2)]);

        let east: Vec<_> = grid.open_neighbours(Point::new(1, 2)).collect();
        assert_eq!(east, vec![Point::new(1, 1)]);

        assert!(grid.is_open_between(Point::new(1, 2), Point::new(1, 1)));
        assert!(grid.is_open_between(Point::new(0, 1), Point::new(1, 1)));
        assert!(!grid.is_open_between(Point::new(1, 0), Point::new(1, 1)));
        assert!(!grid.is_open_between(Point::new(0, 0), Point::new(1, 1)));
    }

    #[test]
    fn path_validation() {
        let mut grid = Connectivity::walled(2, 2);
        grid.open(Point::new(0, 0), Wall::East);
        grid.open(Point::new(0, 1), Wall::South);

        let path = [Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)];
        assert!(grid.is_valid_path(&path));
        assert!(grid.is_valid_path(&path[..1]));

        assert!(!grid.is_valid_path(&[]));
        // Through a closed wall
        assert!(!grid.is_valid_path(&[Point::new(0, 0), Point::new(1, 0)]));
        // Revisit
        assert!(!grid.is_valid_path(&[
            Point::new(0, 0),
            Point::new(0, 1),
            Point::new(0, 0)
        ]));
        // Outside the grid
        assert!(!grid.is_valid_path(&[Point::new(2, 2)]));
    }
}
