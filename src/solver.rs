//! Finding the way from start to finish

use log::debug;

use crate::grid::Connectivity;
use crate::Point;

/// Find a path from `start` to `finish` through open walls.
///
/// Depth-first search over an explicit stack of partial paths. Each branch
/// owns its own copy of the path so far, and only refuses to step onto a
/// cell already on *that* path; there is no shared visited set. In a maze
/// from [crate::maze_generator::MazeGenerator] the region around `start`
/// is a tree, so this terminates quickly and the path is unique.
///
/// Returns `None` if `finish` cannot be reached, or if `start` lies outside
/// the grid.
///
/// # Examples
/// ```
/// use kruskal_maze::{solve, Connectivity, Point, Wall};
///
/// let mut grid = Connectivity::walled(2, 2);
/// assert_eq!(solve(&grid, Point::new(0, 0), Point::new(1, 1)), None);
///
/// grid.open(Point::new(0, 0), Wall::South);
/// grid.open(Point::new(1, 0), Wall::East);
/// let path = solve(&grid, Point::new(0, 0), Point::new(1, 1)).unwrap();
/// assert_eq!(path, vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)]);
/// ```
pub fn solve(connectivity: &Connectivity, start: Point, finish: Point) -> Option<Vec<Point>> {
    if !connectivity.contains(start) {
        return None;
    }

    let mut fringe: Vec<Vec<Point>> = vec![vec![start]];
    let mut expanded = 0usize;

    while let Some(path) = fringe.pop() {
        let tip = *path.last()?;
        if tip == finish {
            debug!(
                "Found path of {} cells after expanding {} partial paths",
                path.len(),
                expanded
            );
            return Some(path);
        }
        expanded += 1;

        for next in connectivity.open_neighbours(tip) {
            // Reverse search, recent cells are the likely hits
            if !path.iter().rev().any(|&p| p == next) {
                let mut branch = path.clone();
                branch.push(next);
                fringe.push(branch);
            }
        }
    }

    debug!("No path after expanding {} partial paths", expanded);
    None
}
