//! Text art output

use std::collections::HashSet;

use itertools::Itertools;

use crate::grid::{Connectivity, Wall};
use crate::mask::Mask;
use crate::Point;

const S_WALL: char = '█';
const S_START: char = 'S';
const S_FINISH: char = 'E';
const S_CRUMB: char = '.';
const S_FLOOR: char = ' ';

/// Draw the maze as text
///
/// Every cell is two characters wide: the cell itself and the wall to its
/// east. Below each row of cells comes a row of southern walls. Start and
/// finish are marked with `S` and `E`, cells on `path` with breadcrumbs
/// `.` and masked cells are drawn solid.
///
/// The returned string ends with a newline.
///
/// # Examples
/// ```
/// use kruskal_maze::{render, Connectivity, Mask, Point, Wall};
///
/// let mut grid = Connectivity::walled(2, 2);
/// grid.open(Point::new(0, 0), Wall::East);
/// grid.open(Point::new(0, 1), Wall::South);
///
/// let text = render(&grid, &[], &Mask::new(), Point::new(0, 0), Point::new(1, 1));
/// assert_eq!(text, "█████\n█S  █\n███ █\n█ █E█\n█████\n");
/// ```
pub fn render(
    connectivity: &Connectivity,
    path: &[Point],
    mask: &Mask,
    start: Point,
    finish: Point,
) -> String {
    let width = connectivity.width();
    let crumbs: HashSet<Point> = path.iter().copied().collect();

    let glyph = |p: Point| {
        if p == start {
            S_START
        } else if p == finish {
            S_FINISH
        } else if crumbs.contains(&p) {
            S_CRUMB
        } else if mask.contains(p) {
            S_WALL
        } else {
            S_FLOOR
        }
    };
    let wall = |open: bool| if open { S_FLOOR } else { S_WALL };

    let top = std::iter::repeat(S_WALL).take(2 * width + 1).collect::<String>();
    let rows = (0..connectivity.height()).flat_map(|y| {
        let cells = std::iter::once(S_WALL)
            .chain((0..width).flat_map(|x| {
                let p = Point::new(y, x);
                [glyph(p), wall(connectivity.is_open(p, Wall::East))]
            }))
            .collect::<String>();
        let floor = std::iter::once(S_WALL)
            .chain((0..width).flat_map(|x| {
                let p = Point::new(y, x);
                [wall(connectivity.is_open(p, Wall::South)), S_WALL]
            }))
            .collect::<String>();
        [cells, floor]
    });

    let mut text = std::iter::once(top).chain(rows).join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::grid::{Connectivity, Wall};
    use crate::{Mask, Point};

    #[test]
    fn closed_grid() {
        let grid = Connectivity::walled(3, 1);
        let text = render(&grid, &[], &Mask::new(), Point::new(0, 0), Point::new(0, 2));
        assert_eq!(text, "███████\n█S█ █E█\n███████\n");
    }

    #[test]
    fn breadcrumbs_and_mask() {
        // S . .
        // # # E
        let mut grid = Connectivity::walled(3, 2);
        grid.open(Point::new(0, 0), Wall::East);
        grid.open(Point::new(0, 1), Wall::East);
        grid.open(Point::new(0, 2), Wall::South);
        let path = [
            Point::new(0, 0),
            Point::new(0, 1),
            Point::new(0, 2),
            Point::new(1, 2),
        ];
        let mask: Mask = [Point::new(1, 0)].into_iter().collect();

        let text = render(&grid, &path, &mask, Point::new(0, 0), Point::new(1, 2));
        let expected = [
            "███████",
            "█S . .█",
            "█████ █",
            "███ █E█",
            "███████",
        ];
        assert_eq!(text.lines().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn lines_are_double_width() {
        let grid = Connectivity::walled(5, 4);
        let text = render(&grid, &[], &Mask::new(), Point::new(0, 0), Point::new(3, 4));
        assert_eq!(text.lines().count(), 9);
        assert!(text.lines().all(|line| line.chars().count() == 11));
    }
}
