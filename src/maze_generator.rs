//! Maze generation

use std::fmt;

use anyhow::bail;
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::disjoint_set::DisjointSet;
use crate::grid::{Connectivity, Wall};
use crate::mask::Mask;
use crate::Point;

/// Randomized Kruskal maze generator.
///
/// The random stream is owned by the generator; seed it yourself for
/// reproducible mazes.
pub struct MazeGenerator<R> {
    random: R,
}

/// Result of a single [MazeGenerator::generate] call
#[derive(Clone, Debug)]
pub struct Generation {
    /// Wall layout of the maze
    pub connectivity: Connectivity,
    /// How much work carving took
    pub stats: GenerationStats,
}

/// Number of candidate walls drawn during generation
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct GenerationStats {
    /// All candidates drawn, including the skipped ones
    pub total_draws: usize,
    /// Candidates that actually joined two regions
    pub productive_draws: usize,
}

impl GenerationStats {
    /// Share of productive draws, in percent.
    pub fn productive_percentage(&self) -> f64 {
        if self.total_draws == 0 {
            return 0.0;
        }
        100.0 * self.productive_draws as f64 / self.total_draws as f64
    }
}

impl fmt::Display for GenerationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2}% productive ({}/{})",
            self.productive_percentage(),
            self.productive_draws,
            self.total_draws
        )
    }
}

impl MazeGenerator<StdRng> {
    /// Generator over a [StdRng] seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MazeGenerator<R> {
    pub fn new(random: R) -> Self {
        Self { random }
    }

    /// Carve a `width * height` maze with exactly one path from `start` to
    /// `finish`.
    ///
    /// Random walls are knocked down whenever they join two separate
    /// regions, until `start` and `finish` share a region. Generation stops
    /// right there, so cells that were never needed may remain walled off
    /// in pockets of their own. Walls touching a cell in `mask` are never
    /// removed.
    ///
    /// Returns error, if `start` or `finish` is outside the grid, if they
    /// coincide, or if either of them is masked.
    ///
    /// The mask must not separate `start` from `finish`; otherwise this
    /// never returns.
    ///
    /// # Examples
    /// ```
    /// use kruskal_maze::maze_generator::MazeGenerator;
    /// use kruskal_maze::{Mask, Point};
    ///
    /// let mut gen = MazeGenerator::seeded(0);
    /// let maze = gen
    ///     .generate(5, 4, Point::new(0, 0), Point::new(3, 4), &Mask::new())
    ///     .unwrap();
    /// assert_eq!(maze.connectivity.open_wall_count(), maze.stats.productive_draws);
    /// ```
    pub fn generate(
        &mut self,
        width: usize,
        height: usize,
        start: Point,
        finish: Point,
        mask: &Mask,
    ) -> anyhow::Result<Generation> {
        let mut connectivity = Connectivity::walled(width, height);
        for (name, point) in [("Start", start), ("Finish", finish)] {
            if !connectivity.contains(point) {
                bail!(
                    "{} (y={}, x={}) is outside the {}*{} maze",
                    name,
                    point.y,
                    point.x,
                    width,
                    height
                );
            }
            if mask.contains(point) {
                bail!("{} (y={}, x={}) is masked", name, point.y, point.x);
            }
        }
        if start == finish {
            bail!("Start and finish are the same cell");
        }

        debug!(
            "Generating {}*{} maze from {:?} to {:?} with {} masked cells",
            width,
            height,
            start,
            finish,
            mask.len()
        );

        let mut regions = DisjointSet::new(width * height);
        let start_idx = connectivity.index(start);
        let finish_idx = connectivity.index(finish);
        let mut stats = GenerationStats::default();

        loop {
            stats.total_draws += 1;
            let (wall, cell) = self.draw_candidate(width, height);
            let Some(neighbour) = connectivity.neighbour(cell, wall) else {
                continue;
            };

            if mask.contains(cell) || mask.contains(neighbour) {
                continue;
            }
            if connectivity.is_open(cell, wall) {
                continue; // No change
            }
            let cell_idx = connectivity.index(cell);
            let neighbour_idx = connectivity.index(neighbour);
            if !regions.union(cell_idx, neighbour_idx) {
                continue; // Would close a loop
            }
            connectivity.open(cell, wall);
            stats.productive_draws += 1;

            // Connectivity only changes on productive draws
            if regions.same_component(start_idx, finish_idx) {
                break;
            }
        }

        debug!("Maze generated: {}", stats);
        Ok(Generation {
            connectivity,
            stats,
        })
    }

    /// Pick a random wall that has a cell on both sides.
    ///
    /// Eastern walls are drawn from all but the last column, southern walls
    /// from all but the last row. The orientation is a fair coin flip, unless
    /// the grid is a single row or column.
    fn draw_candidate(&mut self, width: usize, height: usize) -> (Wall, Point) {
        let wall = match (width > 1, height > 1) {
            (true, true) => {
                if self.random.gen_bool(0.5) {
                    Wall::East
                } else {
                    Wall::South
                }
            }
            (true, false) => Wall::East,
            (false, _) => Wall::South,
        };

        let (cols, rows) = match wall {
            Wall::East => (width - 1, height),
            Wall::South => (width, height - 1),
        };
        let x = self.random.gen_range(0..cols);
        let y = self.random.gen_range(0..rows);
        (wall, Point::new(y, x))
    }
}
