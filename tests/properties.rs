use kruskal_maze::maze_generator::MazeGenerator;
use kruskal_maze::{solve, Mask, Point};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_mazes_are_solvable(seed in any::<u64>(), width in 2usize..16, height in 2usize..16) {
        let start = Point::new(0, 0);
        let finish = Point::new(height - 1, width - 1);
        let maze = MazeGenerator::seeded(seed)
            .generate(width, height, start, finish, &Mask::new())
            .unwrap();

        let path = solve(&maze.connectivity, start, finish);
        prop_assert!(path.is_some());
        let path = path.unwrap();
        prop_assert_eq!(path.first(), Some(&start));
        prop_assert_eq!(path.last(), Some(&finish));
        prop_assert!(maze.connectivity.is_valid_path(&path));
    }

    #[test]
    fn carving_never_closes_a_loop(seed in any::<u64>(), width in 2usize..16, height in 2usize..16) {
        let maze = MazeGenerator::seeded(seed)
            .generate(width, height, Point::new(0, 0), Point::new(height - 1, width - 1), &Mask::new())
            .unwrap();

        // A forest over n cells has fewer than n edges
        prop_assert_eq!(maze.connectivity.open_wall_count(), maze.stats.productive_draws);
        prop_assert!(maze.stats.productive_draws < width * height);
        prop_assert!(maze.stats.productive_draws <= maze.stats.total_draws);
    }

    #[test]
    fn generation_is_deterministic(seed in any::<u64>(), width in 2usize..12, height in 2usize..12) {
        let start = Point::new(0, width - 1);
        let finish = Point::new(height - 1, 0);
        let a = MazeGenerator::seeded(seed).generate(width, height, start, finish, &Mask::new()).unwrap();
        let b = MazeGenerator::seeded(seed).generate(width, height, start, finish, &Mask::new()).unwrap();
        prop_assert_eq!(&a.connectivity, &b.connectivity);
        prop_assert_eq!(
            solve(&a.connectivity, start, finish),
            solve(&a.connectivity, start, finish)
        );
    }

    #[test]
    fn masked_cells_stay_walled(seed in any::<u64>(), size in 4usize..12) {
        // Diagonal wall, passable only around the two free corners
        let start = Point::new(0, size - 1);
        let finish = Point::new(size - 1, 0);
        let mask: Mask = (1..size - 1).map(|i| Point::new(i, i)).collect();
        let maze = MazeGenerator::seeded(seed)
            .generate(size, size, start, finish, &mask)
            .unwrap();

        for &cell in mask.iter() {
            prop_assert_eq!(maze.connectivity.open_neighbours(cell).count(), 0);
        }
        let path = solve(&maze.connectivity, start, finish).unwrap();
        prop_assert!(path.iter().all(|&p| !mask.contains(p)));
    }
}
