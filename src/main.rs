//! CLI for maze generation

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use kruskal_maze::maze_generator::MazeGenerator;
use kruskal_maze::{render, solve, Mask, Point};
use log::{info, warn};

/// Random perfect maze with exactly one path from the top-left to the
/// bottom-right corner
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells
    #[arg(default_value_t = 50)]
    width: usize,

    /// Maze height in cells
    #[arg(default_value_t = 50)]
    height: usize,

    /// Draw the solution as breadcrumbs (0 = no, anything else = yes)
    #[arg(default_value_t = 1, allow_negative_numbers = true)]
    breadcrumbs: i64,

    /// Random seed; -1 derives one from the clock
    #[arg(default_value_t = -1, allow_negative_numbers = true)]
    seed: i64,

    /// 1-bit image of exactly width*height pixels; black pixels stay walled
    mask: Option<PathBuf>,
}

/// Seed given on the command line, or one taken from the clock.
fn resolve_seed(seed: i64) -> i64 {
    if seed != -1 {
        return seed;
    }
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| i64::from(d.subsec_micros()))
}

/// Command lines that reproduce this maze, with and without breadcrumbs.
fn reproduce_line(program: &str, args: &Args, breadcrumbs: bool, seed: i64) -> String {
    let mask = args
        .mask
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    format!(
        "\tReproduce: {prog} {w} {h} {b} {seed} {mask} ; or, {toggle} breadcrumbs: {prog} {w} {h} {nb} {seed} {mask}",
        prog = program,
        w = args.width,
        h = args.height,
        b = u8::from(breadcrumbs),
        nb = u8::from(!breadcrumbs),
        toggle = if breadcrumbs { "without" } else { "with" },
    )
}

/// Generate maze, print it with optional solution
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let program = std::env::args().next().unwrap_or_else(|| "maze".to_owned());
    let breadcrumbs = args.breadcrumbs != 0;
    let seed = resolve_seed(args.seed);
    info!("Starting with {args:?}, seed {seed}");

    let mask = match &args.mask {
        Some(path) => Mask::load(path, args.width, args.height).unwrap_or_else(|err| {
            warn!("{err:#}; expected {}*{}, 1-bit image", args.width, args.height);
            Mask::new()
        }),
        None => Mask::new(),
    };

    let start = Point::new(0, 0);
    let finish = Point::new(args.height.saturating_sub(1), args.width.saturating_sub(1));

    // Negative seeds are as good as any other
    let mut gen = MazeGenerator::seeded(seed as u64);
    let maze = gen.generate(args.width, args.height, start, finish, &mask)?;
    println!("{}", maze.stats);

    let path = if breadcrumbs {
        solve(&maze.connectivity, start, finish).unwrap_or_else(|| {
            warn!("No path from start to finish");
            Vec::new()
        })
    } else {
        Vec::new()
    };

    print!("{}", render(&maze.connectivity, &path, &mask, start, finish));
    println!("{}", reproduce_line(&program, &args, breadcrumbs, seed));
    Ok(())
}
