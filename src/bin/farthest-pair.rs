use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use rs_calipers::render::svg::{render, SvgOptions};
use rs_calipers::render::Scene;
use rs_calipers::{build_hull, BruteForce, FindFarthestPair, PointCloud, RotatingCalipers};

/// Scatter random points, find their convex hull and the two points farthest apart.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of random points
    #[arg(short, long, default_value_t = 100)]
    points: usize,
    /// Coordinates are drawn from 0 to this value, inclusive
    #[arg(short, long, default_value_t = 500)]
    extent: i32,
    /// Seed of the point generator, random if not given
    #[arg(short, long)]
    seed: Option<u64>,
    /// Write an svg picture of points, hull and farthest pair to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Generating {} points with seed {}", args.points, seed);
    let cloud = PointCloud::random(args.points, args.extent, seed);

    let hull = build_hull(&cloud.points()).context("could not build the convex hull")?;

    let solvers: [&dyn FindFarthestPair; 2] = [&RotatingCalipers, &BruteForce];
    let mut farthest = None;
    for solver in solvers {
        let result = solver
            .find(&hull)
            .with_context(|| format!("{} found no farthest pair", solver.name()))?;
        println!("{} took {} distance calculations.", solver.name(), result.distance_calls);
        if farthest.is_none() {
            farthest = Some(result);
        }
    }

    if let Some(farthest) = farthest {
        let (a, b) = farthest.pair;
        println!("Farthest pair: {} and {}, {:.3} apart.", a, b, farthest.distance);
    }

    if let Some(path) = args.output {
        let mut scene = Scene::new(cloud).with_hull(hull);
        if let Some(farthest) = farthest {
            scene = scene.with_farthest_pair(farthest);
        }
        let document = render(&scene, &SvgOptions::default())?;
        svg::save(&path, &document).with_context(|| format!("could not write {}", path.display()))?;
        info!("Saved {}", path.display());
    }

    Ok(())
}
