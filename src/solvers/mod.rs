pub mod brute_force;
pub mod calipers;

use crate::error::GeometryError;
use crate::hull::ConvexHull;
use crate::point::Point;

pub use brute_force::BruteForce;
pub use calipers::RotatingCalipers;

/// The two points found to be farthest apart, and what it took to find them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FarthestPair {
    pub pair: (Point, Point),
    pub distance: f64,
    /// Number of distance evaluations made by the solver.
    pub distance_calls: usize,
}

/// Tracks the best pair seen so far and counts every distance evaluation.
///
/// A candidate only replaces the current best if it is strictly farther apart, so among
/// equally distant pairs the first one evaluated wins.
#[derive(Debug, Default)]
pub(crate) struct DistanceCounter {
    best: Option<((Point, Point), f64)>,
    calls: usize,
}

impl DistanceCounter {
    pub(crate) fn measure(&mut self, a: &Point, b: &Point) {
        let distance = a.distance_to(b);
        self.calls += 1;
        if self.best.map_or(true, |(_, best)| distance > best) {
            self.best = Some(((*a, *b), distance));
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls
    }

    pub(crate) fn finish(self) -> Result<FarthestPair, GeometryError> {
        let (pair, distance) = self.best.ok_or_else(|| {
            GeometryError::MalformedHull("no distance was evaluated".to_string())
        })?;
        Ok(FarthestPair { pair, distance, distance_calls: self.calls })
    }
}

/// A strategy for finding the farthest pair among the vertices of a convex hull.
pub trait FindFarthestPair {
    /// Short human readable name, used in reports.
    fn name(&self) -> &'static str;

    fn find(&self, hull: &ConvexHull) -> Result<FarthestPair, GeometryError>;
}

/// Hulls with fewer than two vertices have no pair at all.
pub(crate) fn require_pair(hull: &ConvexHull) -> Result<(), GeometryError> {
    if hull.len() < 2 {
        return Err(GeometryError::DegenerateHull { vertices: hull.len() });
    }
    Ok(())
}

/// Farthest pair of the hull by rotating calipers, see [`RotatingCalipers`].
pub fn rotating_calipers(hull: &ConvexHull) -> Result<FarthestPair, GeometryError> {
    RotatingCalipers.find(hull)
}

/// Farthest pair of the hull by checking every pair, see [`BruteForce`].
pub fn brute_force(hull: &ConvexHull) -> Result<FarthestPair, GeometryError> {
    BruteForce.find(hull)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cloud::PointCloud;
    use crate::hull::build_hull;

    fn hull_of(coords: &[(i32, i32)]) -> ConvexHull {
        let points: Vec<Point> = coords.iter().map(|&c| Point::from(c)).collect();
        build_hull(&points).unwrap()
    }

    fn same_pair(found: (Point, Point), a: Point, b: Point) -> bool {
        found == (a, b) || found == (b, a)
    }

    #[test]
    fn counter_keeps_first_of_equal_pairs() {
        let mut counter = DistanceCounter::default();
        counter.measure(&Point::new(0, 0), &Point::new(3, 4));
        counter.measure(&Point::new(0, 0), &Point::new(4, 3));
        counter.measure(&Point::new(0, 0), &Point::new(1, 1));
        assert_eq!(counter.calls(), 3);
        let result = counter.finish().unwrap();
        assert_eq!(result.pair, (Point::new(0, 0), Point::new(3, 4)));
        assert_eq!(result.distance, 5.);
        assert_eq!(result.distance_calls, 3);
    }

    #[test]
    fn empty_counter() {
        assert!(matches!(
            DistanceCounter::default().finish(),
            Err(GeometryError::MalformedHull(_))
        ));
    }

    const SOLVERS: [&dyn FindFarthestPair; 2] = [&RotatingCalipers, &BruteForce];

    #[test]
    fn square_with_interior_point() {
        let hull = hull_of(&[(0, 0), (0, 10), (10, 0), (10, 10), (5, 5)]);
        for solver in SOLVERS {
            let result = solver.find(&hull).unwrap();
            assert!((result.distance - 10. * f64::sqrt(2.)).abs() < 1e-9);
            assert!(
                same_pair(result.pair, Point::new(0, 0), Point::new(10, 10))
                    || same_pair(result.pair, Point::new(10, 0), Point::new(0, 10)),
                "{} found {:?}, not a diagonal",
                solver.name(),
                result.pair
            );
        }
    }

    #[test]
    fn collinear_points() {
        let hull = hull_of(&[(0, 0), (5, 0), (10, 0)]);
        for solver in SOLVERS {
            let result = solver.find(&hull).unwrap();
            assert!(same_pair(result.pair, Point::new(0, 0), Point::new(10, 0)));
            assert_eq!(result.distance, 10.);
            assert_eq!(result.distance_calls, 1);
        }
    }

    #[test]
    fn coincident_points() {
        let hull = hull_of(&[(3, 3), (3, 3), (3, 3)]);
        for solver in SOLVERS {
            assert_eq!(solver.find(&hull), Err(GeometryError::DegenerateHull { vertices: 1 }));
        }
    }

    #[test]
    fn pentagon_with_interior_point() {
        let hull = hull_of(&[(250, 0), (488, 173), (397, 452), (103, 452), (12, 173), (250, 250)]);
        assert!(!hull.vertices().contains(&Point::new(250, 250)));

        let calipers = rotating_calipers(&hull).unwrap();
        let brute = brute_force(&hull).unwrap();
        for result in [calipers, brute] {
            assert!(same_pair(result.pair, Point::new(488, 173), Point::new(12, 173)));
            assert_eq!(result.distance, 476.);
        }
        assert_eq!(brute.distance_calls, 10);
        assert!(calipers.distance_calls <= 5);
    }

    #[test]
    fn triangle_with_long_far_edge() {
        // the longest side does not touch the pivot
        let hull = hull_of(&[(5, 0), (10, 1), (0, 1)]);
        let result = rotating_calipers(&hull).unwrap();
        assert!(same_pair(result.pair, Point::new(10, 1), Point::new(0, 1)));
        assert_eq!(result.distance, 10.);
    }

    #[test]
    fn solvers_agree_on_random_clouds() {
        for seed in 0..200 {
            let count = 3 + (seed as usize % 50) * 4;
            let extent = if seed % 3 == 0 { 20 } else { 500 };
            let points = PointCloud::random(count, extent, seed).points();
            let hull = build_hull(&points).unwrap();
            if hull.len() < 2 {
                continue;
            }

            let calipers = rotating_calipers(&hull).unwrap();
            let brute = brute_force(&hull).unwrap();
            assert!(
                (calipers.distance - brute.distance).abs() <= 1e-9 * brute.distance,
                "seed {}: calipers found {} but brute force {} on {:?}",
                seed,
                calipers.distance,
                brute.distance,
                hull.vertices()
            );

            let n = hull.len();
            assert_eq!(brute.distance_calls, n * (n - 1) / 2);
            if n >= 4 {
                assert!(calipers.distance_calls <= brute.distance_calls);
            }
        }
    }

    #[test]
    fn names() {
        assert_eq!(RotatingCalipers.name(), "Rotating Calipers");
        assert_eq!(BruteForce.name(), "Brute-Force");
    }
}
