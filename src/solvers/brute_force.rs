use log::debug;

use crate::error::GeometryError;
use crate::hull::ConvexHull;
use crate::solvers::{require_pair, DistanceCounter, FarthestPair, FindFarthestPair};

/// Compares every unordered pair of hull vertices, `n * (n - 1) / 2` distance evaluations.
///
/// Serves as reference for [`RotatingCalipers`](crate::solvers::RotatingCalipers).
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl FindFarthestPair for BruteForce {
    fn name(&self) -> &'static str {
        "Brute-Force"
    }

    fn find(&self, hull: &ConvexHull) -> Result<FarthestPair, GeometryError> {
        require_pair(hull)?;
        let v = hull.vertices();
        let mut counter = DistanceCounter::default();
        for (i, a) in v.iter().enumerate() {
            for b in &v[i + 1..] {
                counter.measure(a, b);
            }
        }
        debug!("{} took {} distance calculations for {} vertices", self.name(), counter.calls(), v.len());
        counter.finish()
    }
}
