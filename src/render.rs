#[cfg(feature = "svg")]
pub mod svg;

use log::warn;

use crate::cloud::PointCloud;
use crate::hull::{build_hull, ConvexHull};
use crate::solvers::{FarthestPair, FindFarthestPair};

/// Everything there is to draw: the input points and whatever could be computed from them.
#[derive(Debug, Clone)]
pub struct Scene {
    cloud: PointCloud,
    hull: Option<ConvexHull>,
    farthest: Option<FarthestPair>,
}

impl Scene {
    pub fn new(cloud: PointCloud) -> Self {
        Self { cloud, hull: None, farthest: None }
    }

    /// Build the hull of `cloud` and its farthest pair with `solver`.
    ///
    /// Parts that cannot be computed, e.g. the pair of a single point, are left out.
    pub fn compute(cloud: PointCloud, solver: &dyn FindFarthestPair) -> Self {
        let hull = build_hull(&cloud.points())
            .map_err(|e| warn!("No hull for {} points: {}", cloud.len(), e))
            .ok();
        let farthest = hull.as_ref().and_then(|hull| {
            solver
                .find(hull)
                .map_err(|e| warn!("{} found no farthest pair: {}", solver.name(), e))
                .ok()
        });
        Self { cloud, hull, farthest }
    }

    pub fn with_hull(self, hull: ConvexHull) -> Self {
        Self { hull: Some(hull), ..self }
    }

    pub fn with_farthest_pair(self, farthest: FarthestPair) -> Self {
        Self { farthest: Some(farthest), ..self }
    }

    pub fn cloud(&self) -> &PointCloud {
        &self.cloud
    }

    pub fn hull(&self) -> Option<&ConvexHull> {
        self.hull.as_ref()
    }

    pub fn farthest_pair(&self) -> Option<&FarthestPair> {
        self.farthest.as_ref()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::point::Point;
    use crate::solvers::{BruteForce, RotatingCalipers};

    #[test]
    fn compute_everything() {
        let scene = Scene::compute(PointCloud::random(100, 500, 3), &RotatingCalipers);
        assert_eq!(scene.cloud().len(), 100);
        assert!(scene.hull().unwrap().len() >= 3);
        assert!(scene.farthest_pair().is_some());
    }

    #[test]
    fn compute_skips_what_is_undefined() {
        let cloud = PointCloud::from_points(&[Point::new(3, 3), Point::new(3, 3)]);
        let scene = Scene::compute(cloud, &BruteForce);
        assert_eq!(scene.hull().map(ConvexHull::len), Some(1));
        assert!(scene.farthest_pair().is_none());

        let scene = Scene::compute(PointCloud::from_points(&[]), &BruteForce);
        assert!(scene.hull().is_none());
        assert!(scene.farthest_pair().is_none());
    }
}
