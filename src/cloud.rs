use ndarray::{Array2, Axis};
use ndarray_rand::rand::rngs::StdRng;
use ndarray_rand::rand::SeedableRng;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use ndarray_stats::QuantileExt;

use crate::point::{BoundingBox, Point};

/// A finite set of integer points, stored as a `n x 2` matrix of `(x, y)` rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointCloud {
    positions: Array2<i32>,
}

impl PointCloud {
    pub fn new(positions: Array2<i32>) -> Self {
        Self { positions }
    }

    /// `count` points with both coordinates drawn uniformly from `0..=extent`.
    pub fn random(count: usize, extent: i32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self {
            positions: Array2::<i32>::random_using(
                (count, 2),
                Uniform::new_inclusive(0, extent),
                &mut rng,
            ),
        }
    }

    pub fn from_points(points: &[Point]) -> Self {
        Self {
            positions: Array2::from_shape_fn((points.len(), 2), |(i, j)| match j {
                0 => points[i].x(),
                _ => points[i].y(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len_of(Axis(0))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the location of a point.
    pub fn coord(&self, index: usize) -> Point {
        Point::new(self.positions[[index, 0]], self.positions[[index, 1]])
    }

    pub fn points(&self) -> Vec<Point> {
        self.positions
            .rows()
            .into_iter()
            .map(|row| Point::new(row[0], row[1]))
            .collect()
    }

    /// The bounding box that encompasses all points, `None` for an empty cloud.
    pub fn bbox(&self) -> Option<BoundingBox> {
        let xs = self.positions.column(0);
        let ys = self.positions.column(1);
        Some(BoundingBox(
            Point::new(*xs.min().ok()?, *ys.min().ok()?),
            Point::new(*xs.max().ok()?, *ys.max().ok()?),
        ))
    }
}

impl From<&[Point]> for PointCloud {
    fn from(points: &[Point]) -> Self {
        Self::from_points(points)
    }
}
