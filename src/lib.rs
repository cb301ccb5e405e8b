//! Convex hulls of planar integer point sets and their farthest pair.
//!
//! The pipeline is explicit: [`build_hull`] turns points into a [`ConvexHull`], and a
//! [`FindFarthestPair`] strategy turns the hull into a [`FarthestPair`]. Both
//! [`RotatingCalipers`] and the [`BruteForce`] reference report how many distances they
//! evaluated.
pub mod cloud;
pub mod error;
pub mod hull;
pub mod point;
pub mod render;
pub mod solvers;

pub use cloud::PointCloud;
pub use error::GeometryError;
pub use hull::{build_hull, ConvexHull};
pub use point::{polar_order, triangle_area, turn, Orientation, Point};
pub use solvers::{brute_force, rotating_calipers, BruteForce, FarthestPair, FindFarthestPair, RotatingCalipers};
