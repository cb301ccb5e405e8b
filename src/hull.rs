use log::{debug, trace};

use crate::error::GeometryError;
use crate::point::{polar_order, turn, BoundingBox, Orientation, Point};

/// Vertices of a convex polygon in counter-clockwise order.
///
/// The first vertex is the lowest (then leftmost) point for hulls produced by [`build_hull`].
/// No two vertices coincide and no three consecutive vertices are collinear. Coincident or
/// collinear inputs degenerate to one or two vertices respectively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvexHull {
    vertices: Vec<Point>,
}

impl ConvexHull {
    /// Wrap an existing vertex sequence, checking that it really is a convex hull.
    pub fn from_vertices(vertices: Vec<Point>) -> Result<Self, GeometryError> {
        match vertices.as_slice() {
            [] => return Err(GeometryError::InvalidInput),
            [_] => {}
            [a, b] if a == b => {
                return Err(GeometryError::MalformedHull(format!("duplicate vertex {}", a)));
            }
            [_, _] => {}
            _ => {
                let n = vertices.len();
                for i in 0..n {
                    let (a, b, c) = (&vertices[i], &vertices[(i + 1) % n], &vertices[(i + 2) % n]);
                    if turn(a, b, c) != Orientation::CounterClockwise {
                        return Err(GeometryError::MalformedHull(format!(
                            "{} -> {} -> {} is not a counter-clockwise turn",
                            a, b, c
                        )));
                    }
                }
                // left turns only is not enough, a pentagram turns left everywhere too
                let first = &vertices[0];
                for pair in vertices[1..].windows(2) {
                    if turn(first, &pair[0], &pair[1]) != Orientation::CounterClockwise {
                        return Err(GeometryError::MalformedHull(
                            "vertices wind around more than once".to_string(),
                        ));
                    }
                }
            }
        }
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false, a hull has at least one vertex.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The boundary segments in traversal order, including the one closing the polygon.
    ///
    /// A two vertex hull yields its segment once, a single vertex yields nothing.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        let count = match n {
            0 | 1 => 0,
            2 => 1,
            _ => n,
        };
        (0..count).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Whether `p` lies inside or on the boundary of the hull.
    pub fn contains(&self, p: &Point) -> bool {
        match self.vertices.as_slice() {
            [] => false,
            [a] => a == p,
            [a, b] => {
                let bbox = BoundingBox(
                    Point::new(a.x().min(b.x()), a.y().min(b.y())),
                    Point::new(a.x().max(b.x()), a.y().max(b.y())),
                );
                turn(a, b, p) == Orientation::Collinear && bbox.contains(p)
            }
            _ => self
                .edges()
                .all(|(a, b)| turn(&a, &b, p) != Orientation::Clockwise),
        }
    }
}

/// Compute the convex hull of `points` with a Graham scan.
///
/// The points are sorted by angle around the lowest (then leftmost) point and swept once
/// counter-clockwise, keeping a stack of hull candidates that is popped whenever the last
/// two candidates and the next point fail to make a strict left turn. Duplicates and points
/// on hull edges are dropped.
pub fn build_hull(points: &[Point]) -> Result<ConvexHull, GeometryError> {
    let pivot = *points.iter().min().ok_or(GeometryError::InvalidInput)?;

    let mut sorted = points.to_vec();
    sorted.sort_by(|p, q| polar_order(&pivot, p, q));
    debug!("Building hull of {} points around pivot {}", sorted.len(), pivot);

    // copies of the pivot sort to the front
    let Some(k1) = sorted.iter().position(|p| *p != pivot) else {
        debug!("All points coincide with {}", pivot);
        return Ok(ConvexHull { vertices: vec![pivot] });
    };

    // of the points on the first ray only the farthest one is a vertex
    let k2 = sorted[k1 + 1..]
        .iter()
        .position(|p| turn(&pivot, &sorted[k1], p) != Orientation::Collinear)
        .map_or(sorted.len(), |offset| k1 + 1 + offset);

    let mut stack: Vec<Point> = Vec::with_capacity(sorted.len());
    stack.push(pivot);
    stack.push(sorted[k2 - 1]);

    for &candidate in &sorted[k2..] {
        loop {
            let [.., below, top] = stack.as_slice() else {
                return Err(GeometryError::MalformedHull(format!(
                    "stack underflow while placing {}",
                    candidate
                )));
            };
            if turn(below, top, &candidate) == Orientation::CounterClockwise {
                break;
            }
            trace!("Dropping {} before {}", top, candidate);
            stack.pop();
        }
        stack.push(candidate);
    }

    debug!("Hull has {} of {} points", stack.len(), points.len());
    Ok(ConvexHull { vertices: stack })
}
