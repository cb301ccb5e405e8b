use log::{debug, trace};

use crate::error::GeometryError;
use crate::hull::ConvexHull;
use crate::point::doubled_area;
use crate::solvers::{require_pair, DistanceCounter, FarthestPair, FindFarthestPair};

/// Finds the diameter of a convex polygon with Shamos' rotating calipers.
///
/// Every pair of points realizing the diameter is antipodal: the polygon fits between two
/// parallel lines through them. Walking the polygon counter-clockwise, the vertex farthest
/// from the line through edge `(i, i + 1)` only ever moves forward, and it is the one where
/// the triangle area over that edge stops growing. So two indices sweeping around the
/// polygon once visit all antipodal pairs with a number of distance evaluations linear in
/// the number of vertices.
/// ```text
///   k := 1
///   while area(v[n], v[k+1], v[0]) > area(v[n], v[k], v[0]) do k := k + 1
///   { v[k] is antipodal to the edge (v[n], v[0]) }
///   j := k
///   for i := 0 to k do begin
///       check(v[i], v[j])
///       while j < n and area(v[i], v[j+1], v[i+1]) > area(v[i], v[j], v[i+1]) do begin
///           j := j + 1
///           check(v[i], v[j])
///       end
///   end
/// ```
/// The vertices have to be in counter-clockwise order without collinear triples, which
/// [`ConvexHull`] guarantees.
#[derive(Debug, Clone, Copy, Default)]
pub struct RotatingCalipers;

impl FindFarthestPair for RotatingCalipers {
    fn name(&self) -> &'static str {
        "Rotating Calipers"
    }

    fn find(&self, hull: &ConvexHull) -> Result<FarthestPair, GeometryError> {
        require_pair(hull)?;
        let v = hull.vertices();
        let last = v.len() - 1;
        let mut counter = DistanceCounter::default();

        if last == 1 {
            counter.measure(&v[0], &v[1]);
            return counter.finish();
        }

        let mut k = 1;
        while k < last && doubled_area(&v[last], &v[k + 1], &v[0]) > doubled_area(&v[last], &v[k], &v[0]) {
            k += 1;
        }
        trace!("{} is antipodal to the edge {} -> {}", v[k], v[last], v[0]);

        let mut j = k;
        for i in 0..=k {
            if i >= last {
                return Err(GeometryError::MalformedHull(format!(
                    "antipodal walk passed the last vertex at {}",
                    v[i]
                )));
            }
            counter.measure(&v[i], &v[j]);
            while j < last
                && doubled_area(&v[i], &v[j + 1], &v[i + 1]) > doubled_area(&v[i], &v[j], &v[i + 1])
            {
                j += 1;
                counter.measure(&v[i], &v[j]);
            }
        }

        debug!("{} took {} distance calculations for {} vertices", self.name(), counter.calls(), v.len());
        counter.finish()
    }
}
