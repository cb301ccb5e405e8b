use std::cmp::Ordering;
use std::fmt;

/// A point in the plane with integer coordinates.
///
/// Points are ordered by `y` first and `x` second, so the minimum of a point set is its
/// lowest point, leftmost among equally low ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point) -> f64 {
        f64::hypot(
            f64::from(other.x) - f64::from(self.x),
            f64::from(other.y) - f64::from(self.y),
        )
    }

    /// Squared euclidean distance, exact for all `i32` inputs.
    pub fn distance_squared(&self, other: &Point) -> i128 {
        let dx = i128::from(other.x) - i128::from(self.x);
        let dy = i128::from(other.y) - i128::from(self.y);
        dx * dx + dy * dy
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Direction of the turn `a -> b -> c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}

impl Orientation {
    /// -1, 0 or +1.
    pub fn sign(self) -> i8 {
        match self {
            Orientation::Clockwise => -1,
            Orientation::Collinear => 0,
            Orientation::CounterClockwise => 1,
        }
    }
}

/// Twice the signed area of the triangle `a, b, c`, i.e. the cross product `(b - a) x (c - a)`.
fn cross(a: &Point, b: &Point, c: &Point) -> i128 {
    let (ax, ay) = (i128::from(a.x), i128::from(a.y));
    (i128::from(b.x) - ax) * (i128::from(c.y) - ay) - (i128::from(b.y) - ay) * (i128::from(c.x) - ax)
}

/// Orientation of the turn `a -> b -> c`.
///
/// Computed in `i128`, so the sign is exact for every `i32` coordinate.
pub fn turn(a: &Point, b: &Point, c: &Point) -> Orientation {
    match cross(a, b, c).cmp(&0) {
        Ordering::Less => Orientation::Clockwise,
        Ordering::Equal => Orientation::Collinear,
        Ordering::Greater => Orientation::CounterClockwise,
    }
}

/// Twice the unsigned area of the triangle `a, b, c`.
///
/// Exact, and therefore the right tool for comparing triangle areas.
pub fn doubled_area(a: &Point, b: &Point, c: &Point) -> i128 {
    cross(a, b, c).abs()
}

/// Unsigned area of the triangle `p1, p2, p3` via Heron's formula.
pub fn triangle_area(p1: &Point, p2: &Point, p3: &Point) -> f64 {
    let a = p1.distance_to(p2);
    let b = p2.distance_to(p3);
    let c = p3.distance_to(p1);
    let s = (a + b + c) / 2.;
    // rounding can push the product of a flat triangle slightly below zero
    f64::sqrt(f64::max(s * (s - a) * (s - b) * (s - c), 0.))
}

/// Angular order of `p` and `q` around `pivot`.
///
/// Points on or above the horizontal through `pivot` (due east included) come before points
/// below it. Within a half plane the counter-clockwise earlier point comes first, and points on
/// the same ray from `pivot` are ordered by increasing distance. Copies of `pivot` sort first.
pub fn polar_order(pivot: &Point, p: &Point, q: &Point) -> Ordering {
    let (dx1, dy1) = (i64::from(p.x) - i64::from(pivot.x), i64::from(p.y) - i64::from(pivot.y));
    let (dx2, dy2) = (i64::from(q.x) - i64::from(pivot.x), i64::from(q.y) - i64::from(pivot.y));

    let by_angle = if dy1 >= 0 && dy2 < 0 {
        Ordering::Less
    } else if dy2 >= 0 && dy1 < 0 {
        Ordering::Greater
    } else if dy1 == 0 && dy2 == 0 {
        // both on the horizontal: east ray before west ray
        (dx1 < 0).cmp(&(dx2 < 0))
    } else {
        match turn(pivot, p, q) {
            Orientation::CounterClockwise => Ordering::Less,
            Orientation::Clockwise => Ordering::Greater,
            Orientation::Collinear => Ordering::Equal,
        }
    };

    by_angle.then_with(|| pivot.distance_squared(p).cmp(&pivot.distance_squared(q)))
}

/// Axis aligned box given by its lower left and upper right corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox(pub Point, pub Point);

impl BoundingBox {
    pub fn lower_left(&self) -> Point {
        self.0
    }

    pub fn upper_right(&self) -> Point {
        self.1
    }

    pub fn width(&self) -> i32 {
        self.upper_right().x() - self.lower_left().x()
    }

    pub fn height(&self) -> i32 {
        self.upper_right().y() - self.lower_left().y()
    }

    pub fn contains(&self, p: &Point) -> bool {
        (self.0.x..=self.1.x).contains(&p.x) && (self.0.y..=self.1.y).contains(&p.y)
    }
}
