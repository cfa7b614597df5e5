use rand::Rng;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const LOWER_LEFT: usize = 0;
pub const UPPER_LEFT: usize = 1;
pub const LOWER_RIGHT: usize = 2;
pub const UPPER_RIGHT: usize = 3;

/// A 2-D coordinate pair. Equality is exact, callers snap or dedupe themselves.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Closed axis-aligned box described by its center and per-axis half widths.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    pub center: Point,
    pub half_extent: Point,
}

impl Region {
    pub const fn new(center: Point, half_extent: Point) -> Self {
        Self {
            center,
            half_extent,
        }
    }

    pub fn min(&self) -> Point {
        Point::new(
            self.center.x - self.half_extent.x,
            self.center.y - self.half_extent.y,
        )
    }

    pub fn max(&self) -> Point {
        Point::new(
            self.center.x + self.half_extent.x,
            self.center.y + self.half_extent.y,
        )
    }

    pub fn width(&self) -> f64 {
        self.half_extent.x * 2.0
    }

    pub fn height(&self) -> f64 {
        self.half_extent.y * 2.0
    }

    /// Corners in quadrant order: lower-left, upper-left, lower-right, upper-right.
    pub fn corners(&self) -> [Point; 4] {
        let min = self.min();
        let max = self.max();
        [
            Point::new(min.x, min.y),
            Point::new(min.x, max.y),
            Point::new(max.x, min.y),
            Point::new(max.x, max.y),
        ]
    }

    /// Finite center and finite, strictly positive half extents.
    pub fn is_valid(&self) -> bool {
        self.center.is_finite()
            && self.half_extent.is_finite()
            && self.half_extent.x > 0.0
            && self.half_extent.y > 0.0
    }

    pub fn contains_point(&self, point: Point) -> bool {
        let min = self.min();
        let max = self.max();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// How many times the smaller half extent can be halved before it reaches zero.
    pub fn max_subdivisions(&self) -> usize {
        let mut half = self.half_extent.x.min(self.half_extent.y);
        let mut count = 0;
        while half / 2.0 > 0.0 {
            half /= 2.0;
            count += 1;
        }
        count
    }

    // Ties go to the upper/right side.
    pub fn quadrant(&self, point: Point) -> usize {
        let right = if point.x >= self.center.x { 2 } else { 0 };
        let upper = if point.y >= self.center.y { 1 } else { 0 };
        right | upper
    }

    pub fn child(&self, quadrant: usize) -> Region {
        let half_x = self.half_extent.x / 2.0;
        let half_y = self.half_extent.y / 2.0;
        let (sign_x, sign_y) = match quadrant {
            LOWER_LEFT => (-1.0, -1.0),
            UPPER_LEFT => (-1.0, 1.0),
            LOWER_RIGHT => (1.0, -1.0),
            _ => (1.0, 1.0),
        };
        Region {
            center: Point::new(
                self.center.x + sign_x * half_x,
                self.center.y + sign_y * half_y,
            ),
            half_extent: Point::new(half_x, half_y),
        }
    }

    pub fn random_point_inside<R: Rng>(&self, rng: &mut R) -> Point {
        let min = self.min();
        let max = self.max();
        Point::new(
            Self::safe_rand(rng, min.x, max.x),
            Self::safe_rand(rng, min.y, max.y),
        )
    }

    fn safe_rand<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
        if min >= max {
            return min;
        }
        rng.gen_range(min..max)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "center={} half={}", self.center, self.half_extent)
    }
}

/// Closed axis-aligned box stored by its edges.
///
/// Child boxes reuse the parent's edges and split line exactly, so a point
/// routed into a child always lies inside the child's box.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Extent {
    pub min: Point,
    pub max: Point,
}

impl Extent {
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    pub fn from_region(region: &Region) -> Self {
        Self {
            min: region.min(),
            max: region.max(),
        }
    }

    /// Corners in quadrant order: lower-left, upper-left, lower-right, upper-right.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min.x, self.min.y),
            Point::new(self.min.x, self.max.y),
            Point::new(self.max.x, self.min.y),
            Point::new(self.max.x, self.max.y),
        ]
    }

    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Box of `quadrant` when this box is split at `split`.
    pub fn child(&self, quadrant: usize, split: Point) -> Extent {
        let (min_x, max_x) = if quadrant & 2 != 0 {
            (split.x, self.max.x)
        } else {
            (self.min.x, split.x)
        };
        let (min_y, max_y) = if quadrant & 1 != 0 {
            (split.y, self.max.y)
        } else {
            (self.min.y, split.y)
        };
        Extent {
            min: Point::new(min_x, min_y),
            max: Point::new(max_x, max_y),
        }
    }
}

/// Half-open query rectangle `[min.x, max.x) x [min.y, max.y)`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Bounds spanning the box, with the max edge nudged outward so the
    /// box's own closed max edge is still covered by the half-open test.
    pub fn covering(extent: &Extent) -> Self {
        Self {
            min: extent.min,
            max: Point::new(next_up(extent.max.x), next_up(extent.max.y)),
        }
    }

    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.min.x && point.x < self.max.x && point.y >= self.min.y && point.y < self.max.y
    }

    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min.x, self.min.y),
            Point::new(self.min.x, self.max.y),
            Point::new(self.max.x, self.min.y),
            Point::new(self.max.x, self.max.y),
        ]
    }

    pub fn is_empty(&self) -> bool {
        !(self.min.x < self.max.x && self.min.y < self.max.y)
    }
}

fn next_up(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    if value == 0.0 {
        return f64::from_bits(1);
    }
    let bits = value.to_bits();
    if value > 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}
