use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Cartesian point in canvas space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation, `t` in `[0, 1]`
    #[must_use]
    pub fn lerp(self, to: Point, t: f64) -> Point {
        Point::new(self.x + (to.x - self.x) * t, self.y + (to.y - self.y) * t)
    }

    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Polar coordinate: `angle` in radians clockwise from 12 o'clock
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Polar {
    pub angle: f64,
    pub radius: f64,
}

impl Polar {
    #[inline]
    #[must_use]
    pub const fn new(angle: f64, radius: f64) -> Self {
        Self { angle, radius }
    }

    /// Project around `centre`; angle 0 points up
    #[must_use]
    pub fn project(self, centre: Point) -> Point {
        Point::new(
            centre.x + self.radius * self.angle.sin(),
            centre.y - self.radius * self.angle.cos(),
        )
    }

    /// Angle in degrees for an SVG `rotate()` that turns the x-axis onto this ray
    #[must_use]
    pub fn rotation_degrees(self) -> f64 {
        self.angle.to_degrees() - 90.0
    }

    /// Labels on the left half are flipped so they read left-to-right
    #[inline]
    #[must_use]
    pub fn is_left_half(self) -> bool {
        self.angle.rem_euclid(TAU) >= std::f64::consts::PI
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    #[must_use]
    pub fn of(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Bounds { min: first, max: first }, |b, p| Bounds {
            min: Point::new(b.min.x.min(p.x), b.min.y.min(p.y)),
            max: Point::new(b.max.x.max(p.x), b.max.y.max(p.y)),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn projection_starts_at_twelve_and_goes_clockwise() {
        let c = Point::new(100.0, 100.0);
        assert!(close(Polar::new(0.0, 10.0).project(c), Point::new(100.0, 90.0)));
        assert!(close(Polar::new(FRAC_PI_2, 10.0).project(c), Point::new(110.0, 100.0)));
        assert!(close(Polar::new(PI, 10.0).project(c), Point::new(100.0, 110.0)));
    }

    #[test]
    fn left_half_detection() {
        assert!(!Polar::new(0.5, 1.0).is_left_half());
        assert!(Polar::new(PI, 1.0).is_left_half());
        assert!(Polar::new(5.0, 1.0).is_left_half());
    }

    #[test]
    fn bounds_of_points() {
        let b = Bounds::of([Point::new(1.0, 5.0), Point::new(-2.0, 3.0), Point::new(4.0, 0.0)]).unwrap();
        assert_eq!(b.min, Point::new(-2.0, 0.0));
        assert_eq!(b.max, Point::new(4.0, 5.0));
        assert!(Bounds::of(Vec::new()).is_none());
    }
}
