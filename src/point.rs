//! Integer coordinates on the 2-D grid plane.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SheetError;

/// A pair of x and y coordinates on a 2-dimensional plane.
///
/// Points are value-like: equality is by coordinates, and the only
/// mutation is an explicit [`translate`](Point::translate).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate (column).
    pub x: i64,
    /// Vertical coordinate (row).
    pub y: i64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Translate this point in place by the x and y values of `delta`.
    #[inline]
    pub fn translate(&mut self, delta: Point) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Return a new point shifted by `delta`, leaving this one untouched.
    #[inline]
    #[must_use]
    pub const fn translated(self, delta: Point) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i64; 2]> for Point {
    fn from([x, y]: [i64; 2]) -> Self {
        Self::new(x, y)
    }
}

/// A cell location accepted at grid API boundaries.
///
/// Distinguishes a proper [`Point`] from a raw coordinate pair at the
/// type level; anything else is rejected with
/// [`SheetError::InvalidLocation`] by the fallible conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// A point value.
    Point(Point),
    /// A raw `(x, y)` coordinate pair.
    Coordinate(i64, i64),
}

impl Location {
    /// Resolve the location to a point.
    #[inline]
    pub const fn as_point(self) -> Point {
        match self {
            Location::Point(p) => p,
            Location::Coordinate(x, y) => Point::new(x, y),
        }
    }
}

impl From<Point> for Location {
    fn from(point: Point) -> Self {
        Location::Point(point)
    }
}

impl From<(i64, i64)> for Location {
    fn from((x, y): (i64, i64)) -> Self {
        Location::Coordinate(x, y)
    }
}

impl From<[i64; 2]> for Location {
    fn from([x, y]: [i64; 2]) -> Self {
        Location::Coordinate(x, y)
    }
}

impl TryFrom<&[i64]> for Location {
    type Error = SheetError;

    /// Accept exactly 2-element slices as coordinate pairs.
    fn try_from(slice: &[i64]) -> Result<Self, Self::Error> {
        match *slice {
            [x, y] => Ok(Location::Coordinate(x, y)),
            _ => Err(SheetError::InvalidLocation(format!(
                "expected a 2-element coordinate, got {} element(s)",
                slice.len()
            ))),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_mutates() {
        let mut p = Point::new(2, 3);
        p.translate(Point::new(-1, 4));
        assert_eq!(p, Point::new(1, 7));
    }

    #[test]
    fn test_translated_is_pure() {
        let p = Point::new(2, 3);
        let q = p.translated(Point::new(1, 1));
        assert_eq!(p, Point::new(2, 3));
        assert_eq!(q, Point::new(3, 4));
    }

    #[test]
    fn test_display_form() {
        assert_eq!(Point::new(-4, 12).to_string(), "(-4, 12)");
    }

    #[test]
    fn test_location_from_slice() {
        let loc = Location::try_from(&[5_i64, 6][..]).unwrap();
        assert_eq!(loc.as_point(), Point::new(5, 6));

        let err = Location::try_from(&[5_i64, 6, 7][..]).unwrap_err();
        assert!(err.to_string().contains("invalid location"));
    }
}
