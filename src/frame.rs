//! Axis-aligned, inclusive-bounds rectangles over grid points.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SheetError};
use crate::point::Point;

/// An axis-aligned rectangle with inclusive bounds.
///
/// A frame holds two primary points: `origin` (the top-left corner) and
/// `corner` (the bottom-right corner). Every lattice point between them,
/// inclusive, belongs to the frame. The empty frame is a distinct
/// sentinel; it is not the same as a one-point frame whose origin
/// equals its corner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Frame {
    origin: Point,
    corner: Point,
    is_empty: bool,
}

impl Frame {
    /// Create a new frame from its top-left and bottom-right corners.
    ///
    /// # Errors
    /// Returns [`SheetError::InvalidGeometry`] unless
    /// `origin.x <= corner.x && origin.y <= corner.y`.
    pub fn new(origin: Point, corner: Point) -> Result<Self> {
        if origin.x > corner.x || origin.y > corner.y {
            return Err(SheetError::InvalidGeometry { origin, corner });
        }
        Ok(Self {
            origin,
            corner,
            is_empty: false,
        })
    }

    /// The canonical empty sentinel: origin and corner at `(0, 0)`,
    /// containing no points.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            origin: Point::new(0, 0),
            corner: Point::new(0, 0),
            is_empty: true,
        }
    }

    /// A frame anchored at `(0, 0)` with the given dimensions.
    /// The corner is `(width - 1, height - 1)` since frames are
    /// zero-indexed.
    ///
    /// # Errors
    /// Returns [`SheetError::InvalidGeometry`] if either dimension is
    /// less than 1.
    pub fn of_size(width: i64, height: i64) -> Result<Self> {
        Self::new(Point::new(0, 0), Point::new(width - 1, height - 1))
    }

    /// Build the axis-aligned frame whose two defining corners are `a`
    /// and `b`, in any of the four relative orientations. Collapses to a
    /// single point when `a == b`.
    pub fn from_point_to_point(a: Point, b: Point) -> Self {
        Self {
            origin: Point::new(a.x.min(b.x), a.y.min(b.y)),
            corner: Point::new(a.x.max(b.x), a.y.max(b.y)),
            is_empty: false,
        }
    }

    /// The top-left corner.
    #[inline]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// The bottom-right corner.
    #[inline]
    pub const fn corner(&self) -> Point {
        self.corner
    }

    /// Whether this frame is the empty sentinel.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.is_empty
    }

    /// Whether `point` falls within the inclusive bounds. Always false
    /// for the empty frame.
    pub fn contains(&self, point: Point) -> bool {
        if self.is_empty {
            return false;
        }
        point.x >= self.origin.x
            && point.x <= self.corner.x
            && point.y >= self.origin.y
            && point.y <= self.corner.y
    }

    /// Whether `other` is fully circumscribed by this frame, i.e. both
    /// its origin and corner are contained. False if either frame is
    /// empty.
    pub fn contains_frame(&self, other: &Frame) -> bool {
        !other.is_empty && self.contains(other.origin) && self.contains(other.corner)
    }

    /// Return a new frame shifted by `delta`, leaving this one
    /// untouched. The empty frame translates to the empty sentinel.
    #[must_use]
    pub fn translated(&self, delta: Point) -> Self {
        if self.is_empty {
            return Self::empty();
        }
        Self {
            origin: self.origin.translated(delta),
            corner: self.corner.translated(delta),
            is_empty: false,
        }
    }

    /// Shift this frame in place by `delta`. No-op on the empty frame.
    pub fn translate(&mut self, delta: Point) {
        if self.is_empty {
            return;
        }
        self.origin.translate(delta);
        self.corner.translate(delta);
    }

    /// The overlap between this frame and `other`, or the empty frame
    /// when they do not intersect.
    ///
    /// Full containment either direction and the two overlapping-band
    /// configurations resolve directly from the corners; the remaining
    /// corner-overlap cases fall back to filtering the union's lattice
    /// down to points contained by both operands.
    pub fn intersection(&self, other: &Frame) -> Frame {
        if self.is_empty || other.is_empty {
            return Frame::empty();
        }

        if self.contains_frame(other) {
            return *other;
        }
        if other.contains_frame(self) {
            return *self;
        }

        // Band overlap: one frame's origin inside the other, whose
        // corner is inside the first.
        if self.contains(other.origin) && other.contains(self.corner) {
            return Frame {
                origin: other.origin,
                corner: self.corner,
                is_empty: false,
            };
        }
        if other.contains(self.origin) && self.contains(other.corner) {
            return Frame {
                origin: self.origin,
                corner: other.corner,
                is_empty: false,
            };
        }

        // Disjoint on either axis: nothing to scan.
        if self.right() < other.left()
            || other.right() < self.left()
            || self.bottom() < other.top()
            || other.bottom() < self.top()
        {
            return Frame::empty();
        }

        // Corner overlaps (top-right, bottom-left, etc.): take the
        // extent of the union's points that lie inside both. With the
        // disjoint cases gone the scan is bounded by overlapping
        // operands, which at usage sites are visible windows.
        let mut extent: Option<(Point, Point)> = None;
        for point in self.union(other).points() {
            if self.contains(point) && other.contains(point) {
                extent = Some(match extent {
                    None => (point, point),
                    Some((min, max)) => (
                        Point::new(min.x.min(point.x), min.y.min(point.y)),
                        Point::new(max.x.max(point.x), max.y.max(point.y)),
                    ),
                });
            }
        }
        match extent {
            Some((origin, corner)) => Frame {
                origin,
                corner,
                is_empty: false,
            },
            None => Frame::empty(),
        }
    }

    /// The smallest frame enclosing both this frame and `other`.
    /// An empty operand contributes nothing.
    pub fn union(&self, other: &Frame) -> Frame {
        if self.is_empty {
            return *other;
        }
        if other.is_empty {
            return *self;
        }
        Frame {
            origin: Point::new(
                self.origin.x.min(other.origin.x),
                self.origin.y.min(other.origin.y),
            ),
            corner: Point::new(
                self.corner.x.max(other.corner.x),
                self.corner.y.max(other.corner.y),
            ),
            is_empty: false,
        }
    }

    /// Iterate every contained point, x-major: for each column, all of
    /// its rows. Yields nothing for the empty frame.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let Self {
            origin,
            corner,
            is_empty,
        } = *self;
        let xs = if is_empty {
            0..0
        } else {
            origin.x..corner.x + 1
        };
        xs.flat_map(move |x| (origin.y..corner.y + 1).map(move |y| Point::new(x, y)))
    }

    /// Iterate every contained coordinate pair in the same order as
    /// [`points`](Frame::points).
    pub fn coordinates(&self) -> impl Iterator<Item = (i64, i64)> {
        self.points().map(|p| (p.x, p.y))
    }

    /// Iterate row by row (y-major), yielding each row's y index and
    /// its points ordered by x. Yields nothing for the empty frame.
    pub fn point_rows(&self) -> impl Iterator<Item = (i64, Vec<Point>)> {
        let Self {
            origin,
            corner,
            is_empty,
        } = *self;
        let ys = if is_empty {
            0..0
        } else {
            origin.y..corner.y + 1
        };
        ys.map(move |y| {
            let row = (origin.x..corner.x + 1)
                .map(|x| Point::new(x, y))
                .collect();
            (y, row)
        })
    }

    /// Call `f` with every contained point, in x-major order.
    pub fn for_each_point(&self, mut f: impl FnMut(Point)) {
        for point in self.points() {
            f(point);
        }
    }

    /// Call `f` with each row of points and its y index, top to bottom.
    pub fn for_each_point_row(&self, mut f: impl FnMut(&[Point], i64)) {
        for (y, row) in self.point_rows() {
            f(&row, y);
        }
    }

    /// Accumulate `f`'s results over every contained point, in x-major
    /// order.
    pub fn map_points<T>(&self, f: impl FnMut(Point) -> T) -> Vec<T> {
        self.points().map(f).collect()
    }

    /// Left edge (origin x).
    #[inline]
    pub const fn left(&self) -> i64 {
        self.origin.x
    }

    /// Right edge (corner x).
    #[inline]
    pub const fn right(&self) -> i64 {
        self.corner.x
    }

    /// Top edge (origin y).
    #[inline]
    pub const fn top(&self) -> i64 {
        self.origin.y
    }

    /// Bottom edge (corner y).
    #[inline]
    pub const fn bottom(&self) -> i64 {
        self.corner.y
    }

    /// The top-left corner point.
    #[inline]
    pub const fn top_left(&self) -> Point {
        self.origin
    }

    /// The top-right corner point.
    #[inline]
    pub const fn top_right(&self) -> Point {
        Point::new(self.corner.x, self.origin.y)
    }

    /// The bottom-left corner point.
    #[inline]
    pub const fn bottom_left(&self) -> Point {
        Point::new(self.origin.x, self.corner.y)
    }

    /// The bottom-right corner point.
    #[inline]
    pub const fn bottom_right(&self) -> Point {
        self.corner
    }

    /// Size as `corner - origin` componentwise; `(0, 0)` when empty.
    /// Note a one-point frame also has size `(0, 0)` — use
    /// [`dimensions`](Frame::dimensions) to tell them apart.
    pub const fn size(&self) -> Point {
        if self.is_empty {
            return Point::new(0, 0);
        }
        Point::new(self.corner.x - self.origin.x, self.corner.y - self.origin.y)
    }

    /// 0 for the empty frame, 1 for a single point, 2 otherwise.
    pub fn dimensions(&self) -> u8 {
        if self.is_empty {
            0
        } else if self.origin == self.corner {
            1
        } else {
            2
        }
    }

    /// The number of lattice points contained: `(w + 1) * (h + 1)` for
    /// non-empty frames, 0 when empty.
    pub const fn area(&self) -> i64 {
        if self.is_empty {
            return 0;
        }
        (self.corner.x - self.origin.x + 1) * (self.corner.y - self.origin.y + 1)
    }
}

impl PartialEq for Frame {
    /// Two frames are equal iff both are empty, or both are non-empty
    /// with equal origin and corner.
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty && other.is_empty {
            return true;
        }
        if self.is_empty || other.is_empty {
            return false;
        }
        self.origin == other.origin && self.corner == other.corner
    }
}

impl Eq for Frame {}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty {
            write!(f, "Frame(empty)")
        } else {
            write!(f, "Frame({}, {})", self.origin, self.corner)
        }
    }
}
