//! Sparse value storage over a bounded frame.

use std::collections::HashMap;

use crate::error::{Result, SheetError};
use crate::frame::Frame;
use crate::point::{Location, Point};

/// The opaque cell value delivered by remote data sources.
pub type CellValue = serde_json::Value;

/// A [`SparseGrid`] of JSON cell values, the shape the remote fetch
/// layer populates via [`SparseGrid::load_from_array`].
pub type SheetGrid = SparseGrid<CellValue>;

/// A frame that additionally stores values at a subset of its contained
/// points, keyed by coordinate.
///
/// Presence of a key, not its value, determines whether a point is
/// "filled". Writes are unchecked ([`put_at`](SparseGrid::put_at));
/// reads and bulk loads validate containment and fail with
/// [`SheetError::OutOfBounds`].
#[derive(Debug, Clone)]
pub struct SparseGrid<V> {
    frame: Frame,
    store: HashMap<Point, V>,
}

impl<V> SparseGrid<V> {
    /// Create an unfilled grid spanning `origin` to `corner` inclusive.
    ///
    /// # Errors
    /// Returns [`SheetError::InvalidGeometry`] if `origin` is not the
    /// top-left of `corner`.
    pub fn new(origin: Point, corner: Point) -> Result<Self> {
        Ok(Self {
            frame: Frame::new(origin, corner)?,
            store: HashMap::new(),
        })
    }

    /// Create an unfilled grid anchored at `(0, 0)` with the given
    /// dimensions.
    ///
    /// # Errors
    /// Returns [`SheetError::InvalidGeometry`] if either dimension is
    /// less than 1.
    pub fn of_size(width: i64, height: i64) -> Result<Self> {
        Ok(Self {
            frame: Frame::of_size(width, height)?,
            store: HashMap::new(),
        })
    }

    /// The grid's own bounds.
    #[inline]
    pub const fn frame(&self) -> Frame {
        self.frame
    }

    /// The grid's bottom-right corner.
    #[inline]
    pub const fn corner(&self) -> Point {
        self.frame.corner()
    }

    /// Whether `point` falls within the grid's bounds.
    pub fn contains(&self, point: Point) -> bool {
        self.frame.contains(point)
    }

    /// Whether `other` is fully contained by the grid's bounds.
    pub fn contains_frame(&self, other: &Frame) -> bool {
        self.frame.contains_frame(other)
    }

    /// Store `value` at `location`.
    ///
    /// No bounds check is performed on write; callers are expected to
    /// pre-validate via [`contains`](SparseGrid::contains).
    pub fn put_at(&mut self, location: impl Into<Location>, value: V) {
        self.store.insert(location.into().as_point(), value);
    }

    /// The stored value at `location`, or `None` if never written.
    ///
    /// # Errors
    /// Returns [`SheetError::OutOfBounds`] if `location` is not
    /// contained in the grid.
    pub fn get_at(&self, location: impl Into<Location>) -> Result<Option<&V>> {
        let point = location.into().as_point();
        if !self.frame.contains(point) {
            return Err(self.out_of_bounds(point.to_string()));
        }
        Ok(self.store.get(&point))
    }

    /// Bulk-load a rectangular array of rows (outer index y, inner x)
    /// into the store, starting at `origin`.
    ///
    /// The whole load is validated before any write: the rows must all
    /// have the same length and the target rectangle must be contained,
    /// so a failing load stores nothing. Empty input is an accepted
    /// no-op.
    ///
    /// # Errors
    /// Returns [`SheetError::InvalidLocation`] if the rows are ragged,
    /// or [`SheetError::OutOfBounds`] if `origin` is outside the grid
    /// or the incoming data runs past the grid's bounds.
    pub fn load_from_array(
        &mut self,
        rows: Vec<Vec<V>>,
        origin: impl Into<Location>,
    ) -> Result<()> {
        let origin = origin.into().as_point();
        if !self.frame.contains(origin) {
            return Err(self.out_of_bounds(origin.to_string()));
        }
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return Err(SheetError::InvalidLocation(
                "rows must be rectangular (equal lengths)".to_string(),
            ));
        }
        if width == 0 {
            return Ok(());
        }
        let corner = Point::new(
            origin.x + index_to_i64(width) - 1,
            origin.y + index_to_i64(rows.len()) - 1,
        );
        let target = Frame::new(origin, corner)?;
        if !self.frame.contains_frame(&target) {
            return Err(self.out_of_bounds(target.to_string()));
        }
        for (dy, row) in rows.into_iter().enumerate() {
            for (dx, value) in row.into_iter().enumerate() {
                let at = Point::new(origin.x + index_to_i64(dx), origin.y + index_to_i64(dy));
                self.store.insert(at, value);
            }
        }
        Ok(())
    }

    /// Project the stored values over `frame` into a row-major (y outer,
    /// x inner) array of arrays. Unset points come out as `None`.
    ///
    /// # Errors
    /// Returns [`SheetError::OutOfBounds`] if `frame` is not contained
    /// in the grid.
    pub fn get_data_array_for_frame(&self, frame: &Frame) -> Result<Vec<Vec<Option<&V>>>> {
        if !self.frame.contains_frame(frame) {
            return Err(self.out_of_bounds(frame.to_string()));
        }
        Ok(frame
            .point_rows()
            .map(|(_, row)| row.iter().map(|p| self.store.get(p)).collect())
            .collect())
    }

    /// Whether every point of the grid has an explicit stored value.
    pub fn is_full(&self) -> bool {
        i64::try_from(self.store.len()).is_ok_and(|count| count == self.frame.area())
    }

    /// Whether every point of `frame` has an explicit stored value.
    /// Used by fetch layers to decide whether remote data must be
    /// requested for a sub-rectangle before display.
    ///
    /// # Errors
    /// Returns [`SheetError::OutOfBounds`] if `frame` is not contained
    /// in the grid.
    pub fn has_complete_data_for_frame(&self, frame: &Frame) -> Result<bool> {
        if !self.frame.contains_frame(frame) {
            return Err(self.out_of_bounds(frame.to_string()));
        }
        Ok(frame.points().all(|p| self.store.contains_key(&p)))
    }

    /// The number of explicitly stored values.
    #[inline]
    pub fn stored_len(&self) -> usize {
        self.store.len()
    }

    fn out_of_bounds(&self, location: String) -> SheetError {
        SheetError::OutOfBounds {
            location,
            bounds: self.frame.to_string(),
        }
    }
}

/// Row/column indices come from `Vec` lengths and never approach the
/// i64 range in practice.
fn index_to_i64(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}
