//! Locked-pane viewport composited over a sparse grid.
//!
//! The viewport is a fixed-size window in *internal* index space,
//! anchored at `(0, 0)`, panned over a much larger backing grid by a
//! data offset. Leading rows and/or columns can be locked so they stay
//! visible while the remainder scrolls; the window is composited from a
//! locked-rows pane, a locked-columns pane, and the scrollable view.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{Result, SheetError};
use crate::frame::Frame;
use crate::grid::SparseGrid;
use crate::point::Point;

/// Callback invoked after every pan or lock change with the
/// data-absolute frames whose contents are now of interest (scrollable
/// view first, then locked rows, then locked columns; empty panes are
/// skipped). Fetch layers use it to decide what to request.
pub type AfterShift = Box<dyn FnMut(&[Frame])>;

/// Which pane of the viewport an internal point falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    /// The permanently pinned corner where both locked regions overlap.
    LockedIntersection,
    /// The locked-rows pane: pinned vertically, pans horizontally.
    LockedRows,
    /// The locked-columns pane: pinned horizontally, pans vertically.
    LockedColumns,
    /// The scrollable view.
    View,
    /// Not within the viewport at all.
    Outside,
}

/// The visible window over a backing [`SparseGrid`].
///
/// Long-lived and mutated in place by pan and lock operations. A resize
/// is modeled as constructing a replacement via
/// [`resized`](Viewport::resized) rather than mutating bounds, so
/// derived sub-frames are never inconsistent mid-update.
pub struct Viewport<V> {
    frame: Frame,
    view_frame: Frame,
    locked_rows_frame: Frame,
    locked_columns_frame: Frame,
    num_locked_rows: i64,
    num_locked_columns: i64,
    data_offset: Point,
    grid: Rc<RefCell<SparseGrid<V>>>,
    after_shift: Option<AfterShift>,
}

impl<V> Viewport<V> {
    /// Create a viewport whose internal frame spans `(0, 0)` to
    /// `corner`, sharing the given backing grid.
    ///
    /// # Errors
    /// Returns [`crate::SheetError::InvalidGeometry`] for a corner with
    /// a negative component.
    pub fn new(grid: Rc<RefCell<SparseGrid<V>>>, corner: Point) -> Result<Self> {
        let frame = Frame::new(Point::new(0, 0), corner)?;
        Ok(Self {
            frame,
            view_frame: frame,
            locked_rows_frame: Frame::empty(),
            locked_columns_frame: Frame::empty(),
            num_locked_rows: 0,
            num_locked_columns: 0,
            data_offset: Point::new(0, 0),
            grid,
            after_shift: None,
        })
    }

    /// The viewport's own frame in internal index space.
    #[inline]
    pub const fn frame(&self) -> Frame {
        self.frame
    }

    /// The scrollable view sub-frame in internal index space. Its
    /// origin is `(num_locked_columns, num_locked_rows)`; its corner is
    /// the viewport's own corner.
    #[inline]
    pub const fn view_frame(&self) -> Frame {
        self.view_frame
    }

    /// The locked-rows sub-frame in internal index space; empty when no
    /// rows are locked.
    #[inline]
    pub const fn locked_rows_frame(&self) -> Frame {
        self.locked_rows_frame
    }

    /// The locked-columns sub-frame in internal index space; empty when
    /// no columns are locked.
    #[inline]
    pub const fn locked_columns_frame(&self) -> Frame {
        self.locked_columns_frame
    }

    /// Number of locked leading rows.
    #[inline]
    pub const fn num_locked_rows(&self) -> i64 {
        self.num_locked_rows
    }

    /// Number of locked leading columns.
    #[inline]
    pub const fn num_locked_columns(&self) -> i64 {
        self.num_locked_columns
    }

    /// The pan offset into the backing grid's coordinate space.
    #[inline]
    pub const fn data_offset(&self) -> Point {
        self.data_offset
    }

    /// The shared backing grid.
    #[inline]
    pub fn grid(&self) -> Rc<RefCell<SparseGrid<V>>> {
        Rc::clone(&self.grid)
    }

    /// Register the hook invoked after every pan or lock change.
    ///
    /// The callback must not re-enter this viewport; it receives the
    /// already-computed frames of interest instead.
    pub fn set_after_shift(&mut self, hook: impl FnMut(&[Frame]) + 'static) {
        self.after_shift = Some(Box::new(hook));
    }

    /// Remove the after-shift hook.
    pub fn clear_after_shift(&mut self) {
        self.after_shift = None;
    }

    /// Lock the first `n` rows so they stay visible while the view
    /// scrolls vertically. `n <= 0` clears the lock. Recomputes the
    /// view sub-frame and notifies the after-shift hook.
    ///
    /// # Errors
    /// Returns [`crate::SheetError::InvalidGeometry`] if the lock would
    /// leave no scrollable rows.
    pub fn lock_rows(&mut self, n: i64) -> Result<()> {
        let n = n.max(0);
        let corner = self.frame.corner();
        if n > corner.y {
            return Err(SheetError::InvalidGeometry {
                origin: Point::new(self.num_locked_columns, n),
                corner,
            });
        }
        self.num_locked_rows = n;
        self.relayout()?;
        self.notify_after_shift();
        Ok(())
    }

    /// Lock the first `n` columns so they stay visible while the view
    /// scrolls horizontally. `n <= 0` clears the lock. Recomputes the
    /// view sub-frame and notifies the after-shift hook.
    ///
    /// # Errors
    /// Returns [`crate::SheetError::InvalidGeometry`] if the lock would
    /// leave no scrollable columns.
    pub fn lock_columns(&mut self, n: i64) -> Result<()> {
        let n = n.max(0);
        let corner = self.frame.corner();
        if n > corner.x {
            return Err(SheetError::InvalidGeometry {
                origin: Point::new(n, self.num_locked_rows),
                corner,
            });
        }
        self.num_locked_columns = n;
        self.relayout()?;
        self.notify_after_shift();
        Ok(())
    }

    /// Recompute the locked sub-frames and the view frame from the
    /// current lock counts. The view frame's corner stays pinned to the
    /// viewport's own corner.
    fn relayout(&mut self) -> Result<()> {
        let corner = self.frame.corner();
        self.view_frame = Frame::new(
            Point::new(self.num_locked_columns, self.num_locked_rows),
            corner,
        )?;
        self.locked_rows_frame = if self.num_locked_rows > 0 {
            Frame::new(
                Point::new(0, 0),
                Point::new(corner.x, self.num_locked_rows - 1),
            )?
        } else {
            Frame::empty()
        };
        self.locked_columns_frame = if self.num_locked_columns > 0 {
            Frame::new(
                Point::new(0, 0),
                Point::new(self.num_locked_columns - 1, corner.y),
            )?
        } else {
            Frame::empty()
        };
        Ok(())
    }

    /// The scrollable view in the backing grid's coordinate space:
    /// the internal view frame shifted by the data offset.
    pub fn relative_view_frame(&self) -> Frame {
        self.view_frame.translated(self.data_offset)
    }

    /// The locked-rows pane in the backing grid's coordinate space, or
    /// `None` when no rows are locked. Locked rows are pinned
    /// vertically and pan horizontally with the content.
    pub fn relative_locked_rows_frame(&self) -> Option<Frame> {
        (self.num_locked_rows > 0).then(|| {
            self.locked_rows_frame
                .translated(Point::new(self.data_offset.x + self.num_locked_columns, 0))
        })
    }

    /// The locked-columns pane in the backing grid's coordinate space,
    /// or `None` when no columns are locked. Locked columns are pinned
    /// horizontally and pan vertically with the content.
    pub fn relative_locked_columns_frame(&self) -> Option<Frame> {
        (self.num_locked_columns > 0).then(|| {
            self.locked_columns_frame
                .translated(Point::new(0, self.data_offset.y + self.num_locked_rows))
        })
    }

    /// The intersection of the two internal locked sub-frames: the
    /// permanently pinned corner pane. Non-empty only when both lock
    /// counts are positive.
    pub fn locked_frames_intersect(&self) -> Frame {
        self.locked_rows_frame
            .intersection(&self.locked_columns_frame)
    }

    /// Classify an internal point by the pane it falls in.
    pub fn pane_at(&self, internal: Point) -> Pane {
        if !self.frame.contains(internal) {
            return Pane::Outside;
        }
        match (
            internal.x < self.num_locked_columns,
            internal.y < self.num_locked_rows,
        ) {
            (true, true) => Pane::LockedIntersection,
            (false, true) => Pane::LockedRows,
            (true, false) => Pane::LockedColumns,
            (false, false) => Pane::View,
        }
    }

    /// Map an internal point to the data-absolute point currently shown
    /// there. Locked panes pan only along their scrolling axis; the
    /// locked intersection is pinned to the grid's top-left.
    pub fn data_point_at(&self, internal: Point) -> Point {
        match self.pane_at(internal) {
            Pane::LockedIntersection | Pane::Outside => internal,
            Pane::LockedRows => Point::new(internal.x + self.data_offset.x, internal.y),
            Pane::LockedColumns => Point::new(internal.x, internal.y + self.data_offset.y),
            Pane::View => internal.translated(self.data_offset),
        }
    }

    /// The stored value currently displayed at an internal point.
    ///
    /// # Errors
    /// Returns [`crate::SheetError::OutOfBounds`] if the mapped
    /// data-absolute point is outside the backing grid.
    pub fn data_at(&self, internal: Point) -> Result<Option<V>>
    where
        V: Clone,
    {
        let data_point = self.data_point_at(internal);
        Ok(self.grid.borrow().get_at(data_point)?.cloned())
    }

    /// Iterate the viewport's internal points, x-major.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        self.frame.points()
    }

    /// Pan the data window right by `amount`, clamped so the scrollable
    /// view never runs past the backing grid's right edge.
    pub fn shift_right_by(&mut self, amount: i64) {
        self.shift_x(amount);
    }

    /// Pan the data window left by `amount`, clamped at offset 0.
    pub fn shift_left_by(&mut self, amount: i64) {
        self.shift_x(-amount);
    }

    /// Pan the data window down by `amount`, clamped so the scrollable
    /// view never runs past the backing grid's bottom edge.
    pub fn shift_down_by(&mut self, amount: i64) {
        self.shift_y(amount);
    }

    /// Pan the data window up by `amount`, clamped at offset 0.
    pub fn shift_up_by(&mut self, amount: i64) {
        self.shift_y(-amount);
    }

    /// Page right: shift by the scrollable view's current width.
    pub fn page_right(&mut self) {
        self.shift_x(self.view_frame.size().x);
    }

    /// Page left: shift by the scrollable view's current width.
    pub fn page_left(&mut self) {
        self.shift_x(-self.view_frame.size().x);
    }

    /// Page down: shift by the scrollable view's current height.
    pub fn page_down(&mut self) {
        self.shift_y(self.view_frame.size().y);
    }

    /// Page up: shift by the scrollable view's current height.
    pub fn page_up(&mut self) {
        self.shift_y(-self.view_frame.size().y);
    }

    /// Whether the data window is at the grid's left edge.
    #[inline]
    pub const fn is_at_left(&self) -> bool {
        self.data_offset.x == 0
    }

    /// Whether the data window is at the grid's top edge.
    #[inline]
    pub const fn is_at_top(&self) -> bool {
        self.data_offset.y == 0
    }

    /// Whether the scrollable view's right edge has reached (or covers)
    /// the backing grid's right edge.
    pub fn is_at_right(&self) -> bool {
        self.relative_view_frame().corner().x >= self.grid.borrow().corner().x
    }

    /// Whether the scrollable view's bottom edge has reached (or
    /// covers) the backing grid's bottom edge.
    pub fn is_at_bottom(&self) -> bool {
        self.relative_view_frame().corner().y >= self.grid.borrow().corner().y
    }

    /// The data-absolute frames a fetch layer should have complete data
    /// for: scrollable view, then locked rows, then locked columns.
    pub fn frames_of_interest(&self) -> Vec<Frame> {
        let mut frames = vec![self.relative_view_frame()];
        if let Some(rows) = self.relative_locked_rows_frame() {
            frames.push(rows);
        }
        if let Some(columns) = self.relative_locked_columns_frame() {
            frames.push(columns);
        }
        frames
    }

    /// Build a replacement viewport with a new corner over the same
    /// grid, re-applying lock counts and re-clamping the data offset.
    /// The after-shift hook is not carried over; callers re-bind it.
    ///
    /// # Errors
    /// Returns [`crate::SheetError::InvalidGeometry`] if the corner is
    /// invalid or the existing locks no longer fit.
    pub fn resized(&self, corner: Point) -> Result<Self> {
        let mut next = Self::new(Rc::clone(&self.grid), corner)?;
        next.num_locked_rows = self.num_locked_rows;
        next.num_locked_columns = self.num_locked_columns;
        next.relayout()?;
        let max = next.max_data_offset();
        next.data_offset = Point::new(
            self.data_offset.x.clamp(0, max.x),
            self.data_offset.y.clamp(0, max.y),
        );
        Ok(next)
    }

    /// The largest data offset that keeps the scrollable view within
    /// the backing grid, floored at 0 for grids smaller than the view.
    fn max_data_offset(&self) -> Point {
        let grid_corner = self.grid.borrow().corner();
        Point::new(
            (grid_corner.x - self.view_frame.corner().x).max(0),
            (grid_corner.y - self.view_frame.corner().y).max(0),
        )
    }

    fn shift_x(&mut self, delta: i64) {
        let max = self.max_data_offset();
        self.data_offset.x = (self.data_offset.x + delta).clamp(0, max.x);
        self.notify_after_shift();
    }

    fn shift_y(&mut self, delta: i64) {
        let max = self.max_data_offset();
        self.data_offset.y = (self.data_offset.y + delta).clamp(0, max.y);
        self.notify_after_shift();
    }

    fn notify_after_shift(&mut self) {
        if self.after_shift.is_some() {
            let frames = self.frames_of_interest();
            if let Some(hook) = self.after_shift.as_mut() {
                hook(&frames);
            }
        }
    }
}
