//! Cursor and rectangular-selection state over a viewport.
//!
//! The selector tracks a cursor in viewport-internal coordinates and an
//! anchor in data-absolute coordinates. Movement is viewport-aware:
//! when the cursor would leave the scrollable view, the viewport pans
//! first, so within one call panning completes before the selection is
//! recomputed, which completes before the update hook fires.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;
use crate::frame::Frame;
use crate::point::Point;
use crate::viewport::Viewport;

/// Hook invoked at the end of every movement with the new internal
/// cursor and the current selection frame, for renderer refresh.
pub type OnUpdate = Box<dyn FnMut(Point, &Frame)>;

/// Cursor, anchor, and selection-rectangle tracker over a [`Viewport`].
///
/// Two modes, chosen per call by the `is_selecting` argument:
/// cursor-only movement clears the selection and re-anchors at the new
/// cursor's data position; selecting movement keeps the anchor fixed
/// and spans the selection from anchor to cursor, in any drag
/// direction.
pub struct Selector<V> {
    cursor: Point,
    anchor: Point,
    selection_frame: Frame,
    viewport: Rc<RefCell<Viewport<V>>>,
    on_update: Option<OnUpdate>,
}

impl<V> Selector<V> {
    /// Create a selector with the cursor at the viewport's origin and
    /// the anchor at that cursor's data-absolute position.
    pub fn new(viewport: Rc<RefCell<Viewport<V>>>) -> Self {
        let cursor = Point::new(0, 0);
        let anchor = viewport.borrow().data_point_at(cursor);
        Self {
            cursor,
            anchor,
            selection_frame: Frame::empty(),
            viewport,
            on_update: None,
        }
    }

    /// The cursor in viewport-internal coordinates.
    #[inline]
    pub const fn cursor(&self) -> Point {
        self.cursor
    }

    /// The fixed starting point of an in-progress selection, in
    /// data-absolute coordinates.
    #[inline]
    pub const fn anchor(&self) -> Point {
        self.anchor
    }

    /// The current selection rectangle in data-absolute coordinates;
    /// empty when no selection is active.
    #[inline]
    pub const fn selection_frame(&self) -> Frame {
        self.selection_frame
    }

    /// The data-absolute point currently under the cursor.
    pub fn relative_cursor(&self) -> Point {
        self.viewport.borrow().data_point_at(self.cursor)
    }

    /// The stored value currently under the cursor.
    ///
    /// # Errors
    /// Returns [`crate::SheetError::OutOfBounds`] if the cursor maps
    /// outside the backing grid.
    pub fn data_at_cursor(&self) -> Result<Option<V>>
    where
        V: Clone,
    {
        self.viewport.borrow().data_at(self.cursor)
    }

    /// Re-point this selector at a replacement viewport (the resize
    /// path), clamping the cursor into the new bounds.
    pub fn set_viewport(&mut self, viewport: Rc<RefCell<Viewport<V>>>) {
        let corner = viewport.borrow().frame().corner();
        self.cursor = Point::new(self.cursor.x.min(corner.x), self.cursor.y.min(corner.y));
        self.viewport = viewport;
    }

    /// Register the hook invoked after every movement.
    pub fn set_on_update(&mut self, hook: impl FnMut(Point, &Frame) + 'static) {
        self.on_update = Some(Box::new(hook));
    }

    /// Remove the update hook.
    pub fn clear_on_update(&mut self) {
        self.on_update = None;
    }

    /// Move the cursor right by `amount`, panning the viewport by the
    /// overshoot when the cursor would pass the scrollable view's right
    /// edge.
    pub fn move_right_by(&mut self, amount: i64, is_selecting: bool) {
        {
            let mut viewport = self.viewport.borrow_mut();
            let far = viewport.view_frame().corner().x;
            let target = self.cursor.x + amount;
            if target > far {
                viewport.shift_right_by(target - far);
                self.cursor.x = far;
            } else {
                self.cursor.x = target;
            }
        }
        self.finish_move(is_selecting);
    }

    /// Move the cursor left by `amount`. If the cursor would pass the
    /// scrollable view's left edge, the viewport pans by the deficit;
    /// once the viewport is already at the grid's left edge, the cursor
    /// may walk into the locked pane, clamped at internal x = 0.
    pub fn move_left_by(&mut self, amount: i64, is_selecting: bool) {
        {
            let mut viewport = self.viewport.borrow_mut();
            let near = viewport.view_frame().origin().x;
            let target = self.cursor.x - amount;
            if target >= near {
                self.cursor.x = target;
            } else if !viewport.is_at_left() {
                viewport.shift_left_by(near - target);
                self.cursor.x = near;
            } else {
                self.cursor.x = target.max(viewport.frame().origin().x);
            }
        }
        self.finish_move(is_selecting);
    }

    /// Move the cursor down by `amount`, panning the viewport by the
    /// overshoot when the cursor would pass the scrollable view's
    /// bottom edge.
    pub fn move_down_by(&mut self, amount: i64, is_selecting: bool) {
        {
            let mut viewport = self.viewport.borrow_mut();
            let far = viewport.view_frame().corner().y;
            let target = self.cursor.y + amount;
            if target > far {
                viewport.shift_down_by(target - far);
                self.cursor.y = far;
            } else {
                self.cursor.y = target;
            }
        }
        self.finish_move(is_selecting);
    }

    /// Move the cursor up by `amount`. If the cursor would pass the
    /// scrollable view's top edge, the viewport pans by the deficit;
    /// once the viewport is already at the grid's top edge, the cursor
    /// may walk into the locked pane, clamped at internal y = 0.
    pub fn move_up_by(&mut self, amount: i64, is_selecting: bool) {
        {
            let mut viewport = self.viewport.borrow_mut();
            let near = viewport.view_frame().origin().y;
            let target = self.cursor.y - amount;
            if target >= near {
                self.cursor.y = target;
            } else if !viewport.is_at_top() {
                viewport.shift_up_by(near - target);
                self.cursor.y = near;
            } else {
                self.cursor.y = target.max(viewport.frame().origin().y);
            }
        }
        self.finish_move(is_selecting);
    }

    /// Recompute anchor and selection for the mode, then fire the
    /// update hook. The viewport pan, if any, has already completed.
    fn finish_move(&mut self, is_selecting: bool) {
        let data_cursor = self.relative_cursor();
        if is_selecting {
            self.selection_frame = Frame::from_point_to_point(self.anchor, data_cursor);
        } else {
            self.anchor = data_cursor;
            self.selection_frame = Frame::empty();
        }
        if let Some(hook) = self.on_update.as_mut() {
            hook(self.cursor, &self.selection_frame);
        }
    }
}
