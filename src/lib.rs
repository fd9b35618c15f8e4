//! sheetview - 2-D grid windowing and selection engine
//!
//! A fixed-size visible viewport pans and pages over a much larger
//! logical data grid, optionally locking leading rows and/or columns so
//! they stay visible while the remainder scrolls, while a
//! cursor/selection layer tracks navigation across the windowed view:
//! - Inclusive-bounds rectangle algebra ([`Frame`]) over integer points
//! - A sparse, bounds-checked value store ([`SparseGrid`])
//! - A locked-pane viewport compositor with clamped pan/page motion
//!   ([`Viewport`])
//! - A cursor/selection state machine with scroll-triggered panning
//!   ([`Selector`])
//!
//! Binding cells to visual elements, decoding input events, and
//! fetching remote data are left to consumers; the viewport's
//! after-shift hook and the selector's update hook are the seams they
//! attach to.
//!
//! # Usage
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use sheetview::{Point, Selector, SparseGrid, Viewport};
//!
//! # fn main() -> sheetview::Result<()> {
//! let grid = Rc::new(RefCell::new(SparseGrid::<String>::of_size(100, 100)?));
//! let viewport = Rc::new(RefCell::new(Viewport::new(
//!     Rc::clone(&grid),
//!     Point::new(10, 20),
//! )?));
//!
//! let mut selector = Selector::new(Rc::clone(&viewport));
//! selector.move_right_by(15, false);
//!
//! // The cursor stopped at the view's right edge and the window panned.
//! assert_eq!(selector.cursor(), Point::new(10, 0));
//! assert_eq!(viewport.borrow().data_offset(), Point::new(5, 0));
//! assert_eq!(selector.relative_cursor(), Point::new(15, 0));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod frame;
pub mod grid;
pub mod point;
pub mod selector;
pub mod viewport;

pub use error::{Result, SheetError};
pub use frame::Frame;
pub use grid::{CellValue, SheetGrid, SparseGrid};
pub use point::{Location, Point};
pub use selector::Selector;
pub use viewport::{Pane, Viewport};
