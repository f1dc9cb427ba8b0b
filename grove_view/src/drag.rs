// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-scroll tracking.
//!
//! A drag is anchored at the pointer position where it started, together with
//! the scroll offset the view had at that moment. Each move then resolves to
//! an absolute scroll offset, so the canvas point under the pointer stays
//! under the pointer for the whole gesture.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use grove_view::drag::DragTracker;
//!
//! let mut drag = DragTracker::default();
//! drag.start(Point::new(100.0, 100.0), Vec2::new(40.0, 0.0));
//!
//! // Pointer moves right by 30: the window scrolls left by 30.
//! let scroll = drag.scroll_for(Point::new(130.0, 100.0)).unwrap();
//! assert_eq!(scroll, Vec2::new(10.0, 0.0));
//! ```

use kurbo::{Point, Vec2};

/// Tracks an in-progress drag-scroll gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragTracker {
    anchor: Option<Point>,
    scroll_at_anchor: Vec2,
}

impl DragTracker {
    /// Start a drag at `pos` while the view is scrolled to `scroll`.
    pub fn start(&mut self, pos: Point, scroll: Vec2) {
        self.anchor = Some(pos);
        self.scroll_at_anchor = scroll;
    }

    /// Scroll offset that keeps the anchored canvas point under `pos`.
    ///
    /// Returns `None` when no drag is active.
    #[must_use]
    pub fn scroll_for(&self, pos: Point) -> Option<Vec2> {
        self.anchor
            .map(|anchor| self.scroll_at_anchor - (pos - anchor))
    }

    /// End the drag.
    pub fn end(&mut self) {
        self.anchor = None;
        self.scroll_at_anchor = Vec2::ZERO;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }
}
