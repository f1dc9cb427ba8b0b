// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::drag::DragTracker;
use crate::modes::ClampMode;

/// Scrollable, zoomable window over a virtual canvas.
///
/// `DragScrollView` models two surfaces:
/// - the **view box**: the visible window, a fixed rectangle in screen space;
/// - the **big view**: the full virtual canvas, scaled by the zoom factor and
///   shifted by the scroll offset.
///
/// The scroll offset is kept in the view box's own pixel space (like a native
/// `scrollLeft`/`scrollTop` pair). Changing the zoom factor leaves the stored
/// scroll offset untouched.
///
/// All setters are synchronous: a subsequent [`view_box`](Self::view_box) or
/// [`big_view`](Self::big_view) call observes the new state.
#[derive(Clone, Debug)]
pub struct DragScrollView {
    view_box: Rect,
    canvas_size: Size,
    scroll: Vec2,
    zoom: f64,
    clamp_mode: ClampMode,
    wheel_scroll: bool,
    drag: DragTracker,
}

impl DragScrollView {
    /// Creates a view whose visible window is `view_box` over a canvas of
    /// `canvas_size` canvas units.
    ///
    /// - Initial zoom is `1.0`.
    /// - Initial scroll is zero (canvas origin at the view box origin).
    /// - Wheel scrolling is enabled.
    #[must_use]
    pub fn new(view_box: Rect, canvas_size: Size) -> Self {
        Self {
            view_box,
            canvas_size,
            scroll: Vec2::ZERO,
            zoom: 1.0,
            clamp_mode: ClampMode::default(),
            wheel_scroll: true,
            drag: DragTracker::default(),
        }
    }

    /// Screen rectangle of the visible window.
    #[must_use]
    pub fn view_box(&self) -> Rect {
        self.view_box
    }

    /// Moves or resizes the visible window.
    pub fn set_view_box(&mut self, view_box: Rect) {
        if self.view_box == view_box {
            return;
        }
        self.view_box = view_box;
        self.clamp_scroll();
    }

    /// Screen rectangle of the full, zoomed canvas.
    #[must_use]
    pub fn big_view(&self) -> Rect {
        let origin = self.view_box.origin() - self.scroll;
        Rect::from_origin_size(origin, self.canvas_size * self.zoom)
    }

    /// Canvas size in canvas units.
    #[must_use]
    pub fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    /// Sets the canvas size in canvas units.
    pub fn set_canvas_size(&mut self, size: Size) {
        self.canvas_size = size;
        self.clamp_scroll();
    }

    /// Current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom factor.
    ///
    /// No zoom limits are applied here; callers own that policy. Non-finite or
    /// non-positive factors are ignored.
    pub fn set_zoom_factor(&mut self, zoom: f64) {
        if !zoom.is_finite() || zoom <= 0.0 {
            return;
        }
        self.zoom = zoom;
        self.clamp_scroll();
    }

    /// Current scroll offset in view box pixels.
    #[must_use]
    pub fn scroll(&self) -> Vec2 {
        self.scroll
    }

    /// Sets the absolute scroll offset.
    pub fn set_view_box_scroll(&mut self, left: f64, top: f64) {
        self.scroll = Vec2::new(left, top);
        self.clamp_scroll();
    }

    /// Adjusts the scroll offset by a relative amount.
    pub fn set_view_box_scroll_delta(&mut self, delta_left: f64, delta_top: f64) {
        self.set_view_box_scroll(self.scroll.x + delta_left, self.scroll.y + delta_top);
    }

    /// Largest scroll offset that keeps the window inside the zoomed canvas.
    #[must_use]
    pub fn max_scroll(&self) -> Vec2 {
        let content = self.canvas_size * self.zoom;
        Vec2::new(
            (content.width - self.view_box.width()).max(0.0),
            (content.height - self.view_box.height()).max(0.0),
        )
    }

    /// Sets the clamp mode and re-applies it.
    pub fn set_clamp_mode(&mut self, mode: ClampMode) {
        if self.clamp_mode != mode {
            self.clamp_mode = mode;
            self.clamp_scroll();
        }
    }

    /// Returns the current clamp mode.
    #[must_use]
    pub fn clamp_mode(&self) -> ClampMode {
        self.clamp_mode
    }

    /// Converts a canvas-space rectangle into screen space.
    #[must_use]
    pub fn canvas_to_screen_rect(&self, rect: Rect) -> Rect {
        let origin = self.canvas_to_screen_point(rect.origin());
        Rect::from_origin_size(origin, rect.size() * self.zoom)
    }

    /// Converts a canvas-space point into screen space.
    #[must_use]
    pub fn canvas_to_screen_point(&self, pt: Point) -> Point {
        self.big_view().origin() + pt.to_vec2() * self.zoom
    }

    /// Converts a screen-space point into canvas space.
    #[must_use]
    pub fn screen_to_canvas_point(&self, pt: Point) -> Point {
        ((pt - self.big_view().origin()) / self.zoom).to_point()
    }

    /// Canvas-space rectangle currently visible through the window.
    #[must_use]
    pub fn visible_canvas_rect(&self) -> Rect {
        let origin = self.screen_to_canvas_point(self.view_box.origin());
        Rect::from_origin_size(origin, self.view_box.size() / self.zoom)
    }

    /// Enables or disables scrolling in response to wheel input.
    pub fn set_wheel_scroll_enabled(&mut self, enabled: bool) {
        self.wheel_scroll = enabled;
    }

    /// Returns whether wheel input scrolls the view.
    #[must_use]
    pub fn wheel_scroll_enabled(&self) -> bool {
        self.wheel_scroll
    }

    /// Scrolls by a wheel delta when wheel scrolling is enabled.
    ///
    /// Returns `true` if the wheel input was consumed.
    pub fn scroll_by_wheel(&mut self, delta: Vec2) -> bool {
        if !self.wheel_scroll {
            return false;
        }
        self.set_view_box_scroll_delta(delta.x, delta.y);
        true
    }

    /// Begins a drag-scroll gesture at the given screen position.
    pub fn pointer_down(&mut self, pos: Point) {
        self.drag.start(pos, self.scroll);
    }

    /// Continues a drag-scroll gesture.
    ///
    /// Returns `true` if the view scrolled.
    pub fn pointer_move(&mut self, pos: Point) -> bool {
        let Some(target) = self.drag.scroll_for(pos) else {
            return false;
        };
        let before = self.scroll;
        self.set_view_box_scroll(target.x, target.y);
        self.scroll != before
    }

    /// Ends the drag-scroll gesture.
    pub fn pointer_up(&mut self) {
        self.drag.end();
    }

    /// Returns `true` while a drag-scroll gesture is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> DragScrollDebugInfo {
        DragScrollDebugInfo {
            view_box: self.view_box,
            big_view: self.big_view(),
            visible_canvas_rect: self.visible_canvas_rect(),
            scroll: self.scroll,
            max_scroll: self.max_scroll(),
            zoom: self.zoom,
            clamp_mode: self.clamp_mode,
            wheel_scroll: self.wheel_scroll,
            dragging: self.drag.is_dragging(),
        }
    }

    fn clamp_scroll(&mut self) {
        if self.clamp_mode == ClampMode::None {
            return;
        }
        let max = self.max_scroll();
        self.scroll = Vec2::new(self.scroll.x.clamp(0.0, max.x), self.scroll.y.clamp(0.0, max.y));
    }
}

/// Debug snapshot of a [`DragScrollView`].
#[derive(Clone, Copy, Debug)]
pub struct DragScrollDebugInfo {
    /// Screen rectangle of the visible window.
    pub view_box: Rect,
    /// Screen rectangle of the zoomed canvas.
    pub big_view: Rect,
    /// Canvas-space rectangle visible through the window.
    pub visible_canvas_rect: Rect,
    /// Scroll offset in view box pixels.
    pub scroll: Vec2,
    /// Largest in-canvas scroll offset.
    pub max_scroll: Vec2,
    /// Current zoom factor.
    pub zoom: f64,
    /// Scroll clamp mode.
    pub clamp_mode: ClampMode,
    /// Whether wheel input scrolls the view.
    pub wheel_scroll: bool,
    /// Whether a drag-scroll gesture is active.
    pub dragging: bool,
}
