// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measurable elements.

use kurbo::Rect;

use crate::DragScrollView;

/// A live, measurable element: a topic node, the node layer, a link shape.
///
/// Hosts implement this over whatever their widgets are. Measurement takes the
/// view the element is presented through, since anything laid out on the
/// canvas moves on screen when the view scrolls or zooms.
pub trait Element {
    /// Screen-space bounding rectangle of the element.
    fn bounding_rect(&self, view: &DragScrollView) -> Rect;

    /// Re-route any link geometry owned by this element.
    ///
    /// Elements that own no links keep the default no-op.
    fn layout(&mut self) {}
}

/// An element placed on the virtual canvas, in unzoomed canvas units.
///
/// Its screen rectangle follows the view's scroll offset and zoom factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasBox {
    /// Placement in canvas units.
    pub rect: Rect,
}

impl Element for CanvasBox {
    fn bounding_rect(&self, view: &DragScrollView) -> Rect {
        view.canvas_to_screen_rect(self.rect)
    }
}

/// An element pinned to a fixed screen rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenBox {
    /// Screen-space rectangle.
    pub rect: Rect,
}

impl Element for ScreenBox {
    fn bounding_rect(&self, _view: &DragScrollView) -> Rect {
        self.rect
    }
}
