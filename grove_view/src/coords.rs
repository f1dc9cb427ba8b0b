// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Relative geometry between two measured rectangles.
//!
//! Both helpers take rectangles as measured on screen (for example through
//! [`Element::bounding_rect`](crate::Element::bounding_rect)) and never touch the
//! elements themselves.
//!
//! - [`relative_rect`] divides by the zoom factor, producing canvas units.
//!   Use it when comparing against canvas-space geometry such as link paths.
//! - [`relative_vector`] stays in screen pixels. Use it to compute scroll
//!   deltas, which the view applies in screen space.

use kurbo::{Rect, Vec2};

/// Rectangle of `element` relative to the origin of `frame`, in canvas units.
///
/// The offset and the size are both divided by `zoom`.
#[must_use]
pub fn relative_rect(element: Rect, frame: Rect, zoom: f64) -> Rect {
    let origin = (element.origin() - frame.origin()) / zoom;
    let size = element.size() / zoom;
    Rect::from_origin_size(origin.to_point(), size)
}

/// Screen-space offset from the center of `frame` to the center of `element`.
///
/// Scrolling a view by this vector brings `element` to the center of `frame`.
#[must_use]
pub fn relative_vector(element: Rect, frame: Rect) -> Vec2 {
    element.center() - frame.center()
}
