// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grove View: the drag-scroll viewport under a mind-map canvas.
//!
//! This crate provides a small, headless model of a scrollable, zoomable
//! window over a larger virtual canvas. It focuses on:
//! - Viewport state: scroll offset and zoom factor ([`DragScrollView`]).
//! - Measuring the visible window (`view_box`) and the zoomed canvas
//!   (`big_view`) in screen space.
//! - Relative geometry between measured rectangles ([`coords`]).
//! - Drag-to-scroll gestures ([`drag`]).
//!
//! It does **not** lay out topics or decide zoom limits. Callers are expected
//! to:
//! - Keep their own widget tree and expose it as [`Element`]s.
//! - Apply zoom and centering policy at a higher layer (see `grove_viewport`).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use grove_view::{CanvasBox, DragScrollView, Element, coords};
//!
//! // 800x600 window over a 4000x4000 canvas.
//! let mut view = DragScrollView::new(Rect::new(0.0, 0.0, 800.0, 600.0), Size::new(4000.0, 4000.0));
//! view.set_view_box_scroll(1000.0, 1000.0);
//!
//! // A topic placed on the canvas.
//! let topic = CanvasBox { rect: Rect::new(1500.0, 1200.0, 1600.0, 1240.0) };
//!
//! // Offset from the window center to the topic center, in screen pixels.
//! let vector = coords::relative_vector(topic.bounding_rect(&view), view.view_box());
//!
//! // Scrolling by that offset centers the topic.
//! view.set_view_box_scroll_delta(vector.x, vector.y);
//! let again = coords::relative_vector(topic.bounding_rect(&view), view.view_box());
//! assert!(again.hypot() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is a uniform scalar between canvas units and screen pixels.
//! - The scroll offset is stored in screen pixels and is not rescaled when
//!   the zoom factor changes.
//! - [`coords::relative_rect`] is zoom-normalized while
//!   [`coords::relative_vector`] is not: rects are compared in canvas space,
//!   scroll deltas are applied in screen space.
//!
//! This crate is `no_std`.

#![no_std]

pub mod coords;
pub mod drag;
mod drag_scroll;
mod element;
mod modes;

pub use drag_scroll::{DragScrollDebugInfo, DragScrollView};
pub use element::{CanvasBox, Element, ScreenBox};
pub use modes::ClampMode;
