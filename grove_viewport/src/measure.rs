// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measuring registered elements against a view.

use grove_layout::{ElementRegistry, RefKey, SheetId};
use grove_view::{DragScrollView, Element, coords};
use kurbo::{Rect, Vec2};

use crate::zoom::zoom_factor;
use crate::{Error, Host, Result, ViewportConfig};

/// Screen rect of the element registered under `key`.
pub fn bounding_rect<R>(registry: &R, key: &RefKey, view: &DragScrollView) -> Result<Rect>
where
    R: ElementRegistry + ?Sized,
{
    registry
        .get(key)
        .map(|element| element.bounding_rect(view))
        .ok_or_else(|| Error::MissingElement(key.clone()))
}

/// Rect of the element under `key` relative to the whole zoomed canvas, in
/// canvas units.
///
/// The zoom is the sheet's stored zoom, see [`zoom_factor`].
pub fn relative_rect<H, R>(
    host: &H,
    sheet: &SheetId,
    config: &ViewportConfig,
    registry: &R,
    key: &RefKey,
    view: &DragScrollView,
) -> Result<Rect>
where
    H: Host + ?Sized,
    R: ElementRegistry + ?Sized,
{
    Ok(coords::relative_rect(
        bounding_rect(registry, key, view)?,
        view.big_view(),
        zoom_factor(host, sheet, config),
    ))
}

/// Rect of the element under `key` relative to the visible window, in canvas
/// units.
///
/// The zoom is the sheet's stored zoom, see [`zoom_factor`].
pub fn relative_rect_from_view_port<H, R>(
    host: &H,
    sheet: &SheetId,
    config: &ViewportConfig,
    registry: &R,
    key: &RefKey,
    view: &DragScrollView,
) -> Result<Rect>
where
    H: Host + ?Sized,
    R: ElementRegistry + ?Sized,
{
    Ok(coords::relative_rect(
        bounding_rect(registry, key, view)?,
        view.view_box(),
        zoom_factor(host, sheet, config),
    ))
}

/// Offset from the visible window's center to the center of the element under
/// `key`, in screen pixels.
///
/// Scrolling by this vector centers the element.
pub fn relative_vector_from_view_port<R>(
    registry: &R,
    key: &RefKey,
    view: &DragScrollView,
) -> Result<Vec2>
where
    R: ElementRegistry + ?Sized,
{
    Ok(coords::relative_vector(
        bounding_rect(registry, key, view)?,
        view.view_box(),
    ))
}
