// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom factor accessors and the wheel-zoom policy.
//!
//! The zoom of a sheet lives in the host's temp-value store under
//! [`TempKey::ZoomFactor`]; views follow it through change listeners.

use grove_layout::SheetId;

use crate::{Host, TempKey, TempValueListener, ViewportConfig, WheelEvent};

/// Current zoom of `sheet`.
///
/// Falls back to [`ViewportConfig::default_zoom`] when nothing usable is
/// stored; zero, negative and non-finite values are not usable.
#[must_use]
pub fn zoom_factor<H>(host: &H, sheet: &SheetId, config: &ViewportConfig) -> f64
where
    H: Host + ?Sized,
{
    match host.temp_value(sheet, TempKey::ZoomFactor) {
        Some(zoom) if zoom.is_finite() && zoom > 0.0 => zoom,
        _ => config.default_zoom,
    }
}

/// Stores the zoom of `sheet`, notifying its listeners.
pub fn set_zoom_factor<H>(host: &mut H, sheet: &SheetId, zoom: f64)
where
    H: Host + ?Sized,
{
    #[cfg(feature = "tracing")]
    tracing::debug!(sheet = %sheet, zoom, "set zoom factor");
    host.set_temp_value(sheet, TempKey::ZoomFactor, zoom);
}

/// Registers `listener` for zoom changes of `sheet`.
pub fn add_zoom_factor_change_listener<H>(
    host: &mut H,
    sheet: &SheetId,
    listener: TempValueListener,
) where
    H: Host + ?Sized,
{
    host.add_temp_value_change_listener(sheet, TempKey::ZoomFactor, listener);
}

/// Unregisters a zoom listener of `sheet`.
pub fn remove_zoom_factor_change_listener<H>(
    host: &mut H,
    sheet: &SheetId,
    listener: &TempValueListener,
) where
    H: Host + ?Sized,
{
    host.remove_temp_value_change_listener(sheet, TempKey::ZoomFactor, listener);
}

/// Wheel-zoom policy.
///
/// Only wheel events with the platform zoom modifier zoom. Scrolling down
/// zooms out by [`ViewportConfig::zoom_step`], anything else zooms in; the
/// result is clamped to the configured limits, stored, and returned.
///
/// Returns `None` and leaves the zoom alone for plain wheel events.
pub fn set_zoom_factor_on_wheel<H>(
    host: &mut H,
    sheet: &SheetId,
    ev: &WheelEvent,
    config: &ViewportConfig,
) -> Option<f64>
where
    H: Host + ?Sized,
{
    if !host.is_meta_key(ev) {
        return None;
    }
    let current = zoom_factor(host, sheet, config);
    let next = if ev.delta_y() > 0.0 {
        current - config.zoom_step
    } else {
        current + config.zoom_step
    };
    let zoom = config.clamp_zoom(next);
    set_zoom_factor(host, sheet, zoom);
    Some(zoom)
}
