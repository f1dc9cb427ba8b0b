// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunables for zoom and centering.

use serde::Deserialize;

/// Zoom limits, zoom step and centering margin.
///
/// Every field is optional when deserializing; missing fields take the
/// [`Default`] value.
///
/// ```rust
/// use grove_viewport::ViewportConfig;
///
/// let cfg: ViewportConfig = serde_json::from_str(r#"{ "max_zoom": 2.0 }"#).unwrap();
/// assert_eq!(cfg.max_zoom, 2.0);
/// assert_eq!(cfg.min_zoom, 0.5);
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Zoom used when nothing has been stored for a sheet.
    pub default_zoom: f64,
    /// Lower zoom limit for wheel zoom.
    pub min_zoom: f64,
    /// Upper zoom limit for wheel zoom.
    pub max_zoom: f64,
    /// Zoom change per wheel notch.
    pub zoom_step: f64,
    /// Distance kept between the view's left edge and a topic centered with
    /// [`MoveDir::LeftCenter`](crate::MoveDir::LeftCenter).
    pub left_center_margin: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            default_zoom: 1.0,
            min_zoom: 0.5,
            max_zoom: 4.0,
            zoom_step: 0.1,
            left_center_margin: 200.0,
        }
    }
}

impl ViewportConfig {
    /// Clamps `zoom` to `[min_zoom, max_zoom]`.
    ///
    /// Swapped limits are tolerated.
    #[must_use]
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        let (lo, hi) = if self.min_zoom <= self.max_zoom {
            (self.min_zoom, self.max_zoom)
        } else {
            (self.max_zoom, self.min_zoom)
        };
        zoom.clamp(lo, hi)
    }
}
