// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Clamp behavior for the scroll offset of a [`crate::DragScrollView`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClampMode {
    /// Do not clamp; the window may scroll past the canvas edges.
    None,
    /// Keep the visible window inside the zoomed canvas, the way a native
    /// scroll container does.
    ///
    /// When the zoomed canvas is smaller than the window along an axis, the
    /// scroll offset on that axis is pinned to `0`.
    #[default]
    KeepInCanvas,
}
