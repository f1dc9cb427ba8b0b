// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grove Viewport: the scrollable, zoomable window onto a mind-map sheet.
//!
//! - [`ViewportContainer`]: owns a sheet's [`DragScrollView`](grove_view::DragScrollView)
//!   and drives it through mount, update and unmount.
//! - [`zoom`]: per-sheet zoom stored in the host, and the wheel-zoom policy.
//! - [`MoveDir`] / [`move_topic_to_center`]: scrolling a topic to the middle
//!   of the window, or to a fixed margin from its left edge.
//! - [`HotKeysConfig`]: hotkey bindings customized by the host.
//! - [`Host`]: everything the viewport needs from the application.
//!
//! The viewport never edits the document. Model changes go through
//! [`Host::operation`]; work that must see the committed model waits in a
//! [`Deferred`] queue until the host calls
//! [`ViewportContainer::run_deferred`].
//!
//! ## Zoom
//!
//! Holding the platform modifier while scrolling the wheel zooms. Each notch
//! changes the zoom by [`ViewportConfig::zoom_step`] and the result stays in
//! `[min_zoom, max_zoom]`:
//!
//! ```rust
//! use grove_viewport::{TempValueStore, TempKey, ViewportConfig};
//!
//! let cfg = ViewportConfig::default();
//! assert_eq!((cfg.min_zoom, cfg.max_zoom, cfg.zoom_step), (0.5, 4.0, 0.1));
//! assert_eq!(cfg.clamp_zoom(0.4), 0.5);
//!
//! // Hosts usually keep zoom in a `TempValueStore`.
//! let mut store = TempValueStore::new();
//! store.set(&"sheet-1".into(), TempKey::ZoomFactor, 1.2);
//! assert_eq!(store.get(&"sheet-1".into(), TempKey::ZoomFactor), Some(1.2));
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): emit `tracing` spans and events for lifecycle,
//!   zoom and centering.

mod center;
mod config;
mod container;
mod deferred;
mod error;
mod host;
mod hotkeys;
pub mod measure;
mod temp;
pub mod zoom;

pub use center::{MoveDir, focus_topic_and_move_to_center, move_topic_to_center};
pub use config::ViewportConfig;
pub use container::{NodeLayerFrame, ScrollFrame, ViewportContainer, ViewportFrame};
pub use deferred::{Deferred, Task};
pub use error::{Error, Result};
pub use host::{
    EventKey, Host, Modifiers, Op, RootWidgetProps, TempKey, TempValueListener, WheelEvent,
};
pub use hotkeys::{GLOBAL_HOT_KEYS, HotKey, HotKeyBinding, HotKeysConfig, TOPIC_HOT_KEYS};
pub use temp::TempValueStore;
