// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grove Layout: topic model, element registry and the link re-layout pass.
//!
//! - [`SheetModel`] / [`Topic`]: the read model of a mind-map sheet.
//! - [`ElementRegistry`] / [`RefKey`]: live elements keyed by what they are
//!   (node layer of a sheet, node of a topic, widget of a topic, ...).
//! - [`part_topics`]: assigns the children of a topic to the left, right or
//!   bottom group for a [`DiagramLayout`].
//! - [`create_sub_topics`]: renders child widgets through a [`RenderTopic`]
//!   host hook.
//! - [`layout`]: walks the visible tree and asks each link shape to re-route.
//!
//! ## Where this fits
//!
//! Topic widgets are drawn by the host. This crate does not measure text or
//! arrange boxes; it decides which side children go to and keeps link
//! geometry in step with wherever the host placed things.
//!
//! ```rust
//! use grove_layout::{ElementRegistry, MemoryRegistry, RefKey, SheetModel, layout};
//! use grove_view::CanvasBox;
//! use kurbo::Rect;
//!
//! let mut sheet = SheetModel::new("sheet-1", "root");
//! let root = sheet.root_topic_key().clone();
//! let child = sheet.insert_topic(&root, "child").unwrap();
//!
//! let mut registry = MemoryRegistry::new();
//! registry.save(
//!     RefKey::TopicWidget(child),
//!     Box::new(CanvasBox { rect: Rect::new(0.0, 0.0, 80.0, 30.0) }),
//! );
//!
//! let pass = layout(&sheet, &mut registry).unwrap();
//! assert_eq!(pass.visited, 2);
//! assert_eq!(pass.relaid, 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod model;
mod parts;
mod pass;
mod refs;
mod relationship;
mod sub_topics;

pub use error::{Error, Result};
pub use model::{AncestorPath, FocusMode, SheetId, SheetModel, Topic, TopicKey};
pub use parts::{DiagramLayout, Part, PartTopics, part_topics};
pub use pass::{LayoutPass, layout};
pub use refs::{ElementRegistry, MemoryRegistry, RefKey};
pub use relationship::{Relationship, relationship};
pub use sub_topics::{RenderTopic, SubTopic, TopicWidgetProps, create_sub_topics};
