// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference registry: live elements addressed by semantic keys.

use alloc::boxed::Box;
use core::fmt;

use grove_view::Element;
use hashbrown::HashMap;

use crate::{SheetId, TopicKey};

/// Semantic key of a live element.
///
/// The [`Display`](fmt::Display) form is the composite string a string-keyed
/// host registry would use, for example `topic-node-<topic key>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RefKey {
    /// Container hosting the rendered topic tree of a sheet.
    NodeLayer(SheetId),
    /// The drag-scroll viewport of a sheet.
    DragScrollWidget(SheetId),
    /// Drop indicator shown while dragging topics on a sheet.
    DropEffect(SheetId),
    /// Link shapes fanning out of a topic used as editor root.
    Links(TopicKey),
    /// The measurable node (content box) of a topic.
    TopicNode(TopicKey),
    /// The widget of a topic, owning the links to its children.
    TopicWidget(TopicKey),
}

impl RefKey {
    /// Fixed prefix of the composite string form.
    #[must_use]
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::NodeLayer(_) => "node-layer-",
            Self::DragScrollWidget(_) => "drag-scroll-widget-",
            Self::DropEffect(_) => "drop-effect-",
            Self::Links(_) => "links-",
            Self::TopicNode(_) => "topic-node-",
            Self::TopicWidget(_) => "topic-widget-",
        }
    }
}

impl fmt::Display for RefKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())?;
        match self {
            Self::NodeLayer(id) | Self::DragScrollWidget(id) | Self::DropEffect(id) => {
                fmt::Display::fmt(id, f)
            }
            Self::Links(key) | Self::TopicNode(key) | Self::TopicWidget(key) => {
                fmt::Display::fmt(key, f)
            }
        }
    }
}

/// Mapping from [`RefKey`]s to live elements, provided by the host.
///
/// The layout pass and the interaction handlers receive the registry
/// explicitly, so tests can hand them fakes.
pub trait ElementRegistry {
    /// Resolves an element for measurement.
    fn get(&self, key: &RefKey) -> Option<&dyn Element>;

    /// Resolves an element for re-layout.
    fn get_mut(&mut self, key: &RefKey) -> Option<&mut dyn Element>;

    /// Records the element mounted under `key`, replacing any previous one.
    fn save(&mut self, key: RefKey, element: Box<dyn Element>);

    /// Forgets the element under `key`.
    fn remove(&mut self, key: &RefKey) -> Option<Box<dyn Element>>;
}

/// [`ElementRegistry`] backed by a hash map.
#[derive(Default)]
pub struct MemoryRegistry {
    elements: HashMap<RefKey, Box<dyn Element>>,
}

impl MemoryRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if an element is registered under `key`.
    #[must_use]
    pub fn contains(&self, key: &RefKey) -> bool {
        self.elements.contains_key(key)
    }
}

impl fmt::Debug for MemoryRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.elements.keys()).finish()
    }
}

impl ElementRegistry for MemoryRegistry {
    fn get(&self, key: &RefKey) -> Option<&dyn Element> {
        self.elements.get(key).map(|e| &**e)
    }

    fn get_mut(&mut self, key: &RefKey) -> Option<&mut dyn Element> {
        self.elements
            .get_mut(key)
            .map(|e| &mut **e as &mut dyn Element)
    }

    fn save(&mut self, key: RefKey, element: Box<dyn Element>) {
        self.elements.insert(key, element);
    }

    fn remove(&mut self, key: &RefKey) -> Option<Box<dyn Element>> {
        self.elements.remove(key)
    }
}
