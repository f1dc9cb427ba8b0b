// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read model of a mind-map sheet: topics, their children and the sheet state
//! the viewport core consults.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::{Error, Result};

/// Key of a topic.
///
/// Cheap to clone; keys are compared by content.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TopicKey(Arc<str>);

/// Identifier of a sheet.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SheetId(Arc<str>);

macro_rules! string_key {
    ($ty:ident) => {
        impl $ty {
            /// Returns the key as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $ty {
            fn from(s: &str) -> Self {
                Self(Arc::from(s))
            }
        }

        impl From<String> for $ty {
            fn from(s: String) -> Self {
                Self(Arc::from(s))
            }
        }

        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(&*self.0, f)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_key!(TopicKey);
string_key!(SheetId);

/// Which interaction currently owns keyboard focus on a sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FocusMode {
    /// Plain topic focus; topic hotkeys are active.
    #[default]
    Normal,
    /// A popup (context menu, picker) is open over the focused topic.
    ShowPopup,
    /// The focused topic's content is being edited.
    EditingContent,
    /// The focused topic's description is being edited.
    EditingDesc,
    /// A topic is being dragged.
    Dragging,
}

/// A node of the mind-map tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topic {
    key: TopicKey,
    sub_keys: Vec<TopicKey>,
    collapse: bool,
}

impl Topic {
    fn new(key: TopicKey) -> Self {
        Self {
            key,
            sub_keys: Vec::new(),
            collapse: false,
        }
    }

    /// Key of this topic.
    #[must_use]
    pub fn key(&self) -> &TopicKey {
        &self.key
    }

    /// Keys of the children, in order.
    #[must_use]
    pub fn sub_keys(&self) -> &[TopicKey] {
        &self.sub_keys
    }

    /// Whether the subtree below this topic is hidden.
    #[must_use]
    pub fn collapse(&self) -> bool {
        self.collapse
    }
}

/// Root-to-target chain of ancestor keys.
pub type AncestorPath = SmallVec<[TopicKey; 8]>;

/// The active diagram sheet.
///
/// The viewport core only reads sheets. The mutators exist so hosts can apply
/// the focus and expand edits the core requests, and to assemble trees.
#[derive(Clone, Debug)]
pub struct SheetModel {
    id: SheetId,
    root_topic_key: TopicKey,
    editor_root_topic_key: TopicKey,
    topics: HashMap<TopicKey, Topic>,
    focus_mode: FocusMode,
    focus_key: Option<TopicKey>,
}

impl SheetModel {
    /// Creates a sheet holding a single root topic.
    ///
    /// The root is also the editor root and the focused topic.
    #[must_use]
    pub fn new(id: impl Into<SheetId>, root_key: impl Into<TopicKey>) -> Self {
        let root_key = root_key.into();
        let mut topics = HashMap::new();
        topics.insert(root_key.clone(), Topic::new(root_key.clone()));
        Self {
            id: id.into(),
            editor_root_topic_key: root_key.clone(),
            focus_key: Some(root_key.clone()),
            root_topic_key: root_key,
            topics,
            focus_mode: FocusMode::Normal,
        }
    }

    /// Sheet identifier.
    #[must_use]
    pub fn id(&self) -> &SheetId {
        &self.id
    }

    /// Key of the document root of this sheet.
    #[must_use]
    pub fn root_topic_key(&self) -> &TopicKey {
        &self.root_topic_key
    }

    /// Key of the topic the diagram is currently anchored at.
    #[must_use]
    pub fn editor_root_topic_key(&self) -> &TopicKey {
        &self.editor_root_topic_key
    }

    /// Current focus mode.
    #[must_use]
    pub fn focus_mode(&self) -> FocusMode {
        self.focus_mode
    }

    /// Currently focused topic, if any.
    #[must_use]
    pub fn focus_key(&self) -> Option<&TopicKey> {
        self.focus_key.as_ref()
    }

    /// Looks up a topic.
    #[must_use]
    pub fn topic(&self, key: &TopicKey) -> Option<&Topic> {
        self.topics.get(key)
    }

    /// Looks up a topic, failing with [`Error::UnknownTopic`].
    pub fn require_topic(&self, key: &TopicKey) -> Result<&Topic> {
        self.topics
            .get(key)
            .ok_or_else(|| Error::UnknownTopic(key.clone()))
    }

    /// Number of topics on the sheet.
    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Always `false`: a sheet holds at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Appends a new child topic under `parent` and returns its key.
    pub fn insert_topic(
        &mut self,
        parent: &TopicKey,
        key: impl Into<TopicKey>,
    ) -> Result<TopicKey> {
        let key = key.into();
        if self.topics.contains_key(&key) {
            return Err(Error::DuplicateTopic(key));
        }
        let parent = self
            .topics
            .get_mut(parent)
            .ok_or_else(|| Error::UnknownTopic(parent.clone()))?;
        parent.sub_keys.push(key.clone());
        self.topics.insert(key.clone(), Topic::new(key.clone()));
        Ok(key)
    }

    /// Sets the collapse flag of a topic.
    pub fn set_collapse(&mut self, key: &TopicKey, collapse: bool) -> Result<()> {
        let topic = self
            .topics
            .get_mut(key)
            .ok_or_else(|| Error::UnknownTopic(key.clone()))?;
        topic.collapse = collapse;
        Ok(())
    }

    /// Re-anchors the diagram at `key`.
    pub fn set_editor_root(&mut self, key: &TopicKey) -> Result<()> {
        self.require_topic(key)?;
        self.editor_root_topic_key = key.clone();
        Ok(())
    }

    /// Focuses `key` in the given mode.
    pub fn focus_topic(&mut self, key: &TopicKey, mode: FocusMode) -> Result<()> {
        self.require_topic(key)?;
        self.focus_key = Some(key.clone());
        self.focus_mode = mode;
        Ok(())
    }

    /// Drops topic focus. The focus mode goes back to [`FocusMode::Normal`].
    pub fn clear_focus(&mut self) {
        self.focus_key = None;
        self.focus_mode = FocusMode::Normal;
    }

    /// Expands every ancestor of `key` so that it becomes visible.
    pub fn expand_to(&mut self, key: &TopicKey) -> Result<()> {
        let path = self.ancestors(key)?;
        for ancestor in &path {
            if let Some(topic) = self.topics.get_mut(ancestor) {
                topic.collapse = false;
            }
        }
        Ok(())
    }

    /// Returns the parent of `key`, or `None` for the root and for topics not
    /// reachable from it.
    #[must_use]
    pub fn parent_of(&self, key: &TopicKey) -> Option<&TopicKey> {
        self.ancestors(key).ok()?;
        self.topics
            .values()
            .find(|t| t.sub_keys.contains(key))
            .map(Topic::key)
    }

    /// Root-to-parent chain of ancestors of `key`.
    ///
    /// The root's chain is empty. Fails with [`Error::UnknownTopic`] when `key`
    /// is not reachable from the sheet root.
    pub fn ancestors(&self, key: &TopicKey) -> Result<AncestorPath> {
        // Depth-first search with an explicit stack of (topic, depth), keeping
        // the current root-to-topic chain in `path`.
        let mut path = AncestorPath::new();
        let mut stack: Vec<(&TopicKey, usize)> = Vec::new();
        stack.push((&self.root_topic_key, 0));

        while let Some((current, depth)) = stack.pop() {
            path.truncate(depth);
            if current == key {
                return Ok(path);
            }
            let Some(topic) = self.topics.get(current) else {
                continue;
            };
            path.push(current.clone());
            for child in topic.sub_keys.iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        Err(Error::UnknownTopic(key.clone()))
    }
}
