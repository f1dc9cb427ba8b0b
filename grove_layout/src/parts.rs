// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Branch assignment: which side of a topic each child grows towards.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::{Result, SheetModel, TopicKey};

/// Overall direction of a diagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DiagramLayout {
    /// Every branch grows to the right.
    LeftToRight,
    /// Every branch grows to the left.
    RightToLeft,
    /// Branches are split between both sides of the root.
    #[default]
    LeftAndRight,
    /// Every branch grows downwards.
    TopToBottom,
}

/// Directional group of child topics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    /// Children drawn on the left (`L`).
    Left,
    /// Children drawn on the right (`R`).
    Right,
    /// Children drawn below (`B`).
    Bottom,
}

impl Part {
    /// Short label of the group: `L`, `R` or `B`.
    #[must_use]
    pub fn label(self) -> char {
        match self {
            Self::Left => 'L',
            Self::Right => 'R',
            Self::Bottom => 'B',
        }
    }
}

/// Children of a topic grouped by [`Part`], each group in original order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartTopics {
    groups: SmallVec<[(Part, Vec<TopicKey>); 2]>,
}

impl PartTopics {
    /// Keys assigned to `part`, or `None` if the layout has no such group.
    #[must_use]
    pub fn get(&self, part: Part) -> Option<&[TopicKey]> {
        self.groups
            .iter()
            .find(|(p, _)| *p == part)
            .map(|(_, keys)| keys.as_slice())
    }

    /// Iterates over the groups present for the layout.
    pub fn iter(&self) -> impl Iterator<Item = (Part, &[TopicKey])> + '_ {
        self.groups.iter().map(|(p, keys)| (*p, keys.as_slice()))
    }

    fn push(&mut self, part: Part, keys: Vec<TopicKey>) {
        self.groups.push((part, keys));
    }
}

/// Splits the children of `topic_key` into directional groups.
///
/// - [`DiagramLayout::LeftToRight`]: all children in `R`.
/// - [`DiagramLayout::RightToLeft`]: all children in `L`.
/// - [`DiagramLayout::LeftAndRight`]: the first `ceil(n / 2)` children in `R`,
///   the rest in `L`. An odd child out goes right.
/// - [`DiagramLayout::TopToBottom`]: all children in `B`.
///
/// ```
/// use grove_layout::{DiagramLayout, Part, SheetModel, TopicKey, part_topics};
///
/// let mut sheet = SheetModel::new("s", "root");
/// let root = sheet.root_topic_key().clone();
/// for k in ["a", "b", "c", "d"] {
///     sheet.insert_topic(&root, k).unwrap();
/// }
/// let parts = part_topics(DiagramLayout::LeftAndRight, &sheet, &root).unwrap();
/// assert_eq!(parts.get(Part::Right).unwrap(), &[TopicKey::from("a"), TopicKey::from("b")]);
/// assert_eq!(parts.get(Part::Left).unwrap(), &[TopicKey::from("c"), TopicKey::from("d")]);
/// ```
pub fn part_topics(
    layout: DiagramLayout,
    model: &SheetModel,
    topic_key: &TopicKey,
) -> Result<PartTopics> {
    let topics = model.require_topic(topic_key)?.sub_keys();
    let mut parts = PartTopics::default();
    match layout {
        DiagramLayout::LeftToRight => parts.push(Part::Right, topics.to_vec()),
        DiagramLayout::RightToLeft => parts.push(Part::Left, topics.to_vec()),
        DiagramLayout::LeftAndRight => {
            let split = topics.len().div_ceil(2);
            parts.push(Part::Left, topics[split..].to_vec());
            parts.push(Part::Right, topics[..split].to_vec());
        }
        DiagramLayout::TopToBottom => parts.push(Part::Bottom, topics.to_vec()),
    }
    Ok(parts)
}
