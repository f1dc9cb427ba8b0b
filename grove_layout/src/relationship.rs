// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{SheetModel, TopicKey};

/// How one topic relates to another in the sheet tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relationship {
    /// Both keys name the same topic.
    Same,
    /// The first topic is an ancestor of the second.
    Ancestor,
    /// The first topic is a strict descendant of the second.
    Descendant,
    /// Both topics share a parent.
    Sibling,
    /// None of the above, including keys not reachable from the sheet root.
    Unrelated,
}

/// Classifies `key` with respect to `other`.
///
/// ```
/// use grove_layout::{Relationship, SheetModel, relationship};
///
/// let mut sheet = SheetModel::new("s", "root");
/// let root = sheet.root_topic_key().clone();
/// let a = sheet.insert_topic(&root, "a").unwrap();
/// let b = sheet.insert_topic(&root, "b").unwrap();
///
/// assert_eq!(relationship(&sheet, &a, &root), Relationship::Descendant);
/// assert_eq!(relationship(&sheet, &root, &a), Relationship::Ancestor);
/// assert_eq!(relationship(&sheet, &a, &b), Relationship::Sibling);
/// ```
#[must_use]
pub fn relationship(model: &SheetModel, key: &TopicKey, other: &TopicKey) -> Relationship {
    if key == other {
        return Relationship::Same;
    }
    let (Ok(path), Ok(other_path)) = (model.ancestors(key), model.ancestors(other)) else {
        return Relationship::Unrelated;
    };
    if path.contains(other) {
        Relationship::Descendant
    } else if other_path.contains(key) {
        Relationship::Ancestor
    } else if !path.is_empty() && path.last() == other_path.last() {
        Relationship::Sibling
    } else {
        Relationship::Unrelated
    }
}
