// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use grove_layout::{RefKey, TopicKey};

/// Errors raised by the viewport container and its interaction handlers.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// The host's hotkey customization is malformed.
    #[error("hot keys config: {0}")]
    HotKeysConfig(String),
    /// Centering was asked for a topic outside the editor root's subtree.
    #[error("move topic to center: topic {topic_key} is not a descendant of the editor root")]
    NotDescendant {
        /// The offending topic.
        topic_key: TopicKey,
    },
    /// A registered element the operation depends on is absent.
    #[error("element not registered: {0}")]
    MissingElement(RefKey),
    /// [`mount`](crate::ViewportContainer::mount) called while mounted.
    #[error("viewport is already mounted")]
    AlreadyMounted,
    /// An operation that needs a mounted viewport ran while unmounted.
    #[error("viewport is not mounted")]
    NotMounted,
    /// Error from the topic model or the layout pass.
    #[error(transparent)]
    Layout(#[from] grove_layout::Error),
}

/// Result type for this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
