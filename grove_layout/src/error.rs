// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::TopicKey;

/// Errors raised while reading or editing a [`crate::SheetModel`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A key did not resolve to a topic of the sheet.
    #[error("unknown topic: {0}")]
    UnknownTopic(TopicKey),
    /// A topic with this key already exists.
    #[error("duplicate topic: {0}")]
    DuplicateTopic(TopicKey),
}

/// Result alias for this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
