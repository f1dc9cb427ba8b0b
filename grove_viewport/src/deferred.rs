// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Work postponed until the host has finished the current update.

use std::collections::VecDeque;

use grove_layout::{SheetId, TopicKey};

/// A postponed viewport task.
///
/// Every task remembers the sheet it was queued for. When run, a task whose
/// sheet is no longer current does nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Task {
    /// Center the focused topic of the sheet, if any.
    CenterFocusTopic {
        /// Sheet the task belongs to.
        sheet: SheetId,
    },
    /// Center the given topic.
    CenterTopic {
        /// Sheet the task belongs to.
        sheet: SheetId,
        /// Topic to center.
        topic_key: TopicKey,
    },
}

impl Task {
    /// Sheet the task belongs to.
    #[must_use]
    pub fn sheet(&self) -> &SheetId {
        match self {
            Self::CenterFocusTopic { sheet } | Self::CenterTopic { sheet, .. } => sheet,
        }
    }
}

/// First-in first-out queue of [`Task`]s.
#[derive(Clone, Debug, Default)]
pub struct Deferred {
    tasks: VecDeque<Task>,
}

impl Deferred {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `task` behind everything already queued.
    pub fn push(&mut self, task: Task) {
        self.tasks.push_back(task);
    }

    /// Takes the oldest task.
    pub fn pop(&mut self) -> Option<Task> {
        self.tasks.pop_front()
    }

    /// Number of queued tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Drops every queued task.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Iterates over queued tasks, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter()
    }
}
