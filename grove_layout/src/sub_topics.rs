// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Producing child topic widgets.

use alloc::vec::Vec;

use crate::{RefKey, Result, SheetModel, Topic, TopicKey};

/// Host hook that renders the widget of a single topic.
pub trait RenderTopic {
    /// Whatever the host's widget tree is made of.
    type Widget;

    /// Renders the widget for `props.topic`.
    ///
    /// The host records the mounted widget in its registry under
    /// `props.ref_key`, so the layout pass can find it again.
    fn render_topic_widget(&mut self, props: TopicWidgetProps<'_>) -> Self::Widget;
}

/// Inputs to [`RenderTopic::render_topic_widget`].
#[derive(Clone, Debug)]
pub struct TopicWidgetProps<'a> {
    /// Sheet the topic lives on.
    pub model: &'a SheetModel,
    /// The topic to render.
    pub topic: &'a Topic,
    /// Registry key the widget is to be saved under.
    pub ref_key: RefKey,
}

/// A rendered child topic.
#[derive(Clone, Debug, PartialEq)]
pub struct SubTopic<W> {
    /// Key of the child topic.
    pub key: TopicKey,
    /// Registry key of the child's widget.
    pub ref_key: RefKey,
    /// The rendered widget.
    pub widget: W,
}

/// Renders the widgets of `topics`, children of `topic_key`, in order.
///
/// Returns `Ok(None)` when `topics` is empty or the parent is collapsed.
pub fn create_sub_topics<R>(
    renderer: &mut R,
    model: &SheetModel,
    topic_key: &TopicKey,
    topics: &[TopicKey],
) -> Result<Option<Vec<SubTopic<R::Widget>>>>
where
    R: RenderTopic + ?Sized,
{
    let topic = model.require_topic(topic_key)?;
    if topics.is_empty() || topic.collapse() {
        return Ok(None);
    }
    let mut sub_topics = Vec::with_capacity(topics.len());
    for key in topics {
        let child = model.require_topic(key)?;
        let ref_key = RefKey::TopicWidget(key.clone());
        let widget = renderer.render_topic_widget(TopicWidgetProps {
            model,
            topic: child,
            ref_key: ref_key.clone(),
        });
        sub_topics.push(SubTopic {
            key: key.clone(),
            ref_key,
            widget,
        });
    }
    Ok(Some(sub_topics))
}
