// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The link re-layout pass.

use crate::{ElementRegistry, RefKey, Result, SheetModel, Topic};

/// What a [`layout`] pass touched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutPass {
    /// The editor root's link shape was re-routed.
    pub root_links: bool,
    /// The drop indicator was re-routed.
    pub drop_effect: bool,
    /// Topics visited, editor root included.
    pub visited: usize,
    /// Topic widgets asked to re-route their links.
    pub relaid: usize,
}

/// Re-routes every visible link shape of `model`.
///
/// Run after anything that may move topics on screen: mount, re-render,
/// scroll, zoom, collapse or expand.
///
/// Order:
/// 1. the link shape of the editor root ([`RefKey::Links`]), if registered;
/// 2. the drop indicator ([`RefKey::DropEffect`]), if registered;
/// 3. a depth-first walk from the editor root asking the widget
///    ([`RefKey::TopicWidget`]) of every other visited topic to re-route its
///    links. Collapsed topics are visited but their subtrees are not.
///
/// The model is borrowed immutably for the whole pass, so the walk sees one
/// consistent tree while elements are mutated.
pub fn layout<R>(model: &SheetModel, registry: &mut R) -> Result<LayoutPass>
where
    R: ElementRegistry + ?Sized,
{
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("layout", sheet = %model.id()).entered();

    let editor_root = model.require_topic(model.editor_root_topic_key())?;
    let mut pass = LayoutPass::default();

    if let Some(links) = registry.get_mut(&RefKey::Links(editor_root.key().clone())) {
        links.layout();
        pass.root_links = true;
    }
    if let Some(drop_effect) = registry.get_mut(&RefKey::DropEffect(model.id().clone())) {
        drop_effect.layout();
        pass.drop_effect = true;
    }

    layout_topic(model, registry, editor_root, &mut pass)?;

    #[cfg(feature = "tracing")]
    tracing::trace!(visited = pass.visited, relaid = pass.relaid, "layout pass done");
    Ok(pass)
}

fn layout_topic<R>(
    model: &SheetModel,
    registry: &mut R,
    topic: &Topic,
    pass: &mut LayoutPass,
) -> Result<()>
where
    R: ElementRegistry + ?Sized,
{
    pass.visited += 1;
    if topic.key() != model.editor_root_topic_key()
        && let Some(widget) = registry.get_mut(&RefKey::TopicWidget(topic.key().clone()))
    {
        widget.layout();
        pass.relaid += 1;
    }
    if topic.collapse() {
        return Ok(());
    }
    for key in topic.sub_keys() {
        layout_topic(model, registry, model.require_topic(key)?, pass)?;
    }
    Ok(())
}
