// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrolling a topic into the middle of the visible window.

use grove_layout::{
    ElementRegistry, FocusMode, RefKey, Relationship, SheetId, SheetModel, TopicKey, relationship,
};
use grove_view::{DragScrollView, coords};
use kurbo::Vec2;

use crate::measure::bounding_rect;
use crate::{Deferred, Error, Host, Op, Result, Task, ViewportConfig};

/// Where [`move_topic_to_center`] puts the topic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MoveDir {
    /// Center of the topic at the center of the window.
    #[default]
    Center,
    /// Left edge of the topic [`ViewportConfig::left_center_margin`] pixels
    /// from the window's left edge, vertically centered.
    LeftCenter,
}

/// Scrolls `view` so that `topic_key` lands where `dir` says.
///
/// The topic must be the editor root or one of its descendants, and its node
/// must be registered under [`RefKey::TopicNode`]. Returns the scroll delta
/// that was requested; the view may clamp the resulting scroll.
///
/// Centering an already-centered topic requests a zero delta.
pub fn move_topic_to_center<R>(
    model: &SheetModel,
    registry: &R,
    view: &mut DragScrollView,
    topic_key: &TopicKey,
    dir: MoveDir,
    config: &ViewportConfig,
) -> Result<Vec2>
where
    R: ElementRegistry + ?Sized,
{
    let editor_root = model.editor_root_topic_key();
    if topic_key != editor_root
        && relationship(model, topic_key, editor_root) != Relationship::Descendant
    {
        return Err(Error::NotDescendant {
            topic_key: topic_key.clone(),
        });
    }

    let topic_rect = bounding_rect(registry, &RefKey::TopicNode(topic_key.clone()), view)?;
    let view_box = view.view_box();
    let vector = coords::relative_vector(topic_rect, view_box);
    let delta = match dir {
        MoveDir::Center => vector,
        MoveDir::LeftCenter => Vec2::new(
            vector.x + (view_box.width() - topic_rect.width()) / 2.0 - config.left_center_margin,
            vector.y,
        ),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(topic = %topic_key, ?dir, dx = delta.x, dy = delta.y, "move topic to center");
    view.set_view_box_scroll_delta(delta.x, delta.y);
    Ok(delta)
}

/// Focuses `topic_key`, reveals it, and queues centering on it.
///
/// The host commits the focus and expand operations without an undo entry.
/// Centering runs from `deferred` once the host has re-rendered, so it
/// measures the topic where the committed model placed it.
pub fn focus_topic_and_move_to_center<H>(
    host: &mut H,
    deferred: &mut Deferred,
    sheet: &SheetId,
    topic_key: &TopicKey,
) where
    H: Host + ?Sized,
{
    host.operation(
        sheet,
        &[
            Op::FocusTopic {
                topic_key: topic_key.clone(),
                focus_mode: FocusMode::Normal,
            },
            Op::ExpandTo {
                topic_key: topic_key.clone(),
            },
        ],
        false,
    );
    deferred.push(Task::CenterTopic {
        sheet: sheet.clone(),
        topic_key: topic_key.clone(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use grove_layout::MemoryRegistry;
    use grove_view::{CanvasBox, Element};
    use kurbo::{Rect, Size};

    fn sheet() -> SheetModel {
        let mut sheet = SheetModel::new("s1", "root");
        let root = sheet.root_topic_key().clone();
        let a = sheet.insert_topic(&root, "a").unwrap();
        sheet.insert_topic(&a, "a1").unwrap();
        sheet.insert_topic(&root, "b").unwrap();
        sheet
    }

    fn registry() -> MemoryRegistry {
        let mut registry = MemoryRegistry::new();
        for (key, x, y) in [
            ("root", 900.0, 900.0),
            ("a", 1100.0, 800.0),
            ("a1", 1300.0, 780.0),
            ("b", 1100.0, 1000.0),
        ] {
            registry.save(
                RefKey::TopicNode(key.into()),
                Box::new(CanvasBox {
                    rect: Rect::new(x, y, x + 100.0, y + 40.0),
                }),
            );
        }
        registry
    }

    fn view() -> DragScrollView {
        DragScrollView::new(Rect::new(0.0, 0.0, 800.0, 600.0), Size::new(4000.0, 4000.0))
    }

    #[test]
    fn center_puts_topic_mid_window() {
        let (sheet, registry, mut view) = (sheet(), registry(), view());
        let cfg = ViewportConfig::default();
        let delta =
            move_topic_to_center(&sheet, &registry, &mut view, &"a".into(), MoveDir::Center, &cfg)
                .unwrap();
        assert_eq!(delta, Vec2::new(1150.0 - 400.0, 820.0 - 300.0));
        let node = registry.get(&RefKey::TopicNode("a".into())).unwrap();
        assert_eq!(node.bounding_rect(&view).center(), view.view_box().center());
    }

    #[test]
    fn left_center_keeps_margin() {
        let (sheet, registry, mut view) = (sheet(), registry(), view());
        let cfg = ViewportConfig::default();
        move_topic_to_center(
            &sheet,
            &registry,
            &mut view,
            &"a1".into(),
            MoveDir::LeftCenter,
            &cfg,
        )
        .unwrap();
        let node = registry.get(&RefKey::TopicNode("a1".into())).unwrap();
        let rect = node.bounding_rect(&view);
        assert_eq!(rect.x0, view.view_box().x0 + cfg.left_center_margin);
        assert_eq!(rect.center().y, view.view_box().center().y);
    }

    #[test]
    fn outside_editor_root_is_rejected() {
        let mut sheet = sheet();
        sheet.set_editor_root(&"a".into()).unwrap();
        let (registry, mut view) = (registry(), view());
        let err = move_topic_to_center(
            &sheet,
            &registry,
            &mut view,
            &"b".into(),
            MoveDir::Center,
            &ViewportConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, Error::NotDescendant { topic_key: "b".into() });
        assert_eq!(view.scroll(), Vec2::ZERO);
    }

    #[test]
    fn unregistered_node_is_an_error() {
        let mut sheet = sheet();
        let root = sheet.root_topic_key().clone();
        sheet.insert_topic(&root, "ghost").unwrap();
        let (registry, mut view) = (registry(), view());
        let err = move_topic_to_center(
            &sheet,
            &registry,
            &mut view,
            &"ghost".into(),
            MoveDir::Center,
            &ViewportConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, Error::MissingElement(RefKey::TopicNode("ghost".into())));
    }
}
