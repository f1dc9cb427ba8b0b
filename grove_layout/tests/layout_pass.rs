// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the re-layout pass and sub-topic rendering.

use std::cell::RefCell;
use std::rc::Rc;

use grove_layout::{
    ElementRegistry, Error, MemoryRegistry, RefKey, RenderTopic, SheetModel, TopicKey,
    TopicWidgetProps, create_sub_topics, layout,
};
use grove_view::{DragScrollView, Element};
use kurbo::Rect;

/// Records every `layout()` call under its registry key.
#[derive(Clone)]
struct Recorder {
    key: RefKey,
    log: Rc<RefCell<Vec<String>>>,
}

impl Element for Recorder {
    fn bounding_rect(&self, _view: &DragScrollView) -> Rect {
        Rect::ZERO
    }

    fn layout(&mut self) {
        self.log.borrow_mut().push(self.key.to_string());
    }
}

fn register(registry: &mut MemoryRegistry, log: &Rc<RefCell<Vec<String>>>, key: RefKey) {
    registry.save(
        key.clone(),
        Box::new(Recorder {
            key,
            log: log.clone(),
        }),
    );
}

/// root ─┬─ a ─┬─ a1
///       │     └─ a2 ── a2x
///       └─ b ─── b1
fn sheet() -> SheetModel {
    let mut sheet = SheetModel::new("s1", "root");
    let root = sheet.root_topic_key().clone();
    let a = sheet.insert_topic(&root, "a").unwrap();
    let b = sheet.insert_topic(&root, "b").unwrap();
    sheet.insert_topic(&a, "a1").unwrap();
    let a2 = sheet.insert_topic(&a, "a2").unwrap();
    sheet.insert_topic(&a2, "a2x").unwrap();
    sheet.insert_topic(&b, "b1").unwrap();
    sheet
}

fn registry_for_all(sheet: &SheetModel, log: &Rc<RefCell<Vec<String>>>) -> MemoryRegistry {
    let mut registry = MemoryRegistry::new();
    for key in ["root", "a", "b", "a1", "a2", "a2x", "b1"] {
        register(&mut registry, log, RefKey::TopicWidget(key.into()));
    }
    register(
        &mut registry,
        log,
        RefKey::Links(sheet.editor_root_topic_key().clone()),
    );
    register(&mut registry, log, RefKey::DropEffect(sheet.id().clone()));
    registry
}

#[test]
fn pass_order_is_links_drop_effect_then_depth_first() {
    let sheet = sheet();
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut registry = registry_for_all(&sheet, &log);

    let pass = layout(&sheet, &mut registry).unwrap();

    assert_eq!(
        *log.borrow(),
        vec![
            "links-root",
            "drop-effect-s1",
            "topic-widget-a",
            "topic-widget-a1",
            "topic-widget-a2",
            "topic-widget-a2x",
            "topic-widget-b",
            "topic-widget-b1",
        ]
    );
    assert!(pass.root_links);
    assert!(pass.drop_effect);
    assert_eq!(pass.visited, 7);
    // The editor root's own widget is never asked to re-route.
    assert_eq!(pass.relaid, 6);
}

#[test]
fn collapsed_subtree_is_not_visited() {
    let mut sheet = sheet();
    sheet.set_collapse(&"a".into(), true).unwrap();
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut registry = registry_for_all(&sheet, &log);

    let pass = layout(&sheet, &mut registry).unwrap();

    let log = log.borrow();
    assert!(log.contains(&"topic-widget-a".to_string()));
    for hidden in ["topic-widget-a1", "topic-widget-a2", "topic-widget-a2x"] {
        assert!(!log.contains(&hidden.to_string()), "{hidden} was laid out");
    }
    assert_eq!(pass.visited, 4);
}

#[test]
fn pass_starts_at_editor_root() {
    let mut sheet = sheet();
    sheet.set_editor_root(&"a".into()).unwrap();
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut registry = registry_for_all(&sheet, &log);

    let pass = layout(&sheet, &mut registry).unwrap();

    assert_eq!(
        *log.borrow(),
        vec![
            "links-a",
            "drop-effect-s1",
            "topic-widget-a1",
            "topic-widget-a2",
            "topic-widget-a2x",
        ]
    );
    assert_eq!(pass.visited, 4);
}

#[test]
fn missing_elements_are_skipped() {
    let sheet = sheet();
    let mut registry = MemoryRegistry::new();
    let pass = layout(&sheet, &mut registry).unwrap();
    assert!(!pass.root_links);
    assert!(!pass.drop_effect);
    assert_eq!(pass.visited, 7);
    assert_eq!(pass.relaid, 0);
}

struct Renderer {
    rendered: Vec<RefKey>,
}

impl RenderTopic for Renderer {
    type Widget = String;

    fn render_topic_widget(&mut self, props: TopicWidgetProps<'_>) -> String {
        self.rendered.push(props.ref_key.clone());
        format!("<{}>", props.topic.key())
    }
}

#[test]
fn sub_topics_render_in_order_with_refs() {
    let sheet = sheet();
    let a: TopicKey = "a".into();
    let mut renderer = Renderer {
        rendered: Vec::new(),
    };

    let subs = create_sub_topics(
        &mut renderer,
        &sheet,
        &a,
        sheet.topic(&a).unwrap().sub_keys(),
    )
    .unwrap()
    .unwrap();

    let widgets: Vec<&str> = subs.iter().map(|s| s.widget.as_str()).collect();
    assert_eq!(widgets, ["<a1>", "<a2>"]);
    assert_eq!(subs[1].ref_key, RefKey::TopicWidget("a2".into()));
    assert_eq!(renderer.rendered.len(), 2);
}

#[test]
fn sub_topics_of_collapsed_or_leaf_are_none() {
    let mut sheet = sheet();
    let mut renderer = Renderer {
        rendered: Vec::new(),
    };

    let leaf: TopicKey = "a1".into();
    assert_eq!(
        create_sub_topics(&mut renderer, &sheet, &leaf, &[]).unwrap(),
        None
    );

    let a: TopicKey = "a".into();
    sheet.set_collapse(&a, true).unwrap();
    let children = sheet.topic(&a).unwrap().sub_keys().to_vec();
    assert_eq!(
        create_sub_topics(&mut renderer, &sheet, &a, &children).unwrap(),
        None
    );
    assert!(renderer.rendered.is_empty());
}

#[test]
fn dangling_editor_root_is_reported() {
    let sheet = SheetModel::new("s1", "root");
    let mut renderer = Renderer {
        rendered: Vec::new(),
    };
    assert_eq!(
        create_sub_topics(&mut renderer, &sheet, &"ghost".into(), &["x".into()]),
        Err(Error::UnknownTopic("ghost".into()))
    );
}
