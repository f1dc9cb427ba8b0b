// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A recording host and a small sheet shared by the integration tests.

#![allow(dead_code, reason = "not every test file uses every helper")]

use grove_layout::{
    ElementRegistry, MemoryRegistry, RefKey, RenderTopic, SheetId, SheetModel, TopicWidgetProps,
};
use grove_view::CanvasBox;
use grove_viewport::{
    EventKey, Host, Modifiers, Op, RootWidgetProps, TempKey, TempValueListener, TempValueStore,
    WheelEvent,
};
use kurbo::{Rect, Vec2};
use serde_json::Value;

pub const VIEW_BOX: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

#[derive(Debug, Default)]
pub struct FakeHost {
    pub current: Option<SheetId>,
    pub store: TempValueStore,
    pub ops: Vec<(SheetId, Vec<Op>, bool)>,
    pub events: Vec<(SheetId, EventKey)>,
    pub hot_keys: Option<Value>,
}

impl FakeHost {
    pub fn showing(sheet: &str) -> Self {
        Self {
            current: Some(sheet.into()),
            ..Self::default()
        }
    }
}

impl RenderTopic for FakeHost {
    type Widget = String;

    fn render_topic_widget(&mut self, props: TopicWidgetProps<'_>) -> String {
        format!("topic:{}", props.topic.key())
    }
}

impl Host for FakeHost {
    fn is_current_sheet(&self, sheet: &SheetId) -> bool {
        self.current.as_ref() == Some(sheet)
    }

    fn temp_value(&self, sheet: &SheetId, key: TempKey) -> Option<f64> {
        self.store.get(sheet, key)
    }

    fn set_temp_value(&mut self, sheet: &SheetId, key: TempKey, value: f64) {
        self.store.set(sheet, key, value);
    }

    fn add_temp_value_change_listener(
        &mut self,
        sheet: &SheetId,
        key: TempKey,
        listener: TempValueListener,
    ) {
        self.store.add_listener(sheet, key, listener);
    }

    fn remove_temp_value_change_listener(
        &mut self,
        sheet: &SheetId,
        key: TempKey,
        listener: &TempValueListener,
    ) {
        self.store.remove_listener(sheet, key, listener);
    }

    fn render_root_widget(&mut self, props: RootWidgetProps<'_>) -> String {
        format!("root:{}", props.topic.key())
    }

    fn is_meta_key(&self, ev: &WheelEvent) -> bool {
        ev.modifiers.contains(Modifiers::CTRL)
    }

    fn operation(&mut self, sheet: &SheetId, ops: &[Op], allow_undo: bool) {
        self.ops.push((sheet.clone(), ops.to_vec(), allow_undo));
    }

    fn fire_event(&mut self, sheet: &SheetId, event: EventKey) {
        self.events.push((sheet.clone(), event));
    }

    fn customize_hot_keys(&mut self, _model: &SheetModel) -> Option<Value> {
        self.hot_keys.clone()
    }
}

pub fn wheel(delta_y: f64, modifiers: Modifiers) -> WheelEvent {
    WheelEvent {
        delta: Vec2::new(0.0, delta_y),
        modifiers,
    }
}

/// root ─┬─ a ── a1
///       ├─ b
///       └─ X
pub fn sheet() -> SheetModel {
    let mut sheet = SheetModel::new("s1", "root");
    let root = sheet.root_topic_key().clone();
    let a = sheet.insert_topic(&root, "a").unwrap();
    sheet.insert_topic(&a, "a1").unwrap();
    sheet.insert_topic(&root, "b").unwrap();
    sheet.insert_topic(&root, "X").unwrap();
    sheet
}

/// Node layer covering the whole canvas plus a 100x40 node per topic.
pub fn registry() -> MemoryRegistry {
    let mut registry = MemoryRegistry::new();
    registry.save(
        RefKey::NodeLayer("s1".into()),
        Box::new(CanvasBox {
            rect: Rect::new(0.0, 0.0, 4000.0, 4000.0),
        }),
    );
    for (key, x, y) in [
        ("root", 1000.0, 1500.0),
        ("a", 1200.0, 1400.0),
        ("a1", 1400.0, 1380.0),
        ("b", 1200.0, 1600.0),
        ("X", 1200.0, 1700.0),
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
