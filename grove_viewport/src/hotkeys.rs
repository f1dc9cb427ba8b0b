// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hotkey bindings contributed by the viewport.
//!
//! Hosts customize bindings per sheet through
//! [`Host::customize_hot_keys`](crate::Host::customize_hot_keys), returning a
//! JSON object of this shape:
//!
//! ```json
//! {
//!   "topicHotKeys":  { "addChild": { "combo": "tab", "label": "Add child" } },
//!   "globalHotKeys": { "undo":     { "combo": "mod+z" } }
//! }
//! ```

use grove_layout::FocusMode;
use serde::Deserialize;
use serde_json::Value;

use crate::{Error, Result};

/// Field holding bindings that apply while a topic has plain focus.
pub const TOPIC_HOT_KEYS: &str = "topicHotKeys";
/// Field holding bindings that always apply.
pub const GLOBAL_HOT_KEYS: &str = "globalHotKeys";

/// One key binding.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HotKeyBinding {
    /// Key combination, for example `mod+z`.
    pub combo: String,
    /// Human readable label.
    pub label: String,
    /// Whether the binding fires while an input has focus.
    pub allow_in_input: bool,
    /// Whether the default browser or platform action is suppressed.
    pub prevent_default: bool,
}

/// A binding contributed to the hotkey layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HotKey {
    /// Name of the bound action.
    pub name: String,
    /// The binding.
    pub binding: HotKeyBinding,
    /// Bindings are matched regardless of which element has focus.
    pub global: bool,
}

/// Parsed hotkey customization of a sheet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HotKeysConfig {
    /// Bindings active while the focus mode is
    /// [`Normal`](FocusMode::Normal) or [`ShowPopup`](FocusMode::ShowPopup).
    pub topic_hot_keys: Vec<(String, HotKeyBinding)>,
    /// Bindings active in every focus mode.
    pub global_hot_keys: Vec<(String, HotKeyBinding)>,
}

impl HotKeysConfig {
    /// Parses a host customization.
    ///
    /// `null` means "no customization" and yields `Ok(None)`. Anything else
    /// must be an object whose `topicHotKeys` and `globalHotKeys` fields are
    /// both objects of bindings; otherwise [`Error::HotKeysConfig`] is
    /// returned.
    pub fn from_value(value: &Value) -> Result<Option<Self>> {
        if value.is_null() {
            return Ok(None);
        }
        if !value.is_object() {
            return Err(Error::HotKeysConfig(format!(
                "expected an object, found {}",
                kind(value)
            )));
        }
        Ok(Some(Self {
            topic_hot_keys: table(value, TOPIC_HOT_KEYS)?,
            global_hot_keys: table(value, GLOBAL_HOT_KEYS)?,
        }))
    }

    /// Bindings that apply in `focus_mode`, topic bindings first.
    ///
    /// Every returned binding is marked [`global`](HotKey::global).
    #[must_use]
    pub fn hot_keys(&self, focus_mode: FocusMode) -> Vec<HotKey> {
        let topic_active = matches!(focus_mode, FocusMode::Normal | FocusMode::ShowPopup);
        let topic = self.topic_hot_keys.iter().filter(|_| topic_active);
        topic
            .chain(&self.global_hot_keys)
            .map(|(name, binding)| HotKey {
                name: name.clone(),
                binding: binding.clone(),
                global: true,
            })
            .collect()
    }
}

fn table(value: &Value, field: &str) -> Result<Vec<(String, HotKeyBinding)>> {
    let Some(Value::Object(map)) = value.get(field) else {
        return Err(Error::HotKeysConfig(format!(
            "{field} must be an object, found {}",
            value.get(field).map_or("nothing", kind)
        )));
    };
    map.iter()
        .map(|(name, binding)| {
            HotKeyBinding::deserialize(binding)
                .map(|binding| (name.clone(), binding))
                .map_err(|e| Error::HotKeysConfig(format!("{field}.{name}: {e}")))
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
