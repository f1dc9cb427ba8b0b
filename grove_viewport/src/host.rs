// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What the viewport needs from the application hosting it.

use std::fmt;
use std::rc::Rc;

use grove_layout::{FocusMode, RenderTopic, SheetId, SheetModel, Topic, TopicKey};
use kurbo::Vec2;

/// Keys of per-sheet transient values.
///
/// Transient values are view state that is not part of the document, such as
/// the zoom of a sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TempKey {
    /// Zoom factor of a sheet.
    ZoomFactor,
}

impl TempKey {
    /// Stable name of the key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ZoomFactor => "ZoomFactor",
        }
    }
}

/// Callback notified with the new value when a transient value changes.
///
/// Listeners are compared by identity, so the same handle must be passed to
/// remove a listener that was added.
#[derive(Clone)]
pub struct TempValueListener(Rc<dyn Fn(f64)>);

impl TempValueListener {
    /// Wraps a callback.
    pub fn new(f: impl Fn(f64) + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invokes the callback.
    pub fn notify(&self, value: f64) {
        (self.0)(value);
    }

    /// Whether `self` and `other` are handles to the same callback.
    #[must_use]
    pub fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for TempValueListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TempValueListener")
            .field(&Rc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

bitflags::bitflags! {
    /// Modifier keys held during an input event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0000_0001;
        /// Control.
        const CTRL  = 0b0000_0010;
        /// Alt / Option.
        const ALT   = 0b0000_0100;
        /// Command / Windows key.
        const META  = 0b0000_1000;
    }
}

/// A mouse wheel event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelEvent {
    /// Scroll delta; positive `y` scrolls down.
    pub delta: Vec2,
    /// Modifiers held while scrolling.
    pub modifiers: Modifiers,
}

impl WheelEvent {
    /// Vertical scroll delta.
    #[must_use]
    pub fn delta_y(&self) -> f64 {
        self.delta.y
    }
}

/// Model operations the viewport asks the host to commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    /// Focus a topic in the given mode.
    FocusTopic {
        /// Topic to focus.
        topic_key: TopicKey,
        /// Focus mode to enter.
        focus_mode: FocusMode,
    },
    /// Expand every ancestor of a topic.
    ExpandTo {
        /// Topic to reveal.
        topic_key: TopicKey,
    },
}

impl Op {
    /// Applies the operation to `model`.
    ///
    /// Hosts that keep a plain [`SheetModel`] can commit operations with this.
    pub fn apply(&self, model: &mut SheetModel) -> grove_layout::Result<()> {
        match self {
            Self::FocusTopic {
                topic_key,
                focus_mode,
            } => model.focus_topic(topic_key, *focus_mode),
            Self::ExpandTo { topic_key } => model.expand_to(topic_key),
        }
    }
}

/// Events the viewport fires through the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKey {
    /// The viewport re-rendered and the root topic may need re-centering.
    CenterRootTopic,
}

/// Inputs to [`Host::render_root_widget`].
#[derive(Clone, Debug)]
pub struct RootWidgetProps<'a> {
    /// Sheet being rendered.
    pub model: &'a SheetModel,
    /// The editor root topic.
    pub topic: &'a Topic,
}

/// The application side of a viewport.
///
/// A host owns the document and its transient per-sheet values, renders
/// widgets and commits model operations. The viewport never mutates the model
/// itself.
pub trait Host: RenderTopic {
    /// Whether `sheet` is the sheet currently shown.
    fn is_current_sheet(&self, sheet: &SheetId) -> bool;

    /// Reads a transient value of `sheet`.
    fn temp_value(&self, sheet: &SheetId, key: TempKey) -> Option<f64>;

    /// Stores a transient value of `sheet` and notifies its listeners.
    fn set_temp_value(&mut self, sheet: &SheetId, key: TempKey, value: f64);

    /// Registers `listener` for changes to a transient value of `sheet`.
    fn add_temp_value_change_listener(
        &mut self,
        sheet: &SheetId,
        key: TempKey,
        listener: TempValueListener,
    );

    /// Unregisters a listener added with
    /// [`add_temp_value_change_listener`](Self::add_temp_value_change_listener).
    fn remove_temp_value_change_listener(
        &mut self,
        sheet: &SheetId,
        key: TempKey,
        listener: &TempValueListener,
    );

    /// Renders the widget of the editor root topic.
    fn render_root_widget(&mut self, props: RootWidgetProps<'_>) -> Self::Widget;

    /// Whether `ev` carries the platform's zoom modifier.
    fn is_meta_key(&self, ev: &WheelEvent) -> bool;

    /// Commits `ops` against `sheet`.
    fn operation(&mut self, sheet: &SheetId, ops: &[Op], allow_undo: bool);

    /// Fires `event` for `sheet`.
    fn fire_event(&mut self, sheet: &SheetId, event: EventKey);

    /// Returns the hotkey customization for `model`, if any.
    ///
    /// The expected shape is an object with `topicHotKeys` and
    /// `globalHotKeys` objects; see [`HotKeysConfig`](crate::HotKeysConfig).
    fn customize_hot_keys(&mut self, model: &SheetModel) -> Option<serde_json::Value>;
}
