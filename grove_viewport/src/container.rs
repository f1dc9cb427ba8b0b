// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewport container of a sheet.

use std::cell::{Cell, Ref, RefCell, RefMut};
use std::rc::Rc;

use grove_layout::{ElementRegistry, LayoutPass, RefKey, SheetId, SheetModel, TopicKey, layout};
use grove_view::DragScrollView;
use kurbo::{Point, Rect, Size, Vec2};

use crate::center::{self, MoveDir};
use crate::measure::{self, bounding_rect};
use crate::{
    Deferred, Error, EventKey, HotKey, HotKeysConfig, Host, Result, RootWidgetProps, Task,
    TempValueListener, ViewportConfig, WheelEvent, zoom,
};

/// What [`ViewportContainer::render`] produces.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportFrame<W> {
    /// The container swallows wheel events so the page does not scroll.
    pub captures_wheel: bool,
    /// The drag-scroll widget.
    pub scroll: ScrollFrame<W>,
}

/// The drag-scroll widget inside a [`ViewportFrame`].
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollFrame<W> {
    /// Registry key of the widget.
    pub ref_key: RefKey,
    /// Whether plain wheel input scrolls the canvas.
    pub wheel_scroll: bool,
    /// The node layer hosting the topic tree.
    pub node_layer: NodeLayerFrame<W>,
}

/// The node layer inside a [`ScrollFrame`].
#[derive(Clone, Debug, PartialEq)]
pub struct NodeLayerFrame<W> {
    /// Registry key of the layer.
    pub ref_key: RefKey,
    /// Widget of the editor root topic.
    pub root: W,
}

/// Owns the drag-scroll view of one sheet and drives it through its
/// lifecycle.
///
/// The host calls [`mount`](Self::mount) once the rendered tree is in the
/// registry, [`update`](Self::update) after every re-render and
/// [`unmount`](Self::unmount) when the sheet goes away. After each of those,
/// and after committing operations the container asked for, the host calls
/// [`run_deferred`](Self::run_deferred).
///
/// While mounted, the view follows the sheet's stored zoom through a change
/// listener. A zoom change that arrives while the caller still holds a
/// [`view`](Self::view) borrow is kept and applied on the next access.
#[derive(Debug)]
pub struct ViewportContainer {
    sheet: SheetId,
    config: ViewportConfig,
    view: Rc<RefCell<DragScrollView>>,
    pending_zoom: Rc<Cell<Option<f64>>>,
    zoom_listener: Option<TempValueListener>,
    deferred: Deferred,
}

impl ViewportContainer {
    /// Creates an unmounted container for `sheet`.
    ///
    /// Plain wheel input does not scroll the canvas; the wheel is reserved
    /// for zooming.
    #[must_use]
    pub fn new(sheet: SheetId, view_box: Rect, canvas_size: Size, config: ViewportConfig) -> Self {
        let mut view = DragScrollView::new(view_box, canvas_size);
        view.set_wheel_scroll_enabled(false);
        view.set_zoom_factor(config.default_zoom);
        Self {
            sheet,
            config,
            view: Rc::new(RefCell::new(view)),
            pending_zoom: Rc::new(Cell::new(None)),
            zoom_listener: None,
            deferred: Deferred::new(),
        }
    }

    /// Sheet this container shows.
    #[must_use]
    pub fn sheet(&self) -> &SheetId {
        &self.sheet
    }

    /// Zoom and centering settings.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Whether [`mount`](Self::mount) has run without a matching
    /// [`unmount`](Self::unmount).
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.zoom_listener.is_some()
    }

    /// Borrows the view.
    ///
    /// Holding the borrow does not block zoom changes from the host; they are
    /// applied once no borrow is outstanding.
    #[must_use]
    pub fn view(&self) -> Ref<'_, DragScrollView> {
        if let Ok(mut view) = self.view.try_borrow_mut()
            && let Some(zoom) = self.pending_zoom.take()
        {
            view.set_zoom_factor(zoom);
        }
        self.view.borrow()
    }

    // Only called from `&mut self` methods, so no caller-held `Ref` is alive.
    fn view_mut(&self) -> RefMut<'_, DragScrollView> {
        let mut view = self.view.borrow_mut();
        if let Some(zoom) = self.pending_zoom.take() {
            view.set_zoom_factor(zoom);
        }
        view
    }

    /// Tasks waiting for [`run_deferred`](Self::run_deferred).
    #[must_use]
    pub fn deferred(&self) -> &Deferred {
        &self.deferred
    }

    /// Moves or resizes the visible window.
    pub fn set_view_box(&mut self, view_box: Rect) {
        self.view_mut().set_view_box(view_box);
    }

    /// Sets the canvas size in canvas units.
    pub fn set_canvas_size(&mut self, size: Size) {
        self.view_mut().set_canvas_size(size);
    }

    /// Mounts the viewport.
    ///
    /// 1. Makes the view follow the sheet's stored zoom.
    /// 2. Measures the editor root's node and the node layer.
    /// 3. Scrolls vertically by
    ///    `root.top - layer.top - view_box.height / 2 + root.height`.
    /// 4. Applies the stored zoom.
    /// 5. Runs the layout pass.
    /// 6. Queues centering on the focused topic.
    ///
    /// On error nothing stays registered and the container is unmounted.
    pub fn mount<H, R>(&mut self, host: &mut H, registry: &mut R, model: &SheetModel) -> Result<()>
    where
        H: Host + ?Sized,
        R: ElementRegistry + ?Sized,
    {
        if self.is_mounted() {
            return Err(Error::AlreadyMounted);
        }
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("mount", sheet = %self.sheet).entered();

        let view = Rc::downgrade(&self.view);
        let pending = self.pending_zoom.clone();
        let listener = TempValueListener::new(move |zoom| {
            let Some(view) = view.upgrade() else {
                return;
            };
            match view.try_borrow_mut() {
                Ok(mut view) => {
                    pending.set(None);
                    view.set_zoom_factor(zoom);
                }
                Err(_) => pending.set(Some(zoom)),
            };
        });
        zoom::add_zoom_factor_change_listener(host, &self.sheet, listener.clone());
        self.zoom_listener = Some(listener);

        if let Err(e) = self.settle(&*host, registry, model) {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %e, "mount failed");
            self.remove_zoom_listener(host);
            return Err(e);
        }
        self.deferred.push(Task::CenterFocusTopic {
            sheet: self.sheet.clone(),
        });
        Ok(())
    }

    fn settle<H, R>(&self, host: &H, registry: &mut R, model: &SheetModel) -> Result<()>
    where
        H: Host + ?Sized,
        R: ElementRegistry + ?Sized,
    {
        let root_key = RefKey::TopicNode(model.editor_root_topic_key().clone());
        let layer_key = RefKey::NodeLayer(self.sheet.clone());
        let zoom = zoom::zoom_factor(host, &self.sheet, &self.config);
        {
            let mut view = self.view_mut();
            let root = bounding_rect(&*registry, &root_key, &view)?;
            let layer = bounding_rect(&*registry, &layer_key, &view)?;
            let dy = root.y0 - layer.y0 - view.view_box().height() / 2.0 + root.height();
            view.set_view_box_scroll_delta(0.0, dy);
            view.set_zoom_factor(zoom);
        }
        layout(model, registry)?;
        Ok(())
    }

    /// Handles a re-render: asks the host to re-center the root topic, then
    /// re-lays links.
    pub fn update<H, R>(
        &mut self,
        host: &mut H,
        registry: &mut R,
        model: &SheetModel,
    ) -> Result<LayoutPass>
    where
        H: Host + ?Sized,
        R: ElementRegistry + ?Sized,
    {
        if !self.is_mounted() {
            return Err(Error::NotMounted);
        }
        host.fire_event(&self.sheet, EventKey::CenterRootTopic);
        Ok(layout(model, registry)?)
    }

    /// Unmounts the viewport, detaching the view from the stored zoom.
    ///
    /// Queued tasks are dropped.
    pub fn unmount<H>(&mut self, host: &mut H) -> Result<()>
    where
        H: Host + ?Sized,
    {
        if !self.remove_zoom_listener(host) {
            return Err(Error::NotMounted);
        }
        self.deferred.clear();
        #[cfg(feature = "tracing")]
        tracing::debug!(sheet = %self.sheet, "unmounted");
        Ok(())
    }

    fn remove_zoom_listener<H>(&mut self, host: &mut H) -> bool
    where
        H: Host + ?Sized,
    {
        let Some(listener) = self.zoom_listener.take() else {
            return false;
        };
        zoom::remove_zoom_factor_change_listener(host, &self.sheet, &listener);
        true
    }

    /// Handles a wheel event: zooms when the platform modifier is held.
    ///
    /// Returns the new zoom, or `None` when the event did not zoom. Links are
    /// re-laid after a zoom change.
    pub fn on_wheel<H, R>(
        &mut self,
        host: &mut H,
        registry: &mut R,
        model: &SheetModel,
        ev: &WheelEvent,
    ) -> Result<Option<f64>>
    where
        H: Host + ?Sized,
        R: ElementRegistry + ?Sized,
    {
        let Some(zoom) = zoom::set_zoom_factor_on_wheel(host, &self.sheet, ev, &self.config) else {
            return Ok(None);
        };
        if !self.is_mounted() {
            // Nothing listens while unmounted; apply directly.
            self.view_mut().set_zoom_factor(zoom);
        }
        layout(model, registry)?;
        Ok(Some(zoom))
    }

    /// Starts a drag-scroll gesture.
    pub fn on_pointer_down(&mut self, pos: Point) {
        self.view_mut().pointer_down(pos);
    }

    /// Continues a drag-scroll gesture, re-laying links when the view moved.
    pub fn on_pointer_move<R>(
        &mut self,
        registry: &mut R,
        model: &SheetModel,
        pos: Point,
    ) -> Result<bool>
    where
        R: ElementRegistry + ?Sized,
    {
        let moved = self.view_mut().pointer_move(pos);
        if moved {
            layout(model, registry)?;
        }
        Ok(moved)
    }

    /// Ends a drag-scroll gesture.
    pub fn on_pointer_up(&mut self) {
        self.view_mut().pointer_up();
    }

    /// Renders the container around the editor root's widget.
    pub fn render<H>(&self, host: &mut H, model: &SheetModel) -> Result<ViewportFrame<H::Widget>>
    where
        H: Host + ?Sized,
    {
        let topic = model.require_topic(model.editor_root_topic_key())?;
        let root = host.render_root_widget(RootWidgetProps { model, topic });
        Ok(ViewportFrame {
            captures_wheel: true,
            scroll: ScrollFrame {
                ref_key: RefKey::DragScrollWidget(self.sheet.clone()),
                wheel_scroll: self.view().wheel_scroll_enabled(),
                node_layer: NodeLayerFrame {
                    ref_key: RefKey::NodeLayer(self.sheet.clone()),
                    root,
                },
            },
        })
    }

    /// Rect of the element under `key` relative to the whole canvas, in
    /// canvas units at the sheet's stored zoom.
    pub fn relative_rect<H, R>(&self, host: &H, registry: &R, key: &RefKey) -> Result<Rect>
    where
        H: Host + ?Sized,
        R: ElementRegistry + ?Sized,
    {
        measure::relative_rect(host, &self.sheet, &self.config, registry, key, &self.view())
    }

    /// Rect of the element under `key` relative to the visible window, in
    /// canvas units at the sheet's stored zoom.
    pub fn relative_rect_from_view_port<H, R>(
        &self,
        host: &H,
        registry: &R,
        key: &RefKey,
    ) -> Result<Rect>
    where
        H: Host + ?Sized,
        R: ElementRegistry + ?Sized,
    {
        measure::relative_rect_from_view_port(
            host,
            &self.sheet,
            &self.config,
            registry,
            key,
            &self.view(),
        )
    }

    /// Screen-pixel offset from the window's center to the center of the
    /// element under `key`.
    pub fn relative_vector_from_view_port<R>(&self, registry: &R, key: &RefKey) -> Result<Vec2>
    where
        R: ElementRegistry + ?Sized,
    {
        measure::relative_vector_from_view_port(registry, key, &self.view())
    }

    /// Hotkey bindings the viewport contributes for `model`.
    ///
    /// Only the current sheet contributes. Fails with
    /// [`Error::HotKeysConfig`] when the host customization is malformed.
    pub fn hot_keys<H>(&self, host: &mut H, model: &SheetModel) -> Result<Vec<HotKey>>
    where
        H: Host + ?Sized,
    {
        if !host.is_current_sheet(&self.sheet) {
            return Ok(Vec::new());
        }
        let Some(value) = host.customize_hot_keys(model) else {
            return Ok(Vec::new());
        };
        Ok(HotKeysConfig::from_value(&value)?
            .map(|config| config.hot_keys(model.focus_mode()))
            .unwrap_or_default())
    }

    /// Scrolls `topic_key` into place and re-lays links.
    pub fn move_topic_to_center<R>(
        &mut self,
        registry: &mut R,
        model: &SheetModel,
        topic_key: &TopicKey,
        dir: MoveDir,
    ) -> Result<Vec2>
    where
        R: ElementRegistry + ?Sized,
    {
        let delta = {
            let mut view = self.view_mut();
            center::move_topic_to_center(
                model,
                &*registry,
                &mut view,
                topic_key,
                dir,
                &self.config,
            )?
        };
        layout(model, registry)?;
        Ok(delta)
    }

    /// Focuses and reveals `topic_key` through the host, then queues centering
    /// on it for the next [`run_deferred`](Self::run_deferred).
    pub fn focus_topic_and_move_to_center<H>(
        &mut self,
        host: &mut H,
        topic_key: &TopicKey,
    ) where
        H: Host + ?Sized,
    {
        center::focus_topic_and_move_to_center(host, &mut self.deferred, &self.sheet, topic_key);
    }

    /// Runs queued tasks against `model`, oldest first.
    ///
    /// Tasks for a sheet that is no longer current are dropped silently. A
    /// failing task stops the run and is reported; later tasks stay queued.
    /// Returns how many tasks ran.
    pub fn run_deferred<H, R>(
        &mut self,
        host: &H,
        registry: &mut R,
        model: &SheetModel,
    ) -> Result<usize>
    where
        H: Host + ?Sized,
        R: ElementRegistry + ?Sized,
    {
        let mut ran = 0;
        while let Some(task) = self.deferred.pop() {
            if !host.is_current_sheet(task.sheet()) {
                continue;
            }
            match task {
                Task::CenterFocusTopic { .. } => {
                    if let Some(focus) = model.focus_key() {
                        self.move_topic_to_center(registry, model, focus, MoveDir::Center)?;
                    }
                }
                Task::CenterTopic { topic_key, .. } => {
                    self.move_topic_to_center(registry, model, &topic_key, MoveDir::Center)?;
                }
            }
            ran += 1;
        }
        Ok(ran)
    }
}
