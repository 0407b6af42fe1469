use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlElement;

use crate::consts::ZOOM_STEP;
use crate::error::{ImageLoadError, js_error_message};
use crate::geom::{Point, Size};
use crate::image_source;
use crate::input::{Button, FocusTarget, Gesture, InteractionMode, Key, Modifiers};
use crate::viewport::{Transform, Viewport, fit_scale};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Zoom or pan changed; apply the new transform to the image layer.
    TransformChanged(Transform),
    /// The user asked to re-fit the current image (Ctrl/Cmd+0).
    ResetViewRequested,
    /// Compare mode turned on (show the original) or off (show the result).
    CompareChanged(bool),
    SetCursor(String),
}

/// Which image the host should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplaySource {
    /// The pre-edit upload.
    Original,
    /// The latest edited result.
    Result,
}

/// Viewport state machine. Everything that doesn't need the DOM.
///
/// Gesture updates that arrive without a matching begin are ignored, and any
/// end signal leaves the controller idle.
#[derive(Debug, Clone, Default)]
pub struct ViewportController {
    viewport: Viewport,
    gesture: Gesture,
    pan_mode: bool,
    space_held: bool,
    comparing: bool,
    has_result: bool,
    /// Natural size of the last successfully loaded image.
    image_size: Option<Size>,
    /// Bumped on every image identity change; loads tagged with an older
    /// generation are discarded.
    generation: u64,
}

impl ViewportController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Queries ---

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.viewport.zoom
    }

    #[must_use]
    pub fn pan(&self) -> Point {
        self.viewport.pan
    }

    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.viewport.min_zoom
    }

    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.gesture.mode()
    }

    #[must_use]
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        self.viewport.transform()
    }

    #[must_use]
    pub fn is_comparing(&self) -> bool {
        self.comparing
    }

    #[must_use]
    pub fn pan_mode(&self) -> bool {
        self.pan_mode
    }

    #[must_use]
    pub fn image_size(&self) -> Option<Size> {
        self.image_size
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Pan gestures from the mouse or a single touch are only recognized
    /// while pan mode is on or Space is held.
    #[must_use]
    pub fn pan_enabled(&self) -> bool {
        self.pan_mode || self.space_held
    }

    /// CSS cursor for the image container.
    #[must_use]
    pub fn cursor(&self) -> &'static str {
        match self.gesture {
            Gesture::Panning { .. } => "grabbing",
            _ if self.pan_enabled() => "grab",
            _ => "default",
        }
    }

    /// The image the host should show right now.
    #[must_use]
    pub fn display_source(&self) -> DisplaySource {
        if self.has_result && !self.comparing { DisplaySource::Result } else { DisplaySource::Original }
    }

    // --- Zoom ---

    /// Set zoom, clamped to `[min_zoom, max_zoom]`.
    pub fn set_zoom(&mut self, value: f64) -> Transform {
        self.viewport.set_zoom(value);
        self.transform()
    }

    pub fn zoom_in(&mut self) -> Transform {
        self.set_zoom(self.viewport.zoom + ZOOM_STEP)
    }

    pub fn zoom_out(&mut self) -> Transform {
        self.set_zoom(self.viewport.zoom - ZOOM_STEP)
    }

    /// Fit `image` inside `container`: the fit scale becomes both the zoom
    /// floor and the current zoom, and pan recenters.
    ///
    /// Returns `None` and leaves every piece of state untouched when either
    /// size is degenerate.
    pub fn fit_to_container(&mut self, container: Size, image: Size) -> Option<Transform> {
        let scale = fit_scale(container, image)?;
        log::debug!("fit {}x{} into {}x{} at {scale:.3}", image.width, image.height, container.width, container.height);
        self.viewport.fit(scale);
        self.image_size = Some(image);
        Some(self.transform())
    }

    /// Re-fit the current image, e.g. after a container resize or Ctrl+0.
    pub fn reset_view(&mut self, container: Size) -> Option<Transform> {
        let image = self.image_size?;
        self.fit_to_container(container, image)
    }

    // --- Image identity ---

    /// A new image is about to be shown. Returns the generation its load
    /// completion must carry.
    ///
    /// The previous image's size is forgotten; until the new one loads there
    /// is nothing to re-fit.
    pub fn set_image(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.gesture = Gesture::Idle;
        self.image_size = None;
        self.generation
    }

    /// Apply the outcome of an image load started under `generation`.
    ///
    /// Stale loads return `Ok(None)`. A failed load leaves zoom and pan as
    /// they were and returns the error.
    ///
    /// # Errors
    ///
    /// Returns the load error unchanged for the current generation.
    pub fn complete_image_load(
        &mut self,
        generation: u64,
        result: Result<Size, ImageLoadError>,
        container: Size,
    ) -> Result<Option<Transform>, ImageLoadError> {
        if generation != self.generation {
            log::debug!("discarding stale image load (gen {generation}, current {})", self.generation);
            return Ok(None);
        }
        let image = result?;
        Ok(self.fit_to_container(container, image))
    }

    /// Whether an edited result exists for compare mode to swap away from.
    pub fn set_has_result(&mut self, has_result: bool) -> Vec<Action> {
        self.has_result = has_result;
        if !has_result && self.comparing {
            self.comparing = false;
            return vec![Action::CompareChanged(false)];
        }
        Vec::new()
    }

    // --- Gesture primitives ---

    /// Start a pan anchored at `pointer`. Replaces any gesture in progress.
    pub fn begin_pan(&mut self, pointer: Point) {
        self.gesture = Gesture::Panning { start_pointer: pointer, start_pan: self.viewport.pan };
    }

    /// Move the pan so the image follows the pointer 1:1 in screen pixels.
    ///
    /// No-op unless a pan is in progress.
    pub fn update_pan(&mut self, pointer: Point) -> Option<Transform> {
        let Gesture::Panning { start_pointer, start_pan } = self.gesture else {
            return None;
        };
        self.viewport.pan = start_pan.offset_by(pointer.delta_from(start_pointer));
        Some(self.transform())
    }

    pub fn end_pan(&mut self) {
        if matches!(self.gesture, Gesture::Panning { .. }) {
            self.gesture = Gesture::Idle;
        }
    }

    /// Start a pinch between two touches. Cancels any pan in progress.
    ///
    /// Coincident touches give no usable distance and leave the controller idle.
    pub fn begin_pinch(&mut self, a: Point, b: Point) {
        let start_distance = a.distance(b);
        if start_distance <= 0.0 || !start_distance.is_finite() {
            self.gesture = Gesture::Idle;
            return;
        }
        log::debug!("pinch start at {start_distance:.1}px, zoom {:.3}", self.viewport.zoom);
        self.gesture = Gesture::Pinching {
            start_distance,
            start_mid: a.midpoint(b),
            start_zoom: self.viewport.zoom,
            start_pan: self.viewport.pan,
        };
    }

    /// Scale zoom by the ratio of the current to the starting touch distance.
    ///
    /// Zoom stays anchored at the container center; pan is left alone.
    /// No-op unless a pinch is in progress.
    pub fn update_pinch(&mut self, a: Point, b: Point) -> Option<Transform> {
        let Gesture::Pinching { start_distance, start_zoom, .. } = self.gesture else {
            return None;
        };
        let ratio = a.distance(b) / start_distance;
        self.viewport.set_zoom(start_zoom * ratio);
        Some(self.transform())
    }

    pub fn end_pinch(&mut self) {
        if matches!(self.gesture, Gesture::Pinching { .. }) {
            self.gesture = Gesture::Idle;
        }
    }

    /// Drop whatever gesture is in progress.
    pub fn cancel_gesture(&mut self) {
        self.gesture = Gesture::Idle;
    }

    // --- Pan mode ---

    pub fn toggle_pan_mode(&mut self) -> Vec<Action> {
        self.pan_mode = !self.pan_mode;
        if !self.pan_enabled() {
            self.end_pan();
        }
        vec![self.cursor_action()]
    }

    // --- Pointer events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary || !self.pan_enabled() {
            return Vec::new();
        }
        self.begin_pan(screen_pt);
        vec![self.cursor_action()]
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.update_pan(screen_pt).map(Action::TransformChanged).into_iter().collect()
    }

    pub fn on_pointer_up(&mut self, _screen_pt: Point, _button: Button) -> Vec<Action> {
        self.end_gesture()
    }

    /// The pointer left the container; treated as a release.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.end_gesture()
    }

    // --- Touch events ---

    /// `touches` is the full list of active touches after the change.
    pub fn on_touch_start(&mut self, touches: &[Point]) -> Vec<Action> {
        match touches {
            [a, b, ..] => {
                let was_panning = self.mode() == InteractionMode::Panning;
                self.begin_pinch(*a, *b);
                if was_panning { vec![self.cursor_action()] } else { Vec::new() }
            }
            [only] if self.gesture == Gesture::Idle && self.pan_enabled() => {
                self.begin_pan(*only);
                vec![self.cursor_action()]
            }
            _ => Vec::new(),
        }
    }

    pub fn on_touch_move(&mut self, touches: &[Point]) -> Vec<Action> {
        let transform = match touches {
            [a, b, ..] => self.update_pinch(*a, *b),
            [only] => self.update_pan(*only),
            [] => None,
        };
        transform.map(Action::TransformChanged).into_iter().collect()
    }

    /// `remaining` is the number of touches still down.
    ///
    /// A pinch that drops below two touches ends without resuming a pan.
    pub fn on_touch_end(&mut self, remaining: usize) -> Vec<Action> {
        if remaining == 0 {
            return self.end_gesture();
        }
        if remaining < 2 {
            self.end_pinch();
        }
        Vec::new()
    }

    // --- Keyboard ---

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers, focus: FocusTarget) -> Vec<Action> {
        if focus == FocusTarget::TextInput {
            return Vec::new();
        }
        if modifiers.command() && key.0 == "0" {
            return vec![Action::ResetViewRequested];
        }
        if !key.is_space() || self.space_held {
            return Vec::new();
        }

        self.space_held = true;
        let mut actions = Vec::new();
        if self.has_result && !self.comparing {
            self.comparing = true;
            actions.push(Action::CompareChanged(true));
        }
        actions.push(self.cursor_action());
        actions
    }

    pub fn on_key_up(&mut self, key: &Key) -> Vec<Action> {
        if !key.is_space() || !self.space_held {
            return Vec::new();
        }

        self.space_held = false;
        let mut actions = Vec::new();
        if self.comparing {
            self.comparing = false;
            actions.push(Action::CompareChanged(false));
        }
        if !self.pan_enabled() {
            self.end_pan();
        }
        actions.push(self.cursor_action());
        actions
    }

    // --- Helpers ---

    fn end_gesture(&mut self) -> Vec<Action> {
        if self.gesture == Gesture::Idle {
            return Vec::new();
        }
        self.gesture = Gesture::Idle;
        vec![self.cursor_action()]
    }

    fn cursor_action(&self) -> Action {
        Action::SetCursor(self.cursor().to_owned())
    }
}

/// Browser image viewer. Wraps a [`ViewportController`] and owns the container
/// and the transformed image layer.
///
/// The controller sits behind `Rc<RefCell<_>>` so a pending image load can
/// hold it across an `await` without blocking input handling; no borrow is
/// ever held across a suspension point.
pub struct ImageViewer {
    container: HtmlElement,
    layer: HtmlElement,
    controller: Rc<RefCell<ViewportController>>,
}

impl ImageViewer {
    /// Create a viewer. `layer` is the element that receives the CSS transform.
    #[must_use]
    pub fn new(container: HtmlElement, layer: HtmlElement) -> Self {
        Self { container, layer, controller: Rc::new(RefCell::new(ViewportController::new())) }
    }

    /// Run `f` against the controller.
    pub fn with_controller<R>(&self, f: impl FnOnce(&mut ViewportController) -> R) -> R {
        f(&mut self.controller.borrow_mut())
    }

    /// Current container size in CSS pixels.
    #[must_use]
    pub fn container_size(&self) -> Size {
        Size::new(f64::from(self.container.client_width()), f64::from(self.container.client_height()))
    }

    /// Load `url`, wait for decode, and fit it to the container.
    ///
    /// If another `show_image` starts before this one finishes, this load's
    /// result is discarded.
    ///
    /// # Errors
    ///
    /// Returns the load error; zoom and pan are left as they were.
    pub async fn show_image(&self, url: &str) -> Result<(), ImageLoadError> {
        let generation = self.controller.borrow_mut().set_image();
        let loaded = image_source::load_natural_size(url).await;
        let container = self.container_size();
        let outcome = self.controller.borrow_mut().complete_image_load(generation, loaded, container);
        match outcome {
            Ok(Some(transform)) => {
                self.apply_transform(transform);
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(err) => {
                log::warn!("image load failed, keeping current view: {err}");
                Err(err)
            }
        }
    }

    /// Re-fit the current image to the container.
    pub fn reset_view(&self) {
        let container = self.container_size();
        let fitted = self.controller.borrow_mut().reset_view(container);
        match fitted {
            Some(transform) => self.apply_transform(transform),
            None => log::debug!("reset view skipped: no image or empty container"),
        }
    }

    /// Apply the DOM side of controller actions. Compare changes are left to
    /// the host, which owns the image sources.
    pub fn apply(&self, actions: &[Action]) {
        for action in actions {
            match action {
                Action::TransformChanged(transform) => self.apply_transform(*transform),
                Action::ResetViewRequested => self.reset_view(),
                Action::SetCursor(cursor) => set_style(&self.container, "cursor", cursor),
                Action::CompareChanged(_) => {}
            }
        }
    }

    fn apply_transform(&self, transform: Transform) {
        set_style(&self.layer, "transform", &transform.css());
    }
}

fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = el.style().set_property(property, value) {
        log::warn!("failed to set {property}: {}", js_error_message(&err));
    }
}
