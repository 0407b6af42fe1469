#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::consts::{DEFAULT_MIN_ZOOM, MAX_ZOOM};
use crate::geom::{Point, Size};

/// Zoom/pan state for the displayed image.
///
/// `pan` is in unscaled CSS pixels and is applied after scaling, matching the
/// host's `scale(zoom) translate(pan)` transform with a centered origin. Pan is
/// never clamped, so the image can be dragged fully off-screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    pub pan: Point,
    /// Fit-to-container scale of the current image; the zoom floor.
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { zoom: 1.0, pan: Point::default(), min_zoom: DEFAULT_MIN_ZOOM, max_zoom: MAX_ZOOM }
    }
}

/// Snapshot of the transform the host applies to the image layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub zoom: f64,
    pub pan: Point,
}

impl Transform {
    /// CSS `transform` value: scale first, then translate in unscaled units.
    #[must_use]
    pub fn css(&self) -> String {
        format!("scale({}) translate({}px, {}px)", self.zoom, self.pan.x, self.pan.y)
    }
}

impl Viewport {
    /// Clamp `value` into `[min_zoom, max_zoom]`. Non-finite input keeps the current zoom.
    #[must_use]
    pub fn clamp_zoom(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.zoom;
        }
        value.clamp(self.min_zoom, self.max_zoom.max(self.min_zoom))
    }

    /// Set zoom, clamped.
    pub fn set_zoom(&mut self, value: f64) {
        self.zoom = self.clamp_zoom(value);
    }

    /// Make `scale` the zoom floor and current zoom, and recenter.
    pub fn fit(&mut self, scale: f64) {
        self.min_zoom = scale;
        self.zoom = scale;
        self.pan = Point::default();
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform { zoom: self.zoom, pan: self.pan }
    }
}

/// Largest scale at which `image` fits entirely inside `container`.
///
/// Returns `None` when either size is degenerate.
#[must_use]
pub fn fit_scale(container: Size, image: Size) -> Option<f64> {
    if !container.is_positive() || !image.is_positive() {
        return None;
    }
    Some((container.width / image.width).min(container.height / image.height))
}
