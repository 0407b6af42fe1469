//! Seal configuration as edited in the watermark panel.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_INK, MAX_CANVAS_EDGE, MIN_CANVAS_EDGE};
use crate::geom::Size;

/// Default font stack (brush calligraphy with a cursive fallback).
pub const DEFAULT_FONT: &str = "\"Ma Shan Zheng\", cursive";

/// Ink convention for the plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SealStyle {
    /// Filled plate with characters cut away (white glyphs).
    #[default]
    #[serde(alias = "yin")]
    Carved,
    /// Transparent plate with inked glyphs and an optional border ring.
    #[serde(alias = "yang")]
    Raised,
    /// No plate, no clip, no border: a signature-like mark.
    #[serde(alias = "signature")]
    Freehand,
}

/// Outline of the plate. Ignored for [`SealStyle::Freehand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SealShape {
    /// Rounded rectangle using `border_radius`.
    #[default]
    #[serde(alias = "square")]
    Rect,
    /// Circle inscribed in the canvas.
    Circle,
    /// Ellipse filling the canvas.
    #[serde(alias = "oval")]
    Ellipse,
}

/// How text is broken into lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SealLayout {
    /// Distribute characters into balanced columns/rows.
    #[default]
    Grid,
    /// Everything on one line.
    Single,
}

/// Reading direction of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Columns, read top-to-bottom, right-to-left.
    #[default]
    Vertical,
    /// Rows, read left-to-right, top-to-bottom.
    Horizontal,
}

/// Anchor of text within the safe area along the reading direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Start,
    #[default]
    Center,
    End,
}

/// Everything needed to render one seal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SealConfig {
    pub text: String,
    pub canvas_size: Size,
    pub font_size_percent: f64,
    /// Gap between glyph cells; negative values overlap.
    pub spacing: f64,
    /// Speckle density, 0–100.
    pub noise_intensity: f64,
    pub border_radius: f64,
    pub border_thickness: f64,
    pub show_border: bool,
    pub color: String,
    pub font_family: String,
    pub style: SealStyle,
    pub shape: SealShape,
    pub layout: SealLayout,
    pub direction: Direction,
    pub alignment: Alignment,
}

impl Default for SealConfig {
    fn default() -> Self {
        Self {
            text: "伊凡水墨".to_owned(),
            canvas_size: Size::new(300.0, 350.0),
            font_size_percent: 90.0,
            spacing: 10.0,
            noise_intensity: 0.0,
            border_radius: 4.0,
            border_thickness: 6.0,
            show_border: false,
            color: DEFAULT_INK.to_owned(),
            font_family: DEFAULT_FONT.to_owned(),
            style: SealStyle::Carved,
            shape: SealShape::Rect,
            layout: SealLayout::Grid,
            direction: Direction::Vertical,
            alignment: Alignment::Center,
        }
    }
}

impl SealConfig {
    /// Copy of this config with every numeric field forced into a drawable range.
    ///
    /// Live editing produces transient nonsense (empty width field, negative
    /// thickness); rendering clamps instead of failing.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let mut out = self.clone();
        out.canvas_size = Size::new(clamp_edge(self.canvas_size.width), clamp_edge(self.canvas_size.height));
        out.font_size_percent = finite_or(self.font_size_percent, 100.0).max(0.0);
        out.spacing = finite_or(self.spacing, 0.0);
        out.noise_intensity = finite_or(self.noise_intensity, 0.0).clamp(0.0, 100.0);
        out.border_radius = finite_or(self.border_radius, 0.0).max(0.0);
        out.border_thickness = finite_or(self.border_thickness, 0.0).max(0.0);
        if out.color.trim().is_empty() {
            out.color = DEFAULT_INK.to_owned();
        }
        if out.font_family.trim().is_empty() {
            out.font_family = DEFAULT_FONT.to_owned();
        }
        out
    }

    /// Whether the plate is clipped to `shape`.
    #[must_use]
    pub fn is_clipped(&self) -> bool {
        self.style != SealStyle::Freehand
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

fn clamp_edge(value: f64) -> f64 {
    finite_or(value, MIN_CANVAS_EDGE).clamp(MIN_CANVAS_EDGE, MAX_CANVAS_EDGE)
}
