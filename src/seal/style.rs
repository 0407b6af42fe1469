//! Per-style drawing strategies.
//!
//! The style is dispatched exactly once per render into a [`Plate`], which
//! fixes the clip, background, border, glyph color and whether noise applies.
//! Each constructor owns its style's rules: freehand never clips, only carved
//! fills the background, only raised draws a border ring.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use crate::consts::CARVED_GLYPH_COLOR;
use crate::geom::{Point, Size};

use super::config::{SealConfig, SealShape, SealStyle};

/// Closed outline used as a clip region and border path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClipShape {
    /// Rectangle covering the canvas with quadratic-curve corners.
    RoundedRect { size: Size, radius: f64 },
    /// Circle centered in the canvas.
    Circle { center: Point, radius: f64 },
    /// Axis-aligned ellipse centered in the canvas.
    Ellipse { center: Point, radii: Size },
}

impl ClipShape {
    /// Outline for `shape` on a canvas of `size`.
    #[must_use]
    pub fn for_canvas(shape: SealShape, size: Size, border_radius: f64) -> Self {
        match shape {
            SealShape::Rect => Self::RoundedRect {
                size,
                radius: border_radius.clamp(0.0, size.width.min(size.height) / 2.0),
            },
            SealShape::Circle => Self::Circle {
                center: size.center(),
                radius: size.width.min(size.height) / 2.0,
            },
            SealShape::Ellipse => Self::Ellipse {
                center: size.center(),
                radii: Size::new(size.width / 2.0, size.height / 2.0),
            },
        }
    }
}

/// A stroked outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub shape: ClipShape,
    pub color: String,
    pub width: f64,
}

/// Resolved drawing strategy for one style.
#[derive(Debug, Clone, PartialEq)]
pub struct Plate {
    /// Clip region active for all drawing; `None` for freehand.
    pub clip: Option<ClipShape>,
    /// Color filling the whole clipped canvas before glyphs.
    pub background: Option<String>,
    /// Border ring drawn along the clip outline.
    pub border: Option<Stroke>,
    /// Fill color for glyphs.
    pub glyph_color: String,
    /// Whether the noise texture is applied.
    pub textured: bool,
}

/// Resolve the strategy for `config.style`. Expects a sanitized config.
#[must_use]
pub fn plate(config: &SealConfig) -> Plate {
    match config.style {
        SealStyle::Carved => carved(config),
        SealStyle::Raised => raised(config),
        SealStyle::Freehand => freehand(config),
    }
}

fn clip_for(config: &SealConfig) -> ClipShape {
    ClipShape::for_canvas(config.shape, config.canvas_size, config.border_radius)
}

fn carved(config: &SealConfig) -> Plate {
    Plate {
        clip: Some(clip_for(config)),
        background: Some(config.color.clone()),
        border: None,
        glyph_color: CARVED_GLYPH_COLOR.to_owned(),
        textured: true,
    }
}

fn raised(config: &SealConfig) -> Plate {
    let clip = clip_for(config);
    let border = (config.show_border && config.border_thickness > 0.0).then(|| Stroke {
        shape: clip,
        color: config.color.clone(),
        width: config.border_thickness,
    });
    Plate {
        clip: Some(clip),
        background: None,
        border,
        glyph_color: config.color.clone(),
        textured: true,
    }
}

fn freehand(config: &SealConfig) -> Plate {
    Plate {
        clip: None,
        background: None,
        border: None,
        glyph_color: config.color.clone(),
        textured: false,
    }
}
